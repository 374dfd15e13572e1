//! Закрытие всплывающих элементов по клику вне области

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Calls `handler` on every `pointerdown` whose target lies outside `region`.
///
/// The window listener lives as long as the reactive owner that registered it.
pub fn on_pointer_down_outside<F>(region: NodeRef<Div>, handler: F)
where
    F: Fn() + 'static,
{
    let handle = window_event_listener(ev::pointerdown, move |event| {
        let Some(root) = region.get_untracked() else {
            return;
        };
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| root.contains(Some(&node)));
        if !inside {
            handler();
        }
    });
    on_cleanup(move || handle.remove());
}

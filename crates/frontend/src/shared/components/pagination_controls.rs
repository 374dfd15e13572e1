use crate::shared::filtered_page::page_range::DEFAULT_SIBLINGS;
use crate::shared::filtered_page::{next_page, page_range, previous_page, PageItem};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - numbered pagination with ellipses
///
/// `on_page_change` only ever receives a page inside `1..=total_pages`:
/// the previous/next buttons at the bounds are disabled no-ops.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items, if the server reports it
    #[prop(optional, into)]
    total_count: Option<Signal<Option<u64>>>,

    /// Pages shown on each side of the current one
    #[prop(optional)]
    siblings: Option<u32>,

    /// Блокирует кнопки, пока страницы не соответствуют текущим фильтрам
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let siblings = siblings.unwrap_or(DEFAULT_SIBLINGS);
    let disabled = disabled.unwrap_or_else(|| Signal::derive(|| false));

    let go_previous = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(page) = previous_page(current_page.get()) {
            on_page_change.run(page);
        }
    };

    let go_next = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(page) = next_page(current_page.get(), total_pages.get()) {
            on_page_change.run(page);
        }
    };

    let buttons = move || {
        let current = current_page.get();
        page_range(current, total_pages.get(), siblings)
            .into_iter()
            .map(|item| match item {
                PageItem::Page(page) => view! {
                    <button
                        class={if page == current { "pagination-btn pagination-btn--active" } else { "pagination-btn" }}
                        aria-current={(page == current).then_some("page")}
                        disabled=move || disabled.get()
                        on:click=move |_| {
                            if page != current_page.get_untracked() && !disabled.get_untracked() {
                                on_page_change.run(page);
                            }
                        }
                    >
                        {page}
                    </button>
                }
                .into_any(),
                PageItem::Dots => view! { <span class="pagination-dots">"…"</span> }.into_any(),
            })
            .collect_view()
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=go_previous
                disabled=move || disabled.get() || previous_page(current_page.get()).is_none()
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            {buttons}
            <button
                class="pagination-btn"
                on:click=go_next
                disabled=move || disabled.get() || next_page(current_page.get(), total_pages.get()).is_none()
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
            {move || total_count.and_then(|c| c.get()).map(|count| view! {
                <span class="pagination-info">{format!("{} registros", count)}</span>
            })}
        </div>
    }
}

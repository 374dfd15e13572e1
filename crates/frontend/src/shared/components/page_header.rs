use leptos::prelude::*;

/// Заголовок экрана списка с индикатором фоновой загрузки
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Идёт загрузка поверх уже показанных данных
    #[prop(optional, into)]
    busy: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let busy = busy.unwrap_or_else(|| Signal::derive(|| false));

    view! {
        <header class="page-header">
            <div class="page-header__titles">
                <h1>{title}</h1>
                {subtitle.map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
            </div>
            <span class="page-header__busy" class:hidden=move || !busy.get()>
                "Cargando..."
            </span>
            <div class="page-header__actions">{children()}</div>
        </header>
    }
}

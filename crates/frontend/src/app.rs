use crate::domain::a003_insumo::ui::list::InsumoList;
use crate::shared::notice::{NoticeHost, NoticeService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Уведомления об ошибках загрузки для всех экранов
    provide_context(NoticeService::new());

    view! {
        <main class="app-main">
            <InsumoList />
        </main>
        <NoticeHost />
    }
}

use super::state::{FilteredPageState, PageApply, PageTicket};
use crate::shared::config::FilteredPageConfig;
use crate::shared::debounce::{Dispatcher, Scheduler};
use crate::shared::notice::use_notices;
use crate::shared::providers::ListProvider;
use contracts::shared::{Filters, PageQuery, PaginationView};
use leptos::logging::log;
use leptos::prelude::*;
use std::rc::Rc;

/// Подписчики на принятые ответы (например, синхронизация с URL)
#[derive(Clone, Copy, Default)]
pub struct PageListeners {
    pub on_page_change: Option<Callback<u32>>,
    pub on_filters_change: Option<Callback<Filters>>,
}

/// Фильтры уходят через debounce
fn queue_filters<T, S: Scheduler>(
    state: &mut FilteredPageState<T>,
    dispatcher: &mut Dispatcher<PageTicket, S>,
    partial: &Filters,
) {
    dispatcher.debounced(state.set_filters(partial));
}

/// Явный переход по странице уходит сразу и отменяет ожидающие фильтры;
/// их изменения уже лежат в запросе.
fn go_to_page<T, S: Scheduler>(
    state: &mut FilteredPageState<T>,
    dispatcher: &mut Dispatcher<PageTicket, S>,
    page: u32,
) {
    if let Some(ticket) = state.set_page(page) {
        dispatcher.immediate(ticket);
    }
}

fn reload<T, S: Scheduler>(
    state: &mut FilteredPageState<T>,
    dispatcher: &mut Dispatcher<PageTicket, S>,
) {
    dispatcher.immediate(state.refresh());
}

/// Контроллер списка: фильтры с debounce, немедленная пагинация.
///
/// A `Copy` handle over reactive state; create it inside the screen component
/// so it is disposed together with the screen.
pub struct FilteredPage<T: Send + Sync + 'static> {
    state: RwSignal<FilteredPageState<T>>,
    dispatcher: StoredValue<Dispatcher<PageTicket>, LocalStorage>,
    siblings: u32,
}

impl<T: Send + Sync + 'static> Clone for FilteredPage<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FilteredPage<T> {}

impl<T: Clone + Send + Sync + 'static> FilteredPage<T> {
    pub fn new<P>(
        provider: P,
        config: FilteredPageConfig,
        initial: PageQuery,
        listeners: PageListeners,
    ) -> Self
    where
        P: ListProvider<Item = T> + 'static,
    {
        let state = RwSignal::new(FilteredPageState::new(initial));
        let provider = Rc::new(provider);
        let notices = use_notices();

        let fetch = move |ticket: PageTicket| {
            let provider = provider.clone();
            log!(
                "list {} page={} filters={}",
                ticket.token,
                ticket.query.page,
                ticket.query.filters.len()
            );
            wasm_bindgen_futures::spawn_local(async move {
                let response = ticket.run(&*provider).await;
                let token = response.token;
                let outcome = state
                    .try_update(|s| s.apply(response))
                    .unwrap_or(PageApply::Stale);
                match outcome {
                    PageApply::Applied(query) => {
                        if let Some(cb) = listeners.on_page_change {
                            cb.run(query.page);
                        }
                        if let Some(cb) = listeners.on_filters_change {
                            cb.run(query.filters);
                        }
                    }
                    PageApply::Stale => log!("list {} superseded, response dropped", token),
                    PageApply::Failed(err) => {
                        log::error!("list {} failed: {}", token, err);
                        if let Some(notices) = notices {
                            notices.error(format!("No se pudo cargar la lista: {err}"));
                        }
                    }
                }
            });
        };

        Self {
            state,
            dispatcher: StoredValue::new_local(Dispatcher::new(config.debounce, fetch)),
            siblings: config.siblings,
        }
    }

    /// Первая загрузка или повтор после ошибки
    pub fn refresh(&self) {
        let dispatcher = self.dispatcher;
        self.state
            .update(|s| dispatcher.update_value(|d| reload(s, d)));
    }

    /// Сливает фильтры, сбрасывает страницу на 1 и загружает после паузы
    pub fn set_filters(&self, partial: Filters) {
        let dispatcher = self.dispatcher;
        self.state
            .update(|s| dispatcher.update_value(|d| queue_filters(s, d, &partial)));
    }

    /// Явный переход по странице загружается сразу; вне диапазона — no-op
    pub fn set_page(&self, page: u32) {
        let dispatcher = self.dispatcher;
        self.state
            .update(|s| dispatcher.update_value(|d| go_to_page(s, d, page)));
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items().to_vec())
    }

    pub fn view(&self) -> PaginationView {
        self.state.with(|s| s.view())
    }

    pub fn total_count(&self) -> Option<u64> {
        self.state.with(|s| s.total_count())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn is_loaded(&self) -> bool {
        self.state.with(|s| s.is_loaded())
    }

    /// Пагинация недоступна, пока не пришёл ответ для новых фильтров
    pub fn filters_pending(&self) -> bool {
        self.state.with(|s| s.filters_pending())
    }

    pub fn siblings(&self) -> u32 {
        self.siblings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::debounce::manual_clock::ManualClock;
    use crate::shared::debounce::DebounceDelay;
    use crate::shared::providers::ProviderError;
    use async_trait::async_trait;
    use contracts::shared::ListPage;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use serde_json::json;
    use std::cell::RefCell;

    /// Список, который отвечает сразу и запоминает запросы
    #[derive(Default)]
    struct RecordingList {
        requested: RefCell<Vec<PageQuery>>,
    }

    #[async_trait(?Send)]
    impl ListProvider for RecordingList {
        type Item = u32;

        async fn list(&self, page: u32, filters: &Filters) -> Result<ListPage<u32>, ProviderError> {
            self.requested
                .borrow_mut()
                .push(PageQuery::new(page, filters.clone()));
            Ok(ListPage {
                items: vec![page],
                current_page: page,
                total_pages: 10,
                total_count: None,
            })
        }
    }

    struct Harness {
        pool: LocalPool,
        clock: ManualClock,
        provider: Rc<RecordingList>,
        state: Rc<RefCell<FilteredPageState<u32>>>,
        dispatcher: Dispatcher<PageTicket, ManualClock>,
    }

    impl Harness {
        fn new() -> Self {
            let pool = LocalPool::new();
            let clock = ManualClock::default();
            let provider = Rc::new(RecordingList::default());
            let state = Rc::new(RefCell::new(FilteredPageState::new(PageQuery::default())));

            let spawner = pool.spawner();
            let sink_state = state.clone();
            let sink_provider = provider.clone();
            let dispatcher = Dispatcher::with_scheduler(
                clock.clone(),
                DebounceDelay::new(500).unwrap(),
                move |ticket: PageTicket| {
                    let state = sink_state.clone();
                    let provider = sink_provider.clone();
                    spawner
                        .spawn_local(async move {
                            let response = ticket.run(&*provider).await;
                            state.borrow_mut().apply(response);
                        })
                        .unwrap();
                },
            );

            Self {
                pool,
                clock,
                provider,
                state,
                dispatcher,
            }
        }

        fn refresh(&mut self) {
            reload(&mut self.state.borrow_mut(), &mut self.dispatcher);
            self.pool.run_until_stalled();
        }

        fn set_filters(&mut self, partial: Filters) {
            queue_filters(&mut self.state.borrow_mut(), &mut self.dispatcher, &partial);
            self.pool.run_until_stalled();
        }

        fn set_page(&mut self, page: u32) {
            go_to_page(&mut self.state.borrow_mut(), &mut self.dispatcher, page);
            self.pool.run_until_stalled();
        }

        fn advance(&mut self, millis: u64) {
            self.clock.advance(millis);
            self.pool.run_until_stalled();
        }

        fn requested(&self) -> Vec<PageQuery> {
            self.provider.requested.borrow().clone()
        }
    }

    #[test]
    fn test_refresh_loads_immediately() {
        let mut h = Harness::new();
        h.refresh();

        assert_eq!(h.requested(), vec![PageQuery::default()]);
        assert!(h.state.borrow().is_loaded());
    }

    #[test]
    fn test_filter_burst_sends_one_request_for_page_one() {
        let mut h = Harness::new();
        h.refresh();
        h.set_page(4);

        for q in ["a", "ar", "arr"] {
            h.set_filters(Filters::new().with("q", q));
            h.advance(100);
        }
        assert_eq!(h.requested().len(), 2);

        h.advance(500);
        let requested = h.requested();
        assert_eq!(requested.len(), 3);
        assert_eq!(requested[2].page, 1);
        assert_eq!(requested[2].filters.get("q"), Some(&json!("arr")));
    }

    #[test]
    fn test_page_click_is_immediate() {
        let mut h = Harness::new();
        h.refresh();

        h.set_page(3);
        assert_eq!(h.requested().last().map(|q| q.page), Some(3));
        assert_eq!(h.clock.pending(), 0);
    }

    #[test]
    fn test_page_one_click_cancels_pending_filter_debounce() {
        let mut h = Harness::new();
        h.refresh();
        h.set_page(5);

        h.set_filters(Filters::new().with("categoriaId", 2));
        h.set_page(7);
        assert_eq!(h.requested().len(), 2);

        h.set_page(1);
        assert_eq!(h.clock.pending(), 0);
        h.advance(1_000);

        let requested = h.requested();
        assert_eq!(requested.len(), 3);
        assert_eq!(requested[2].page, 1);
        assert_eq!(requested[2].filters.get("categoriaId"), Some(&json!(2)));
    }
}

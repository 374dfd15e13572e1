//! Состояние постраничного списка с фильтрами
//!
//! Keeps the pending `{page, filters}` intent, the items and pagination of the
//! last accepted response, and the token discipline shared with the search
//! combobox: a response is applied only if no newer request was issued.

use crate::shared::debounce::{RequestToken, TokenSource};
use crate::shared::providers::{ListProvider, ProviderError};
use contracts::shared::{Filters, ListPage, PageQuery, PaginationView};

/// Запрос страницы, выпущенный состоянием
#[derive(Debug, Clone, PartialEq)]
pub struct PageTicket {
    pub token: RequestToken,
    pub query: PageQuery,
}

impl PageTicket {
    pub async fn run<P>(self, provider: &P) -> PageResponse<P::Item>
    where
        P: ListProvider + ?Sized,
    {
        let result = provider.list(self.query.page, &self.query.filters).await;
        PageResponse {
            token: self.token,
            result,
        }
    }
}

#[derive(Debug)]
pub struct PageResponse<T> {
    pub token: RequestToken,
    pub result: Result<ListPage<T>, ProviderError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageApply {
    /// Ответ принят; запрос с номером страницы от сервера
    Applied(PageQuery),
    Stale,
    /// Ошибка; прежние данные на экране сохранены
    Failed(ProviderError),
}

#[derive(Debug, Clone)]
pub struct FilteredPageState<T> {
    query: PageQuery,
    items: Vec<T>,
    view: PaginationView,
    total_count: Option<u64>,
    loading: bool,
    loaded: bool,
    filters_pending: bool,
    last_error: Option<ProviderError>,
    tokens: TokenSource,
}

impl<T> FilteredPageState<T> {
    pub fn new(initial: PageQuery) -> Self {
        Self {
            query: initial,
            items: Vec::new(),
            view: PaginationView::default(),
            total_count: None,
            loading: false,
            loaded: false,
            filters_pending: false,
            last_error: None,
            tokens: TokenSource::new(),
        }
    }

    pub fn query(&self) -> &PageQuery {
        &self.query
    }

    pub fn filters(&self) -> &Filters {
        &self.query.filters
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn view(&self) -> PaginationView {
        self.view
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// `true` after the first accepted response.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Фильтры изменены, а ответ для них ещё не принят: `view` описывает
    /// прежний набор результатов.
    pub fn filters_pending(&self) -> bool {
        self.filters_pending
    }

    pub fn last_error(&self) -> Option<&ProviderError> {
        self.last_error.as_ref()
    }

    /// Изменение фильтров всегда возвращает на первую страницу
    pub fn set_filters(&mut self, partial: &Filters) -> PageTicket {
        self.query.filters.merge(partial);
        self.query.page = 1;
        self.filters_pending = true;
        self.issue()
    }

    /// Переход на страницу. Вне `1..=total_pages` — no-op.
    ///
    /// While new filters await their first response only page 1 is valid.
    pub fn set_page(&mut self, page: u32) -> Option<PageTicket> {
        let allowed = if self.filters_pending {
            page == 1
        } else {
            self.view.contains(page)
        };
        if !allowed {
            return None;
        }
        self.query.page = page;
        Some(self.issue())
    }

    /// Повторная загрузка текущего запроса (первая загрузка, ручной повтор)
    pub fn refresh(&mut self) -> PageTicket {
        self.issue()
    }

    fn issue(&mut self) -> PageTicket {
        self.loading = true;
        PageTicket {
            token: self.tokens.mint(),
            query: self.query.clone(),
        }
    }

    /// Список заменяется целиком, пагинация берётся из ответа сервера
    pub fn apply(&mut self, response: PageResponse<T>) -> PageApply {
        if !self.tokens.is_current(response.token) {
            return PageApply::Stale;
        }

        self.loading = false;
        match response.result {
            Ok(page) => {
                let page = page.normalized();
                self.view = page.view();
                self.total_count = page.total_count;
                self.items = page.items;
                self.query.page = self.view.current_page;
                self.loaded = true;
                self.filters_pending = false;
                self.last_error = None;
                PageApply::Applied(self.query.clone())
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                PageApply::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    fn list_page(items: Vec<&'static str>, current_page: u32, total_pages: u32) -> ListPage<&'static str> {
        ListPage {
            items,
            current_page,
            total_pages,
            total_count: None,
        }
    }

    fn accept(
        state: &mut FilteredPageState<&'static str>,
        ticket: PageTicket,
        page: ListPage<&'static str>,
    ) -> PageApply {
        state.apply(PageResponse {
            token: ticket.token,
            result: Ok(page),
        })
    }

    /// Состояние на странице `current` из `total`
    fn on_page(current: u32, total: u32) -> FilteredPageState<&'static str> {
        let mut state = FilteredPageState::new(PageQuery::default());
        let ticket = state.refresh();
        accept(&mut state, ticket, list_page(vec!["x"], current, total));
        state
    }

    type Reply = Result<ListPage<&'static str>, ProviderError>;

    struct ScriptedList {
        replies: RefCell<VecDeque<oneshot::Receiver<Reply>>>,
        requested: RefCell<Vec<PageQuery>>,
    }

    #[async_trait(?Send)]
    impl ListProvider for ScriptedList {
        type Item = &'static str;

        async fn list(&self, page: u32, filters: &Filters) -> Reply {
            self.requested
                .borrow_mut()
                .push(PageQuery::new(page, filters.clone()));
            let reply = self.replies.borrow_mut().pop_front();
            match reply {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ProviderError::Network("dropped".into()))),
                None => Err(ProviderError::Network("no scripted reply".into())),
            }
        }
    }

    #[test]
    fn test_filter_change_restarts_at_page_one() {
        let mut state = on_page(4, 10);
        assert_eq!(state.query().page, 4);

        let ticket = state.set_filters(&Filters::new().with("categoriaId", 2));
        assert_eq!(ticket.query.page, 1);
        assert_eq!(ticket.query.filters.get("categoriaId"), Some(&json!(2)));
        assert!(state.is_loading());
    }

    #[test]
    fn test_server_clamp_is_authoritative() {
        let mut state = on_page(3, 5);

        let ticket = state.set_filters(&Filters::new().with("q", "arroz"));
        let outcome = accept(&mut state, ticket, list_page(vec!["Arroz"], 1, 1));

        assert_eq!(state.view(), PaginationView::new(1, 1));
        assert_eq!(state.query().page, 1);
        match outcome {
            PageApply::Applied(query) => assert_eq!(query.page, 1),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_server_may_return_other_page_than_requested() {
        let mut state = on_page(2, 8);
        let ticket = state.set_page(8).unwrap();
        accept(&mut state, ticket, list_page(vec!["z"], 6, 6));

        assert_eq!(state.view(), PaginationView::new(6, 6));
        assert_eq!(state.query().page, 6);
    }

    #[test]
    fn test_set_page_out_of_range_is_noop() {
        let mut state = on_page(1, 3);

        assert!(state.set_page(0).is_none());
        assert!(state.set_page(4).is_none());
        assert!(!state.is_loading());
        assert_eq!(state.query().page, 1);

        let ticket = state.set_page(3).unwrap();
        assert_eq!(ticket.query.page, 3);
    }

    #[test]
    fn test_set_page_before_first_load() {
        let mut state = FilteredPageState::<&'static str>::new(PageQuery::default());
        assert!(state.set_page(2).is_none());
        assert!(state.set_page(1).is_some());
    }

    #[test]
    fn test_items_are_replaced_not_appended() {
        let mut state = on_page(1, 3);
        let ticket = state.set_page(2).unwrap();
        accept(&mut state, ticket, list_page(vec!["b1", "b2"], 2, 3));

        assert_eq!(state.items(), &["b1", "b2"]);
    }

    #[test]
    fn test_failure_keeps_previous_page() {
        let mut state = on_page(2, 4);
        let ticket = state.set_page(3).unwrap();

        let outcome = state.apply(PageResponse {
            token: ticket.token,
            result: Err(ProviderError::Status(503)),
        });

        assert_eq!(outcome, PageApply::Failed(ProviderError::Status(503)));
        assert_eq!(state.items(), &["x"]);
        assert_eq!(state.view(), PaginationView::new(2, 4));
        assert!(!state.is_loading());
        assert_eq!(state.last_error(), Some(&ProviderError::Status(503)));

        // the next user action is the retry
        let retry = state.set_page(3).unwrap();
        accept(&mut state, retry, list_page(vec!["c"], 3, 4));
        assert!(state.last_error().is_none());
    }

    #[test]
    fn test_stale_response_keeps_loading_flag() {
        let mut state = on_page(1, 5);
        let first = state.set_page(2).unwrap();
        let second = state.set_page(3).unwrap();

        assert_eq!(
            accept(&mut state, first, list_page(vec!["b"], 2, 5)),
            PageApply::Stale
        );
        assert!(state.is_loading());
        assert_eq!(state.items(), &["x"]);

        accept(&mut state, second, list_page(vec!["c"], 3, 5));
        assert!(!state.is_loading());
        assert_eq!(state.items(), &["c"]);
    }

    #[test]
    fn test_last_intent_wins_with_reordered_responses() {
        let mut pool = LocalPool::new();
        let (tx_a, rx_a) = oneshot::channel();
        let (tx_b, rx_b) = oneshot::channel();
        let provider = Rc::new(ScriptedList {
            replies: RefCell::new(vec![rx_a, rx_b].into()),
            requested: RefCell::new(Vec::new()),
        });
        let state = Rc::new(RefCell::new(on_page(2, 9)));

        let ticket_a = state.borrow_mut().set_filters(&Filters::new().with("q", "pa"));
        let ticket_b = state.borrow_mut().set_filters(&Filters::new().with("q", "pan"));
        for ticket in [ticket_a, ticket_b] {
            let state = state.clone();
            let provider = provider.clone();
            pool.spawner()
                .spawn_local(async move {
                    let response = ticket.run(&*provider).await;
                    state.borrow_mut().apply(response);
                })
                .unwrap();
        }
        pool.run_until_stalled();

        {
            let requested = provider.requested.borrow();
            assert_eq!(requested.len(), 2);
            assert!(requested.iter().all(|q| q.page == 1));
            assert_eq!(requested[1].filters.get("q"), Some(&json!("pan")));
        }

        tx_b.send(Ok(list_page(vec!["Pan"], 1, 1))).unwrap();
        pool.run_until_stalled();
        tx_a.send(Ok(list_page(vec!["Papa", "Pan", "Palta"], 1, 3))).unwrap();
        pool.run_until_stalled();

        let state = state.borrow();
        assert_eq!(state.items(), &["Pan"]);
        assert_eq!(state.view(), PaginationView::new(1, 1));
        assert!(!state.is_loading());
    }

    #[test]
    fn test_clearing_a_filter_removes_it() {
        let mut state = FilteredPageState::<&'static str>::new(PageQuery::first(
            Filters::new().with("categoriaId", 2).with("q", "sal"),
        ));
        let ticket = state.set_filters(&Filters::from_iter([("categoriaId", serde_json::Value::Null)]));

        assert!(ticket.query.filters.get("categoriaId").is_none());
        assert_eq!(ticket.query.filters.get("q"), Some(&json!("sal")));
    }

    #[test]
    fn test_page_click_after_filter_change_waits_for_new_totals() {
        let mut state = on_page(4, 10);
        let filtered = state.set_filters(&Filters::new().with("q", "arroz"));
        assert!(state.filters_pending());

        assert!(state.set_page(5).is_none());
        assert_eq!(state.query().page, 1);

        let first = state.set_page(1).unwrap();
        assert_eq!(first.query.page, 1);
        assert_eq!(first.query.filters.get("q"), Some(&json!("arroz")));

        assert_eq!(accept(&mut state, filtered, list_page(vec!["a"], 1, 3)), PageApply::Stale);
        assert!(state.filters_pending());
        accept(&mut state, first, list_page(vec!["Arroz"], 1, 3));
        assert!(!state.filters_pending());
        assert_eq!(state.set_page(3).map(|t| t.query.page), Some(3));
    }

    #[test]
    fn test_failed_filter_load_keeps_paging_locked() {
        let mut state = on_page(2, 6);
        let ticket = state.set_filters(&Filters::new().with("categoriaId", 9));
        state.apply(PageResponse {
            token: ticket.token,
            result: Err(ProviderError::Status(502)),
        });

        assert!(state.filters_pending());
        assert!(state.set_page(3).is_none());
        assert!(state.set_page(1).is_some());
    }
}

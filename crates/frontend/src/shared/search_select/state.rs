//! Состояние комбобокса поиска без привязки к DOM
//!
//! Every remote search is issued through a [`SearchTicket`] carrying a
//! [`RequestToken`]. Responses are applied only while their token is the
//! current one, so the last user intent wins regardless of the order in which
//! responses arrive.

use super::traits::Selectable;
use crate::shared::debounce::{RequestToken, TokenSource};
use crate::shared::providers::{ProviderError, SearchProvider};
use contracts::shared::{Filters, SelectionRef};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Empty,
    /// Ошибка провайдера; показывается так же, как пустой результат
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Next,
    Previous,
}

/// Что комбобокс делает с нажатием Enter
#[derive(Debug, Clone, PartialEq)]
pub enum EnterKey {
    /// Подсвеченный элемент выбран
    Pick(SelectionRef),
    /// Список открыт, но выбирать нечего; клавиша поглощается
    Absorb,
    /// Список закрыт: Enter остаётся форме (например, отправка)
    PassThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Stale,
}

/// Запрос поиска, выпущенный состоянием
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub token: RequestToken,
    pub term: String,
    pub filters: Filters,
}

impl SearchTicket {
    pub async fn run<P>(self, provider: &P) -> SearchResponse<P::Item>
    where
        P: SearchProvider + ?Sized,
    {
        let result = provider
            .search(&self.term, &self.filters)
            .await
            .map(|page| page.items);
        SearchResponse {
            token: self.token,
            result,
        }
    }
}

#[derive(Debug)]
pub struct SearchResponse<T> {
    pub token: RequestToken,
    pub result: Result<Vec<T>, ProviderError>,
}

#[derive(Debug, Clone)]
pub struct SearchSelectState<T> {
    text: String,
    selected: Option<SelectionRef>,
    suggestions: Vec<T>,
    highlighted: Option<usize>,
    open: bool,
    status: SuggestionStatus,
    exclusions: HashSet<String>,
    extra_filters: Filters,
    tokens: TokenSource,
}

impl<T: Selectable + Clone> SearchSelectState<T> {
    /// Начальный выбор задаёт текст и идентификатор без сетевого запроса
    pub fn new(initial: Option<SelectionRef>) -> Self {
        Self {
            text: initial.as_ref().map(|s| s.label.clone()).unwrap_or_default(),
            selected: initial,
            suggestions: Vec::new(),
            highlighted: None,
            open: false,
            status: SuggestionStatus::Idle,
            exclusions: HashSet::new(),
            extra_filters: Filters::new(),
            tokens: TokenSource::new(),
        }
    }

    pub fn with_exclusions<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_exclusions(ids);
        self
    }

    pub fn with_extra_filters(mut self, filters: Filters) -> Self {
        self.extra_filters = filters;
        self
    }

    pub fn set_exclusions<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusions = ids.into_iter().map(Into::into).collect();
        if let Some(idx) = self.highlighted {
            if self.suggestions.get(idx).is_some_and(|item| self.is_excluded(item)) {
                self.highlighted = None;
            }
        }
    }

    /// Takes effect from the next search; results already shown stay as they are.
    pub fn set_extra_filters(&mut self, filters: Filters) {
        self.extra_filters = filters;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selected(&self) -> Option<&SelectionRef> {
        self.selected.as_ref()
    }

    pub fn suggestions(&self) -> &[T] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn status(&self) -> SuggestionStatus {
        self.status
    }

    pub fn is_excluded(&self, item: &T) -> bool {
        self.exclusions.contains(&item.id())
    }

    /// Ввод текста: поле обновляется сразу, поиск уходит через debounce
    pub fn input(&mut self, text: impl Into<String>) -> SearchTicket {
        self.text = text.into();
        self.open = true;
        self.highlighted = None;
        self.issue()
    }

    /// Focus populates a closed dropdown right away; an open one is left alone.
    pub fn focus(&mut self) -> Option<SearchTicket> {
        if self.open {
            return None;
        }
        self.open = true;
        Some(self.issue())
    }

    fn issue(&mut self) -> SearchTicket {
        self.status = SuggestionStatus::Loading;
        SearchTicket {
            token: self.tokens.mint(),
            term: self.text.clone(),
            filters: self.extra_filters.clone(),
        }
    }

    /// Применяет ответ, если его токен ещё актуален; список заменяется целиком
    pub fn apply(&mut self, response: SearchResponse<T>) -> ApplyOutcome {
        if !self.tokens.is_current(response.token) {
            return ApplyOutcome::Stale;
        }

        self.highlighted = None;
        match response.result {
            Ok(items) => {
                self.status = if items.is_empty() {
                    SuggestionStatus::Empty
                } else {
                    SuggestionStatus::Ready
                };
                self.suggestions = items;
            }
            Err(_) => {
                self.status = SuggestionStatus::Failed;
                self.suggestions.clear();
            }
        }
        ApplyOutcome::Applied
    }

    /// Выбор элемента. Исключённый элемент поглощается без изменений.
    ///
    /// Returns the selection the host callback must receive.
    pub fn select(&mut self, item: &T) -> Option<SelectionRef> {
        if self.is_excluded(item) {
            return None;
        }

        let selection = item.to_selection();
        self.text = selection.label.clone();
        self.selected = Some(selection.clone());
        self.close();
        self.tokens.invalidate();
        Some(selection)
    }

    pub fn enter(&mut self) -> EnterKey {
        if !self.open {
            return EnterKey::PassThrough;
        }
        match self.select_highlighted() {
            Some(selection) => EnterKey::Pick(selection),
            None => EnterKey::Absorb,
        }
    }

    fn select_highlighted(&mut self) -> Option<SelectionRef> {
        if !self.open {
            return None;
        }
        let item = self.highlighted.and_then(|idx| self.suggestions.get(idx))?.clone();
        self.select(&item)
    }

    /// Moves the keyboard highlight, skipping excluded items.
    pub fn move_highlight(&mut self, direction: Highlight) {
        if !self.open {
            return;
        }
        let selectable = |idx: &usize| !self.is_excluded(&self.suggestions[*idx]);
        let len = self.suggestions.len();
        let next = match (direction, self.highlighted) {
            (Highlight::Next, None) => (0..len).find(selectable),
            (Highlight::Next, Some(cur)) => (cur + 1..len).find(selectable),
            (Highlight::Previous, None) => None,
            (Highlight::Previous, Some(cur)) => (0..cur).rev().find(selectable),
        };
        if next.is_some() {
            self.highlighted = next;
        }
    }

    /// ArrowDown: закрытый список открывается с немедленным поиском,
    /// открытый сдвигает подсветку.
    pub fn arrow_down(&mut self) -> Option<SearchTicket> {
        if !self.open {
            return self.focus();
        }
        self.move_highlight(Highlight::Next);
        None
    }

    /// Сброс: пустой текст, нет выбора, список закрыт
    pub fn clear(&mut self) {
        self.text.clear();
        self.selected = None;
        self.close();
        self.tokens.invalidate();
    }

    /// Клик вне компонента: закрыть список, выбор и текст не меняются
    pub fn dismiss(&mut self) {
        self.close();
    }

    /// Программная установка значения со стороны формы.
    ///
    /// A different id (or a reset to `None`) is adopted without searching;
    /// the same id is a no-op. Returns `true` when the state changed.
    pub fn sync_from_host(&mut self, incoming: Option<SelectionRef>) -> bool {
        match incoming {
            Some(selection) if !selection.same_id(self.selected.as_ref()) => {
                self.text = selection.label.clone();
                self.selected = Some(selection);
            }
            None if self.selected.is_some() => {
                self.text.clear();
                self.selected = None;
            }
            _ => return false,
        }
        self.close();
        self.tokens.invalidate();
        true
    }

    fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
        if self.status == SuggestionStatus::Loading {
            self.status = SuggestionStatus::Idle;
        }
    }
}

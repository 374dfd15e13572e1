//! Конверты постраничных списков и поиска

use super::filters::Filters;
use serde::{Deserialize, Serialize};

/// Запрос страницы списка: номер страницы (с 1) и фильтры
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    #[serde(default)]
    pub filters: Filters,
}

impl PageQuery {
    /// Page 0 is clamped to 1.
    pub fn new(page: u32, filters: Filters) -> Self {
        Self {
            page: page.max(1),
            filters,
        }
    }

    pub fn first(filters: Filters) -> Self {
        Self::new(1, filters)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::first(Filters::new())
    }
}

/// Ответ провайдера списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

impl<T> ListPage<T> {
    /// Приводит метаданные пагинации к инварианту `1 <= current <= total`.
    ///
    /// Пустой результат сервер может вернуть с `totalPages = 0`; для панели
    /// это одна пустая страница.
    pub fn normalized(mut self) -> Self {
        self.total_pages = self.total_pages.max(1);
        self.current_page = self.current_page.clamp(1, self.total_pages);
        self
    }

    pub fn view(&self) -> PaginationView {
        PaginationView::new(self.current_page, self.total_pages)
    }
}

/// Ответ провайдера поиска
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage<T> {
    pub items: Vec<T>,
}

impl<T> Default for SearchPage<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Текущая страница и число страниц по последнему принятому ответу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    pub current_page: u32,
    pub total_pages: u32,
}

impl PaginationView {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            current_page: current_page.clamp(1, total_pages),
            total_pages,
        }
    }

    pub fn contains(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }
}

impl Default for PaginationView {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_query_clamps_zero() {
        assert_eq!(PageQuery::new(0, Filters::new()).page, 1);
        assert_eq!(PageQuery::new(7, Filters::new()).page, 7);
    }

    #[test]
    fn test_list_page_deserializes_camel_case() {
        let page: ListPage<u32> = serde_json::from_value(json!({
            "items": [1, 2],
            "currentPage": 2,
            "totalPages": 5
        }))
        .unwrap();

        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.total_count, None);
    }

    #[test]
    fn test_normalized_handles_empty_and_overflow() {
        let empty = ListPage::<u32> {
            items: vec![],
            current_page: 3,
            total_pages: 0,
            total_count: Some(0),
        }
        .normalized();
        assert_eq!(empty.view(), PaginationView::new(1, 1));

        let overflow = ListPage::<u32> {
            items: vec![],
            current_page: 9,
            total_pages: 4,
            total_count: None,
        }
        .normalized();
        assert_eq!(overflow.current_page, 4);
    }

    #[test]
    fn test_view_contains() {
        let view = PaginationView::new(2, 3);
        assert!(!view.contains(0));
        assert!(view.contains(1));
        assert!(view.contains(3));
        assert!(!view.contains(4));
    }
}

//! Синхронизация запроса списка со строкой URL
//!
//! `?page=2&q=arroz&categoriaId=3` <-> [`PageQuery`]. Filters read back from
//! the URL are strings; the server receives them the same way.

use contracts::shared::{Filters, PageQuery};
use std::collections::BTreeMap;
use web_sys::window;

const PAGE_KEY: &str = "page";

pub fn parse_page_query(search: &str) -> PageQuery {
    let params: BTreeMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

    let page = params
        .get(PAGE_KEY)
        .and_then(|p| p.parse::<u32>().ok())
        .unwrap_or(1);
    let filters: Filters = params
        .into_iter()
        .filter(|(key, value)| key != PAGE_KEY && !value.trim().is_empty())
        .collect();

    PageQuery::new(page, filters)
}

pub fn page_query_string(query: &PageQuery) -> String {
    let mut params: BTreeMap<String, String> = query.filters.to_query_pairs().into_iter().collect();
    if query.page > 1 {
        params.insert(PAGE_KEY.to_string(), query.page.to_string());
    }
    serde_qs::to_string(&params).unwrap_or_default()
}

/// Текущий запрос из `location.search`
pub fn read_location_query() -> PageQuery {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_page_query(&search)
}

/// Replaces the URL query without adding a history entry.
pub fn replace_location_query(query: &PageQuery) {
    let Some(w) = window() else {
        return;
    };
    let query_string = page_query_string(query);
    let new_url = if query_string.is_empty() {
        w.location().pathname().unwrap_or_default()
    } else {
        format!("?{}", query_string)
    };

    let current_search = w.location().search().unwrap_or_default();
    if current_search.trim_start_matches('?') == query_string {
        return;
    }
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_page_and_filters() {
        let query = parse_page_query("?page=3&q=arroz&categoriaId=2");
        assert_eq!(query.page, 3);
        assert_eq!(query.filters.get("q"), Some(&json!("arroz")));
        assert_eq!(query.filters.get("categoriaId"), Some(&json!("2")));
        assert!(query.filters.get("page").is_none());
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(parse_page_query(""), PageQuery::default());
        assert_eq!(parse_page_query("?page=0").page, 1);
        assert_eq!(parse_page_query("?page=abc").page, 1);
    }

    #[test]
    fn test_query_string_omits_first_page() {
        let query = PageQuery::new(1, Filters::new().with("q", "sal"));
        assert_eq!(page_query_string(&query), "q=sal");

        let query = PageQuery::new(4, Filters::new().with("categoriaId", 7));
        assert_eq!(page_query_string(&query), "categoriaId=7&page=4");
    }
}

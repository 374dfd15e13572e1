//! Настройки компонентов поиска и списков
//!
//! Defaults match the panel's behaviour; hosts may override them from JSON.

use super::debounce::DebounceDelay;
use super::filtered_page::page_range::DEFAULT_SIBLINGS;
use serde::Deserialize;

const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 500;
const DEFAULT_LIST_DEBOUNCE_MS: u32 = 500;

fn delay(millis: u32) -> DebounceDelay {
    DebounceDelay::new(millis).unwrap_or(DebounceDelay::MIN)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchSelectConfig {
    pub debounce: DebounceDelay,
    pub placeholder: String,
}

impl Default for SearchSelectConfig {
    fn default() -> Self {
        Self {
            debounce: delay(DEFAULT_SEARCH_DEBOUNCE_MS),
            placeholder: "Buscar...".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilteredPageConfig {
    pub debounce: DebounceDelay,
    /// Сколько соседних страниц показывать вокруг текущей
    pub siblings: u32,
}

impl Default for FilteredPageConfig {
    fn default() -> Self {
        Self {
            debounce: delay(DEFAULT_LIST_DEBOUNCE_MS),
            siblings: DEFAULT_SIBLINGS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let search = SearchSelectConfig::default();
        assert_eq!(search.debounce.millis(), 500);

        let list = FilteredPageConfig::default();
        assert_eq!(list.debounce.millis(), 500);
        assert_eq!(list.siblings, 1);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: FilteredPageConfig = serde_json::from_str(r#"{"siblings": 2}"#).unwrap();
        assert_eq!(config.siblings, 2);
        assert_eq!(config.debounce.millis(), 500);

        let config: SearchSelectConfig = serde_json::from_str(r#"{"debounce": 300}"#).unwrap();
        assert_eq!(config.debounce.millis(), 300);
        assert_eq!(config.placeholder, "Buscar...");
    }

    #[test]
    fn test_zero_debounce_is_rejected() {
        assert!(serde_json::from_str::<SearchSelectConfig>(r#"{"debounce": 0}"#).is_err());
    }
}

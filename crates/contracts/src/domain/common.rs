//! Общие типы сущностей

use anyhow::Context;

/// Числовой идентификатор записи на сервере
pub type EntityId = i64;

/// Разбирает строковый идентификатор выбора обратно в числовой.
///
/// Identifiers travel through the selection layer as strings.
pub fn parse_entity_id(raw: &str) -> anyhow::Result<EntityId> {
    raw.trim()
        .parse::<EntityId>()
        .with_context(|| format!("invalid entity id: {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entity_id() {
        assert_eq!(parse_entity_id("42").unwrap(), 42);
        assert_eq!(parse_entity_id(" 7 ").unwrap(), 7);
        assert!(parse_entity_id("abc").is_err());
        assert!(parse_entity_id("").is_err());
    }
}

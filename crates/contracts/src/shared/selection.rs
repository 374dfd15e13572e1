use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Выбранная сущность: идентификатор, подпись и дополнительные поля,
/// скопированные из выбранного элемента (например, `unidad` и `precio`
/// для инсумо).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRef {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SelectionRef {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            extra: Map::new(),
        }
    }

    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = extra;
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.extra.get(field)
    }

    pub fn same_id(&self, other: Option<&SelectionRef>) -> bool {
        other.is_some_and(|o| o.id == self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extra_fields_are_flattened() {
        let mut extra = Map::new();
        extra.insert("unidad".into(), json!("kg"));
        extra.insert("precio".into(), json!(4.5));
        let selection = SelectionRef::new("3", "Arroz").with_extra(extra);

        let value = serde_json::to_value(&selection).unwrap();
        assert_eq!(
            value,
            json!({"id": "3", "label": "Arroz", "unidad": "kg", "precio": 4.5})
        );

        let back: SelectionRef = serde_json::from_value(value).unwrap();
        assert_eq!(back, selection);
    }

    #[test]
    fn test_same_id() {
        let a = SelectionRef::new("1", "Sal");
        assert!(a.same_id(Some(&SelectionRef::new("1", "Sal fina"))));
        assert!(!a.same_id(Some(&SelectionRef::new("2", "Sal"))));
        assert!(!a.same_id(None));
    }
}

//! Фильтры списков и поиска
//!
//! Набор пар `ключ -> значение`, который экран передаёт в провайдер данных.
//! Порядок ключей стабилен, поэтому строка запроса для одинаковых фильтров
//! всегда одна и та же.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters(BTreeMap<String, Value>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, skipping values that mean "no filter".
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Устанавливает значение; `null` и пустая строка удаляют ключ
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if is_blank(&value) {
            self.0.remove(&key);
        } else {
            self.0.insert(key, value);
        }
    }

    /// Частичное обновление, снимающее фильтр `key` при слиянии
    pub fn cleared(mut self, key: impl Into<String>) -> Self {
        self.0.insert(key.into(), Value::Null);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Сливает частичное обновление в текущие фильтры.
    ///
    /// Ключи из `partial` перезаписывают текущие, а `null`/`""` снимают фильтр.
    /// Returns `true` when the resulting set differs from the previous one.
    pub fn merge(&mut self, partial: &Filters) -> bool {
        let before = self.0.clone();
        for (key, value) in &partial.0 {
            self.set(key.clone(), value.clone());
        }
        before != self.0
    }

    /// Returns a copy with `extra` merged on top; `self` stays untouched.
    pub fn merged(&self, extra: &Filters) -> Filters {
        let mut out = self.clone();
        out.merge(extra);
        out
    }

    /// Пары для строки запроса. Строки передаются как есть, остальные
    /// скаляры через их JSON-представление.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(_, value)| !is_blank(value))
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// Собирает частичное обновление как есть: `null` и `""` остаются
/// маркерами снятия фильтра для [`Filters::merge`].
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Filters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Filters(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

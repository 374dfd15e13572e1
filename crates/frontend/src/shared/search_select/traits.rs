use contracts::shared::SelectionRef;
use serde_json::{Map, Value};

/// Элемент, который можно выбрать в комбобоксе поиска.
///
/// Реализация задаёт, какие поля попадут в [`SelectionRef`]: идентификатор,
/// подпись и дополнительные поля, нужные форме (например, `unidad` и
/// `precio` для инсумо).
pub trait Selectable {
    fn id(&self) -> String;

    fn label(&self) -> String;

    /// Вторая строка в выпадающем списке
    fn detail(&self) -> Option<String> {
        None
    }

    fn extra(&self) -> Map<String, Value> {
        Map::new()
    }

    fn to_selection(&self) -> SelectionRef {
        SelectionRef::new(self.id(), self.label()).with_extra(self.extra())
    }
}

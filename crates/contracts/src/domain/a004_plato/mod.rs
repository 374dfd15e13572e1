use super::common::EntityId;
use serde::{Deserialize, Serialize};

/// Plato (блюдо меню)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plato {
    pub id: EntityId,
    pub nombre: String,
    pub precio: f64,
    #[serde(rename = "categoriaId", default)]
    pub categoria_id: Option<EntityId>,
    #[serde(default = "default_disponible")]
    pub disponible: bool,
}

fn default_disponible() -> bool {
    true
}

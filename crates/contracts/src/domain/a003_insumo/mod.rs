use super::common::EntityId;
use serde::{Deserialize, Serialize};

// ============================================================================
// Insumo (ингредиент / сырьё)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insumo {
    pub id: EntityId,
    pub nombre: String,
    /// Единица измерения: kg, l, und...
    pub unidad: String,
    pub precio: f64,
    #[serde(rename = "categoriaId", default)]
    pub categoria_id: Option<EntityId>,
    #[serde(rename = "categoriaNombre", default)]
    pub categoria_nombre: Option<String>,
    #[serde(rename = "stockActual", default)]
    pub stock_actual: Option<f64>,
}

use super::common::EntityId;
use serde::{Deserialize, Serialize};

/// Тип категории: для инсумо или для блюд меню
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoCategoria {
    Insumo,
    Plato,
    Producto,
}

/// Categoría
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categoria {
    pub id: EntityId,
    pub nombre: String,
    #[serde(default)]
    pub tipo: Option<TipoCategoria>,
}

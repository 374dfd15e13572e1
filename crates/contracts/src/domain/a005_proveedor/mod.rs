use super::common::EntityId;
use serde::{Deserialize, Serialize};

/// Proveedor (поставщик)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proveedor {
    pub id: EntityId,
    pub nombre: String,
    #[serde(default)]
    pub ruc: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
}

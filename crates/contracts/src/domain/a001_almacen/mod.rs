use super::common::EntityId;
use serde::{Deserialize, Serialize};

/// Almacén (склад ресторана)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Almacen {
    pub id: EntityId,
    pub nombre: String,
    #[serde(default)]
    pub ubicacion: Option<String>,
    #[serde(rename = "sedeId", default)]
    pub sede_id: Option<EntityId>,
}

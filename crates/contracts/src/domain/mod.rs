//! Сущности ресторана, по которым идёт поиск и построение списков

pub mod common;
pub mod a001_almacen;
pub mod a002_categoria;
pub mod a003_insumo;
pub mod a004_plato;
pub mod a005_proveedor;

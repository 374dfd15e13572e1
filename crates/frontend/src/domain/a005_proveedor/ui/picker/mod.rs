use crate::shared::providers::HttpSearchProvider;
use crate::shared::search_select::{SearchSelect, Selectable};
use contracts::domain::a005_proveedor::Proveedor;
use contracts::shared::SelectionRef;
use leptos::prelude::*;
use serde_json::{Map, Value};

pub const PROVEEDOR_SEARCH_PATH: &str = "/api/proveedores/buscar";

impl Selectable for Proveedor {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn label(&self) -> String {
        self.nombre.clone()
    }

    fn detail(&self) -> Option<String> {
        self.ruc.as_ref().map(|ruc| format!("RUC {ruc}"))
    }

    fn extra(&self) -> Map<String, Value> {
        let mut extra = Map::new();
        if let Some(ruc) = &self.ruc {
            extra.insert("ruc".into(), ruc.clone().into());
        }
        extra
    }
}

#[component]
pub fn ProveedorSelect(
    #[prop(optional, into)] selected: Option<Signal<Option<SelectionRef>>>,
    on_select: Callback<Option<SelectionRef>>,
) -> impl IntoView {
    let selected = selected.unwrap_or_else(|| Signal::derive(|| None));

    view! {
        <SearchSelect
            provider={HttpSearchProvider::<Proveedor>::new(PROVEEDOR_SEARCH_PATH)}
            initial_selection=selected
            on_select=on_select
        />
    }
}

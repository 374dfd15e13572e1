use crate::shared::providers::HttpSearchProvider;
use crate::shared::search_select::{SearchSelect, Selectable};
use contracts::domain::a001_almacen::Almacen;
use contracts::shared::SelectionRef;
use leptos::prelude::*;
use serde_json::{Map, Value};

pub const ALMACEN_SEARCH_PATH: &str = "/api/almacenes/buscar";

impl Selectable for Almacen {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn label(&self) -> String {
        self.nombre.clone()
    }

    fn detail(&self) -> Option<String> {
        self.ubicacion.clone().filter(|u| !u.trim().is_empty())
    }

    fn extra(&self) -> Map<String, Value> {
        let mut extra = Map::new();
        if let Some(sede_id) = self.sede_id {
            extra.insert("sedeId".into(), sede_id.into());
        }
        extra
    }
}

/// Выбор склада (almacén)
#[component]
pub fn AlmacenSelect(
    #[prop(optional, into)] selected: Option<Signal<Option<SelectionRef>>>,
    on_select: Callback<Option<SelectionRef>>,
) -> impl IntoView {
    let selected = selected.unwrap_or_else(|| Signal::derive(|| None));

    view! {
        <SearchSelect
            provider={HttpSearchProvider::<Almacen>::new(ALMACEN_SEARCH_PATH)}
            initial_selection=selected
            on_select=on_select
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_almacen_selection() {
        let almacen = Almacen {
            id: 2,
            nombre: "Cámara fría".into(),
            ubicacion: Some("Cocina".into()),
            sede_id: Some(1),
        };
        let selection = almacen.to_selection();

        assert_eq!(selection.id, "2");
        assert_eq!(selection.label, "Cámara fría");
        assert_eq!(selection.get("sedeId"), Some(&Value::from(1)));
        assert_eq!(almacen.detail().as_deref(), Some("Cocina"));
    }
}

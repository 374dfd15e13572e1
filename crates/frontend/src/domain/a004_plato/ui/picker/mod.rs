use crate::shared::number_format::format_soles;
use crate::shared::providers::HttpSearchProvider;
use crate::shared::search_select::{SearchSelect, Selectable};
use contracts::domain::a004_plato::Plato;
use contracts::shared::SelectionRef;
use leptos::prelude::*;
use serde_json::{Map, Value};

pub const PLATO_SEARCH_PATH: &str = "/api/platos/buscar";

impl Selectable for Plato {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn label(&self) -> String {
        self.nombre.clone()
    }

    fn detail(&self) -> Option<String> {
        let price = format_soles(self.precio);
        if self.disponible {
            Some(price)
        } else {
            Some(format!("{price} · no disponible"))
        }
    }

    fn extra(&self) -> Map<String, Value> {
        let mut extra = Map::new();
        extra.insert("precio".into(), self.precio.into());
        extra.insert("disponible".into(), self.disponible.into());
        extra
    }
}

/// Выбор блюда для строк заказа
#[component]
pub fn PlatoSelect(
    #[prop(optional, into)] selected: Option<Signal<Option<SelectionRef>>>,
    #[prop(optional, into)] exclusions: Option<Signal<Vec<String>>>,
    on_select: Callback<Option<SelectionRef>>,
) -> impl IntoView {
    let selected = selected.unwrap_or_else(|| Signal::derive(|| None));
    let exclusions = exclusions.unwrap_or_else(|| Signal::derive(Vec::new));

    view! {
        <SearchSelect
            provider={HttpSearchProvider::<Plato>::new(PLATO_SEARCH_PATH)}
            initial_selection=selected
            exclusions=exclusions
            on_select=on_select
            excluded_hint="ya en el pedido"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unavailable_plato_detail() {
        let plato = Plato {
            id: 11,
            nombre: "Lomo saltado".into(),
            precio: 32.0,
            categoria_id: None,
            disponible: false,
        };

        assert_eq!(plato.detail().as_deref(), Some("S/ 32.00 · no disponible"));
        assert_eq!(plato.to_selection().get("disponible"), Some(&json!(false)));
    }
}

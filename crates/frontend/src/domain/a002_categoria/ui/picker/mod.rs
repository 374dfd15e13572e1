use crate::shared::providers::HttpSearchProvider;
use crate::shared::search_select::{SearchSelect, Selectable};
use contracts::domain::a002_categoria::{Categoria, TipoCategoria};
use contracts::shared::{Filters, SelectionRef};
use leptos::prelude::*;
use serde_json::{Map, Value};

pub const CATEGORIA_SEARCH_PATH: &str = "/api/categorias/buscar";

impl Selectable for Categoria {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn label(&self) -> String {
        self.nombre.clone()
    }

    fn extra(&self) -> Map<String, Value> {
        let mut extra = Map::new();
        if let Some(tipo) = self.tipo {
            extra.insert("tipo".into(), tipo_param(tipo).into());
        }
        extra
    }
}

fn tipo_param(tipo: TipoCategoria) -> &'static str {
    match tipo {
        TipoCategoria::Insumo => "insumo",
        TipoCategoria::Plato => "plato",
        TipoCategoria::Producto => "producto",
    }
}

/// Выбор категории; `tipo` ограничивает поиск категориями одного типа
#[component]
pub fn CategoriaSelect(
    #[prop(optional, into)] selected: Option<Signal<Option<SelectionRef>>>,
    #[prop(optional)] tipo: Option<TipoCategoria>,
    on_select: Callback<Option<SelectionRef>>,
) -> impl IntoView {
    let selected = selected.unwrap_or_else(|| Signal::derive(|| None));
    let filters = match tipo {
        Some(tipo) => Filters::new().with("tipo", tipo_param(tipo)),
        None => Filters::new(),
    };

    view! {
        <SearchSelect
            provider={HttpSearchProvider::<Categoria>::new(CATEGORIA_SEARCH_PATH)}
            initial_selection=selected
            extra_filters={Signal::derive(move || filters.clone())}
            on_select=on_select
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tipo_matches_wire_format() {
        for tipo in [TipoCategoria::Insumo, TipoCategoria::Plato, TipoCategoria::Producto] {
            assert_eq!(
                serde_json::to_value(tipo).unwrap(),
                Value::from(tipo_param(tipo))
            );
        }
    }

    #[test]
    fn test_categoria_selection() {
        let categoria = Categoria {
            id: 5,
            nombre: "Abarrotes".into(),
            tipo: Some(TipoCategoria::Insumo),
        };
        let selection = categoria.to_selection();
        assert_eq!(selection.id, "5");
        assert_eq!(selection.get("tipo"), Some(&Value::from("insumo")));
    }
}

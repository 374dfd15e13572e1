use crate::shared::number_format::format_soles;
use crate::shared::providers::HttpSearchProvider;
use crate::shared::search_select::{SearchSelect, Selectable};
use contracts::domain::a003_insumo::Insumo;
use contracts::domain::common::EntityId;
use contracts::shared::{Filters, SelectionRef};
use leptos::prelude::*;
use serde_json::{Map, Value};

pub const INSUMO_SEARCH_PATH: &str = "/api/insumos/buscar";

impl Selectable for Insumo {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn label(&self) -> String {
        self.nombre.clone()
    }

    fn detail(&self) -> Option<String> {
        Some(format!("{} · {}", self.unidad, format_soles(self.precio)))
    }

    /// Строкам compra/receta нужны единица и цена выбранного инсумо
    fn extra(&self) -> Map<String, Value> {
        let mut extra = Map::new();
        extra.insert("unidad".into(), self.unidad.clone().into());
        extra.insert("precio".into(), self.precio.into());
        if let Some(categoria_id) = self.categoria_id {
            extra.insert("categoriaId".into(), categoria_id.into());
        }
        extra
    }
}

/// Фильтры поиска инсумо по складу
fn almacen_filters(almacen_id: Option<EntityId>) -> Filters {
    match almacen_id {
        Some(id) => Filters::new().with("almacenId", id),
        None => Filters::new(),
    }
}

/// Выбор инсумо для строки документа.
///
/// `exclusions` содержит ID инсумо, уже добавленных в другие строки формы.
#[component]
pub fn InsumoSelect(
    #[prop(optional, into)] selected: Option<Signal<Option<SelectionRef>>>,
    #[prop(optional, into)] exclusions: Option<Signal<Vec<String>>>,
    #[prop(optional, into)] almacen_id: Option<Signal<Option<EntityId>>>,
    on_select: Callback<Option<SelectionRef>>,
) -> impl IntoView {
    let selected = selected.unwrap_or_else(|| Signal::derive(|| None));
    let exclusions = exclusions.unwrap_or_else(|| Signal::derive(Vec::new));
    let extra_filters = Signal::derive(move || almacen_filters(almacen_id.and_then(|a| a.get())));

    view! {
        <SearchSelect
            provider={HttpSearchProvider::<Insumo>::new(INSUMO_SEARCH_PATH)}
            initial_selection=selected
            exclusions=exclusions
            extra_filters=extra_filters
            on_select=on_select
        />
    }
}

use crate::domain::a002_categoria::ui::picker::CategoriaSelect;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::FilteredPageConfig;
use crate::shared::filtered_page::{FilteredPage, PageListeners};
use crate::shared::number_format::{format_quantity, format_soles};
use crate::shared::providers::HttpListProvider;
use crate::shared::url_query::{read_location_query, replace_location_query};
use contracts::domain::a002_categoria::TipoCategoria;
use contracts::domain::a003_insumo::Insumo;
use contracts::domain::common::parse_entity_id;
use contracts::shared::{Filters, PageQuery, SelectionRef};
use leptos::logging::warn;
use leptos::prelude::*;
use serde_json::Value;

pub const INSUMO_LIST_PATH: &str = "/api/insumos";

const FILTER_TEXT: &str = "q";
const FILTER_CATEGORIA: &str = "categoriaId";

#[derive(Clone, Debug, PartialEq)]
pub struct InsumoRow {
    pub id: i64,
    pub nombre: String,
    pub categoria: String,
    pub unidad: String,
    pub precio: String,
    pub stock: String,
}

impl From<Insumo> for InsumoRow {
    fn from(i: Insumo) -> Self {
        Self {
            id: i.id,
            precio: format_soles(i.precio),
            stock: i
                .stock_actual
                .map(|s| format_quantity(s, &i.unidad))
                .unwrap_or_else(|| "-".to_string()),
            categoria: i.categoria_nombre.unwrap_or_else(|| "-".to_string()),
            nombre: i.nombre,
            unidad: i.unidad,
        }
    }
}

/// Фильтр по категории из выбора в комбобоксе
fn categoria_filter(selection: Option<&SelectionRef>) -> Filters {
    let Some(selection) = selection else {
        return Filters::new().cleared(FILTER_CATEGORIA);
    };
    match parse_entity_id(&selection.id) {
        Ok(id) => Filters::new().with(FILTER_CATEGORIA, id),
        Err(e) => {
            warn!("categoria filter ignored: {e:#}");
            Filters::new().cleared(FILTER_CATEGORIA)
        }
    }
}

/// Категория из URL известна только по ID
fn categoria_from_query(query: &PageQuery) -> Option<SelectionRef> {
    let id = match query.filters.get(FILTER_CATEGORIA)? {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let label = format!("Categoría {id}");
    Some(SelectionRef::new(id, label))
}

fn text_from_query(query: &PageQuery) -> String {
    query
        .filters
        .get(FILTER_TEXT)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

#[component]
pub fn InsumoList() -> impl IntoView {
    let initial = read_location_query();
    let search_text = RwSignal::new(text_from_query(&initial));
    let categoria = RwSignal::new(categoria_from_query(&initial));

    // Номер страницы приходит раньше фильтров того же ответа
    let accepted_page = StoredValue::new(initial.page);
    let listeners = PageListeners {
        on_page_change: Some(Callback::new(move |page: u32| {
            accepted_page.set_value(page)
        })),
        on_filters_change: Some(Callback::new(move |filters: Filters| {
            replace_location_query(&PageQuery::new(accepted_page.get_value(), filters))
        })),
    };

    let page = FilteredPage::new(
        HttpListProvider::<Insumo>::new(INSUMO_LIST_PATH),
        FilteredPageConfig::default(),
        initial,
        listeners,
    );
    page.refresh();

    let on_search_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        search_text.set(text.clone());
        page.set_filters(Filters::from_iter([(FILTER_TEXT, text)]));
    };

    let on_categoria = Callback::new(move |selection: Option<SelectionRef>| {
        page.set_filters(categoria_filter(selection.as_ref()));
        categoria.set(selection);
    });

    let rows = move || {
        page.items()
            .into_iter()
            .map(InsumoRow::from)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Insumos"
                subtitle="Ingredientes y materia prima"
                busy={Signal::derive(move || page.is_loading() && page.is_loaded())}
            >
                <button class="button button--secondary" on:click=move |_| page.refresh()>
                    "Actualizar"
                </button>
            </PageHeader>

            <div class="filter-panel">
                <input
                    type="search"
                    class="filter-panel__search"
                    placeholder="Buscar por nombre..."
                    prop:value=move || search_text.get()
                    on:input=on_search_input
                />
                <div class="filter-panel__field">
                    <CategoriaSelect
                        selected={Signal::derive(move || categoria.get())}
                        tipo={TipoCategoria::Insumo}
                        on_select=on_categoria
                    />
                </div>
            </div>

            <Show
                when=move || page.is_loaded() || !page.is_loading()
                fallback=|| view! { <div class="page__loading">"Cargando..."</div> }
            >
                <table class={move || if page.is_loading() { "data-table data-table--busy" } else { "data-table" }}>
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Categoría"</th>
                            <th>"Unidad"</th>
                            <th class="text-right">"Precio"</th>
                            <th class="text-right">"Stock"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|row| row.id
                            children=move |row: InsumoRow| view! {
                                <tr>
                                    <td>{row.nombre}</td>
                                    <td>{row.categoria}</td>
                                    <td>{row.unidad}</td>
                                    <td class="text-right">{row.precio}</td>
                                    <td class="text-right">{row.stock}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || page.is_loaded() && page.items().is_empty()>
                    <div class="page__empty">"No hay insumos con estos filtros"</div>
                </Show>
            </Show>

            <PaginationControls
                current_page={Signal::derive(move || page.view().current_page)}
                total_pages={Signal::derive(move || page.view().total_pages)}
                total_count={Signal::derive(move || page.total_count())}
                siblings={page.siblings()}
                disabled={Signal::derive(move || page.filters_pending())}
                on_page_change={Callback::new(move |p: u32| page.set_page(p))}
            />
        </div>
    }
}

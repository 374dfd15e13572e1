use super::state::{
    ApplyOutcome, EnterKey, Highlight, SearchSelectState, SearchTicket, SuggestionStatus,
};
use super::traits::Selectable;
use crate::shared::config::SearchSelectConfig;
use crate::shared::debounce::Dispatcher;
use crate::shared::dismiss::on_pointer_down_outside;
use crate::shared::icons::icon;
use crate::shared::providers::SearchProvider;
use contracts::shared::{Filters, SelectionRef};
use leptos::html::Div;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use std::rc::Rc;

/// Универсальный комбобокс поиска сущности
///
/// Поддерживает:
/// - Поиск по мере ввода с debounce и защитой от устаревших ответов
/// - Немедленный поиск при фокусе, если список закрыт
/// - Исключённые элементы: видны в списке, но недоступны для выбора
/// - Программную установку значения через `initial_selection`
/// - Навигацию клавиатурой и закрытие по клику снаружи
#[component]
pub fn SearchSelect<P>(
    /// Провайдер поиска сущности
    provider: P,
    /// Выбор, установленный формой
    #[prop(optional, into)]
    initial_selection: Option<Signal<Option<SelectionRef>>>,
    /// ID, которые уже использованы в форме
    #[prop(optional, into)]
    exclusions: Option<Signal<Vec<String>>>,
    /// Дополнительные фильтры поиска (например, almacenId)
    #[prop(optional, into)]
    extra_filters: Option<Signal<Filters>>,
    /// Callback выбора; `None` при очистке
    on_select: Callback<Option<SelectionRef>>,
    #[prop(optional)]
    config: Option<SearchSelectConfig>,
    /// Подпись для исключённых элементов
    #[prop(optional, into)]
    excluded_hint: Option<String>,
) -> impl IntoView
where
    P: SearchProvider + 'static,
    P::Item: Selectable + Clone + Send + Sync + 'static,
{
    let config = config.unwrap_or_default();
    let delay = config.debounce;
    let placeholder = config.placeholder;
    let excluded_hint =
        StoredValue::new(excluded_hint.unwrap_or_else(|| "ya agregado".to_string()));
    let initial_selection = initial_selection.unwrap_or_else(|| Signal::derive(|| None));
    let exclusions = exclusions.unwrap_or_else(|| Signal::derive(Vec::new));
    let extra_filters = extra_filters.unwrap_or_else(|| Signal::derive(Filters::new));

    let state = RwSignal::new(
        SearchSelectState::<P::Item>::new(initial_selection.get_untracked())
            .with_exclusions(exclusions.get_untracked())
            .with_extra_filters(extra_filters.get_untracked()),
    );
    let provider = StoredValue::new_local(Rc::new(provider));
    let root_ref = NodeRef::<Div>::new();

    let run_search = move |ticket: SearchTicket| {
        let provider = provider.get_value();
        log!("search {} q={:?}", ticket.token, ticket.term);
        leptos::task::spawn_local(async move {
            let response = ticket.run(&*provider).await;
            if let Err(e) = &response.result {
                warn!("search {} failed: {}", response.token, e);
            }
            let token = response.token;
            let outcome = state
                .try_update(|s| s.apply(response))
                .unwrap_or(ApplyOutcome::Stale);
            if outcome == ApplyOutcome::Stale {
                log!("search {} superseded, response dropped", token);
            }
        });
    };

    let dispatcher = StoredValue::new_local(Dispatcher::new(delay, run_search));

    let commit = move |selection: Option<SelectionRef>| {
        dispatcher.update_value(|d| d.cancel());
        on_select.run(selection);
    };

    // Синхронизация с формой: другое значение принимается без поиска
    Effect::new(move |_| {
        let incoming = initial_selection.get();
        if state.try_update(|s| s.sync_from_host(incoming)).unwrap_or(false) {
            dispatcher.update_value(|d| d.cancel());
        }
    });

    Effect::new(move |_| {
        let ids = exclusions.get();
        state.update(|s| s.set_exclusions(ids));
    });

    Effect::new(move |_| {
        let filters = extra_filters.get();
        state.update(|s| s.set_extra_filters(filters));
    });

    on_pointer_down_outside(root_ref, move || {
        if state.with_untracked(|s| s.is_open()) {
            state.update(|s| s.dismiss());
        }
    });

    let handle_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        if let Some(ticket) = state.try_update(|s| s.input(text)) {
            dispatcher.update_value(|d| d.debounced(ticket));
        }
    };

    let handle_focus = move |_| {
        if let Some(ticket) = state.try_update(|s| s.focus()).flatten() {
            dispatcher.update_value(|d| d.immediate(ticket));
        }
    };

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "ArrowDown" => {
            ev.prevent_default();
            if let Some(ticket) = state.try_update(|s| s.arrow_down()).flatten() {
                dispatcher.update_value(|d| d.immediate(ticket));
            }
        }
        "ArrowUp" => {
            ev.prevent_default();
            state.update(|s| s.move_highlight(Highlight::Previous));
        }
        "Enter" => match state.try_update(|s| s.enter()) {
            Some(EnterKey::Pick(selection)) => {
                ev.prevent_default();
                commit(Some(selection));
            }
            Some(EnterKey::Absorb) => ev.prevent_default(),
            Some(EnterKey::PassThrough) | None => {}
        },
        "Escape" => state.update(|s| s.dismiss()),
        _ => {}
    };

    let handle_pick = move |item: P::Item| {
        if let Some(selection) = state.try_update(|s| s.select(&item)).flatten() {
            commit(Some(selection));
        }
    };

    let handle_clear = move |_| {
        state.update(|s| s.clear());
        commit(None);
    };

    let render_suggestions = move || {
        state.with(|s| {
            let status = s.status();
            if s.suggestions().is_empty() {
                let message = match status {
                    SuggestionStatus::Loading => "Buscando...",
                    _ => "Sin resultados",
                };
                return view! { <li class="search-select__empty">{message}</li> }.into_any();
            }

            let highlighted = s.highlighted();
            s.suggestions()
                .iter()
                .enumerate()
                .map(|(idx, item)| {
                    let excluded = s.is_excluded(item);
                    let item_for_pick = item.clone();
                    let detail = item.detail();
                    let hint = excluded.then(|| excluded_hint.get_value());
                    view! {
                        <li
                            class={option_class(highlighted == Some(idx), excluded)}
                            role="option"
                            aria-disabled={excluded.to_string()}
                            on:mousedown=move |ev| {
                                ev.prevent_default();
                                handle_pick(item_for_pick.clone());
                            }
                        >
                            <span class="search-select__label">{item.label()}</span>
                            {detail.map(|d| view! { <span class="search-select__detail">{d}</span> })}
                            {hint.map(|h| view! { <span class="search-select__hint">{h}</span> })}
                        </li>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <div class="search-select" node_ref=root_ref>
            <div class="search-select__field">
                {icon("search")}
                <input
                    type="text"
                    class="search-select__input"
                    placeholder=placeholder
                    autocomplete="off"
                    prop:value=move || state.with(|s| s.text().to_string())
                    on:input=handle_input
                    on:focus=handle_focus
                    on:keydown=handle_keydown
                />
                <Show when=move || state.with(|s| !s.text().is_empty() || s.selected().is_some())>
                    <button
                        type="button"
                        class="search-select__clear"
                        title="Limpiar"
                        on:click=handle_clear
                    >
                        {icon("x")}
                    </button>
                </Show>
            </div>
            <Show when=move || state.with(|s| s.is_open())>
                <ul class="search-select__dropdown" role="listbox">
                    {render_suggestions}
                </ul>
            </Show>
        </div>
    }
}

fn option_class(highlighted: bool, excluded: bool) -> String {
    let mut class = String::from("search-select__option");
    if highlighted {
        class.push_str(" search-select__option--highlighted");
    }
    if excluded {
        class.push_str(" search-select__option--disabled");
    }
    class
}

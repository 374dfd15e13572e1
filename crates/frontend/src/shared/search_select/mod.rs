//! Search Select
//!
//! Комбобокс с удалённым поиском: ввод текста, debounce, выпадающий список,
//! выбор одного элемента. Один обобщённый компонент для любых сущностей;
//! сущность задаёт провайдер поиска и реализацию [`Selectable`].
//!
//! ## Использование
//!
//! ```rust,ignore
//! view! {
//!     <SearchSelect
//!         provider=HttpSearchProvider::<Insumo>::new("/api/insumos/buscar")
//!         initial_selection=selected
//!         exclusions=already_added
//!         on_select=Callback::new(move |sel| set_selected.set(sel))
//!     />
//! }
//! ```

pub mod component;
pub mod state;
pub mod traits;

pub use component::SearchSelect;
pub use state::{EnterKey, SearchSelectState, SearchTicket, SuggestionStatus};
pub use traits::Selectable;

//! Filtered Page
//!
//! Постраничный список с фильтрами: состояние запроса `{page, filters}`,
//! debounce изменения фильтров, согласование с пагинацией, которую вернул
//! сервер, и расчёт компактного ряда кнопок страниц.

pub mod controller;
pub mod page_range;
pub mod state;

pub use controller::{FilteredPage, PageListeners};
pub use page_range::{next_page, page_range, previous_page, PageItem};
pub use state::{FilteredPageState, PageApply, PageTicket};

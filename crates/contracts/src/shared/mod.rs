pub mod filters;
pub mod paging;
pub mod selection;

pub use filters::Filters;
pub use paging::{ListPage, PageQuery, PaginationView, SearchPage};
pub use selection::SelectionRef;

pub mod page_header;
pub mod pagination_controls;

pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;

pub mod api_utils;
pub mod components;
pub mod config;
pub mod debounce;
pub mod dismiss;
pub mod filtered_page;
pub mod icons;
pub mod notice;
pub mod number_format;
pub mod providers;
pub mod search_select;
pub mod url_query;

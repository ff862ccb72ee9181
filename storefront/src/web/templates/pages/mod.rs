pub(crate) mod error_page;
pub(crate) mod search_page;

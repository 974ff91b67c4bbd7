pub mod config;
pub mod http_error_handler;
pub mod page;
pub mod page_info;
pub mod pager;

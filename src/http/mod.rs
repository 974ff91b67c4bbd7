pub mod paged_response;
pub mod pager_query;
pub mod server;

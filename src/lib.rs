pub mod http;
pub mod utils;

pub use utils::config::{ConfigError, PagingConfig};
pub use utils::page::{Page, PageResult};
pub use utils::page_info::{PageInfo, PageInfoError};
pub use utils::pager::{Pageable, Pager};

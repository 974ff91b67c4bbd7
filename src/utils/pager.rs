use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub const MAXIMUM_PAGE_SIZE: u32 = 50;

/// Anything that can say which page was asked for and how big it should be.
pub trait Pageable {
    fn page_number(&self) -> u32;

    fn page_size(&self) -> u32;
}

impl<T: Pageable + ?Sized> Pageable for &T {
    fn page_number(&self) -> u32 {
        (**self).page_number()
    }

    fn page_size(&self) -> u32 {
        (**self).page_size()
    }
}

/// One-based paging request, as it arrives from the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct Pager {
    #[serde(rename = "pageNum")]
    #[validate(range(min = 1, max = 65535))]
    pub page_num: u32,
    #[validate(range(min = 1, max = MAXIMUM_PAGE_SIZE))]
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page_num: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pager {
    pub fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num,
            page_size,
        }
    }

    pub fn offset(&self) -> u64 {
        // page 0 never passes validation, but don't underflow on it either
        u64::from(self.page_num.saturating_sub(1)) * u64::from(self.page_size)
    }
}

impl Pageable for Pager {
    fn page_number(&self) -> u32 {
        self.page_num
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }
}

use crate::utils::page::PageResult;
use crate::utils::pager::Pageable;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageInfoError {
    #[error("missing {0} for page info")]
    MissingInput(&'static str),
}

/// Snapshot of the paging metadata for one query result.
///
/// Values are copied as-is from the request and the result; nothing is
/// checked against anything else, so `current_page` may well be past
/// `total_pages`. Whether `current_page` is zero- or one-based is whatever the
/// request used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    current_page: u32,
    page_limit: u32,
    total_pages: u32,
    total_elements: u64,
}

impl PageInfo {
    pub fn of(pageable: &impl Pageable, page: &impl PageResult) -> Self {
        Self {
            current_page: pageable.page_number(),
            page_limit: pageable.page_size(),
            total_pages: page.total_pages(),
            total_elements: page.total_elements(),
        }
    }

    /// Same as [`PageInfo::of`] for callers that may not hold one of the inputs.
    pub fn try_of<P, R>(pageable: Option<&P>, page: Option<&R>) -> Result<Self, PageInfoError>
    where
        P: Pageable + ?Sized,
        R: PageResult + ?Sized,
    {
        let pageable = pageable.ok_or(PageInfoError::MissingInput("pageable"))?;
        let page = page.ok_or(PageInfoError::MissingInput("page"))?;
        Ok(Self::of(&pageable, &page))
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PageInfo(currentPage={}, pageLimit={}, totalPages={}, totalElements={})",
            self.current_page, self.page_limit, self.total_pages, self.total_elements
        )
    }
}

use crate::utils::pager::Pageable;

/// Aggregate counts of a paged query over the full, unpaged result set.
pub trait PageResult {
    fn total_pages(&self) -> u32;

    fn total_elements(&self) -> u64;
}

impl<T: PageResult + ?Sized> PageResult for &T {
    fn total_pages(&self) -> u32 {
        (**self).total_pages()
    }

    fn total_elements(&self) -> u64 {
        (**self).total_elements()
    }
}

/// One slice of a result set together with the size of the whole set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    number: u32,
    size: u32,
    total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: &impl Pageable, total_elements: u64) -> Self {
        Self {
            content,
            number: pageable.page_number(),
            size: pageable.page_size(),
            total_elements,
        }
    }

    pub fn empty(pageable: &impl Pageable) -> Self {
        Self::new(Vec::new(), pageable, 0)
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    /// Page numbers here follow the request's convention, so this only holds
    /// for one-based requests.
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

impl<T> PageResult for Page<T> {
    fn total_pages(&self) -> u32 {
        if self.size == 0 {
            return 1;
        }
        let pages = self.total_elements.div_ceil(u64::from(self.size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    fn total_elements(&self) -> u64 {
        self.total_elements
    }
}

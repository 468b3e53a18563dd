use crate::error::InvalidArgument;

/// Page size used by the travel catalog listing.
pub const DEFAULT_PAGE_SIZE: u64 = 5;

/// One page of a larger ordered result set.
///
/// `items.len()` never exceeds `page_size`. A page past the end of the
/// result set has no items but still reports the true `total_items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBean<T> {
    pub items: Vec<T>,
    pub current_page: u64,
    pub page_size: u64,
    pub total_items: u64,
}

impl<T> PageBean<T> {
    /// An empty page for the given request over a result set of `total_items`.
    pub fn empty(request: &PageRequest, total_items: u64) -> Self {
        Self {
            items: vec![],
            current_page: request.page(),
            page_size: request.page_size().get(),
            total_items,
        }
    }

    /// Number of pages needed to list every item.
    ///
    /// # Examples
    /// ```
    /// use travel_core::utils::paging::PageBean;
    ///
    /// let page = PageBean::<u32> { items: vec![], current_page: 1, page_size: 5, total_items: 7 };
    /// assert_eq!(page.total_pages(), 2);
    ///
    /// let page = PageBean::<u32> { items: vec![], current_page: 1, page_size: 5, total_items: 10 };
    /// assert_eq!(page.total_pages(), 2);
    ///
    /// let page = PageBean::<u32> { items: vec![], current_page: 1, page_size: 5, total_items: 0 };
    /// assert_eq!(page.total_pages(), 0);
    /// ```
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_items.div_ceil(self.page_size)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Convert the items while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> PageBean<U>
    where
        F: FnMut(T) -> U,
    {
        PageBean {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            page_size: self.page_size,
            total_items: self.total_items,
        }
    }
}

/// A page size of at least one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub struct PageSize(u64);

impl PageSize {
    pub fn new(size: u64) -> Result<Self, InvalidArgument> {
        if size == 0 {
            Err(InvalidArgument::PageSize { value: size })?
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl TryFrom<u64> for PageSize {
    type Error = InvalidArgument;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A validated request for a 1-based page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: PageSize,
}

impl PageRequest {
    /// Validate a caller supplied page number. Values below 1 are rejected, not clamped.
    ///
    /// # Examples
    /// ```
    /// use travel_core::utils::paging::{PageRequest, PageSize};
    ///
    /// let size = PageSize::new(5).unwrap();
    /// assert_eq!(PageRequest::new(1, size).unwrap().offset(), 0);
    /// assert_eq!(PageRequest::new(3, size).unwrap().offset(), 10);
    /// assert!(PageRequest::new(0, size).is_err());
    /// assert!(PageRequest::new(-1, size).is_err());
    /// ```
    pub fn new(page: i64, page_size: PageSize) -> Result<Self, InvalidArgument> {
        let page = u64::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(InvalidArgument::PageNumber { value: page })?;
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size.get())
    }

    pub fn limit(&self) -> u64 {
        self.page_size.get()
    }

    /// Whether this page starts at or after the last of `total_items`.
    ///
    /// Backends must not be asked for such a page: its offset can exceed what
    /// they accept.
    pub fn is_past_end(&self, total_items: u64) -> bool {
        self.offset() >= total_items
    }

    /// Cut this page out of an already ordered result set.
    pub fn slice<T: Clone>(&self, ordered: &[T]) -> PageBean<T> {
        let total_items = ordered.len() as u64;
        if self.is_past_end(total_items) {
            return PageBean::empty(self, total_items);
        }
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let items = ordered
            .iter()
            .skip(start)
            .take(self.limit() as usize)
            .cloned()
            .collect();
        PageBean {
            items,
            current_page: self.page,
            page_size: self.page_size.get(),
            total_items,
        }
    }
}

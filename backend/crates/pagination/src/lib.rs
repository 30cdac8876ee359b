//! Offset/size pagination primitives shared by backend list endpoints.
//!
//! Clients send an element offset `from` and a page length `size`. The
//! backend serves whole pages, so the effective offset is the start of the
//! page containing `from` (floor-division page index). This matches the wire
//! behaviour of the original service and is kept deliberately; see the
//! backend design notes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default element offset applied when a request omits `from`.
pub const DEFAULT_FROM: i64 = 0;

/// Default page length applied when a request omits `size`.
pub const DEFAULT_SIZE: i64 = 10;

/// Validation failures for page parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// `from` must be zero or positive.
    #[error("page offset must not be negative: {from}")]
    NegativeFrom {
        /// The rejected offset.
        from: i64,
    },
    /// `size` must be at least one element.
    #[error("page size must be at least 1: {size}")]
    InvalidSize {
        /// The rejected page length.
        size: i64,
    },
}

/// Validated offset/size page parameters.
///
/// ## Invariants
/// - `from >= 0`
/// - `size >= 1`
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let page = PageRequest::new(5, 5).expect("valid parameters");
/// assert_eq!(page.page_index(), 1);
/// assert_eq!(page.offset(), 5);
/// assert_eq!(page.limit(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    from: i64,
    size: i64,
}

impl PageRequest {
    /// Validate raw `from`/`size` parameters.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] when `from` is negative or `size` is
    /// smaller than one.
    pub const fn new(from: i64, size: i64) -> Result<Self, PageRequestError> {
        if from < 0 {
            return Err(PageRequestError::NegativeFrom { from });
        }
        if size < 1 {
            return Err(PageRequestError::InvalidSize { size });
        }
        Ok(Self { from, size })
    }

    /// Page parameters selecting the first page with the default length.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            from: DEFAULT_FROM,
            size: DEFAULT_SIZE,
        }
    }

    /// The requested element offset.
    #[must_use]
    pub const fn from(&self) -> i64 {
        self.from
    }

    /// The requested page length.
    #[must_use]
    pub const fn size(&self) -> i64 {
        self.size
    }

    /// Index of the page containing `from`.
    ///
    /// Floor division: offsets that are not multiples of `size` land inside
    /// a page and the whole page is served.
    #[must_use]
    pub fn page_index(&self) -> i64 {
        self.from.checked_div(self.size).unwrap_or(0)
    }

    /// Element offset of the first record on the served page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        self.page_index().saturating_mul(self.size)
    }

    /// Maximum number of records on the served page.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

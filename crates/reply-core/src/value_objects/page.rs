//! Pagination value objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Zero-based page request
///
/// Construct through [`PageRequest::clamped`] so that `size` is always in
/// `[1, max_size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    /// Build a request, clamping `size` into `[1, max_size]`
    pub fn clamped(page: u32, size: u32, max_size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, max_size.max(1)),
        }
    }

    /// Row offset of the first element of this page
    #[inline]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    /// Row limit for this page
    #[inline]
    pub fn limit(&self) -> u64 {
        u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

/// One page of results plus the totals needed to render paging controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let size = u64::from(request.size.max(1));
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages: total_elements.div_ceil(size),
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Transform the elements, keeping the paging metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        u64::from(self.page) + 1 >= self.total_pages
    }
}

/// How tombstoned replies show up in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TombstoneVisibility {
    /// Listed with placeholder content and `deleted = true`
    #[default]
    Masked,
    /// Omitted from listings and from the page totals
    Hidden,
}

impl TombstoneVisibility {
    /// Whether the store should return tombstoned rows at all
    #[inline]
    pub fn includes_deleted(&self) -> bool {
        matches!(self, Self::Masked)
    }
}

impl FromStr for TombstoneVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "masked" => Ok(Self::Masked),
            "hidden" => Ok(Self::Hidden),
            other => Err(format!("unknown tombstone visibility: {other}")),
        }
    }
}

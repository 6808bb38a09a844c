// src/shared/pagination.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Zero means "not provided" for both fields (query strings deserialize to 0).
    pub fn new(page: u32, per_page: u32, default_per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: if per_page == 0 {
                default_per_page
            } else {
                per_page.min(MAX_PER_PAGE)
            },
        }
    }
}

/// Query-string shape shared by every paginated listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: u32,

    #[serde(default)]
    pub per_page: u32,
}

impl PageQuery {
    pub fn to_request(&self, default_per_page: u32) -> PageRequest {
        PageRequest::new(self.page, self.per_page, default_per_page)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl<T> PageResult<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// Slices an already loaded collection. Pages past the end come back empty.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> PageResult<T> {
    let per_page = request.per_page.max(1);
    let page = request.page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page as usize) as u32;

    let start = (page as usize - 1).saturating_mul(per_page as usize);
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect();

    PageResult {
        items,
        page,
        per_page,
        total: total as u64,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_page_count_is_ceiling() {
        for (n, p, expected) in [(0, 6, 0), (1, 6, 1), (6, 6, 1), (7, 6, 2), (25, 10, 3)] {
            let result = paginate(numbers(n), PageRequest { page: 1, per_page: p });
            assert_eq!(result.total_pages, expected, "n={} p={}", n, p);
        }
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let result = paginate(numbers(25), PageRequest { page: 3, per_page: 10 });
        assert_eq!(result.items, vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_last_page_full_when_evenly_divisible() {
        let result = paginate(numbers(20), PageRequest { page: 2, per_page: 10 });
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn test_every_item_lands_on_exactly_one_page() {
        let n = 23;
        let per_page = 4;
        let first = paginate(numbers(n), PageRequest { page: 1, per_page });
        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            seen.extend(paginate(numbers(n), PageRequest { page, per_page }).items);
        }
        assert_eq!(seen, numbers(n));
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let result = paginate(numbers(5), PageRequest { page: 9, per_page: 2 });
        assert!(result.items.is_empty());
        assert_eq!(result.total, 5);
        assert_eq!(result.page, 9);
    }

    #[test]
    fn test_request_normalizes_zero_values() {
        let req = PageRequest::new(0, 0, 6);
        assert_eq!(req, PageRequest { page: 1, per_page: 6 });
    }

    #[test]
    fn test_request_caps_per_page() {
        let req = PageRequest::new(2, 10_000, 6);
        assert_eq!(req.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let result = paginate(numbers(3), PageRequest { page: 1, per_page: 2 }).map(|n| n * 10);
        assert_eq!(result.items, vec![0, 10]);
        assert_eq!(result.total, 3);
        assert_eq!(result.total_pages, 2);
    }
}

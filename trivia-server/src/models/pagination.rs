//! Fixed-size pagination for the question listing

use serde::Deserialize;

/// Questions per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-indexed page of [`QUESTIONS_PER_PAGE`] items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
}

impl Pagination {
    /// Create pagination, clamping the page to a minimum of 1.
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }

    /// Parse a raw `page` query value.
    ///
    /// Missing or non-numeric input falls back to page 1, values below 1
    /// clamp to 1 and anything past `u32::MAX` saturates.
    pub fn parse(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|s| s.trim().parse::<i64>().ok())
            .map(|n| n.clamp(1, u32::MAX as i64) as u32)
            .unwrap_or(1);
        Self::new(page)
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize)
            .saturating_sub(1)
            .saturating_mul(QUESTIONS_PER_PAGE)
    }

    pub fn limit(&self) -> usize {
        QUESTIONS_PER_PAGE
    }

    /// Slice the page out of the full ordered result set.
    ///
    /// Pages past the end yield an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.limit()).min(items.len());
        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Query parameters for pagination, kept as raw pairs.
///
/// Decoding into pairs never fails, so a repeated or malformed `page`
/// degrades to page 1 instead of rejecting the request. The first `page`
/// wins.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PageParams(pub Vec<(String, String)>);

impl PageParams {
    pub fn page(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.as_str())
    }
}

impl From<PageParams> for Pagination {
    fn from(params: PageParams) -> Self {
        Self::parse(params.page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1).offset(), 0);
        assert_eq!(Pagination::new(2).offset(), 10);
        assert_eq!(Pagination::new(5).offset(), 40);
    }

    #[test]
    fn clamps_page() {
        assert_eq!(Pagination::new(0).page, 1);
        assert_eq!(Pagination::parse(Some("0")).page, 1);
        assert_eq!(Pagination::parse(Some("-4")).page, 1);
    }

    #[test]
    fn parse_falls_back_to_first_page() {
        assert_eq!(Pagination::parse(None).page, 1);
        assert_eq!(Pagination::parse(Some("")).page, 1);
        assert_eq!(Pagination::parse(Some("two")).page, 1);
        assert_eq!(Pagination::parse(Some("1.5")).page, 1);
        assert_eq!(Pagination::parse(Some(" 3 ")).page, 3);
    }

    #[test]
    fn parse_saturates_huge_pages() {
        let p = Pagination::parse(Some("99999999999"));
        assert_eq!(p.page, u32::MAX);
        let items: Vec<u32> = (0..25).collect();
        assert!(p.slice(&items).is_empty());
    }

    #[test]
    fn slices_pages() {
        let items: Vec<u32> = (1..=25).collect();

        assert_eq!(Pagination::new(1).slice(&items), &items[0..10]);
        assert_eq!(Pagination::new(2).slice(&items), &items[10..20]);
        assert_eq!(Pagination::new(3).slice(&items), &[21, 22, 23, 24, 25]);
        assert!(Pagination::new(4).slice(&items).is_empty());
    }

    #[test]
    fn empty_collection() {
        let items: Vec<u32> = Vec::new();
        assert!(Pagination::default().slice(&items).is_empty());
    }

    #[test]
    fn from_params() {
        let params = PageParams(vec![("page".into(), "2".into())]);
        assert_eq!(Pagination::from(params), Pagination::new(2));
        assert_eq!(Pagination::from(PageParams::default()), Pagination::new(1));
    }

    #[test]
    fn first_page_param_wins() {
        let params = PageParams(vec![
            ("sort".into(), "id".into()),
            ("page".into(), "3".into()),
            ("page".into(), "1".into()),
        ]);
        assert_eq!(params.page(), Some("3"));
        assert_eq!(Pagination::from(params), Pagination::new(3));
    }
}

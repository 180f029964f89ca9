use crate::domain::value::{PageNumber, PageSize, PageToken};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Query options recognised by every listing endpoint.
///
/// All fields are optional; the server applies its own defaults for anything
/// left unset.
pub struct PaginationOptions {
    pub page_number: Option<PageNumber>,
    pub page_size: Option<PageSize>,
    pub page_token: Option<PageToken>,
}

impl PaginationOptions {
    /// Options requesting a specific page of a specific size.
    pub fn page(page_number: PageNumber, page_size: PageSize) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
            page_token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Continuation value carried by every page except the last one.
pub enum Marker {
    /// Next page derived from the reported page number, page size and total count.
    PageNumber {
        page_number: PageNumber,
        page_size: PageSize,
    },
    /// Explicit token returned by the server.
    Token(PageToken),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One listing response: items in server order plus pagination metadata.
///
/// Invariant: `marker` is `None` iff this is the last page.
pub struct Page<T> {
    items: Vec<T>,
    marker: Option<Marker>,
    page_number: Option<u32>,
    page_size: Option<u32>,
    total_count: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, marker: Option<Marker>) -> Self {
        Self {
            items,
            marker,
            page_number: None,
            page_size: None,
            total_count: None,
        }
    }

    /// The page substituted when a listing namespace does not exist.
    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    pub(crate) fn with_metadata(
        mut self,
        page_number: Option<u32>,
        page_size: Option<u32>,
        total_count: Option<u64>,
    ) -> Self {
        self.page_number = page_number;
        self.page_size = page_size;
        self.total_count = total_count;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    pub fn is_last(&self) -> bool {
        self.marker.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Page number reported by the server, if any.
    pub fn page_number(&self) -> Option<u32> {
        self.page_number
    }

    /// Page size reported by the server, if any.
    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// Total item count across all pages reported by the server, if any.
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Options for the page following `page`, or `None` when `page` ends the listing.
///
/// Pure: only the marker changes between requests, everything else in `prior`
/// is carried over untouched. An empty page ends the listing even if it
/// carries a marker.
pub fn next_options<T>(prior: &PaginationOptions, page: &Page<T>) -> Option<PaginationOptions> {
    if page.is_empty() {
        return None;
    }
    match page.marker()? {
        Marker::PageNumber {
            page_number,
            page_size,
        } => Some(PaginationOptions {
            page_number: Some(*page_number),
            page_size: Some(*page_size),
            page_token: None,
        }),
        Marker::Token(token) => Some(PaginationOptions {
            page_token: Some(token.clone()),
            ..prior.clone()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str) -> Marker {
        Marker::Token(PageToken::new(value).unwrap())
    }

    #[test]
    fn last_page_has_no_next_options() {
        let page = Page::new(vec![1, 2], None);
        assert!(page.is_last());
        assert_eq!(next_options(&PaginationOptions::default(), &page), None);
    }

    #[test]
    fn empty_page_ends_listing_even_with_marker() {
        let page: Page<u8> = Page::new(Vec::new(), Some(token("page2")));
        assert_eq!(next_options(&PaginationOptions::default(), &page), None);
    }

    #[test]
    fn page_number_marker_replaces_number_and_size() {
        let prior = PaginationOptions::page(PageNumber::FIRST, PageSize::new(2).unwrap());
        let page = Page::new(
            vec!["a", "b"],
            Some(Marker::PageNumber {
                page_number: PageNumber::new(2).unwrap(),
                page_size: PageSize::new(2).unwrap(),
            }),
        );

        let next = next_options(&prior, &page).unwrap();
        assert_eq!(next.page_number, Some(PageNumber::new(2).unwrap()));
        assert_eq!(next.page_size, Some(PageSize::new(2).unwrap()));
        assert_eq!(next.page_token, None);
    }

    #[test]
    fn token_marker_keeps_prior_page_size() {
        let prior = PaginationOptions {
            page_size: Some(PageSize::new(50).unwrap()),
            ..PaginationOptions::default()
        };
        let page = Page::new(vec!["a"], Some(token("page2")));

        let next = next_options(&prior, &page).unwrap();
        assert_eq!(next.page_size, Some(PageSize::new(50).unwrap()));
        assert_eq!(next.page_token, Some(PageToken::new("page2").unwrap()));
        assert_eq!(next.page_number, None);
    }

    #[test]
    fn next_options_is_repeatable() {
        let prior = PaginationOptions::default();
        let page = Page::new(vec![1], Some(token("t")));
        assert_eq!(next_options(&prior, &page), next_options(&prior, &page));
    }

    #[test]
    fn page_number_rejects_zero_and_page_size_enforces_range() {
        assert!(PageNumber::new(0).is_err());
        assert!(PageSize::new(0).is_err());
        assert!(PageSize::new(250).is_ok());
        assert!(PageSize::new(251).is_err());
    }
}

//! Common functionality for paging the transaction lists.

/// The config for pagination.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The number of transactions to display per page.
    pub page_size: u64,
    /// The maximum number of pages to show in the pagination indicator.
    pub max_pages: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_size: 10,
            max_pages: 5,
        }
    }
}

/// One element of the pagination indicator under a transaction list.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PaginationIndicator {
    /// A link to another page.
    Page(u64),
    /// The page currently displayed.
    CurrPage(u64),
    /// A gap between page links.
    Ellipsis,
    /// A link to the next page.
    NextButton(u64),
    /// A link to the previous page.
    BackButton(u64),
}

/// Build the sequence of pagination indicators for `curr_page` out of
/// `page_count` pages, showing at most `max_pages` numbered links around the
/// current page (plus first/last page links and back/next buttons).
pub(crate) fn create_pagination_indicators(
    curr_page: u64,
    page_count: u64,
    max_pages: u64,
) -> Vec<PaginationIndicator> {
    let map_page = |page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    };

    let mut indicators: Vec<PaginationIndicator> = if page_count <= max_pages {
        (1..=page_count).map(map_page).collect()
    } else if curr_page <= (max_pages / 2) {
        (1..=max_pages).map(map_page).collect()
    } else if curr_page > (page_count - max_pages / 2) {
        ((page_count - max_pages + 1)..=page_count)
            .map(map_page)
            .collect()
    } else {
        ((curr_page - max_pages / 2)..=(curr_page + max_pages / 2))
            .map(map_page)
            .collect()
    };

    if page_count > max_pages {
        if curr_page > (max_pages / 2) + 1 {
            indicators.insert(0, PaginationIndicator::Page(1));
            indicators.insert(1, PaginationIndicator::Ellipsis);
        }

        if curr_page < (page_count - max_pages / 2) {
            indicators.push(PaginationIndicator::Ellipsis);
            indicators.push(PaginationIndicator::Page(page_count));
        }
    }

    if curr_page > 1 {
        indicators.insert(0, PaginationIndicator::BackButton(curr_page - 1));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}

#[cfg(test)]
mod pagination_tests {
    use crate::pagination::{PaginationIndicator, create_pagination_indicators};

    #[test]
    fn shows_all_pages_when_they_fit() {
        let want = [
            PaginationIndicator::CurrPage(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::Page(3),
            PaginationIndicator::NextButton(2),
        ];

        let got = create_pagination_indicators(1, 3, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn elides_trailing_pages_from_the_first_page() {
        let want = [
            PaginationIndicator::CurrPage(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::Page(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::Page(5),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(10),
            PaginationIndicator::NextButton(2),
        ];

        let got = create_pagination_indicators(1, 10, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn elides_both_ends_from_a_middle_page() {
        let want = [
            PaginationIndicator::BackButton(4),
            PaginationIndicator::Page(1),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::CurrPage(5),
            PaginationIndicator::Page(6),
            PaginationIndicator::Page(7),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(10),
            PaginationIndicator::NextButton(6),
        ];

        let got = create_pagination_indicators(5, 10, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn elides_leading_pages_from_the_last_page() {
        let want = [
            PaginationIndicator::BackButton(9),
            PaginationIndicator::Page(1),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(6),
            PaginationIndicator::Page(7),
            PaginationIndicator::Page(8),
            PaginationIndicator::Page(9),
            PaginationIndicator::CurrPage(10),
        ];

        let got = create_pagination_indicators(10, 10, 5);

        assert_eq!(want, got.as_slice());
    }

    #[test]
    fn single_page_has_no_buttons() {
        let want = [PaginationIndicator::CurrPage(1)];

        let got = create_pagination_indicators(1, 1, 5);

        assert_eq!(want, got.as_slice());
    }
}

//! The navigation bar shown at the top of every page.

use maud::{Markup, html};

use crate::endpoints;

/// A link in the navigation bar.
///
/// It will change appearance if `is_current` is set to `true`. Only one link
/// should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "nav-link nav-link-current"
        } else {
            "nav-link"
        };

        html!( li { a href=(self.url) class=(style) { (self.title) } } )
    }
}

/// The navigation bar template.
pub(crate) struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be marked as
    /// active and displayed differently in the HTML.
    pub(crate) fn new(active_endpoint: &str) -> NavBar<'_> {
        let entries = [
            (endpoints::ROOT, "Dashboard"),
            (endpoints::EXPENSES_VIEW, "Expenses"),
            (endpoints::INCOMES_VIEW, "Incomes"),
            (endpoints::CATEGORIES_VIEW, "Categories"),
            (endpoints::PAYMENT_METHODS_VIEW, "Payment Methods"),
            (endpoints::INCOME_SOURCES_VIEW, "Income Sources"),
        ];

        let links = entries
            .into_iter()
            .map(|(url, title)| Link {
                url,
                title,
                is_current: active_endpoint == url,
            })
            .collect();

        NavBar { links }
    }

    pub(crate) fn into_html(self) -> Markup {
        html!(
            nav class="nav-bar"
            {
                span class="nav-brand" { "Spendlog" }

                ul class="nav-links"
                {
                    @for link in self.links {
                        (link.into_html())
                    }
                }
            }
        )
    }
}

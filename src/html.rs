//! The base page layout, shared style constants, and shared page fragments.

use maud::{DOCTYPE, Markup, html};

use crate::endpoints;

// Class names defined in static/main.css.

// Link styles
pub(crate) const LINK_STYLE: &str = "link";

// Button styles
pub(crate) const BUTTON_PRIMARY_STYLE: &str = "button-primary";
pub(crate) const BUTTON_DANGER_STYLE: &str = "button-danger";
pub(crate) const BUTTON_SECONDARY_STYLE: &str = "button-secondary";

// Form styles
pub(crate) const FORM_STYLE: &str = "form";
pub(crate) const FORM_LABEL_STYLE: &str = "form-label";
pub(crate) const FORM_INPUT_STYLE: &str = "form-input";
pub(crate) const FORM_ERROR_STYLE: &str = "form-error";

// Table styles
pub(crate) const TABLE_STYLE: &str = "data-table";
pub(crate) const TABLE_EMPTY_STYLE: &str = "table-empty";

// Page containers
pub(crate) const PAGE_CONTAINER_STYLE: &str = "page";
pub(crate) const PAGE_HEADER_STYLE: &str = "page-header";

/// Wrap `content` in the app's base HTML document: doctype, head with the
/// stylesheet link, and the page body.
pub(crate) fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Spendlog" }
                link href="/static/main.css" rel="stylesheet";
            }

            body
            {
                (content)
            }
        }
    }
}

/// A full-page error view used for the 404 and 500 pages.
pub(crate) fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="error-panel"
            {
                h1 class="error-code" { (header) }
                p class="error-description" { (description) }
                p { (fix) }

                a href=(endpoints::ROOT) class=(BUTTON_SECONDARY_STYLE) { "Back to the dashboard" }
            }
        }
    );

    base(title, &content)
}

/// A confirmation page asking the user whether to delete `subject`.
///
/// The page contains a single form that POSTs to `delete_url` plus a cancel
/// link back to `cancel_url`; nothing is deleted until the form is submitted.
pub(crate) fn confirm_delete_view(
    entity_title: &str,
    subject: &str,
    delete_url: &str,
    cancel_url: &str,
    nav_bar: Markup,
) -> Markup {
    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="confirm-panel"
            {
                h1 { "Delete " (entity_title) }

                p
                {
                    "Are you sure you want to delete \"" (subject) "\"? "
                    "This cannot be undone."
                }

                form method="post" action=(delete_url)
                {
                    button type="submit" class=(BUTTON_DANGER_STYLE) { "Delete" }
                }

                a href=(cancel_url) class=(LINK_STYLE) { "Cancel" }
            }
        }
    );

    base(&format!("Delete {entity_title}"), &content)
}

/// An inline validation message rendered under a form field, or nothing when
/// there is no error.
pub(crate) fn field_error(message: &Option<String>) -> Markup {
    html!(
        @if let Some(message) = message {
            p class=(FORM_ERROR_STYLE) { (message) }
        }
    )
}

//! Maud views for the expense and income pages.

use maud::{Markup, html};
use time::macros::format_description;

use crate::{
    currency::format_currency,
    endpoints::format_endpoint,
    html::{
        BUTTON_DANGER_STYLE, BUTTON_PRIMARY_STYLE, FORM_ERROR_STYLE, FORM_INPUT_STYLE,
        FORM_LABEL_STYLE, FORM_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, PAGE_HEADER_STYLE,
        TABLE_EMPTY_STYLE, TABLE_STYLE, base, field_error,
    },
    pagination::{PaginationIndicator, create_pagination_indicators},
    reference::Reference,
};

use super::domain::{Transaction, TransactionFormData, TransactionFormErrors, TransactionKind};

/// A table of transactions with each description linking to its detail page.
///
/// Also used on the reference detail pages to list the transactions using a
/// category, payment method, or income source.
pub(crate) fn transaction_table(kind: &TransactionKind, transactions: &[Transaction]) -> Markup {
    if transactions.is_empty() {
        return html!(
            p class=(TABLE_EMPTY_STYLE) { "No " (kind.title_plural.to_lowercase()) " recorded." }
        );
    }

    html!(
        table class=(TABLE_STYLE)
        {
            thead
            {
                tr
                {
                    th { "Date" }
                    th { "Description" }
                    th { "Amount" }
                    th { "Category" }
                    th { (kind.owner_label) }
                }
            }

            tbody
            {
                @for transaction in transactions {
                    tr
                    {
                        td { (transaction.date) }
                        td
                        {
                            a href=(format_endpoint(kind.detail_endpoint, transaction.id))
                                class=(LINK_STYLE)
                            {
                                (transaction.description)
                            }
                        }
                        td { (format_currency(transaction.amount)) }
                        td { (transaction.category_name.as_deref().unwrap_or("-")) }
                        td { (transaction.owner_name.as_deref().unwrap_or("-")) }
                    }
                }
            }
        }
    )
}

/// The paginated list page for a transaction kind.
pub(super) fn transactions_list_view(
    kind: &TransactionKind,
    transactions: &[Transaction],
    curr_page: u64,
    page_count: u64,
    max_pages: u64,
    nav_bar: Markup,
) -> Markup {
    let indicators = create_pagination_indicators(curr_page, page_count, max_pages);

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            header class=(PAGE_HEADER_STYLE)
            {
                h1 { (kind.title_plural) }
                a href=(kind.new_endpoint) class=(BUTTON_PRIMARY_STYLE) { "Add " (kind.title) }
            }

            (transaction_table(kind, transactions))

            @if page_count > 1 {
                nav class="pagination" aria-label="pagination"
                {
                    @for indicator in &indicators {
                        @match indicator {
                            PaginationIndicator::BackButton(page) => {
                                a href={ "?page=" (page) } class="pagination-link" { "Previous" }
                            }
                            PaginationIndicator::Page(page) => {
                                a href={ "?page=" (page) } class="pagination-link" { (page) }
                            }
                            PaginationIndicator::CurrPage(page) => {
                                span class="pagination-current" { (page) }
                            }
                            PaginationIndicator::Ellipsis => {
                                span class="pagination-ellipsis" { "..." }
                            }
                            PaginationIndicator::NextButton(page) => {
                                a href={ "?page=" (page) } class="pagination-link" { "Next" }
                            }
                        }
                    }
                }
            }
        }
    );

    base(kind.title_plural, &content)
}

/// The create/edit form for a transaction, rendered with any validation
/// errors inline under the offending fields.
pub(super) fn transaction_form_view(
    kind: &TransactionKind,
    title: &str,
    action: &str,
    form: &TransactionFormData,
    errors: &TransactionFormErrors,
    categories: &[Reference],
    owners: &[Reference],
    cancel_url: &str,
    nav_bar: Markup,
) -> Markup {
    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { (title) }

            form method="post" action=(action) class=(FORM_STYLE)
            {
                @if let Some(message) = &errors.general {
                    p class=(FORM_ERROR_STYLE) { (message) }
                }

                label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                input type="text" name="description" id="description"
                    value=(form.description) class=(FORM_INPUT_STYLE);
                (field_error(&errors.description))

                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input type="text" name="amount" id="amount" inputmode="decimal"
                    value=(form.amount) class=(FORM_INPUT_STYLE);
                (field_error(&errors.amount))

                label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                input type="date" name="date" id="date"
                    value=(form.date) class=(FORM_INPUT_STYLE);
                (field_error(&errors.date))

                label for="category_id" class=(FORM_LABEL_STYLE) { "Category" }
                (reference_select("category_id", &form.category_id, categories))
                (field_error(&errors.category))

                label for="owner_id" class=(FORM_LABEL_STYLE) { (kind.owner_label) }
                (reference_select("owner_id", &form.owner_id, owners))
                (field_error(&errors.owner))

                label for="notes" class=(FORM_LABEL_STYLE) { "Notes" }
                textarea name="notes" id="notes" class=(FORM_INPUT_STYLE) { (form.notes) }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
                a href=(cancel_url) class=(LINK_STYLE) { "Cancel" }
            }
        }
    );

    base(title, &content)
}

fn reference_select(name: &str, selected: &str, options: &[Reference]) -> Markup {
    html!(
        select name=(name) id=(name) class=(FORM_INPUT_STYLE)
        {
            option value="" selected[selected.is_empty()] { "---------" }

            @for option in options {
                option value=(option.id)
                    selected[selected == option.id.to_string()]
                {
                    (option.name)
                }
            }
        }
    )
}

/// The read-only detail page for a single transaction.
pub(super) fn transaction_detail_view(
    kind: &TransactionKind,
    transaction: &Transaction,
    nav_bar: Markup,
) -> Markup {
    let timestamp_format = format_description!("[year]-[month]-[day] [hour]:[minute] UTC");
    let none = "-";

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            header class=(PAGE_HEADER_STYLE)
            {
                h1 { (kind.title) ": " (transaction.description) }

                div
                {
                    a href=(format_endpoint(kind.edit_endpoint, transaction.id))
                        class=(BUTTON_PRIMARY_STYLE) { "Edit" }
                    a href=(format_endpoint(kind.delete_endpoint, transaction.id))
                        class=(BUTTON_DANGER_STYLE) { "Delete" }
                }
            }

            dl class="detail-list"
            {
                dt { "Amount" }
                dd { (format_currency(transaction.amount)) }

                dt { "Date" }
                dd { (transaction.date) }

                dt { "Category" }
                dd { (transaction.category_name.as_deref().unwrap_or(none)) }

                dt { (kind.owner_label) }
                dd { (transaction.owner_name.as_deref().unwrap_or(none)) }

                dt { "Notes" }
                dd { (transaction.notes.as_deref().unwrap_or(none)) }

                dt { "Created" }
                dd { (transaction.created_at.format(&timestamp_format).unwrap_or_default()) }

                dt { "Updated" }
                dd { (transaction.updated_at.format(&timestamp_format).unwrap_or_default()) }
            }

            a href=(kind.list_endpoint) class=(LINK_STYLE) { "Back to " (kind.title_plural) }
        }
    );

    base(&format!("{}: {}", kind.title, transaction.description), &content)
}

//! Maud views for the category, payment method, and income source pages.

use maud::{Markup, html};

use crate::{
    endpoints::format_endpoint,
    html::{
        BUTTON_DANGER_STYLE, BUTTON_PRIMARY_STYLE, FORM_INPUT_STYLE, FORM_LABEL_STYLE, FORM_STYLE,
        LINK_STYLE, PAGE_CONTAINER_STYLE, PAGE_HEADER_STYLE, TABLE_EMPTY_STYLE, TABLE_STYLE, base,
        field_error,
    },
    transaction::{Transaction, transaction_table},
};

use super::domain::{
    Reference, ReferenceDescriptor, ReferenceFormData, ReferenceFormErrors, ReferenceUsage,
};

/// The list page for a reference entity type.
pub(super) fn references_list_view(
    descriptor: &ReferenceDescriptor,
    references: &[Reference],
    nav_bar: Markup,
) -> Markup {
    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            header class=(PAGE_HEADER_STYLE)
            {
                h1 { (descriptor.title_plural) }
                a href=(descriptor.new_endpoint) class=(BUTTON_PRIMARY_STYLE)
                {
                    "Add " (descriptor.title)
                }
            }

            @if references.is_empty() {
                p class=(TABLE_EMPTY_STYLE)
                {
                    "No " (descriptor.title_plural.to_lowercase()) " yet."
                }
            } @else {
                table class=(TABLE_STYLE)
                {
                    thead
                    {
                        tr
                        {
                            th { "Name" }
                            th { "Description" }
                        }
                    }

                    tbody
                    {
                        @for reference in references {
                            tr
                            {
                                td
                                {
                                    a href=(format_endpoint(descriptor.detail_endpoint, reference.id))
                                        class=(LINK_STYLE)
                                    {
                                        (reference.name)
                                    }
                                }
                                td { (reference.description.as_deref().unwrap_or("-")) }
                            }
                        }
                    }
                }
            }
        }
    );

    base(descriptor.title_plural, &content)
}

/// The create/edit form for a reference entity.
pub(super) fn reference_form_view(
    descriptor: &ReferenceDescriptor,
    title: &str,
    action: &str,
    form: &ReferenceFormData,
    errors: &ReferenceFormErrors,
    nav_bar: Markup,
) -> Markup {
    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { (title) }

            form method="post" action=(action) class=(FORM_STYLE)
            {
                label for="name" class=(FORM_LABEL_STYLE) { "Name" }
                input type="text" name="name" id="name"
                    value=(form.name) class=(FORM_INPUT_STYLE);
                (field_error(&errors.name))

                label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                textarea name="description" id="description" class=(FORM_INPUT_STYLE)
                {
                    (form.description)
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Save" }
                a href=(descriptor.list_endpoint) class=(LINK_STYLE) { "Cancel" }
            }
        }
    );

    base(title, &content)
}

/// The detail page for a reference entity, with one table of transactions per
/// usage (e.g. expenses in a category, then incomes in that category).
pub(super) fn reference_detail_view(
    descriptor: &ReferenceDescriptor,
    reference: &Reference,
    usages: &[(&ReferenceUsage, Vec<Transaction>)],
    nav_bar: Markup,
) -> Markup {
    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            header class=(PAGE_HEADER_STYLE)
            {
                h1 { (descriptor.title) ": " (reference.name) }

                div
                {
                    a href=(format_endpoint(descriptor.edit_endpoint, reference.id))
                        class=(BUTTON_PRIMARY_STYLE) { "Edit" }
                    a href=(format_endpoint(descriptor.delete_endpoint, reference.id))
                        class=(BUTTON_DANGER_STYLE) { "Delete" }
                }
            }

            @if let Some(description) = &reference.description {
                p { (description) }
            }

            @for (usage, transactions) in usages {
                section
                {
                    h2 { (usage.heading) }
                    (transaction_table(usage.kind, transactions))
                }
            }

            a href=(descriptor.list_endpoint) class=(LINK_STYLE)
            {
                "Back to " (descriptor.title_plural)
            }
        }
    );

    base(
        &format!("{}: {}", descriptor.title, reference.name),
        &content,
    )
}

#[cfg(test)]
mod reference_view_tests {
    use crate::{
        category::CATEGORY,
        navigation::NavBar,
        reference::domain::{Reference, ReferenceFormData, ReferenceFormErrors},
        test_utils::parse_html_document,
    };

    use super::{reference_detail_view, reference_form_view, references_list_view};

    fn nav_bar() -> maud::Markup {
        NavBar::new(CATEGORY.list_endpoint).into_html()
    }

    fn sample_reference() -> Reference {
        Reference {
            id: 3,
            name: "Groceries".to_owned(),
            description: Some("Weekly food shopping".to_owned()),
        }
    }

    #[test]
    fn list_links_to_detail_pages() {
        let markup = references_list_view(&CATEGORY, &[sample_reference()], nav_bar());

        let document = parse_html_document(&markup.into_string());
        let selector = scraper::Selector::parse("a[href='/categories/3/']").unwrap();
        assert!(
            document.select(&selector).next().is_some(),
            "list should link to the category detail page"
        );
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let markup = references_list_view(&CATEGORY, &[], nav_bar());

        assert!(markup.into_string().contains("No categories yet."));
    }

    #[test]
    fn form_renders_name_error() {
        let errors = ReferenceFormErrors {
            name: Some("Enter a name.".to_owned()),
        };

        let markup = reference_form_view(
            &CATEGORY,
            "Add Category",
            CATEGORY.new_endpoint,
            &ReferenceFormData::default(),
            &errors,
            nav_bar(),
        );

        assert!(markup.into_string().contains("Enter a name."));
    }

    #[test]
    fn detail_shows_usage_headings() {
        let reference = sample_reference();
        let usages: Vec<_> = CATEGORY
            .usages
            .iter()
            .map(|usage| (usage, Vec::new()))
            .collect();

        let markup = reference_detail_view(&CATEGORY, &reference, &usages, nav_bar());

        let html = markup.into_string();
        for usage in CATEGORY.usages {
            assert!(html.contains(usage.heading));
        }
    }
}

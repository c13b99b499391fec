//! Category pages: the shared label both expenses and incomes can carry.

use axum::{
    extract::{Form, Path, State},
    response::Response,
};

use crate::{
    Error,
    database_id::DatabaseId,
    endpoints,
    expense::EXPENSE,
    income::INCOME,
    reference::{
        ReferenceDescriptor, ReferenceFormData, ReferenceState, ReferenceUsage,
        create_reference_endpoint, delete_reference_endpoint, delete_reference_page,
        edit_reference_page, new_reference_page, reference_detail_page, references_page,
        update_reference_endpoint,
    },
};

/// The category reference entity. Both transaction kinds carry an optional
/// category, so its detail page shows two usage tables.
pub(crate) static CATEGORY: ReferenceDescriptor = ReferenceDescriptor {
    table: "category",
    singular: "category",
    title: "Category",
    title_plural: "Categories",
    usages: &[
        ReferenceUsage {
            kind: &EXPENSE,
            column: "category_id",
            heading: "Expenses in this category",
        },
        ReferenceUsage {
            kind: &INCOME,
            column: "category_id",
            heading: "Incomes in this category",
        },
    ],
    list_endpoint: endpoints::CATEGORIES_VIEW,
    new_endpoint: endpoints::NEW_CATEGORY_VIEW,
    detail_endpoint: endpoints::CATEGORY_DETAIL_VIEW,
    edit_endpoint: endpoints::EDIT_CATEGORY_VIEW,
    delete_endpoint: endpoints::DELETE_CATEGORY_VIEW,
};

/// Route handler for the category list page.
pub(crate) async fn get_categories_page(
    State(state): State<ReferenceState>,
) -> Result<Response, Error> {
    references_page(&CATEGORY, state).await
}

/// Route handler for the category creation page.
pub(crate) async fn get_new_category_page() -> Result<Response, Error> {
    new_reference_page(&CATEGORY).await
}

/// Route handler for the category creation form submission.
pub(crate) async fn create_category_endpoint(
    State(state): State<ReferenceState>,
    Form(form): Form<ReferenceFormData>,
) -> Result<Response, Error> {
    create_reference_endpoint(&CATEGORY, state, form).await
}

/// Route handler for the category detail page.
pub(crate) async fn get_category_detail_page(
    State(state): State<ReferenceState>,
    Path(category_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    reference_detail_page(&CATEGORY, state, category_id).await
}

/// Route handler for the category edit page.
pub(crate) async fn get_edit_category_page(
    State(state): State<ReferenceState>,
    Path(category_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    edit_reference_page(&CATEGORY, state, category_id).await
}

/// Route handler for the category edit form submission.
pub(crate) async fn update_category_endpoint(
    State(state): State<ReferenceState>,
    Path(category_id): Path<DatabaseId>,
    Form(form): Form<ReferenceFormData>,
) -> Result<Response, Error> {
    update_reference_endpoint(&CATEGORY, state, category_id, form).await
}

/// Route handler for the category delete confirmation page.
pub(crate) async fn get_delete_category_page(
    State(state): State<ReferenceState>,
    Path(category_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    delete_reference_page(&CATEGORY, state, category_id).await
}

/// Route handler for the category delete confirmation submission.
pub(crate) async fn delete_category_endpoint(
    State(state): State<ReferenceState>,
    Path(category_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    delete_reference_endpoint(&CATEGORY, state, category_id).await
}

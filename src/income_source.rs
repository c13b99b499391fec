//! Income source pages: where an income came from.

use axum::{
    extract::{Form, Path, State},
    response::Response,
};

use crate::{
    Error,
    database_id::DatabaseId,
    endpoints,
    income::INCOME,
    reference::{
        ReferenceDescriptor, ReferenceFormData, ReferenceState, ReferenceUsage,
        create_reference_endpoint, delete_reference_endpoint, delete_reference_page,
        edit_reference_page, new_reference_page, reference_detail_page, references_page,
        update_reference_endpoint,
    },
};

/// The income source reference entity. Only incomes carry one.
pub(crate) static INCOME_SOURCE: ReferenceDescriptor = ReferenceDescriptor {
    table: "income_source",
    singular: "income source",
    title: "Income Source",
    title_plural: "Income Sources",
    usages: &[ReferenceUsage {
        kind: &INCOME,
        column: "source_id",
        heading: "Incomes from this source",
    }],
    list_endpoint: endpoints::INCOME_SOURCES_VIEW,
    new_endpoint: endpoints::NEW_INCOME_SOURCE_VIEW,
    detail_endpoint: endpoints::INCOME_SOURCE_DETAIL_VIEW,
    edit_endpoint: endpoints::EDIT_INCOME_SOURCE_VIEW,
    delete_endpoint: endpoints::DELETE_INCOME_SOURCE_VIEW,
};

/// Route handler for the income source list page.
pub(crate) async fn get_income_sources_page(
    State(state): State<ReferenceState>,
) -> Result<Response, Error> {
    references_page(&INCOME_SOURCE, state).await
}

/// Route handler for the income source creation page.
pub(crate) async fn get_new_income_source_page() -> Result<Response, Error> {
    new_reference_page(&INCOME_SOURCE).await
}

/// Route handler for the income source creation form submission.
pub(crate) async fn create_income_source_endpoint(
    State(state): State<ReferenceState>,
    Form(form): Form<ReferenceFormData>,
) -> Result<Response, Error> {
    create_reference_endpoint(&INCOME_SOURCE, state, form).await
}

/// Route handler for the income source detail page.
pub(crate) async fn get_income_source_detail_page(
    State(state): State<ReferenceState>,
    Path(income_source_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    reference_detail_page(&INCOME_SOURCE, state, income_source_id).await
}

/// Route handler for the income source edit page.
pub(crate) async fn get_edit_income_source_page(
    State(state): State<ReferenceState>,
    Path(income_source_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    edit_reference_page(&INCOME_SOURCE, state, income_source_id).await
}

/// Route handler for the income source edit form submission.
pub(crate) async fn update_income_source_endpoint(
    State(state): State<ReferenceState>,
    Path(income_source_id): Path<DatabaseId>,
    Form(form): Form<ReferenceFormData>,
) -> Result<Response, Error> {
    update_reference_endpoint(&INCOME_SOURCE, state, income_source_id, form).await
}

/// Route handler for the income source delete confirmation page.
pub(crate) async fn get_delete_income_source_page(
    State(state): State<ReferenceState>,
    Path(income_source_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    delete_reference_page(&INCOME_SOURCE, state, income_source_id).await
}

/// Route handler for the income source delete confirmation submission.
pub(crate) async fn delete_income_source_endpoint(
    State(state): State<ReferenceState>,
    Path(income_source_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    delete_reference_endpoint(&INCOME_SOURCE, state, income_source_id).await
}

//! Payment method pages: how an expense was paid.

use axum::{
    extract::{Form, Path, State},
    response::Response,
};

use crate::{
    Error,
    database_id::DatabaseId,
    endpoints,
    expense::EXPENSE,
    reference::{
        ReferenceDescriptor, ReferenceFormData, ReferenceState, ReferenceUsage,
        create_reference_endpoint, delete_reference_endpoint, delete_reference_page,
        edit_reference_page, new_reference_page, reference_detail_page, references_page,
        update_reference_endpoint,
    },
};

/// The payment method reference entity. Only expenses carry one.
pub(crate) static PAYMENT_METHOD: ReferenceDescriptor = ReferenceDescriptor {
    table: "payment_method",
    singular: "payment method",
    title: "Payment Method",
    title_plural: "Payment Methods",
    usages: &[ReferenceUsage {
        kind: &EXPENSE,
        column: "payment_method_id",
        heading: "Expenses paid with this method",
    }],
    list_endpoint: endpoints::PAYMENT_METHODS_VIEW,
    new_endpoint: endpoints::NEW_PAYMENT_METHOD_VIEW,
    detail_endpoint: endpoints::PAYMENT_METHOD_DETAIL_VIEW,
    edit_endpoint: endpoints::EDIT_PAYMENT_METHOD_VIEW,
    delete_endpoint: endpoints::DELETE_PAYMENT_METHOD_VIEW,
};

/// Route handler for the payment method list page.
pub(crate) async fn get_payment_methods_page(
    State(state): State<ReferenceState>,
) -> Result<Response, Error> {
    references_page(&PAYMENT_METHOD, state).await
}

/// Route handler for the payment method creation page.
pub(crate) async fn get_new_payment_method_page() -> Result<Response, Error> {
    new_reference_page(&PAYMENT_METHOD).await
}

/// Route handler for the payment method creation form submission.
pub(crate) async fn create_payment_method_endpoint(
    State(state): State<ReferenceState>,
    Form(form): Form<ReferenceFormData>,
) -> Result<Response, Error> {
    create_reference_endpoint(&PAYMENT_METHOD, state, form).await
}

/// Route handler for the payment method detail page.
pub(crate) async fn get_payment_method_detail_page(
    State(state): State<ReferenceState>,
    Path(payment_method_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    reference_detail_page(&PAYMENT_METHOD, state, payment_method_id).await
}

/// Route handler for the payment method edit page.
pub(crate) async fn get_edit_payment_method_page(
    State(state): State<ReferenceState>,
    Path(payment_method_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    edit_reference_page(&PAYMENT_METHOD, state, payment_method_id).await
}

/// Route handler for the payment method edit form submission.
pub(crate) async fn update_payment_method_endpoint(
    State(state): State<ReferenceState>,
    Path(payment_method_id): Path<DatabaseId>,
    Form(form): Form<ReferenceFormData>,
) -> Result<Response, Error> {
    update_reference_endpoint(&PAYMENT_METHOD, state, payment_method_id, form).await
}

/// Route handler for the payment method delete confirmation page.
pub(crate) async fn get_delete_payment_method_page(
    State(state): State<ReferenceState>,
    Path(payment_method_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    delete_reference_page(&PAYMENT_METHOD, state, payment_method_id).await
}

/// Route handler for the payment method delete confirmation submission.
pub(crate) async fn delete_payment_method_endpoint(
    State(state): State<ReferenceState>,
    Path(payment_method_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    delete_reference_endpoint(&PAYMENT_METHOD, state, payment_method_id).await
}

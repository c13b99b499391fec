//! Income pages: money coming in.

use axum::{
    extract::{Form, Path, Query, State},
    response::Response,
};

use crate::{
    Error,
    database_id::DatabaseId,
    endpoints,
    income_source::INCOME_SOURCE,
    transaction::{
        PageQuery, TransactionFormData, TransactionFormState, TransactionKind,
        TransactionListState, TransactionState, create_transaction_endpoint,
        delete_transaction_endpoint, delete_transaction_page, edit_transaction_page,
        new_transaction_page, transaction_detail_page, transactions_page,
        update_transaction_endpoint,
    },
};

/// The income transaction kind. Incomes are owned by an income source and
/// optionally categorized.
pub(crate) static INCOME: TransactionKind = TransactionKind {
    table: "income",
    singular: "income",
    title: "Income",
    title_plural: "Incomes",
    owner: &INCOME_SOURCE,
    owner_column: "source_id",
    owner_label: "Source",
    fk_label: "category or income source",
    list_endpoint: endpoints::INCOMES_VIEW,
    new_endpoint: endpoints::NEW_INCOME_VIEW,
    detail_endpoint: endpoints::INCOME_DETAIL_VIEW,
    edit_endpoint: endpoints::EDIT_INCOME_VIEW,
    delete_endpoint: endpoints::DELETE_INCOME_VIEW,
};

/// Route handler for the paginated income list page.
pub(crate) async fn get_incomes_page(
    State(state): State<TransactionListState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, Error> {
    transactions_page(&INCOME, state, query).await
}

/// Route handler for the income creation page.
pub(crate) async fn get_new_income_page(
    State(state): State<TransactionFormState>,
) -> Result<Response, Error> {
    new_transaction_page(&INCOME, state).await
}

/// Route handler for the income creation form submission.
pub(crate) async fn create_income_endpoint(
    State(state): State<TransactionFormState>,
    Form(form): Form<TransactionFormData>,
) -> Result<Response, Error> {
    create_transaction_endpoint(&INCOME, state, form).await
}

/// Route handler for the income detail page.
pub(crate) async fn get_income_detail_page(
    State(state): State<TransactionState>,
    Path(income_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    transaction_detail_page(&INCOME, state, income_id).await
}

/// Route handler for the income edit page.
pub(crate) async fn get_edit_income_page(
    State(state): State<TransactionFormState>,
    Path(income_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    edit_transaction_page(&INCOME, state, income_id).await
}

/// Route handler for the income edit form submission.
pub(crate) async fn update_income_endpoint(
    State(state): State<TransactionFormState>,
    Path(income_id): Path<DatabaseId>,
    Form(form): Form<TransactionFormData>,
) -> Result<Response, Error> {
    update_transaction_endpoint(&INCOME, state, income_id, form).await
}

/// Route handler for the income delete confirmation page.
pub(crate) async fn get_delete_income_page(
    State(state): State<TransactionState>,
    Path(income_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    delete_transaction_page(&INCOME, state, income_id).await
}

/// Route handler for the income delete confirmation submission.
pub(crate) async fn delete_income_endpoint(
    State(state): State<TransactionState>,
    Path(income_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    delete_transaction_endpoint(&INCOME, state, income_id).await
}

//! Expense pages: money going out.

use axum::{
    extract::{Form, Path, Query, State},
    response::Response,
};

use crate::{
    Error,
    database_id::DatabaseId,
    endpoints,
    payment_method::PAYMENT_METHOD,
    transaction::{
        PageQuery, TransactionFormData, TransactionFormState, TransactionKind,
        TransactionListState, TransactionState, create_transaction_endpoint,
        delete_transaction_endpoint, delete_transaction_page, edit_transaction_page,
        new_transaction_page, transaction_detail_page, transactions_page,
        update_transaction_endpoint,
    },
};

/// The expense transaction kind. Expenses are owned by a payment method and
/// optionally categorized.
pub(crate) static EXPENSE: TransactionKind = TransactionKind {
    table: "expense",
    singular: "expense",
    title: "Expense",
    title_plural: "Expenses",
    owner: &PAYMENT_METHOD,
    owner_column: "payment_method_id",
    owner_label: "Payment Method",
    fk_label: "category or payment method",
    list_endpoint: endpoints::EXPENSES_VIEW,
    new_endpoint: endpoints::NEW_EXPENSE_VIEW,
    detail_endpoint: endpoints::EXPENSE_DETAIL_VIEW,
    edit_endpoint: endpoints::EDIT_EXPENSE_VIEW,
    delete_endpoint: endpoints::DELETE_EXPENSE_VIEW,
};

/// Route handler for the paginated expense list page.
pub(crate) async fn get_expenses_page(
    State(state): State<TransactionListState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, Error> {
    transactions_page(&EXPENSE, state, query).await
}

/// Route handler for the expense creation page.
pub(crate) async fn get_new_expense_page(
    State(state): State<TransactionFormState>,
) -> Result<Response, Error> {
    new_transaction_page(&EXPENSE, state).await
}

/// Route handler for the expense creation form submission.
pub(crate) async fn create_expense_endpoint(
    State(state): State<TransactionFormState>,
    Form(form): Form<TransactionFormData>,
) -> Result<Response, Error> {
    create_transaction_endpoint(&EXPENSE, state, form).await
}

/// Route handler for the expense detail page.
pub(crate) async fn get_expense_detail_page(
    State(state): State<TransactionState>,
    Path(expense_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    transaction_detail_page(&EXPENSE, state, expense_id).await
}

/// Route handler for the expense edit page.
pub(crate) async fn get_edit_expense_page(
    State(state): State<TransactionFormState>,
    Path(expense_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    edit_transaction_page(&EXPENSE, state, expense_id).await
}

/// Route handler for the expense edit form submission.
pub(crate) async fn update_expense_endpoint(
    State(state): State<TransactionFormState>,
    Path(expense_id): Path<DatabaseId>,
    Form(form): Form<TransactionFormData>,
) -> Result<Response, Error> {
    update_transaction_endpoint(&EXPENSE, state, expense_id, form).await
}

/// Route handler for the expense delete confirmation page.
pub(crate) async fn get_delete_expense_page(
    State(state): State<TransactionState>,
    Path(expense_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    delete_transaction_page(&EXPENSE, state, expense_id).await
}

/// Route handler for the expense delete confirmation submission.
pub(crate) async fn delete_expense_endpoint(
    State(state): State<TransactionState>,
    Path(expense_id): Path<DatabaseId>,
) -> Result<Response, Error> {
    delete_transaction_endpoint(&EXPENSE, state, expense_id).await
}

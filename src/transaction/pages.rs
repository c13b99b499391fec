//! Handlers for the transaction pages, shared between expenses and incomes.
//!
//! These functions do the actual work; the route handlers in [crate::expense]
//! and [crate::income] are thin wrappers that pass in the matching
//! [TransactionKind].

use std::sync::{Arc, Mutex};

use axum::{
    extract::FromRef,
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::Connection;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    category::CATEGORY,
    database_id::DatabaseId,
    db::lock_database,
    endpoints::format_endpoint,
    html::confirm_delete_view,
    navigation::NavBar,
    pagination::PaginationConfig,
    reference::get_references,
    timezone::current_local_date,
};

use super::{
    db::{
        count_transactions, create_transaction, delete_transaction, get_transaction,
        get_transaction_page, update_transaction,
    },
    domain::{
        TransactionFormData, TransactionFormErrors, TransactionKind, validate_transaction_form,
    },
    views::{transaction_detail_view, transaction_form_view, transactions_list_view},
};

/// The state needed by the paginated transaction list pages.
#[derive(Debug, Clone)]
pub(crate) struct TransactionListState {
    pub(crate) db_connection: Arc<Mutex<Connection>>,
    pub(crate) pagination_config: PaginationConfig,
}

impl FromRef<AppState> for TransactionListState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// The state needed by the transaction create and edit pages.
#[derive(Debug, Clone)]
pub(crate) struct TransactionFormState {
    pub(crate) db_connection: Arc<Mutex<Connection>>,
    pub(crate) local_timezone: String,
}

impl FromRef<AppState> for TransactionFormState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The state needed by the transaction detail and delete pages.
#[derive(Debug, Clone)]
pub(crate) struct TransactionState {
    pub(crate) db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters accepted by the transaction list pages.
#[derive(Debug, Deserialize)]
pub(crate) struct PageQuery {
    pub(crate) page: Option<u64>,
}

/// Render one page of the transaction list for `kind`.
///
/// Page numbers outside the valid range are clamped rather than rejected, so
/// a stale link to a page that no longer exists shows the nearest page.
pub(crate) async fn transactions_page(
    kind: &'static TransactionKind,
    state: TransactionListState,
    query: PageQuery,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;

    let page_size = state.pagination_config.page_size;
    let transaction_count = count_transactions(kind, &connection)?;
    let page_count = transaction_count.div_ceil(page_size).max(1);
    let curr_page = query
        .page
        .unwrap_or(state.pagination_config.default_page)
        .clamp(1, page_count);

    let transactions = get_transaction_page(
        kind,
        page_size,
        (curr_page - 1) * page_size,
        &connection,
    )?;

    Ok(transactions_list_view(
        kind,
        &transactions,
        curr_page,
        page_count,
        state.pagination_config.max_pages,
        NavBar::new(kind.list_endpoint).into_html(),
    )
    .into_response())
}

/// Render the creation form for `kind`, with the date prefilled to today in
/// the configured timezone.
pub(crate) async fn new_transaction_page(
    kind: &'static TransactionKind,
    state: TransactionFormState,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;

    let form = TransactionFormData {
        date: current_local_date(&state.local_timezone)?.to_string(),
        ..Default::default()
    };

    Ok(render_form(
        kind,
        &format!("Add {}", kind.title),
        kind.new_endpoint,
        &form,
        &TransactionFormErrors::default(),
        &connection,
    )?
    .into_response())
}

/// Handle the creation form submission for `kind`.
///
/// Redirects to the list page on success, or re-renders the form with the
/// submitted values and validation errors without persisting anything.
pub(crate) async fn create_transaction_endpoint(
    kind: &'static TransactionKind,
    state: TransactionFormState,
    form: TransactionFormData,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;

    let validated = match validate_transaction_form(kind, &form) {
        Ok(validated) => validated,
        Err(errors) => {
            return Ok(render_form(
                kind,
                &format!("Add {}", kind.title),
                kind.new_endpoint,
                &form,
                &errors,
                &connection,
            )?
            .into_response());
        }
    };

    match create_transaction(kind, &validated, OffsetDateTime::now_utc(), &connection) {
        Ok(_) => Ok(Redirect::to(kind.list_endpoint).into_response()),
        Err(Error::InvalidReference(label)) => {
            let errors = TransactionFormErrors {
                general: Some(format!("Select an existing {label}.")),
                ..Default::default()
            };

            Ok(render_form(
                kind,
                &format!("Add {}", kind.title),
                kind.new_endpoint,
                &form,
                &errors,
                &connection,
            )?
            .into_response())
        }
        Err(error) => Err(error),
    }
}

/// Render the read-only detail page for a single transaction.
pub(crate) async fn transaction_detail_page(
    kind: &'static TransactionKind,
    state: TransactionState,
    id: DatabaseId,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;
    let transaction = get_transaction(kind, id, &connection)?;

    Ok(transaction_detail_view(
        kind,
        &transaction,
        NavBar::new(kind.list_endpoint).into_html(),
    )
    .into_response())
}

/// Render the edit form prefilled with the transaction's current values.
pub(crate) async fn edit_transaction_page(
    kind: &'static TransactionKind,
    state: TransactionFormState,
    id: DatabaseId,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;
    let transaction = get_transaction(kind, id, &connection)?;

    Ok(render_form(
        kind,
        &format!("Edit {}", kind.title),
        &format_endpoint(kind.edit_endpoint, id),
        &transaction.to_form_data(),
        &TransactionFormErrors::default(),
        &connection,
    )?
    .into_response())
}

/// Handle the edit form submission, replacing the transaction's fields.
pub(crate) async fn update_transaction_endpoint(
    kind: &'static TransactionKind,
    state: TransactionFormState,
    id: DatabaseId,
    form: TransactionFormData,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;

    let validated = match validate_transaction_form(kind, &form) {
        Ok(validated) => validated,
        Err(errors) => {
            return Ok(render_form(
                kind,
                &format!("Edit {}", kind.title),
                &format_endpoint(kind.edit_endpoint, id),
                &form,
                &errors,
                &connection,
            )?
            .into_response());
        }
    };

    match update_transaction(kind, id, &validated, OffsetDateTime::now_utc(), &connection) {
        Ok(()) => Ok(Redirect::to(kind.list_endpoint).into_response()),
        Err(Error::InvalidReference(label)) => {
            let errors = TransactionFormErrors {
                general: Some(format!("Select an existing {label}.")),
                ..Default::default()
            };

            Ok(render_form(
                kind,
                &format!("Edit {}", kind.title),
                &format_endpoint(kind.edit_endpoint, id),
                &form,
                &errors,
                &connection,
            )?
            .into_response())
        }
        Err(error) => Err(error),
    }
}

/// Render the delete confirmation page for a transaction.
pub(crate) async fn delete_transaction_page(
    kind: &'static TransactionKind,
    state: TransactionState,
    id: DatabaseId,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;
    let transaction = get_transaction(kind, id, &connection)?;

    Ok(confirm_delete_view(
        kind.title,
        &transaction.description,
        &format_endpoint(kind.delete_endpoint, id),
        &format_endpoint(kind.detail_endpoint, id),
        NavBar::new(kind.list_endpoint).into_html(),
    )
    .into_response())
}

/// Handle the delete confirmation submission, removing the transaction.
pub(crate) async fn delete_transaction_endpoint(
    kind: &'static TransactionKind,
    state: TransactionState,
    id: DatabaseId,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;

    delete_transaction(kind, id, &connection)?;

    Ok(Redirect::to(kind.list_endpoint).into_response())
}

fn render_form(
    kind: &'static TransactionKind,
    title: &str,
    action: &str,
    form: &TransactionFormData,
    errors: &TransactionFormErrors,
    connection: &Connection,
) -> Result<maud::Markup, Error> {
    let categories = get_references(&CATEGORY, connection)?;
    let owners = get_references(kind.owner, connection)?;

    Ok(transaction_form_view(
        kind,
        title,
        action,
        form,
        errors,
        &categories,
        &owners,
        kind.list_endpoint,
        NavBar::new(kind.list_endpoint).into_html(),
    ))
}

#[cfg(test)]
mod transaction_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use rusqlite::Connection;
    use time::{OffsetDateTime, macros::date};

    use crate::{
        Error,
        db::initialize,
        expense::EXPENSE,
        income::INCOME,
        test_utils::response_body_text,
        transaction::{
            count_transactions, create_transaction,
            domain::{TransactionFormData, ValidatedTransaction},
            get_transaction,
        },
    };

    use super::{
        PageQuery, TransactionFormState, TransactionListState, TransactionState,
        create_transaction_endpoint, delete_transaction_endpoint, transaction_detail_page,
        transactions_page, update_transaction_endpoint,
    };

    fn get_test_connection() -> Arc<Mutex<Connection>> {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        Arc::new(Mutex::new(connection))
    }

    fn valid_form() -> TransactionFormData {
        TransactionFormData {
            description: "Groceries".to_owned(),
            amount: "42.50".to_owned(),
            date: "2026-08-15".to_owned(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_redirects_to_list_and_inserts_row() {
        let db_connection = get_test_connection();
        let state = TransactionFormState {
            db_connection: db_connection.clone(),
            local_timezone: "UTC".to_owned(),
        };

        let response = create_transaction_endpoint(&EXPENSE, state, valid_form())
            .await
            .expect("Handler should not fail");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            EXPENSE.list_endpoint
        );

        let connection = db_connection.lock().unwrap();
        assert_eq!(count_transactions(&EXPENSE, &connection), Ok(1));
    }

    #[tokio::test]
    async fn create_with_invalid_amount_rerenders_form_and_inserts_nothing() {
        let db_connection = get_test_connection();
        let state = TransactionFormState {
            db_connection: db_connection.clone(),
            local_timezone: "UTC".to_owned(),
        };
        let form = TransactionFormData {
            amount: "ten".to_owned(),
            ..valid_form()
        };

        let response = create_transaction_endpoint(&EXPENSE, state, form)
            .await
            .expect("Handler should not fail");

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_body_text(response).await;
        assert!(body.contains("is not a valid amount."));
        assert!(body.contains("value=\"Groceries\""));

        let connection = db_connection.lock().unwrap();
        assert_eq!(count_transactions(&EXPENSE, &connection), Ok(0));
    }

    #[tokio::test]
    async fn new_page_prefills_todays_date() {
        let state = TransactionFormState {
            db_connection: get_test_connection(),
            local_timezone: "UTC".to_owned(),
        };
        let today = OffsetDateTime::now_utc().date().to_string();

        let response = super::new_transaction_page(&EXPENSE, state)
            .await
            .expect("Handler should not fail");

        let body = response_body_text(response).await;
        assert!(body.contains(&format!("value=\"{today}\"")));
    }

    #[tokio::test]
    async fn detail_page_for_missing_id_returns_not_found() {
        let state = TransactionState {
            db_connection: get_test_connection(),
        };

        let got = transaction_detail_page(&EXPENSE, state, 404).await;

        assert!(matches!(got, Err(Error::NotFound)));
    }

    #[tokio::test]
    async fn update_replaces_row_and_redirects() {
        let db_connection = get_test_connection();
        let id = {
            let connection = db_connection.lock().unwrap();
            create_transaction(
                &INCOME,
                &ValidatedTransaction {
                    description: "Salary".to_owned(),
                    amount: 4000.0,
                    date: date!(2026 - 08 - 01),
                    category_id: None,
                    owner_id: None,
                    notes: None,
                },
                OffsetDateTime::now_utc(),
                &connection,
            )
            .unwrap()
            .id
        };
        let state = TransactionFormState {
            db_connection: db_connection.clone(),
            local_timezone: "UTC".to_owned(),
        };
        let form = TransactionFormData {
            description: "Salary + bonus".to_owned(),
            amount: "4500".to_owned(),
            date: "2026-08-01".to_owned(),
            ..Default::default()
        };

        let response = update_transaction_endpoint(&INCOME, state, id, form)
            .await
            .expect("Handler should not fail");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let connection = db_connection.lock().unwrap();
        let updated = get_transaction(&INCOME, id, &connection).unwrap();
        assert_eq!(updated.description, "Salary + bonus");
        assert_eq!(updated.amount, 4500.0);
    }

    #[tokio::test]
    async fn delete_removes_row_and_redirects() {
        let db_connection = get_test_connection();
        let id = {
            let connection = db_connection.lock().unwrap();
            create_transaction(
                &EXPENSE,
                &ValidatedTransaction {
                    description: "Rent".to_owned(),
                    amount: 1200.0,
                    date: date!(2026 - 08 - 01),
                    category_id: None,
                    owner_id: None,
                    notes: None,
                },
                OffsetDateTime::now_utc(),
                &connection,
            )
            .unwrap()
            .id
        };
        let state = TransactionState {
            db_connection: db_connection.clone(),
        };

        let response = delete_transaction_endpoint(&EXPENSE, state, id)
            .await
            .expect("Handler should not fail");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let connection = db_connection.lock().unwrap();
        assert_eq!(count_transactions(&EXPENSE, &connection), Ok(0));
    }

    #[tokio::test]
    async fn out_of_range_page_is_clamped() {
        let state = TransactionListState {
            db_connection: get_test_connection(),
            pagination_config: crate::PaginationConfig::default(),
        };

        let response = transactions_page(&EXPENSE, state, PageQuery { page: Some(99) })
            .await
            .expect("Handler should not fail");

        assert_eq!(response.status(), StatusCode::OK);
    }
}

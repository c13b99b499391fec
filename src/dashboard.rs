//! The dashboard page: recent transactions and overall cashflow summaries.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    cashflow::{RECENT_TRANSACTION_COUNT, most_recent_transactions, transaction_total},
    currency::format_currency,
    db::lock_database,
    endpoints,
    expense::EXPENSE,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    income::INCOME,
    navigation::NavBar,
    timezone::{current_local_date, month_label},
    transaction::{Transaction, TransactionKind, transaction_table},
};

/// The state needed by the dashboard page.
#[derive(Debug, Clone)]
pub(crate) struct DashboardState {
    pub(crate) db_connection: Arc<Mutex<Connection>>,
    pub(crate) local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Route handler for the dashboard page.
///
/// Shows the five most recent expenses and incomes, the all-time totals of
/// each, and the net balance (income minus expenses).
pub(crate) async fn get_dashboard_page(
    State(state): State<DashboardState>,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;

    let recent_expenses =
        most_recent_transactions(&EXPENSE, RECENT_TRANSACTION_COUNT, &connection)?;
    let recent_incomes = most_recent_transactions(&INCOME, RECENT_TRANSACTION_COUNT, &connection)?;

    let total_expense = transaction_total(&EXPENSE, &connection)?;
    let total_income = transaction_total(&INCOME, &connection)?;
    let net_balance = total_income - total_expense;

    let current_month = month_label(current_local_date(&state.local_timezone)?);

    Ok(dashboard_view(
        &current_month,
        total_income,
        total_expense,
        net_balance,
        &recent_expenses,
        &recent_incomes,
    )
    .into_response())
}

fn dashboard_view(
    current_month: &str,
    total_income: f64,
    total_expense: f64,
    net_balance: f64,
    recent_expenses: &[Transaction],
    recent_incomes: &[Transaction],
) -> Markup {
    let content = html!(
        (NavBar::new(endpoints::ROOT).into_html())

        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 { "Dashboard" }
            p class="dashboard-month" { (current_month) }

            section class="summary-cards"
            {
                (summary_card("Total Income", total_income))
                (summary_card("Total Expenses", total_expense))
                (summary_card("Net Balance", net_balance))
            }

            (recent_section(&EXPENSE, recent_expenses))
            (recent_section(&INCOME, recent_incomes))
        }
    );

    base("Dashboard", &content)
}

fn summary_card(label: &str, amount: f64) -> Markup {
    html!(
        div class="summary-card"
        {
            h2 { (label) }
            p class="summary-amount" { (format_currency(amount)) }
        }
    )
}

fn recent_section(kind: &'static TransactionKind, transactions: &[Transaction]) -> Markup {
    html!(
        section
        {
            h2 { "Recent " (kind.title_plural) }
            (transaction_table(kind, transactions))
            a href=(kind.list_endpoint) class=(LINK_STYLE) { "View all " (kind.title_plural) }
        }
    )
}

#[cfg(test)]
mod dashboard_tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use rusqlite::Connection;
    use time::{OffsetDateTime, macros::date};

    use crate::{
        db::initialize,
        expense::EXPENSE,
        income::INCOME,
        test_utils::response_body_text,
        transaction::{TransactionKind, ValidatedTransaction, create_transaction},
    };

    use super::{DashboardState, get_dashboard_page};

    fn get_test_state() -> DashboardState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");

        DashboardState {
            db_connection: Arc::new(Mutex::new(connection)),
            local_timezone: "UTC".to_owned(),
        }
    }

    fn insert(state: &DashboardState, kind: &TransactionKind, description: &str, amount: f64) {
        let connection = state.db_connection.lock().unwrap();
        create_transaction(
            kind,
            &ValidatedTransaction {
                description: description.to_owned(),
                amount,
                date: date!(2026 - 08 - 15),
                category_id: None,
                owner_id: None,
                notes: None,
            },
            OffsetDateTime::now_utc(),
            &connection,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn shows_totals_and_net_balance() {
        let state = get_test_state();
        insert(&state, &EXPENSE, "Rent", 1200.0);
        insert(&state, &INCOME, "Salary", 4000.0);

        let response = get_dashboard_page(axum::extract::State(state))
            .await
            .expect("Handler should not fail");

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_body_text(response).await;
        assert!(body.contains("$1,200.00"));
        assert!(body.contains("$4,000.00"));
        assert!(body.contains("$2,800.00"));
    }

    #[tokio::test]
    async fn empty_database_shows_zero_totals() {
        let response = get_dashboard_page(axum::extract::State(get_test_state()))
            .await
            .expect("Handler should not fail");

        let body = response_body_text(response).await;
        assert!(body.contains("$0.00"));
        assert!(body.contains("No expenses recorded."));
        assert!(body.contains("No incomes recorded."));
    }

    #[tokio::test]
    async fn shows_at_most_five_recent_expenses() {
        let state = get_test_state();
        for i in 0..7 {
            insert(&state, &EXPENSE, &format!("expense #{i}"), 1.0);
        }

        let response = get_dashboard_page(axum::extract::State(state))
            .await
            .expect("Handler should not fail");

        let body = response_body_text(response).await;
        let row_count = body.matches("expense #").count();
        assert_eq!(row_count, 5);
    }
}

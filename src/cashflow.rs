//! Aggregation helpers for summarizing transactions on the dashboard.

use rusqlite::Connection;

use crate::{
    Error,
    transaction::{
        TRANSACTION_ORDER_SQL, Transaction, TransactionKind, map_transaction_row,
        transaction_select_sql,
    },
};

/// How many transactions [most_recent_transactions] returns by default.
pub(crate) const RECENT_TRANSACTION_COUNT: u64 = 5;

/// Retrieve the `limit` most recent transactions of `kind` by date.
pub(crate) fn most_recent_transactions(
    kind: &TransactionKind,
    limit: u64,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!(
            "{} {TRANSACTION_ORDER_SQL} LIMIT ?1",
            transaction_select_sql(kind)
        ))?
        .query_map([limit as i64], map_transaction_row)?
        .map(|row| row.map_err(|error| error.into()))
        .collect()
}

/// Sum the amounts of every transaction of `kind`. An empty table sums to
/// zero rather than erroring.
pub(crate) fn transaction_total(
    kind: &TransactionKind,
    connection: &Connection,
) -> Result<f64, Error> {
    let total: Option<f64> = connection.query_row(
        &format!("SELECT SUM(amount) FROM \"{}\"", kind.table),
        [],
        |row| row.get(0),
    )?;

    Ok(total.unwrap_or(0.0))
}

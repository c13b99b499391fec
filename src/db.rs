//! Database initialization and shared connection access.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{
    Error, category::CATEGORY, expense::EXPENSE, income::INCOME, income_source::INCOME_SOURCE,
    payment_method::PAYMENT_METHOD, reference::create_reference_table,
    transaction::create_transaction_table,
};

/// Create the application's tables if they do not exist, and turn on foreign
/// key enforcement so that deleting a reference entity detaches (rather than
/// deletes) the transactions pointing at it.
///
/// # Errors
/// Returns an error if any table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", "ON")?;

    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_reference_table(&CATEGORY, &transaction)?;
    create_reference_table(&PAYMENT_METHOD, &transaction)?;
    create_reference_table(&INCOME_SOURCE, &transaction)?;
    create_transaction_table(&EXPENSE, &transaction)?;
    create_transaction_table(&INCOME, &transaction)?;

    transaction.commit()?;

    Ok(())
}

/// Acquire the shared database connection, mapping a poisoned lock to
/// [Error::DatabaseLockError].
pub(crate) fn lock_database(
    db_connection: &Arc<Mutex<Connection>>,
) -> Result<MutexGuard<'_, Connection>, Error> {
    db_connection
        .lock()
        .inspect_err(|error| tracing::error!("Could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn creates_all_tables() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("Could not initialize database");

        let count: i64 = connection
            .query_row(
                "SELECT COUNT(1) FROM sqlite_master WHERE type = 'table' AND name IN
                ('category', 'payment_method', 'income_source', 'expense', 'income')",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(count, 5);
    }

    #[test]
    fn is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("Could not initialize database");
        initialize(&connection).expect("Second initialize failed");
    }

    #[test]
    fn enables_foreign_keys() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).unwrap();

        let enabled: i64 = connection
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();

        assert_eq!(enabled, 1);
    }
}

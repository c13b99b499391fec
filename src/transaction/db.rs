//! Database operations for expenses and incomes.

use rusqlite::{Connection, Row, params};
use time::OffsetDateTime;

use crate::{Error, database_id::DatabaseId};

use super::domain::{Transaction, TransactionKind, ValidatedTransaction};

/// Initialize the table and indexes for a transaction kind.
///
/// The reference columns are declared `ON DELETE SET NULL` so that deleting a
/// category, payment method, or income source detaches the rows pointing at
/// it instead of deleting them.
pub(crate) fn create_transaction_table(
    kind: &TransactionKind,
    connection: &Connection,
) -> Result<(), rusqlite::Error> {
    connection.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS \"{table}\" (
            id INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            amount REAL NOT NULL,
            date TEXT NOT NULL,
            category_id INTEGER REFERENCES category(id) ON DELETE SET NULL,
            {owner_column} INTEGER REFERENCES \"{owner_table}\"(id) ON DELETE SET NULL,
            notes TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_{table}_date ON \"{table}\"(date);",
        table = kind.table,
        owner_column = kind.owner_column,
        owner_table = kind.owner.table,
    ))
}

/// The SELECT clause shared by all transaction queries: the transaction row
/// joined with the names of its category and owner reference.
pub(crate) fn transaction_select_sql(kind: &TransactionKind) -> String {
    format!(
        "SELECT t.id, t.description, t.amount, t.date, t.category_id, c.name, \
        t.{owner_column}, o.name, t.notes, t.created_at, t.updated_at \
        FROM \"{table}\" t \
        LEFT JOIN category c ON t.category_id = c.id \
        LEFT JOIN \"{owner_table}\" o ON t.{owner_column} = o.id",
        table = kind.table,
        owner_column = kind.owner_column,
        owner_table = kind.owner.table,
    )
}

/// The default ordering for transaction lists: newest date first, ties broken
/// by newest created, then by id for stability.
pub(crate) const TRANSACTION_ORDER_SQL: &str =
    "ORDER BY t.date DESC, t.created_at DESC, t.id DESC";

/// Map a row produced by [transaction_select_sql] to a [Transaction].
pub(crate) fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        description: row.get(1)?,
        amount: row.get(2)?,
        date: row.get(3)?,
        category_id: row.get(4)?,
        category_name: row.get(5)?,
        owner_id: row.get(6)?,
        owner_name: row.get(7)?,
        notes: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

/// Create a transaction of `kind` and return it with its generated ID.
///
/// # Errors
/// Returns [Error::InvalidReference] if a selected category or owner id does
/// not refer to an existing row, or [Error::SqlError] for any other SQL error.
pub(crate) fn create_transaction(
    kind: &TransactionKind,
    input: &ValidatedTransaction,
    now: OffsetDateTime,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .execute(
            &format!(
                "INSERT INTO \"{table}\" \
                (description, amount, date, category_id, {owner_column}, notes, created_at, updated_at) \
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                table = kind.table,
                owner_column = kind.owner_column,
            ),
            params![
                input.description,
                input.amount,
                input.date,
                input.category_id,
                input.owner_id,
                input.notes,
                now,
                now,
            ],
        )
        .map_err(|error| map_foreign_key_error(error, kind))?;

    get_transaction(kind, connection.last_insert_rowid(), connection)
}

/// Retrieve a single transaction by ID.
///
/// # Errors
/// Returns [Error::NotFound] if `id` does not refer to an existing row.
pub(crate) fn get_transaction(
    kind: &TransactionKind,
    id: DatabaseId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    connection
        .prepare(&format!(
            "{} WHERE t.id = :id",
            transaction_select_sql(kind)
        ))?
        .query_row(&[(":id", &id)], map_transaction_row)
        .map_err(|error| error.into())
}

/// Retrieve one page of transactions in the default newest-first order.
pub(crate) fn get_transaction_page(
    kind: &TransactionKind,
    limit: u64,
    offset: u64,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!(
            "{} {TRANSACTION_ORDER_SQL} LIMIT ?1 OFFSET ?2",
            transaction_select_sql(kind)
        ))?
        .query_map(params![limit as i64, offset as i64], map_transaction_row)?
        .map(|row| row.map_err(|error| error.into()))
        .collect()
}

/// Get the total number of transactions of `kind`.
pub(crate) fn count_transactions(
    kind: &TransactionKind,
    connection: &Connection,
) -> Result<u64, Error> {
    let count: i64 = connection.query_row(
        &format!("SELECT COUNT(1) FROM \"{}\"", kind.table),
        [],
        |row| row.get(0),
    )?;

    Ok(count as u64)
}

/// Retrieve all transactions referencing the reference entity row `id`
/// through `column` (e.g. all expenses with `category_id = id`), in the
/// default newest-first order.
pub(crate) fn get_transactions_for_reference(
    kind: &TransactionKind,
    column: &str,
    id: DatabaseId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!(
            "{} WHERE t.{column} = :id {TRANSACTION_ORDER_SQL}",
            transaction_select_sql(kind)
        ))?
        .query_map(&[(":id", &id)], map_transaction_row)?
        .map(|row| row.map_err(|error| error.into()))
        .collect()
}

/// Replace a transaction's editable fields and refresh its `updated_at`
/// stamp. `created_at` is never touched.
///
/// # Errors
/// Returns [Error::UpdateMissing] if `id` does not refer to an existing row,
/// or [Error::InvalidReference] if a selected reference id does not resolve.
pub(crate) fn update_transaction(
    kind: &TransactionKind,
    id: DatabaseId,
    input: &ValidatedTransaction,
    now: OffsetDateTime,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection
        .execute(
            &format!(
                "UPDATE \"{table}\" \
                SET description = ?1, amount = ?2, date = ?3, category_id = ?4, \
                {owner_column} = ?5, notes = ?6, updated_at = ?7 \
                WHERE id = ?8",
                table = kind.table,
                owner_column = kind.owner_column,
            ),
            params![
                input.description,
                input.amount,
                input.date,
                input.category_id,
                input.owner_id,
                input.notes,
                now,
                id,
            ],
        )
        .map_err(|error| map_foreign_key_error(error, kind))?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissing(kind.singular));
    }

    Ok(())
}

/// Delete a transaction by ID.
///
/// # Errors
/// Returns [Error::DeleteMissing] if `id` does not refer to an existing row.
pub(crate) fn delete_transaction(
    kind: &TransactionKind,
    id: DatabaseId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        &format!("DELETE FROM \"{}\" WHERE id = ?1", kind.table),
        [id],
    )?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissing(kind.singular));
    }

    Ok(())
}

fn map_foreign_key_error(error: rusqlite::Error, kind: &TransactionKind) -> Error {
    match error {
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code: _,
                extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
            },
            _,
        ) => Error::InvalidReference(kind.fk_label),
        error => error.into(),
    }
}

#[cfg(test)]
mod transaction_db_tests {
    use rusqlite::Connection;
    use time::{Duration, OffsetDateTime, macros::date};

    use crate::{
        Error,
        category::CATEGORY,
        db::initialize,
        expense::EXPENSE,
        income::INCOME,
        reference::{ReferenceName, create_reference},
        transaction::domain::ValidatedTransaction,
    };

    use super::{
        count_transactions, create_transaction, delete_transaction, get_transaction,
        get_transaction_page, get_transactions_for_reference, update_transaction,
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        connection
    }

    fn sample_input(description: &str, amount: f64) -> ValidatedTransaction {
        ValidatedTransaction {
            description: description.to_owned(),
            amount,
            date: date!(2026 - 08 - 15),
            category_id: None,
            owner_id: None,
            notes: None,
        }
    }

    #[test]
    fn create_and_get_expense() {
        let connection = get_test_connection();
        let now = OffsetDateTime::now_utc();

        let created =
            create_transaction(&EXPENSE, &sample_input("Groceries", 42.5), now, &connection)
                .expect("Could not create expense");

        assert!(created.id > 0);
        assert_eq!(created.description, "Groceries");
        assert_eq!(created.amount, 42.5);
        assert_eq!(created.created_at, now);

        let fetched = get_transaction(&EXPENSE, created.id, &connection).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn get_missing_transaction_returns_not_found() {
        let connection = get_test_connection();

        let got = get_transaction(&EXPENSE, 404, &connection);

        assert_eq!(got, Err(Error::NotFound));
    }

    #[test]
    fn create_joins_reference_names() {
        let connection = get_test_connection();
        let category = create_reference(
            &CATEGORY,
            ReferenceName::new_unchecked("Food"),
            None,
            &connection,
        )
        .unwrap();

        let input = ValidatedTransaction {
            category_id: Some(category.id),
            ..sample_input("Groceries", 42.5)
        };
        let created =
            create_transaction(&EXPENSE, &input, OffsetDateTime::now_utc(), &connection).unwrap();

        assert_eq!(created.category_id, Some(category.id));
        assert_eq!(created.category_name, Some("Food".to_owned()));
        assert_eq!(created.owner_name, None);
    }

    #[test]
    fn create_with_dangling_reference_fails() {
        let connection = get_test_connection();

        let input = ValidatedTransaction {
            category_id: Some(999),
            ..sample_input("Groceries", 42.5)
        };
        let got = create_transaction(&EXPENSE, &input, OffsetDateTime::now_utc(), &connection);

        assert_eq!(got, Err(Error::InvalidReference(EXPENSE.fk_label)));
    }

    #[test]
    fn expenses_and_incomes_are_stored_separately() {
        let connection = get_test_connection();
        let now = OffsetDateTime::now_utc();

        create_transaction(&EXPENSE, &sample_input("Rent", 1200.0), now, &connection).unwrap();
        create_transaction(&INCOME, &sample_input("Salary", 4000.0), now, &connection).unwrap();

        assert_eq!(count_transactions(&EXPENSE, &connection), Ok(1));
        assert_eq!(count_transactions(&INCOME, &connection), Ok(1));
    }

    #[test]
    fn page_is_ordered_newest_first_and_respects_limit() {
        let connection = get_test_connection();
        let base_date = date!(2026 - 08 - 01);

        for i in 0..15 {
            let input = ValidatedTransaction {
                date: base_date + Duration::days(i),
                ..sample_input(&format!("expense #{i}"), 1.0)
            };
            create_transaction(&EXPENSE, &input, OffsetDateTime::now_utc(), &connection).unwrap();
        }

        let first_page = get_transaction_page(&EXPENSE, 10, 0, &connection).unwrap();
        assert_eq!(first_page.len(), 10);
        assert_eq!(first_page[0].date, base_date + Duration::days(14));
        assert!(
            first_page.windows(2).all(|pair| pair[0].date >= pair[1].date),
            "page is not sorted newest first"
        );

        let second_page = get_transaction_page(&EXPENSE, 10, 10, &connection).unwrap();
        assert_eq!(second_page.len(), 5);
        assert_eq!(second_page[4].date, base_date);
    }

    #[test]
    fn same_date_ties_are_broken_by_newest_created() {
        let connection = get_test_connection();
        let now = OffsetDateTime::now_utc();

        create_transaction(&EXPENSE, &sample_input("older", 1.0), now, &connection).unwrap();
        create_transaction(
            &EXPENSE,
            &sample_input("newer", 2.0),
            now + Duration::seconds(1),
            &connection,
        )
        .unwrap();

        let page = get_transaction_page(&EXPENSE, 10, 0, &connection).unwrap();

        assert_eq!(page[0].description, "newer");
        assert_eq!(page[1].description, "older");
    }

    #[test]
    fn update_replaces_fields_and_keeps_created_at() {
        let connection = get_test_connection();
        let created_at = OffsetDateTime::now_utc();
        let created =
            create_transaction(&EXPENSE, &sample_input("Rent", 1200.0), created_at, &connection)
                .unwrap();

        let updated_at = created_at + Duration::hours(1);
        let input = ValidatedTransaction {
            notes: Some("September".to_owned()),
            ..sample_input("Rent + utilities", 1250.0)
        };
        update_transaction(&EXPENSE, created.id, &input, updated_at, &connection)
            .expect("Could not update expense");

        let fetched = get_transaction(&EXPENSE, created.id, &connection).unwrap();
        assert_eq!(fetched.description, "Rent + utilities");
        assert_eq!(fetched.amount, 1250.0);
        assert_eq!(fetched.notes, Some("September".to_owned()));
        assert_eq!(fetched.created_at, created_at);
        assert_eq!(fetched.updated_at, updated_at);
    }

    #[test]
    fn update_missing_transaction_fails() {
        let connection = get_test_connection();

        let got = update_transaction(
            &EXPENSE,
            404,
            &sample_input("Rent", 1200.0),
            OffsetDateTime::now_utc(),
            &connection,
        );

        assert_eq!(got, Err(Error::UpdateMissing("expense")));
    }

    #[test]
    fn delete_removes_row() {
        let connection = get_test_connection();
        let created = create_transaction(
            &EXPENSE,
            &sample_input("Rent", 1200.0),
            OffsetDateTime::now_utc(),
            &connection,
        )
        .unwrap();

        delete_transaction(&EXPENSE, created.id, &connection).expect("Could not delete expense");

        assert_eq!(
            get_transaction(&EXPENSE, created.id, &connection),
            Err(Error::NotFound)
        );
    }

    #[test]
    fn delete_missing_transaction_fails() {
        let connection = get_test_connection();

        let got = delete_transaction(&EXPENSE, 404, &connection);

        assert_eq!(got, Err(Error::DeleteMissing("expense")));
    }

    #[test]
    fn finds_transactions_for_reference() {
        let connection = get_test_connection();
        let category = create_reference(
            &CATEGORY,
            ReferenceName::new_unchecked("Food"),
            None,
            &connection,
        )
        .unwrap();

        let input = ValidatedTransaction {
            category_id: Some(category.id),
            ..sample_input("Groceries", 42.5)
        };
        create_transaction(&EXPENSE, &input, OffsetDateTime::now_utc(), &connection).unwrap();
        create_transaction(
            &EXPENSE,
            &sample_input("Uncategorized", 5.0),
            OffsetDateTime::now_utc(),
            &connection,
        )
        .unwrap();

        let got = get_transactions_for_reference(&EXPENSE, "category_id", category.id, &connection)
            .unwrap();

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].description, "Groceries");
    }
}

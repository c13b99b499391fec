//! Database operations for categories, payment methods, and income sources.

use rusqlite::{Connection, Row, params};

use crate::{Error, database_id::DatabaseId};

use super::domain::{Reference, ReferenceDescriptor, ReferenceName};

/// Initialize the table for a reference entity. Names are unique per table.
pub(crate) fn create_reference_table(
    descriptor: &ReferenceDescriptor,
    connection: &Connection,
) -> Result<(), rusqlite::Error> {
    connection.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS \"{}\" (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                description TEXT
            )",
            descriptor.table
        ),
        [],
    )?;

    Ok(())
}

fn map_reference_row(row: &Row) -> Result<Reference, rusqlite::Error> {
    Ok(Reference {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

/// Create a reference entity and return it with its generated ID.
///
/// # Errors
/// Returns [Error::DuplicateName] if a row with the same name already exists,
/// or [Error::SqlError] for any other SQL error.
pub(crate) fn create_reference(
    descriptor: &ReferenceDescriptor,
    name: ReferenceName,
    description: Option<String>,
    connection: &Connection,
) -> Result<Reference, Error> {
    connection
        .execute(
            &format!(
                "INSERT INTO \"{}\" (name, description) VALUES (?1, ?2)",
                descriptor.table
            ),
            params![name.as_str(), description],
        )
        .map_err(|error| map_unique_name_error(error, &name))?;

    Ok(Reference {
        id: connection.last_insert_rowid(),
        name: name.as_str().to_owned(),
        description,
    })
}

/// Retrieve all reference entities of one type, sorted by name.
pub(crate) fn get_references(
    descriptor: &ReferenceDescriptor,
    connection: &Connection,
) -> Result<Vec<Reference>, Error> {
    connection
        .prepare(&format!(
            "SELECT id, name, description FROM \"{}\" ORDER BY name ASC",
            descriptor.table
        ))?
        .query_map([], map_reference_row)?
        .map(|row| row.map_err(|error| error.into()))
        .collect()
}

/// Retrieve a single reference entity by ID.
///
/// # Errors
/// Returns [Error::NotFound] if `id` does not refer to an existing row.
pub(crate) fn get_reference(
    descriptor: &ReferenceDescriptor,
    id: DatabaseId,
    connection: &Connection,
) -> Result<Reference, Error> {
    connection
        .prepare(&format!(
            "SELECT id, name, description FROM \"{}\" WHERE id = :id",
            descriptor.table
        ))?
        .query_row(&[(":id", &id)], map_reference_row)
        .map_err(|error| error.into())
}

/// Replace a reference entity's name and description.
///
/// # Errors
/// Returns [Error::UpdateMissing] if `id` does not refer to an existing row,
/// or [Error::DuplicateName] if the new name is already taken by another row.
pub(crate) fn update_reference(
    descriptor: &ReferenceDescriptor,
    id: DatabaseId,
    name: ReferenceName,
    description: Option<String>,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection
        .execute(
            &format!(
                "UPDATE \"{}\" SET name = ?1, description = ?2 WHERE id = ?3",
                descriptor.table
            ),
            params![name.as_str(), description, id],
        )
        .map_err(|error| map_unique_name_error(error, &name))?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissing(descriptor.singular));
    }

    Ok(())
}

/// Delete a reference entity by ID.
///
/// Transactions referencing the deleted row keep their other fields and lose
/// only the reference; the foreign keys are declared `ON DELETE SET NULL`.
///
/// # Errors
/// Returns [Error::DeleteMissing] if `id` does not refer to an existing row.
pub(crate) fn delete_reference(
    descriptor: &ReferenceDescriptor,
    id: DatabaseId,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        &format!("DELETE FROM \"{}\" WHERE id = ?1", descriptor.table),
        [id],
    )?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissing(descriptor.singular));
    }

    Ok(())
}

fn map_unique_name_error(error: rusqlite::Error, name: &ReferenceName) -> Error {
    match error {
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error {
                code: _,
                extended_code: rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE,
            },
            _,
        ) => Error::DuplicateName(name.as_str().to_owned()),
        error => error.into(),
    }
}

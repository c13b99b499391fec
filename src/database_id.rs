//! Typed alias for database row identifiers.

/// The integer type SQLite uses for row IDs.
pub(crate) type DatabaseId = i64;

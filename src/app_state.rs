//! Implements a struct that holds the state of the HTTP server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, db::initialize, pagination::PaginationConfig, timezone::get_local_offset};

/// The state of the HTTP server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,

    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for
    /// the domain models. `local_timezone` should be a valid, canonical
    /// timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized or if
    /// `local_timezone` is not a known timezone.
    pub fn new(
        db_connection: Connection,
        local_timezone: &str,
        pagination_config: PaginationConfig,
    ) -> Result<Self, Error> {
        initialize(&db_connection)?;

        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezone(local_timezone.to_owned()));
        }

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            pagination_config,
            db_connection: Arc::new(Mutex::new(db_connection)),
        })
    }
}

#[cfg(test)]
mod app_state_tests {
    use rusqlite::Connection;

    use crate::{AppState, Error, pagination::PaginationConfig};

    #[test]
    fn new_succeeds_with_valid_timezone() {
        let connection = Connection::open_in_memory().unwrap();

        let state = AppState::new(connection, "Pacific/Auckland", PaginationConfig::default());

        assert!(state.is_ok());
    }

    #[test]
    fn new_fails_with_unknown_timezone() {
        let connection = Connection::open_in_memory().unwrap();

        let state = AppState::new(connection, "Atlantis/Poseidonia", PaginationConfig::default());

        assert_eq!(
            state.map(|_| ()),
            Err(Error::InvalidTimezone("Atlantis/Poseidonia".to_owned()))
        );
    }
}

//! Spendlog is a single-user web app for recording income and expense
//! transactions, categorizing them, and reviewing them on a dashboard.
//!
//! This library provides an HTTP server that directly serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod cashflow;
mod category;
mod currency;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod expense;
mod html;
mod income;
mod income_source;
mod internal_server_error;
mod navigation;
mod not_found;
mod pagination;
mod payment_method;
mod reference;
mod routing;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use pagination::PaginationConfig;
pub use routing::build_router;

use crate::{
    internal_server_error::render_internal_server_error, not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty or whitespace-only string was used for a name that must be
    /// non-empty, such as a category name or transaction description.
    #[error("Name cannot be empty")]
    EmptyName,

    /// A reference entity name that already exists in the database was used
    /// to create or rename another row of the same type.
    #[error("the name \"{0}\" is already in use")]
    DuplicateName(String),

    /// A category, payment method, or income source ID on a transaction form
    /// did not refer to an existing row.
    #[error("the selected {0} does not exist")]
    InvalidReference(&'static str),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a row that does not exist. The string names the
    /// entity, e.g. "expense".
    #[error("tried to update a {0} that is not in the database")]
    UpdateMissing(&'static str),

    /// Tried to delete a row that does not exist. The string names the
    /// entity, e.g. "category".
    #[error("tried to delete a {0} that is not in the database")]
    DeleteMissing(&'static str),

    /// An error occurred while getting the local timezone from a canonical
    /// timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound | Error::UpdateMissing(_) | Error::DeleteMissing(_) => {
                get_404_not_found_response()
            }
            Error::InvalidTimezone(timezone) => render_internal_server_error(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to a valid, canonical timezone string"
                ),
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(
                    "Sorry, something went wrong.",
                    "Try again later or check the server logs",
                )
            }
        }
    }
}

//! Handlers for the reference entity pages, shared between categories,
//! payment methods, and income sources.
//!
//! The route handlers in [crate::category], [crate::payment_method], and
//! [crate::income_source] are thin wrappers that pass in the matching
//! [ReferenceDescriptor].

use std::sync::{Arc, Mutex};

use axum::{
    extract::FromRef,
    response::{IntoResponse, Redirect, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    database_id::DatabaseId,
    db::lock_database,
    endpoints::format_endpoint,
    html::confirm_delete_view,
    navigation::NavBar,
    transaction::get_transactions_for_reference,
};

use super::{
    db::{
        create_reference, delete_reference, get_reference, get_references, update_reference,
    },
    domain::{
        Reference, ReferenceDescriptor, ReferenceFormData, ReferenceFormErrors,
        validate_reference_form,
    },
    views::{reference_detail_view, reference_form_view, references_list_view},
};

/// The state needed by the reference entity pages.
#[derive(Debug, Clone)]
pub(crate) struct ReferenceState {
    pub(crate) db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ReferenceState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the full list of reference entities of one type, sorted by name.
pub(crate) async fn references_page(
    descriptor: &'static ReferenceDescriptor,
    state: ReferenceState,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;
    let references = get_references(descriptor, &connection)?;

    Ok(references_list_view(
        descriptor,
        &references,
        NavBar::new(descriptor.list_endpoint).into_html(),
    )
    .into_response())
}

/// Render the blank creation form for a reference entity.
pub(crate) async fn new_reference_page(
    descriptor: &'static ReferenceDescriptor,
) -> Result<Response, Error> {
    Ok(reference_form_view(
        descriptor,
        &format!("Add {}", descriptor.title),
        descriptor.new_endpoint,
        &ReferenceFormData::default(),
        &ReferenceFormErrors::default(),
        NavBar::new(descriptor.list_endpoint).into_html(),
    )
    .into_response())
}

/// Handle the creation form submission for a reference entity.
///
/// Redirects to the list page on success; a blank or duplicate name
/// re-renders the form with the error and persists nothing.
pub(crate) async fn create_reference_endpoint(
    descriptor: &'static ReferenceDescriptor,
    state: ReferenceState,
    form: ReferenceFormData,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;

    let (name, description) = match validate_reference_form(&form) {
        Ok(validated) => validated,
        Err(errors) => {
            return Ok(render_form(descriptor, None, &form, &errors).into_response());
        }
    };

    match create_reference(descriptor, name, description, &connection) {
        Ok(_) => Ok(Redirect::to(descriptor.list_endpoint).into_response()),
        Err(Error::DuplicateName(name)) => {
            let errors = duplicate_name_errors(descriptor, &name);

            Ok(render_form(descriptor, None, &form, &errors).into_response())
        }
        Err(error) => Err(error),
    }
}

/// Render the detail page for a reference entity, listing the transactions
/// that use it.
pub(crate) async fn reference_detail_page(
    descriptor: &'static ReferenceDescriptor,
    state: ReferenceState,
    id: DatabaseId,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;
    let reference = get_reference(descriptor, id, &connection)?;

    let mut usages = Vec::with_capacity(descriptor.usages.len());
    for usage in descriptor.usages {
        let transactions =
            get_transactions_for_reference(usage.kind, usage.column, id, &connection)?;
        usages.push((usage, transactions));
    }

    Ok(reference_detail_view(
        descriptor,
        &reference,
        &usages,
        NavBar::new(descriptor.list_endpoint).into_html(),
    )
    .into_response())
}

/// Render the edit form prefilled with the reference entity's current values.
pub(crate) async fn edit_reference_page(
    descriptor: &'static ReferenceDescriptor,
    state: ReferenceState,
    id: DatabaseId,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;
    let reference = get_reference(descriptor, id, &connection)?;

    Ok(render_form(
        descriptor,
        Some(id),
        &form_data(&reference),
        &ReferenceFormErrors::default(),
    )
    .into_response())
}

/// Handle the edit form submission, replacing the name and description.
/// Redirects to the detail page on success.
pub(crate) async fn update_reference_endpoint(
    descriptor: &'static ReferenceDescriptor,
    state: ReferenceState,
    id: DatabaseId,
    form: ReferenceFormData,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;

    let (name, description) = match validate_reference_form(&form) {
        Ok(validated) => validated,
        Err(errors) => {
            return Ok(render_form(descriptor, Some(id), &form, &errors).into_response());
        }
    };

    match update_reference(descriptor, id, name, description, &connection) {
        Ok(()) => Ok(Redirect::to(&format_endpoint(descriptor.detail_endpoint, id)).into_response()),
        Err(Error::DuplicateName(name)) => {
            let errors = duplicate_name_errors(descriptor, &name);

            Ok(render_form(descriptor, Some(id), &form, &errors).into_response())
        }
        Err(error) => Err(error),
    }
}

/// Render the delete confirmation page for a reference entity.
pub(crate) async fn delete_reference_page(
    descriptor: &'static ReferenceDescriptor,
    state: ReferenceState,
    id: DatabaseId,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;
    let reference = get_reference(descriptor, id, &connection)?;

    Ok(confirm_delete_view(
        descriptor.title,
        &reference.name,
        &format_endpoint(descriptor.delete_endpoint, id),
        &format_endpoint(descriptor.detail_endpoint, id),
        NavBar::new(descriptor.list_endpoint).into_html(),
    )
    .into_response())
}

/// Handle the delete confirmation submission.
///
/// Transactions using the deleted entity keep their other fields; only the
/// reference is cleared.
pub(crate) async fn delete_reference_endpoint(
    descriptor: &'static ReferenceDescriptor,
    state: ReferenceState,
    id: DatabaseId,
) -> Result<Response, Error> {
    let connection = lock_database(&state.db_connection)?;

    delete_reference(descriptor, id, &connection)?;

    Ok(Redirect::to(descriptor.list_endpoint).into_response())
}

fn render_form(
    descriptor: &'static ReferenceDescriptor,
    id: Option<DatabaseId>,
    form: &ReferenceFormData,
    errors: &ReferenceFormErrors,
) -> maud::Markup {
    let (title, action) = match id {
        Some(id) => (
            format!("Edit {}", descriptor.title),
            format_endpoint(descriptor.edit_endpoint, id),
        ),
        None => (
            format!("Add {}", descriptor.title),
            descriptor.new_endpoint.to_owned(),
        ),
    };

    reference_form_view(
        descriptor,
        &title,
        &action,
        form,
        errors,
        NavBar::new(descriptor.list_endpoint).into_html(),
    )
}

fn duplicate_name_errors(
    descriptor: &'static ReferenceDescriptor,
    name: &str,
) -> ReferenceFormErrors {
    ReferenceFormErrors {
        name: Some(format!(
            "A {} named \"{}\" already exists.",
            descriptor.singular, name
        )),
    }
}

fn form_data(reference: &Reference) -> ReferenceFormData {
    ReferenceFormData {
        name: reference.name.clone(),
        description: reference.description.clone().unwrap_or_default(),
    }
}

//! Core transaction types and form validation.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, macros::format_description};

use crate::{database_id::DatabaseId, reference::ReferenceDescriptor};

/// Describes one of the two transaction types (expense or income): its table,
/// display labels, owner reference, and routes.
///
/// The owner reference is the lookup entity specific to the transaction type:
/// payment methods for expenses, income sources for incomes. Both types also
/// share an optional category reference.
#[derive(Debug)]
pub(crate) struct TransactionKind {
    /// The SQLite table name.
    pub(crate) table: &'static str,
    /// Lowercase singular name for error messages, e.g. "expense".
    pub(crate) singular: &'static str,
    /// Capitalized singular display name, e.g. "Expense".
    pub(crate) title: &'static str,
    /// Capitalized plural display name, e.g. "Expenses".
    pub(crate) title_plural: &'static str,
    /// The reference entity owning this transaction type.
    pub(crate) owner: &'static ReferenceDescriptor,
    /// The FK column on the transaction table, e.g. "payment_method_id".
    pub(crate) owner_column: &'static str,
    /// The label shown next to the owner select, e.g. "Payment Method".
    pub(crate) owner_label: &'static str,
    /// Label used when a submitted reference id does not resolve,
    /// e.g. "category or payment method".
    pub(crate) fk_label: &'static str,
    /// The paginated list page.
    pub(crate) list_endpoint: &'static str,
    /// The creation page and endpoint.
    pub(crate) new_endpoint: &'static str,
    /// The detail page (contains an id parameter).
    pub(crate) detail_endpoint: &'static str,
    /// The edit page and endpoint (contains an id parameter).
    pub(crate) edit_endpoint: &'static str,
    /// The delete confirmation page and endpoint (contains an id parameter).
    pub(crate) delete_endpoint: &'static str,
}

/// An expense or income row joined with the names of its references.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    /// The ID of the transaction.
    pub(crate) id: DatabaseId,
    /// A text description of what the transaction was for.
    pub(crate) description: String,
    /// The amount of money spent or earned, rounded to cents.
    pub(crate) amount: f64,
    /// When the transaction happened.
    pub(crate) date: Date,
    /// The ID of the category the transaction belongs to.
    pub(crate) category_id: Option<DatabaseId>,
    /// The name of that category, when set.
    pub(crate) category_name: Option<String>,
    /// The ID of the owner reference (payment method or income source).
    pub(crate) owner_id: Option<DatabaseId>,
    /// The name of that owner reference, when set.
    pub(crate) owner_name: Option<String>,
    /// Free-text notes.
    pub(crate) notes: Option<String>,
    /// When the row was created (UTC). Never editable through forms.
    pub(crate) created_at: OffsetDateTime,
    /// When the row was last updated (UTC). Set by the system on update.
    pub(crate) updated_at: OffsetDateTime,
}

impl Transaction {
    /// The form data that would recreate this transaction, used to prefill
    /// the edit form.
    pub(crate) fn to_form_data(&self) -> TransactionFormData {
        TransactionFormData {
            description: self.description.clone(),
            amount: format!("{:.2}", self.amount),
            date: self.date.to_string(),
            category_id: self
                .category_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            owner_id: self.owner_id.map(|id| id.to_string()).unwrap_or_default(),
            notes: self.notes.clone().unwrap_or_default(),
        }
    }
}

/// The raw strings submitted from the transaction create and edit forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct TransactionFormData {
    /// What the transaction was for.
    pub(crate) description: String,
    /// The amount as typed by the user.
    pub(crate) amount: String,
    /// The date in YYYY-MM-DD form.
    pub(crate) date: String,
    /// The selected category id, or an empty string for none.
    #[serde(default)]
    pub(crate) category_id: String,
    /// The selected owner reference id, or an empty string for none.
    #[serde(default)]
    pub(crate) owner_id: String,
    /// Free-text notes.
    #[serde(default)]
    pub(crate) notes: String,
}

/// Field-level validation messages for the transaction form.
///
/// Each field is rendered inline under the matching input; `general` is
/// rendered at the top of the form and is used for failures that only surface
/// at insert time, such as a reference row deleted in another tab.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct TransactionFormErrors {
    pub(crate) description: Option<String>,
    pub(crate) amount: Option<String>,
    pub(crate) date: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) owner: Option<String>,
    pub(crate) general: Option<String>,
}

impl TransactionFormErrors {
    pub(crate) fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.category.is_none()
            && self.owner.is_none()
            && self.general.is_none()
    }
}

/// Validated, typed transaction fields ready to be written to the database.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidatedTransaction {
    pub(crate) description: String,
    pub(crate) amount: f64,
    pub(crate) date: Date,
    pub(crate) category_id: Option<DatabaseId>,
    pub(crate) owner_id: Option<DatabaseId>,
    pub(crate) notes: Option<String>,
}

/// Validate the raw form strings for a transaction of `kind`.
///
/// Description, amount, and date are required. Amounts are rounded to two
/// fractional digits; no sign constraint is applied. Reference selects are
/// optional and an empty string means "none".
///
/// # Errors
/// Returns the per-field error messages when any field fails validation;
/// nothing should be persisted in that case.
pub(crate) fn validate_transaction_form(
    kind: &TransactionKind,
    form: &TransactionFormData,
) -> Result<ValidatedTransaction, TransactionFormErrors> {
    let mut errors = TransactionFormErrors::default();

    let description = form.description.trim();
    if description.is_empty() {
        errors.description = Some("Enter a description.".to_owned());
    }

    let amount_text = form.amount.trim();
    let amount = match amount_text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some((value * 100.0).round() / 100.0),
        _ if amount_text.is_empty() => {
            errors.amount = Some("Enter an amount.".to_owned());
            None
        }
        _ => {
            errors.amount = Some(format!("\"{amount_text}\" is not a valid amount."));
            None
        }
    };

    let date_text = form.date.trim();
    let date = match Date::parse(date_text, format_description!("[year]-[month]-[day]")) {
        Ok(date) => Some(date),
        Err(_) if date_text.is_empty() => {
            errors.date = Some("Enter a date.".to_owned());
            None
        }
        Err(_) => {
            errors.date = Some("Enter a date in the format YYYY-MM-DD.".to_owned());
            None
        }
    };

    let category_id = match parse_optional_id(&form.category_id) {
        Ok(id) => id,
        Err(()) => {
            errors.category = Some("Select a valid category.".to_owned());
            None
        }
    };

    let owner_id = match parse_optional_id(&form.owner_id) {
        Ok(id) => id,
        Err(()) => {
            errors.owner = Some(format!("Select a valid {}.", kind.owner_label.to_lowercase()));
            None
        }
    };

    let notes = form.notes.trim();
    let notes = (!notes.is_empty()).then(|| notes.to_owned());

    match (amount, date) {
        (Some(amount), Some(date)) if errors.is_empty() => Ok(ValidatedTransaction {
            description: description.to_owned(),
            amount,
            date,
            category_id,
            owner_id,
            notes,
        }),
        _ => Err(errors),
    }
}

fn parse_optional_id(value: &str) -> Result<Option<DatabaseId>, ()> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(None);
    }

    value.parse::<DatabaseId>().map(Some).map_err(|_| ())
}

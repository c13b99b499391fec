//! Core reference entity types and form validation.

use serde::{Deserialize, Serialize};

use crate::{database_id::DatabaseId, transaction::TransactionKind};

/// Describes one of the three reference entities (category, payment method,
/// or income source): its table, display labels, routes, and the transaction
/// columns that point at it.
#[derive(Debug)]
pub(crate) struct ReferenceDescriptor {
    /// The SQLite table name.
    pub(crate) table: &'static str,
    /// Lowercase singular name for error messages, e.g. "payment method".
    pub(crate) singular: &'static str,
    /// Capitalized singular display name, e.g. "Payment Method".
    pub(crate) title: &'static str,
    /// Capitalized plural display name, e.g. "Payment Methods".
    pub(crate) title_plural: &'static str,
    /// The transaction columns referencing this entity, shown as usage tables
    /// on the detail page.
    pub(crate) usages: &'static [ReferenceUsage],
    /// The list page.
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

/// One transaction table column pointing at a reference entity.
#[derive(Debug)]
pub(crate) struct ReferenceUsage {
    /// The transaction kind holding the column.
    pub(crate) kind: &'static TransactionKind,
    /// The column name, e.g. "category_id".
    pub(crate) column: &'static str,
    /// The heading shown above the usage table, e.g. "Expenses in this
    /// category".
    pub(crate) heading: &'static str,
}

/// A stored reference entity row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Reference {
    /// The ID of the row.
    pub(crate) id: DatabaseId,
    /// The unique display name.
    pub(crate) name: String,
    /// An optional free-text description.
    pub(crate) description: Option<String>,
}

/// A validated, non-empty reference entity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReferenceName(String);

impl ReferenceName {
    /// Create a name from `value`, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns [crate::Error::EmptyName] if `value` is empty or whitespace.
    pub(crate) fn new(value: &str) -> Result<Self, crate::Error> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(crate::Error::EmptyName);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Create a name, skipping validation. Intended for tests and for values
    /// read back from the database.
    pub(crate) fn new_unchecked(value: &str) -> Self {
        Self(value.to_owned())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReferenceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The raw strings submitted from the reference create and edit forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct ReferenceFormData {
    /// The unique display name.
    pub(crate) name: String,
    /// An optional free-text description.
    #[serde(default)]
    pub(crate) description: String,
}

/// Field-level validation messages for the reference form.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct ReferenceFormErrors {
    pub(crate) name: Option<String>,
}

/// Validate the raw form strings for a reference entity. The description is
/// optional; a blank one is stored as NULL.
pub(crate) fn validate_reference_form(
    form: &ReferenceFormData,
) -> Result<(ReferenceName, Option<String>), ReferenceFormErrors> {
    let name = ReferenceName::new(&form.name).map_err(|_| ReferenceFormErrors {
        name: Some("Enter a name.".to_owned()),
    })?;

    let description = form.description.trim();
    let description = (!description.is_empty()).then(|| description.to_owned());

    Ok((name, description))
}

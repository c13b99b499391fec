//! Management of the lookup entities transactions refer to.
//!
//! Categories, payment methods, and income sources all consist of a unique
//! name plus an optional description, so everything in this module is
//! parameterized by a [ReferenceDescriptor] instead of being written three
//! times; [crate::category], [crate::payment_method], and
//! [crate::income_source] supply the descriptors and the route handlers.

mod db;
mod domain;
mod pages;
mod views;

pub(crate) use db::{
    create_reference, create_reference_table, delete_reference, get_reference, get_references,
    update_reference,
};
pub(crate) use domain::{
    Reference, ReferenceDescriptor, ReferenceFormData, ReferenceFormErrors, ReferenceName,
    ReferenceUsage, validate_reference_form,
};
pub(crate) use pages::{
    ReferenceState, create_reference_endpoint, delete_reference_endpoint, delete_reference_page,
    edit_reference_page, new_reference_page, reference_detail_page, references_page,
    update_reference_endpoint,
};

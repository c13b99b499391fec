//! Expense and income management.
//!
//! Expenses and incomes share the same shape, so everything in this module is
//! parameterized by a [TransactionKind] descriptor instead of being written
//! twice; [crate::expense] and [crate::income] supply the descriptors and the
//! route handlers.

mod db;
mod domain;
mod pages;
mod views;

pub(crate) use db::{
    TRANSACTION_ORDER_SQL, create_transaction, create_transaction_table, delete_transaction,
    get_transaction,
    get_transactions_for_reference, map_transaction_row, transaction_select_sql,
    update_transaction,
};
pub(crate) use domain::{
    Transaction, TransactionFormData, TransactionFormErrors, TransactionKind,
    validate_transaction_form,
};
pub(crate) use pages::{
    PageQuery, TransactionFormState, TransactionListState, TransactionState,
    create_transaction_endpoint, delete_transaction_endpoint, delete_transaction_page,
    edit_transaction_page, new_transaction_page, transaction_detail_page,
    transactions_page, update_transaction_endpoint,
};
pub(crate) use views::transaction_table;

#[cfg(test)]
pub(crate) use db::count_transactions;
#[cfg(test)]
pub(crate) use domain::ValidatedTransaction;

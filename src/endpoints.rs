//! The application's endpoint URIs.
//!
//! For endpoints that take a parameter, e.g. '/expenses/{expense_id}/', use
//! [format_endpoint].

/// The dashboard.
pub(crate) const ROOT: &str = "/";

/// The page listing all categories.
pub(crate) const CATEGORIES_VIEW: &str = "/categories/";
/// The page for creating a new category.
pub(crate) const NEW_CATEGORY_VIEW: &str = "/categories/new/";
/// The page showing a single category and its transactions.
pub(crate) const CATEGORY_DETAIL_VIEW: &str = "/categories/{category_id}/";
/// The page for editing an existing category.
pub(crate) const EDIT_CATEGORY_VIEW: &str = "/categories/{category_id}/edit/";
/// The confirmation page and endpoint for deleting a category.
pub(crate) const DELETE_CATEGORY_VIEW: &str = "/categories/{category_id}/delete/";

/// The page listing all payment methods.
pub(crate) const PAYMENT_METHODS_VIEW: &str = "/payment-methods/";
/// The page for creating a new payment method.
pub(crate) const NEW_PAYMENT_METHOD_VIEW: &str = "/payment-methods/new/";
/// The page showing a single payment method and its expenses.
pub(crate) const PAYMENT_METHOD_DETAIL_VIEW: &str = "/payment-methods/{payment_method_id}/";
/// The page for editing an existing payment method.
pub(crate) const EDIT_PAYMENT_METHOD_VIEW: &str = "/payment-methods/{payment_method_id}/edit/";
/// The confirmation page and endpoint for deleting a payment method.
pub(crate) const DELETE_PAYMENT_METHOD_VIEW: &str = "/payment-methods/{payment_method_id}/delete/";

/// The page listing all income sources.
pub(crate) const INCOME_SOURCES_VIEW: &str = "/income-sources/";
/// The page for creating a new income source.
pub(crate) const NEW_INCOME_SOURCE_VIEW: &str = "/income-sources/new/";
/// The page showing a single income source and its incomes.
pub(crate) const INCOME_SOURCE_DETAIL_VIEW: &str = "/income-sources/{income_source_id}/";
/// The page for editing an existing income source.
pub(crate) const EDIT_INCOME_SOURCE_VIEW: &str = "/income-sources/{income_source_id}/edit/";
/// The confirmation page and endpoint for deleting an income source.
pub(crate) const DELETE_INCOME_SOURCE_VIEW: &str = "/income-sources/{income_source_id}/delete/";

/// The paginated expense list.
pub(crate) const EXPENSES_VIEW: &str = "/expenses/";
/// The page for creating a new expense.
pub(crate) const NEW_EXPENSE_VIEW: &str = "/expenses/new/";
/// The page showing a single expense.
pub(crate) const EXPENSE_DETAIL_VIEW: &str = "/expenses/{expense_id}/";
/// The page for editing an existing expense.
pub(crate) const EDIT_EXPENSE_VIEW: &str = "/expenses/{expense_id}/edit/";
/// The confirmation page and endpoint for deleting an expense.
pub(crate) const DELETE_EXPENSE_VIEW: &str = "/expenses/{expense_id}/delete/";

/// The paginated income list.
pub(crate) const INCOMES_VIEW: &str = "/incomes/";
/// The page for creating a new income.
pub(crate) const NEW_INCOME_VIEW: &str = "/incomes/new/";
/// The page showing a single income.
pub(crate) const INCOME_DETAIL_VIEW: &str = "/incomes/{income_id}/";
/// The page for editing an existing income.
pub(crate) const EDIT_INCOME_VIEW: &str = "/incomes/{income_id}/edit/";
/// The confirmation page and endpoint for deleting an income.
pub(crate) const DELETE_INCOME_VIEW: &str = "/incomes/{income_id}/delete/";

/// The route for static files.
pub(crate) const STATIC: &str = "/static";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a brace-delimited segment such as '{expense_id}' in
/// '/expenses/{expense_id}/'. Endpoint paths are assumed to be ASCII and to
/// contain at most one parameter. If no parameter is present, the original
/// path is returned unchanged.
pub(crate) fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let end = endpoint_path[start..]
        .find('}')
        .map(|offset| start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!("{}{}{}", &endpoint_path[..start], id, &endpoint_path[end..])
}

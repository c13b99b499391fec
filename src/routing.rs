//! Defines the app's routes and request handlers.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    category::{
        create_category_endpoint, delete_category_endpoint, get_categories_page,
        get_category_detail_page, get_delete_category_page, get_edit_category_page,
        get_new_category_page, update_category_endpoint,
    },
    dashboard::get_dashboard_page,
    endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_delete_expense_page,
        get_edit_expense_page, get_expense_detail_page, get_expenses_page, get_new_expense_page,
        update_expense_endpoint,
    },
    income::{
        create_income_endpoint, delete_income_endpoint, get_delete_income_page,
        get_edit_income_page, get_income_detail_page, get_incomes_page, get_new_income_page,
        update_income_endpoint,
    },
    income_source::{
        create_income_source_endpoint, delete_income_source_endpoint,
        get_delete_income_source_page, get_edit_income_source_page,
        get_income_source_detail_page, get_income_sources_page, get_new_income_source_page,
        update_income_source_endpoint,
    },
    not_found::get_404_not_found,
    payment_method::{
        create_payment_method_endpoint, delete_payment_method_endpoint,
        get_delete_payment_method_page, get_edit_payment_method_page,
        get_new_payment_method_page, get_payment_method_detail_page, get_payment_methods_page,
        update_payment_method_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every entity follows the same layout: a list page, a creation page and
/// endpoint under `new/`, a detail page under the entity's id, and edit and
/// delete pages and endpoints under `edit/` and `delete/`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(endpoints::CATEGORIES_VIEW, get(get_categories_page))
        .route(
            endpoints::NEW_CATEGORY_VIEW,
            get(get_new_category_page).post(create_category_endpoint),
        )
        .route(endpoints::CATEGORY_DETAIL_VIEW, get(get_category_detail_page))
        .route(
            endpoints::EDIT_CATEGORY_VIEW,
            get(get_edit_category_page).post(update_category_endpoint),
        )
        .route(
            endpoints::DELETE_CATEGORY_VIEW,
            get(get_delete_category_page).post(delete_category_endpoint),
        )
        .route(endpoints::PAYMENT_METHODS_VIEW, get(get_payment_methods_page))
        .route(
            endpoints::NEW_PAYMENT_METHOD_VIEW,
            get(get_new_payment_method_page).post(create_payment_method_endpoint),
        )
        .route(
            endpoints::PAYMENT_METHOD_DETAIL_VIEW,
            get(get_payment_method_detail_page),
        )
        .route(
            endpoints::EDIT_PAYMENT_METHOD_VIEW,
            get(get_edit_payment_method_page).post(update_payment_method_endpoint),
        )
        .route(
            endpoints::DELETE_PAYMENT_METHOD_VIEW,
            get(get_delete_payment_method_page).post(delete_payment_method_endpoint),
        )
        .route(endpoints::INCOME_SOURCES_VIEW, get(get_income_sources_page))
        .route(
            endpoints::NEW_INCOME_SOURCE_VIEW,
            get(get_new_income_source_page).post(create_income_source_endpoint),
        )
        .route(
            endpoints::INCOME_SOURCE_DETAIL_VIEW,
            get(get_income_source_detail_page),
        )
        .route(
            endpoints::EDIT_INCOME_SOURCE_VIEW,
            get(get_edit_income_source_page).post(update_income_source_endpoint),
        )
        .route(
            endpoints::DELETE_INCOME_SOURCE_VIEW,
            get(get_delete_income_source_page).post(delete_income_source_endpoint),
        )
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(
            endpoints::NEW_EXPENSE_VIEW,
            get(get_new_expense_page).post(create_expense_endpoint),
        )
        .route(endpoints::EXPENSE_DETAIL_VIEW, get(get_expense_detail_page))
        .route(
            endpoints::EDIT_EXPENSE_VIEW,
            get(get_edit_expense_page).post(update_expense_endpoint),
        )
        .route(
            endpoints::DELETE_EXPENSE_VIEW,
            get(get_delete_expense_page).post(delete_expense_endpoint),
        )
        .route(endpoints::INCOMES_VIEW, get(get_incomes_page))
        .route(
            endpoints::NEW_INCOME_VIEW,
            get(get_new_income_page).post(create_income_endpoint),
        )
        .route(endpoints::INCOME_DETAIL_VIEW, get(get_income_detail_page))
        .route(
            endpoints::EDIT_INCOME_VIEW,
            get(get_edit_income_page).post(update_income_endpoint),
        )
        .route(
            endpoints::DELETE_INCOME_VIEW,
            get(get_delete_income_page).post(delete_income_endpoint),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static"))
        .fallback(get_404_not_found)
        .with_state(state)
}

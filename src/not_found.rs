//! The 404 page shown when a URL or record does not exist.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The fallback route handler for unknown URLs.
pub(crate) async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Render the 404 page with the NOT FOUND status code.
pub(crate) fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Not Found",
            "404",
            "The page or record you were looking for does not exist.",
            "Check the address, or go back and try again.",
        ),
    )
        .into_response()
}

#[cfg(test)]
mod not_found_tests {
    use axum::http::StatusCode;

    use crate::test_utils::{assert_valid_html, parse_html_document, response_body_text};

    use super::get_404_not_found;

    #[tokio::test]
    async fn renders_not_found_page() {
        let response = get_404_not_found().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = parse_html_document(&response_body_text(response).await);
        assert_valid_html(&html);
    }
}

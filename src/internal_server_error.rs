//! The 500 page shown when an unexpected error occurs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// Render the 500 page with a short `description` of the problem and a
/// suggested `fix` for the user.
pub(crate) fn render_internal_server_error(description: &str, fix: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_view("Internal Server Error", "500", description, fix),
    )
        .into_response()
}

#[cfg(test)]
mod internal_server_error_tests {
    use axum::http::StatusCode;

    use crate::test_utils::{assert_valid_html, parse_html_document, response_body_text};

    use super::render_internal_server_error;

    #[tokio::test]
    async fn renders_error_page() {
        let response = render_internal_server_error("Something went wrong.", "Try again later.");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let html = parse_html_document(&response_body_text(response).await);
        assert_valid_html(&html);
    }
}

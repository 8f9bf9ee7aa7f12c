//! Admin document route handlers.

use axum::response::{Html, Redirect};

/// The admin dashboard document, embedded at compile time.
///
/// One self-contained page: the Vue client inside performs its cosmetic
/// local login and talks to the `/api` routes.
const ADMIN_PAGE: &str = include_str!("../../static/admin.html");

/// Redirect the root to the admin dashboard.
pub async fn index() -> Redirect {
    Redirect::to("/admin")
}

/// Serve the admin dashboard document.
pub async fn admin() -> Html<&'static str> {
    Html(ADMIN_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_embeds_the_client_app() {
        assert!(ADMIN_PAGE.contains("<!DOCTYPE html>"));
        assert!(ADMIN_PAGE.contains("vue"));
        assert!(ADMIN_PAGE.contains("/api/dashboard-data"));
    }
}

//! Landing route

use axum::response::Redirect;

/// `GET /`
///
/// The site has no landing page of its own yet, so the configured app URL
/// (the "home" link of every page) points visitors at the partners page.
pub async fn home() -> Redirect {
    Redirect::to("/partners")
}

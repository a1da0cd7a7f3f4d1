//! Status pages

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::render::{HtmlRender, RenderContext};
use crate::{templates, Error};

/// Fallback for every unmatched route.
///
/// Renders `status/404`. If that template itself fails the client still
/// gets a 404, in plain text.
pub async fn not_found(ctx: RenderContext, uri: Uri) -> Response {
    match ctx.html(StatusCode::NOT_FOUND, templates::STATUS_404) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, path = %uri.path(), "Failed to render 404 page");
            Error::NotFound(uri.path().to_string()).into_response()
        }
    }
}

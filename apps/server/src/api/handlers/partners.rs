//! Partners page

use axum::{http::StatusCode, response::Response};

use crate::render::{HtmlRender, RenderContext};
use crate::templates::{self, TemplateName};

const TPL_PARTNERS: TemplateName = templates::PARTNERS;

/// Render the partners page through any [`HtmlRender`] capability.
///
/// Makes exactly one render call with status 200. Whatever the capability
/// returns, success or failure, is handed back untouched.
pub fn render_partners<R: HtmlRender>(ctx: &R) -> Result<R::Output, R::Error> {
    ctx.html(StatusCode::OK, TPL_PARTNERS)
}

/// `GET /partners`
pub async fn partners(ctx: RenderContext) -> crate::Result<Response> {
    render_partners(&ctx)
}

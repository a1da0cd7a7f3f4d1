//! HTML rendering capability handed to page handlers.
//!
//! Handlers depend on [`HtmlRender`] rather than on a concrete renderer so
//! that tests can substitute a double. In production the capability is the
//! [`RenderContext`] extractor, which binds the shared [`TemplateRegistry`]
//! to the current request.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::{
    request_context::RequestContext,
    state::AppState,
    templates::{PageData, TemplateName, TemplateRegistry},
    Error,
};

/// Something that can answer a request with a named template and a status code.
pub trait HtmlRender {
    type Output;
    type Error;

    fn html(&self, status: StatusCode, template: TemplateName)
        -> Result<Self::Output, Self::Error>;
}

/// Template renderer bound to one in-flight request.
#[derive(Debug, Clone)]
pub struct RenderContext {
    templates: Arc<TemplateRegistry>,
    page: PageData,
}

impl RenderContext {
    pub fn new(templates: Arc<TemplateRegistry>, page: PageData) -> Self {
        Self { templates, page }
    }

    pub fn page(&self) -> &PageData {
        &self.page
    }
}

impl HtmlRender for RenderContext {
    type Output = Response;
    type Error = Error;

    fn html(&self, status: StatusCode, template: TemplateName) -> Result<Response, Error> {
        match self.templates.render(template, &self.page) {
            Ok(body) => {
                crate::metrics::record_render(template, true);
                tracing::debug!(
                    template = %template,
                    status = status.as_u16(),
                    bytes = body.len(),
                    "Rendered template"
                );
                Ok((status, Html(body)).into_response())
            }
            Err(e) => {
                crate::metrics::record_render(template, false);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for RenderContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let mut page = PageData::new(&state.config.ui.app_name, &state.config.ui.app_url);
        if let Some(ctx) = parts.extensions.get::<RequestContext>() {
            page = page.with_request_id(ctx.request_id.clone());
        }
        Ok(Self::new(state.templates.clone(), page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::templates::PARTNERS;
    use axum::http::{header, Request};

    fn context(templates: TemplateRegistry) -> RenderContext {
        RenderContext::new(Arc::new(templates), PageData::new("Forge", "/"))
    }

    #[test]
    fn html_sets_status_and_content_type() {
        let response = context(TemplateRegistry::builtin())
            .html(StatusCode::OK, PARTNERS)
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn html_keeps_the_requested_status() {
        let response = context(TemplateRegistry::builtin())
            .html(StatusCode::NOT_FOUND, PARTNERS)
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn html_surfaces_missing_templates() {
        let err = context(TemplateRegistry::new())
            .html(StatusCode::OK, PARTNERS)
            .unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound(_)));
    }

    fn request_parts() -> Parts {
        Request::builder()
            .uri("/partners")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn extractor_binds_request_id_and_ui_settings() {
        let mut config = Config::default();
        config.ui.app_name = "Acme Git".to_string();
        config.ui.app_url = "https://git.acme.test/".to_string();
        let state = AppState::new(config);

        let mut parts = request_parts();
        parts.extensions.insert(RequestContext {
            request_id: "req-42".to_string(),
        });

        let ctx = RenderContext::from_request_parts(&mut parts, &state)
            .await
            .unwrap();

        assert_eq!(ctx.page().request_id.as_deref(), Some("req-42"));
        assert_eq!(ctx.page().app_name, "Acme Git");
        assert_eq!(ctx.page().app_url, "https://git.acme.test/");
    }

    #[tokio::test]
    async fn extractor_without_request_context_leaves_request_id_empty() {
        let state = AppState::new(Config::default());
        let mut parts = request_parts();

        let ctx = RenderContext::from_request_parts(&mut parts, &state)
            .await
            .unwrap();

        assert!(ctx.page().request_id.is_none());
    }
}

pub mod assertions;

use anyhow::Context as _;
use axum::{
    body::Bytes,
    http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use forge_web::{api::create_router, templates::TemplateRegistry, AppState, Config};
use tower::ServiceExt as _;

pub use assertions::*;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::new_with_config(|_| {})
    }

    pub fn new_with_config(configure: impl FnOnce(&mut Config)) -> Self {
        Self::build(configure, TemplateRegistry::builtin())
    }

    /// App whose template registry is replaced, e.g. to simulate a missing
    /// or broken template.
    pub fn with_templates(templates: TemplateRegistry) -> Self {
        Self::build(|_| {}, templates)
    }

    fn build(configure: impl FnOnce(&mut Config), templates: TemplateRegistry) -> Self {
        let mut config = test_config();
        configure(&mut config);

        let state = AppState::with_templates(config, templates);
        let router = create_router(state.clone());

        Self { router, state }
    }

    pub async fn get(&self, path_and_query: &str) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request(Method::GET, path_and_query, &[]).await
    }

    pub async fn request(
        &self,
        method: Method,
        path_and_query: &str,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let mut request = Request::builder()
            .method(method)
            .uri(path_and_query)
            .header("host", "forge.example.org")
            .header("accept", "text/html")
            .body(axum::body::Body::empty())
            .context("build request")?;

        for (name, value) in extra_headers {
            request.headers_mut().insert(
                name.parse::<HeaderName>().context("parse header name")?,
                value.parse::<HeaderValue>().context("parse header value")?,
            );
        }

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;

        Ok((status, headers, body))
    }
}

/// Defaults only: tests must not depend on a local config.toml or FORGE__* variables.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.ui.app_name = "Test Forge".to_string();
    config.ui.app_url = "https://forge.example.org/".to_string();
    config
}

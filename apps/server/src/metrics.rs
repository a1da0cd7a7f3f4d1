//! Prometheus metrics for the web front-end.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge_vec, Encoder,
    HistogramVec, IntCounterVec, IntGaugeVec, TextEncoder,
};

use crate::templates::TemplateName;

lazy_static! {
    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "forge_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "forge_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "forge_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    pub static ref HTTP_RESPONSE_SIZE_BYTES: HistogramVec = register_histogram_vec!(
        "forge_http_response_size_bytes",
        "HTTP response size in bytes",
        &["method", "path", "status"],
        vec![100.0, 1_000.0, 10_000.0, 100_000.0, 1_000_000.0]
    )
    .expect("Failed to register HTTP_RESPONSE_SIZE_BYTES");

    /// Template renders by template name and outcome (`ok` / `error`)
    pub static ref TEMPLATE_RENDERS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "forge_template_renders_total",
        "Total number of template renders",
        &["template", "outcome"]
    )
    .expect("Failed to register TEMPLATE_RENDERS_TOTAL");
}

/// Routes served by this process. Anything else is collapsed into `other`
/// so that scanners hitting random URLs cannot blow up label cardinality.
const KNOWN_PATHS: &[&str] = &["/", "/partners", "/health", "/metrics", "/favicon.ico"];

/// Paths must match a route exactly: `/partners/` is a 404 and is labelled `other`.
pub fn sanitize_path(path: &str) -> String {
    if KNOWN_PATHS.contains(&path) {
        path.to_string()
    } else {
        "other".to_string()
    }
}

pub fn record_render(template: TemplateName, ok: bool) {
    let outcome = if ok { "ok" } else { "error" };
    TEMPLATE_RENDERS_TOTAL
        .with_label_values(&[template.as_str(), outcome])
        .inc();
}

/// Encode every registered metric in the Prometheus text format.
pub fn gather_text() -> Result<Vec<u8>, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&prometheus::gather(), &mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::PARTNERS;

    #[test]
    fn sanitize_keeps_known_routes() {
        assert_eq!(sanitize_path("/partners"), "/partners");
        assert_eq!(sanitize_path("/"), "/");
        assert_eq!(sanitize_path("/health"), "/health");
    }

    #[test]
    fn sanitize_does_not_fold_trailing_slashes() {
        assert_eq!(sanitize_path("/partners/"), "other");
        assert_eq!(sanitize_path("/health/"), "other");
        assert_eq!(sanitize_path(""), "other");
    }

    #[test]
    fn sanitize_collapses_unknown_routes() {
        assert_eq!(sanitize_path("/wp-admin/setup.php"), "other");
        assert_eq!(sanitize_path("/partners/extra"), "other");
    }

    #[test]
    fn render_counter_is_labelled_by_template() {
        let before = TEMPLATE_RENDERS_TOTAL
            .with_label_values(&["partners", "ok"])
            .get();
        record_render(PARTNERS, true);
        let after = TEMPLATE_RENDERS_TOTAL
            .with_label_values(&["partners", "ok"])
            .get();
        assert!(after > before);
    }

    #[test]
    fn gather_text_includes_render_counter() {
        record_render(PARTNERS, true);
        let text = String::from_utf8(gather_text().unwrap()).unwrap();
        assert!(text.contains("forge_template_renders_total"));
    }
}

use anyhow::Context as _;
use axum::{
    body::Bytes,
    http::{HeaderMap, StatusCode},
};

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(
        actual, expected,
        "{context}: expected status {expected}, got {actual}"
    );
}

pub fn header<'a>(headers: &'a HeaderMap, name: &str) -> anyhow::Result<&'a str> {
    headers
        .get(name)
        .with_context(|| format!("missing {name} header"))?
        .to_str()
        .with_context(|| format!("{name} header is not valid ASCII"))
}

pub fn assert_html(headers: &HeaderMap) -> anyhow::Result<()> {
    let content_type = header(headers, "content-type")?;
    assert!(
        content_type.starts_with("text/html"),
        "expected an HTML response, got {content_type}"
    );
    Ok(())
}

pub fn body_text(body: &Bytes) -> anyhow::Result<&str> {
    std::str::from_utf8(body).context("response body is not UTF-8")
}

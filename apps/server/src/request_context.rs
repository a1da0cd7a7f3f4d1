//! Per-request context injected by middleware.

/// Lives for one request/response exchange. The request id middleware
/// inserts it into the request extensions before any handler runs.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
}

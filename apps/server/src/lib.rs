//! Forge web front-end
//!
//! Server-rendered pages of a self-hosted Git forge:
//! - Static pages rendered from compiled askama templates
//! - Request ids, security headers and Prometheus metrics on every response
//! - Structured logging with optional OpenTelemetry export

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod request_context;
pub mod state;
pub mod templates;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;

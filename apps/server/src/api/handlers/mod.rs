//! Request handlers for API endpoints
//!
//! Page handlers only pick a template and a status code. Rendering, and
//! every failure that can come out of it, belongs to the render capability.

pub mod home;
pub mod metrics;
pub mod partners;
pub mod status;

pub use home::*;
pub use metrics::*;
pub use partners::*;
pub use status::*;

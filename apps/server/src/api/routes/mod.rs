//! Route tables, grouped by surface

pub mod metrics;
pub mod pages;

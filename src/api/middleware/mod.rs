//! HTTP middleware for request processing.
//!
//! Provides request/response tracing shared by the API and the HTML pages.

pub mod tracing;

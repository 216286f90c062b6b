//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns, namely trace
//! correlation with access logging and CORS response headers.

pub mod cors;
pub mod trace;

pub use trace::Trace;

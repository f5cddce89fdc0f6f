//! Web middleware: anti-forgery checks and request tracing.

pub mod csrf;
pub mod tracing;

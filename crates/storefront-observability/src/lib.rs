//! Observability for the mini storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with session context
//! - `LogBuilder` - Fluent construction of log entries with typed fields

mod logging;

pub use logging::*;

// Re-export SessionId from storefront-commerce for convenience
pub use storefront_commerce::SessionId;

//! Shared types for the butiko shop stack
//!
//! Common types used across the workspace: error types, catalog models
//! (products and reservations) and quote value types.

pub mod error;
pub mod models;
pub mod quote;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use quote::{QuoteSnapshot, QuoteTotals};

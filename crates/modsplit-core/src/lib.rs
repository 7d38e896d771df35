//! Modsplit Core Library
//!
//! Split plans, the builtin mapping table, and error types for the modsplit
//! source-splitting tool.

pub mod builtin;
pub mod error;
pub mod plan;

pub use error::{Error, Result};
pub use plan::{GroupSpec, SplitPlan};

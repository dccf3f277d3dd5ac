//! Metra Core - Fundamental types
//!
//! This crate provides the core types used throughout Metra:
//! - `MetraError`: Structured errors with machine-readable codes
//! - `Locale` / `NumberFormat`: Locale tags and their number separators
//! - `number`: Numeric literal scanning, parsing and rendering

mod error;
mod locale;
pub mod number;

pub use error::{MetraError, Severity, codes};
pub use locale::{Locale, NumberFormat};
pub use number::NumberError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Locale, MetraError, NumberFormat, Severity};
    pub use crate::error::codes;
}

//! Result type alias for rule test operations

use crate::error::RuletestError;

/// Standard Result type for rule test operations
pub type Result<T> = std::result::Result<T, RuletestError>;

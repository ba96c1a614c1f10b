//! Error types for the arena kernel.
//!
//! This module provides a unified error type [`ArenaError`] and a convenient [`Result`] alias.

use std::fmt;

use crate::utils::allocator::BodyHandle;

/// Main error type for the kernel.
///
/// Every variant is local and recoverable: the world keeps simulating the
/// bodies it already owns after any of these is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ArenaError {
    /// A body was placed with a non-positive or non-finite parameter.
    InvalidBodyParameters { field: &'static str, value: f64 },
    /// A setter received a value outside its domain; the previous value was kept.
    DegenerateConfiguration { name: &'static str, value: f64 },
    /// Arena dimensions must be positive and finite.
    InvalidArena { width: f64, height: f64 },
    /// The handle does not refer to a live body (never issued, or cleared since).
    UnknownBody(BodyHandle),
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidBodyParameters { field, value } => {
                write!(f, "Invalid body parameter: {field} = {value}")
            }
            Self::DegenerateConfiguration { name, value } => {
                write!(f, "Degenerate configuration: {name} = {value}")
            }
            Self::InvalidArena { width, height } => {
                write!(f, "Invalid arena bounds: {width} x {height}")
            }
            Self::UnknownBody(handle) => write!(
                f,
                "Unknown body: index {} generation {}",
                handle.index(),
                handle.generation()
            ),
        }
    }
}

impl std::error::Error for ArenaError {}

/// Convenient Result type alias for kernel operations.
pub type Result<T> = std::result::Result<T, ArenaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_field() {
        let err = ArenaError::InvalidBodyParameters {
            field: "mass",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Invalid body parameter: mass = -1");

        let err = ArenaError::DegenerateConfiguration {
            name: "retention",
            value: 1.5,
        };
        assert!(err.to_string().contains("retention"));
    }
}

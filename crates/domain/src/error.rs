//! Domain-level validation errors.

use thiserror::Error;

/// Errors raised by domain constructors and parsers.
///
/// Lenient code paths (quantity resolution during encounter setup) never
/// surface these; they exist for callers that want strict validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Quantity/dice notation could not be parsed
    #[error("Invalid quantity notation: '{0}'")]
    InvalidQuantity(String),
    /// Dice must have at least one side
    #[error("Die size must be at least 1")]
    InvalidDieSize,
}

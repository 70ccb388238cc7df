//! Structured errors for unit algebra and conversion
//!
//! Errors are synchronous and never retried. Every variant carries a
//! human-readable detail and maps to a stable machine-readable code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_OPERATION: &str = "INVALID_OPERATION";
    pub const WRONG_UNIT_DESCRIPTOR: &str = "WRONG_UNIT_DESCRIPTOR";
    pub const INVALID_CONVERSION: &str = "INVALID_CONVERSION";
    pub const UNDEFINED_CONVERTER: &str = "UNDEFINED_CONVERTER";
    pub const DUPLICATE_CONVERTER: &str = "DUPLICATE_CONVERTER";
    pub const INVALID_ALIAS: &str = "INVALID_ALIAS";
}

/// Error type for descriptor algebra, conversion and property construction
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum UnitError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Wrong unit descriptor type: {0}")]
    WrongUnitDescriptorType(String),

    #[error("Invalid conversion: {0}")]
    InvalidConversion(String),

    #[error("Undefined converter: {0}")]
    UndefinedConverter(String),

    #[error("Duplicate converter: {0}")]
    DuplicateConverter(String),

    #[error("Invalid alias mapping: {0}")]
    InvalidAliasMapping(String),
}

/// Result alias used across the workspace
pub type UnitResult<T> = Result<T, UnitError>;

impl UnitError {
    // ========== Common Error Constructors ==========

    pub fn invalid_operation(details: impl Into<String>) -> Self {
        Self::InvalidOperation(details.into())
    }

    pub fn wrong_descriptor(details: impl Into<String>) -> Self {
        Self::WrongUnitDescriptorType(details.into())
    }

    pub fn invalid_conversion(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        Self::InvalidConversion(format!("cannot convert from {} to {}", from, to))
    }

    pub fn undefined_converter(generic: impl std::fmt::Display) -> Self {
        Self::UndefinedConverter(format!("a converter has not been defined for {}", generic))
    }

    pub fn duplicate_converter(generic: impl std::fmt::Display) -> Self {
        Self::DuplicateConverter(format!("a converter is already registered for {}", generic))
    }

    pub fn invalid_alias(details: impl Into<String>) -> Self {
        Self::InvalidAliasMapping(details.into())
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::InvalidOperation(_) => codes::INVALID_OPERATION,
            UnitError::WrongUnitDescriptorType(_) => codes::WRONG_UNIT_DESCRIPTOR,
            UnitError::InvalidConversion(_) => codes::INVALID_CONVERSION,
            UnitError::UndefinedConverter(_) => codes::UNDEFINED_CONVERTER,
            UnitError::DuplicateConverter(_) => codes::DUPLICATE_CONVERTER,
            UnitError::InvalidAliasMapping(_) => codes::INVALID_ALIAS,
        }
    }

    /// Suggestion for fixing the error at the call site
    pub fn suggestion(&self) -> &'static str {
        match self {
            UnitError::InvalidOperation(_) => {
                "Only simple dimensions can be raised to a power"
            }
            UnitError::WrongUnitDescriptorType(_) => {
                "Pass a unit descriptor of the shape the property declares"
            }
            UnitError::InvalidConversion(_) => {
                "Convert only between units of the same family and power"
            }
            UnitError::UndefinedConverter(_) => {
                "Register a converter for this shape before building the registry"
            }
            UnitError::DuplicateConverter(_) => {
                "Register each generic descriptor exactly once"
            }
            UnitError::InvalidAliasMapping(_) => {
                "The reference unit of an alias must equal its base composite exactly"
            }
        }
    }
}

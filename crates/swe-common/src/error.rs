//! Error types for component trees and constraint validation.

use thiserror::Error;

use crate::model::ComponentKind;

/// Errors raised by mutating operations on a component tree.
///
/// A failed call leaves the component it was made on unchanged. Calls that
/// fan out to several children (record or array `set_value`) are not atomic:
/// children updated before the failing one keep their new values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComponentError {
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: ComponentKind,
        found: ComponentKind,
    },

    #[error("vector '{vector}' has no coordinate for axis '{axis}'")]
    UnknownAxis { vector: String, axis: String },

    #[error("array '{array}' has {capacity} elements but {len} values were supplied")]
    TooManyValues {
        array: String,
        len: usize,
        capacity: usize,
    },

    #[error("{kind} component '{component}' cannot take a {found} value")]
    ValueShape {
        component: String,
        kind: ComponentKind,
        found: &'static str,
    },

    #[error("array size {requested} exceeds maximum {max}")]
    ArrayTooLarge { requested: usize, max: usize },
}

/// Errors found by the opt-in constraint validation pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("'{component}': token '{value}' is not allowed")]
    TokenNotAllowed { component: String, value: String },

    #[error("'{component}': '{value}' does not match pattern '{pattern}'")]
    PatternMismatch {
        component: String,
        value: String,
        pattern: String,
    },

    #[error("'{component}': invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        component: String,
        pattern: String,
        reason: String,
    },

    #[error("'{component}': value {value} is not allowed")]
    ValueNotAllowed { component: String, value: f64 },

    #[error("'{component}': value {value} outside interval [{min}, {max}]")]
    OutOfInterval {
        component: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("'{component}': value {value} has more than {max} significant figures")]
    TooManySignificantFigures {
        component: String,
        value: f64,
        max: u32,
    },
}

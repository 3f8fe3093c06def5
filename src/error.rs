//! Error types for owsmodel
//!
//! This module defines all error types used throughout the library.
//! Access-layer errors (unknown feature ids, misshaped values, cycles) are
//! programming errors: they are reported immediately and never retried.

use std::fmt;
use thiserror::Error;

use crate::metadata::FeatureId;

/// Result type alias using owsmodel Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for owsmodel operations
#[derive(Error, Debug)]
pub enum Error {
    /// Feature id not defined for the concrete class
    #[error("invalid feature id {feature_id} for class '{class}'")]
    InvalidFeature {
        /// Class the id was looked up on
        class: &'static str,
        /// The offending id
        feature_id: FeatureId,
    },

    /// Feature name not defined for the concrete class
    #[error("unknown feature '{name}' for class '{class}'")]
    UnknownFeature {
        /// Class the name was looked up on
        class: &'static str,
        /// The offending name
        name: String,
    },

    /// Class name not present in the registry
    #[error("unknown class '{0}'")]
    UnknownClass(String),

    /// Value shape does not match the feature's declared kind
    #[error("type mismatch on '{class}.{feature}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Owning class
        class: &'static str,
        /// Feature being written
        feature: &'static str,
        /// What the feature accepts
        expected: String,
        /// What was supplied
        found: String,
    },

    /// Object is not an instance of the requested class
    #[error("class mismatch: expected '{expected}', found '{found}'")]
    ClassMismatch {
        /// Requested class
        expected: &'static str,
        /// Actual class
        found: &'static str,
    },

    /// Feature used through a group it does not belong to
    #[error("feature '{member}' is not a member of group '{group}' in class '{class}'")]
    NotGroupMember {
        /// Owning class
        class: &'static str,
        /// Group feature
        group: &'static str,
        /// Supplied member feature
        member: &'static str,
    },

    /// List position outside the current contents
    #[error("index {index} out of bounds for '{feature}' with length {len}")]
    IndexOutOfBounds {
        /// List feature
        feature: &'static str,
        /// Requested index
        index: usize,
        /// Current length
        len: usize,
    },

    /// Attaching an object would make it its own ancestor
    #[error("containment cycle: '{class}' cannot be contained beneath itself")]
    ContainmentCycle {
        /// Class of the object being attached
        class: &'static str,
    },

    /// Schema validation error
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Value error (invalid lexical form for a datatype)
    #[error("value error: {0}")]
    Value(String),

    /// Malformed feature table
    #[error("registry error: {0}")]
    Registry(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),
}

/// Schema validation error with context
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error message
    pub message: String,
    /// URI fragment of the offending object
    pub path: Option<String>,
    /// Class of the offending object
    pub class: Option<&'static str>,
    /// Feature that failed the check
    pub feature: Option<&'static str>,
    /// Underlying constraint that was violated
    pub reason: Option<String>,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            class: None,
            feature: None,
            reason: None,
        }
    }

    /// Set the path where validation failed
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the class of the offending object
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Set the offending feature
    pub fn with_feature(mut self, feature: &'static str) -> Self {
        self.feature = Some(feature);
        self
    }

    /// Set the reason
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref reason) = self.reason {
            write!(f, "\n\nReason: {}", reason)?;
        }

        if let Some(ref path) = self.path {
            write!(f, "\n\nPath: {}", path)?;
        }

        match (self.class, self.feature) {
            (Some(class), Some(feature)) => write!(f, "\n\nFeature: {}.{}", class, feature)?,
            (Some(class), None) => write!(f, "\n\nClass: {}", class)?,
            _ => {}
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

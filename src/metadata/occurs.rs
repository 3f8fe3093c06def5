//! Feature multiplicity
//!
//! Every feature carries the lower/upper bounds of the schema particle or
//! attribute it was derived from. The bounds never restrict the access
//! layer; only the validator reads them.

use serde::Serialize;

/// Occurrence bounds for a feature (minOccurs, maxOccurs)
/// None for max means unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurs {
    /// Minimum number of values
    pub min: u32,
    /// Maximum number of values (None = unbounded)
    pub max: Option<u32>,
}

impl Occurs {
    /// Create new occurrence bounds
    pub const fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Exactly one (1, 1)
    pub const fn once() -> Self {
        Self { min: 1, max: Some(1) }
    }

    /// Optional occurrence (0, 1)
    pub const fn optional() -> Self {
        Self { min: 0, max: Some(1) }
    }

    /// Zero or more (0, unbounded)
    pub const fn zero_or_more() -> Self {
        Self { min: 0, max: None }
    }

    /// One or more (1, unbounded)
    pub const fn one_or_more() -> Self {
        Self { min: 1, max: None }
    }

    /// `min` or more (min, unbounded)
    pub const fn at_least(min: u32) -> Self {
        Self { min, max: None }
    }

    /// Check if the feature holds at most one value
    pub fn is_single(&self) -> bool {
        self.max == Some(1)
    }

    /// Check if the feature holds a list of values
    pub fn is_many(&self) -> bool {
        !self.is_single()
    }

    /// Check if the feature must be set
    pub fn is_required(&self) -> bool {
        self.min > 0
    }

    /// Check if a value count is under the minimum
    pub fn is_missing(&self, count: usize) -> bool {
        count < self.min as usize
    }

    /// Check if a value count exceeds the maximum
    pub fn is_exceeded(&self, count: usize) -> bool {
        match self.max {
            Some(max) => count > max as usize,
            None => false,
        }
    }
}

impl Default for Occurs {
    fn default() -> Self {
        Self::optional()
    }
}

impl std::fmt::Display for Occurs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..{}", self.min, max),
            None => write!(f, "{}..*", self.min),
        }
    }
}

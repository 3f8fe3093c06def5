//! Limits for walking containment trees
//!
//! Containment trees are acyclic by construction, but a decoded document can
//! still nest arbitrarily deep. These limits bound recursive walks
//! (`all_contents`, validation) so a hostile input cannot exhaust the stack.

use crate::error::{Error, Result};

/// Global limits configuration
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum nesting depth of a containment tree
    pub max_containment_depth: usize,

    /// Maximum number of objects visited by a single walk
    pub max_objects: usize,

    /// Maximum number of diagnostics collected by the validator
    pub max_diagnostics: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_containment_depth: 256,
            max_objects: 1_000_000,
            max_diagnostics: 1000,
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_containment_depth: 64,
            max_objects: 100_000,
            max_diagnostics: 100,
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_containment_depth: 4096,
            max_objects: 100_000_000,
            max_diagnostics: 100_000,
        }
    }

    /// Check if containment depth is within limits
    pub fn check_containment_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_containment_depth {
            Err(Error::LimitExceeded(format!(
                "containment depth {} exceeds maximum {}",
                depth, self.max_containment_depth
            )))
        } else {
            Ok(())
        }
    }

    /// Check if the number of visited objects is within limits
    pub fn check_objects(&self, count: usize) -> Result<()> {
        if count > self.max_objects {
            Err(Error::LimitExceeded(format!(
                "object count {} exceeds maximum {}",
                count, self.max_objects
            )))
        } else {
            Ok(())
        }
    }

    /// Whether another diagnostic may still be recorded
    pub fn allows_diagnostic(&self, collected: usize) -> bool {
        collected < self.max_diagnostics
    }
}

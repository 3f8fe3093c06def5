//! The OWS 1.1 common schema package
//!
//! - `features`: feature id constants per class
//! - `types`: typed wrappers and supertype accessor traits
//! - `validator`: schema checks over containment trees
//!
//! The registry itself is built lazily on first use of [`package`].

pub mod features;
mod package;
pub mod types;
pub mod validator;

pub use self::package::{build, package};
pub use self::validator::{Ows11Validator, ValidationMode};

//! # owsmodel
//!
//! A reflective, notifying object model for the OGC OWS 1.1 common schema.
//!
//! Every schema type is a class in a static [`metadata::Registry`]; every
//! instance is an [`ObjectRef`] whose features can be read and written
//! generically by id or name, or through the typed wrappers in
//! [`ows11::types`].
//!
//! ## Features
//!
//! - Generic `get`/`set`/`unset`/`is_set` by feature id or name
//! - Synchronous change notifications to attached adapters
//! - Exclusive containment with automatic ownership transfer
//! - Feature maps: interleaved substitution groups with live member views
//! - Schema validation of whole containment trees
//!
//! ## Example
//!
//! ```rust
//! use owsmodel::ows11::features::bounding_box_type;
//! use owsmodel::ows11::types::{BoundingBoxFeatures, BoundingBoxType};
//! use owsmodel::Value;
//!
//! let bbox = BoundingBoxType::new();
//! bbox.set_crs("EPSG:4326");
//! assert_eq!(bbox.get(bounding_box_type::CRS).unwrap(), Value::from("EPSG:4326"));
//! assert!(bbox.is_set(bounding_box_type::CRS).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod metadata;
pub mod namespaces;
pub mod object;
pub mod ows11;
pub mod value;

pub use error::{Error, Result, ValidationError};
pub use limits::Limits;
pub use metadata::{ClassDescriptor, FeatureDescriptor, FeatureId, Registry};
pub use object::{
    Adapter, Entry, EventType, FeatureMap, FeatureMapView, Notification, NotificationLog,
    ObjectList, ObjectRef, ValueList,
};
pub use value::Value;

/// Version of the owsmodel library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Static model metadata
//!
//! Class and feature descriptors, datatypes and the registry that ties them
//! together. Everything here is plain data: it is built once and shared
//! process-wide.

pub mod classes;
pub mod datatypes;
pub mod features;
pub mod occurs;
pub mod registry;

pub use classes::{ClassDescriptor, ContentKind};
pub use datatypes::{DataType, RangeClosure};
pub use features::{FeatureDescriptor, FeatureId, FeatureKind, XmlBinding, XmlRole};
pub use occurs::Occurs;
pub use registry::{ClassDecl, Registry, RegistryBuilder};

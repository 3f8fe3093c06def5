//! Feature descriptors
//!
//! A feature is one named field of a model class. Its descriptor records
//! everything generic code needs to read or write it without knowing the
//! concrete class: kind, multiplicity, declared default, owning group and
//! how the external codec binds it to XML.

use serde::Serialize;

use super::datatypes::DataType;
use super::occurs::Occurs;
use crate::error::Result;
use crate::namespaces::QName;
use crate::value::Value;

/// Dense, class-scoped feature identifier
pub type FeatureId = usize;

/// Storage kind of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureKind {
    /// Scalar (or list-of-scalar) value without ownership
    Attribute {
        /// Simple type of the value
        data_type: DataType,
    },
    /// Exclusively owned child object(s)
    Containment {
        /// Required class of the child; None accepts any class
        target: Option<&'static str>,
    },
    /// Ordered tagged sequence backing several member features
    Group,
}

/// How the external codec binds a feature to XML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum XmlRole {
    /// Child element
    Element,
    /// Attribute of the owning element
    Attribute,
    /// Simple content of the owning element
    Text,
    /// Substitution group of member elements
    Group,
}

/// XML binding of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XmlBinding {
    /// Element/attribute/text/group
    pub role: XmlRole,
    /// Local name in the document
    pub name: &'static str,
    /// Namespace URI; None for unqualified attributes
    pub namespace: Option<&'static str>,
}

impl XmlBinding {
    /// Qualified name of the bound node
    pub fn qname(&self) -> QName {
        QName::new(self.namespace, self.name)
    }
}

/// Metadata for one feature of a class
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureDescriptor {
    /// Position within the owning class (inherited features first)
    pub id: FeatureId,
    /// Feature name
    pub name: &'static str,
    /// Storage kind
    #[serde(flatten)]
    pub kind: FeatureKind,
    /// Multiplicity
    pub occurs: Occurs,
    /// Default literal, parsed with the attribute's datatype
    pub default: Option<&'static str>,
    /// Group feature this member is a view of
    pub group: Option<FeatureId>,
    /// XML binding; None for features the codec never serializes
    pub xml: Option<XmlBinding>,
}

impl FeatureDescriptor {
    /// Whether the feature holds a list of values
    pub fn is_many(&self) -> bool {
        self.occurs.is_many()
    }

    /// Whether the feature is a scalar attribute
    pub fn is_attribute(&self) -> bool {
        matches!(self.kind, FeatureKind::Attribute { .. })
    }

    /// Whether the feature owns its object values
    pub fn is_containment(&self) -> bool {
        matches!(self.kind, FeatureKind::Containment { .. })
    }

    /// Whether the feature is a feature-map group
    pub fn is_group(&self) -> bool {
        matches!(self.kind, FeatureKind::Group)
    }

    /// Whether the feature is a derived view over a group
    pub fn is_group_member(&self) -> bool {
        self.group.is_some()
    }

    /// Attribute datatype, if any
    pub fn data_type(&self) -> Option<DataType> {
        match self.kind {
            FeatureKind::Attribute { data_type } => Some(data_type),
            _ => None,
        }
    }

    /// Containment target class. `None` for non-containment features and for
    /// containments accepting any class.
    pub fn target(&self) -> Option<&'static str> {
        match self.kind {
            FeatureKind::Containment { target } => target,
            _ => None,
        }
    }

    /// Whether `describe()` renders this feature
    pub fn is_displayed(&self) -> bool {
        self.group.is_none() && matches!(self.kind, FeatureKind::Attribute { .. } | FeatureKind::Group)
    }

    /// Declared default as a runtime value (`Null` when none)
    pub fn default_value(&self) -> Result<Value> {
        match (self.default, self.data_type()) {
            (Some(literal), Some(data_type)) => data_type.from_lexical(literal),
            _ => Ok(Value::Null),
        }
    }

    /// Short description of the accepted shape, used in mismatch errors
    pub fn expected_shape(&self) -> String {
        let one = match self.kind {
            FeatureKind::Attribute { data_type } => data_type.name().to_string(),
            FeatureKind::Containment { target } => target.unwrap_or("object").to_string(),
            FeatureKind::Group => "feature map entries".to_string(),
        };
        if self.is_many() && !self.is_group() {
            format!("list of {}", one)
        } else {
            one
        }
    }
}

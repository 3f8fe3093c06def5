//! Class descriptors
//!
//! A class descriptor lists every feature of a model class, inherited ones
//! first, so a feature's id is its index. Subclasses therefore keep the ids
//! of their supertype's features, which is what lets generic code and the
//! per-supertype accessor traits address them positionally.

use serde::Serialize;

use super::features::{FeatureDescriptor, FeatureId};
use crate::error::{Error, Result};

/// XML content model of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    /// Child elements only
    ElementOnly,
    /// Simple (text) content plus attributes
    Simple,
    /// Attributes only
    Empty,
}

/// Metadata for one model class
#[derive(Debug, Clone, Serialize)]
pub struct ClassDescriptor {
    /// Class name
    pub name: &'static str,
    /// Name of the schema type in the document
    pub xml_name: &'static str,
    /// XML content model
    pub content: ContentKind,
    /// Direct supertype
    pub supertype: Option<&'static str>,
    pub(crate) ancestors: Vec<&'static str>,
    pub(crate) features: Vec<FeatureDescriptor>,
    pub(crate) own_start: usize,
}

impl ClassDescriptor {
    /// Look up a feature by id
    pub fn feature(&self, id: FeatureId) -> Result<&FeatureDescriptor> {
        self.features.get(id).ok_or(Error::InvalidFeature {
            class: self.name,
            feature_id: id,
        })
    }

    /// Look up a feature by name
    pub fn feature_by_name(&self, name: &str) -> Option<&FeatureDescriptor> {
        self.features.iter().find(|f| f.name == name)
    }

    /// Resolve a feature name to its id
    pub fn feature_id(&self, name: &str) -> Result<FeatureId> {
        self.feature_by_name(name)
            .map(|f| f.id)
            .ok_or_else(|| Error::UnknownFeature {
                class: self.name,
                name: name.to_string(),
            })
    }

    /// All features, inherited first
    pub fn features(&self) -> &[FeatureDescriptor] {
        &self.features
    }

    /// Features declared by this class itself
    pub fn own_features(&self) -> &[FeatureDescriptor] {
        &self.features[self.own_start..]
    }

    /// Number of features
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// This class followed by its supertypes, nearest first
    pub fn ancestors(&self) -> &[&'static str] {
        &self.ancestors
    }

    /// Whether instances of this class may be used where `class` is expected
    pub fn conforms_to(&self, class: &str) -> bool {
        self.ancestors.iter().any(|a| *a == class)
    }

    /// Member features of a group feature, in declaration order
    pub fn members_of(&self, group: FeatureId) -> impl Iterator<Item = &FeatureDescriptor> {
        self.features.iter().filter(move |f| f.group == Some(group))
    }
}

impl PartialEq for ClassDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ClassDescriptor {}

//! Feature registry
//!
//! The registry is the process-wide table of class descriptors. It is built
//! once from a declarative table (see `ows11::package`) and is read-only
//! afterwards. Building resolves supertypes, assigns feature ids, binds group
//! members to their group and rejects tables that reference unknown names.

use indexmap::IndexMap;
use tracing::debug;

use super::classes::{ClassDescriptor, ContentKind};
use super::datatypes::DataType;
use super::features::{FeatureDescriptor, FeatureKind, XmlBinding, XmlRole};
use super::occurs::Occurs;
use crate::error::{Error, Result};
use crate::object::ObjectRef;

/// Read-only table of class descriptors for one namespace
#[derive(Debug)]
pub struct Registry {
    namespace: &'static str,
    classes: Vec<ClassDescriptor>,
    index: IndexMap<&'static str, usize>,
}

impl Registry {
    /// Namespace URI of the package
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Look up a class by name
    pub fn class(&self, name: &str) -> Option<&ClassDescriptor> {
        self.index.get(name).map(|&i| &self.classes[i])
    }

    /// Look up a class by name, failing for unknown names
    pub fn require(&self, name: &str) -> Result<&ClassDescriptor> {
        self.class(name)
            .ok_or_else(|| Error::UnknownClass(name.to_string()))
    }

    /// All classes in declaration order
    pub fn classes(&self) -> impl Iterator<Item = &ClassDescriptor> {
        self.classes.iter()
    }

    /// Number of classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the registry has no classes
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Classes conforming to `name`, including `name` itself
    pub fn subclasses_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ClassDescriptor> + 'a {
        self.classes.iter().filter(move |c| c.conforms_to(name))
    }

    /// Create an empty instance of a class
    pub fn create(&'static self, name: &str) -> Result<ObjectRef> {
        let class = self.require(name)?;
        Ok(ObjectRef::new(class))
    }
}

/// Declared feature, before ids and groups are resolved
#[derive(Debug, Clone)]
struct FeatureDecl {
    name: &'static str,
    kind: FeatureKind,
    occurs: Occurs,
    default: Option<&'static str>,
    group: Option<&'static str>,
    xml: Option<XmlBinding>,
}

/// Declared class, as written in a package table
#[derive(Debug, Clone)]
pub struct ClassDecl {
    name: &'static str,
    xml_name: &'static str,
    content: ContentKind,
    namespace: &'static str,
    supertype: Option<&'static str>,
    features: Vec<FeatureDecl>,
}

impl ClassDecl {
    fn push(
        &mut self,
        name: &'static str,
        kind: FeatureKind,
        occurs: Occurs,
        group: Option<&'static str>,
        xml: Option<XmlBinding>,
    ) -> &mut Self {
        self.features.push(FeatureDecl {
            name,
            kind,
            occurs,
            default: None,
            group,
            xml,
        });
        self
    }

    fn binding(&self, role: XmlRole, name: &'static str, namespace: Option<&'static str>) -> Option<XmlBinding> {
        Some(XmlBinding { role, name, namespace })
    }

    /// Name the schema type differently from the class
    pub fn xml_name(&mut self, xml_name: &'static str) -> &mut Self {
        self.xml_name = xml_name;
        self
    }

    /// Inherit all features of `supertype`
    pub fn extends(&mut self, supertype: &'static str) -> &mut Self {
        self.supertype = Some(supertype);
        self
    }

    /// Simple-typed child element stored as an attribute
    pub fn element(&mut self, name: &'static str, xml: &'static str, data_type: DataType, occurs: Occurs) -> &mut Self {
        let binding = self.binding(XmlRole::Element, xml, Some(self.namespace));
        self.push(name, FeatureKind::Attribute { data_type }, occurs, None, binding)
    }

    /// Unqualified XML attribute
    pub fn attribute(&mut self, name: &'static str, xml: &'static str, data_type: DataType, occurs: Occurs) -> &mut Self {
        let binding = self.binding(XmlRole::Attribute, xml, None);
        self.push(name, FeatureKind::Attribute { data_type }, occurs, None, binding)
    }

    /// Namespace-qualified XML attribute
    pub fn attribute_ns(
        &mut self,
        name: &'static str,
        xml: &'static str,
        namespace: &'static str,
        data_type: DataType,
        occurs: Occurs,
    ) -> &mut Self {
        let binding = self.binding(XmlRole::Attribute, xml, Some(namespace));
        self.push(name, FeatureKind::Attribute { data_type }, occurs, None, binding)
    }

    /// Simple content of the element
    pub fn text(&mut self, name: &'static str, data_type: DataType) -> &mut Self {
        let binding = self.binding(XmlRole::Text, "", None);
        self.push(name, FeatureKind::Attribute { data_type }, Occurs::optional(), None, binding)
    }

    /// Attribute the codec never serializes
    pub fn transient(&mut self, name: &'static str, data_type: DataType) -> &mut Self {
        self.push(name, FeatureKind::Attribute { data_type }, Occurs::optional(), None, None)
    }

    /// Containment element of class `target`
    pub fn child(&mut self, name: &'static str, xml: &'static str, target: &'static str, occurs: Occurs) -> &mut Self {
        let binding = self.binding(XmlRole::Element, xml, Some(self.namespace));
        self.push(name, FeatureKind::Containment { target: Some(target) }, occurs, None, binding)
    }

    /// Containment element accepting any class
    pub fn any_child(&mut self, name: &'static str, xml: &'static str, occurs: Occurs) -> &mut Self {
        let binding = self.binding(XmlRole::Element, xml, Some(self.namespace));
        self.push(name, FeatureKind::Containment { target: None }, occurs, None, binding)
    }

    /// Feature-map group
    pub fn group(&mut self, name: &'static str, xml: &'static str, occurs: Occurs) -> &mut Self {
        let binding = self.binding(XmlRole::Group, xml, Some(self.namespace));
        self.push(name, FeatureKind::Group, occurs, None, binding)
    }

    /// Containment member of a group
    pub fn member(
        &mut self,
        name: &'static str,
        xml: &'static str,
        target: &'static str,
        group: &'static str,
        occurs: Occurs,
    ) -> &mut Self {
        let binding = self.binding(XmlRole::Element, xml, Some(self.namespace));
        self.push(name, FeatureKind::Containment { target: Some(target) }, occurs, Some(group), binding)
    }

    /// Containment member of a group accepting any class
    pub fn any_member(&mut self, name: &'static str, xml: &'static str, group: &'static str, occurs: Occurs) -> &mut Self {
        let binding = self.binding(XmlRole::Element, xml, Some(self.namespace));
        self.push(name, FeatureKind::Containment { target: None }, occurs, Some(group), binding)
    }

    /// Simple-typed member of a group
    pub fn member_element(
        &mut self,
        name: &'static str,
        xml: &'static str,
        data_type: DataType,
        group: &'static str,
        occurs: Occurs,
    ) -> &mut Self {
        let binding = self.binding(XmlRole::Element, xml, Some(self.namespace));
        self.push(name, FeatureKind::Attribute { data_type }, occurs, Some(group), binding)
    }

    /// Set the default literal of the most recently declared feature
    pub fn with_default(&mut self, literal: &'static str) -> &mut Self {
        if let Some(last) = self.features.last_mut() {
            last.default = Some(literal);
        }
        self
    }
}

/// Collects class declarations and resolves them into a [`Registry`]
#[derive(Debug)]
pub struct RegistryBuilder {
    namespace: &'static str,
    decls: Vec<ClassDecl>,
}

impl RegistryBuilder {
    /// Create a builder for classes of `namespace`
    pub fn new(namespace: &'static str) -> Self {
        Self {
            namespace,
            decls: Vec::new(),
        }
    }

    /// Declare a class
    pub fn class(&mut self, name: &'static str, content: ContentKind) -> &mut ClassDecl {
        self.decls.push(ClassDecl {
            name,
            xml_name: name,
            content,
            namespace: self.namespace,
            supertype: None,
            features: Vec::new(),
        });
        let last = self.decls.len() - 1;
        &mut self.decls[last]
    }

    /// Resolve all declarations
    pub fn build(self) -> Result<Registry> {
        let mut index = IndexMap::new();
        for (i, decl) in self.decls.iter().enumerate() {
            if index.insert(decl.name, i).is_some() {
                return Err(Error::Registry(format!("duplicate class '{}'", decl.name)));
            }
        }

        for decl in &self.decls {
            for feature in &decl.features {
                if let Some(target) = feature.kind_target() {
                    if !index.contains_key(target) {
                        return Err(Error::Registry(format!(
                            "feature '{}.{}' targets unknown class '{}'",
                            decl.name, feature.name, target
                        )));
                    }
                }
            }
        }

        let mut resolved: Vec<Option<ClassDescriptor>> = vec![None; self.decls.len()];
        let mut visiting = Vec::new();
        for i in 0..self.decls.len() {
            resolve(&self.decls, &index, i, &mut resolved, &mut visiting)?;
        }

        let classes = resolved
            .into_iter()
            .zip(&self.decls)
            .map(|(class, decl)| {
                class.ok_or_else(|| Error::Registry(format!("class '{}' was not resolved", decl.name)))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            namespace = self.namespace,
            classes = classes.len(),
            features = classes.iter().map(|c| c.feature_count()).sum::<usize>(),
            "built feature registry"
        );

        Ok(Registry {
            namespace: self.namespace,
            classes,
            index,
        })
    }
}

impl FeatureDecl {
    fn kind_target(&self) -> Option<&'static str> {
        match self.kind {
            FeatureKind::Containment { target } => target,
            _ => None,
        }
    }
}

fn resolve(
    decls: &[ClassDecl],
    index: &IndexMap<&'static str, usize>,
    i: usize,
    resolved: &mut Vec<Option<ClassDescriptor>>,
    visiting: &mut Vec<usize>,
) -> Result<()> {
    if resolved[i].is_some() {
        return Ok(());
    }
    let decl = &decls[i];
    if visiting.contains(&i) {
        return Err(Error::Registry(format!(
            "class '{}' inherits from itself",
            decl.name
        )));
    }
    visiting.push(i);

    let (mut features, mut ancestors) = match decl.supertype {
        Some(supertype) => {
            let parent_index = *index.get(supertype).ok_or_else(|| {
                Error::Registry(format!(
                    "class '{}' extends unknown class '{}'",
                    decl.name, supertype
                ))
            })?;
            resolve(decls, index, parent_index, resolved, visiting)?;
            let parent = resolved[parent_index].as_ref().ok_or_else(|| {
                Error::Registry(format!("supertype '{}' was not resolved", supertype))
            })?;
            (parent.features.clone(), parent.ancestors.clone())
        }
        None => (Vec::new(), Vec::new()),
    };
    ancestors.insert(0, decl.name);
    let own_start = features.len();

    for feature in &decl.features {
        if features.iter().any(|f: &FeatureDescriptor| f.name == feature.name) {
            return Err(Error::Registry(format!(
                "duplicate feature '{}' in class '{}'",
                feature.name, decl.name
            )));
        }
        let group = match feature.group {
            Some(group_name) => {
                let group = features
                    .iter()
                    .find(|f| f.name == group_name && f.is_group())
                    .ok_or_else(|| {
                        Error::Registry(format!(
                            "feature '{}.{}' names unknown group '{}'",
                            decl.name, feature.name, group_name
                        ))
                    })?;
                Some(group.id)
            }
            None => None,
        };
        features.push(FeatureDescriptor {
            id: features.len(),
            name: feature.name,
            kind: feature.kind,
            occurs: feature.occurs,
            default: feature.default,
            group,
            xml: feature.xml,
        });
    }

    for feature in &features {
        feature.default_value().map_err(|e| {
            Error::Registry(format!(
                "bad default for '{}.{}': {}",
                decl.name, feature.name, e
            ))
        })?;
    }

    visiting.retain(|&v| v != i);
    resolved[i] = Some(ClassDescriptor {
        name: decl.name,
        xml_name: decl.xml_name,
        content: decl.content,
        supertype: decl.supertype,
        ancestors,
        features,
        own_start,
    });
    Ok(())
}

//! Model objects and the reflective feature-access surface
//!
//! Every instance of every class is an [`ObjectRef`]: a shared handle onto a
//! slot vector laid out by the class descriptor. Generic callers read and
//! write slots by feature id through `get`/`set`/`unset`/`is_set`; the typed
//! wrappers in `ows11::types` are thin shims over the same calls.
//!
//! Lists and feature groups are exposed as live handles ([`ObjectList`],
//! [`ValueList`], [`FeatureMap`], [`FeatureMapView`]) that read and write the
//! owner's storage directly.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;
use url::Url;

use crate::error::{Error, Result};
use crate::metadata::{ClassDescriptor, FeatureDescriptor, FeatureId, FeatureKind};
use crate::value::Value;

mod containment;
mod describe;
mod feature_map;
#[cfg(test)]
pub(crate) mod fixtures;
mod list;
pub mod notify;
mod walk;

pub use feature_map::{Entry, FeatureMap, FeatureMapView};
pub use list::{ObjectList, ValueList};
pub use notify::{Adapter, EventType, Notification, NotificationLog};

/// Storage for one feature
pub(crate) enum Slot {
    /// Single attribute value
    Value(Value),
    /// Many-valued attribute, allocated on first write
    Values(Option<Vec<Value>>),
    /// Single containment
    Child(Option<ObjectRef>),
    /// Containment list, allocated on first write
    Children(Option<Vec<ObjectRef>>),
    /// Feature-map entries, allocated on first write
    Group(Option<Vec<Entry>>),
    /// Group member; its values live in the group's slot
    Derived,
}

impl Slot {
    fn initial(feature: &FeatureDescriptor) -> Self {
        if feature.is_group_member() {
            return Slot::Derived;
        }
        match feature.kind {
            FeatureKind::Attribute { .. } if feature.is_many() => Slot::Values(None),
            FeatureKind::Attribute { .. } => {
                Slot::Value(feature.default_value().unwrap_or(Value::Null))
            }
            FeatureKind::Containment { .. } if feature.is_many() => Slot::Children(None),
            FeatureKind::Containment { .. } => Slot::Child(None),
            FeatureKind::Group => Slot::Group(None),
        }
    }
}

/// Back-pointer from a child to the slot that owns it
pub(crate) struct Container {
    pub(crate) owner: Weak<RefCell<ObjectData>>,
    pub(crate) feature: FeatureId,
}

pub(crate) struct ObjectData {
    pub(crate) class: &'static ClassDescriptor,
    pub(crate) slots: Vec<Slot>,
    pub(crate) container: Option<Container>,
    pub(crate) adapters: Vec<Rc<dyn Adapter>>,
    pub(crate) deliver: bool,
    pub(crate) proxy_uri: Option<Url>,
}

/// Shared handle on a model object.
///
/// Cloning the handle does not copy the object; equality is identity.
#[derive(Clone)]
pub struct ObjectRef(pub(crate) Rc<RefCell<ObjectData>>);

impl ObjectRef {
    /// Create an empty instance of `class`
    pub fn new(class: &'static ClassDescriptor) -> Self {
        let slots = class.features().iter().map(Slot::initial).collect();
        ObjectRef(Rc::new(RefCell::new(ObjectData {
            class,
            slots,
            container: None,
            adapters: Vec::new(),
            deliver: true,
            proxy_uri: None,
        })))
    }

    /// Class descriptor of the object
    pub fn class(&self) -> &'static ClassDescriptor {
        self.0.borrow().class
    }

    /// Whether both handles refer to the same object
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Descriptor of a feature of this object's class
    pub fn feature(&self, id: FeatureId) -> Result<&'static FeatureDescriptor> {
        self.class().feature(id)
    }

    /// Resolve a feature name to its id
    pub fn feature_id(&self, name: &str) -> Result<FeatureId> {
        self.class().feature_id(name)
    }

    /// Current value of a feature.
    ///
    /// List and group features yield live handles. A many-valued group member
    /// yields a live filtered view; a single-valued one yields its value or
    /// `Null`.
    pub fn get(&self, id: FeatureId) -> Result<Value> {
        self.get_with(id, true, true)
    }

    /// [`ObjectRef::get`] with the codec-facing flags.
    ///
    /// Containment values are never proxies and group features always yield
    /// the live feature map, so both flags leave the result unchanged.
    pub fn get_with(&self, id: FeatureId, resolve: bool, core_type: bool) -> Result<Value> {
        let feature = self.feature(id)?;
        trace!(class = self.class().name, feature = feature.name, resolve, core_type, "get");
        if feature.is_group_member() {
            let view = FeatureMapView::for_member(self.clone(), feature)?;
            return Ok(if feature.is_many() {
                Value::View(view)
            } else {
                view.first().unwrap_or(Value::Null)
            });
        }
        let data = self.0.borrow();
        Ok(match &data.slots[id] {
            Slot::Value(value) => value.clone(),
            Slot::Values(_) => Value::Values(ValueList::new(self.clone(), feature)),
            Slot::Child(child) => child.clone().map(Value::Object).unwrap_or(Value::Null),
            Slot::Children(_) => Value::Objects(ObjectList::new(self.clone(), feature)),
            Slot::Group(_) => Value::Group(FeatureMap::new(self.clone(), feature)),
            Slot::Derived => Value::Null,
        })
    }

    /// Replace the value of a feature.
    ///
    /// Lists, groups and many-valued members are cleared and refilled from
    /// `value` in order.
    pub fn set(&self, id: FeatureId, value: Value) -> Result<()> {
        let feature = self.feature(id)?;
        if feature.is_group_member() {
            let view = FeatureMapView::for_member(self.clone(), feature)?;
            return if feature.is_many() {
                let values = self.elements_of(feature, value)?;
                view.replace_all(values)
            } else {
                view.set_single(value)
            };
        }
        match feature.kind {
            FeatureKind::Attribute { .. } if feature.is_many() => {
                let values = self.elements_of(feature, value)?;
                ValueList::new(self.clone(), feature).replace_all(values)
            }
            FeatureKind::Attribute { .. } => {
                self.check_value(feature, &value)?;
                self.store_attribute(feature, value);
                Ok(())
            }
            FeatureKind::Containment { .. } if feature.is_many() => {
                let children = self
                    .elements_of(feature, value)?
                    .into_iter()
                    .map(|v| self.expect_child(feature, v))
                    .collect::<Result<Vec<_>>>()?;
                ObjectList::new(self.clone(), feature).replace_all(children)
            }
            FeatureKind::Containment { .. } => match value {
                Value::Null => self.set_child(feature, None, EventType::Set),
                other => {
                    let child = self.expect_child(feature, other)?;
                    self.set_child(feature, Some(child), EventType::Set)
                }
            },
            FeatureKind::Group => {
                let entries = match value {
                    Value::Null => Vec::new(),
                    Value::Entries(entries) => entries,
                    Value::Group(map) => map.entries(),
                    other => return Err(self.mismatch(feature, &other)),
                };
                FeatureMap::new(self.clone(), feature).replace_all(entries)
            }
        }
    }

    /// Reset a feature to its default, or empty it.
    ///
    /// Notifies only when the previous value differed from the default.
    pub fn unset(&self, id: FeatureId) -> Result<()> {
        let feature = self.feature(id)?;
        if feature.is_group_member() {
            FeatureMapView::for_member(self.clone(), feature)?.clear();
            return Ok(());
        }
        match feature.kind {
            FeatureKind::Attribute { .. } if feature.is_many() => {
                ValueList::new(self.clone(), feature).clear();
            }
            FeatureKind::Attribute { .. } => {
                let default = feature.default_value()?;
                let old = {
                    let mut data = self.0.borrow_mut();
                    match &mut data.slots[id] {
                        Slot::Value(current) => std::mem::replace(current, default.clone()),
                        _ => Value::Null,
                    }
                };
                if old != default {
                    trace!(class = self.class().name, feature = feature.name, "unset");
                    self.emit(EventType::Unset, feature, old, default, None);
                }
            }
            FeatureKind::Containment { .. } if feature.is_many() => {
                ObjectList::new(self.clone(), feature).clear();
            }
            FeatureKind::Containment { .. } => {
                if self.child(id).is_some() {
                    self.set_child(feature, None, EventType::Unset)?;
                }
            }
            FeatureKind::Group => FeatureMap::new(self.clone(), feature).clear(),
        }
        Ok(())
    }

    /// Whether a feature differs from its default or empty state.
    ///
    /// Never allocates a lazily created list.
    pub fn is_set(&self, id: FeatureId) -> Result<bool> {
        let feature = self.feature(id)?;
        if let Some(group) = feature.group {
            let data = self.0.borrow();
            return Ok(match &data.slots[group] {
                Slot::Group(Some(entries)) => entries.iter().any(|e| e.feature().id == id),
                _ => false,
            });
        }
        let data = self.0.borrow();
        Ok(match &data.slots[id] {
            Slot::Value(value) => *value != feature.default_value()?,
            Slot::Values(values) => values.as_ref().map_or(false, |v| !v.is_empty()),
            Slot::Child(child) => child.is_some(),
            Slot::Children(children) => children.as_ref().map_or(false, |c| !c.is_empty()),
            Slot::Group(entries) => entries.as_ref().map_or(false, |e| !e.is_empty()),
            Slot::Derived => false,
        })
    }

    /// [`ObjectRef::get`] by feature name
    pub fn get_by_name(&self, name: &str) -> Result<Value> {
        self.get(self.feature_id(name)?)
    }

    /// [`ObjectRef::set`] by feature name
    pub fn set_by_name(&self, name: &str, value: Value) -> Result<()> {
        self.set(self.feature_id(name)?, value)
    }

    /// [`ObjectRef::unset`] by feature name
    pub fn unset_by_name(&self, name: &str) -> Result<()> {
        self.unset(self.feature_id(name)?)
    }

    /// [`ObjectRef::is_set`] by feature name
    pub fn is_set_by_name(&self, name: &str) -> Result<bool> {
        self.is_set(self.feature_id(name)?)
    }

    /// Proxy URI, if this object is an unresolved placeholder
    pub fn proxy_uri(&self) -> Option<Url> {
        self.0.borrow().proxy_uri.clone()
    }

    /// Mark the object as a proxy for `uri`, or clear the mark
    pub fn set_proxy_uri(&self, uri: Option<Url>) {
        self.0.borrow_mut().proxy_uri = uri;
    }

    /// Whether the object is an unresolved placeholder
    pub fn is_proxy(&self) -> bool {
        self.0.borrow().proxy_uri.is_some()
    }

    /// Descriptor for an id known to belong to the class
    pub(crate) fn descriptor(&self, id: FeatureId) -> &'static FeatureDescriptor {
        &self.class().features()[id]
    }

    /// Live view of a group member whose id is known to be valid
    pub(crate) fn member_view(&self, id: FeatureId) -> FeatureMapView {
        let member = self.descriptor(id);
        let group = self.descriptor(member.group.unwrap_or(id));
        FeatureMapView::new(FeatureMap::new(self.clone(), group), member)
    }

    /// Store a single attribute value without shape checks.
    ///
    /// `Null` on a feature with a declared default stores the default.
    pub(crate) fn store_attribute(&self, feature: &'static FeatureDescriptor, value: Value) {
        let value = match value {
            Value::Null => feature.default_value().unwrap_or(Value::Null),
            other => other,
        };
        let old = {
            let mut data = self.0.borrow_mut();
            match &mut data.slots[feature.id] {
                Slot::Value(current) => std::mem::replace(current, value.clone()),
                _ => return,
            }
        };
        trace!(class = self.class().name, feature = feature.name, "set attribute");
        self.emit(EventType::Set, feature, old, value, None);
    }

    /// Current single containment child
    pub(crate) fn child(&self, id: FeatureId) -> Option<ObjectRef> {
        match self.0.borrow().slots.get(id) {
            Some(Slot::Child(child)) => child.clone(),
            _ => None,
        }
    }

    /// Live handle on a containment list, without going through [`Value`].
    ///
    /// Fails with [`Error::TypeMismatch`] unless `id` is a many-valued
    /// containment stored on this object.
    pub fn children(&self, id: FeatureId) -> Result<ObjectList> {
        let feature = self.feature(id)?;
        if !feature.is_containment() || !feature.is_many() || feature.is_group_member() {
            return Err(self.handle_mismatch(feature, "containment list"));
        }
        Ok(ObjectList::new(self.clone(), feature))
    }

    /// Live handle on a many-valued attribute
    pub fn values(&self, id: FeatureId) -> Result<ValueList> {
        let feature = self.feature(id)?;
        if !feature.is_attribute() || !feature.is_many() || feature.is_group_member() {
            return Err(self.handle_mismatch(feature, "value list"));
        }
        Ok(ValueList::new(self.clone(), feature))
    }

    /// Live handle on a group feature
    pub fn group(&self, id: FeatureId) -> Result<FeatureMap> {
        let feature = self.feature(id)?;
        if !feature.is_group() || feature.is_group_member() {
            return Err(self.handle_mismatch(feature, "feature map"));
        }
        Ok(FeatureMap::new(self.clone(), feature))
    }

    /// Live view of a group member
    pub fn view(&self, id: FeatureId) -> Result<FeatureMapView> {
        FeatureMapView::for_member(self.clone(), self.feature(id)?)
    }

    /// Check one non-list value against a feature's declared kind
    pub(crate) fn check_value(&self, feature: &'static FeatureDescriptor, value: &Value) -> Result<()> {
        match feature.kind {
            FeatureKind::Attribute { data_type } if data_type.accepts(value) => Ok(()),
            FeatureKind::Containment { target } => match value {
                Value::Null => Ok(()),
                Value::Object(child) => match target {
                    Some(target) if !child.class().conforms_to(target) => {
                        Err(self.mismatch(feature, value))
                    }
                    _ => Ok(()),
                },
                _ => Err(self.mismatch(feature, value)),
            },
            _ => Err(self.mismatch(feature, value)),
        }
    }

    /// Check one list element: like [`ObjectRef::check_value`], but never `Null`
    pub(crate) fn check_element(&self, feature: &'static FeatureDescriptor, value: &Value) -> Result<()> {
        if value.is_null() {
            return Err(self.mismatch(feature, value));
        }
        self.check_value(feature, value)
    }

    pub(crate) fn mismatch(&self, feature: &'static FeatureDescriptor, value: &Value) -> Error {
        let found = match value {
            Value::Object(object) => object.class().name.to_string(),
            other => other.kind_name().to_string(),
        };
        Error::TypeMismatch {
            class: self.class().name,
            feature: feature.name,
            expected: feature.expected_shape(),
            found,
        }
    }

    /// A live handle requested on a feature whose storage has another shape
    pub(crate) fn handle_mismatch(&self, feature: &'static FeatureDescriptor, handle: &str) -> Error {
        Error::TypeMismatch {
            class: self.class().name,
            feature: feature.name,
            expected: feature.expected_shape(),
            found: format!("{} handle", handle),
        }
    }

    fn elements_of(&self, feature: &'static FeatureDescriptor, value: Value) -> Result<Vec<Value>> {
        if value.is_null() {
            return Ok(Vec::new());
        }
        let found = value.kind_name();
        let values = value.into_elements().ok_or_else(|| Error::TypeMismatch {
            class: self.class().name,
            feature: feature.name,
            expected: feature.expected_shape(),
            found: found.to_string(),
        })?;
        for value in &values {
            self.check_element(feature, value)?;
        }
        Ok(values)
    }

    fn expect_child(&self, feature: &'static FeatureDescriptor, value: Value) -> Result<ObjectRef> {
        self.check_element(feature, &value)?;
        match value {
            Value::Object(child) => Ok(child),
            other => Err(self.mismatch(feature, &other)),
        }
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ObjectRef {}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({}@{:p})", self.class().name, Rc::as_ptr(&self.0))
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

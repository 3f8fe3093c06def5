//! Live list handles
//!
//! [`ObjectList`] wraps a containment list and [`ValueList`] a many-valued
//! attribute. Both read and write the owner's slot directly, so every change
//! is visible through later `get` calls and through other handles.

use std::fmt;

use tracing::trace;

use super::containment::{detach, ensure_acyclic, install, release};
use super::notify::EventType;
use super::{ObjectRef, Slot};
use crate::error::{Error, Result};
use crate::metadata::FeatureDescriptor;
use crate::value::Value;

/// Live handle on a containment list
#[derive(Clone)]
pub struct ObjectList {
    owner: ObjectRef,
    feature: &'static FeatureDescriptor,
}

impl ObjectList {
    pub(crate) fn new(owner: ObjectRef, feature: &'static FeatureDescriptor) -> Self {
        Self { owner, feature }
    }

    /// Object owning the list
    pub fn owner(&self) -> &ObjectRef {
        &self.owner
    }

    /// Feature backing the list
    pub fn feature(&self) -> &'static FeatureDescriptor {
        self.feature
    }

    fn read<R>(&self, f: impl FnOnce(&[ObjectRef]) -> R) -> R {
        let data = self.owner.0.borrow();
        match &data.slots[self.feature.id] {
            Slot::Children(Some(children)) => f(children),
            _ => f(&[]),
        }
    }

    fn ensure_slot(&self) -> Result<()> {
        if matches!(self.owner.0.borrow().slots[self.feature.id], Slot::Children(_)) {
            Ok(())
        } else {
            Err(self.owner.handle_mismatch(self.feature, "containment list"))
        }
    }

    fn write<R>(&self, f: impl FnOnce(&mut Vec<ObjectRef>) -> R) -> Result<R> {
        let mut data = self.owner.0.borrow_mut();
        if let Slot::Children(children) = &mut data.slots[self.feature.id] {
            return Ok(f(children.get_or_insert_with(Vec::new)));
        }
        drop(data);
        Err(self.owner.handle_mismatch(self.feature, "containment list"))
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.read(|c| c.len())
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Child at `index`
    pub fn get(&self, index: usize) -> Option<ObjectRef> {
        self.read(|c| c.get(index).cloned())
    }

    /// Snapshot of the children
    pub fn to_vec(&self) -> Vec<ObjectRef> {
        self.read(|c| c.to_vec())
    }

    /// Iterate over a snapshot of the children
    pub fn iter(&self) -> std::vec::IntoIter<ObjectRef> {
        self.to_vec().into_iter()
    }

    /// Whether `child` is in the list
    pub fn contains(&self, child: &ObjectRef) -> bool {
        self.index_of(child).is_some()
    }

    /// Position of `child`
    pub fn index_of(&self, child: &ObjectRef) -> Option<usize> {
        self.read(|c| c.iter().position(|o| o.ptr_eq(child)))
    }

    /// Append a child. Returns `false` if it is already in the list.
    pub fn push(&self, child: &ObjectRef) -> Result<bool> {
        let index = self.len();
        self.insert(index, child)
    }

    /// Insert a child at `index`, taking it from its previous owner.
    /// Returns `false` if it is already in the list.
    pub fn insert(&self, index: usize, child: &ObjectRef) -> Result<bool> {
        self.ensure_slot()?;
        self.owner
            .check_element(self.feature, &Value::Object(child.clone()))?;
        if self.contains(child) {
            return Ok(false);
        }
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfBounds {
                feature: self.feature.name,
                index,
                len,
            });
        }
        ensure_acyclic(&self.owner, child)?;
        detach(child);

        let index = index.min(self.len());
        self.write(|c| c.insert(index, child.clone()))?;
        install(child, &self.owner, self.feature.id);
        trace!(
            class = self.owner.class().name,
            feature = self.feature.name,
            index,
            "added child"
        );
        self.owner.emit(
            EventType::Add,
            self.feature,
            Value::Null,
            Value::Object(child.clone()),
            Some(index),
        );
        Ok(true)
    }

    /// Remove and return the child at `index`
    pub fn remove(&self, index: usize) -> Result<ObjectRef> {
        let removed = self.write(|c| (index < c.len()).then(|| c.remove(index)))?;
        let child = removed.ok_or_else(|| Error::IndexOutOfBounds {
            feature: self.feature.name,
            index,
            len: self.len(),
        })?;
        release(&child);
        self.owner.emit(
            EventType::Remove,
            self.feature,
            Value::Object(child.clone()),
            Value::Null,
            Some(index),
        );
        Ok(child)
    }

    /// Remove `child` if present
    pub fn remove_object(&self, child: &ObjectRef) -> bool {
        match self.index_of(child) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Remove every child
    pub fn clear(&self) {
        let removed = self.write(std::mem::take).unwrap_or_default();
        if removed.is_empty() {
            return;
        }
        for child in &removed {
            release(child);
        }
        self.owner.emit(
            EventType::RemoveMany,
            self.feature,
            Value::Many(removed.into_iter().map(Value::Object).collect()),
            Value::Null,
            None,
        );
    }

    /// Clear, then append `children` in order
    pub(crate) fn replace_all(&self, children: Vec<ObjectRef>) -> Result<()> {
        self.ensure_slot()?;
        for child in &children {
            ensure_acyclic(&self.owner, child)?;
        }
        self.clear();

        let mut added = Vec::with_capacity(children.len());
        for child in children {
            if self.contains(&child) {
                continue;
            }
            detach(&child);
            self.write(|c| c.push(child.clone()))?;
            install(&child, &self.owner, self.feature.id);
            added.push(Value::Object(child));
        }
        match added.len() {
            0 => {}
            1 => {
                let new = added.remove(0);
                self.owner.emit(EventType::Add, self.feature, Value::Null, new, Some(0));
            }
            _ => self.owner.emit(EventType::AddMany, self.feature, Value::Null, Value::Many(added), Some(0)),
        }
        Ok(())
    }
}

impl PartialEq for ObjectList {
    fn eq(&self, other: &Self) -> bool {
        self.owner.ptr_eq(&other.owner) && self.feature.id == other.feature.id
    }
}

impl fmt::Debug for ObjectList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectList")
            .field("owner", &self.owner)
            .field("feature", &self.feature.name)
            .field("len", &self.len())
            .finish()
    }
}

/// Live handle on a many-valued attribute
#[derive(Clone)]
pub struct ValueList {
    owner: ObjectRef,
    feature: &'static FeatureDescriptor,
}

impl ValueList {
    pub(crate) fn new(owner: ObjectRef, feature: &'static FeatureDescriptor) -> Self {
        Self { owner, feature }
    }

    /// Feature backing the list
    pub fn feature(&self) -> &'static FeatureDescriptor {
        self.feature
    }

    fn read<R>(&self, f: impl FnOnce(&[Value]) -> R) -> R {
        let data = self.owner.0.borrow();
        match &data.slots[self.feature.id] {
            Slot::Values(Some(values)) => f(values),
            _ => f(&[]),
        }
    }

    fn write<R>(&self, f: impl FnOnce(&mut Vec<Value>) -> R) -> Result<R> {
        let mut data = self.owner.0.borrow_mut();
        if let Slot::Values(values) = &mut data.slots[self.feature.id] {
            return Ok(f(values.get_or_insert_with(Vec::new)));
        }
        drop(data);
        Err(self.owner.handle_mismatch(self.feature, "value list"))
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.read(|v| v.len())
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index`
    pub fn get(&self, index: usize) -> Option<Value> {
        self.read(|v| v.get(index).cloned())
    }

    /// Snapshot of the values
    pub fn to_vec(&self) -> Vec<Value> {
        self.read(|v| v.to_vec())
    }

    /// Whether an equal value is present
    pub fn contains(&self, value: &Value) -> bool {
        self.read(|v| v.contains(value))
    }

    /// Append a value
    pub fn push(&self, value: Value) -> Result<()> {
        let index = self.len();
        self.insert(index, value)
    }

    /// Insert a value at `index`
    pub fn insert(&self, index: usize, value: Value) -> Result<()> {
        self.owner.check_element(self.feature, &value)?;
        let len = self.len();
        if index > len {
            return Err(Error::IndexOutOfBounds {
                feature: self.feature.name,
                index,
                len,
            });
        }
        self.write(|v| v.insert(index, value.clone()))?;
        self.owner
            .emit(EventType::Add, self.feature, Value::Null, value, Some(index));
        Ok(())
    }

    /// Remove and return the value at `index`
    pub fn remove(&self, index: usize) -> Result<Value> {
        let removed = self.write(|v| (index < v.len()).then(|| v.remove(index)))?;
        let value = removed.ok_or_else(|| Error::IndexOutOfBounds {
            feature: self.feature.name,
            index,
            len: self.len(),
        })?;
        self.owner
            .emit(EventType::Remove, self.feature, value.clone(), Value::Null, Some(index));
        Ok(value)
    }

    /// Remove every value
    pub fn clear(&self) {
        let removed = self.write(std::mem::take).unwrap_or_default();
        if !removed.is_empty() {
            self.owner
                .emit(EventType::RemoveMany, self.feature, Value::Many(removed), Value::Null, None);
        }
    }

    /// Clear, then append `values` in order
    pub(crate) fn replace_all(&self, values: Vec<Value>) -> Result<()> {
        for value in &values {
            self.owner.check_element(self.feature, value)?;
        }
        self.clear();
        if values.is_empty() {
            return Ok(());
        }
        self.write(|v| v.extend(values.iter().cloned()))?;
        self.owner
            .emit(EventType::AddMany, self.feature, Value::Null, Value::Many(values), Some(0));
        Ok(())
    }
}

impl PartialEq for ValueList {
    fn eq(&self, other: &Self) -> bool {
        self.owner.ptr_eq(&other.owner) && self.feature.id == other.feature.id
    }
}

impl fmt::Debug for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueList")
            .field("owner", &self.owner)
            .field("feature", &self.feature.name)
            .field("values", &self.to_vec())
            .finish()
    }
}

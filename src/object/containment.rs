//! Containment ownership transfer
//!
//! A child lives in at most one containment slot. Attaching it somewhere new
//! first detaches it from its current owner, which notifies that owner's
//! observers, then installs the back-pointer. Children only hold a weak
//! reference to their container, so dropping the owner leaves them unowned.

use std::rc::Rc;

use tracing::debug;

use super::notify::{dispatch, EventType, Notification};
use super::{Container, ObjectRef, Slot};
use crate::error::{Error, Result};
use crate::metadata::{FeatureDescriptor, FeatureId};
use crate::value::Value;

impl ObjectRef {
    /// Object whose containment slot holds this one
    pub fn container(&self) -> Option<ObjectRef> {
        let data = self.0.borrow();
        data.container
            .as_ref()
            .and_then(|c| c.owner.upgrade())
            .map(ObjectRef)
    }

    /// Feature of the container that holds this object
    pub fn containing_feature(&self) -> Option<&'static FeatureDescriptor> {
        let owner = self.container()?;
        let id = self.0.borrow().container.as_ref()?.feature;
        owner.feature(id).ok()
    }

    /// Single containment write: detach the new child from its old owner,
    /// release the previous child and notify.
    pub(crate) fn set_child(
        &self,
        feature: &'static FeatureDescriptor,
        new: Option<ObjectRef>,
        event: EventType,
    ) -> Result<()> {
        if let (Some(current), Some(child)) = (self.child(feature.id), new.as_ref()) {
            if current.ptr_eq(child) {
                self.emit(EventType::Set, feature, Value::Object(current.clone()), Value::Object(current), None);
                return Ok(());
            }
        }
        if let Some(child) = &new {
            ensure_acyclic(self, child)?;
            detach(child);
        }

        let old = {
            let mut data = self.0.borrow_mut();
            match &mut data.slots[feature.id] {
                Slot::Child(slot) => std::mem::replace(slot, new.clone()),
                _ => None,
            }
        };
        if let Some(old) = &old {
            release(old);
        }
        if let Some(child) = &new {
            install(child, self, feature.id);
            debug!(
                parent = self.class().name,
                feature = feature.name,
                child = child.class().name,
                "attached child"
            );
        }

        let to_value = |o: Option<ObjectRef>| o.map(Value::Object).unwrap_or(Value::Null);
        self.emit(event, feature, to_value(old), to_value(new), None);
        Ok(())
    }

    /// Remove `child` from whichever slot of `feature_id` holds it, without
    /// touching the child. Returns the notification for this owner.
    fn remove_contained(&self, feature_id: FeatureId, child: &ObjectRef) -> Option<Notification> {
        let feature = self.feature(feature_id).ok()?;
        let (event, position) = {
            let mut data = self.0.borrow_mut();
            if let Some(group) = feature.group {
                let entries = match &mut data.slots[group] {
                    Slot::Group(Some(entries)) => entries,
                    _ => return None,
                };
                let index = entries
                    .iter()
                    .position(|e| e.value().as_object().map_or(false, |o| o.ptr_eq(child)))?;
                entries.remove(index);
                (EventType::Remove, Some(index))
            } else {
                match &mut data.slots[feature_id] {
                    Slot::Child(slot) if slot.as_ref().map_or(false, |c| c.ptr_eq(child)) => {
                        *slot = None;
                        (EventType::Set, None)
                    }
                    Slot::Children(Some(children)) => {
                        let index = children.iter().position(|c| c.ptr_eq(child))?;
                        children.remove(index);
                        (EventType::Remove, Some(index))
                    }
                    _ => return None,
                }
            }
        };
        self.notification(event, feature, Value::Object(child.clone()), Value::Null, position)
    }
}

/// Fail if `child` is `owner` or one of its ancestors
pub(crate) fn ensure_acyclic(owner: &ObjectRef, child: &ObjectRef) -> Result<()> {
    let mut current = Some(owner.clone());
    while let Some(object) = current {
        if object.ptr_eq(child) {
            return Err(Error::ContainmentCycle {
                class: child.class().name,
            });
        }
        current = object.container();
    }
    Ok(())
}

/// Take `child` out of its current container, notifying the old owner
pub(crate) fn detach(child: &ObjectRef) {
    let container = child.0.borrow_mut().container.take();
    let Some(Container { owner, feature }) = container else {
        return;
    };
    let Some(owner) = owner.upgrade() else {
        return;
    };
    let owner = ObjectRef(owner);
    debug!(
        parent = owner.class().name,
        child = child.class().name,
        "detaching child from previous owner"
    );
    if let Some(notification) = owner.remove_contained(feature, child) {
        dispatch(notification);
    }
}

/// Point `child` at its new owner slot
pub(crate) fn install(child: &ObjectRef, owner: &ObjectRef, feature: FeatureId) {
    child.0.borrow_mut().container = Some(Container {
        owner: Rc::downgrade(&owner.0),
        feature,
    });
}

/// Clear the back-pointer of a child its owner has already dropped
pub(crate) fn release(child: &ObjectRef) {
    child.0.borrow_mut().container = None;
}

//! Change notifications
//!
//! Every mutation through the reflective surface or a live handle produces a
//! [`Notification`] for the object's adapters. Notifications are delivered
//! synchronously, after all internal borrows are released, so an adapter may
//! read or even mutate the notifier.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::ObjectRef;
use crate::metadata::{FeatureDescriptor, FeatureId};
use crate::value::Value;

/// Kind of change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Single value replaced
    Set,
    /// Value reset to its default
    Unset,
    /// One element added to a list
    Add,
    /// Several elements added to a list
    AddMany,
    /// One element removed from a list
    Remove,
    /// Several elements removed from a list
    RemoveMany,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventType::Set => "SET",
            EventType::Unset => "UNSET",
            EventType::Add => "ADD",
            EventType::AddMany => "ADD_MANY",
            EventType::Remove => "REMOVE",
            EventType::RemoveMany => "REMOVE_MANY",
        };
        f.write_str(name)
    }
}

/// One change to one feature of one object
#[derive(Debug, Clone)]
pub struct Notification {
    /// Object that changed
    pub notifier: ObjectRef,
    /// Kind of change
    pub event: EventType,
    /// Feature that changed
    pub feature: &'static FeatureDescriptor,
    /// Value before the change
    pub old: Value,
    /// Value after the change
    pub new: Value,
    /// List position, for list and feature-map changes
    pub position: Option<usize>,
}

impl Notification {
    /// Id of the changed feature
    pub fn feature_id(&self) -> FeatureId {
        self.feature.id
    }

    /// A `Set` that stored the value already present
    pub fn is_touch(&self) -> bool {
        self.event == EventType::Set && self.old == self.new
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}.{}: {} -> {}",
            self.event,
            self.notifier.class().name,
            self.feature.name,
            self.old,
            self.new
        )?;
        if let Some(position) = self.position {
            write!(f, " at {}", position)?;
        }
        Ok(())
    }
}

/// Observer attached to a model object
pub trait Adapter {
    /// Receive a change of the object this adapter is attached to
    fn notify(&self, notification: &Notification);
}

impl<F> Adapter for F
where
    F: Fn(&Notification),
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}

/// Adapter that records every notification it receives
#[derive(Debug, Default)]
pub struct NotificationLog {
    records: RefCell<Vec<Notification>>,
}

impl NotificationLog {
    /// Create an empty log, ready to attach
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Recorded notifications, oldest first
    pub fn records(&self) -> Vec<Notification> {
        self.records.borrow().clone()
    }

    /// Event types of the recorded notifications
    pub fn events(&self) -> Vec<EventType> {
        self.records.borrow().iter().map(|n| n.event).collect()
    }

    /// Number of recorded notifications
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Most recent notification
    pub fn last(&self) -> Option<Notification> {
        self.records.borrow().last().cloned()
    }

    /// Remove and return all recorded notifications
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.records.borrow_mut())
    }

    /// Forget all recorded notifications
    pub fn clear(&self) {
        self.records.borrow_mut().clear();
    }
}

impl Adapter for NotificationLog {
    fn notify(&self, notification: &Notification) {
        self.records.borrow_mut().push(notification.clone());
    }
}

impl ObjectRef {
    /// Attach an observer
    pub fn add_adapter(&self, adapter: Rc<dyn Adapter>) {
        self.0.borrow_mut().adapters.push(adapter);
    }

    /// Detach an observer previously attached with [`ObjectRef::add_adapter`]
    pub fn remove_adapter<A: Adapter + ?Sized>(&self, adapter: &Rc<A>) -> bool {
        let target = Rc::as_ptr(adapter).cast::<()>();
        let mut data = self.0.borrow_mut();
        let before = data.adapters.len();
        data.adapters
            .retain(|a| Rc::as_ptr(a).cast::<()>() != target);
        data.adapters.len() != before
    }

    /// Number of attached observers
    pub fn adapter_count(&self) -> usize {
        self.0.borrow().adapters.len()
    }

    /// Enable or silence notification delivery
    pub fn set_deliver(&self, deliver: bool) {
        self.0.borrow_mut().deliver = deliver;
    }

    /// Whether notifications are delivered
    pub fn deliver(&self) -> bool {
        self.0.borrow().deliver
    }

    /// Whether a mutation would reach any observer
    pub fn notification_required(&self) -> bool {
        let data = self.0.borrow();
        data.deliver && !data.adapters.is_empty()
    }

    /// Build a notification if anyone is listening
    pub(crate) fn notification(
        &self,
        event: EventType,
        feature: &'static FeatureDescriptor,
        old: Value,
        new: Value,
        position: Option<usize>,
    ) -> Option<Notification> {
        if !self.notification_required() {
            return None;
        }
        Some(Notification {
            notifier: self.clone(),
            event,
            feature,
            old,
            new,
            position,
        })
    }

    /// Build and deliver a notification in one step
    pub(crate) fn emit(
        &self,
        event: EventType,
        feature: &'static FeatureDescriptor,
        old: Value,
        new: Value,
        position: Option<usize>,
    ) {
        if let Some(notification) = self.notification(event, feature, old, new, position) {
            dispatch(notification);
        }
    }
}

/// Deliver a notification to the notifier's adapters.
///
/// The adapter list is snapshotted first; no borrow of the notifier is held
/// while adapters run.
pub(crate) fn dispatch(notification: Notification) {
    let adapters = {
        let data = notification.notifier.0.borrow();
        if !data.deliver {
            return;
        }
        data.adapters.clone()
    };
    for adapter in adapters {
        adapter.notify(&notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ows11;

    fn code() -> ObjectRef {
        ows11::package().create("CodeType").unwrap()
    }

    #[test]
    fn test_no_notification_without_adapters() {
        let object = code();
        assert!(!object.notification_required());
        assert!(object
            .notification(EventType::Set, object.class().feature(0).unwrap(), Value::Null, Value::Null, None)
            .is_none());
    }

    #[test]
    fn test_closure_adapter() {
        let object = code();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        object.add_adapter(Rc::new(move |n: &Notification| {
            sink.borrow_mut().push(n.feature.name);
        }));
        object.set(0, Value::from("EPSG")).unwrap();
        assert_eq!(*seen.borrow(), vec!["value"]);
    }

    #[test]
    fn test_remove_adapter_and_deliver_flag() {
        let object = code();
        let log = NotificationLog::new();
        object.add_adapter(log.clone());

        object.set_deliver(false);
        object.set(0, Value::from("a")).unwrap();
        assert!(log.is_empty());

        object.set_deliver(true);
        object.set(0, Value::from("b")).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().unwrap().old, Value::from("a"));

        assert!(object.remove_adapter(&log));
        assert!(!object.remove_adapter(&log));
        object.set(0, Value::from("c")).unwrap();
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_adapter_may_read_notifier() {
        let object = code();
        let observed = Rc::new(RefCell::new(None));
        let sink = observed.clone();
        object.add_adapter(Rc::new(move |n: &Notification| {
            *sink.borrow_mut() = Some(n.notifier.get(0).unwrap());
        }));
        object.set(0, Value::from("urn:x")).unwrap();
        assert_eq!(*observed.borrow(), Some(Value::from("urn:x")));
    }

    #[test]
    fn test_display() {
        let object = code();
        let log = NotificationLog::new();
        object.add_adapter(log.clone());
        object.set(0, Value::from("x")).unwrap();
        assert_eq!(log.records()[0].to_string(), "SET CodeType.value: null -> x");
    }
}

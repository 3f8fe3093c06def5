//! Feature maps
//!
//! A group feature stores one ordered sequence of `(member, value)` entries.
//! Member features have no storage of their own: a [`FeatureMapView`] is a
//! live projection of the entries tagged with that member, and writes through
//! the view land in the shared sequence. Interleaving across members is
//! therefore kept exactly as it was written.

use std::fmt;

use tracing::trace;

use super::containment::{detach, ensure_acyclic, install, release};
use super::notify::EventType;
use super::{ObjectRef, Slot};
use crate::error::{Error, Result};
use crate::metadata::{FeatureDescriptor, FeatureId};
use crate::value::Value;

/// One tagged value of a feature map
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    feature: &'static FeatureDescriptor,
    value: Value,
}

impl Entry {
    /// Create an entry for a member feature
    pub fn new(feature: &'static FeatureDescriptor, value: impl Into<Value>) -> Self {
        Self {
            feature,
            value: value.into(),
        }
    }

    /// Member feature tagging the value
    pub fn feature(&self) -> &'static FeatureDescriptor {
        self.feature
    }

    /// The value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Take the value
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Live handle on a group feature
#[derive(Clone)]
pub struct FeatureMap {
    owner: ObjectRef,
    group: &'static FeatureDescriptor,
}

impl FeatureMap {
    pub(crate) fn new(owner: ObjectRef, group: &'static FeatureDescriptor) -> Self {
        Self { owner, group }
    }

    /// Object owning the group
    pub fn owner(&self) -> &ObjectRef {
        &self.owner
    }

    /// Group feature
    pub fn feature(&self) -> &'static FeatureDescriptor {
        self.group
    }

    fn read<R>(&self, f: impl FnOnce(&[Entry]) -> R) -> R {
        let data = self.owner.0.borrow();
        match &data.slots[self.group.id] {
            Slot::Group(Some(entries)) => f(entries),
            _ => f(&[]),
        }
    }

    fn ensure_slot(&self) -> Result<()> {
        if matches!(self.owner.0.borrow().slots[self.group.id], Slot::Group(_)) {
            Ok(())
        } else {
            Err(self.owner.handle_mismatch(self.group, "feature map"))
        }
    }

    fn write<R>(&self, f: impl FnOnce(&mut Vec<Entry>) -> R) -> Result<R> {
        let mut data = self.owner.0.borrow_mut();
        if let Slot::Group(entries) = &mut data.slots[self.group.id] {
            return Ok(f(entries.get_or_insert_with(Vec::new)));
        }
        drop(data);
        Err(self.owner.handle_mismatch(self.group, "feature map"))
    }

    /// Number of entries across all members
    pub fn len(&self) -> usize {
        self.read(|e| e.len())
    }

    /// Whether the group is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<Entry> {
        self.read(|e| e.get(index).cloned())
    }

    /// Snapshot of all entries, in order
    pub fn entries(&self) -> Vec<Entry> {
        self.read(|e| e.to_vec())
    }

    /// Resolve and check a member feature of this group
    pub fn member(&self, id: FeatureId) -> Result<&'static FeatureDescriptor> {
        let member = self.owner.feature(id)?;
        if member.group != Some(self.group.id) {
            return Err(Error::NotGroupMember {
                class: self.owner.class().name,
                group: self.group.name,
                member: member.name,
            });
        }
        Ok(member)
    }

    /// Live view of one member
    pub fn view(&self, member: FeatureId) -> Result<FeatureMapView> {
        let member = self.member(member)?;
        Ok(FeatureMapView {
            map: self.clone(),
            member,
        })
    }

    /// Append a value tagged with `member`.
    ///
    /// Returns `false` if the object is already held by the same member.
    pub fn push(&self, member: FeatureId, value: impl Into<Value>) -> Result<bool> {
        let member = self.member(member)?;
        self.insert_entry(None, member, value.into())
    }

    /// Insert a value tagged with `member` at `index` of the shared sequence.
    ///
    /// A single-valued member that already has an entry is replaced at that
    /// entry's position. `index` must still lie within the sequence.
    pub fn insert(&self, index: usize, member: FeatureId, value: impl Into<Value>) -> Result<bool> {
        let member = self.member(member)?;
        self.insert_entry(Some(index), member, value.into())
    }

    /// Remove and return the entry at `index`
    pub fn remove(&self, index: usize) -> Result<Entry> {
        let removed = self.write(|e| (index < e.len()).then(|| e.remove(index)))?;
        let entry = removed.ok_or_else(|| Error::IndexOutOfBounds {
            feature: self.group.name,
            index,
            len: self.len(),
        })?;
        if let Value::Object(child) = &entry.value {
            release(child);
        }
        self.owner.emit(
            EventType::Remove,
            entry.feature,
            entry.value.clone(),
            Value::Null,
            Some(index),
        );
        Ok(entry)
    }

    /// Remove every entry
    pub fn clear(&self) {
        let removed = self.write(std::mem::take).unwrap_or_default();
        if removed.is_empty() {
            return;
        }
        for entry in &removed {
            if let Value::Object(child) = &entry.value {
                release(child);
            }
        }
        self.owner.emit(
            EventType::RemoveMany,
            self.group,
            Value::Entries(removed),
            Value::Null,
            None,
        );
    }

    fn position_of(&self, child: &ObjectRef) -> Option<(usize, FeatureId)> {
        self.read(|entries| {
            entries.iter().enumerate().find_map(|(i, e)| match &e.value {
                Value::Object(o) if o.ptr_eq(child) => Some((i, e.feature.id)),
                _ => None,
            })
        })
    }

    fn first_index_of(&self, member: FeatureId) -> Option<usize> {
        self.read(|entries| entries.iter().position(|e| e.feature.id == member))
    }

    fn insert_entry(
        &self,
        index: Option<usize>,
        member: &'static FeatureDescriptor,
        value: Value,
    ) -> Result<bool> {
        self.ensure_slot()?;
        self.owner.check_element(member, &value)?;
        let len = self.len();
        let index = index.unwrap_or(len);
        if index > len {
            return Err(Error::IndexOutOfBounds {
                feature: self.group.name,
                index,
                len,
            });
        }
        let child = value.as_object().cloned();
        if let Some(child) = &child {
            if matches!(self.position_of(child), Some((_, id)) if id == member.id) {
                return Ok(false);
            }
            ensure_acyclic(&self.owner, child)?;
        }
        // A single-valued member keeps the position of its existing entry
        if !member.is_many() && self.first_index_of(member.id).is_some() {
            self.replace_single(member, value)?;
            return Ok(true);
        }
        if let Some(child) = &child {
            detach(child);
        }
        let index = index.min(self.len());
        self.write(|e| e.insert(index, Entry::new(member, value.clone())))?;
        if let Some(child) = &child {
            install(child, &self.owner, member.id);
        }
        trace!(
            class = self.owner.class().name,
            group = self.group.name,
            member = member.name,
            index,
            "added feature map entry"
        );
        self.owner
            .emit(EventType::Add, member, Value::Null, value, Some(index));
        Ok(true)
    }

    /// Replace the entry of a single-valued member in place
    fn replace_single(&self, member: &'static FeatureDescriptor, value: Value) -> Result<()> {
        let child = value.as_object().cloned();
        if let Some(child) = &child {
            detach(child);
        }
        let Some(index) = self.first_index_of(member.id) else {
            self.write(|e| e.push(Entry::new(member, value.clone())))?;
            if let Some(child) = &child {
                install(child, &self.owner, member.id);
            }
            let index = self.len() - 1;
            self.owner
                .emit(EventType::Add, member, Value::Null, value, Some(index));
            return Ok(());
        };
        let old = self.write(|e| std::mem::replace(&mut e[index].value, value.clone()))?;
        if let Value::Object(previous) = &old {
            release(previous);
        }
        if let Some(child) = &child {
            install(child, &self.owner, member.id);
        }
        self.owner
            .emit(EventType::Set, member, old, value, Some(index));
        Ok(())
    }

    /// Clear, then append `entries` in order
    pub(crate) fn replace_all(&self, entries: Vec<Entry>) -> Result<()> {
        for entry in &entries {
            let member = self.member(entry.feature.id)?;
            self.owner.check_element(member, &entry.value)?;
            if let Value::Object(child) = &entry.value {
                ensure_acyclic(&self.owner, child)?;
            }
        }
        self.clear();
        for entry in entries {
            self.insert_entry(None, entry.feature, entry.value)?;
        }
        Ok(())
    }
}

impl PartialEq for FeatureMap {
    fn eq(&self, other: &Self) -> bool {
        self.owner.ptr_eq(&other.owner) && self.group.id == other.group.id
    }
}

impl fmt::Debug for FeatureMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureMap")
            .field("owner", &self.owner)
            .field("group", &self.group.name)
            .field("len", &self.len())
            .finish()
    }
}

/// Live projection of one member of a feature map
#[derive(Clone)]
pub struct FeatureMapView {
    map: FeatureMap,
    member: &'static FeatureDescriptor,
}

impl FeatureMapView {
    pub(crate) fn new(map: FeatureMap, member: &'static FeatureDescriptor) -> Self {
        Self { map, member }
    }

    /// View for a member feature of `owner`
    pub(crate) fn for_member(owner: ObjectRef, member: &'static FeatureDescriptor) -> Result<Self> {
        let group = match member.group {
            Some(group) => owner.feature(group)?,
            None => {
                return Err(Error::NotGroupMember {
                    class: owner.class().name,
                    group: "<none>",
                    member: member.name,
                })
            }
        };
        Ok(Self {
            map: FeatureMap::new(owner, group),
            member,
        })
    }

    /// Underlying feature map
    pub fn map(&self) -> &FeatureMap {
        &self.map
    }

    /// Member feature of the view
    pub fn feature(&self) -> &'static FeatureDescriptor {
        self.member
    }

    /// Positions in the shared sequence of this member's entries
    fn positions(&self) -> Vec<usize> {
        let id = self.member.id;
        self.map.read(|entries| {
            entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.feature.id == id)
                .map(|(i, _)| i)
                .collect()
        })
    }

    /// Number of values tagged with the member
    pub fn len(&self) -> usize {
        let id = self.member.id;
        self.map
            .read(|entries| entries.iter().filter(|e| e.feature.id == id).count())
    }

    /// Whether the member has no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `index` within the view
    pub fn get(&self, index: usize) -> Option<Value> {
        self.values().into_iter().nth(index)
    }

    /// First value, if any
    pub fn first(&self) -> Option<Value> {
        self.get(0)
    }

    /// Snapshot of the member's values, in order
    pub fn values(&self) -> Vec<Value> {
        let id = self.member.id;
        self.map.read(|entries| {
            entries
                .iter()
                .filter(|e| e.feature.id == id)
                .map(|e| e.value.clone())
                .collect()
        })
    }

    /// Snapshot of the member's object values
    pub fn objects(&self) -> Vec<ObjectRef> {
        self.values()
            .into_iter()
            .filter_map(Value::into_object)
            .collect()
    }

    /// Whether the member holds `object`
    pub fn contains(&self, object: &ObjectRef) -> bool {
        self.objects().iter().any(|o| o.ptr_eq(object))
    }

    /// Append a value to the shared sequence, tagged with the member
    pub fn push(&self, value: impl Into<Value>) -> Result<bool> {
        self.map.insert_entry(None, self.member, value.into())
    }

    /// Remove and return the value at `index` within the view
    pub fn remove(&self, index: usize) -> Result<Value> {
        let positions = self.positions();
        let position = *positions.get(index).ok_or(Error::IndexOutOfBounds {
            feature: self.member.name,
            index,
            len: positions.len(),
        })?;
        self.map.remove(position).map(Entry::into_value)
    }

    /// Remove every value of the member, leaving other members untouched
    pub fn clear(&self) {
        let id = self.member.id;
        let removed = self.map.write(|entries| {
            let mut removed = Vec::new();
            entries.retain(|e| {
                if e.feature.id == id {
                    removed.push(e.value.clone());
                    false
                } else {
                    true
                }
            });
            removed
        })
        .unwrap_or_default();
        if removed.is_empty() {
            return;
        }
        for value in &removed {
            if let Value::Object(child) = value {
                release(child);
            }
        }
        self.map.owner.emit(
            EventType::RemoveMany,
            self.member,
            Value::Many(removed),
            Value::Null,
            None,
        );
    }

    /// Clear the member, then append `values` in order
    pub(crate) fn replace_all(&self, values: Vec<Value>) -> Result<()> {
        for value in &values {
            self.map.owner.check_element(self.member, value)?;
            if let Value::Object(child) = value {
                ensure_acyclic(&self.map.owner, child)?;
            }
        }
        self.clear();
        for value in values {
            self.push(value)?;
        }
        Ok(())
    }

    /// Write a single-valued member: replace in place, append, or remove on `Null`
    pub(crate) fn set_single(&self, value: Value) -> Result<()> {
        if value.is_null() {
            self.clear();
            return Ok(());
        }
        if let Value::Object(child) = &value {
            if self.contains(child) {
                let index = self.positions().first().copied();
                self.map
                    .owner
                    .emit(EventType::Set, self.member, value.clone(), value, index);
                return Ok(());
            }
        }
        self.push(value).map(|_| ())
    }
}

impl PartialEq for FeatureMapView {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map && self.member.id == other.member.id
    }
}

impl fmt::Debug for FeatureMapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureMapView")
            .field("owner", &self.map.owner)
            .field("member", &self.member.name)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::NotificationLog;
    use crate::ows11::{self, features::*};
    use pretty_assertions::assert_eq;

    fn create(name: &str) -> ObjectRef {
        ows11::package().create(name).unwrap()
    }

    fn value(text: &str) -> ObjectRef {
        let v = create("ValueType");
        v.set(value_type::VALUE, Value::from(text)).unwrap();
        v
    }

    fn tags(map: &FeatureMap) -> Vec<&'static str> {
        map.entries().iter().map(|e| e.feature().name).collect()
    }

    #[test]
    fn test_interleaving_preserved() {
        let allowed = create("AllowedValuesType");
        let map = allowed.group(allowed_values_type::GROUP).unwrap();
        let (v1, r, v2) = (value("1"), create("RangeType"), value("2"));
        map.push(allowed_values_type::VALUE, &v1).unwrap();
        map.push(allowed_values_type::RANGE, &r).unwrap();
        map.push(allowed_values_type::VALUE, &v2).unwrap();

        assert_eq!(tags(&map), vec!["value", "range", "value"]);
        let values = allowed.view(allowed_values_type::VALUE).unwrap();
        assert_eq!(values.objects(), vec![v1.clone(), v2.clone()]);
        assert_eq!(v2.containing_feature().unwrap().name, "value");
        assert_eq!(v2.container(), Some(allowed));
    }

    #[test]
    fn test_view_is_live() {
        let allowed = create("AllowedValuesType");
        let values = allowed
            .get(allowed_values_type::VALUE)
            .unwrap()
            .into_view()
            .unwrap();
        values.push(value("a")).unwrap();
        allowed
            .group(allowed_values_type::GROUP)
            .unwrap()
            .push(allowed_values_type::RANGE, create("RangeType"))
            .unwrap();
        values.push(value("b")).unwrap();

        assert_eq!(values.len(), 2);
        assert_eq!(allowed.group(allowed_values_type::GROUP).unwrap().len(), 3);
        assert!(allowed.is_set(allowed_values_type::VALUE).unwrap());
        assert!(allowed.is_set(allowed_values_type::RANGE).unwrap());

        values.remove(1).unwrap();
        assert_eq!(tags(&allowed.group(allowed_values_type::GROUP).unwrap()), vec!["value", "range"]);
    }

    #[test]
    fn test_view_clear_keeps_other_members() {
        let allowed = create("AllowedValuesType");
        let map = allowed.group(allowed_values_type::GROUP).unwrap();
        map.push(allowed_values_type::VALUE, value("1")).unwrap();
        map.push(allowed_values_type::RANGE, create("RangeType")).unwrap();
        map.push(allowed_values_type::VALUE, value("2")).unwrap();

        allowed.unset(allowed_values_type::VALUE).unwrap();
        assert_eq!(tags(&map), vec!["range"]);
        assert!(!allowed.is_set(allowed_values_type::VALUE).unwrap());
        assert!(allowed.is_set(allowed_values_type::GROUP).unwrap());
    }

    #[test]
    fn test_non_member_rejected() {
        let allowed = create("AllowedValuesType");
        let map = allowed.group(allowed_values_type::GROUP).unwrap();
        assert!(matches!(
            map.push(allowed_values_type::GROUP, value("x")),
            Err(Error::NotGroupMember { .. })
        ));
        assert!(matches!(
            map.push(allowed_values_type::VALUE, create("RangeType")),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_single_valued_member_replaced_in_place() {
        let metadata = create("MetadataType");
        let first = create("CodeType");
        let second = create("CodeType");
        metadata
            .set(metadata_type::ABSTRACT_META_DATA, Value::from(&first))
            .unwrap();
        metadata
            .set(metadata_type::ABSTRACT_META_DATA, Value::from(&second))
            .unwrap();

        let map = metadata.group(metadata_type::ABSTRACT_META_DATA_GROUP).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(metadata.get(metadata_type::ABSTRACT_META_DATA).unwrap(), Value::from(&second));
        assert!(first.container().is_none());

        metadata.set(metadata_type::ABSTRACT_META_DATA, Value::Null).unwrap();
        assert!(map.is_empty());
        assert!(second.container().is_none());
    }

    #[test]
    fn test_moving_between_groups_notifies_old_owner() {
        let a = create("AllowedValuesType");
        let b = create("AllowedValuesType");
        let v = value("x");
        a.view(allowed_values_type::VALUE).unwrap().push(&v).unwrap();

        let log = NotificationLog::new();
        a.add_adapter(log.clone());
        b.view(allowed_values_type::VALUE).unwrap().push(&v).unwrap();

        assert!(a.group(allowed_values_type::GROUP).unwrap().is_empty());
        let records = log.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].event, EventType::Remove);
        assert_eq!(records[0].feature.name, "value");
        assert_eq!(v.container(), Some(b));
    }

    #[test]
    fn test_group_set_replaces_entries() {
        let allowed = create("AllowedValuesType");
        let class = allowed.class();
        let value_feature = class.feature(allowed_values_type::VALUE).unwrap();
        let range_feature = class.feature(allowed_values_type::RANGE).unwrap();
        allowed
            .view(allowed_values_type::VALUE)
            .unwrap()
            .push(value("old"))
            .unwrap();

        allowed
            .set(
                allowed_values_type::GROUP,
                Value::Entries(vec![
                    Entry::new(range_feature, create("RangeType")),
                    Entry::new(value_feature, value("new")),
                ]),
            )
            .unwrap();
        let map = allowed.group(allowed_values_type::GROUP).unwrap();
        assert_eq!(tags(&map), vec!["range", "value"]);

        allowed.unset(allowed_values_type::GROUP).unwrap();
        assert!(map.is_empty());
        assert!(!allowed.is_set(allowed_values_type::RANGE).unwrap());
    }

    #[test]
    fn test_simple_typed_member() {
        let identification = create("IdentificationType");
        identification
            .set(identification_type::AVAILABLE_CRS, Value::from("urn:ogc:def:crs:EPSG::4326"))
            .unwrap();
        assert_eq!(
            identification.get(identification_type::AVAILABLE_CRS).unwrap(),
            Value::from("urn:ogc:def:crs:EPSG::4326")
        );
        assert!(identification.is_set(identification_type::AVAILABLE_CRS_GROUP).unwrap());
    }

    #[test]
    fn test_insert_position_and_notification() {
        let http = create("HTTPType");
        let log = NotificationLog::new();
        http.add_adapter(log.clone());
        let map = http.group(http_type::GROUP).unwrap();
        map.push(http_type::GET, create("RequestMethodType")).unwrap();
        map.insert(0, http_type::POST, create("RequestMethodType")).unwrap();

        assert_eq!(tags(&map), vec!["post", "get"]);
        let last = log.last().unwrap();
        assert_eq!(last.event, EventType::Add);
        assert_eq!(last.feature.name, "post");
        assert_eq!(last.position, Some(0));
    }

    #[test]
    fn test_insert_checks_index_before_replacing() {
        let metadata = create("MetadataType");
        let first = create("CodeType");
        metadata
            .set(metadata_type::ABSTRACT_META_DATA, Value::from(&first))
            .unwrap();
        let map = metadata.group(metadata_type::ABSTRACT_META_DATA_GROUP).unwrap();

        let second = create("CodeType");
        assert!(matches!(
            map.insert(99, metadata_type::ABSTRACT_META_DATA, &second),
            Err(Error::IndexOutOfBounds { index: 99, len: 1, .. })
        ));
        assert_eq!(map.get(0).unwrap().into_value(), Value::from(&first));
        assert!(second.container().is_none());

        assert!(map.insert(1, metadata_type::ABSTRACT_META_DATA, &second).unwrap());
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(0).unwrap().into_value(), Value::from(&second));
    }

    #[test]
    fn test_map_over_non_group_slot_stores_nothing() {
        let bbox = create("BoundingBoxType");
        let log = NotificationLog::new();
        bbox.add_adapter(log.clone());

        let map = FeatureMap::new(bbox.clone(), bbox.descriptor(bounding_box_type::CRS));
        assert!(matches!(map.remove(0), Err(Error::TypeMismatch { .. })));
        map.clear();
        assert!(log.is_empty());
        assert!(!bbox.is_set(bounding_box_type::CRS).unwrap());
    }
}

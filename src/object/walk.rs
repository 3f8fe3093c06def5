//! Containment tree traversal and fragment paths
//!
//! Fragments use the `//@feature.index/@feature` form: one segment per
//! containment step, with the position appended for many-valued features.
//! The root itself is `/`.

use super::{ObjectRef, Slot};
use crate::error::Result;
use crate::limits::Limits;
use crate::value::Value;

impl ObjectRef {
    /// Topmost container, or the object itself when uncontained
    pub fn root(&self) -> ObjectRef {
        let mut current = self.clone();
        while let Some(owner) = current.container() {
            current = owner;
        }
        current
    }

    /// Directly contained objects, in feature order
    pub fn contents(&self) -> Vec<ObjectRef> {
        let data = self.0.borrow();
        let mut contents = Vec::new();
        for slot in &data.slots {
            match slot {
                Slot::Child(Some(child)) => contents.push(child.clone()),
                Slot::Children(Some(children)) => contents.extend(children.iter().cloned()),
                Slot::Group(Some(entries)) => contents.extend(
                    entries
                        .iter()
                        .filter_map(|e| e.value().as_object().cloned()),
                ),
                _ => {}
            }
        }
        contents
    }

    /// Every object beneath this one, depth first, within default limits
    pub fn all_contents(&self) -> Result<Vec<ObjectRef>> {
        self.all_contents_with(&Limits::default())
    }

    /// Every object beneath this one, depth first
    pub fn all_contents_with(&self, limits: &Limits) -> Result<Vec<ObjectRef>> {
        let mut found = Vec::new();
        let mut stack: Vec<(ObjectRef, usize)> = self
            .contents()
            .into_iter()
            .rev()
            .map(|c| (c, 1))
            .collect();
        while let Some((object, depth)) = stack.pop() {
            limits.check_containment_depth(depth)?;
            limits.check_objects(found.len() + 1)?;
            stack.extend(object.contents().into_iter().rev().map(|c| (c, depth + 1)));
            found.push(object);
        }
        Ok(found)
    }

    /// Fragment path of this object from its root
    pub fn uri_fragment(&self) -> String {
        let mut segments = Vec::new();
        let mut current = self.clone();
        while let Some(owner) = current.container() {
            let Some(feature) = current.containing_feature() else {
                break;
            };
            let segment = if feature.is_many() {
                let index = owner
                    .index_of_child(feature.id, &current)
                    .unwrap_or_default();
                format!("@{}.{}", feature.name, index)
            } else {
                format!("@{}", feature.name)
            };
            segments.push(segment);
            current = owner;
        }
        if segments.is_empty() {
            return "/".to_string();
        }
        segments.reverse();
        format!("//{}", segments.join("/"))
    }

    /// Resolve a fragment produced by [`ObjectRef::uri_fragment`] against
    /// this object as root
    pub fn object_at_fragment(&self, fragment: &str) -> Option<ObjectRef> {
        if fragment == "/" {
            return Some(self.clone());
        }
        let path = fragment.strip_prefix("//")?;
        let mut current = self.clone();
        for segment in path.split('/') {
            let segment = segment.strip_prefix('@')?;
            let (name, index) = match segment.rsplit_once('.') {
                Some((name, index)) => (name, Some(index.parse::<usize>().ok()?)),
                None => (segment, None),
            };
            let id = current.feature_id(name).ok()?;
            let next = match (current.get(id).ok()?, index) {
                (Value::Object(child), None) => child,
                (Value::Objects(list), Some(i)) => list.get(i)?,
                (Value::View(view), Some(i)) => view.get(i)?.into_object()?,
                _ => return None,
            };
            current = next;
        }
        Some(current)
    }

    fn index_of_child(&self, feature: usize, child: &ObjectRef) -> Option<usize> {
        match self.get(feature).ok()? {
            Value::Objects(list) => list.index_of(child),
            Value::View(view) => view.objects().iter().position(|o| o.ptr_eq(child)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ows11::{self, features::*};

    fn create(name: &str) -> ObjectRef {
        ows11::package().create(name).unwrap()
    }

    fn capabilities() -> (ObjectRef, ObjectRef, ObjectRef) {
        let capabilities = create("CapabilitiesBaseType");
        let metadata = create("OperationsMetadataType");
        let operation = create("OperationType");
        let second = create("OperationType");
        let dcp = create("DCPType");
        capabilities
            .set(capabilities_base_type::OPERATIONS_METADATA, Value::from(&metadata))
            .unwrap();
        let operations = metadata.children(operations_metadata_type::OPERATION).unwrap();
        operations.push(&operation).unwrap();
        operations.push(&second).unwrap();
        second.children(operation_type::D_CP).unwrap().push(&dcp).unwrap();
        (capabilities, second, dcp)
    }

    #[test]
    fn test_root_and_contents() {
        let (capabilities, second, dcp) = capabilities();
        assert_eq!(dcp.root(), capabilities);
        assert_eq!(capabilities.root(), capabilities);
        assert_eq!(second.contents(), vec![dcp.clone()]);

        let all = capabilities.all_contents().unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all.last(), Some(&dcp));
    }

    #[test]
    fn test_fragment_round_trip() {
        let (capabilities, second, dcp) = capabilities();
        assert_eq!(capabilities.uri_fragment(), "/");
        assert_eq!(second.uri_fragment(), "//@operationsMetadata/@operation.1");
        assert_eq!(dcp.uri_fragment(), "//@operationsMetadata/@operation.1/@dCP.0");

        for object in capabilities.all_contents().unwrap() {
            let fragment = object.uri_fragment();
            assert_eq!(capabilities.object_at_fragment(&fragment), Some(object));
        }
        assert!(capabilities.object_at_fragment("//@nope").is_none());
        assert!(capabilities.object_at_fragment("//@operationsMetadata/@operation.9").is_none());
    }

    #[test]
    fn test_fragment_through_group() {
        let allowed = create("AllowedValuesType");
        let range = create("RangeType");
        let view = allowed.view(allowed_values_type::RANGE).unwrap();
        view.push(create("RangeType")).unwrap();
        view.push(&range).unwrap();
        assert_eq!(range.uri_fragment(), "//@range.1");
        assert_eq!(allowed.object_at_fragment("//@range.1"), Some(range));
    }

    #[test]
    fn test_walk_depth_limited() {
        let (capabilities, _, _) = capabilities();
        let limits = Limits {
            max_containment_depth: 2,
            ..Limits::default()
        };
        assert!(matches!(
            capabilities.all_contents_with(&limits),
            Err(Error::LimitExceeded(_))
        ));
    }
}

//! Generic feature access across the whole OWS 1.1 registry
//!
//! These tests drive every feature of every class through the reflective
//! surface only, so they cover the table and the access layer together.

use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use num_bigint::BigInt;

use owsmodel::metadata::{DataType, FeatureDescriptor, FeatureKind, RangeClosure};
use owsmodel::ows11::{self, features::*};
use owsmodel::{Entry, Error, EventType, NotificationLog, ObjectRef, Value};

fn create(name: &str) -> ObjectRef {
    ows11::package().create(name).unwrap()
}

fn scalar(data_type: DataType) -> Value {
    match data_type {
        DataType::PositiveInteger => Value::Integer(BigInt::from(5)),
        DataType::Position => Value::Positions(vec![1.0, 2.0]),
        DataType::RangeClosure => Value::RangeClosure(RangeClosure::Open),
        DataType::Map => {
            let mut map = IndexMap::new();
            map.insert("key".to_string(), "value".to_string());
            Value::Map(map)
        }
        DataType::JavaObject => Value::Opaque(serde_json::json!({ "opaque": true })),
        _ => Value::from("sample"),
    }
}

fn element(feature: &FeatureDescriptor) -> Value {
    match feature.kind {
        FeatureKind::Attribute { data_type } => scalar(data_type),
        FeatureKind::Containment { target } => Value::from(create(target.unwrap_or("CodeType"))),
        FeatureKind::Group => Value::Null,
    }
}

/// A non-default value for `feature` of `object`
fn sample(object: &ObjectRef, feature: &'static FeatureDescriptor) -> Value {
    if feature.is_group() {
        let member = object
            .class()
            .members_of(feature.id)
            .next()
            .expect("every group has a member");
        return Value::Entries(vec![Entry::new(member, element(member))]);
    }
    if feature.is_many() {
        Value::Many(vec![element(feature)])
    } else {
        element(feature)
    }
}

// ============================================================================
// isSet / unset
// ============================================================================

#[test]
fn test_nothing_is_set_on_fresh_instances() {
    for class in ows11::package().classes() {
        let object = ObjectRef::new(class);
        for feature in class.features() {
            assert!(
                !object.is_set(feature.id).unwrap(),
                "{}.{} is set on a fresh instance",
                class.name,
                feature.name
            );
        }
    }
}

#[test]
fn test_set_then_unset_every_feature() {
    for class in ows11::package().classes() {
        for feature in class.features() {
            let object = ObjectRef::new(class);
            object.set(feature.id, sample(&object, feature)).unwrap_or_else(|e| {
                panic!("set {}.{}: {}", class.name, feature.name, e);
            });
            assert!(
                object.is_set(feature.id).unwrap(),
                "{}.{} not set after set",
                class.name,
                feature.name
            );

            object.unset(feature.id).unwrap();
            assert!(
                !object.is_set(feature.id).unwrap(),
                "{}.{} still set after unset",
                class.name,
                feature.name
            );
        }
    }
}

// ============================================================================
// Attribute round trips and notifications
// ============================================================================

#[test]
fn test_attribute_round_trip_notifies_old_and_new() {
    for class in ows11::package().classes() {
        let attributes = class
            .features()
            .iter()
            .filter(|f| f.is_attribute() && !f.is_many() && !f.is_group_member());
        for feature in attributes {
            let object = ObjectRef::new(class);
            let log = NotificationLog::new();
            object.add_adapter(log.clone());

            let value = sample(&object, feature);
            object.set(feature.id, value.clone()).unwrap();
            assert_eq!(object.get(feature.id).unwrap(), value);

            let notification = log.last().unwrap();
            assert_eq!(notification.event, EventType::Set);
            assert_eq!(notification.feature_id(), feature.id);
            assert_eq!(notification.old, feature.default_value().unwrap());
            assert_eq!(notification.new, value);
            assert_eq!(notification.notifier, object);
        }
    }
}

#[test]
fn test_deliver_off_suppresses_notifications() {
    let code = create("CodeType");
    let log = NotificationLog::new();
    code.add_adapter(log.clone());
    code.set_deliver(false);
    code.set(code_type::VALUE, Value::from("quiet")).unwrap();
    assert!(log.is_empty());

    code.set_deliver(true);
    code.set(code_type::VALUE, Value::from("loud")).unwrap();
    assert_eq!(log.len(), 1);
    assert!(code.remove_adapter(&log));
    assert_eq!(code.adapter_count(), 0);
}

#[test]
fn test_closure_adapter() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let value = create("ValueType");
    value.add_adapter(Rc::new(move |n: &owsmodel::Notification| {
        sink.borrow_mut().push(n.to_string());
    }));
    value.set(value_type::VALUE, Value::from("42")).unwrap();
    assert_eq!(*seen.borrow(), vec!["SET ValueType.value: null -> 42".to_string()]);
}

// ============================================================================
// Name-based access and failures
// ============================================================================

#[test]
fn test_access_by_name_matches_ids() {
    let bbox = create("BoundingBoxType");
    bbox.set_by_name("crs", Value::from("EPSG:4326")).unwrap();
    assert_eq!(bbox.get(bounding_box_type::CRS).unwrap(), Value::from("EPSG:4326"));
    assert!(bbox.is_set_by_name("crs").unwrap());
    bbox.unset_by_name("crs").unwrap();
    assert_eq!(bbox.get_by_name("crs").unwrap(), Value::Null);
}

#[test]
fn test_access_errors() {
    let bbox = create("BoundingBoxType");
    assert!(matches!(
        bbox.get(bounding_box_type::FEATURE_COUNT),
        Err(Error::InvalidFeature { class: "BoundingBoxType", .. })
    ));
    assert!(matches!(
        bbox.get_by_name("lowercorner"),
        Err(Error::UnknownFeature { .. })
    ));
    assert!(matches!(
        bbox.set(bounding_box_type::CRS, Value::Positions(vec![1.0])),
        Err(Error::TypeMismatch { feature: "crs", .. })
    ));
    assert!(matches!(
        ows11::package().create("DocumentRoot"),
        Err(Error::UnknownClass(_))
    ));
}

#[test]
fn test_supertype_ids_address_subtype_instances() {
    let domain = create("DomainType");
    let allowed = create("AllowedValuesType");
    domain
        .set(un_named_domain_type::ALLOWED_VALUES, Value::from(&allowed))
        .unwrap();
    assert_eq!(domain.get(domain_type::ALLOWED_VALUES).unwrap(), Value::from(&allowed));
    assert_eq!(domain_type::ALLOWED_VALUES, un_named_domain_type::ALLOWED_VALUES);
    assert_eq!(domain.feature(domain_type::NAME).unwrap().name, "name");
}

//! Feature maps: one ordered sequence, several live member views

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use owsmodel::ows11::types::*;
use owsmodel::ows11::{self, features::*};
use owsmodel::{Entry, Error, EventType, NotificationLog, ObjectRef, Value};

fn value(text: &str) -> ValueType {
    let value = ValueType::new();
    value.set_value(text);
    value
}

fn tags(map: &owsmodel::FeatureMap) -> Vec<&'static str> {
    map.entries().iter().map(|e| e.feature().name).collect()
}

#[test]
fn test_interleaving_is_preserved() {
    let allowed = AllowedValuesType::new();
    let first = value("1");
    let range = RangeType::new();
    let second = value("2");

    allowed.value().push(&first).unwrap();
    allowed.range().push(&range).unwrap();
    allowed.value().push(&second).unwrap();

    assert_eq!(tags(&allowed.group()), vec!["value", "range", "value"]);
    assert_eq!(allowed.value().to_vec(), vec![first, second]);
    assert_eq!(allowed.range().to_vec(), vec![range]);
}

#[test]
fn test_view_is_a_projection() {
    let allowed = AllowedValuesType::new();
    let values = allowed.value();
    let map = allowed.group();

    map.push(allowed_values_type::VALUE, &*value("a")).unwrap();
    map.push(allowed_values_type::RANGE, &*RangeType::new()).unwrap();
    assert_eq!(values.len(), 1);

    values.push(&value("b")).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(tags(&map), vec!["value", "range", "value"]);

    values.clear();
    assert_eq!(tags(&map), vec!["range"]);
    assert!(values.is_empty());
}

#[test]
fn test_remove_through_view_maps_positions() {
    let allowed = AllowedValuesType::new();
    allowed.range().push(&RangeType::new()).unwrap();
    allowed.value().push(&value("a")).unwrap();
    allowed.value().push(&value("b")).unwrap();

    let log = NotificationLog::new();
    allowed.add_adapter(log.clone());
    let removed = allowed.value().remove(1).unwrap();
    assert_eq!(removed.value().as_deref(), Some("b"));
    assert!(removed.container().is_none());

    let notification = log.last().unwrap();
    assert_eq!(notification.event, EventType::Remove);
    assert_eq!(notification.feature_id(), allowed_values_type::VALUE);
    assert_eq!(notification.position, Some(2));
}

#[test]
fn test_entries_move_between_groups() {
    let first = AllowedValuesType::new();
    let second = AllowedValuesType::new();
    let moving = value("m");
    first.value().push(&moving).unwrap();
    second.value().push(&moving).unwrap();

    assert!(first.group().is_empty());
    assert_eq!(second.value().to_vec(), vec![moving.clone()]);
    assert_eq!(moving.container(), Some(second.clone().into_object()));
    assert_eq!(moving.uri_fragment(), "//@value.0");
}

#[test]
fn test_non_member_is_rejected() {
    let allowed = ows11::package().create("AllowedValuesType").unwrap();
    let map = allowed
        .get(allowed_values_type::GROUP)
        .unwrap()
        .into_feature_map()
        .unwrap();
    assert!(matches!(
        map.push(allowed_values_type::GROUP, Value::from("x")),
        Err(Error::NotGroupMember { .. })
    ));
    assert!(matches!(
        map.push(allowed_values_type::VALUE, &*RangeType::new()),
        Err(Error::TypeMismatch { .. })
    ));
}

#[test]
fn test_set_group_from_entries() {
    let http = ows11::package().create("HTTPType").unwrap();
    let class = http.class();
    let get = class.feature(http_type::GET).unwrap();
    let post = class.feature(http_type::POST).unwrap();
    let entries = vec![
        Entry::new(post, RequestMethodType::new().into_object()),
        Entry::new(get, RequestMethodType::new().into_object()),
        Entry::new(post, RequestMethodType::new().into_object()),
    ];
    http.set(http_type::GROUP, Value::Entries(entries)).unwrap();

    let view = http.get(http_type::POST).unwrap().into_view().unwrap();
    assert_eq!(view.len(), 2);
    assert!(http.is_set(http_type::GET).unwrap());

    http.unset(http_type::POST).unwrap();
    assert!(!http.is_set(http_type::POST).unwrap());
    assert!(http.is_set(http_type::GROUP).unwrap());
}

#[test]
fn test_single_valued_member_replaces_in_place() {
    let metadata = MetadataType::new();
    let first = CodeType::new().into_object();
    let second = ValueType::new().into_object();
    metadata.set_abstract_meta_data(Some(&first)).unwrap();
    metadata.set_abstract_meta_data(Some(&second)).unwrap();

    assert_eq!(metadata.abstract_meta_data_group().len(), 1);
    assert_eq!(metadata.abstract_meta_data(), Some(second));
    assert!(first.container().is_none());
}

#[derive(Debug, Clone)]
enum Op {
    PushValue,
    PushRange,
    Remove(usize),
    ClearValues,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::PushValue),
        4 => Just(Op::PushRange),
        2 => (0usize..16).prop_map(Op::Remove),
        1 => Just(Op::ClearValues),
    ]
}

fn filtered(map: &owsmodel::FeatureMap, member: usize) -> Vec<ObjectRef> {
    map.entries()
        .into_iter()
        .filter(|e| e.feature().id == member)
        .filter_map(|e| e.into_value().into_object())
        .collect()
}

proptest! {
    #[test]
    fn prop_views_equal_filtered_sequence(ops in prop::collection::vec(op(), 0..32)) {
        let allowed = AllowedValuesType::new();
        let map = allowed.group();
        let mut expected_len = 0usize;

        for op in ops {
            match op {
                Op::PushValue => {
                    allowed.value().push(&ValueType::new()).unwrap();
                    expected_len += 1;
                }
                Op::PushRange => {
                    allowed.range().push(&RangeType::new()).unwrap();
                    expected_len += 1;
                }
                Op::Remove(index) => {
                    if expected_len > 0 {
                        map.remove(index % expected_len).unwrap();
                        expected_len -= 1;
                    }
                }
                Op::ClearValues => {
                    let values = allowed.value().len();
                    allowed.value().clear();
                    expected_len -= values;
                }
            }

            prop_assert_eq!(map.len(), expected_len);
            let values: Vec<ObjectRef> = allowed.value().iter().map(ValueType::into_object).collect();
            let ranges: Vec<ObjectRef> = allowed.range().iter().map(RangeType::into_object).collect();
            prop_assert_eq!(values, filtered(&map, allowed_values_type::VALUE));
            prop_assert_eq!(ranges, filtered(&map, allowed_values_type::RANGE));
            for object in allowed.contents() {
                prop_assert_eq!(object.container(), Some(allowed.clone().into_object()));
            }
        }
    }
}

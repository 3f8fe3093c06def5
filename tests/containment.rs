//! Exclusive containment and ownership transfer

use pretty_assertions::assert_eq;

use owsmodel::ows11::types::*;
use owsmodel::ows11::{self, features::*};
use owsmodel::{Error, EventType, NotificationLog, ObjectRef, Value};

fn create(name: &str) -> ObjectRef {
    ows11::package().create(name).unwrap()
}

fn language_string(text: &str) -> LanguageStringType {
    let string = LanguageStringType::new();
    string.set_value(text);
    string
}

fn texts(description: &DescriptionType) -> Vec<String> {
    description
        .title()
        .iter()
        .filter_map(|t| t.value())
        .collect()
}

// ============================================================================
// Single containment
// ============================================================================

#[test]
fn test_moving_child_between_parents() {
    let first = ContactType::new();
    let second = ContactType::new();
    let phone = TelephoneType::new();

    first.set_phone(Some(&phone)).unwrap();
    assert_eq!(phone.container(), Some(first.clone().into_object()));

    let log = NotificationLog::new();
    first.add_adapter(log.clone());
    second.set_phone(Some(&phone)).unwrap();

    assert!(first.phone().is_none());
    assert!(!first.is_set(contact_type::PHONE).unwrap());
    assert_eq!(second.phone(), Some(phone.clone()));
    assert_eq!(phone.container(), Some(second.clone().into_object()));
    assert_eq!(phone.containing_feature().map(|f| f.name), Some("phone"));

    let removed = log.last().unwrap();
    assert_eq!(removed.event, EventType::Set);
    assert_eq!(removed.old, Value::from(&*phone));
    assert_eq!(removed.new, Value::Null);
}

#[test]
fn test_setting_same_child_is_a_touch() {
    let contact = ContactType::new();
    let address = AddressType::new();
    contact.set_address(Some(&address)).unwrap();

    let parent_log = NotificationLog::new();
    let child_log = NotificationLog::new();
    contact.add_adapter(parent_log.clone());
    address.add_adapter(child_log.clone());

    contact.set_address(Some(&address)).unwrap();
    assert_eq!(parent_log.len(), 1);
    assert!(parent_log.last().unwrap().is_touch());
    assert!(child_log.is_empty());
    assert_eq!(address.container(), Some(contact.clone().into_object()));
}

#[test]
fn test_replacing_child_releases_old_one() {
    let range = RangeType::new();
    let low = ValueType::new();
    let lower = ValueType::new();
    range.set_minimum_value(Some(&low)).unwrap();
    range.set_minimum_value(Some(&lower)).unwrap();
    assert!(low.container().is_none());
    assert_eq!(lower.container(), Some(range.clone().into_object()));

    range.unset(range_type::MINIMUM_VALUE).unwrap();
    assert!(lower.container().is_none());
}

#[test]
fn test_cycles_are_rejected() {
    let outer = DatasetDescriptionSummaryBaseType::new();
    let inner = DatasetDescriptionSummaryBaseType::new();
    outer.dataset_description_summary().push(&inner).unwrap();

    let result = inner.dataset_description_summary().push(&outer);
    assert!(matches!(result, Err(Error::ContainmentCycle { .. })));
    assert!(outer.container().is_none());

    let result = outer.dataset_description_summary().push(&outer);
    assert!(matches!(result, Err(Error::ContainmentCycle { .. })));
}

#[test]
fn test_wrong_target_class_is_rejected() {
    let contact = create("ContactType");
    let code = create("CodeType");
    assert!(matches!(
        contact.set(contact_type::PHONE, Value::from(&code)),
        Err(Error::TypeMismatch { feature: "phone", .. })
    ));
    assert!(code.container().is_none());
}

// ============================================================================
// Containment lists
// ============================================================================

#[test]
fn test_list_preserves_insertion_order() {
    let description = DescriptionType::new();
    let titles = description.title();
    for text in ["a", "b", "c", "d"] {
        titles.push(&language_string(text)).unwrap();
    }
    assert_eq!(texts(&description), vec!["a", "b", "c", "d"]);

    let removed = titles.remove(1).unwrap();
    assert_eq!(removed.value().as_deref(), Some("b"));
    assert!(removed.container().is_none());
    assert_eq!(texts(&description), vec!["a", "c", "d"]);
}

#[test]
fn test_list_notifications_carry_positions() {
    let description = DescriptionType::new();
    let log = NotificationLog::new();
    description.add_adapter(log.clone());

    description.title().push(&language_string("a")).unwrap();
    description.title().push(&language_string("b")).unwrap();
    description.title().remove(0).unwrap();

    let records = log.records();
    let events: Vec<_> = records.iter().map(|n| (n.event, n.position)).collect();
    assert_eq!(
        events,
        vec![
            (EventType::Add, Some(0)),
            (EventType::Add, Some(1)),
            (EventType::Remove, Some(0)),
        ]
    );
}

#[test]
fn test_push_into_list_takes_child_from_other_list() {
    let first = DescriptionType::new();
    let second = DescriptionType::new();
    let title = language_string("moving");
    first.title().push(&language_string("stays")).unwrap();
    first.title().push(&title).unwrap();

    let log = NotificationLog::new();
    first.add_adapter(log.clone());
    second.title().push(&title).unwrap();

    assert_eq!(texts(&first), vec!["stays"]);
    assert_eq!(texts(&second), vec!["moving"]);
    let removed = log.last().unwrap();
    assert_eq!(removed.event, EventType::Remove);
    assert_eq!(removed.position, Some(1));
}

#[test]
fn test_set_list_replaces_contents() {
    let keywords = create("KeywordsType");
    let words: Vec<_> = ["x", "y"]
        .into_iter()
        .map(|w| Value::from(language_string(w).into_object()))
        .collect();
    keywords.set(keywords_type::KEYWORD, Value::Many(words)).unwrap();
    let list = keywords.get(keywords_type::KEYWORD).unwrap().into_list().unwrap();
    assert_eq!(list.len(), 2);

    keywords.set(keywords_type::KEYWORD, Value::Null).unwrap();
    assert!(list.is_empty());
    assert!(!keywords.is_set(keywords_type::KEYWORD).unwrap());
}

// ============================================================================
// Tree navigation
// ============================================================================

#[test]
fn test_fragments_resolve_back() {
    let capabilities = CapabilitiesBaseType::new();
    let metadata = OperationsMetadataType::new();
    let operation = OperationType::new();
    let domain = DomainType::new();
    capabilities.set_operations_metadata(Some(&metadata)).unwrap();
    metadata.operation().push(&OperationType::new()).unwrap();
    metadata.operation().push(&operation).unwrap();
    operation.parameter().push(&domain).unwrap();

    assert_eq!(
        domain.uri_fragment(),
        "//@operationsMetadata/@operation.1/@parameter.0"
    );
    assert_eq!(domain.root(), capabilities.clone().into_object());
    for object in capabilities.all_contents().unwrap() {
        assert_eq!(
            capabilities.object_at_fragment(&object.uri_fragment()),
            Some(object)
        );
    }
}

#[test]
fn test_dropped_owner_leaves_child_unowned() {
    let code = CodeType::new();
    {
        let keywords = KeywordsType::new();
        keywords.set_type_code(Some(&code)).unwrap();
        assert!(code.container().is_some());
    }
    assert!(code.container().is_none());
    assert_eq!(code.uri_fragment(), "/");
}

//! Runtime values exchanged through the reflective surface
//!
//! `get` returns a [`Value`] and `set` consumes one. Plain data (strings,
//! numbers, positions, ...) compares by value; objects and live collection
//! handles compare by identity.

use std::fmt;

use indexmap::IndexMap;
use num_bigint::BigInt;

use crate::metadata::RangeClosure;
use crate::object::{Entry, FeatureMap, FeatureMapView, ObjectList, ObjectRef, ValueList};

/// Any value a feature can hold or be set to
#[derive(Debug, Clone)]
pub enum Value {
    /// No value
    Null,
    /// String-like simple types
    String(String),
    /// Integer simple types (arbitrary precision)
    Integer(BigInt),
    /// Position (list of coordinates)
    Positions(Vec<f64>),
    /// Range closure enumeration
    RangeClosure(RangeClosure),
    /// String map
    Map(IndexMap<String, String>),
    /// Opaque host object
    Opaque(serde_json::Value),
    /// A model object
    Object(ObjectRef),
    /// Live list of simple values
    Values(ValueList),
    /// Live containment list
    Objects(ObjectList),
    /// Live feature map of a group
    Group(FeatureMap),
    /// Live projection of one group member
    View(FeatureMapView),
    /// Detached feature-map entries
    Entries(Vec<Entry>),
    /// Detached list of values
    Many(Vec<Value>),
}

impl Value {
    /// Check for `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the value's shape
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Positions(_) => "positions",
            Value::RangeClosure(_) => "rangeClosure",
            Value::Map(_) => "map",
            Value::Opaque(_) => "opaque",
            Value::Object(_) => "object",
            Value::Values(_) => "value list",
            Value::Objects(_) => "object list",
            Value::Group(_) => "feature map",
            Value::View(_) => "feature map view",
            Value::Entries(_) => "entries",
            Value::Many(_) => "list",
        }
    }

    /// Borrow as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Take as a string
    pub fn into_string(self) -> Option<String> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Take as an integer
    pub fn into_integer(self) -> Option<BigInt> {
        match self {
            Value::Integer(d) => Some(d),
            _ => None,
        }
    }

    /// Take as a position
    pub fn into_positions(self) -> Option<Vec<f64>> {
        match self {
            Value::Positions(p) => Some(p),
            _ => None,
        }
    }

    /// Take as a range closure
    pub fn into_range_closure(self) -> Option<RangeClosure> {
        match self {
            Value::RangeClosure(c) => Some(c),
            _ => None,
        }
    }

    /// Take as a string map
    pub fn into_map(self) -> Option<IndexMap<String, String>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Take as an opaque value
    pub fn into_opaque(self) -> Option<serde_json::Value> {
        match self {
            Value::Opaque(o) => Some(o),
            _ => None,
        }
    }

    /// Borrow as an object
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Take as an object
    pub fn into_object(self) -> Option<ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Take as a live value list
    pub fn into_values(self) -> Option<ValueList> {
        match self {
            Value::Values(l) => Some(l),
            _ => None,
        }
    }

    /// Take as a live containment list
    pub fn into_list(self) -> Option<ObjectList> {
        match self {
            Value::Objects(l) => Some(l),
            _ => None,
        }
    }

    /// Take as a live feature map
    pub fn into_feature_map(self) -> Option<FeatureMap> {
        match self {
            Value::Group(g) => Some(g),
            _ => None,
        }
    }

    /// Take as a live feature map view
    pub fn into_view(self) -> Option<FeatureMapView> {
        match self {
            Value::View(v) => Some(v),
            _ => None,
        }
    }

    /// Snapshot a list-shaped value into its elements.
    ///
    /// Live handles are copied at call time, so replacing a list with its own
    /// contents is safe. `None` for scalar shapes.
    pub fn into_elements(self) -> Option<Vec<Value>> {
        match self {
            Value::Many(values) => Some(values),
            Value::Values(list) => Some(list.to_vec()),
            Value::Objects(list) => Some(list.to_vec().into_iter().map(Value::Object).collect()),
            Value::View(view) => Some(view.values()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Positions(a), Value::Positions(b)) => a == b,
            (Value::RangeClosure(a), Value::RangeClosure(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Values(a), Value::Values(b)) => a == b,
            (Value::Objects(a), Value::Objects(b)) => a == b,
            (Value::Group(a), Value::Group(b)) => a == b,
            (Value::View(a), Value::View(b)) => a == b,
            (Value::Entries(a), Value::Entries(b)) => a == b,
            (Value::Many(a), Value::Many(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::String(s) => f.write_str(s),
            Value::Integer(d) => write!(f, "{}", d),
            Value::Positions(p) => {
                let coords: Vec<String> = p.iter().map(|c| c.to_string()).collect();
                write!(f, "[{}]", coords.join(", "))
            }
            Value::RangeClosure(c) => write!(f, "{}", c),
            Value::Map(m) => {
                let pairs: Vec<String> = m.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            Value::Opaque(o) => write!(f, "{}", o),
            Value::Object(o) => f.write_str(&o.describe()),
            Value::Values(list) => {
                let items: Vec<String> = list.to_vec().iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Objects(list) => {
                let items: Vec<String> = list.iter().map(|o| o.describe()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Group(map) => write_entries(f, &map.entries()),
            Value::View(view) => {
                let items: Vec<String> = view.values().iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Entries(entries) => write_entries(f, entries),
            Value::Many(values) => {
                let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, entries: &[Entry]) -> fmt::Result {
    let items: Vec<String> = entries
        .iter()
        .map(|e| format!("{}={}", e.feature().name, e.value()))
        .collect();
    write!(f, "[{}]", items.join(", "))
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<BigInt> for Value {
    fn from(d: BigInt) -> Self {
        Value::Integer(d)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(BigInt::from(n))
    }
}

impl From<Vec<f64>> for Value {
    fn from(p: Vec<f64>) -> Self {
        Value::Positions(p)
    }
}

impl From<RangeClosure> for Value {
    fn from(c: RangeClosure) -> Self {
        Value::RangeClosure(c)
    }
}

impl From<ObjectRef> for Value {
    fn from(o: ObjectRef) -> Self {
        Value::Object(o)
    }
}

impl From<&ObjectRef> for Value {
    fn from(o: &ObjectRef) -> Self {
        Value::Object(o.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

//! Attribute datatypes
//!
//! The OWS 1.1 schema only uses a handful of simple types. Each one knows
//! which runtime [`Value`] shapes it accepts and how to convert between a
//! value and its XML lexical form, which is what an external codec needs to
//! populate and drain attribute features.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::value::Value;

/// Closure of an OWS `Range` (`rangeClosure` attribute)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeClosure {
    /// Both bounds included
    #[default]
    Closed,
    /// Both bounds excluded
    Open,
    /// Lower bound excluded, upper included
    OpenClosed,
    /// Lower bound included, upper excluded
    ClosedOpen,
}

impl RangeClosure {
    /// All literals in declaration order
    pub const ALL: [RangeClosure; 4] = [
        RangeClosure::Closed,
        RangeClosure::Open,
        RangeClosure::OpenClosed,
        RangeClosure::ClosedOpen,
    ];

    /// Schema literal
    pub fn literal(&self) -> &'static str {
        match self {
            RangeClosure::Closed => "closed",
            RangeClosure::Open => "open",
            RangeClosure::OpenClosed => "open-closed",
            RangeClosure::ClosedOpen => "closed-open",
        }
    }

    /// Parse a schema literal
    pub fn from_literal(literal: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.literal() == literal.trim())
    }
}

impl fmt::Display for RangeClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// Simple type of an attribute feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DataType {
    /// xs:string
    String,
    /// xs:anyURI
    AnyUri,
    /// xs:anySimpleType
    AnySimpleType,
    /// xs:language
    Language,
    /// ows:MimeType (patterned string)
    MimeType,
    /// ows:VersionType (patterned string)
    VersionType,
    /// ows:UpdateSequenceType
    UpdateSequence,
    /// ows:ServiceType
    ServiceType,
    /// xs:positiveInteger
    PositiveInteger,
    /// ows:PositionType (list of doubles)
    Position,
    /// ows:rangeClosure enumeration
    RangeClosure,
    /// Free-form string map, not bound to XML
    Map,
    /// Opaque host object
    JavaObject,
}

impl DataType {
    /// Schema name of the datatype
    pub fn name(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::AnyUri => "anyURI",
            DataType::AnySimpleType => "anySimpleType",
            DataType::Language => "language",
            DataType::MimeType => "MimeType",
            DataType::VersionType => "VersionType",
            DataType::UpdateSequence => "UpdateSequenceType",
            DataType::ServiceType => "ServiceType",
            DataType::PositiveInteger => "positiveInteger",
            DataType::Position => "PositionType",
            DataType::RangeClosure => "rangeClosure",
            DataType::Map => "Map",
            DataType::JavaObject => "JavaObject",
        }
    }

    /// Whether values of this type are carried as strings
    pub fn is_string_like(&self) -> bool {
        matches!(
            self,
            DataType::String
                | DataType::AnyUri
                | DataType::AnySimpleType
                | DataType::Language
                | DataType::MimeType
                | DataType::VersionType
                | DataType::UpdateSequence
                | DataType::ServiceType
        )
    }

    /// Check whether a runtime value has the shape this datatype stores.
    ///
    /// `Null` is accepted everywhere and means "no value" (or the default,
    /// for enumerations).
    pub fn accepts(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(_) => self.is_string_like() || *self == DataType::JavaObject,
            Value::Integer(_) => {
                matches!(self, DataType::PositiveInteger | DataType::JavaObject)
            }
            Value::Positions(_) => *self == DataType::Position,
            Value::RangeClosure(_) => *self == DataType::RangeClosure,
            Value::Map(_) => *self == DataType::Map,
            Value::Opaque(_) => *self == DataType::JavaObject,
            _ => false,
        }
    }

    /// Convert an XML lexical form to a value
    pub fn from_lexical(&self, lexical: &str) -> Result<Value> {
        match self {
            dt if dt.is_string_like() => Ok(Value::String(lexical.to_string())),
            DataType::PositiveInteger => {
                let n = BigInt::from_str(lexical.trim()).map_err(|_| {
                    Error::Value(format!("invalid positiveInteger value: '{}'", lexical))
                })?;
                Ok(Value::Integer(n))
            }
            DataType::Position => lexical
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|_| {
                        Error::Value(format!("invalid coordinate '{}' in position", token))
                    })
                })
                .collect::<Result<Vec<f64>>>()
                .map(Value::Positions),
            DataType::RangeClosure => RangeClosure::from_literal(lexical)
                .map(Value::RangeClosure)
                .ok_or_else(|| Error::Value(format!("invalid rangeClosure: '{}'", lexical))),
            DataType::JavaObject => Ok(Value::Opaque(serde_json::Value::String(
                lexical.to_string(),
            ))),
            _ => Err(Error::Value(format!(
                "datatype '{}' has no lexical form",
                self.name()
            ))),
        }
    }

    /// Convert a value to its XML lexical form. `None` when the value is
    /// null or has no lexical form.
    pub fn to_lexical(&self, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Integer(d) => Some(d.to_string()),
            Value::Positions(p) => Some(
                p.iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            Value::RangeClosure(c) => Some(c.literal().to_string()),
            Value::Opaque(serde_json::Value::String(s)) => Some(s.clone()),
            Value::Opaque(json) => Some(json.to_string()),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

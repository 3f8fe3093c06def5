//! Schema validation of OWS 1.1 containment trees
//!
//! The access layer only checks value shapes. Everything the schema adds on
//! top (required features, upper bounds, lexical patterns, coordinate
//! counts) is checked here, on demand, over a whole containment tree.

use once_cell::sync::Lazy;
use regex::Regex;
use num_bigint::Sign;
use tracing::debug;

use super::features::bounding_box_type;
use crate::error::{Error, Result, ValidationError};
use crate::limits::Limits;
use crate::metadata::{DataType, FeatureDescriptor};
use crate::object::ObjectRef;
use crate::value::Value;

/// Pattern of `ows:MimeType`
pub const MIME_TYPE_PATTERN: &str =
    r"^(application|audio|image|text|video|message|multipart|model)/.+(;\s*.+=.+)*$";

/// Pattern of `ows:VersionType`
pub const VERSION_PATTERN: &str = r"^\d+\.\d?\d\.\d?\d$";

static MIME_TYPE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(MIME_TYPE_PATTERN).unwrap());
static VERSION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(VERSION_PATTERN).unwrap());

const WGS84_BOUNDING_BOX: &str = "WGS84BoundingBoxType";

/// Whether `value` is a valid `ows:MimeType`
pub fn is_mime_type(value: &str) -> bool {
    MIME_TYPE_REGEX.is_match(value)
}

/// Whether `value` is a valid `ows:VersionType`
pub fn is_version(value: &str) -> bool {
    VERSION_REGEX.is_match(value)
}

/// How violations are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Stop at the first violation
    #[default]
    Strict,
    /// Collect violations up to the diagnostic limit
    Lax,
}

/// Validator for trees of OWS 1.1 objects
#[derive(Debug, Clone, Default)]
pub struct Ows11Validator {
    limits: Limits,
    mode: ValidationMode,
}

impl Ows11Validator {
    /// Validator with default limits, in strict mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the walk and diagnostic limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the reporting mode
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Configured limits
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Configured mode
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Validate the tree rooted at `root`.
    ///
    /// Returns the first violation as [`Error::Validation`]. Walk limits
    /// surface as [`Error::LimitExceeded`].
    pub fn validate(&self, root: &ObjectRef) -> Result<()> {
        match self.collect(root, 1)?.into_iter().next() {
            Some(error) => Err(Error::Validation(error)),
            None => Ok(()),
        }
    }

    /// Whether the tree rooted at `root` has no violations
    pub fn is_valid(&self, root: &ObjectRef) -> bool {
        matches!(self.validate(root), Ok(()))
    }

    /// Every violation in the tree, in document order.
    ///
    /// In strict mode at most one violation is returned.
    pub fn iter_errors(&self, root: &ObjectRef) -> Result<Vec<ValidationError>> {
        let cap = match self.mode {
            ValidationMode::Strict => 1,
            ValidationMode::Lax => self.limits.max_diagnostics,
        };
        self.collect(root, cap)
    }

    fn collect(&self, root: &ObjectRef, cap: usize) -> Result<Vec<ValidationError>> {
        let mut objects = vec![root.clone()];
        objects.extend(root.all_contents_with(&self.limits)?);

        let mut errors = Vec::new();
        for object in &objects {
            self.check_object(object, &mut errors);
            if errors.len() >= cap || !self.limits.allows_diagnostic(errors.len()) {
                errors.truncate(cap);
                break;
            }
        }
        debug!(
            root = root.class().name,
            objects = objects.len(),
            errors = errors.len(),
            "validated containment tree"
        );
        Ok(errors)
    }

    fn check_object(&self, object: &ObjectRef, errors: &mut Vec<ValidationError>) {
        let class = object.class();
        for feature in class.features() {
            let Ok(value) = object.get(feature.id) else {
                continue;
            };
            let values = match value {
                Value::Null => Vec::new(),
                Value::Group(map) => map.entries().into_iter().map(|e| e.into_value()).collect(),
                many @ (Value::Values(_) | Value::Objects(_) | Value::View(_) | Value::Many(_)) => {
                    many.into_elements().unwrap_or_default()
                }
                single => vec![single],
            };

            let count = values.len();
            if feature.occurs.is_missing(count) {
                let message = if count == 0 {
                    format!("missing required feature '{}'", feature.name)
                } else {
                    format!(
                        "feature '{}' holds {} value(s), at least {} required",
                        feature.name, count, feature.occurs.min
                    )
                };
                errors.push(self.error(object, feature, message).with_reason(format!(
                    "multiplicity is {}",
                    feature.occurs
                )));
            } else if feature.occurs.is_exceeded(count) {
                errors.push(
                    self.error(
                        object,
                        feature,
                        format!("feature '{}' holds too many values ({})", feature.name, count),
                    )
                    .with_reason(format!("multiplicity is {}", feature.occurs)),
                );
            }

            if let Some(data_type) = feature.data_type() {
                for value in &values {
                    if let Some(error) = self.check_lexical(object, feature, data_type, value) {
                        errors.push(error);
                    }
                }
            }
        }

        if class.conforms_to(WGS84_BOUNDING_BOX) {
            for id in [bounding_box_type::LOWER_CORNER, bounding_box_type::UPPER_CORNER] {
                let Ok(feature) = object.feature(id) else {
                    continue;
                };
                if let Ok(Value::Positions(corner)) = object.get(id) {
                    if corner.len() != 2 {
                        errors.push(
                            self.error(
                                object,
                                feature,
                                format!(
                                    "WGS84 corner '{}' has {} coordinate(s)",
                                    feature.name,
                                    corner.len()
                                ),
                            )
                            .with_reason("PositionType2D requires exactly 2 coordinates"),
                        );
                    }
                }
            }
        }
    }

    fn check_lexical(
        &self,
        object: &ObjectRef,
        feature: &'static FeatureDescriptor,
        data_type: DataType,
        value: &Value,
    ) -> Option<ValidationError> {
        let reason = match (data_type, value) {
            (DataType::MimeType, Value::String(s)) if !is_mime_type(s) => {
                format!("'{}' does not match {}", s, MIME_TYPE_PATTERN)
            }
            (DataType::VersionType, Value::String(s)) if !is_version(s) => {
                format!("'{}' does not match {}", s, VERSION_PATTERN)
            }
            (DataType::PositiveInteger, Value::Integer(n)) if n.sign() != Sign::Plus => {
                format!("{} is not greater than zero", n)
            }
            _ => return None,
        };
        Some(
            self.error(
                object,
                feature,
                format!("invalid {} value for '{}'", data_type.name(), feature.name),
            )
            .with_reason(reason),
        )
    }

    fn error(
        &self,
        object: &ObjectRef,
        feature: &'static FeatureDescriptor,
        message: String,
    ) -> ValidationError {
        ValidationError::new(message)
            .with_path(object.uri_fragment())
            .with_class(object.class().name)
            .with_feature(feature.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ows11::features::*;
    use crate::ows11::types::*;
    use num_bigint::BigInt;

    fn bbox() -> BoundingBoxType {
        let bbox = BoundingBoxType::new();
        bbox.set_lower_corner(vec![0.0, 0.0]);
        bbox.set_upper_corner(vec![10.0, 10.0]);
        bbox
    }

    #[test]
    fn test_patterns() {
        assert!(is_mime_type("text/xml"));
        assert!(is_mime_type("text/xml; subtype=gml/3.1.1"));
        assert!(!is_mime_type("xml"));
        assert!(!is_mime_type("font/woff"));

        assert!(is_version("1.1.0"));
        assert!(is_version("10.12.99"));
        assert!(!is_version("1.1"));
        assert!(!is_version("1.100.0"));
    }

    #[test]
    fn test_valid_bounding_box() {
        assert!(Ows11Validator::new().is_valid(&bbox()));
    }

    #[test]
    fn test_missing_required_feature() {
        let bbox = BoundingBoxType::new();
        bbox.set_lower_corner(vec![0.0, 0.0]);
        let err = Ows11Validator::new().validate(&bbox).unwrap_err();
        let Error::Validation(error) = err else {
            panic!("expected a validation error, got {:?}", err);
        };
        assert_eq!(error.feature, Some("upperCorner"));
        assert_eq!(error.class, Some("BoundingBoxType"));
        assert_eq!(error.path.as_deref(), Some("/"));
    }

    #[test]
    fn test_lower_bound_of_list() {
        let metadata = OperationsMetadataType::new();
        let operation = OperationType::new();
        operation.set_name("GetCapabilities");
        metadata.operation().push(&operation).unwrap();

        let errors = Ows11Validator::new()
            .with_mode(ValidationMode::Lax)
            .iter_errors(&metadata)
            .unwrap();
        let features: Vec<_> = errors.iter().map(|e| e.feature).collect();
        assert_eq!(features, vec![Some("operation"), Some("dCP")]);
        assert_eq!(errors[1].path.as_deref(), Some("//@operation.0"));
    }

    #[test]
    fn test_lexical_checks() {
        let bbox = bbox();
        bbox.set_dimensions(BigInt::from(0));
        let request = GetResourceByIdType::new();
        request.set_service("WPS");
        request.set_version("1.1");
        request.set_output_format("text/xml");

        let validator = Ows11Validator::new().with_mode(ValidationMode::Lax);
        let errors = validator.iter_errors(&bbox).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].feature, Some("dimensions"));

        let errors = validator.iter_errors(&request).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].feature, Some("version"));
        assert!(errors[0].reason.as_deref().unwrap().contains("'1.1'"));
    }

    #[test]
    fn test_wgs84_corners() {
        let bbox = WGS84BoundingBoxType::new();
        bbox.set_lower_corner(vec![-180.0, -90.0, 0.0]);
        bbox.set_upper_corner(vec![180.0, 90.0]);
        let errors = Ows11Validator::new()
            .with_mode(ValidationMode::Lax)
            .iter_errors(&bbox)
            .unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].feature, Some("lowerCorner"));

        // A plain bounding box may carry any number of coordinates.
        let plain = BoundingBoxType::new();
        plain.set_lower_corner(vec![0.0, 0.0, 0.0]);
        plain.set_upper_corner(vec![1.0, 1.0, 1.0]);
        assert!(Ows11Validator::new().is_valid(&plain));
    }

    #[test]
    fn test_group_multiplicity() {
        let group = ReferenceGroupType::new();
        let errors = Ows11Validator::new()
            .with_mode(ValidationMode::Lax)
            .iter_errors(&group)
            .unwrap();
        let features: Vec<_> = errors.iter().map(|e| e.feature).collect();
        assert_eq!(
            features,
            vec![Some("abstractReferenceBaseGroup"), Some("abstractReferenceBase")]
        );

        let reference = ReferenceType::new();
        reference.set_href("http://example.com/data.xml");
        let base = AbstractReferenceBaseType::from_object(reference.clone().into_object()).unwrap();
        group.abstract_reference_base().push(&base).unwrap();
        assert!(Ows11Validator::new().is_valid(&group));
        assert_eq!(
            group.get(reference_group_type::ABSTRACT_REFERENCE_BASE).unwrap().into_elements().unwrap().len(),
            1
        );
    }

    #[test]
    fn test_diagnostic_limit() {
        let limits = Limits {
            max_diagnostics: 2,
            ..Limits::default()
        };
        let report = ExceptionReportType::new();
        for _ in 0..3 {
            report.exception().push(&ExceptionType::new()).unwrap();
        }
        let errors = Ows11Validator::new()
            .with_limits(limits)
            .with_mode(ValidationMode::Lax)
            .iter_errors(&report)
            .unwrap();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_depth_limit() {
        let limits = Limits {
            max_containment_depth: 1,
            ..Limits::default()
        };
        let outer = DatasetDescriptionSummaryBaseType::new();
        let inner = DatasetDescriptionSummaryBaseType::new();
        let innermost = DatasetDescriptionSummaryBaseType::new();
        inner.dataset_description_summary().push(&innermost).unwrap();
        outer.dataset_description_summary().push(&inner).unwrap();
        assert!(matches!(
            Ows11Validator::new().with_limits(limits).validate(&outer),
            Err(Error::LimitExceeded(_))
        ));
    }
}

//! Feature id constants
//!
//! One module per class. Subclass modules re-export their supertype's
//! constants, so `basic_identification_type::TITLE` and
//! `description_type::TITLE` are the same id. The values mirror the
//! declaration order in `package`; `tests::test_ids_match_registry` keeps the
//! two in step.

/// Feature ids of `AbstractReferenceBaseType`
pub mod abstract_reference_base_type {
    /// `actuate`
    pub const ACTUATE: usize = 0;
    /// `arcrole`
    pub const ARCROLE: usize = 1;
    /// `href`
    pub const HREF: usize = 2;
    /// `role`
    pub const ROLE: usize = 3;
    /// `show`
    pub const SHOW: usize = 4;
    /// `title`
    pub const TITLE: usize = 5;
    /// `type`
    pub const TYPE: usize = 6;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 7;
}

/// Feature ids of `AcceptFormatsType`
pub mod accept_formats_type {
    /// `outputFormat`
    pub const OUTPUT_FORMAT: usize = 0;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 1;
}

/// Feature ids of `AcceptVersionsType`
pub mod accept_versions_type {
    /// `version`
    pub const VERSION: usize = 0;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 1;
}

/// Feature ids of `AddressType`
pub mod address_type {
    /// `deliveryPoint`
    pub const DELIVERY_POINT: usize = 0;
    /// `city`
    pub const CITY: usize = 1;
    /// `administrativeArea`
    pub const ADMINISTRATIVE_AREA: usize = 2;
    /// `postalCode`
    pub const POSTAL_CODE: usize = 3;
    /// `country`
    pub const COUNTRY: usize = 4;
    /// `electronicMailAddress`
    pub const ELECTRONIC_MAIL_ADDRESS: usize = 5;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 6;
}

/// Feature ids of `AllowedValuesType`
pub mod allowed_values_type {
    /// `group`
    pub const GROUP: usize = 0;
    /// `value`
    pub const VALUE: usize = 1;
    /// `range`
    pub const RANGE: usize = 2;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 3;
}

/// Feature ids of `AnyValueType`
pub mod any_value_type {
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 0;
}

/// Feature ids of `BasicIdentificationType`
pub mod basic_identification_type {
    pub use super::description_type::*;

    /// `identifier`
    pub const IDENTIFIER: usize = 3;
    /// `metadata`
    pub const METADATA: usize = 4;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 5;
}

/// Feature ids of `BoundingBoxType`
pub mod bounding_box_type {
    /// `lowerCorner`
    pub const LOWER_CORNER: usize = 0;
    /// `upperCorner`
    pub const UPPER_CORNER: usize = 1;
    /// `crs`
    pub const CRS: usize = 2;
    /// `dimensions`
    pub const DIMENSIONS: usize = 3;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 4;
}

/// Feature ids of `CapabilitiesBaseType`
pub mod capabilities_base_type {
    /// `serviceIdentification`
    pub const SERVICE_IDENTIFICATION: usize = 0;
    /// `serviceProvider`
    pub const SERVICE_PROVIDER: usize = 1;
    /// `operationsMetadata`
    pub const OPERATIONS_METADATA: usize = 2;
    /// `updateSequence`
    pub const UPDATE_SEQUENCE: usize = 3;
    /// `version`
    pub const VERSION: usize = 4;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 5;
}

/// Feature ids of `CodeType`
pub mod code_type {
    /// `value`
    pub const VALUE: usize = 0;
    /// `codeSpace`
    pub const CODE_SPACE: usize = 1;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 2;
}

/// Feature ids of `ContactType`
pub mod contact_type {
    /// `phone`
    pub const PHONE: usize = 0;
    /// `address`
    pub const ADDRESS: usize = 1;
    /// `onlineResource`
    pub const ONLINE_RESOURCE: usize = 2;
    /// `hoursOfService`
    pub const HOURS_OF_SERVICE: usize = 3;
    /// `contactInstructions`
    pub const CONTACT_INSTRUCTIONS: usize = 4;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 5;
}

/// Feature ids of `ContentsBaseType`
pub mod contents_base_type {
    /// `datasetDescriptionSummary`
    pub const DATASET_DESCRIPTION_SUMMARY: usize = 0;
    /// `otherSource`
    pub const OTHER_SOURCE: usize = 1;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 2;
}

/// Feature ids of `DatasetDescriptionSummaryBaseType`
pub mod dataset_description_summary_base_type {
    pub use super::description_type::*;

    /// `wGS84BoundingBox`
    pub const W_GS84_BOUNDING_BOX: usize = 3;
    /// `identifier`
    pub const IDENTIFIER: usize = 4;
    /// `boundingBoxGroup`
    pub const BOUNDING_BOX_GROUP: usize = 5;
    /// `boundingBox`
    pub const BOUNDING_BOX: usize = 6;
    /// `metadata`
    pub const METADATA: usize = 7;
    /// `datasetDescriptionSummary`
    pub const DATASET_DESCRIPTION_SUMMARY: usize = 8;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 9;
}

/// Feature ids of `DCPType`
pub mod dcp_type {
    /// `hTTP`
    pub const H_TTP: usize = 0;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 1;
}

/// Feature ids of `DescriptionType`
pub mod description_type {
    /// `title`
    pub const TITLE: usize = 0;
    /// `abstract`
    pub const ABSTRACT: usize = 1;
    /// `keywords`
    pub const KEYWORDS: usize = 2;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 3;
}

/// Feature ids of `DomainMetadataType`
pub mod domain_metadata_type {
    /// `value`
    pub const VALUE: usize = 0;
    /// `reference`
    pub const REFERENCE: usize = 1;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 2;
}

/// Feature ids of `DomainType`
pub mod domain_type {
    pub use super::un_named_domain_type::*;

    /// `name`
    pub const NAME: usize = 10;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 11;
}

/// Feature ids of `ExceptionReportType`
pub mod exception_report_type {
    /// `exception`
    pub const EXCEPTION: usize = 0;
    /// `lang`
    pub const LANG: usize = 1;
    /// `version`
    pub const VERSION: usize = 2;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 3;
}

/// Feature ids of `ExceptionType`
pub mod exception_type {
    /// `exceptionText`
    pub const EXCEPTION_TEXT: usize = 0;
    /// `exceptionCode`
    pub const EXCEPTION_CODE: usize = 1;
    /// `locator`
    pub const LOCATOR: usize = 2;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 3;
}

/// Feature ids of `GetCapabilitiesType`
pub mod get_capabilities_type {
    /// `acceptVersions`
    pub const ACCEPT_VERSIONS: usize = 0;
    /// `sections`
    pub const SECTIONS: usize = 1;
    /// `acceptFormats`
    pub const ACCEPT_FORMATS: usize = 2;
    /// `updateSequence`
    pub const UPDATE_SEQUENCE: usize = 3;
    /// `baseUrl`
    pub const BASE_URL: usize = 4;
    /// `namespace`
    pub const NAMESPACE: usize = 5;
    /// `extendedProperties`
    pub const EXTENDED_PROPERTIES: usize = 6;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 7;
}

/// Feature ids of `GetResourceByIdType`
pub mod get_resource_by_id_type {
    /// `resourceID`
    pub const RESOURCE_ID: usize = 0;
    /// `outputFormat`
    pub const OUTPUT_FORMAT: usize = 1;
    /// `service`
    pub const SERVICE: usize = 2;
    /// `version`
    pub const VERSION: usize = 3;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 4;
}

/// Feature ids of `HTTPType`
pub mod http_type {
    /// `group`
    pub const GROUP: usize = 0;
    /// `get`
    pub const GET: usize = 1;
    /// `post`
    pub const POST: usize = 2;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 3;
}

/// Feature ids of `IdentificationType`
pub mod identification_type {
    pub use super::basic_identification_type::*;

    /// `boundingBoxGroup`
    pub const BOUNDING_BOX_GROUP: usize = 5;
    /// `boundingBox`
    pub const BOUNDING_BOX: usize = 6;
    /// `outputFormat`
    pub const OUTPUT_FORMAT: usize = 7;
    /// `availableCRSGroup`
    pub const AVAILABLE_CRS_GROUP: usize = 8;
    /// `availableCRS`
    pub const AVAILABLE_CRS: usize = 9;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 10;
}

/// Feature ids of `KeywordsType`
pub mod keywords_type {
    /// `keyword`
    pub const KEYWORD: usize = 0;
    /// `type`
    pub const TYPE: usize = 1;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 2;
}

/// Feature ids of `LanguageStringType`
pub mod language_string_type {
    /// `value`
    pub const VALUE: usize = 0;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 1;
}

/// Feature ids of `ManifestType`
pub mod manifest_type {
    pub use super::basic_identification_type::*;

    /// `referenceGroup`
    pub const REFERENCE_GROUP: usize = 5;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 6;
}

/// Feature ids of `MetadataType`
pub mod metadata_type {
    /// `abstractMetaDataGroup`
    pub const ABSTRACT_META_DATA_GROUP: usize = 0;
    /// `abstractMetaData`
    pub const ABSTRACT_META_DATA: usize = 1;
    /// `about`
    pub const ABOUT: usize = 2;
    /// `title`
    pub const TITLE: usize = 3;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 4;
}

/// Feature ids of `NoValuesType`
pub mod no_values_type {
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 0;
}

/// Feature ids of `OnlineResourceType`
pub mod online_resource_type {
    /// `href`
    pub const HREF: usize = 0;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 1;
}

/// Feature ids of `OperationsMetadataType`
pub mod operations_metadata_type {
    /// `operation`
    pub const OPERATION: usize = 0;
    /// `parameter`
    pub const PARAMETER: usize = 1;
    /// `constraint`
    pub const CONSTRAINT: usize = 2;
    /// `extendedCapabilities`
    pub const EXTENDED_CAPABILITIES: usize = 3;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 4;
}

/// Feature ids of `OperationType`
pub mod operation_type {
    /// `dCP`
    pub const D_CP: usize = 0;
    /// `parameter`
    pub const PARAMETER: usize = 1;
    /// `constraint`
    pub const CONSTRAINT: usize = 2;
    /// `metadata`
    pub const METADATA: usize = 3;
    /// `name`
    pub const NAME: usize = 4;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 5;
}

/// Feature ids of `RangeType`
pub mod range_type {
    /// `minimumValue`
    pub const MINIMUM_VALUE: usize = 0;
    /// `maximumValue`
    pub const MAXIMUM_VALUE: usize = 1;
    /// `spacing`
    pub const SPACING: usize = 2;
    /// `rangeClosure`
    pub const RANGE_CLOSURE: usize = 3;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 4;
}

/// Feature ids of `ReferenceGroupType`
pub mod reference_group_type {
    pub use super::basic_identification_type::*;

    /// `abstractReferenceBaseGroup`
    pub const ABSTRACT_REFERENCE_BASE_GROUP: usize = 5;
    /// `abstractReferenceBase`
    pub const ABSTRACT_REFERENCE_BASE: usize = 6;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 7;
}

/// Feature ids of `ReferenceType`
pub mod reference_type {
    pub use super::abstract_reference_base_type::*;

    /// `identifier`
    pub const IDENTIFIER: usize = 7;
    /// `abstract`
    pub const ABSTRACT: usize = 8;
    /// `format`
    pub const FORMAT: usize = 9;
    /// `metadata`
    pub const METADATA: usize = 10;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 11;
}

/// Feature ids of `RequestMethodType`
pub mod request_method_type {
    pub use super::online_resource_type::*;

    /// `constraint`
    pub const CONSTRAINT: usize = 1;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 2;
}

/// Feature ids of `ResponsiblePartySubsetType`
pub mod responsible_party_subset_type {
    /// `individualName`
    pub const INDIVIDUAL_NAME: usize = 0;
    /// `positionName`
    pub const POSITION_NAME: usize = 1;
    /// `contactInfo`
    pub const CONTACT_INFO: usize = 2;
    /// `role`
    pub const ROLE: usize = 3;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 4;
}

/// Feature ids of `ResponsiblePartyType`
pub mod responsible_party_type {
    /// `individualName`
    pub const INDIVIDUAL_NAME: usize = 0;
    /// `organisationName`
    pub const ORGANISATION_NAME: usize = 1;
    /// `positionName`
    pub const POSITION_NAME: usize = 2;
    /// `contactInfo`
    pub const CONTACT_INFO: usize = 3;
    /// `role`
    pub const ROLE: usize = 4;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 5;
}

/// Feature ids of `SectionsType`
pub mod sections_type {
    /// `section`
    pub const SECTION: usize = 0;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 1;
}

/// Feature ids of `ServiceIdentificationType`
pub mod service_identification_type {
    pub use super::description_type::*;

    /// `serviceType`
    pub const SERVICE_TYPE: usize = 3;
    /// `serviceTypeVersion`
    pub const SERVICE_TYPE_VERSION: usize = 4;
    /// `profile`
    pub const PROFILE: usize = 5;
    /// `fees`
    pub const FEES: usize = 6;
    /// `accessConstraints`
    pub const ACCESS_CONSTRAINTS: usize = 7;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 8;
}

/// Feature ids of `ServiceProviderType`
pub mod service_provider_type {
    /// `providerName`
    pub const PROVIDER_NAME: usize = 0;
    /// `providerSite`
    pub const PROVIDER_SITE: usize = 1;
    /// `serviceContact`
    pub const SERVICE_CONTACT: usize = 2;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 3;
}

/// Feature ids of `ServiceReferenceType`
pub mod service_reference_type {
    pub use super::reference_type::*;

    /// `requestMessage`
    pub const REQUEST_MESSAGE: usize = 11;
    /// `requestMessageReference`
    pub const REQUEST_MESSAGE_REFERENCE: usize = 12;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 13;
}

/// Feature ids of `TelephoneType`
pub mod telephone_type {
    /// `voice`
    pub const VOICE: usize = 0;
    /// `facsimile`
    pub const FACSIMILE: usize = 1;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 2;
}

/// Feature ids of `UnNamedDomainType`
pub mod un_named_domain_type {
    /// `allowedValues`
    pub const ALLOWED_VALUES: usize = 0;
    /// `anyValue`
    pub const ANY_VALUE: usize = 1;
    /// `noValues`
    pub const NO_VALUES: usize = 2;
    /// `valuesReference`
    pub const VALUES_REFERENCE: usize = 3;
    /// `defaultValue`
    pub const DEFAULT_VALUE: usize = 4;
    /// `meaning`
    pub const MEANING: usize = 5;
    /// `dataType`
    pub const DATA_TYPE: usize = 6;
    /// `uOM`
    pub const U_OM: usize = 7;
    /// `referenceSystem`
    pub const REFERENCE_SYSTEM: usize = 8;
    /// `metadata`
    pub const METADATA: usize = 9;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 10;
}

/// Feature ids of `ValuesReferenceType`
pub mod values_reference_type {
    /// `value`
    pub const VALUE: usize = 0;
    /// `reference`
    pub const REFERENCE: usize = 1;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 2;
}

/// Feature ids of `ValueType`
pub mod value_type {
    /// `value`
    pub const VALUE: usize = 0;
    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 1;
}

/// Feature ids of `WGS84BoundingBoxType`
pub mod wgs84_bounding_box_type {
    pub use super::bounding_box_type::*;

    /// Number of features, inherited ones included
    pub const FEATURE_COUNT: usize = 4;
}

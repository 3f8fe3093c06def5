//! Typed wrappers over the OWS 1.1 classes
//!
//! Each wrapper is a newtype around [`ObjectRef`] whose accessors forward to
//! the reflective surface with the feature ids from `ows11::features`. Reads
//! and writes through a wrapper are indistinguishable from the generic
//! `get`/`set` calls: same storage, same notifications.
//!
//! Features declared on an abstract or shared supertype are exposed through
//! a trait (`DescriptionFeatures`, `BoundingBoxFeatures`, ...) so every
//! subtype wrapper gets them at the same ids.

use std::marker::PhantomData;
use std::ops::Deref;

use indexmap::IndexMap;
use num_bigint::BigInt;

use super::features::*;
use super::package;
use crate::error::{Error, Result};
use crate::metadata::{ClassDescriptor, FeatureId, RangeClosure};
use crate::object::{FeatureMap, FeatureMapView, ObjectList, ObjectRef};
use crate::value::Value;

/// Common surface of the typed wrappers
pub trait ModelObject: Sized {
    /// Class name in the OWS 1.1 registry
    const CLASS: &'static str;

    /// The wrapped object
    fn object(&self) -> &ObjectRef;

    /// Wrap without a class check
    #[doc(hidden)]
    fn wrap(object: ObjectRef) -> Self;

    /// Descriptor of the wrapped class
    fn descriptor() -> &'static ClassDescriptor {
        class_descriptor(Self::CLASS)
    }

    /// Wrap `object` if its class conforms to this wrapper's class
    fn cast(object: ObjectRef) -> Result<Self> {
        if object.class().conforms_to(Self::CLASS) {
            Ok(Self::wrap(object))
        } else {
            Err(Error::ClassMismatch {
                expected: Self::CLASS,
                found: object.class().name,
            })
        }
    }
}

fn class_descriptor(name: &str) -> &'static ClassDescriptor {
    package()
        .class(name)
        .expect("every wrapper names a class of the OWS 1.1 table")
}

fn object_value<T: ModelObject>(value: Option<&T>) -> Value {
    value
        .map(|v| Value::Object(v.object().clone()))
        .unwrap_or(Value::Null)
}

fn read(object: &ObjectRef, id: FeatureId) -> Value {
    object.get(id).unwrap_or(Value::Null)
}

fn write(object: &ObjectRef, id: FeatureId, value: Value) {
    object.store_attribute(object.descriptor(id), value);
}

fn list_of<T>(object: &ObjectRef, id: FeatureId) -> Children<T> {
    Children {
        list: ObjectList::new(object.clone(), object.descriptor(id)),
        marker: PhantomData,
    }
}

fn members_of<T>(object: &ObjectRef, id: FeatureId) -> Members<T> {
    Members {
        view: object.member_view(id),
        marker: PhantomData,
    }
}

fn not_an_object(feature: &'static str, value: &Value) -> Error {
    Error::Value(format!(
        "{} held a {} where an object was expected",
        feature,
        value.kind_name()
    ))
}

/// Typed live handle on a containment list
#[derive(Debug, Clone, PartialEq)]
pub struct Children<T> {
    list: ObjectList,
    marker: PhantomData<T>,
}

impl<T: ModelObject> Children<T> {
    /// Untyped handle
    pub fn as_list(&self) -> &ObjectList {
        &self.list
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Child at `index`
    pub fn get(&self, index: usize) -> Option<T> {
        self.list.get(index).map(T::wrap)
    }

    /// Snapshot of the children
    pub fn to_vec(&self) -> Vec<T> {
        self.list.to_vec().into_iter().map(T::wrap).collect()
    }

    /// Iterate over a snapshot of the children
    pub fn iter(&self) -> impl Iterator<Item = T> {
        self.to_vec().into_iter()
    }

    /// Whether `child` is in the list
    pub fn contains(&self, child: &T) -> bool {
        self.list.contains(child.object())
    }

    /// Append `child`, taking it from its current container
    pub fn push(&self, child: &T) -> Result<bool> {
        self.list.push(child.object())
    }

    /// Insert `child` at `index`
    pub fn insert(&self, index: usize, child: &T) -> Result<bool> {
        self.list.insert(index, child.object())
    }

    /// Remove and return the child at `index`
    pub fn remove(&self, index: usize) -> Result<T> {
        self.list.remove(index).map(T::wrap)
    }

    /// Remove every child
    pub fn clear(&self) {
        self.list.clear()
    }
}

/// Typed live view of a many-valued group member
#[derive(Debug, Clone, PartialEq)]
pub struct Members<T> {
    view: FeatureMapView,
    marker: PhantomData<T>,
}

impl<T: ModelObject> Members<T> {
    /// Untyped view
    pub fn as_view(&self) -> &FeatureMapView {
        &self.view
    }

    /// Backing feature map
    pub fn map(&self) -> &FeatureMap {
        self.view.map()
    }

    /// Number of entries for the member
    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Whether the member has no entries
    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// Object at `index` within the member
    pub fn get(&self, index: usize) -> Option<T> {
        self.view.get(index).and_then(Value::into_object).map(T::wrap)
    }

    /// Snapshot of the member's objects
    pub fn to_vec(&self) -> Vec<T> {
        self.view.objects().into_iter().map(T::wrap).collect()
    }

    /// Iterate over a snapshot of the member's objects
    pub fn iter(&self) -> impl Iterator<Item = T> {
        self.to_vec().into_iter()
    }

    /// Whether `child` is held by the member
    pub fn contains(&self, child: &T) -> bool {
        self.view.contains(child.object())
    }

    /// Append `child` after the last entry of the group
    pub fn push(&self, child: &T) -> Result<bool> {
        self.view.push(child.object())
    }

    /// Remove and return the member's object at `index`
    pub fn remove(&self, index: usize) -> Result<T> {
        let value = self.view.remove(index)?;
        match value {
            Value::Object(object) => Ok(T::wrap(object)),
            other => Err(not_an_object(self.view.feature().name, &other)),
        }
    }

    /// Remove every entry of the member, leaving other members in place
    pub fn clear(&self) {
        self.view.clear()
    }
}

macro_rules! accessors {
    ([$($vis:tt)*]) => {};
    ([$($vis:tt)*] text $get:ident $set:ident = $id:expr; $($rest:tt)*) => {
        #[doc = concat!("`", stringify!($get), "` value")]
        $($vis)* fn $get(&self) -> Option<String> {
            read(self.object(), $id).into_string()
        }
        #[doc = concat!("Set `", stringify!($get), "`")]
        $($vis)* fn $set(&self, value: impl Into<String>) {
            write(self.object(), $id, Value::String(value.into()))
        }
        accessors!([$($vis)*] $($rest)*);
    };
    ([$($vis:tt)*] position $get:ident $set:ident = $id:expr; $($rest:tt)*) => {
        #[doc = concat!("`", stringify!($get), "` coordinates")]
        $($vis)* fn $get(&self) -> Option<Vec<f64>> {
            read(self.object(), $id).into_positions()
        }
        #[doc = concat!("Set `", stringify!($get), "`")]
        $($vis)* fn $set(&self, value: Vec<f64>) {
            write(self.object(), $id, Value::Positions(value))
        }
        accessors!([$($vis)*] $($rest)*);
    };
    ([$($vis:tt)*] integer $get:ident $set:ident = $id:expr; $($rest:tt)*) => {
        #[doc = concat!("`", stringify!($get), "` value")]
        $($vis)* fn $get(&self) -> Option<BigInt> {
            read(self.object(), $id).into_integer()
        }
        #[doc = concat!("Set `", stringify!($get), "`")]
        $($vis)* fn $set(&self, value: BigInt) {
            write(self.object(), $id, Value::Integer(value))
        }
        accessors!([$($vis)*] $($rest)*);
    };
    ([$($vis:tt)*] closure $get:ident $set:ident = $id:expr; $($rest:tt)*) => {
        #[doc = concat!("`", stringify!($get), "`, `closed` when unset")]
        $($vis)* fn $get(&self) -> RangeClosure {
            read(self.object(), $id).into_range_closure().unwrap_or_default()
        }
        #[doc = concat!("Set `", stringify!($get), "`")]
        $($vis)* fn $set(&self, value: RangeClosure) {
            write(self.object(), $id, Value::RangeClosure(value))
        }
        accessors!([$($vis)*] $($rest)*);
    };
    ([$($vis:tt)*] map $get:ident $set:ident = $id:expr; $($rest:tt)*) => {
        #[doc = concat!("`", stringify!($get), "` entries")]
        $($vis)* fn $get(&self) -> Option<IndexMap<String, String>> {
            read(self.object(), $id).into_map()
        }
        #[doc = concat!("Set `", stringify!($get), "`")]
        $($vis)* fn $set(&self, value: IndexMap<String, String>) {
            write(self.object(), $id, Value::Map(value))
        }
        accessors!([$($vis)*] $($rest)*);
    };
    ([$($vis:tt)*] opaque $get:ident $set:ident = $id:expr; $($rest:tt)*) => {
        #[doc = concat!("`", stringify!($get), "` payload")]
        $($vis)* fn $get(&self) -> Option<serde_json::Value> {
            read(self.object(), $id).into_opaque()
        }
        #[doc = concat!("Set `", stringify!($get), "`")]
        $($vis)* fn $set(&self, value: serde_json::Value) {
            write(self.object(), $id, Value::Opaque(value))
        }
        accessors!([$($vis)*] $($rest)*);
    };
    ([$($vis:tt)*] child $get:ident $set:ident: $ty:ident = $id:expr; $($rest:tt)*) => {
        #[doc = concat!("Contained `", stringify!($get), "`")]
        $($vis)* fn $get(&self) -> Option<$ty> {
            read(self.object(), $id).into_object().map(<$ty as ModelObject>::wrap)
        }
        #[doc = concat!("Replace `", stringify!($get), "`, taking the new child from its container")]
        $($vis)* fn $set(&self, value: Option<&$ty>) -> Result<()> {
            self.object().set($id, object_value(value))
        }
        accessors!([$($vis)*] $($rest)*);
    };
    ([$($vis:tt)*] object $get:ident $set:ident = $id:expr; $($rest:tt)*) => {
        #[doc = concat!("Contained `", stringify!($get), "` of any class")]
        $($vis)* fn $get(&self) -> Option<ObjectRef> {
            read(self.object(), $id).into_object()
        }
        #[doc = concat!("Replace `", stringify!($get), "`")]
        $($vis)* fn $set(&self, value: Option<&ObjectRef>) -> Result<()> {
            self.object().set($id, value.map(Value::from).unwrap_or(Value::Null))
        }
        accessors!([$($vis)*] $($rest)*);
    };
    ([$($vis:tt)*] children $get:ident: $ty:ident = $id:expr; $($rest:tt)*) => {
        #[doc = concat!("Live `", stringify!($get), "` list")]
        $($vis)* fn $get(&self) -> Children<$ty> {
            list_of(self.object(), $id)
        }
        accessors!([$($vis)*] $($rest)*);
    };
    ([$($vis:tt)*] group $get:ident = $id:expr; $($rest:tt)*) => {
        #[doc = concat!("Live `", stringify!($get), "` feature map")]
        $($vis)* fn $get(&self) -> FeatureMap {
            let object = self.object();
            FeatureMap::new(object.clone(), object.descriptor($id))
        }
        accessors!([$($vis)*] $($rest)*);
    };
    ([$($vis:tt)*] members $get:ident: $ty:ident = $id:expr; $($rest:tt)*) => {
        #[doc = concat!("Live view of the `", stringify!($get), "` entries")]
        $($vis)* fn $get(&self) -> Members<$ty> {
            members_of(self.object(), $id)
        }
        accessors!([$($vis)*] $($rest)*);
    };
    ([$($vis:tt)*] text_member $get:ident $set:ident = $id:expr; $($rest:tt)*) => {
        #[doc = concat!("`", stringify!($get), "` entry of its group")]
        $($vis)* fn $get(&self) -> Option<String> {
            read(self.object(), $id).into_string()
        }
        #[doc = concat!("Set the `", stringify!($get), "` entry")]
        $($vis)* fn $set(&self, value: impl Into<String>) -> Result<()> {
            self.object().set($id, Value::String(value.into()))
        }
        accessors!([$($vis)*] $($rest)*);
    };
}

macro_rules! model_class {
    ($(#[$meta:meta])* $name:ident { $($body:tt)* } $(impl $($feature:ident),+)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(ObjectRef);

        impl ModelObject for $name {
            const CLASS: &'static str = stringify!($name);

            fn object(&self) -> &ObjectRef {
                &self.0
            }

            fn wrap(object: ObjectRef) -> Self {
                Self(object)
            }
        }

        impl $name {
            /// Create an empty, uncontained instance
            pub fn new() -> Self {
                Self(ObjectRef::new(<Self as ModelObject>::descriptor()))
            }

            /// Wrap a generic object, checking its class
            pub fn from_object(object: ObjectRef) -> Result<Self> {
                <Self as ModelObject>::cast(object)
            }

            /// Unwrap into the generic handle
            pub fn into_object(self) -> ObjectRef {
                self.0
            }

            accessors!([pub] $($body)*);
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Deref for $name {
            type Target = ObjectRef;

            fn deref(&self) -> &ObjectRef {
                &self.0
            }
        }

        impl From<$name> for ObjectRef {
            fn from(value: $name) -> ObjectRef {
                value.0
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Value {
                Value::Object(value.0)
            }
        }

        impl From<&$name> for Value {
            fn from(value: &$name) -> Value {
                Value::Object(value.0.clone())
            }
        }

        $($(impl $feature for $name {})+)?
    };
}

/// Features of `DescriptionType`
pub trait DescriptionFeatures: ModelObject {
    accessors!([]
        children title: LanguageStringType = description_type::TITLE;
        children abstracts: LanguageStringType = description_type::ABSTRACT;
        children keywords: KeywordsType = description_type::KEYWORDS;
    );
}

/// Features of `BasicIdentificationType`
pub trait BasicIdentificationFeatures: DescriptionFeatures {
    accessors!([]
        child identifier set_identifier: CodeType = basic_identification_type::IDENTIFIER;
        children metadata: MetadataType = basic_identification_type::METADATA;
    );
}

/// Features of `BoundingBoxType`
pub trait BoundingBoxFeatures: ModelObject {
    accessors!([]
        position lower_corner set_lower_corner = bounding_box_type::LOWER_CORNER;
        position upper_corner set_upper_corner = bounding_box_type::UPPER_CORNER;
        text crs set_crs = bounding_box_type::CRS;
        integer dimensions set_dimensions = bounding_box_type::DIMENSIONS;
    );
}

/// Features of `UnNamedDomainType`
pub trait UnNamedDomainFeatures: ModelObject {
    accessors!([]
        child allowed_values set_allowed_values: AllowedValuesType = un_named_domain_type::ALLOWED_VALUES;
        child any_value set_any_value: AnyValueType = un_named_domain_type::ANY_VALUE;
        child no_values set_no_values: NoValuesType = un_named_domain_type::NO_VALUES;
        child values_reference set_values_reference: ValuesReferenceType = un_named_domain_type::VALUES_REFERENCE;
        child default_value set_default_value: ValueType = un_named_domain_type::DEFAULT_VALUE;
        child meaning set_meaning: DomainMetadataType = un_named_domain_type::MEANING;
        child data_type set_data_type: DomainMetadataType = un_named_domain_type::DATA_TYPE;
        child uom set_uom: DomainMetadataType = un_named_domain_type::U_OM;
        child reference_system set_reference_system: DomainMetadataType = un_named_domain_type::REFERENCE_SYSTEM;
        children metadata: MetadataType = un_named_domain_type::METADATA;
    );
}

/// Features of `OnlineResourceType`
pub trait OnlineResourceFeatures: ModelObject {
    accessors!([]
        text href set_href = online_resource_type::HREF;
    );
}

/// XLink features of `AbstractReferenceBaseType`
pub trait ReferenceBaseFeatures: ModelObject {
    accessors!([]
        text actuate set_actuate = abstract_reference_base_type::ACTUATE;
        text arcrole set_arcrole = abstract_reference_base_type::ARCROLE;
        text href set_href = abstract_reference_base_type::HREF;
        text role set_role = abstract_reference_base_type::ROLE;
        text show set_show = abstract_reference_base_type::SHOW;
        text title set_title = abstract_reference_base_type::TITLE;
        text link_type set_link_type = abstract_reference_base_type::TYPE;
    );
}

/// Features of `ReferenceType`
pub trait ReferenceFeatures: ReferenceBaseFeatures {
    accessors!([]
        child identifier set_identifier: CodeType = reference_type::IDENTIFIER;
        children abstracts: LanguageStringType = reference_type::ABSTRACT;
        text format set_format = reference_type::FORMAT;
        children metadata: MetadataType = reference_type::METADATA;
    );
}

model_class! {
    /// XLink reference base, the head of the reference group
    AbstractReferenceBaseType {} impl ReferenceBaseFeatures
}

model_class! {
    /// `AcceptFormats` of a GetCapabilities request
    AcceptFormatsType {
        text output_format set_output_format = accept_formats_type::OUTPUT_FORMAT;
    }
}

model_class! {
    /// `AcceptVersions` of a GetCapabilities request
    AcceptVersionsType {
        text version set_version = accept_versions_type::VERSION;
    }
}

model_class! {
    /// Postal and electronic address
    AddressType {
        text delivery_point set_delivery_point = address_type::DELIVERY_POINT;
        text city set_city = address_type::CITY;
        text administrative_area set_administrative_area = address_type::ADMINISTRATIVE_AREA;
        text postal_code set_postal_code = address_type::POSTAL_CODE;
        text country set_country = address_type::COUNTRY;
        text electronic_mail_address set_electronic_mail_address = address_type::ELECTRONIC_MAIL_ADDRESS;
    }
}

model_class! {
    /// Permitted values as an interleaved sequence of values and ranges
    AllowedValuesType {
        group group = allowed_values_type::GROUP;
        members value: ValueType = allowed_values_type::VALUE;
        members range: RangeType = allowed_values_type::RANGE;
    }
}

model_class! {
    /// Marker: any value is valid
    AnyValueType {}
}

model_class! {
    /// Description plus identifier and metadata
    BasicIdentificationType {} impl DescriptionFeatures, BasicIdentificationFeatures
}

model_class! {
    /// Bounding box in an arbitrary CRS
    BoundingBoxType {} impl BoundingBoxFeatures
}

model_class! {
    /// Shared part of every capabilities document
    CapabilitiesBaseType {
        child service_identification set_service_identification: ServiceIdentificationType = capabilities_base_type::SERVICE_IDENTIFICATION;
        child service_provider set_service_provider: ServiceProviderType = capabilities_base_type::SERVICE_PROVIDER;
        child operations_metadata set_operations_metadata: OperationsMetadataType = capabilities_base_type::OPERATIONS_METADATA;
        text update_sequence set_update_sequence = capabilities_base_type::UPDATE_SEQUENCE;
        text version set_version = capabilities_base_type::VERSION;
    }
}

model_class! {
    /// Name with an optional code space
    CodeType {
        text value set_value = code_type::VALUE;
        text code_space set_code_space = code_type::CODE_SPACE;
    }
}

model_class! {
    /// Contact information for a responsible party
    ContactType {
        child phone set_phone: TelephoneType = contact_type::PHONE;
        child address set_address: AddressType = contact_type::ADDRESS;
        child online_resource set_online_resource: OnlineResourceType = contact_type::ONLINE_RESOURCE;
        text hours_of_service set_hours_of_service = contact_type::HOURS_OF_SERVICE;
        text contact_instructions set_contact_instructions = contact_type::CONTACT_INSTRUCTIONS;
    }
}

model_class! {
    /// Shared part of a capabilities `Contents` section
    ContentsBaseType {
        children dataset_description_summary: DatasetDescriptionSummaryBaseType = contents_base_type::DATASET_DESCRIPTION_SUMMARY;
        children other_source: MetadataType = contents_base_type::OTHER_SOURCE;
    }
}

model_class! {
    /// Summary of one dataset, possibly nested
    DatasetDescriptionSummaryBaseType {
        children wgs84_bounding_box: WGS84BoundingBoxType = dataset_description_summary_base_type::W_GS84_BOUNDING_BOX;
        child identifier set_identifier: CodeType = dataset_description_summary_base_type::IDENTIFIER;
        group bounding_box_group = dataset_description_summary_base_type::BOUNDING_BOX_GROUP;
        members bounding_box: BoundingBoxType = dataset_description_summary_base_type::BOUNDING_BOX;
        children metadata: MetadataType = dataset_description_summary_base_type::METADATA;
        children dataset_description_summary: DatasetDescriptionSummaryBaseType = dataset_description_summary_base_type::DATASET_DESCRIPTION_SUMMARY;
    } impl DescriptionFeatures
}

model_class! {
    /// Distributed computing platform of an operation
    #[allow(clippy::upper_case_acronyms)]
    DCPType {
        child http set_http: HTTPType = dcp_type::H_TTP;
    }
}

model_class! {
    /// Titles, abstracts and keywords
    DescriptionType {} impl DescriptionFeatures
}

model_class! {
    /// Text with an optional reference URI
    DomainMetadataType {
        text value set_value = domain_metadata_type::VALUE;
        text reference set_reference = domain_metadata_type::REFERENCE;
    }
}

model_class! {
    /// Named parameter or constraint domain
    DomainType {
        text name set_name = domain_type::NAME;
    } impl UnNamedDomainFeatures
}

model_class! {
    /// Exception report returned by a service
    ExceptionReportType {
        children exception: ExceptionType = exception_report_type::EXCEPTION;
        text lang set_lang = exception_report_type::LANG;
        text version set_version = exception_report_type::VERSION;
    }
}

model_class! {
    /// One reported exception
    ExceptionType {
        text exception_text set_exception_text = exception_type::EXCEPTION_TEXT;
        text exception_code set_exception_code = exception_type::EXCEPTION_CODE;
        text locator set_locator = exception_type::LOCATOR;
    }
}

model_class! {
    /// GetCapabilities request
    GetCapabilitiesType {
        child accept_versions set_accept_versions: AcceptVersionsType = get_capabilities_type::ACCEPT_VERSIONS;
        child sections set_sections: SectionsType = get_capabilities_type::SECTIONS;
        child accept_formats set_accept_formats: AcceptFormatsType = get_capabilities_type::ACCEPT_FORMATS;
        text update_sequence set_update_sequence = get_capabilities_type::UPDATE_SEQUENCE;
        text base_url set_base_url = get_capabilities_type::BASE_URL;
        text namespace set_namespace = get_capabilities_type::NAMESPACE;
        map extended_properties set_extended_properties = get_capabilities_type::EXTENDED_PROPERTIES;
    }
}

model_class! {
    /// GetResourceByID request
    GetResourceByIdType {
        text resource_id set_resource_id = get_resource_by_id_type::RESOURCE_ID;
        text output_format set_output_format = get_resource_by_id_type::OUTPUT_FORMAT;
        text service set_service = get_resource_by_id_type::SERVICE;
        text version set_version = get_resource_by_id_type::VERSION;
    }
}

model_class! {
    /// HTTP endpoints as an interleaved sequence of GET and POST methods
    #[allow(clippy::upper_case_acronyms)]
    HTTPType {
        group group = http_type::GROUP;
        members get_requests: RequestMethodType = http_type::GET;
        members post_requests: RequestMethodType = http_type::POST;
    }
}

model_class! {
    /// Full identification of a dataset or service
    IdentificationType {
        group bounding_box_group = identification_type::BOUNDING_BOX_GROUP;
        members bounding_box: BoundingBoxType = identification_type::BOUNDING_BOX;
        text output_format set_output_format = identification_type::OUTPUT_FORMAT;
        group available_crs_group = identification_type::AVAILABLE_CRS_GROUP;
        text_member available_crs set_available_crs = identification_type::AVAILABLE_CRS;
    } impl DescriptionFeatures, BasicIdentificationFeatures
}

model_class! {
    /// Keyword list with an optional thesaurus type
    KeywordsType {
        children keyword: LanguageStringType = keywords_type::KEYWORD;
        child type_code set_type_code: CodeType = keywords_type::TYPE;
    }
}

model_class! {
    /// Human-readable text
    LanguageStringType {
        text value set_value = language_string_type::VALUE;
    }
}

model_class! {
    /// Collection of reference groups
    ManifestType {
        children reference_group: ReferenceGroupType = manifest_type::REFERENCE_GROUP;
    } impl DescriptionFeatures, BasicIdentificationFeatures
}

model_class! {
    /// Metadata link or inline metadata element
    MetadataType {
        group abstract_meta_data_group = metadata_type::ABSTRACT_META_DATA_GROUP;
        object abstract_meta_data set_abstract_meta_data = metadata_type::ABSTRACT_META_DATA;
        text about set_about = metadata_type::ABOUT;
        text title set_title = metadata_type::TITLE;
    }
}

model_class! {
    /// Marker: no value is valid
    NoValuesType {}
}

model_class! {
    /// Link to an online resource
    OnlineResourceType {} impl OnlineResourceFeatures
}

model_class! {
    /// Operations offered by a service
    OperationsMetadataType {
        children operation: OperationType = operations_metadata_type::OPERATION;
        children parameter: DomainType = operations_metadata_type::PARAMETER;
        children constraint: DomainType = operations_metadata_type::CONSTRAINT;
        opaque extended_capabilities set_extended_capabilities = operations_metadata_type::EXTENDED_CAPABILITIES;
    }
}

model_class! {
    /// One service operation
    OperationType {
        children dcp: DCPType = operation_type::D_CP;
        children parameter: DomainType = operation_type::PARAMETER;
        children constraint: DomainType = operation_type::CONSTRAINT;
        children metadata: MetadataType = operation_type::METADATA;
        text name set_name = operation_type::NAME;
    }
}

model_class! {
    /// Range of values with optional spacing
    RangeType {
        child minimum_value set_minimum_value: ValueType = range_type::MINIMUM_VALUE;
        child maximum_value set_maximum_value: ValueType = range_type::MAXIMUM_VALUE;
        child spacing set_spacing: ValueType = range_type::SPACING;
        closure range_closure set_range_closure = range_type::RANGE_CLOSURE;
    }
}

model_class! {
    /// Identified group of references
    ReferenceGroupType {
        group abstract_reference_base_group = reference_group_type::ABSTRACT_REFERENCE_BASE_GROUP;
        members abstract_reference_base: AbstractReferenceBaseType = reference_group_type::ABSTRACT_REFERENCE_BASE;
    } impl DescriptionFeatures, BasicIdentificationFeatures
}

model_class! {
    /// Reference to a remote resource
    ReferenceType {} impl ReferenceBaseFeatures, ReferenceFeatures
}

model_class! {
    /// Endpoint of one HTTP method
    RequestMethodType {
        children constraint: DomainType = request_method_type::CONSTRAINT;
    } impl OnlineResourceFeatures
}

model_class! {
    /// Responsible party without an organisation name
    ResponsiblePartySubsetType {
        text individual_name set_individual_name = responsible_party_subset_type::INDIVIDUAL_NAME;
        text position_name set_position_name = responsible_party_subset_type::POSITION_NAME;
        child contact_info set_contact_info: ContactType = responsible_party_subset_type::CONTACT_INFO;
        child role set_role: CodeType = responsible_party_subset_type::ROLE;
    }
}

model_class! {
    /// Person or organisation responsible for a resource
    ResponsiblePartyType {
        text individual_name set_individual_name = responsible_party_type::INDIVIDUAL_NAME;
        text organisation_name set_organisation_name = responsible_party_type::ORGANISATION_NAME;
        text position_name set_position_name = responsible_party_type::POSITION_NAME;
        child contact_info set_contact_info: ContactType = responsible_party_type::CONTACT_INFO;
        child role set_role: CodeType = responsible_party_type::ROLE;
    }
}

model_class! {
    /// Capabilities sections requested by a client
    SectionsType {
        text section set_section = sections_type::SECTION;
    }
}

model_class! {
    /// Identification of a service
    ServiceIdentificationType {
        child service_type set_service_type: CodeType = service_identification_type::SERVICE_TYPE;
        text service_type_version set_service_type_version = service_identification_type::SERVICE_TYPE_VERSION;
        text profile set_profile = service_identification_type::PROFILE;
        text fees set_fees = service_identification_type::FEES;
        text access_constraints set_access_constraints = service_identification_type::ACCESS_CONSTRAINTS;
    } impl DescriptionFeatures
}

model_class! {
    /// Organisation operating a service
    ServiceProviderType {
        text provider_name set_provider_name = service_provider_type::PROVIDER_NAME;
        child provider_site set_provider_site: OnlineResourceType = service_provider_type::PROVIDER_SITE;
        child service_contact set_service_contact: ResponsiblePartySubsetType = service_provider_type::SERVICE_CONTACT;
    }
}

model_class! {
    /// Reference to a service request
    ServiceReferenceType {
        object request_message set_request_message = service_reference_type::REQUEST_MESSAGE;
        text request_message_reference set_request_message_reference = service_reference_type::REQUEST_MESSAGE_REFERENCE;
    } impl ReferenceBaseFeatures, ReferenceFeatures
}

model_class! {
    /// Telephone numbers
    TelephoneType {
        text voice set_voice = telephone_type::VOICE;
        text facsimile set_facsimile = telephone_type::FACSIMILE;
    }
}

model_class! {
    /// Valid domain of a quantity, without a name
    UnNamedDomainType {} impl UnNamedDomainFeatures
}

model_class! {
    /// Reference to an external list of values
    ValuesReferenceType {
        text value set_value = values_reference_type::VALUE;
        text reference set_reference = values_reference_type::REFERENCE;
    }
}

model_class! {
    /// Single value
    ValueType {
        text value set_value = value_type::VALUE;
    }
}

model_class! {
    /// Bounding box in WGS 84 longitude and latitude
    WGS84BoundingBoxType {} impl BoundingBoxFeatures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{EventType, NotificationLog};
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    #[test]
    fn test_typed_matches_reflective() {
        let code = CodeType::new();
        code.set_value("WMS");
        assert_eq!(code.get(code_type::VALUE).unwrap(), Value::from("WMS"));

        code.set(code_type::CODE_SPACE, Value::from("urn:ogc")).unwrap();
        assert_eq!(code.code_space().as_deref(), Some("urn:ogc"));
    }

    #[test]
    fn test_subtype_shares_supertype_accessors() {
        let bbox = WGS84BoundingBoxType::new();
        bbox.set_lower_corner(vec![-180.0, -90.0]);
        bbox.set_crs("urn:ogc:def:crs:OGC:2:84");
        assert_eq!(
            bbox.get(bounding_box_type::LOWER_CORNER).unwrap(),
            Value::Positions(vec![-180.0, -90.0])
        );
        assert_eq!(bbox.crs().as_deref(), Some("urn:ogc:def:crs:OGC:2:84"));
        assert!(bbox.class().conforms_to("BoundingBoxType"));
    }

    #[test]
    fn test_from_object_checks_class() {
        let object = package().create("WGS84BoundingBoxType").unwrap();
        assert!(BoundingBoxType::from_object(object.clone()).is_ok());
        assert!(WGS84BoundingBoxType::from_object(object.clone()).is_ok());
        assert!(matches!(
            CodeType::from_object(object),
            Err(Error::ClassMismatch { expected: "CodeType", .. })
        ));
    }

    #[test]
    fn test_typed_containment() {
        let operation = OperationType::new();
        let dcp = DCPType::new();
        let http = HTTPType::new();
        dcp.set_http(Some(&http)).unwrap();
        operation.dcp().push(&dcp).unwrap();

        assert_eq!(operation.dcp().get(0), Some(dcp.clone()));
        assert_eq!(http.container(), Some(dcp.clone().into_object()));
        assert_eq!(dcp.http(), Some(http));

        dcp.set_http(None).unwrap();
        assert!(dcp.http().is_none());
    }

    #[test]
    fn test_typed_group_members() {
        let http = HTTPType::new();
        let get = RequestMethodType::new();
        get.set_href("http://example.com/ows?");
        let post = RequestMethodType::new();
        post.set_href("http://example.com/ows");
        http.post_requests().push(&post).unwrap();
        http.get_requests().push(&get).unwrap();

        assert_eq!(http.group().len(), 2);
        assert_eq!(http.get_requests().to_vec(), vec![get.clone()]);
        assert_eq!(
            http.group().get(0).map(|e| e.feature().name),
            Some("post")
        );
        assert_eq!(http.post_requests().remove(0).unwrap(), post);
        assert_eq!(http.group().len(), 1);
    }

    #[test]
    fn test_available_crs_single_member() {
        let identification = IdentificationType::new();
        identification.set_available_crs("EPSG:4326").unwrap();
        identification.set_available_crs("EPSG:3857").unwrap();
        assert_eq!(identification.available_crs_group().len(), 1);
        assert_eq!(identification.available_crs().as_deref(), Some("EPSG:3857"));
    }

    #[test]
    fn test_trait_features_notify() {
        let description = ServiceIdentificationType::new();
        let log = NotificationLog::new();
        description.add_adapter(log.clone());

        let title = LanguageStringType::new();
        title.set_value("Demo");
        description.title().push(&title).unwrap();
        description.set_fees("none");

        assert_eq!(log.events(), vec![EventType::Add, EventType::Set]);
        assert_eq!(log.records()[0].feature_id(), description_type::TITLE);
        assert_eq!(Rc::strong_count(&log), 2);
    }

    #[test]
    fn test_range_closure_default() {
        let range = RangeType::new();
        assert_eq!(range.range_closure(), RangeClosure::Closed);
        range.set_range_closure(RangeClosure::OpenClosed);
        assert!(range.is_set(range_type::RANGE_CLOSURE).unwrap());
    }

    #[test]
    fn test_every_wrapper_names_a_class() {
        fn check<T: ModelObject>() {
            assert_eq!(T::descriptor().name, T::CLASS);
        }
        check::<AbstractReferenceBaseType>();
        check::<AllowedValuesType>();
        check::<DCPType>();
        check::<HTTPType>();
        check::<GetResourceByIdType>();
        check::<WGS84BoundingBoxType>();
        assert_eq!(ReferenceType::new().link_type().as_deref(), Some("simple"));
    }
}

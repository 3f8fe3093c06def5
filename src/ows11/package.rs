//! OWS 1.1 feature table
//!
//! One declaration per complex type of the OWS 1.1 common schema. Feature
//! order is significant: it fixes the feature ids that `ows11::features`
//! exports, so new features may only ever be appended.

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::metadata::{ContentKind, DataType, Occurs, Registry, RegistryBuilder};
use crate::namespaces::{OWS_1_1_NAMESPACE, XLINK_NAMESPACE, XML_NAMESPACE};

const OPTIONAL: Occurs = Occurs::optional();
const REQUIRED: Occurs = Occurs::once();
const MANY: Occurs = Occurs::zero_or_more();
const SOME: Occurs = Occurs::one_or_more();

static PACKAGE: Lazy<Registry> =
    Lazy::new(|| build().expect("the OWS 1.1 feature table is well formed"));

/// The OWS 1.1 registry, built on first use
pub fn package() -> &'static Registry {
    &PACKAGE
}

/// Build the OWS 1.1 registry from the declaration table
pub fn build() -> Result<Registry> {
    use ContentKind::{ElementOnly, Empty, Simple};
    use DataType as T;

    let mut b = RegistryBuilder::new(OWS_1_1_NAMESPACE);

    b.class("AbstractReferenceBaseType", Empty)
        .attribute_ns("actuate", "actuate", XLINK_NAMESPACE, T::AnySimpleType, OPTIONAL)
        .attribute_ns("arcrole", "arcrole", XLINK_NAMESPACE, T::AnySimpleType, OPTIONAL)
        .attribute_ns("href", "href", XLINK_NAMESPACE, T::AnySimpleType, REQUIRED)
        .attribute_ns("role", "role", XLINK_NAMESPACE, T::AnySimpleType, OPTIONAL)
        .attribute_ns("show", "show", XLINK_NAMESPACE, T::AnySimpleType, OPTIONAL)
        .attribute_ns("title", "title", XLINK_NAMESPACE, T::AnySimpleType, OPTIONAL)
        .attribute_ns("type", "type", OWS_1_1_NAMESPACE, T::String, OPTIONAL)
        .with_default("simple");

    b.class("AcceptFormatsType", ElementOnly)
        .element("outputFormat", "OutputFormat", T::MimeType, OPTIONAL);

    b.class("AcceptVersionsType", ElementOnly)
        .element("version", "Version", T::VersionType, REQUIRED);

    b.class("AddressType", ElementOnly)
        .element("deliveryPoint", "DeliveryPoint", T::String, OPTIONAL)
        .element("city", "City", T::String, OPTIONAL)
        .element("administrativeArea", "AdministrativeArea", T::String, OPTIONAL)
        .element("postalCode", "PostalCode", T::String, OPTIONAL)
        .element("country", "Country", T::String, OPTIONAL)
        .element("electronicMailAddress", "ElectronicMailAddress", T::String, OPTIONAL);

    b.class("AllowedValuesType", ElementOnly)
        .xml_name("AllowedValues_._type")
        .group("group", "group:0", MANY)
        .member("value", "Value", "ValueType", "group", MANY)
        .member("range", "Range", "RangeType", "group", MANY);

    b.class("AnyValueType", Empty).xml_name("AnyValue_._type");

    b.class("BasicIdentificationType", ElementOnly)
        .extends("DescriptionType")
        .child("identifier", "Identifier", "CodeType", OPTIONAL)
        .child("metadata", "Metadata", "MetadataType", MANY);

    b.class("BoundingBoxType", ElementOnly)
        .element("lowerCorner", "LowerCorner", T::Position, REQUIRED)
        .element("upperCorner", "UpperCorner", T::Position, REQUIRED)
        .attribute("crs", "crs", T::AnyUri, OPTIONAL)
        .attribute("dimensions", "dimensions", T::PositiveInteger, OPTIONAL);

    b.class("CapabilitiesBaseType", ElementOnly)
        .child("serviceIdentification", "ServiceIdentification", "ServiceIdentificationType", OPTIONAL)
        .child("serviceProvider", "ServiceProvider", "ServiceProviderType", OPTIONAL)
        .child("operationsMetadata", "OperationsMetadata", "OperationsMetadataType", OPTIONAL)
        .attribute("updateSequence", "updateSequence", T::UpdateSequence, OPTIONAL)
        .attribute("version", "version", T::VersionType, REQUIRED);

    b.class("CodeType", Simple)
        .text("value", T::String)
        .attribute("codeSpace", "codeSpace", T::AnyUri, OPTIONAL);

    b.class("ContactType", ElementOnly)
        .child("phone", "Phone", "TelephoneType", OPTIONAL)
        .child("address", "Address", "AddressType", OPTIONAL)
        .child("onlineResource", "OnlineResource", "OnlineResourceType", OPTIONAL)
        .element("hoursOfService", "HoursOfService", T::String, OPTIONAL)
        .element("contactInstructions", "ContactInstructions", T::String, OPTIONAL);

    b.class("ContentsBaseType", ElementOnly)
        .child(
            "datasetDescriptionSummary",
            "DatasetDescriptionSummary",
            "DatasetDescriptionSummaryBaseType",
            MANY,
        )
        .child("otherSource", "OtherSource", "MetadataType", MANY);

    b.class("DatasetDescriptionSummaryBaseType", ElementOnly)
        .extends("DescriptionType")
        .child("wGS84BoundingBox", "WGS84BoundingBox", "WGS84BoundingBoxType", MANY)
        .child("identifier", "Identifier", "CodeType", REQUIRED)
        .group("boundingBoxGroup", "BoundingBox:group", MANY)
        .member("boundingBox", "BoundingBox", "BoundingBoxType", "boundingBoxGroup", MANY)
        .child("metadata", "Metadata", "MetadataType", MANY)
        .child(
            "datasetDescriptionSummary",
            "DatasetDescriptionSummary",
            "DatasetDescriptionSummaryBaseType",
            MANY,
        );

    b.class("DCPType", ElementOnly)
        .xml_name("DCP_._type")
        .child("hTTP", "HTTP", "HTTPType", OPTIONAL);

    b.class("DescriptionType", ElementOnly)
        .child("title", "Title", "LanguageStringType", MANY)
        .child("abstract", "Abstract", "LanguageStringType", MANY)
        .child("keywords", "Keywords", "KeywordsType", MANY);

    b.class("DomainMetadataType", Simple)
        .text("value", T::String)
        .attribute_ns("reference", "reference", OWS_1_1_NAMESPACE, T::AnyUri, OPTIONAL);

    b.class("DomainType", ElementOnly)
        .extends("UnNamedDomainType")
        .attribute("name", "name", T::String, REQUIRED);

    b.class("ExceptionReportType", ElementOnly)
        .xml_name("ExceptionReport_._type")
        .child("exception", "Exception", "ExceptionType", SOME)
        .attribute_ns("lang", "lang", XML_NAMESPACE, T::Language, OPTIONAL)
        .attribute("version", "version", T::VersionType, REQUIRED);

    b.class("ExceptionType", ElementOnly)
        .element("exceptionText", "ExceptionText", T::String, OPTIONAL)
        .attribute("exceptionCode", "exceptionCode", T::String, REQUIRED)
        .attribute("locator", "locator", T::String, OPTIONAL);

    b.class("GetCapabilitiesType", ElementOnly)
        .child("acceptVersions", "AcceptVersions", "AcceptVersionsType", OPTIONAL)
        .child("sections", "Sections", "SectionsType", OPTIONAL)
        .child("acceptFormats", "AcceptFormats", "AcceptFormatsType", OPTIONAL)
        .attribute("updateSequence", "updateSequence", T::UpdateSequence, OPTIONAL)
        .transient("baseUrl", T::String)
        .transient("namespace", T::String)
        .transient("extendedProperties", T::Map);

    b.class("GetResourceByIdType", ElementOnly)
        .element("resourceID", "ResourceID", T::AnyUri, OPTIONAL)
        .element("outputFormat", "OutputFormat", T::MimeType, OPTIONAL)
        .attribute("service", "service", T::ServiceType, REQUIRED)
        .attribute("version", "version", T::VersionType, REQUIRED);

    b.class("HTTPType", ElementOnly)
        .xml_name("HTTP_._type")
        .group("group", "group:0", MANY)
        .member("get", "Get", "RequestMethodType", "group", MANY)
        .member("post", "Post", "RequestMethodType", "group", MANY);

    b.class("IdentificationType", ElementOnly)
        .extends("BasicIdentificationType")
        .group("boundingBoxGroup", "BoundingBox:group", MANY)
        .member("boundingBox", "BoundingBox", "BoundingBoxType", "boundingBoxGroup", MANY)
        .element("outputFormat", "OutputFormat", T::MimeType, OPTIONAL)
        .group("availableCRSGroup", "AvailableCRS:group", MANY)
        .member_element("availableCRS", "AvailableCRS", T::AnyUri, "availableCRSGroup", OPTIONAL);

    b.class("KeywordsType", ElementOnly)
        .child("keyword", "Keyword", "LanguageStringType", SOME)
        .child("type", "Type", "CodeType", OPTIONAL);

    b.class("LanguageStringType", Simple).text("value", T::String);

    b.class("ManifestType", ElementOnly)
        .extends("BasicIdentificationType")
        .child("referenceGroup", "ReferenceGroup", "ReferenceGroupType", SOME);

    b.class("MetadataType", ElementOnly)
        .group("abstractMetaDataGroup", "AbstractMetaData:group", OPTIONAL)
        .any_member("abstractMetaData", "AbstractMetaData", "abstractMetaDataGroup", OPTIONAL)
        .attribute("about", "about", T::AnyUri, OPTIONAL)
        .transient("title", T::String);

    b.class("NoValuesType", Empty).xml_name("NoValues_._type");

    b.class("OnlineResourceType", Empty)
        .attribute_ns("href", "href", XLINK_NAMESPACE, T::String, OPTIONAL);

    b.class("OperationsMetadataType", ElementOnly)
        .xml_name("OperationsMetadata_._type")
        .child("operation", "Operation", "OperationType", Occurs::at_least(2))
        .child("parameter", "Parameter", "DomainType", MANY)
        .child("constraint", "Constraint", "DomainType", MANY)
        .transient("extendedCapabilities", T::JavaObject);

    b.class("OperationType", ElementOnly)
        .xml_name("Operation_._type")
        .child("dCP", "DCP", "DCPType", SOME)
        .child("parameter", "Parameter", "DomainType", MANY)
        .child("constraint", "Constraint", "DomainType", MANY)
        .child("metadata", "Metadata", "MetadataType", MANY)
        .attribute("name", "name", T::String, REQUIRED);

    b.class("RangeType", ElementOnly)
        .child("minimumValue", "MinimumValue", "ValueType", OPTIONAL)
        .child("maximumValue", "MaximumValue", "ValueType", OPTIONAL)
        .child("spacing", "Spacing", "ValueType", OPTIONAL)
        .attribute_ns("rangeClosure", "rangeClosure", OWS_1_1_NAMESPACE, T::RangeClosure, OPTIONAL)
        .with_default("closed");

    b.class("ReferenceGroupType", ElementOnly)
        .extends("BasicIdentificationType")
        .group("abstractReferenceBaseGroup", "AbstractReferenceBase:group", SOME)
        .member(
            "abstractReferenceBase",
            "AbstractReferenceBase",
            "AbstractReferenceBaseType",
            "abstractReferenceBaseGroup",
            SOME,
        );

    b.class("ReferenceType", ElementOnly)
        .extends("AbstractReferenceBaseType")
        .child("identifier", "Identifier", "CodeType", OPTIONAL)
        .child("abstract", "Abstract", "LanguageStringType", MANY)
        .element("format", "Format", T::MimeType, OPTIONAL)
        .child("metadata", "Metadata", "MetadataType", MANY);

    b.class("RequestMethodType", ElementOnly)
        .extends("OnlineResourceType")
        .child("constraint", "Constraint", "DomainType", MANY);

    b.class("ResponsiblePartySubsetType", ElementOnly)
        .element("individualName", "IndividualName", T::String, OPTIONAL)
        .element("positionName", "PositionName", T::String, OPTIONAL)
        .child("contactInfo", "ContactInfo", "ContactType", OPTIONAL)
        .child("role", "Role", "CodeType", OPTIONAL);

    b.class("ResponsiblePartyType", ElementOnly)
        .element("individualName", "IndividualName", T::String, OPTIONAL)
        .element("organisationName", "OrganisationName", T::String, OPTIONAL)
        .element("positionName", "PositionName", T::String, OPTIONAL)
        .child("contactInfo", "ContactInfo", "ContactType", OPTIONAL)
        .child("role", "Role", "CodeType", REQUIRED);

    b.class("SectionsType", ElementOnly)
        .element("section", "Section", T::String, OPTIONAL);

    b.class("ServiceIdentificationType", ElementOnly)
        .xml_name("ServiceIdentification_._type")
        .extends("DescriptionType")
        .child("serviceType", "ServiceType", "CodeType", REQUIRED)
        .element("serviceTypeVersion", "ServiceTypeVersion", T::VersionType, REQUIRED)
        .element("profile", "Profile", T::AnyUri, OPTIONAL)
        .element("fees", "Fees", T::String, OPTIONAL)
        .element("accessConstraints", "AccessConstraints", T::String, OPTIONAL);

    b.class("ServiceProviderType", ElementOnly)
        .xml_name("ServiceProvider_._type")
        .element("providerName", "ProviderName", T::String, REQUIRED)
        .child("providerSite", "ProviderSite", "OnlineResourceType", OPTIONAL)
        .child("serviceContact", "ServiceContact", "ResponsiblePartySubsetType", REQUIRED);

    b.class("ServiceReferenceType", ElementOnly)
        .extends("ReferenceType")
        .any_child("requestMessage", "RequestMessage", OPTIONAL)
        .element("requestMessageReference", "RequestMessageReference", T::AnyUri, OPTIONAL);

    b.class("TelephoneType", ElementOnly)
        .element("voice", "Voice", T::String, OPTIONAL)
        .element("facsimile", "Facsimile", T::String, OPTIONAL);

    b.class("UnNamedDomainType", ElementOnly)
        .child("allowedValues", "AllowedValues", "AllowedValuesType", OPTIONAL)
        .child("anyValue", "AnyValue", "AnyValueType", OPTIONAL)
        .child("noValues", "NoValues", "NoValuesType", OPTIONAL)
        .child("valuesReference", "ValuesReference", "ValuesReferenceType", OPTIONAL)
        .child("defaultValue", "DefaultValue", "ValueType", OPTIONAL)
        .child("meaning", "Meaning", "DomainMetadataType", OPTIONAL)
        .child("dataType", "DataType", "DomainMetadataType", OPTIONAL)
        .child("uOM", "UOM", "DomainMetadataType", OPTIONAL)
        .child("referenceSystem", "ReferenceSystem", "DomainMetadataType", OPTIONAL)
        .child("metadata", "Metadata", "MetadataType", MANY);

    b.class("ValuesReferenceType", Simple)
        .xml_name("ValuesReference_._type")
        .text("value", T::String)
        .attribute_ns("reference", "reference", OWS_1_1_NAMESPACE, T::AnyUri, REQUIRED);

    b.class("ValueType", Simple).text("value", T::String);

    b.class("WGS84BoundingBoxType", ElementOnly).extends("BoundingBoxType");

    b.build()
}

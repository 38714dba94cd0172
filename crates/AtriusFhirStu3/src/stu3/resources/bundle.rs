//! A container for a collection of resources.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Links related to this Bundle
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct BundleLink {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// See http://www.iana.org/assignments/link-relations/link-relations.xhtml#link-relations-1
    pub relation: String,
    /// Reference details for the link
    pub url: Uri,
}

impl BundleLink {
    /// Builds a `BundleLink` from its required fields.
    pub fn new(relation: impl Into<String>, url: impl Into<Uri>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            relation: relation.into(),
            url: url.into(),
        }
    }
}

/// Search related information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct BundleEntrySearch {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// match | include | outcome - why this is in the result set
    pub mode: Option<Coded<SearchEntryMode>>,
    /// Search ranking (between 0 and 1)
    pub score: Option<Decimal>,
}

/// Transaction Related Information
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct BundleEntryRequest {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// GET | POST | PUT | DELETE
    pub method: Coded<HttpVerb>,
    /// URL for HTTP equivalent of this entry
    pub url: Uri,
    /// For managing cache currency
    #[fhir_serde(rename = "ifNoneMatch")]
    pub if_none_match: Option<String>,
    /// For managing update contention
    #[fhir_serde(rename = "ifModifiedSince")]
    pub if_modified_since: Option<Instant>,
    /// For managing update contention
    #[fhir_serde(rename = "ifMatch")]
    pub if_match: Option<String>,
    /// For conditional creates
    #[fhir_serde(rename = "ifNoneExist")]
    pub if_none_exist: Option<String>,
}

impl BundleEntryRequest {
    /// Builds a `BundleEntryRequest` from its required fields.
    pub fn new(method: impl Into<Coded<HttpVerb>>, url: impl Into<Uri>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            method: method.into(),
            url: url.into(),
            if_none_match: None,
            if_modified_since: None,
            if_match: None,
            if_none_exist: None,
        }
    }
}

/// Transaction Related Information
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct BundleEntryResponse {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Status response code (text optional)
    pub status: String,
    /// The location, if the operation returns a location
    pub location: Option<Uri>,
    /// The etag for the resource (if relevant)
    pub etag: Option<String>,
    /// Server's date time modified
    #[fhir_serde(rename = "lastModified")]
    pub last_modified: Option<Instant>,
    /// OperationOutcome with hints and warnings (for batch/transaction)
    pub outcome: Option<Resource>,
}

impl BundleEntryResponse {
    /// Builds a `BundleEntryResponse` from its required fields.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            status: status.into(),
            location: None,
            etag: None,
            last_modified: None,
            outcome: None,
        }
    }
}

/// Entry in the bundle - will have a resource, or information
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct BundleEntry {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Links related to this entry
    pub link: Option<Vec<BundleLink>>,
    /// Absolute URL for resource (server address, or UUID/OID)
    #[fhir_serde(rename = "fullUrl")]
    pub full_url: Option<Uri>,
    /// A resource in the bundle
    pub resource: Option<Resource>,
    /// Search related information
    pub search: Option<BundleEntrySearch>,
    /// Transaction Related Information
    pub request: Option<BundleEntryRequest>,
    /// Transaction Related Information
    pub response: Option<BundleEntryResponse>,
}

/// A container for a collection of resources.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource]
pub struct Bundle {
    /// Logical id of this artifact
    pub id: Option<Id>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// Persistent identifier for the bundle
    pub identifier: Option<Identifier>,
    /// document | message | transaction | transaction-response | batch | batch-response | history | searchset | collection
    pub r#type: Coded<BundleType>,
    /// If search, the total number of matches
    pub total: Option<UnsignedInt>,
    /// Links related to this Bundle
    pub link: Option<Vec<BundleLink>>,
    /// Entry in the bundle - will have a resource, or information
    pub entry: Option<Vec<BundleEntry>>,
    /// Digital Signature
    pub signature: Option<Signature>,
}

impl Bundle {
    /// Builds a `Bundle` from its required fields.
    pub fn new(r#type: impl Into<Coded<BundleType>>) -> Self {
        Self {
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            identifier: None,
            r#type: r#type.into(),
            total: None,
            link: None,
            entry: None,
            signature: None,
        }
    }
}

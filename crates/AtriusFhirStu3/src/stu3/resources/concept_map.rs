//! ConceptMap: a statement of relationships from one set of concepts to another.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the source\[x\] field in ConceptMap
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "source")]
pub enum ConceptMapSource {
    #[fhir_serde(rename = "sourceUri")]
    Uri(Uri),
    #[fhir_serde(rename = "sourceReference")]
    Reference(Reference),
}

/// Choice of types for the target\[x\] field in ConceptMap
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "target")]
pub enum ConceptMapTarget {
    #[fhir_serde(rename = "targetUri")]
    Uri(Uri),
    #[fhir_serde(rename = "targetReference")]
    Reference(Reference),
}

/// Other elements required for this mapping (from context)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ConceptMapGroupElementTargetDependsOn {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Reference to property mapping depends on
    pub property: Uri,
    /// Code System (if necessary)
    pub system: Option<Uri>,
    /// Value of the referenced element
    pub code: String,
    /// Display for the code
    pub display: Option<String>,
}

impl ConceptMapGroupElementTargetDependsOn {
    /// Builds a `ConceptMapGroupElementTargetDependsOn` from its required fields.
    pub fn new(property: impl Into<Uri>, code: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            property: property.into(),
            system: None,
            code: code.into(),
            display: None,
        }
    }
}

/// Concept in target system for element
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ConceptMapGroupElementTarget {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code that identifies the target element
    pub code: Option<Code>,
    /// Display for the code
    pub display: Option<String>,
    /// relatedto | equivalent | equal | wider | subsumes | narrower | specializes | inexact | unmatched | disjoint
    pub equivalence: Option<Coded<ConceptMapEquivalence>>,
    /// Description of status/issues in mapping
    pub comment: Option<String>,
    /// Other elements required for this mapping (from context)
    #[fhir_serde(rename = "dependsOn")]
    pub depends_on: Option<Vec<ConceptMapGroupElementTargetDependsOn>>,
    /// Other concepts that this mapping also produces
    pub product: Option<Vec<ConceptMapGroupElementTargetDependsOn>>,
}

/// Mappings for a concept from the source set
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ConceptMapGroupElement {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifies element being mapped
    pub code: Option<Code>,
    /// Display for the code
    pub display: Option<String>,
    /// Concept in target system for element
    pub target: Option<Vec<ConceptMapGroupElementTarget>>,
}

/// When no match in the mappings
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ConceptMapGroupUnmapped {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// provided | fixed | other-map
    pub mode: Coded<ConceptMapGroupUnmappedMode>,
    /// Fixed code when mode = fixed
    pub code: Option<Code>,
    /// Display for the code
    pub display: Option<String>,
    /// Canonical URL for other concept map
    pub url: Option<Uri>,
}

impl ConceptMapGroupUnmapped {
    /// Builds a `ConceptMapGroupUnmapped` from its required fields.
    pub fn new(mode: impl Into<Coded<ConceptMapGroupUnmappedMode>>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            mode: mode.into(),
            code: None,
            display: None,
            url: None,
        }
    }
}

/// Same source and target systems
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ConceptMapGroup {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code System (if value set crosses code systems)
    pub source: Option<Uri>,
    /// Specific version of the code system
    #[fhir_serde(rename = "sourceVersion")]
    pub source_version: Option<String>,
    /// System of the target (if necessary)
    pub target: Option<Uri>,
    /// Specific version of the code system
    #[fhir_serde(rename = "targetVersion")]
    pub target_version: Option<String>,
    /// Mappings for a concept from the source set
    pub element: Vec<ConceptMapGroupElement>,
    /// When no match in the mappings
    pub unmapped: Option<ConceptMapGroupUnmapped>,
}

impl ConceptMapGroup {
    /// Builds a `ConceptMapGroup` from its required fields.
    pub fn new(element: impl Into<Vec<ConceptMapGroupElement>>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            source: None,
            source_version: None,
            target: None,
            target_version: None,
            element: element.into(),
            unmapped: None,
        }
    }
}

/// A statement of relationships from one set of concepts to one or more other
/// concepts.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct ConceptMap {
    /// Logical id of this artifact
    pub id: Option<Id>,
    /// Metadata about the resource
    pub meta: Option<Meta>,
    /// A set of rules under which this content was created
    #[fhir_serde(rename = "implicitRules")]
    pub implicit_rules: Option<Uri>,
    /// Language of the resource content
    pub language: Option<Code>,
    /// Text summary of the resource, for human interpretation
    pub text: Option<Narrative>,
    /// Contained, inline Resources
    pub contained: Option<Vec<Resource>>,
    /// Additional content defined by implementations
    pub extension: Option<Vec<Extension>>,
    /// Extensions that cannot be ignored
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Logical URI to reference this concept map (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the concept map
    pub identifier: Option<Identifier>,
    /// Business version of the concept map
    pub version: Option<String>,
    /// Name for this concept map (computer friendly)
    pub name: Option<String>,
    /// Name for this concept map (human friendly)
    pub title: Option<String>,
    /// draft | active | retired | unknown
    pub status: Coded<PublicationStatus>,
    /// For testing purposes, not real usage
    pub experimental: Option<Boolean>,
    /// Date this was last changed
    pub date: Option<DateTime>,
    /// Name of the publisher (organization or individual)
    pub publisher: Option<String>,
    /// Contact details for the publisher
    pub contact: Option<Vec<ContactDetail>>,
    /// Natural language description of the concept map
    pub description: Option<Markdown>,
    /// Context the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for concept map (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this concept map is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// Identifies the source of the concepts which are being mapped
    #[fhir_serde(flatten)]
    pub source: Option<ConceptMapSource>,
    /// Provides context to the mappings
    #[fhir_serde(flatten)]
    pub target: Option<ConceptMapTarget>,
    /// Same source and target systems
    pub group: Option<Vec<ConceptMapGroup>>,
}

impl ConceptMap {
    /// Builds a `ConceptMap` from its required fields.
    pub fn new(status: impl Into<Coded<PublicationStatus>>) -> Self {
        Self {
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            text: None,
            contained: None,
            extension: None,
            modifier_extension: None,
            url: None,
            identifier: None,
            version: None,
            name: None,
            title: None,
            status: status.into(),
            experimental: None,
            date: None,
            publisher: None,
            contact: None,
            description: None,
            use_context: None,
            jurisdiction: None,
            purpose: None,
            copyright: None,
            source: None,
            target: None,
            group: None,
        }
    }
}

//! CodeSystem: declares the existence of a code system and its key properties.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the value\[x\] field in CodeSystemConceptProperty
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum CodeSystemConceptPropertyValue {
    #[fhir_serde(rename = "valueCode")]
    Code(Code),
    #[fhir_serde(rename = "valueCoding")]
    Coding(Coding),
    #[fhir_serde(rename = "valueString")]
    String(String),
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "valueDateTime")]
    DateTime(DateTime),
}

/// Filter that can be used in a value set
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct CodeSystemFilter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code that identifies the filter
    pub code: Code,
    /// How or why the filter is used
    pub description: Option<String>,
    /// Operators that can be used with filter
    pub operator: Vec<Coded<FilterOperator>>,
    /// What to use for the value
    pub value: String,
}

impl CodeSystemFilter {
    /// Builds a `CodeSystemFilter` from its required fields.
    pub fn new(
        code: impl Into<Code>,
        operator: impl Into<Vec<Coded<FilterOperator>>>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            code: code.into(),
            description: None,
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// Additional information supplied about each concept
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct CodeSystemProperty {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifies the property on the concepts, and when referred to in operations
    pub code: Code,
    /// Formal identifier for the property
    pub uri: Option<Uri>,
    /// Why the property is defined, and/or what it conveys
    pub description: Option<String>,
    /// code | Coding | string | integer | boolean | dateTime
    pub r#type: Coded<PropertyType>,
}

impl CodeSystemProperty {
    /// Builds a `CodeSystemProperty` from its required fields.
    pub fn new(code: impl Into<Code>, r#type: impl Into<Coded<PropertyType>>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            code: code.into(),
            uri: None,
            description: None,
            r#type: r#type.into(),
        }
    }
}

/// Additional representations for the concept
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct CodeSystemConceptDesignation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Human language of the designation
    pub language: Option<Code>,
    /// Details how this designation would be used
    pub r#use: Option<Coding>,
    /// The text value for this designation
    pub value: String,
}

impl CodeSystemConceptDesignation {
    /// Builds a `CodeSystemConceptDesignation` from its required fields.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            language: None,
            r#use: None,
            value: value.into(),
        }
    }
}

/// Property value for the concept
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct CodeSystemConceptProperty {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Reference to CodeSystem.property.code
    pub code: Code,
    /// Value of the property for this concept
    #[fhir_serde(flatten)]
    pub value: CodeSystemConceptPropertyValue,
}

impl CodeSystemConceptProperty {
    /// Builds a `CodeSystemConceptProperty` from its required fields.
    pub fn new(code: impl Into<Code>, value: impl Into<CodeSystemConceptPropertyValue>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            code: code.into(),
            value: value.into(),
        }
    }
}

/// Concepts in the code system
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct CodeSystemConcept {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code that identifies concept
    pub code: Code,
    /// Text to display to the user
    pub display: Option<String>,
    /// Formal definition
    pub definition: Option<String>,
    /// Additional representations for the concept
    pub designation: Option<Vec<CodeSystemConceptDesignation>>,
    /// Property value for the concept
    pub property: Option<Vec<CodeSystemConceptProperty>>,
    /// Child Concepts (is-a/contains/categorizes)
    pub concept: Option<Vec<CodeSystemConcept>>,
}

impl CodeSystemConcept {
    /// Builds a `CodeSystemConcept` from its required fields.
    pub fn new(code: impl Into<Code>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            code: code.into(),
            display: None,
            definition: None,
            designation: None,
            property: None,
            concept: None,
        }
    }
}

/// A code system resource specifies a set of codes drawn from one or more code
/// systems.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct CodeSystem {
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
    /// Logical URI to reference this code system (globally unique) (Coding.system)
    pub url: Option<Uri>,
    /// Additional identifier for the code system
    pub identifier: Option<Identifier>,
    /// Business version of the code system (Coding.version)
    pub version: Option<String>,
    /// Name for this code system (computer friendly)
    pub name: Option<String>,
    /// Name for this code system (human friendly)
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
    /// Natural language description of the code system
    pub description: Option<Markdown>,
    /// Context the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for code system (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Why this code system is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// If code comparison is case sensitive
    #[fhir_serde(rename = "caseSensitive")]
    pub case_sensitive: Option<Boolean>,
    /// Canonical URL for value set with entire code system
    #[fhir_serde(rename = "valueSet")]
    pub value_set: Option<Uri>,
    /// grouped-by | is-a | part-of | classified-with
    #[fhir_serde(rename = "hierarchyMeaning")]
    pub hierarchy_meaning: Option<Coded<CodeSystemHierarchyMeaning>>,
    /// If code system defines a post-composition grammar
    pub compositional: Option<Boolean>,
    /// If definitions are not stable
    #[fhir_serde(rename = "versionNeeded")]
    pub version_needed: Option<Boolean>,
    /// not-present | example | fragment | complete
    pub content: Coded<CodeSystemContentMode>,
    /// Total concepts in the code system
    pub count: Option<UnsignedInt>,
    /// Filter that can be used in a value set
    pub filter: Option<Vec<CodeSystemFilter>>,
    /// Additional information supplied about each concept
    pub property: Option<Vec<CodeSystemProperty>>,
    /// Concepts in the code system
    pub concept: Option<Vec<CodeSystemConcept>>,
}

impl CodeSystem {
    /// Builds a `CodeSystem` from its required fields.
    pub fn new(
        status: impl Into<Coded<PublicationStatus>>,
        content: impl Into<Coded<CodeSystemContentMode>>,
    ) -> Self {
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
            case_sensitive: None,
            value_set: None,
            hierarchy_meaning: None,
            compositional: None,
            version_needed: None,
            content: content.into(),
            count: None,
            filter: None,
            property: None,
            concept: None,
        }
    }
}

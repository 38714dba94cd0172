//! ValueSet: a set of codes drawn from one or more code systems.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the value\[x\] field in ValueSetExpansionParameter
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "value")]
pub enum ValueSetExpansionParameterValue {
    #[fhir_serde(rename = "valueString")]
    String(String),
    #[fhir_serde(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir_serde(rename = "valueInteger")]
    Integer(Integer),
    #[fhir_serde(rename = "valueDecimal")]
    Decimal(Decimal),
    #[fhir_serde(rename = "valueUri")]
    Uri(Uri),
    #[fhir_serde(rename = "valueCode")]
    Code(Code),
}

/// Additional representations for this concept
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ValueSetComposeIncludeConceptDesignation {
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

impl ValueSetComposeIncludeConceptDesignation {
    /// Builds a `ValueSetComposeIncludeConceptDesignation` from its required fields.
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

/// A concept defined in the system
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ValueSetComposeIncludeConcept {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code or expression from system
    pub code: Code,
    /// Text to display for this code for this value set in this valueset
    pub display: Option<String>,
    /// Additional representations for this concept
    pub designation: Option<Vec<ValueSetComposeIncludeConceptDesignation>>,
}

impl ValueSetComposeIncludeConcept {
    /// Builds a `ValueSetComposeIncludeConcept` from its required fields.
    pub fn new(code: impl Into<Code>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            code: code.into(),
            display: None,
            designation: None,
        }
    }
}

/// Select codes/concepts by their properties (including relationships)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ValueSetComposeIncludeFilter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// A property defined by the code system
    pub property: Code,
    /// = | is-a | descendent-of | is-not-a | regex | in | not-in | generalizes | exists
    pub op: Coded<FilterOperator>,
    /// Code from the system, or regex criteria, or boolean value for exists
    pub value: Code,
}

impl ValueSetComposeIncludeFilter {
    /// Builds a `ValueSetComposeIncludeFilter` from its required fields.
    pub fn new(
        property: impl Into<Code>,
        op: impl Into<Coded<FilterOperator>>,
        value: impl Into<Code>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            property: property.into(),
            op: op.into(),
            value: value.into(),
        }
    }
}

/// Include one or more codes from a code system or other value set(s)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ValueSetComposeInclude {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The system the codes come from
    pub system: Option<Uri>,
    /// Specific version of the code system referred to
    pub version: Option<String>,
    /// A concept defined in the system
    pub concept: Option<Vec<ValueSetComposeIncludeConcept>>,
    /// Select codes/concepts by their properties (including relationships)
    pub filter: Option<Vec<ValueSetComposeIncludeFilter>>,
    /// Select only contents included in this value set
    #[fhir_serde(rename = "valueSet")]
    pub value_set: Option<Vec<Uri>>,
}

/// Definition of the content of the value set (CLD)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ValueSetCompose {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Fixed date for version-less references (transitive)
    #[fhir_serde(rename = "lockedDate")]
    pub locked_date: Option<Date>,
    /// Whether inactive codes are in the value set
    pub inactive: Option<Boolean>,
    /// Include one or more codes from a code system or other value set(s)
    pub include: Vec<ValueSetComposeInclude>,
    /// Explicitly exclude codes from a code system or other value sets
    pub exclude: Option<Vec<ValueSetComposeInclude>>,
}

impl ValueSetCompose {
    /// Builds a `ValueSetCompose` from its required fields.
    pub fn new(include: impl Into<Vec<ValueSetComposeInclude>>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            locked_date: None,
            inactive: None,
            include: include.into(),
            exclude: None,
        }
    }
}

/// Parameter that controlled the expansion process
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ValueSetExpansionParameter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Name as assigned by the server
    pub name: String,
    /// Value of the named parameter
    #[fhir_serde(flatten)]
    pub value: Option<ValueSetExpansionParameterValue>,
}

impl ValueSetExpansionParameter {
    /// Builds a `ValueSetExpansionParameter` from its required fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            name: name.into(),
            value: None,
        }
    }
}

/// Codes in the value set
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct ValueSetExpansionContains {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// System value for the code
    pub system: Option<Uri>,
    /// If user cannot select this entry
    pub r#abstract: Option<Boolean>,
    /// If concept is inactive in the code system
    pub inactive: Option<Boolean>,
    /// Version in which this code/display is defined
    pub version: Option<String>,
    /// Code - if blank, this is not a selectable code
    pub code: Option<Code>,
    /// User display for the concept
    pub display: Option<String>,
    /// Additional representations for this item
    pub designation: Option<Vec<ValueSetComposeIncludeConceptDesignation>>,
    /// Codes contained under this entry
    pub contains: Option<Vec<ValueSetExpansionContains>>,
}

/// Used when the value set is "expanded"
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ValueSetExpansion {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Uniquely identifies this expansion
    pub identifier: Uri,
    /// Time ValueSet expansion happened
    pub timestamp: DateTime,
    /// Total number of codes in the expansion
    pub total: Option<Integer>,
    /// Offset at which this resource starts
    pub offset: Option<Integer>,
    /// Parameter that controlled the expansion process
    pub parameter: Option<Vec<ValueSetExpansionParameter>>,
    /// Codes in the value set
    pub contains: Option<Vec<ValueSetExpansionContains>>,
}

impl ValueSetExpansion {
    /// Builds a `ValueSetExpansion` from its required fields.
    pub fn new(identifier: impl Into<Uri>, timestamp: impl Into<DateTime>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            identifier: identifier.into(),
            timestamp: timestamp.into(),
            total: None,
            offset: None,
            parameter: None,
            contains: None,
        }
    }
}

/// A value set specifies a set of codes drawn from one or more code systems.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct ValueSet {
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
    /// Logical URI to reference this value set (globally unique)
    pub url: Option<Uri>,
    /// Additional identifier for the value set
    pub identifier: Option<Vec<Identifier>>,
    /// Business version of the value set
    pub version: Option<String>,
    /// Name for this value set (computer friendly)
    pub name: Option<String>,
    /// Name for this value set (human friendly)
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
    /// Natural language description of the value set
    pub description: Option<Markdown>,
    /// Context the content is intended to support
    #[fhir_serde(rename = "useContext")]
    pub use_context: Option<Vec<UsageContext>>,
    /// Intended jurisdiction for value set (if applicable)
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    /// Indicates whether or not any change to the content logical definition may occur
    pub immutable: Option<Boolean>,
    /// Why this value set is defined
    pub purpose: Option<Markdown>,
    /// Use and/or publishing restrictions
    pub copyright: Option<Markdown>,
    /// Whether this is intended to be used with an extensible binding
    pub extensible: Option<Boolean>,
    /// Definition of the content of the value set (CLD)
    pub compose: Option<ValueSetCompose>,
    /// Used when the value set is "expanded"
    pub expansion: Option<ValueSetExpansion>,
}

impl ValueSet {
    /// Builds a `ValueSet` from its required fields.
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
            immutable: None,
            purpose: None,
            copyright: None,
            extensible: None,
            compose: None,
            expansion: None,
        }
    }
}

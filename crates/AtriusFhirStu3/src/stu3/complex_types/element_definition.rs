//! ElementDefinition: the definition of one element in a resource or an extension,
//! as used by StructureDefinition profiles.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

open_choice! {
    /// Choice of types for the defaultValue\[x\] field in ElementDefinition
    ElementDefinitionDefaultValue, "defaultValue"
}

open_choice! {
    /// Choice of types for the fixed\[x\] field in ElementDefinition
    ElementDefinitionFixed, "fixed"
}

open_choice! {
    /// Choice of types for the pattern\[x\] field in ElementDefinition
    ElementDefinitionPattern, "pattern"
}

open_choice! {
    /// Choice of types for the value\[x\] field in ElementDefinitionExample
    ElementDefinitionExampleValue, "value"
}

/// Choice of types for the minValue\[x\] field in ElementDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "minValue")]
pub enum ElementDefinitionMinValue {
    #[fhir_serde(rename = "minValueDate")]
    Date(Date),
    #[fhir_serde(rename = "minValueDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "minValueInstant")]
    Instant(Instant),
    #[fhir_serde(rename = "minValueTime")]
    Time(Time),
    #[fhir_serde(rename = "minValueDecimal")]
    Decimal(Decimal),
    #[fhir_serde(rename = "minValueInteger")]
    Integer(Integer),
    #[fhir_serde(rename = "minValuePositiveInt")]
    PositiveInt(PositiveInt),
    #[fhir_serde(rename = "minValueUnsignedInt")]
    UnsignedInt(UnsignedInt),
    #[fhir_serde(rename = "minValueQuantity")]
    Quantity(Quantity),
}

/// Choice of types for the maxValue\[x\] field in ElementDefinition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "maxValue")]
pub enum ElementDefinitionMaxValue {
    #[fhir_serde(rename = "maxValueDate")]
    Date(Date),
    #[fhir_serde(rename = "maxValueDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "maxValueInstant")]
    Instant(Instant),
    #[fhir_serde(rename = "maxValueTime")]
    Time(Time),
    #[fhir_serde(rename = "maxValueDecimal")]
    Decimal(Decimal),
    #[fhir_serde(rename = "maxValueInteger")]
    Integer(Integer),
    #[fhir_serde(rename = "maxValuePositiveInt")]
    PositiveInt(PositiveInt),
    #[fhir_serde(rename = "maxValueUnsignedInt")]
    UnsignedInt(UnsignedInt),
    #[fhir_serde(rename = "maxValueQuantity")]
    Quantity(Quantity),
}

/// Choice of types for the valueSet\[x\] field in ElementDefinitionBinding
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "valueSet")]
pub enum ElementDefinitionBindingValueSet {
    #[fhir_serde(rename = "valueSetUri")]
    Uri(Uri),
    #[fhir_serde(rename = "valueSetReference")]
    Reference(Reference),
}

/// Element values that are used to distinguish the slices
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ElementDefinitionSlicingDiscriminator {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// value | exists | pattern | type | profile
    pub r#type: Coded<DiscriminatorType>,
    /// Path to element value
    pub path: String,
}

impl ElementDefinitionSlicingDiscriminator {
    /// Builds an `ElementDefinitionSlicingDiscriminator` from its required fields.
    pub fn new(r#type: impl Into<Coded<DiscriminatorType>>, path: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            r#type: r#type.into(),
            path: path.into(),
        }
    }
}

/// This element is sliced - slices follow
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ElementDefinitionSlicing {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Element values that are used to distinguish the slices
    pub discriminator: Option<Vec<ElementDefinitionSlicingDiscriminator>>,
    /// Text description of how slicing works (or not)
    pub description: Option<String>,
    /// If elements must be in same order as slices
    pub ordered: Option<Boolean>,
    /// closed | open | openAtEnd
    pub rules: Coded<SlicingRules>,
}

impl ElementDefinitionSlicing {
    /// Builds an `ElementDefinitionSlicing` from its required fields.
    pub fn new(rules: impl Into<Coded<SlicingRules>>) -> Self {
        Self {
            id: None,
            extension: None,
            discriminator: None,
            description: None,
            ordered: None,
            rules: rules.into(),
        }
    }
}

/// Base definition information for tools
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ElementDefinitionBase {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Path that identifies the base element
    pub path: String,
    /// Min cardinality of the base element
    pub min: UnsignedInt,
    /// Max cardinality of the base element
    pub max: String,
}

impl ElementDefinitionBase {
    /// Builds an `ElementDefinitionBase` from its required fields.
    pub fn new(
        path: impl Into<String>,
        min: impl Into<UnsignedInt>,
        max: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            path: path.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Data type and Profile for this element
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ElementDefinitionType {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Data type or Resource (reference to definition)
    pub code: Uri,
    /// Profile (StructureDefinition) to apply (or IG)
    pub profile: Option<Uri>,
    /// Profile (StructureDefinition) to apply to reference target (or IG)
    #[fhir_serde(rename = "targetProfile")]
    pub target_profile: Option<Uri>,
    /// contained | referenced | bundled - how aggregated
    pub aggregation: Option<Vec<Coded<AggregationMode>>>,
    /// either | independent | specific
    pub versioning: Option<Coded<ReferenceVersionRules>>,
}

impl ElementDefinitionType {
    /// Builds an `ElementDefinitionType` from its required fields.
    pub fn new(code: impl Into<Uri>) -> Self {
        Self {
            id: None,
            extension: None,
            code: code.into(),
            profile: None,
            target_profile: None,
            aggregation: None,
            versioning: None,
        }
    }
}

/// Example value (as defined for type)
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ElementDefinitionExample {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Describes the purpose of this example
    pub label: String,
    /// Value of Example (one of allowed types)
    #[fhir_serde(flatten)]
    pub value: ElementDefinitionExampleValue,
}

impl ElementDefinitionExample {
    /// Builds an `ElementDefinitionExample` from its required fields.
    pub fn new(label: impl Into<String>, value: impl Into<ElementDefinitionExampleValue>) -> Self {
        Self {
            id: None,
            extension: None,
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Condition that must evaluate to true
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ElementDefinitionConstraint {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Target of 'condition' reference above
    pub key: Id,
    /// Why this constraint is necessary or appropriate
    pub requirements: Option<String>,
    /// error | warning
    pub severity: Coded<ConstraintSeverity>,
    /// Human description of constraint
    pub human: String,
    /// FHIRPath expression of constraint
    pub expression: String,
    /// XPath expression of constraint
    pub xpath: Option<String>,
    /// Reference to original source of constraint
    pub source: Option<Uri>,
}

impl ElementDefinitionConstraint {
    /// Builds an `ElementDefinitionConstraint` from its required fields.
    pub fn new(
        key: impl Into<Id>,
        severity: impl Into<Coded<ConstraintSeverity>>,
        human: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            key: key.into(),
            requirements: None,
            severity: severity.into(),
            human: human.into(),
            expression: expression.into(),
            xpath: None,
            source: None,
        }
    }
}

/// ValueSet details if this is coded
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ElementDefinitionBinding {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// required | extensible | preferred | example
    pub strength: Coded<BindingStrength>,
    /// Human explanation of the value set
    pub description: Option<String>,
    /// Source of value set
    #[fhir_serde(flatten)]
    pub value_set: Option<ElementDefinitionBindingValueSet>,
}

impl ElementDefinitionBinding {
    /// Builds an `ElementDefinitionBinding` from its required fields.
    pub fn new(strength: impl Into<Coded<BindingStrength>>) -> Self {
        Self {
            id: None,
            extension: None,
            strength: strength.into(),
            description: None,
            value_set: None,
        }
    }
}

/// Map element to another set of definitions
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ElementDefinitionMapping {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Reference to mapping declaration
    pub identity: Id,
    /// Computable language of mapping
    pub language: Option<Code>,
    /// Details of the mapping
    pub map: String,
    /// Comments about the mapping or its use
    pub comment: Option<String>,
}

impl ElementDefinitionMapping {
    /// Builds an `ElementDefinitionMapping` from its required fields.
    pub fn new(identity: impl Into<Id>, map: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            identity: identity.into(),
            language: None,
            map: map.into(),
            comment: None,
        }
    }
}

/// Captures constraints on each element within the resource, profile, or extension.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ElementDefinition {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Path of the element in the hierarchy of elements
    pub path: String,
    /// xmlAttr | xmlText | typeAttr | cdaText | xhtml
    pub representation: Option<Vec<Coded<PropertyRepresentation>>>,
    /// Name for this particular element (in a set of slices)
    #[fhir_serde(rename = "sliceName")]
    pub slice_name: Option<String>,
    /// Name for element to display with or as an alternative to the element name
    pub label: Option<String>,
    /// Corresponding codes in terminologies
    pub code: Option<Vec<Coding>>,
    /// This element is sliced - slices follow
    pub slicing: Option<ElementDefinitionSlicing>,
    /// Concise definition for space-constrained presentation
    pub short: Option<String>,
    /// Full formal definition as narrative text
    pub definition: Option<Markdown>,
    /// Comments about the use of this element
    pub comment: Option<Markdown>,
    /// Why this resource has been created
    pub requirements: Option<Markdown>,
    /// Other names
    pub alias: Option<Vec<String>>,
    /// Minimum Cardinality
    pub min: Option<UnsignedInt>,
    /// Maximum Cardinality (a number or *)
    pub max: Option<String>,
    /// Base definition information for tools
    pub base: Option<ElementDefinitionBase>,
    /// Reference to definition of content for the element
    #[fhir_serde(rename = "contentReference")]
    pub content_reference: Option<Uri>,
    /// Data type and Profile for this element
    pub r#type: Option<Vec<ElementDefinitionType>>,
    /// Specified value if missing from instance
    #[fhir_serde(flatten)]
    pub default_value: Option<ElementDefinitionDefaultValue>,
    /// Implicit meaning when this element is missing
    #[fhir_serde(rename = "meaningWhenMissing")]
    pub meaning_when_missing: Option<Markdown>,
    /// What the order of the elements means
    #[fhir_serde(rename = "orderMeaning")]
    pub order_meaning: Option<String>,
    /// Value must be exactly this
    #[fhir_serde(flatten)]
    pub fixed: Option<ElementDefinitionFixed>,
    /// Value must have at least these property values
    #[fhir_serde(flatten)]
    pub pattern: Option<ElementDefinitionPattern>,
    /// Example value (as defined for type)
    pub example: Option<Vec<ElementDefinitionExample>>,
    /// Minimum Allowed Value (for some types)
    #[fhir_serde(flatten)]
    pub min_value: Option<ElementDefinitionMinValue>,
    /// Maximum Allowed Value (for some types)
    #[fhir_serde(flatten)]
    pub max_value: Option<ElementDefinitionMaxValue>,
    /// Max length for strings
    #[fhir_serde(rename = "maxLength")]
    pub max_length: Option<Integer>,
    /// Reference to invariant about presence
    pub condition: Option<Vec<Id>>,
    /// Condition that must evaluate to true
    pub constraint: Option<Vec<ElementDefinitionConstraint>>,
    /// If the element must supported
    #[fhir_serde(rename = "mustSupport")]
    pub must_support: Option<Boolean>,
    /// If this modifies the meaning of other elements
    #[fhir_serde(rename = "isModifier")]
    pub is_modifier: Option<Boolean>,
    /// Include when _summary = true?
    #[fhir_serde(rename = "isSummary")]
    pub is_summary: Option<Boolean>,
    /// ValueSet details if this is coded
    pub binding: Option<ElementDefinitionBinding>,
    /// Map element to another set of definitions
    pub mapping: Option<Vec<ElementDefinitionMapping>>,
}

impl ElementDefinition {
    /// Builds an `ElementDefinition` from its required fields.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            id: None,
            extension: None,
            path: path.into(),
            representation: None,
            slice_name: None,
            label: None,
            code: None,
            slicing: None,
            short: None,
            definition: None,
            comment: None,
            requirements: None,
            alias: None,
            min: None,
            max: None,
            base: None,
            content_reference: None,
            r#type: None,
            default_value: None,
            meaning_when_missing: None,
            order_meaning: None,
            fixed: None,
            pattern: None,
            example: None,
            min_value: None,
            max_value: None,
            max_length: None,
            condition: None,
            constraint: None,
            must_support: None,
            is_modifier: None,
            is_summary: None,
            binding: None,
            mapping: None,
        }
    }
}

//! Substance: a homogeneous material with a definite composition.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the substance\[x\] field in SubstanceIngredient
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "substance")]
pub enum SubstanceIngredientSubstance {
    #[fhir_serde(rename = "substanceCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "substanceReference")]
    Reference(Reference),
}

/// If this describes a specific package/container of the substance
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct SubstanceInstance {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifier of the package/container
    pub identifier: Option<Identifier>,
    /// When no longer valid to use
    pub expiry: Option<DateTime>,
    /// Amount of substance in the package
    pub quantity: Option<SimpleQuantity>,
}

/// Composition information about the substance
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct SubstanceIngredient {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Optional amount (concentration)
    pub quantity: Option<Ratio>,
    /// A component of the substance
    #[fhir_serde(flatten)]
    pub substance: SubstanceIngredientSubstance,
}

impl SubstanceIngredient {
    /// Builds a `SubstanceIngredient` from its required fields.
    pub fn new(substance: impl Into<SubstanceIngredientSubstance>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            quantity: None,
            substance: substance.into(),
        }
    }
}

/// A homogeneous material with a definite composition.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct Substance {
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
    /// Unique identifier
    pub identifier: Option<Vec<Identifier>>,
    /// active | inactive | entered-in-error
    pub status: Option<Coded<SubstanceStatus>>,
    /// What class/type of substance this is
    pub category: Option<Vec<CodeableConcept>>,
    /// What substance this is
    pub code: CodeableConcept,
    /// Textual description of the substance, comments
    pub description: Option<String>,
    /// If this describes a specific package/container of the substance
    pub instance: Option<Vec<SubstanceInstance>>,
    /// Composition information about the substance
    pub ingredient: Option<Vec<SubstanceIngredient>>,
}

impl Substance {
    /// Builds a `Substance` from its required fields.
    pub fn new(code: impl Into<CodeableConcept>) -> Self {
        Self {
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            text: None,
            contained: None,
            extension: None,
            modifier_extension: None,
            identifier: None,
            status: None,
            category: None,
            code: code.into(),
            description: None,
            instance: None,
            ingredient: None,
        }
    }
}

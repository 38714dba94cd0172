//! Medication: definition of a medication and its packaging.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the item\[x\] field in MedicationIngredient
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "item")]
pub enum MedicationIngredientItem {
    #[fhir_serde(rename = "itemCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "itemReference")]
    Reference(Reference),
}

/// Choice of types for the item\[x\] field in MedicationPackageContent
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "item")]
pub enum MedicationPackageContentItem {
    #[fhir_serde(rename = "itemCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "itemReference")]
    Reference(Reference),
}

/// Active or inactive ingredient
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct MedicationIngredient {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The product contained
    #[fhir_serde(flatten)]
    pub item: MedicationIngredientItem,
    /// Active ingredient indicator
    #[fhir_serde(rename = "isActive")]
    pub is_active: Option<Boolean>,
    /// Quantity of ingredient present
    pub amount: Option<Ratio>,
}

impl MedicationIngredient {
    /// Builds a `MedicationIngredient` from its required fields.
    pub fn new(item: impl Into<MedicationIngredientItem>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            item: item.into(),
            is_active: None,
            amount: None,
        }
    }
}

/// What is in the package
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct MedicationPackageContent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// The item in the package
    #[fhir_serde(flatten)]
    pub item: MedicationPackageContentItem,
    /// Quantity present in the package
    pub amount: Option<SimpleQuantity>,
}

impl MedicationPackageContent {
    /// Builds a `MedicationPackageContent` from its required fields.
    pub fn new(item: impl Into<MedicationPackageContentItem>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            item: item.into(),
            amount: None,
        }
    }
}

/// Identifies a single production run
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct MedicationPackageBatch {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Identifier assigned to batch
    #[fhir_serde(rename = "lotNumber")]
    pub lot_number: Option<String>,
    /// When batch will expire
    #[fhir_serde(rename = "expirationDate")]
    pub expiration_date: Option<DateTime>,
}

/// Details about packaged medications
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct MedicationPackage {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// E.g. box, vial, blister-pack
    pub container: Option<CodeableConcept>,
    /// What is in the package
    pub content: Option<Vec<MedicationPackageContent>>,
    /// Identifies a single production run
    pub batch: Option<Vec<MedicationPackageBatch>>,
}

/// This resource is primarily used for the identification and definition of a
/// medication.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
#[fhir_resource(domain)]
pub struct Medication {
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
    /// Codes that identify this medication
    pub code: Option<CodeableConcept>,
    /// active | inactive | entered-in-error
    pub status: Option<Coded<MedicationStatus>>,
    /// True if a brand
    #[fhir_serde(rename = "isBrand")]
    pub is_brand: Option<Boolean>,
    /// True if medication does not require a prescription
    #[fhir_serde(rename = "isOverTheCounter")]
    pub is_over_the_counter: Option<Boolean>,
    /// Manufacturer of the item
    pub manufacturer: Option<Reference>,
    /// powder | tablets | capsule +
    pub form: Option<CodeableConcept>,
    /// Active or inactive ingredient
    pub ingredient: Option<Vec<MedicationIngredient>>,
    /// Details about packaged medications
    pub package: Option<MedicationPackage>,
    /// Picture of the medication
    pub image: Option<Vec<Attachment>>,
}

//! Specimen: a sample to be used for analysis.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the collected\[x\] field in SpecimenCollection
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "collected")]
pub enum SpecimenCollectionCollected {
    #[fhir_serde(rename = "collectedDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "collectedPeriod")]
    Period(Period),
}

/// Choice of types for the time\[x\] field in SpecimenProcessing
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "time")]
pub enum SpecimenProcessingTime {
    #[fhir_serde(rename = "timeDateTime")]
    DateTime(DateTime),
    #[fhir_serde(rename = "timePeriod")]
    Period(Period),
}

/// Choice of types for the additive\[x\] field in SpecimenContainer
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "additive")]
pub enum SpecimenContainerAdditive {
    #[fhir_serde(rename = "additiveCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir_serde(rename = "additiveReference")]
    Reference(Reference),
}

/// Collection details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct SpecimenCollection {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Who collected the specimen
    pub collector: Option<Reference>,
    /// Collection time
    #[fhir_serde(flatten)]
    pub collected: Option<SpecimenCollectionCollected>,
    /// The quantity of specimen collected
    pub quantity: Option<SimpleQuantity>,
    /// Technique used to perform collection
    pub method: Option<CodeableConcept>,
    /// Anatomical collection site
    #[fhir_serde(rename = "bodySite")]
    pub body_site: Option<CodeableConcept>,
}

/// Processing and processing step details
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct SpecimenProcessing {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Textual description of procedure
    pub description: Option<String>,
    /// Indicates the treatment step  applied to the specimen
    pub procedure: Option<CodeableConcept>,
    /// Material used in the processing step
    pub additive: Option<Vec<Reference>>,
    /// Date and time of specimen processing
    #[fhir_serde(flatten)]
    pub time: Option<SpecimenProcessingTime>,
}

/// Direct container of specimen (tube/slide, etc.)
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct SpecimenContainer {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Id for the container
    pub identifier: Option<Vec<Identifier>>,
    /// Textual description of the container
    pub description: Option<String>,
    /// Kind of container directly associated with specimen
    pub r#type: Option<CodeableConcept>,
    /// Container volume or size
    pub capacity: Option<SimpleQuantity>,
    /// Quantity of specimen within container
    #[fhir_serde(rename = "specimenQuantity")]
    pub specimen_quantity: Option<SimpleQuantity>,
    /// Additive associated with container
    #[fhir_serde(flatten)]
    pub additive: Option<SpecimenContainerAdditive>,
}

/// A sample to be used for analysis.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct Specimen {
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
    /// External Identifier
    pub identifier: Option<Vec<Identifier>>,
    /// Identifier assigned by the lab
    #[fhir_serde(rename = "accessionIdentifier")]
    pub accession_identifier: Option<Identifier>,
    /// available | unavailable | unsatisfactory | entered-in-error
    pub status: Option<Coded<SpecimenStatus>>,
    /// Kind of material that forms the specimen
    pub r#type: Option<CodeableConcept>,
    /// Where the specimen came from. This may be from the patient(s) or from the environment or a device
    pub subject: Reference,
    /// The time when specimen was received for processing
    #[fhir_serde(rename = "receivedTime")]
    pub received_time: Option<DateTime>,
    /// Specimen from which this specimen originated
    pub parent: Option<Vec<Reference>>,
    /// Why the specimen was collected
    pub request: Option<Vec<Reference>>,
    /// Collection details
    pub collection: Option<SpecimenCollection>,
    /// Processing and processing step details
    pub processing: Option<Vec<SpecimenProcessing>>,
    /// Direct container of specimen (tube/slide, etc.)
    pub container: Option<Vec<SpecimenContainer>>,
    /// Comments
    pub note: Option<Vec<Annotation>>,
}

impl Specimen {
    /// Builds a `Specimen` from its required fields.
    pub fn new(subject: impl Into<Reference>) -> Self {
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
            accession_identifier: None,
            status: None,
            r#type: None,
            subject: subject.into(),
            received_time: None,
            parent: None,
            request: None,
            collection: None,
            processing: None,
            container: None,
            note: None,
        }
    }
}

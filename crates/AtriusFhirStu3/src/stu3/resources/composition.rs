//! Composition: a set of healthcare-related information assembled into a document.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the target\[x\] field in CompositionRelatesTo
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "target")]
pub enum CompositionRelatesToTarget {
    #[fhir_serde(rename = "targetIdentifier")]
    Identifier(Identifier),
    #[fhir_serde(rename = "targetReference")]
    Reference(Reference),
}

/// Attests to accuracy of composition
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct CompositionAttester {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// personal | professional | legal | official
    pub mode: Vec<Coded<CompositionAttestationMode>>,
    /// When the composition was attested
    pub time: Option<DateTime>,
    /// Who attested the composition
    pub party: Option<Reference>,
}

impl CompositionAttester {
    /// Builds a `CompositionAttester` from its required fields.
    pub fn new(mode: impl Into<Vec<Coded<CompositionAttestationMode>>>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            mode: mode.into(),
            time: None,
            party: None,
        }
    }
}

/// Relationships to other compositions/documents
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct CompositionRelatesTo {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// replaces | transforms | signs | appends
    pub code: Coded<DocumentRelationshipType>,
    /// Target of the relationship
    #[fhir_serde(flatten)]
    pub target: CompositionRelatesToTarget,
}

impl CompositionRelatesTo {
    /// Builds a `CompositionRelatesTo` from its required fields.
    pub fn new(
        code: impl Into<Coded<DocumentRelationshipType>>,
        target: impl Into<CompositionRelatesToTarget>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            code: code.into(),
            target: target.into(),
        }
    }
}

/// The clinical service(s) being documented
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct CompositionEvent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Code(s) that apply to the event being documented
    pub code: Option<Vec<CodeableConcept>>,
    /// The period covered by the documentation
    pub period: Option<Period>,
    /// The event(s) being documented
    pub detail: Option<Vec<Reference>>,
}

/// Composition is broken into sections
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct CompositionSection {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// Label for section (e.g. for ToC)
    pub title: Option<String>,
    /// Classification of section (recommended)
    pub code: Option<CodeableConcept>,
    /// Text summary of the section, for human interpretation
    pub text: Option<Narrative>,
    /// working | snapshot | changes
    pub mode: Option<Coded<ListMode>>,
    /// Order of section entries
    #[fhir_serde(rename = "orderedBy")]
    pub ordered_by: Option<CodeableConcept>,
    /// A reference to data that supports this section
    pub entry: Option<Vec<Reference>>,
    /// Why the section is empty
    #[fhir_serde(rename = "emptyReason")]
    pub empty_reason: Option<CodeableConcept>,
    /// Nested Section
    pub section: Option<Vec<CompositionSection>>,
}

/// A set of healthcare-related information that is assembled together into a
/// single logical document that provides a single coherent statement of meaning,
/// establishes its own context and that has clinical attestation with regard to
/// who is making the statement.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct Composition {
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
    /// Logical identifier of composition (version-independent)
    pub identifier: Option<Identifier>,
    /// preliminary | final | amended | entered-in-error
    pub status: Coded<CompositionStatus>,
    /// Kind of composition (LOINC if possible)
    pub r#type: CodeableConcept,
    /// Categorization of Composition
    pub class: Option<CodeableConcept>,
    /// Who and/or what the composition is about
    pub subject: Reference,
    /// Context of the Composition
    pub encounter: Option<Reference>,
    /// Composition editing time
    pub date: DateTime,
    /// Who and/or what authored the composition
    pub author: Vec<Reference>,
    /// Human Readable name/title
    pub title: String,
    /// As defined by affinity domain
    pub confidentiality: Option<Code>,
    /// Attests to accuracy of composition
    pub attester: Option<Vec<CompositionAttester>>,
    /// Organization which maintains the composition
    pub custodian: Option<Reference>,
    /// Relationships to other compositions/documents
    #[fhir_serde(rename = "relatesTo")]
    pub relates_to: Option<Vec<CompositionRelatesTo>>,
    /// The clinical service(s) being documented
    pub event: Option<Vec<CompositionEvent>>,
    /// Composition is broken into sections
    pub section: Option<Vec<CompositionSection>>,
}

impl Composition {
    /// Builds a `Composition` from its required fields.
    pub fn new(
        status: impl Into<Coded<CompositionStatus>>,
        r#type: impl Into<CodeableConcept>,
        subject: impl Into<Reference>,
        date: impl Into<DateTime>,
        author: impl Into<Vec<Reference>>,
        title: impl Into<String>,
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
            identifier: None,
            status: status.into(),
            r#type: r#type.into(),
            class: None,
            subject: subject.into(),
            encounter: None,
            date: date.into(),
            author: author.into(),
            title: title.into(),
            confidentiality: None,
            attester: None,
            custodian: None,
            relates_to: None,
            event: None,
            section: None,
        }
    }
}

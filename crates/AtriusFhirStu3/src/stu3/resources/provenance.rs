//! Provenance: who and what was involved in producing a set of resources.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the who\[x\] field in ProvenanceAgent
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "who")]
pub enum ProvenanceAgentWho {
    #[fhir_serde(rename = "whoUri")]
    Uri(Uri),
    #[fhir_serde(rename = "whoReference")]
    Reference(Reference),
}

/// Choice of types for the onBehalfOf\[x\] field in ProvenanceAgent
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "onBehalfOf")]
pub enum ProvenanceAgentOnBehalfOf {
    #[fhir_serde(rename = "onBehalfOfUri")]
    Uri(Uri),
    #[fhir_serde(rename = "onBehalfOfReference")]
    Reference(Reference),
}

/// Choice of types for the what\[x\] field in ProvenanceEntity
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "what")]
pub enum ProvenanceEntityWhat {
    #[fhir_serde(rename = "whatUri")]
    Uri(Uri),
    #[fhir_serde(rename = "whatReference")]
    Reference(Reference),
    #[fhir_serde(rename = "whatIdentifier")]
    Identifier(Identifier),
}

/// Actor involved
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ProvenanceAgent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// What the agents role was
    pub role: Option<Vec<CodeableConcept>>,
    /// Who participated
    #[fhir_serde(flatten)]
    pub who: ProvenanceAgentWho,
    /// Who the agent is representing
    #[fhir_serde(flatten)]
    pub on_behalf_of: Option<ProvenanceAgentOnBehalfOf>,
    /// Type of relationship between agents
    #[fhir_serde(rename = "relatedAgentType")]
    pub related_agent_type: Option<CodeableConcept>,
}

impl ProvenanceAgent {
    /// Builds a `ProvenanceAgent` from its required fields.
    pub fn new(who: impl Into<ProvenanceAgentWho>) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            role: None,
            who: who.into(),
            on_behalf_of: None,
            related_agent_type: None,
        }
    }
}

/// An entity used in this activity
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct ProvenanceEntity {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// derivation | revision | quotation | source | removal
    pub role: Coded<ProvenanceEntityRole>,
    /// Identity of entity
    #[fhir_serde(flatten)]
    pub what: ProvenanceEntityWhat,
    /// Entity is attributed to this agent
    pub agent: Option<Vec<ProvenanceAgent>>,
}

impl ProvenanceEntity {
    /// Builds a `ProvenanceEntity` from its required fields.
    pub fn new(
        role: impl Into<Coded<ProvenanceEntityRole>>,
        what: impl Into<ProvenanceEntityWhat>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            role: role.into(),
            what: what.into(),
            agent: None,
        }
    }
}

/// Provenance of a resource is a record that describes entities and processes
/// involved in producing and delivering or otherwise influencing that resource.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct Provenance {
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
    /// Target Reference(s) (usually version specific)
    pub target: Vec<Reference>,
    /// When the activity occurred
    pub period: Option<Period>,
    /// When the activity was recorded / updated
    pub recorded: Instant,
    /// Policy or plan the activity was defined by
    pub policy: Option<Vec<Uri>>,
    /// Where the activity occurred, if relevant
    pub location: Option<Reference>,
    /// Reason the activity is occurring
    pub reason: Option<Vec<Coding>>,
    /// Activity that occurred
    pub activity: Option<Coding>,
    /// Actor involved
    pub agent: Vec<ProvenanceAgent>,
    /// An entity used in this activity
    pub entity: Option<Vec<ProvenanceEntity>>,
    /// Signature on target
    pub signature: Option<Vec<Signature>>,
}

impl Provenance {
    /// Builds a `Provenance` from its required fields.
    pub fn new(
        target: impl Into<Vec<Reference>>,
        recorded: impl Into<Instant>,
        agent: impl Into<Vec<ProvenanceAgent>>,
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
            target: target.into(),
            period: None,
            recorded: recorded.into(),
            policy: None,
            location: None,
            reason: None,
            activity: None,
            agent: agent.into(),
            entity: None,
            signature: None,
        }
    }
}

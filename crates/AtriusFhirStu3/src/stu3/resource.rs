//! The Resource / DomainResource base and the polymorphic resource registry.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Base fields shared by every resource.
///
/// Implemented by `#[derive(FhirSerde)]` for structs marked
/// `#[fhir_resource]`.
pub trait FhirResource {
    /// The `resourceType` discriminator of this resource.
    const RESOURCE_TYPE: &'static str;

    fn resource_type(&self) -> &'static str {
        Self::RESOURCE_TYPE
    }

    /// Logical id of this artifact
    fn id(&self) -> Option<&Id>;

    /// Metadata about the resource
    fn meta(&self) -> Option<&Meta>;

    /// A set of rules under which this content was created
    fn implicit_rules(&self) -> Option<&Uri>;

    /// Language of the resource content
    fn language(&self) -> Option<&Code>;
}

/// Fields added by DomainResource: narrative, contained resources and
/// extensions.
pub trait FhirDomainResource: FhirResource {
    fn text(&self) -> Option<&Narrative>;

    /// Contained, inline Resources
    fn contained(&self) -> &[Resource];

    fn extension(&self) -> &[Extension];

    fn modifier_extension(&self) -> &[Extension];
}

/// Any STU3 resource, selected by its `resourceType`.
///
/// Decoding a `resourceType` outside this list fails with
/// [`DecodeError::UnknownResourceType`](crate::DecodeError::UnknownResourceType).
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_serde(tag = "resourceType")]
pub enum Resource {
    AllergyIntolerance(Box<AllergyIntolerance>),
    Basic(Box<Basic>),
    Binary(Box<Binary>),
    Bundle(Box<Bundle>),
    CarePlan(Box<CarePlan>),
    CodeSystem(Box<CodeSystem>),
    Composition(Box<Composition>),
    ConceptMap(Box<ConceptMap>),
    Condition(Box<Condition>),
    DiagnosticReport(Box<DiagnosticReport>),
    FamilyMemberHistory(Box<FamilyMemberHistory>),
    Goal(Box<Goal>),
    Immunization(Box<Immunization>),
    Library(Box<Library>),
    Medication(Box<Medication>),
    MedicationRequest(Box<MedicationRequest>),
    MedicationStatement(Box<MedicationStatement>),
    Observation(Box<Observation>),
    OperationOutcome(Box<OperationOutcome>),
    Organization(Box<Organization>),
    Parameters(Box<Parameters>),
    Patient(Box<Patient>),
    PlanDefinition(Box<PlanDefinition>),
    Practitioner(Box<Practitioner>),
    PractitionerRole(Box<PractitionerRole>),
    Procedure(Box<Procedure>),
    Provenance(Box<Provenance>),
    Questionnaire(Box<Questionnaire>),
    QuestionnaireResponse(Box<QuestionnaireResponse>),
    ReferralRequest(Box<ReferralRequest>),
    Specimen(Box<Specimen>),
    Substance(Box<Substance>),
    Task(Box<Task>),
    ValueSet(Box<ValueSet>),
}

/// Applies `$body` to the inner resource of every variant.
macro_rules! with_resource {
    ($self:expr, $resource:ident => $body:expr) => {
        match $self {
            Resource::AllergyIntolerance($resource) => $body,
            Resource::Basic($resource) => $body,
            Resource::Binary($resource) => $body,
            Resource::Bundle($resource) => $body,
            Resource::CarePlan($resource) => $body,
            Resource::CodeSystem($resource) => $body,
            Resource::Composition($resource) => $body,
            Resource::ConceptMap($resource) => $body,
            Resource::Condition($resource) => $body,
            Resource::DiagnosticReport($resource) => $body,
            Resource::FamilyMemberHistory($resource) => $body,
            Resource::Goal($resource) => $body,
            Resource::Immunization($resource) => $body,
            Resource::Library($resource) => $body,
            Resource::Medication($resource) => $body,
            Resource::MedicationRequest($resource) => $body,
            Resource::MedicationStatement($resource) => $body,
            Resource::Observation($resource) => $body,
            Resource::OperationOutcome($resource) => $body,
            Resource::Organization($resource) => $body,
            Resource::Parameters($resource) => $body,
            Resource::Patient($resource) => $body,
            Resource::PlanDefinition($resource) => $body,
            Resource::Practitioner($resource) => $body,
            Resource::PractitionerRole($resource) => $body,
            Resource::Procedure($resource) => $body,
            Resource::Provenance($resource) => $body,
            Resource::Questionnaire($resource) => $body,
            Resource::QuestionnaireResponse($resource) => $body,
            Resource::ReferralRequest($resource) => $body,
            Resource::Specimen($resource) => $body,
            Resource::Substance($resource) => $body,
            Resource::Task($resource) => $body,
            Resource::ValueSet($resource) => $body,
        }
    };
}

/// Like `with_resource!`, falling back to `$otherwise` for the resources
/// that are not DomainResources.
macro_rules! with_domain_resource {
    ($self:expr, $resource:ident => $body:expr, $otherwise:expr) => {
        match $self {
            Resource::AllergyIntolerance($resource) => $body,
            Resource::Basic($resource) => $body,
            Resource::CarePlan($resource) => $body,
            Resource::CodeSystem($resource) => $body,
            Resource::Composition($resource) => $body,
            Resource::ConceptMap($resource) => $body,
            Resource::Condition($resource) => $body,
            Resource::DiagnosticReport($resource) => $body,
            Resource::FamilyMemberHistory($resource) => $body,
            Resource::Goal($resource) => $body,
            Resource::Immunization($resource) => $body,
            Resource::Library($resource) => $body,
            Resource::Medication($resource) => $body,
            Resource::MedicationRequest($resource) => $body,
            Resource::MedicationStatement($resource) => $body,
            Resource::Observation($resource) => $body,
            Resource::OperationOutcome($resource) => $body,
            Resource::Organization($resource) => $body,
            Resource::Patient($resource) => $body,
            Resource::PlanDefinition($resource) => $body,
            Resource::Practitioner($resource) => $body,
            Resource::PractitionerRole($resource) => $body,
            Resource::Procedure($resource) => $body,
            Resource::Provenance($resource) => $body,
            Resource::Questionnaire($resource) => $body,
            Resource::QuestionnaireResponse($resource) => $body,
            Resource::ReferralRequest($resource) => $body,
            Resource::Specimen($resource) => $body,
            Resource::Substance($resource) => $body,
            Resource::Task($resource) => $body,
            Resource::ValueSet($resource) => $body,
            Resource::Binary(_) | Resource::Bundle(_) | Resource::Parameters(_) => $otherwise,
        }
    };
}

impl Resource {
    /// Logical id of the wrapped resource.
    pub fn id(&self) -> Option<&Id> {
        with_resource!(self, r => FhirResource::id(&**r))
    }

    pub fn meta(&self) -> Option<&Meta> {
        with_resource!(self, r => FhirResource::meta(&**r))
    }

    /// Contained resources of the wrapped resource. Binary, Bundle and
    /// Parameters derive from Resource directly and contain nothing.
    pub fn contained(&self) -> &[Resource] {
        with_domain_resource!(self, r => FhirDomainResource::contained(&**r), &[])
    }

    /// Narrative of the wrapped resource, if it has one.
    pub fn text(&self) -> Option<&Narrative> {
        with_domain_resource!(self, r => FhirDomainResource::text(&**r), None)
    }

    /// Finds a contained resource by the id used in a local `#id` reference.
    pub fn find_contained(&self, id: &str) -> Option<&Resource> {
        self.contained()
            .iter()
            .find(|resource| resource.id().and_then(|i| i.value.as_deref()) == Some(id))
    }
}

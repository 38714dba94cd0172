//! Outcomes of system actions, carried in responses and in Bundle entries.

use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// A single issue associated with the action
#[derive(Debug, Clone, PartialEq, FhirSerde)]
pub struct OperationOutcomeIssue {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir_serde(rename = "modifierExtension")]
    pub modifier_extension: Option<Vec<Extension>>,
    /// fatal | error | warning | information
    pub severity: Coded<IssueSeverity>,
    /// Error or warning code
    pub code: Coded<IssueType>,
    /// Additional details about the error
    pub details: Option<CodeableConcept>,
    /// Additional diagnostic information about the issue
    pub diagnostics: Option<String>,
    /// Path of element(s) related to issue
    pub location: Option<Vec<String>>,
    /// FHIRPath of element(s) related to issue
    pub expression: Option<Vec<String>>,
}

impl OperationOutcomeIssue {
    /// Builds an `OperationOutcomeIssue` from its required fields.
    pub fn new(
        severity: impl Into<Coded<IssueSeverity>>,
        code: impl Into<Coded<IssueType>>,
    ) -> Self {
        Self {
            id: None,
            extension: None,
            modifier_extension: None,
            severity: severity.into(),
            code: code.into(),
            details: None,
            diagnostics: None,
            location: None,
            expression: None,
        }
    }
}

/// A collection of error, warning or information messages that result from a
/// system action.
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_resource(domain)]
pub struct OperationOutcome {
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
    /// A single issue associated with the action
    pub issue: Vec<OperationOutcomeIssue>,
}

impl OperationOutcome {
    /// Builds an `OperationOutcome` from its required fields.
    pub fn new(issue: impl Into<Vec<OperationOutcomeIssue>>) -> Self {
        Self {
            id: None,
            meta: None,
            implicit_rules: None,
            language: None,
            text: None,
            contained: None,
            extension: None,
            modifier_extension: None,
            issue: issue.into(),
        }
    }
}

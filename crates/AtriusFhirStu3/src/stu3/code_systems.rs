//! Code systems behind the required bindings of the model.
//!
//! Only systems bound with strength `required` get an enum; extensible and
//! example bindings stay `Code` or `CodeableConcept`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::PrimitiveValue;
use crate::error::{DecodeError, DecodeResult};
use crate::stu3::{Code, CodeableConcept, Coding, Element};

//=============================================================================
// Datatypes
//=============================================================================

fhir_code_system! {
    /// The gender of a person used for administrative purposes.
    AdministrativeGender = "http://hl7.org/fhir/administrative-gender" {
        Male = "male",
        Female = "female",
        Other = "other",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    /// Identifies the purpose for this identifier, if known.
    IdentifierUse = "http://hl7.org/fhir/identifier-use" {
        Usual = "usual",
        Official = "official",
        Temp = "temp",
        Secondary = "secondary",
    }
}

fhir_code_system! {
    /// The use of a human name.
    NameUse = "http://hl7.org/fhir/name-use" {
        Usual = "usual",
        Official = "official",
        Temp = "temp",
        Nickname = "nickname",
        Anonymous = "anonymous",
        Old = "old",
        Maiden = "maiden",
    }
}

fhir_code_system! {
    AddressUse = "http://hl7.org/fhir/address-use" {
        Home = "home",
        Work = "work",
        Temp = "temp",
        Old = "old",
    }
}

fhir_code_system! {
    AddressType = "http://hl7.org/fhir/address-type" {
        Postal = "postal",
        Physical = "physical",
        Both = "both",
    }
}

fhir_code_system! {
    /// Telecommunications form for contact point.
    ContactPointSystem = "http://hl7.org/fhir/contact-point-system" {
        Phone = "phone",
        Fax = "fax",
        Email = "email",
        Pager = "pager",
        Url = "url",
        Sms = "sms",
        Other = "other",
    }
}

fhir_code_system! {
    ContactPointUse = "http://hl7.org/fhir/contact-point-use" {
        Home = "home",
        Work = "work",
        Temp = "temp",
        Old = "old",
        Mobile = "mobile",
    }
}

fhir_code_system! {
    /// How the Quantity should be understood and represented.
    QuantityComparator = "http://hl7.org/fhir/quantity-comparator" {
        /// Display: Less than
        LessThan = "<",
        /// Display: Less or Equal to
        LessOrEqual = "<=",
        /// Display: Greater or Equal to
        GreaterOrEqual = ">=",
        /// Display: Greater than
        GreaterThan = ">",
    }
}

fhir_code_system! {
    /// The status of a resource narrative.
    NarrativeStatus = "http://hl7.org/fhir/narrative-status" {
        Generated = "generated",
        Extensions = "extensions",
        Additional = "additional",
        Empty = "empty",
    }
}

fhir_code_system! {
    /// A unit of time (units from UCUM).
    UnitsOfTime = "http://unitsofmeasure.org" {
        Second = "s",
        Minute = "min",
        Hour = "h",
        Day = "d",
        Week = "wk",
        Month = "mo",
        Year = "a",
    }
}

fhir_code_system! {
    /// Real world event relating to the schedule.
    EventTiming = "http://hl7.org/fhir/event-timing" {
        Morning = "MORN",
        Afternoon = "AFT",
        Evening = "EVE",
        Night = "NIGHT",
        AfterSleep = "PHS",
        HourOfSleep = "HS",
        Wake = "WAKE",
        Meal = "C",
        Breakfast = "CM",
        Lunch = "CD",
        Dinner = "CV",
        BeforeMeal = "AC",
        BeforeBreakfast = "ACM",
        BeforeLunch = "ACD",
        BeforeDinner = "ACV",
        AfterMeal = "PC",
        AfterBreakfast = "PCM",
        AfterLunch = "PCD",
        AfterDinner = "PCV",
    }
}

fhir_code_system! {
    DaysOfWeek = "http://hl7.org/fhir/days-of-week" {
        Mon = "mon",
        Tue = "tue",
        Wed = "wed",
        Thu = "thu",
        Fri = "fri",
        Sat = "sat",
        Sun = "sun",
    }
}

fhir_code_system! {
    /// The type of contributor.
    ContributorType = "http://hl7.org/fhir/contributor-type" {
        Author = "author",
        Editor = "editor",
        Reviewer = "reviewer",
        Endorser = "endorser",
    }
}

fhir_code_system! {
    /// The type of relationship to the related artifact.
    RelatedArtifactType = "http://hl7.org/fhir/related-artifact-type" {
        Documentation = "documentation",
        Justification = "justification",
        Citation = "citation",
        Predecessor = "predecessor",
        Successor = "successor",
        DerivedFrom = "derived-from",
        DependsOn = "depends-on",
        ComposedOf = "composed-of",
    }
}

fhir_code_system! {
    /// The type of trigger.
    TriggerType = "http://hl7.org/fhir/trigger-type" {
        NamedEvent = "named-event",
        Periodic = "periodic",
        DataAdded = "data-added",
        DataModified = "data-modified",
        DataRemoved = "data-removed",
        DataAccessed = "data-accessed",
        DataAccessEnded = "data-access-ended",
    }
}

fhir_code_system! {
    /// Whether an operation parameter is an input or an output.
    OperationParameterUse = "http://hl7.org/fhir/operation-parameter-use" {
        In = "in",
        Out = "out",
    }
}

//=============================================================================
// Conformance and terminology
//=============================================================================

fhir_code_system! {
    /// The lifecycle status of an artifact.
    PublicationStatus = "http://hl7.org/fhir/publication-status" {
        Draft = "draft",
        Active = "active",
        Retired = "retired",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    /// How much of the content of the code system is represented in a
    /// resource.
    CodeSystemContentMode = "http://hl7.org/fhir/codesystem-content-mode" {
        NotPresent = "not-present",
        Example = "example",
        Fragment = "fragment",
        Complete = "complete",
    }
}

fhir_code_system! {
    /// The meaning of the hierarchy of concepts in a code system.
    CodeSystemHierarchyMeaning = "http://hl7.org/fhir/codesystem-hierarchy-meaning" {
        GroupedBy = "grouped-by",
        IsA = "is-a",
        PartOf = "part-of",
        ClassifiedWith = "classified-with",
    }
}

fhir_code_system! {
    /// The type of a property value.
    PropertyType = "http://hl7.org/fhir/concept-property-type" {
        Code = "code",
        Coding = "Coding",
        String = "string",
        Integer = "integer",
        Boolean = "boolean",
        DateTime = "dateTime",
    }
}

fhir_code_system! {
    /// The kind of operation to perform as a part of a property based filter.
    FilterOperator = "http://hl7.org/fhir/filter-operator" {
        Equal = "=",
        IsA = "is-a",
        DescendentOf = "descendent-of",
        IsNotA = "is-not-a",
        Regex = "regex",
        In = "in",
        NotIn = "not-in",
        Generalizes = "generalizes",
        Exists = "exists",
    }
}

fhir_code_system! {
    /// The degree of equivalence between concepts.
    ConceptMapEquivalence = "http://hl7.org/fhir/concept-map-equivalence" {
        RelatedTo = "relatedto",
        Equivalent = "equivalent",
        Equal = "equal",
        Wider = "wider",
        Subsumes = "subsumes",
        Narrower = "narrower",
        Specializes = "specializes",
        Inexact = "inexact",
        Unmatched = "unmatched",
        Disjoint = "disjoint",
    }
}

fhir_code_system! {
    /// Defines which action to take if there is no match in the group.
    ConceptMapGroupUnmappedMode = "http://hl7.org/fhir/conceptmap-unmapped-mode" {
        Provided = "provided",
        Fixed = "fixed",
        OtherMap = "other-map",
    }
}

fhir_code_system! {
    /// How the issue affects the success of the action.
    IssueSeverity = "http://hl7.org/fhir/issue-severity" {
        Fatal = "fatal",
        Error = "error",
        Warning = "warning",
        Information = "information",
    }
}

fhir_code_system! {
    /// A code that describes the type of issue.
    IssueType = "http://hl7.org/fhir/issue-type" {
        Invalid = "invalid",
        Structure = "structure",
        Required = "required",
        Value = "value",
        Invariant = "invariant",
        Security = "security",
        Login = "login",
        Unknown = "unknown",
        Expired = "expired",
        Forbidden = "forbidden",
        Suppressed = "suppressed",
        Processing = "processing",
        NotSupported = "not-supported",
        Duplicate = "duplicate",
        NotFound = "not-found",
        TooLong = "too-long",
        CodeInvalid = "code-invalid",
        Extension = "extension",
        TooCostly = "too-costly",
        BusinessRule = "business-rule",
        Conflict = "conflict",
        Incomplete = "incomplete",
        Transient = "transient",
        LockError = "lock-error",
        NoStore = "no-store",
        Exception = "exception",
        Timeout = "timeout",
        Throttled = "throttled",
        Informational = "informational",
    }
}

//=============================================================================
// Infrastructure
//=============================================================================

fhir_code_system! {
    /// Indicates the purpose of a bundle.
    BundleType = "http://hl7.org/fhir/bundle-type" {
        Document = "document",
        Message = "message",
        Transaction = "transaction",
        TransactionResponse = "transaction-response",
        Batch = "batch",
        BatchResponse = "batch-response",
        History = "history",
        Searchset = "searchset",
        Collection = "collection",
    }
}

fhir_code_system! {
    HttpVerb = "http://hl7.org/fhir/http-verb" {
        Get = "GET",
        Post = "POST",
        Put = "PUT",
        Delete = "DELETE",
    }
}

fhir_code_system! {
    /// Why an entry is in the result set.
    SearchEntryMode = "http://hl7.org/fhir/search-entry-mode" {
        Match = "match",
        Include = "include",
        Outcome = "outcome",
    }
}

fhir_code_system! {
    /// The type of link between this patient resource and another.
    LinkType = "http://hl7.org/fhir/link-type" {
        ReplacedBy = "replaced-by",
        Replaces = "replaces",
        Refer = "refer",
        Seealso = "seealso",
    }
}

fhir_code_system! {
    /// The way in which a person authenticated a composition.
    CompositionAttestationMode = "http://hl7.org/fhir/composition-attestation-mode" {
        Personal = "personal",
        Professional = "professional",
        Legal = "legal",
        Official = "official",
    }
}

fhir_code_system! {
    /// The workflow/clinical status of the composition.
    CompositionStatus = "http://hl7.org/fhir/composition-status" {
        Preliminary = "preliminary",
        Final = "final",
        Amended = "amended",
        EnteredInError = "entered-in-error",
    }
}

fhir_code_system! {
    /// The type of relationship between documents.
    DocumentRelationshipType = "http://hl7.org/fhir/document-relationship-type" {
        Replaces = "replaces",
        Transforms = "transforms",
        Signs = "signs",
        Appends = "appends",
    }
}

fhir_code_system! {
    /// The processing mode that applies to a list.
    ListMode = "http://hl7.org/fhir/list-mode" {
        Working = "working",
        Snapshot = "snapshot",
        Changes = "changes",
    }
}

fhir_code_system! {
    /// How an entity was used in an activity.
    ProvenanceEntityRole = "http://hl7.org/fhir/provenance-entity-role" {
        Derivation = "derivation",
        Revision = "revision",
        Quotation = "quotation",
        Source = "source",
        Removal = "removal",
    }
}

//=============================================================================
// Clinical
//=============================================================================

fhir_code_system! {
    /// Indicates the status of the identified issue.
    ObservationStatus = "http://hl7.org/fhir/observation-status" {
        Registered = "registered",
        Preliminary = "preliminary",
        Final = "final",
        Amended = "amended",
        Corrected = "corrected",
        Cancelled = "cancelled",
        EnteredInError = "entered-in-error",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    /// Codes specifying how two observations are related.
    ObservationRelationshipType = "http://hl7.org/fhir/observation-relationshiptypes" {
        HasMember = "has-member",
        DerivedFrom = "derived-from",
        SequelTo = "sequel-to",
        Replaces = "replaces",
        QualifiedBy = "qualified-by",
        InterferedBy = "interfered-by",
    }
}

fhir_code_system! {
    /// The status of the diagnostic report as a whole.
    DiagnosticReportStatus = "http://hl7.org/fhir/diagnostic-report-status" {
        Registered = "registered",
        Partial = "partial",
        Preliminary = "preliminary",
        Final = "final",
        Amended = "amended",
        Corrected = "corrected",
        Appended = "appended",
        Cancelled = "cancelled",
        EnteredInError = "entered-in-error",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    /// The clinical status of the condition.
    ConditionClinicalStatus = "http://hl7.org/fhir/condition-clinical" {
        Active = "active",
        Recurrence = "recurrence",
        Inactive = "inactive",
        Remission = "remission",
        Resolved = "resolved",
    }
}

fhir_code_system! {
    /// The verification status to support or decline the clinical status of
    /// the condition or diagnosis.
    ConditionVerificationStatus = "http://hl7.org/fhir/condition-ver-status" {
        Provisional = "provisional",
        Differential = "differential",
        Confirmed = "confirmed",
        Refuted = "refuted",
        EnteredInError = "entered-in-error",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    AllergyIntoleranceClinicalStatus = "http://hl7.org/fhir/allergy-clinical-status" {
        Active = "active",
        Inactive = "inactive",
        Resolved = "resolved",
    }
}

fhir_code_system! {
    AllergyIntoleranceVerificationStatus = "http://hl7.org/fhir/allergy-verification-status" {
        Unconfirmed = "unconfirmed",
        Confirmed = "confirmed",
        Refuted = "refuted",
        EnteredInError = "entered-in-error",
    }
}

fhir_code_system! {
    AllergyIntoleranceType = "http://hl7.org/fhir/allergy-intolerance-type" {
        Allergy = "allergy",
        Intolerance = "intolerance",
    }
}

fhir_code_system! {
    AllergyIntoleranceCategory = "http://hl7.org/fhir/allergy-intolerance-category" {
        Food = "food",
        Medication = "medication",
        Environment = "environment",
        Biologic = "biologic",
    }
}

fhir_code_system! {
    AllergyIntoleranceCriticality = "http://hl7.org/fhir/allergy-intolerance-criticality" {
        Low = "low",
        High = "high",
        UnableToAssess = "unable-to-assess",
    }
}

fhir_code_system! {
    /// Clinical assessment of the severity of a reaction event as a whole.
    AllergyIntoleranceSeverity = "http://hl7.org/fhir/reaction-event-severity" {
        Mild = "mild",
        Moderate = "moderate",
        Severe = "severe",
    }
}

fhir_code_system! {
    /// A code specifying the state of the procedure.
    EventStatus = "http://hl7.org/fhir/event-status" {
        Preparation = "preparation",
        InProgress = "in-progress",
        Suspended = "suspended",
        Aborted = "aborted",
        Completed = "completed",
        EnteredInError = "entered-in-error",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    /// A code that identifies the status of the family history record.
    FamilyHistoryStatus = "http://hl7.org/fhir/history-status" {
        Partial = "partial",
        Completed = "completed",
        EnteredInError = "entered-in-error",
        HealthUnknown = "health-unknown",
    }
}

fhir_code_system! {
    /// Indicates whether the goal has been met and is still being targeted.
    GoalStatus = "http://hl7.org/fhir/goal-status" {
        Proposed = "proposed",
        Accepted = "accepted",
        Planned = "planned",
        InProgress = "in-progress",
        OnTarget = "on-target",
        AheadOfTarget = "ahead-of-target",
        BehindTarget = "behind-target",
        Sustaining = "sustaining",
        Achieved = "achieved",
        OnHold = "on-hold",
        Cancelled = "cancelled",
        EnteredInError = "entered-in-error",
        Rejected = "rejected",
    }
}

fhir_code_system! {
    /// The current status of the care plan.
    CarePlanStatus = "http://hl7.org/fhir/care-plan-status" {
        Draft = "draft",
        Active = "active",
        Suspended = "suspended",
        Completed = "completed",
        EnteredInError = "entered-in-error",
        Cancelled = "cancelled",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    CarePlanIntent = "http://hl7.org/fhir/care-plan-intent" {
        Proposal = "proposal",
        Plan = "plan",
        Order = "order",
        Option = "option",
    }
}

fhir_code_system! {
    /// Identifies what progress is being made for a specific activity.
    CarePlanActivityStatus = "http://hl7.org/fhir/care-plan-activity-status" {
        NotStarted = "not-started",
        Scheduled = "scheduled",
        InProgress = "in-progress",
        OnHold = "on-hold",
        Completed = "completed",
        Cancelled = "cancelled",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    /// The current status of the task.
    TaskStatus = "http://hl7.org/fhir/task-status" {
        Draft = "draft",
        Requested = "requested",
        Received = "received",
        Accepted = "accepted",
        Rejected = "rejected",
        Ready = "ready",
        Cancelled = "cancelled",
        InProgress = "in-progress",
        OnHold = "on-hold",
        Failed = "failed",
        Completed = "completed",
        EnteredInError = "entered-in-error",
    }
}

fhir_code_system! {
    /// Codes indicating the degree of authority/intentionality associated
    /// with a request.
    RequestIntent = "http://hl7.org/fhir/request-intent" {
        Proposal = "proposal",
        Plan = "plan",
        Order = "order",
        OriginalOrder = "original-order",
        ReflexOrder = "reflex-order",
        FillerOrder = "filler-order",
        InstanceOrder = "instance-order",
        Option = "option",
    }
}

fhir_code_system! {
    /// The clinical priority of a request.
    RequestPriority = "http://hl7.org/fhir/request-priority" {
        Routine = "routine",
        Urgent = "urgent",
        Asap = "asap",
        Stat = "stat",
    }
}

fhir_code_system! {
    /// The status of an immunization event.
    ImmunizationStatus = "http://hl7.org/fhir/medication-admin-status" {
        Completed = "completed",
        EnteredInError = "entered-in-error",
    }
}

fhir_code_system! {
    MedicationStatus = "http://hl7.org/fhir/medication-status" {
        Active = "active",
        Inactive = "inactive",
        EnteredInError = "entered-in-error",
    }
}

fhir_code_system! {
    MedicationStatementStatus = "http://hl7.org/fhir/medication-statement-status" {
        Active = "active",
        Completed = "completed",
        EnteredInError = "entered-in-error",
        Intended = "intended",
        Stopped = "stopped",
        OnHold = "on-hold",
    }
}

fhir_code_system! {
    /// Whether the patient is taking the medication.
    MedicationStatementTaken = "http://hl7.org/fhir/medication-statement-taken" {
        Yes = "y",
        No = "n",
        Unknown = "unk",
        NotApplicable = "na",
    }
}

fhir_code_system! {
    MedicationRequestStatus = "http://hl7.org/fhir/medication-request-status" {
        Active = "active",
        OnHold = "on-hold",
        Cancelled = "cancelled",
        Completed = "completed",
        EnteredInError = "entered-in-error",
        Stopped = "stopped",
        Draft = "draft",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    MedicationRequestIntent = "http://hl7.org/fhir/medication-request-intent" {
        Proposal = "proposal",
        Plan = "plan",
        Order = "order",
        InstanceOrder = "instance-order",
    }
}

fhir_code_system! {
    /// Lifecycle status of the questionnaire response.
    QuestionnaireResponseStatus = "http://hl7.org/fhir/questionnaire-answers-status" {
        InProgress = "in-progress",
        Completed = "completed",
        Amended = "amended",
        EnteredInError = "entered-in-error",
        Stopped = "stopped",
    }
}

fhir_code_system! {
    /// Distinguishes groups from questions and display text and indicates
    /// data type for questions.
    QuestionnaireItemType = "http://hl7.org/fhir/item-type" {
        Group = "group",
        Display = "display",
        Question = "question",
        Boolean = "boolean",
        Decimal = "decimal",
        Integer = "integer",
        Date = "date",
        DateTime = "dateTime",
        Time = "time",
        String = "string",
        Text = "text",
        Url = "url",
        Choice = "choice",
        OpenChoice = "open-choice",
        Attachment = "attachment",
        Reference = "reference",
        Quantity = "quantity",
    }
}

//=============================================================================
// Plan definitions
//=============================================================================

fhir_code_system! {
    ActionConditionKind = "http://hl7.org/fhir/action-condition-kind" {
        Applicability = "applicability",
        Start = "start",
        Stop = "stop",
    }
}

fhir_code_system! {
    ActionRelationshipType = "http://hl7.org/fhir/action-relationship-type" {
        BeforeStart = "before-start",
        Before = "before",
        BeforeEnd = "before-end",
        ConcurrentWithStart = "concurrent-with-start",
        Concurrent = "concurrent",
        ConcurrentWithEnd = "concurrent-with-end",
        AfterStart = "after-start",
        After = "after",
        AfterEnd = "after-end",
    }
}

fhir_code_system! {
    ActionParticipantType = "http://hl7.org/fhir/action-participant-type" {
        Patient = "patient",
        Practitioner = "practitioner",
        RelatedPerson = "related-person",
    }
}

fhir_code_system! {
    ActionGroupingBehavior = "http://hl7.org/fhir/action-grouping-behavior" {
        VisualGroup = "visual-group",
        LogicalGroup = "logical-group",
        SentenceGroup = "sentence-group",
    }
}

fhir_code_system! {
    ActionSelectionBehavior = "http://hl7.org/fhir/action-selection-behavior" {
        Any = "any",
        All = "all",
        AllOrNone = "all-or-none",
        ExactlyOne = "exactly-one",
        AtMostOne = "at-most-one",
        OneOrMore = "one-or-more",
    }
}

fhir_code_system! {
    ActionRequiredBehavior = "http://hl7.org/fhir/action-required-behavior" {
        Must = "must",
        Could = "could",
        MustUnlessDocumented = "must-unless-documented",
    }
}

fhir_code_system! {
    ActionPrecheckBehavior = "http://hl7.org/fhir/action-precheck-behavior" {
        Yes = "yes",
        No = "no",
    }
}

fhir_code_system! {
    ActionCardinalityBehavior = "http://hl7.org/fhir/action-cardinality-behavior" {
        Single = "single",
        Multiple = "multiple",
    }
}

fhir_code_system! {
    /// The status of a request such as a referral.
    RequestStatus = "http://hl7.org/fhir/request-status" {
        Draft = "draft",
        Active = "active",
        Suspended = "suspended",
        Cancelled = "cancelled",
        Completed = "completed",
        EnteredInError = "entered-in-error",
        Unknown = "unknown",
    }
}

fhir_code_system! {
    SpecimenStatus = "http://hl7.org/fhir/specimen-status" {
        Available = "available",
        Unavailable = "unavailable",
        Unsatisfactory = "unsatisfactory",
        EnteredInError = "entered-in-error",
    }
}

fhir_code_system! {
    /// A code to indicate if the substance is actively used.
    SubstanceStatus = "http://hl7.org/fhir/substance-status" {
        Active = "active",
        Inactive = "inactive",
        EnteredInError = "entered-in-error",
    }
}

fhir_code_system! {
    /// How a property is represented when serialized.
    PropertyRepresentation = "http://hl7.org/fhir/property-representation" {
        XmlAttr = "xmlAttr",
        XmlText = "xmlText",
        TypeAttr = "typeAttr",
        CdaText = "cdaText",
        Xhtml = "xhtml",
    }
}

fhir_code_system! {
    SlicingRules = "http://hl7.org/fhir/resource-slicing-rules" {
        Closed = "closed",
        Open = "open",
        OpenAtEnd = "openAtEnd",
    }
}

fhir_code_system! {
    /// How an element value is interpreted when discrimination is evaluated.
    DiscriminatorType = "http://hl7.org/fhir/discriminator-type" {
        Value = "value",
        Exists = "exists",
        Pattern = "pattern",
        Type = "type",
        Profile = "profile",
    }
}

fhir_code_system! {
    AggregationMode = "http://hl7.org/fhir/resource-aggregation-mode" {
        Contained = "contained",
        Referenced = "referenced",
        Bundled = "bundled",
    }
}

fhir_code_system! {
    /// Whether a reference needs to be version specific or version independent.
    ReferenceVersionRules = "http://hl7.org/fhir/reference-version-rules" {
        Either = "either",
        Independent = "independent",
        Specific = "specific",
    }
}

fhir_code_system! {
    /// SHALL applications comply with this constraint?
    ConstraintSeverity = "http://hl7.org/fhir/constraint-severity" {
        Error = "error",
        Warning = "warning",
    }
}

fhir_code_system! {
    /// Indication of the degree of conformance expectations associated with a binding.
    BindingStrength = "http://hl7.org/fhir/binding-strength" {
        Required = "required",
        Extensible = "extensible",
        Preferred = "preferred",
        Example = "example",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_round_trip() {
        assert_eq!(ObservationStatus::try_from_code("final"), Ok(ObservationStatus::Final));
        assert_eq!(ObservationStatus::Final.as_code(), "final");
        assert_eq!(QuantityComparator::LessOrEqual.to_string(), "<=");
        assert!(HttpVerb::try_from_code("get").is_err());
    }

    #[test]
    fn test_code_named_error_parses() {
        assert_eq!(IssueSeverity::try_from("error"), Ok(IssueSeverity::Error));
        assert_eq!(IssueSeverity::try_from_code("fatal"), Ok(IssueSeverity::Fatal));
        assert_eq!(IssueSeverity::Error.to_string(), "error");
        assert!(IssueSeverity::try_from("failure").is_err());
        assert_eq!(ConstraintSeverity::try_from("error"), Ok(ConstraintSeverity::Error));
    }

    #[test]
    fn test_unknown_code_is_a_type_mismatch() {
        let err = ObservationStatus::from_json(&json!("done")).unwrap_err();
        match err {
            DecodeError::TypeMismatch { expected, .. } => {
                assert_eq!(expected, "a code from http://hl7.org/fhir/observation-status");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(ObservationStatus::from_json(&json!(1)).is_err());
    }

    #[test]
    fn test_to_codeable_concept() {
        let concept = AdministrativeGender::Female.to_codeable_concept();
        let coding = &concept.coding.unwrap()[0];
        assert_eq!(
            coding.system.as_ref().and_then(|s| s.value.as_deref()),
            Some("http://hl7.org/fhir/administrative-gender")
        );
        assert_eq!(coding.code.as_ref().and_then(|c| c.value.as_deref()), Some("female"));
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_value(BundleType::Searchset).unwrap(), json!("searchset"));
        let verb: HttpVerb = serde_json::from_value(json!("PUT")).unwrap();
        assert_eq!(verb, HttpVerb::Put);
    }
}

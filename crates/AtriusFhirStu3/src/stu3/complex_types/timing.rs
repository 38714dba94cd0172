use atrius_stu3_macros::FhirSerde;

use crate::stu3::*;

/// Choice of types for the bounds\[x\] field in TimingRepeat
#[derive(Debug, Clone, PartialEq, FhirSerde)]
#[fhir_choice_element(base_name = "bounds")]
pub enum TimingRepeatBounds {
    /// Variant accepting the Duration type.
    #[fhir_serde(rename = "boundsDuration")]
    Duration(Duration),
    /// Variant accepting the Range type.
    #[fhir_serde(rename = "boundsRange")]
    Range(Range),
    /// Variant accepting the Period type.
    #[fhir_serde(rename = "boundsPeriod")]
    Period(Period),
}

/// When the event is to occur
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct TimingRepeat {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// Length/Range of lengths, or (Start and/or end) limits
    #[fhir_serde(flatten)]
    pub bounds: Option<TimingRepeatBounds>,
    /// Number of times to repeat
    pub count: Option<Integer>,
    /// Maximum number of times to repeat
    #[fhir_serde(rename = "countMax")]
    pub count_max: Option<Integer>,
    /// How long when it happens
    pub duration: Option<Decimal>,
    /// How long when it happens (Max)
    #[fhir_serde(rename = "durationMax")]
    pub duration_max: Option<Decimal>,
    /// s | min | h | d | wk | mo | a - unit of time (UCUM)
    #[fhir_serde(rename = "durationUnit")]
    pub duration_unit: Option<Coded<UnitsOfTime>>,
    /// Event occurs frequency times per period
    pub frequency: Option<Integer>,
    /// Event occurs up to frequencyMax times per period
    #[fhir_serde(rename = "frequencyMax")]
    pub frequency_max: Option<Integer>,
    /// Event occurs frequency times per period
    pub period: Option<Decimal>,
    /// Upper limit of period (3-4 hours)
    #[fhir_serde(rename = "periodMax")]
    pub period_max: Option<Decimal>,
    /// s | min | h | d | wk | mo | a - unit of time (UCUM)
    #[fhir_serde(rename = "periodUnit")]
    pub period_unit: Option<Coded<UnitsOfTime>>,
    /// mon | tue | wed | thu | fri | sat | sun
    #[fhir_serde(rename = "dayOfWeek")]
    pub day_of_week: Option<Vec<Coded<DaysOfWeek>>>,
    /// Time of day for action
    #[fhir_serde(rename = "timeOfDay")]
    pub time_of_day: Option<Vec<Time>>,
    /// Regular life events the event is tied to
    pub when: Option<Vec<Coded<EventTiming>>>,
    /// Minutes from event (before or after)
    pub offset: Option<UnsignedInt>,
}

/// A timing schedule that specifies an event that may occur multiple times.
#[derive(Debug, Clone, PartialEq, Default, FhirSerde)]
pub struct Timing {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    /// When the event occurs
    pub event: Option<Vec<DateTime>>,
    pub repeat: Option<TimingRepeat>,
    /// BID | TID | QID | AM | PM | QD | QOD | Q4H | Q6H +
    pub code: Option<CodeableConcept>,
}

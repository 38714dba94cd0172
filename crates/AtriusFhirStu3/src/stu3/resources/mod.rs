//! STU3 resources.

pub mod allergy_intolerance;
pub mod basic;
pub mod binary;
pub mod bundle;
pub mod care_plan;
pub mod code_system;
pub mod composition;
pub mod concept_map;
pub mod condition;
pub mod diagnostic_report;
pub mod family_member_history;
pub mod goal;
pub mod immunization;
pub mod library;
pub mod medication;
pub mod medication_request;
pub mod medication_statement;
pub mod observation;
pub mod operation_outcome;
pub mod organization;
pub mod parameters;
pub mod patient;
pub mod plan_definition;
pub mod practitioner;
pub mod practitioner_role;
pub mod procedure;
pub mod provenance;
pub mod questionnaire;
pub mod questionnaire_response;
pub mod referral_request;
pub mod specimen;
pub mod substance;
pub mod task;
pub mod value_set;

pub use allergy_intolerance::*;
pub use basic::*;
pub use binary::*;
pub use bundle::*;
pub use care_plan::*;
pub use code_system::*;
pub use composition::*;
pub use concept_map::*;
pub use condition::*;
pub use diagnostic_report::*;
pub use family_member_history::*;
pub use goal::*;
pub use immunization::*;
pub use library::*;
pub use medication::*;
pub use medication_request::*;
pub use medication_statement::*;
pub use observation::*;
pub use operation_outcome::*;
pub use organization::*;
pub use parameters::*;
pub use patient::*;
pub use plan_definition::*;
pub use practitioner::*;
pub use practitioner_role::*;
pub use procedure::*;
pub use provenance::*;
pub use questionnaire::*;
pub use questionnaire_response::*;
pub use referral_request::*;
pub use specimen::*;
pub use substance::*;
pub use task::*;
pub use value_set::*;

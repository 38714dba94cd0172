//! FHIR STU3 (3.0.x) data model.
//!
//! Every type here derives [`FhirSerde`](atrius_stu3_macros::FhirSerde), so
//! each one reads and writes the FHIR JSON representation directly. The
//! submodules are flattened into this namespace; note that `String` in here
//! is the FHIR `string` primitive, not `std::string::String`.

#[macro_use]
mod macros;

pub mod code_systems;
pub mod complex_types;
pub mod primitives;
pub mod resource;
pub mod resources;

pub use code_systems::*;
pub use complex_types::*;
pub use primitives::*;
pub use resource::*;
pub use resources::*;

pub use crate::element::Element;

/// FHIR version implemented by this module.
pub const FHIR_VERSION: &str = "3.0.2";

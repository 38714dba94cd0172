//! # STU3 Macros - Procedural Macros for the FHIR STU3 Model
//!
//! This crate provides the `#[derive(FhirSerde)]` macro that turns a plain
//! FHIR type declaration into its JSON codec. The generated code targets the
//! runtime in `atrius_fhir_stu3::codec` through `crate::` paths, so the derive
//! is meant to be used inside that crate only.
//!
//! ## FHIR Serialization Patterns
//!
//! ### Extension Pattern
//!
//! FHIR primitives can carry metadata in a parallel `_fieldName` object:
//!
//! ```json
//! {
//!   "status": "active",
//!   "_status": {
//!     "id": "status-1",
//!     "extension": [...]
//!   }
//! }
//! ```
//!
//! ### Array Serialization
//!
//! Arrays of primitives are split into a value array and an extension array:
//!
//! ```json
//! {
//!   "given": ["John", null],
//!   "_given": [null, {"id": "name-2"}]
//! }
//! ```
//!
//! ### Choice Types
//!
//! FHIR's `[x]` fields appear as a single key carrying a type suffix:
//!
//! ```json
//! { "valueQuantity": {...} }
//! { "valueString": "text" }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! #[derive(Debug, Clone, PartialEq, FhirSerde)]
//! #[fhir_resource(domain)]
//! pub struct Observation {
//!     pub id: Option<Id>,
//!     #[fhir_serde(rename = "implicitRules")]
//!     pub implicit_rules: Option<Uri>,
//!     pub status: Coded<ObservationStatus>,
//!     pub code: CodeableConcept,
//!     #[fhir_serde(flatten)]
//!     pub value: Option<ObservationValue>,
//!     // ...
//! }
//! ```

extern crate proc_macro;

use proc_macro::TokenStream;
use syn::{parse_macro_input, Data, DeriveInput};

use crate::choice_impl::generate_choice_impl;
use crate::field_helpers::enum_tag;
use crate::object_impl::generate_struct_impl;
use crate::resource_enum_impl::generate_resource_enum_impl;

pub(crate) mod choice_impl;
pub(crate) mod field_helpers;
pub(crate) mod object_impl;
pub(crate) mod resource_enum_impl;
pub(crate) mod serde_bridge;
pub(crate) mod type_helpers;

/// Derives the FHIR JSON codec for a struct or enum.
///
/// # Supported Attributes
///
/// - `#[fhir_serde(rename = "name")]` on a field or choice variant sets its JSON key
/// - `#[fhir_serde(flatten)]` on a field marks a choice type whose keys live in the parent
/// - `#[fhir_resource]` / `#[fhir_resource(domain)]` on a struct marks a resource
/// - `#[fhir_choice_element(base_name = "value")]` on an enum marks a choice type
/// - `#[fhir_serde(tag = "resourceType")]` on an enum marks the resource registry
///
/// # Generated Implementations
///
/// ## For Structs:
/// - `FhirObject` and `FhirField`; required fields are the ones not wrapped in `Option`
/// - `FhirResource` (and `FhirDomainResource`) for resources
/// - `serde::Serialize` / `serde::Deserialize` delegating to the codec
///
/// ## For Choice Enums:
/// - `FhirChoice`, which rejects input carrying more than one of the group's keys
///
/// ## For the Registry Enum:
/// - `FhirObject`, `FhirField`, serde impls, `From<T>` per variant and
///   `resource_type()` / `RESOURCE_TYPES`
#[proc_macro_derive(FhirSerde, attributes(fhir_serde, fhir_choice_element, fhir_resource))]
pub fn fhir_serde_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data) => generate_struct_impl(&input, data),
        Data::Enum(data) => match enum_tag(&input.attrs) {
            Ok(Some(tag)) => generate_resource_enum_impl(&input, data, &tag),
            Ok(None) => generate_choice_impl(&input, data),
            Err(err) => Err(err),
        },
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "FhirSerde cannot be derived for unions",
        )),
    };

    expanded
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

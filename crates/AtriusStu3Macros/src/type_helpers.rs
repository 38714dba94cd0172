//=============================================================================
// Type Analysis Helper Functions
//=============================================================================

use syn::{GenericArgument, Path, PathArguments, Type, TypePath};

use crate::field_helpers::is_flattened;

/// Returns `T` when `ty` is `<wrapper><T>`, judged by the last path segment.
fn single_generic_argument<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if let Type::Path(TypePath {
        path: Path { segments, .. },
        ..
    }) = ty
        && let Some(segment) = segments.last()
        && segment.ident == wrapper
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner_ty)) = args.args.first()
    {
        return Some(inner_ty);
    }
    None
}

/// Extracts the inner type from an `Option<T>` type.
///
/// ```rust,ignore
/// // Option<Vec<HumanName>> -> Some(Vec<HumanName>)
/// // String                 -> None
/// ```
pub(crate) fn get_option_inner_type(ty: &Type) -> Option<&Type> {
    single_generic_argument(ty, "Option")
}

/// Extracts the inner type from a `Vec<T>` type.
pub(crate) fn get_vec_inner_type(ty: &Type) -> Option<&Type> {
    single_generic_argument(ty, "Vec")
}

/// Extracts the inner type from a `Box<T>` type. Registry variants box
/// their payload so that `Resource` stays small.
pub(crate) fn get_box_inner_type(ty: &Type) -> Option<&Type> {
    single_generic_argument(ty, "Box")
}

/// How a struct field maps onto the JSON object.
///
/// The payload type of `Single` and `List` implements `FhirField`; the payload
/// of `Choice` implements `FhirChoice`. Primitive wrappers, complex types and
/// boxed types all go through the same trait so no alias list is needed here.
pub(crate) enum FieldShape<'a> {
    /// `T` (required) or `Option<T>`
    Single { inner: &'a Type, required: bool },
    /// `Vec<T>` (required, at least one item) or `Option<Vec<T>>`
    List { inner: &'a Type, required: bool },
    /// `#[fhir_serde(flatten)]` on `C` (required) or `Option<C>`
    Choice { choice: &'a Type, required: bool },
}

/// Classifies a field by its flatten attribute and its `Option`/`Vec` wrapping.
pub(crate) fn classify_field(field: &syn::Field) -> syn::Result<FieldShape<'_>> {
    let (ty, required) = match get_option_inner_type(&field.ty) {
        Some(inner) => (inner, false),
        None => (&field.ty, true),
    };

    if is_flattened(field)? {
        if get_vec_inner_type(ty).is_some() {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "a choice-type field cannot be repeated",
            ));
        }
        return Ok(FieldShape::Choice {
            choice: ty,
            required,
        });
    }

    match get_vec_inner_type(ty) {
        Some(inner) => Ok(FieldShape::List { inner, required }),
        None => Ok(FieldShape::Single { inner: ty, required }),
    }
}

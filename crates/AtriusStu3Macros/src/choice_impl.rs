use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, DeriveInput, Fields};

use crate::field_helpers::{choice_base_name, variant_rename};

/// Generates `FhirChoice` for a `value[x]` style enum.
///
/// Each variant is a newtype over one allowed type. Its JSON key is the
/// `#[fhir_serde(rename)]` value, or `base_name` followed by the variant name.
///
/// ```rust,ignore
/// #[derive(FhirSerde)]
/// #[fhir_choice_element(base_name = "effective")]
/// pub enum ObservationEffective {
///     #[fhir_serde(rename = "effectiveDateTime")]
///     DateTime(DateTime),
///     #[fhir_serde(rename = "effectivePeriod")]
///     Period(Period),
/// }
/// ```
pub(crate) fn generate_choice_impl(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let base_name = choice_base_name(&input.attrs)?.ok_or_else(|| {
        syn::Error::new_spanned(
            name,
            "choice enums need #[fhir_choice_element(base_name = \"...\")], \
             registry enums need #[fhir_serde(tag = \"resourceType\")]",
        )
    })?;

    let mut variants = Vec::new();
    let mut keys = Vec::new();
    let mut siblings = Vec::new();
    let mut suffixes = Vec::new();
    let mut types = Vec::new();

    for variant in &data.variants {
        let ty = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "choice variants must wrap exactly one type",
                ));
            }
        };
        let key = match variant_rename(variant)? {
            Some(rename) => rename,
            None => format!("{base_name}{}", variant.ident),
        };
        let suffix = key
            .strip_prefix(base_name.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| variant.ident.to_string());

        siblings.push(format!("_{key}"));
        keys.push(key);
        suffixes.push(suffix);
        variants.push(&variant.ident);
        types.push(ty);
    }

    Ok(quote! {
        impl #impl_generics crate::codec::FhirChoice for #name #ty_generics #where_clause {
            const BASE_NAME: &'static str = #base_name;
            const KEYS: &'static [&'static str] = &[#(#keys),*];

            fn decode_choice(
                obj: &crate::codec::JsonObject,
                options: &crate::codec::DecodeOptions,
            ) -> ::std::result::Result<::std::option::Option<Self>, crate::error::DecodeError> {
                let Some(key) = crate::codec::select_choice(obj, Self::BASE_NAME, Self::KEYS)? else {
                    return Ok(None);
                };
                #(
                    if key == #keys {
                        let value = crate::codec::decode_field::<#types>(obj, #keys, #siblings, options)?;
                        return Ok(value.map(Self::#variants));
                    }
                )*
                Ok(None)
            }

            fn encode_choice(&self, obj: &mut crate::codec::JsonObject) {
                match self {
                    #(
                        Self::#variants(value) => {
                            crate::codec::encode_field(obj, #keys, #siblings, Some(value));
                        }
                    )*
                }
            }

            fn key(&self) -> &'static str {
                match self {
                    #(Self::#variants(_) => #keys,)*
                }
            }

            fn type_suffix(&self) -> &'static str {
                match self {
                    #(Self::#variants(_) => #suffixes,)*
                }
            }
        }
    })
}

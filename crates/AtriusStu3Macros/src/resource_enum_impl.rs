use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, DeriveInput, Fields};

use crate::serde_bridge::generate_serde_impls;
use crate::type_helpers::get_box_inner_type;

/// Generates the polymorphic registry for an enum tagged with
/// `#[fhir_serde(tag = "resourceType")]`.
///
/// Every variant is named after its resource type and wraps that resource,
/// optionally boxed. Decoding dispatches on the `resourceType` string and an
/// unlisted name is an `UnknownResourceType` error.
pub(crate) fn generate_resource_enum_impl(
    input: &DeriveInput,
    data: &DataEnum,
    tag: &str,
) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let name_str = name.to_string();

    if tag != "resourceType" {
        return Err(syn::Error::new_spanned(
            name,
            "only `resourceType` is supported as a registry tag",
        ));
    }

    let mut variants = Vec::new();
    let mut type_names = Vec::new();
    let mut inner_types = Vec::new();
    let mut constructors = Vec::new();

    for variant in &data.variants {
        let ty = match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => &fields.unnamed[0].ty,
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "registry variants must wrap exactly one resource type",
                ));
            }
        };
        let (inner, constructor) = match get_box_inner_type(ty) {
            Some(inner) => (inner, quote! { ::std::boxed::Box::new }),
            None => (ty, quote! {}),
        };
        variants.push(&variant.ident);
        type_names.push(variant.ident.to_string());
        inner_types.push(inner);
        constructors.push(constructor);
    }

    let serde_impls = generate_serde_impls(input);

    Ok(quote! {
        impl #name {
            /// Every `resourceType` this registry can decode.
            pub const RESOURCE_TYPES: &'static [&'static str] = &[#(#type_names),*];

            /// The `resourceType` discriminator of the wrapped resource.
            pub fn resource_type(&self) -> &'static str {
                match self {
                    #(Self::#variants(_) => #type_names,)*
                }
            }

            /// Returns `true` when `resource_type` names a registered type.
            pub fn is_known_resource_type(resource_type: &str) -> bool {
                Self::RESOURCE_TYPES.contains(&resource_type)
            }
        }

        impl crate::codec::FhirObject for #name {
            const TYPE_NAME: &'static str = #name_str;

            fn is_known_field(key: &str) -> bool {
                key == "resourceType"
            }

            fn decode_object(
                obj: &crate::codec::JsonObject,
                options: &crate::codec::DecodeOptions,
            ) -> ::std::result::Result<Self, crate::error::DecodeError> {
                let resource_type = crate::codec::resource_type_of(obj)?;
                match resource_type {
                    #(
                        #type_names => Ok(Self::#variants(#constructors(
                            <#inner_types as crate::codec::FhirObject>::decode_object(obj, options)?,
                        ))),
                    )*
                    other => Err(crate::error::DecodeError::unknown_resource_type(other)),
                }
            }

            fn encode_object(&self, obj: &mut crate::codec::JsonObject) {
                match self {
                    #(
                        Self::#variants(resource) => {
                            <#inner_types as crate::codec::FhirObject>::encode_object(resource, obj);
                        }
                    )*
                }
            }
        }

        impl crate::codec::FhirField for #name {
            fn decode_parts(
                value: ::std::option::Option<&serde_json::Value>,
                sibling: ::std::option::Option<&serde_json::Value>,
                options: &crate::codec::DecodeOptions,
            ) -> ::std::result::Result<Self, crate::error::DecodeError> {
                crate::codec::decode_object_parts::<Self>(value, sibling, options)
            }

            fn encode_parts(
                &self,
            ) -> (
                ::std::option::Option<serde_json::Value>,
                ::std::option::Option<serde_json::Value>,
            ) {
                (Some(crate::codec::object_to_value(self)), None)
            }
        }

        #(
            impl ::std::convert::From<#inner_types> for #name {
                fn from(resource: #inner_types) -> Self {
                    Self::#variants(#constructors(resource))
                }
            }
        )*

        #serde_impls
    })
}

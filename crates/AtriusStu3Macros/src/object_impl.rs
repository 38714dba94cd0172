use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{DataStruct, DeriveInput, Fields};

use crate::field_helpers::{get_effective_field_name, resource_kind, ResourceKind};
use crate::serde_bridge::generate_serde_impls;
use crate::type_helpers::{classify_field, FieldShape};

/// Generates `FhirObject`, `FhirField` and the serde bridge for a struct, plus
/// the resource traits when the struct carries `#[fhir_resource]`.
///
/// Every field is decoded into a `field_<name>` local before the struct is
/// built, so a decode error leaves nothing half-constructed.
pub(crate) fn generate_struct_impl(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            name,
            "FhirSerde can only be derived for structs with named fields",
        ));
    };

    let kind = resource_kind(&input.attrs)?;

    let mut decoders = Vec::new();
    let mut encoders = Vec::new();
    let mut known_keys: Vec<String> = Vec::new();
    let mut choice_types = Vec::new();
    let mut field_idents = Vec::new();
    let mut locals = Vec::new();

    if kind.is_some() {
        known_keys.push("resourceType".to_string());
    }

    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let local = format_ident!("field_{}", ident.unraw());

        match classify_field(field)? {
            FieldShape::Choice { choice, required } => {
                choice_types.push(choice);
                if required {
                    decoders.push(quote! {
                        let #local = crate::codec::require_choice::<#choice>(
                            <#choice as crate::codec::FhirChoice>::decode_choice(obj, options)?,
                        )?;
                    });
                    encoders.push(quote! {
                        crate::codec::FhirChoice::encode_choice(&self.#ident, obj);
                    });
                } else {
                    decoders.push(quote! {
                        let #local = <#choice as crate::codec::FhirChoice>::decode_choice(obj, options)?;
                    });
                    encoders.push(quote! {
                        if let Some(choice) = &self.#ident {
                            crate::codec::FhirChoice::encode_choice(choice, obj);
                        }
                    });
                }
            }
            FieldShape::Single { inner, required } => {
                let key = get_effective_field_name(field)?;
                let sibling = format!("_{key}");
                let decoded = quote! {
                    crate::codec::decode_field::<#inner>(obj, #key, #sibling, options)?
                };
                if required {
                    decoders.push(quote! { let #local = crate::codec::require(#decoded, #key)?; });
                    encoders.push(quote! {
                        crate::codec::encode_field(obj, #key, #sibling, Some(&self.#ident));
                    });
                } else {
                    decoders.push(quote! { let #local = #decoded; });
                    encoders.push(quote! {
                        crate::codec::encode_field(obj, #key, #sibling, self.#ident.as_ref());
                    });
                }
                known_keys.push(key);
                known_keys.push(sibling);
            }
            FieldShape::List { inner, required } => {
                let key = get_effective_field_name(field)?;
                let sibling = format!("_{key}");
                let decoded = quote! {
                    crate::codec::decode_list::<#inner>(obj, #key, #sibling, options)?
                };
                if required {
                    decoders.push(quote! { let #local = crate::codec::require(#decoded, #key)?; });
                    encoders.push(quote! {
                        crate::codec::encode_list(obj, #key, #sibling, Some(self.#ident.as_slice()));
                    });
                } else {
                    decoders.push(quote! { let #local = #decoded; });
                    encoders.push(quote! {
                        crate::codec::encode_list(obj, #key, #sibling, self.#ident.as_deref());
                    });
                }
                known_keys.push(key);
                known_keys.push(sibling);
            }
        }

        field_idents.push(ident);
        locals.push(local);
    }

    let (check_resource_type, write_resource_type) = match kind {
        Some(_) => (
            quote! { crate::codec::check_resource_type(obj, #name_str)?; },
            quote! {
                obj.insert(
                    "resourceType".to_owned(),
                    serde_json::Value::String(#name_str.to_owned()),
                );
            },
        ),
        None => (quote! {}, quote! {}),
    };

    let resource_traits = match kind {
        Some(kind) => generate_resource_traits(input, kind),
        None => quote! {},
    };

    let serde_impls = generate_serde_impls(input);

    Ok(quote! {
        impl #impl_generics crate::codec::FhirObject for #name #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #name_str;

            fn is_known_field(key: &str) -> bool {
                const KNOWN: &[&str] = &[#(#known_keys),*];
                KNOWN.contains(&key)
                    #(|| <#choice_types as crate::codec::FhirChoice>::accepts_key(key))*
            }

            fn decode_object(
                obj: &crate::codec::JsonObject,
                options: &crate::codec::DecodeOptions,
            ) -> ::std::result::Result<Self, crate::error::DecodeError> {
                #check_resource_type
                crate::codec::check_unknown_fields::<Self>(obj, options)?;
                #(#decoders)*
                Ok(Self {
                    #(#field_idents: #locals,)*
                })
            }

            fn encode_object(&self, obj: &mut crate::codec::JsonObject) {
                #write_resource_type
                #(#encoders)*
            }
        }

        impl #impl_generics crate::codec::FhirField for #name #ty_generics #where_clause {
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

        #resource_traits

        #serde_impls
    })
}

/// Accessors for the Resource and DomainResource base fields. The struct must
/// declare those fields under their usual names.
fn generate_resource_traits(input: &DeriveInput, kind: ResourceKind) -> TokenStream {
    let name = &input.ident;
    let name_str = name.to_string();

    let resource = quote! {
        impl crate::stu3::resource::FhirResource for #name {
            const RESOURCE_TYPE: &'static str = #name_str;

            fn id(&self) -> ::std::option::Option<&crate::stu3::Id> {
                self.id.as_ref()
            }

            fn meta(&self) -> ::std::option::Option<&crate::stu3::Meta> {
                self.meta.as_ref()
            }

            fn implicit_rules(&self) -> ::std::option::Option<&crate::stu3::Uri> {
                self.implicit_rules.as_ref()
            }

            fn language(&self) -> ::std::option::Option<&crate::stu3::Code> {
                self.language.as_ref()
            }
        }
    };

    let domain = match kind {
        ResourceKind::DomainResource => quote! {
            impl crate::stu3::resource::FhirDomainResource for #name {
                fn text(&self) -> ::std::option::Option<&crate::stu3::Narrative> {
                    self.text.as_ref()
                }

                fn contained(&self) -> &[crate::stu3::Resource] {
                    self.contained.as_deref().unwrap_or(&[])
                }

                fn extension(&self) -> &[crate::stu3::Extension] {
                    self.extension.as_deref().unwrap_or(&[])
                }

                fn modifier_extension(&self) -> &[crate::stu3::Extension] {
                    self.modifier_extension.as_deref().unwrap_or(&[])
                }
            }
        },
        ResourceKind::Resource => quote! {},
    };

    quote! {
        #resource
        #domain
    }
}

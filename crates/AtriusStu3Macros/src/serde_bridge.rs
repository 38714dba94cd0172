use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

/// `serde::Serialize` and `serde::Deserialize` that route through the codec,
/// so derived types also work with `serde_json::to_string` and friends.
///
/// Deserialization buffers into a `serde_json::Value` first; the FHIR
/// `_field` siblings and choice keys can only be resolved with the whole
/// object in view.
pub(crate) fn generate_serde_impls(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics serde::Serialize for #name #ty_generics #where_clause {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&crate::codec::object_to_value(self), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for #name #ty_generics #where_clause {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                crate::from_value::<Self>(&value).map_err(serde::de::Error::custom)
            }
        }
    }
}

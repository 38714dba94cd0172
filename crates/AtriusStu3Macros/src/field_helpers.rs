use heck::ToLowerCamelCase;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{token, Attribute, Expr, Lit, Meta};

/// Parses the comma separated arguments of every `#[<name>(...)]` attribute.
fn attribute_args(attrs: &[Attribute], name: &str) -> syn::Result<Vec<Meta>> {
    let mut out = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident(name) {
            continue;
        }
        if let Meta::List(_) = &attr.meta {
            let list = attr.parse_args_with(Punctuated::<Meta, token::Comma>::parse_terminated)?;
            out.extend(list);
        }
    }
    Ok(out)
}

/// Returns the string value of `key = "..."` inside `#[<name>(...)]`, if present.
fn string_arg(attrs: &[Attribute], name: &str, key: &str) -> syn::Result<Option<String>> {
    for meta in attribute_args(attrs, name)? {
        if let Meta::NameValue(nv) = meta
            && nv.path.is_ident(key)
        {
            if let Expr::Lit(expr_lit) = &nv.value
                && let Lit::Str(lit_str) = &expr_lit.lit
            {
                return Ok(Some(lit_str.value()));
            }
            return Err(syn::Error::new_spanned(
                &nv.value,
                format!("`{key}` expects a string literal"),
            ));
        }
    }
    Ok(None)
}

/// Determines the JSON key for a struct field.
///
/// `#[fhir_serde(rename = "...")]` wins. Otherwise the field identifier is
/// converted to camelCase after stripping any `r#` prefix, so `r#type`
/// becomes `type` and `modifier_extension` becomes `modifierExtension`.
pub(crate) fn get_effective_field_name(field: &syn::Field) -> syn::Result<String> {
    if let Some(rename) = string_arg(&field.attrs, "fhir_serde", "rename")? {
        return Ok(rename);
    }
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "FhirSerde requires named fields"))?;
    Ok(ident.unraw().to_string().to_lower_camel_case())
}

/// Checks for `#[fhir_serde(flatten)]`, which marks a choice-type field whose
/// keys live directly in the parent object.
pub(crate) fn is_flattened(field: &syn::Field) -> syn::Result<bool> {
    Ok(attribute_args(&field.attrs, "fhir_serde")?
        .iter()
        .any(|meta| matches!(meta, Meta::Path(path) if path.is_ident("flatten"))))
}

/// Explicit JSON key of a choice variant.
pub(crate) fn variant_rename(variant: &syn::Variant) -> syn::Result<Option<String>> {
    string_arg(&variant.attrs, "fhir_serde", "rename")
}

/// `#[fhir_choice_element(base_name = "value")]`
pub(crate) fn choice_base_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    string_arg(attrs, "fhir_choice_element", "base_name")
}

/// `#[fhir_serde(tag = "resourceType")]`
pub(crate) fn enum_tag(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    string_arg(attrs, "fhir_serde", "tag")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResourceKind {
    Resource,
    DomainResource,
}

/// Reads `#[fhir_resource]` or `#[fhir_resource(domain)]` from a struct.
pub(crate) fn resource_kind(attrs: &[Attribute]) -> syn::Result<Option<ResourceKind>> {
    let mut kind = None;
    for attr in attrs {
        if !attr.path().is_ident("fhir_resource") {
            continue;
        }
        kind = Some(ResourceKind::Resource);
        if let Meta::List(_) = &attr.meta {
            let list = attr.parse_args_with(Punctuated::<Meta, token::Comma>::parse_terminated)?;
            for meta in list {
                match meta {
                    Meta::Path(path) if path.is_ident("domain") => {
                        kind = Some(ResourceKind::DomainResource);
                    }
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "expected `#[fhir_resource]` or `#[fhir_resource(domain)]`",
                        ));
                    }
                }
            }
        }
    }
    Ok(kind)
}

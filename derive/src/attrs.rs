//! `#[validate(...)]` field attribute parsing.

use syn::{Error, Expr, Field, GenericArgument, LitStr, PathArguments, Result, Type};

/// Options attached to one field.
#[derive(Default)]
pub struct FieldAttrs {
    pub skip: bool,
    pub required: bool,
    pub with: Option<Expr>,
    pub with_async: Option<Expr>,
    pub rename: Option<LitStr>,
}

impl FieldAttrs {
    pub fn from_field(field: &Field) -> Result<Self> {
        let mut attrs = FieldAttrs::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("validate") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    attrs.skip = true;
                    Ok(())
                } else if meta.path.is_ident("required") {
                    attrs.required = true;
                    Ok(())
                } else if meta.path.is_ident("with") {
                    attrs.with = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("with_async") {
                    attrs.with_async = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    attrs.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported validate option; expected `skip`, `required`, `with`, `with_async` or `rename`",
                    ))
                }
            })?;
        }

        if attrs.skip && (attrs.required || attrs.with.is_some() || attrs.with_async.is_some()) {
            return Err(Error::new_spanned(
                field,
                "`#[validate(skip)]` cannot be combined with other validate options",
            ));
        }

        Ok(attrs)
    }
}

/// The `T` of an `Option<T>` field type.
///
/// Matches on the last path segment, so `std::option::Option<T>` is accepted too.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }

    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

//! Code generation for `#[derive(Validate)]` and `#[derive(AsyncValidate)]`.
//!
//! Both derives destructure the record, validate every non-skipped field
//! through `valid_rail::record::RecordValidation` in declaration order and
//! rebuild the record only when no field failed. The async derive creates all
//! field futures first and joins them.

use proc_macro2::{Span, TokenStream, TokenTree};
use quote::{format_ident, quote, quote_spanned, ToTokens};
use syn::spanned::Spanned;
use syn::{
    parse_quote, Data, DeriveInput, Error, Expr, Fields, GenericParam, Generics, Ident, Index,
    Member, Result, Type,
};

use crate::attrs::{option_inner, FieldAttrs};

struct FieldSpec {
    member: Member,
    binding: Ident,
    label: String,
    ty: Type,
    /// `T` of a `#[validate(required)]` `Option<T>` field.
    required: Option<Type>,
    /// Whether an attribute validator can live in a `static`.
    cached: bool,
    attrs: FieldAttrs,
}

enum Shape {
    Named,
    Tuple,
    Unit,
}

struct RecordSpec {
    shape: Shape,
    fields: Vec<FieldSpec>,
}

impl RecordSpec {
    fn parse(input: &DeriveInput, derive: &str) -> Result<Self> {
        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(_) => {
                return Err(Error::new_spanned(
                    &input.ident,
                    format!("{derive} cannot be derived for enums; use `valid_rail::Union` or implement it by hand"),
                ))
            }
            Data::Union(_) => {
                return Err(Error::new_spanned(
                    &input.ident,
                    format!("{derive} cannot be derived for unions"),
                ))
            }
        };

        let shape = match &data.fields {
            Fields::Named(_) => Shape::Named,
            Fields::Unnamed(_) => Shape::Tuple,
            Fields::Unit => Shape::Unit,
        };

        let self_ident = [Ident::new("Self", Span::call_site())];
        let concrete = input.generics.params.is_empty();

        let mut fields = Vec::with_capacity(data.fields.len());
        for (index, field) in data.fields.iter().enumerate() {
            let attrs = FieldAttrs::from_field(field)?;

            let (member, default_label) = match &field.ident {
                Some(ident) => {
                    let name = ident.to_string();
                    let name = name.strip_prefix("r#").map(str::to_string).unwrap_or(name);
                    (Member::Named(ident.clone()), name)
                }
                None => (Member::Unnamed(Index::from(index)), index.to_string()),
            };
            let label = attrs.rename.as_ref().map(|lit| lit.value()).unwrap_or(default_label);

            let required = if attrs.required {
                match option_inner(&field.ty) {
                    Some(inner) => Some(inner.clone()),
                    None => {
                        return Err(Error::new_spanned(
                            &field.ty,
                            "`#[validate(required)]` applies to `Option<T>` fields only",
                        ))
                    }
                }
            } else {
                None
            };

            fields.push(FieldSpec {
                member,
                binding: format_ident!("__field{}", index),
                label,
                ty: field.ty.clone(),
                required,
                cached: concrete && !mentions_any(field.ty.to_token_stream(), &self_ident),
                attrs,
            });
        }

        Ok(Self { shape, fields })
    }

    fn destructure(&self) -> TokenStream {
        let members = self.fields.iter().map(|f| &f.member);
        let bindings = self.fields.iter().map(|f| &f.binding);
        match self.shape {
            Shape::Named | Shape::Tuple => quote! {
                let Self { #(#members: #bindings),* } = self;
            },
            Shape::Unit => quote! {
                let _ = self;
            },
        }
    }

    /// Rebuilds `Self`; non-skipped bindings hold `Option`s at this point.
    fn rebuild(&self) -> TokenStream {
        let values = self.fields.iter().map(|f| {
            let member = &f.member;
            let binding = &f.binding;
            if f.attrs.skip {
                quote!(#member: #binding)
            } else {
                quote!(#member: #binding?)
            }
        });
        match self.shape {
            Shape::Named | Shape::Tuple => quote!(Self { #(#values),* }),
            Shape::Unit => quote!(Self),
        }
    }

    fn validated(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| !f.attrs.skip)
    }
}

/// Bounds every type parameter by `bound`, and every validated field type
/// that mentions a type parameter as well, so container impls with extra
/// requirements (`Send + 'static` elements, `Ord` keys) resolve.
fn add_bounds<'a>(
    generics: &Generics,
    bound: TokenStream,
    field_types: impl Iterator<Item = &'a Type>,
) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<Ident> = generics.type_params().map(|param| param.ident.clone()).collect();
    if params.is_empty() {
        return generics;
    }

    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param.bounds.push(parse_quote!(#bound));
        }
    }

    let where_clause = generics.make_where_clause();
    for ty in field_types {
        if mentions_any(ty.to_token_stream(), &params) {
            where_clause.predicates.push(parse_quote!(#ty: #bound));
        }
    }
    generics
}

fn mentions_any(tokens: TokenStream, params: &[Ident]) -> bool {
    tokens.into_iter().any(|token| match token {
        TokenTree::Ident(ident) => params.contains(&ident),
        TokenTree::Group(group) => mentions_any(group.stream(), params),
        _ => false,
    })
}

/// A `&Validator`-like reference to the validator `init` builds.
///
/// Concrete records build it once into a per-field `static`. A `static`
/// cannot name the impl's type parameters or `Self`, so generic records and
/// self-referential fields evaluate `init` on every call.
fn validator_ref(field: &FieldSpec, validator_ty: TokenStream, init: &Expr) -> TokenStream {
    if field.cached {
        quote! {{
            static __VALIDATOR: ::std::sync::OnceLock<#validator_ty> = ::std::sync::OnceLock::new();
            __VALIDATOR.get_or_init(|| #init)
        }}
    } else {
        quote!(&(#init))
    }
}

/// The type a field is validated as through its type's trait impl, if any.
fn strategy_type(field: &FieldSpec, explicit: bool) -> Option<&Type> {
    if explicit {
        return None;
    }
    Some(field.required.as_ref().unwrap_or(&field.ty))
}

/// Normalizes a field type's token rendering: `Vec < String >` becomes `Vec<String>`.
fn type_label(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let chars: Vec<char> = raw.chars().collect();
    let mut label = String::with_capacity(raw.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = i.checked_sub(1).and_then(|p| chars.get(p)).copied();
            let next = chars.get(i + 1).copied();
            let word = |ch: Option<char>| ch.is_some_and(|ch| ch.is_alphanumeric() || ch == '_');
            if word(prev) && word(next) {
                label.push(c);
            }
            continue;
        }
        label.push(c);
        if c == ',' || c == ';' {
            label.push(' ');
        }
    }
    label
}

/// Expands `#[derive(Validate)]`: the `Validate` impl plus the `Record` metadata impl.
pub fn derive_validate(input: &DeriveInput) -> Result<TokenStream> {
    let record = RecordSpec::parse(input, "Validate")?;
    let name = &input.ident;
    let name_str = name.to_string();

    let bounded = add_bounds(
        &input.generics,
        quote!(::valid_rail::Validate),
        record.validated().filter_map(|f| strategy_type(f, f.attrs.with.is_some())),
    );
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    let body = if record.validated().next().is_none() {
        quote! {
            let _ = __config;
            ::valid_rail::ValidationResult::Valid(self)
        }
    } else {
        let destructure = record.destructure();
        let steps = record.validated().map(sync_step);
        let rebuild = record.rebuild();
        quote! {
            #destructure
            let mut __record = ::valid_rail::record::RecordValidation::new(#name_str);
            #(#steps)*
            __record.finish(move || ::core::option::Option::Some(#rebuild))
        }
    };

    let record_impl = record_metadata(input, &record);

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::valid_rail::Validate for #name #ty_generics #where_clause {
            fn validate_with(
                self,
                __config: &::valid_rail::ValidationConfig,
            ) -> ::valid_rail::ValidationResult<Self> {
                #body
            }
        }

        #record_impl
    })
}

fn sync_step(field: &FieldSpec) -> TokenStream {
    let binding = &field.binding;
    let label = &field.label;

    match (&field.required, &field.attrs.with) {
        (Some(inner), Some(with)) => {
            let validator = validator_ref(field, quote!(::valid_rail::Validator<#inner>), with);
            quote! {
                let #binding = __record.required_with(#label, #binding, #validator, __config);
            }
        }
        (Some(inner), None) => {
            let check = quote_spanned! {inner.span()=>
                ::valid_rail::record::RecordValidation::required::<#inner>
            };
            quote! {
                let #binding = #check(&mut __record, #label, #binding, __config);
            }
        }
        (None, Some(with)) => {
            let ty = &field.ty;
            let validator = validator_ref(field, quote!(::valid_rail::Validator<#ty>), with);
            quote! {
                let #binding = __record.check(#label, #binding, #validator, __config);
            }
        }
        (None, None) => {
            let ty = &field.ty;
            let check = quote_spanned! {ty.span()=>
                ::valid_rail::record::RecordValidation::validate::<#ty>
            };
            quote! {
                let #binding = #check(&mut __record, #label, #binding, __config);
            }
        }
    }
}

fn record_metadata(input: &DeriveInput, record: &RecordSpec) -> TokenStream {
    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let shape = match record.shape {
        Shape::Named => quote!(Nominal),
        Shape::Tuple => quote!(Positional),
        Shape::Unit => quote!(Unit),
    };

    let descriptors = record.fields.iter().map(|f| {
        let label = &f.label;
        let type_name = type_label(&f.ty);
        let mut descriptor = quote! {
            ::valid_rail::record::FieldDescriptor::new(#label, #type_name)
        };
        if f.required.is_some() {
            descriptor = quote!(#descriptor.required());
        }
        if f.attrs.skip {
            descriptor = quote!(#descriptor.skipped());
        }
        descriptor
    });

    quote! {
        #[automatically_derived]
        impl #impl_generics ::valid_rail::record::Record for #name #ty_generics #where_clause {
            const NAME: &'static str = #name_str;
            const SHAPE: ::valid_rail::record::RecordShape = ::valid_rail::record::RecordShape::#shape;
            const FIELDS: &'static [::valid_rail::record::FieldDescriptor] = &[#(#descriptors),*];
        }
    }
}

/// Expands `#[derive(AsyncValidate)]`.
pub fn derive_async_validate(input: &DeriveInput) -> Result<TokenStream> {
    let record = RecordSpec::parse(input, "AsyncValidate")?;
    let name = &input.ident;
    let name_str = name.to_string();

    let bounded = add_bounds(
        &input.generics,
        quote!(::valid_rail::async_ext::AsyncValidate),
        record
            .validated()
            .filter_map(|f| strategy_type(f, f.attrs.with.is_some() || f.attrs.with_async.is_some())),
    );
    let (impl_generics, ty_generics, where_clause) = bounded.split_for_impl();

    let validated: Vec<&FieldSpec> = record.validated().collect();

    let body = if validated.is_empty() {
        quote! {
            let _ = __config;
            ::valid_rail::async_ext::ready(::valid_rail::ValidationResult::Valid(self))
        }
    } else {
        let destructure = record.destructure();
        let futures: Vec<Ident> = (0..validated.len()).map(|i| format_ident!("__future{}", i)).collect();
        let outcomes: Vec<Ident> = (0..validated.len()).map(|i| format_ident!("__outcome{}", i)).collect();

        let launches = validated.iter().zip(&futures).map(|(field, future)| {
            let launch = async_launch(field);
            quote!(let #future = #launch;)
        });

        let join = if futures.len() == 1 {
            let future = &futures[0];
            let outcome = &outcomes[0];
            quote!(let #outcome = #future.await;)
        } else {
            quote!(let (#(#outcomes),*) = ::valid_rail::__private::join!(#(#futures),*);)
        };

        let collects = validated.iter().zip(&outcomes).map(|(field, outcome)| {
            let binding = &field.binding;
            let label = &field.label;
            if field.required.is_some() {
                quote!(let #binding = __record.required_field(#label, #outcome);)
            } else {
                quote!(let #binding = __record.field(#label, #outcome);)
            }
        });
        let rebuild = record.rebuild();

        quote! {
            #destructure
            let __config = *__config;
            #(#launches)*
            ::std::boxed::Box::pin(async move {
                #join
                let mut __record = ::valid_rail::record::RecordValidation::new(#name_str);
                #(#collects)*
                __record.finish(move || ::core::option::Option::Some(#rebuild))
            })
        }
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::valid_rail::async_ext::AsyncValidate for #name #ty_generics #where_clause {
            fn validate_async(
                self,
                __config: &::valid_rail::ValidationConfig,
            ) -> ::valid_rail::async_ext::BoxFuture<'static, ::valid_rail::ValidationResult<Self>> {
                #body
            }
        }
    })
}

/// The future validating one field's value held in `value`.
fn async_value_future(field: &FieldSpec, ty: &Type, value: &Ident) -> TokenStream {
    if let Some(with_async) = &field.attrs.with_async {
        return explicit_async(field, ty, with_async, value);
    }
    if let Some(with) = &field.attrs.with {
        let lifted: Expr = parse_quote! {
            ::valid_rail::async_ext::AsyncValidator::from(#with)
        };
        return explicit_async(field, ty, &lifted, value);
    }

    let check = quote_spanned! {ty.span()=>
        <#ty as ::valid_rail::async_ext::AsyncValidate>::validate_async
    };
    quote! {
        ::valid_rail::async_ext::guarded(move || #check(#value, &__config))
    }
}

fn explicit_async(field: &FieldSpec, ty: &Type, init: &Expr, value: &Ident) -> TokenStream {
    let validator = validator_ref(field, quote!(::valid_rail::async_ext::AsyncValidator<#ty>), init);
    quote! {
        ::valid_rail::async_ext::AsyncValidator::validate_with(#validator, #value, &__config)
    }
}

fn async_launch(field: &FieldSpec) -> TokenStream {
    let binding = &field.binding;
    match &field.required {
        Some(inner) => {
            let value = Ident::new("__value", Span::call_site());
            let future = async_value_future(field, inner, &value);
            quote! {
                ::valid_rail::async_ext::when_present(#binding, move |#value| #future)
            }
        }
        None => async_value_future(field, &field.ty, binding),
    }
}

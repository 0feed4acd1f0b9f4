// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[field(...)]` | Declares the field with its options |
//! | `#[enum_values(K = "v", ...)]` | Enum declaration; declares the field if needed |
//! | `#[validate(rule = "...", value = .., message = "...")]` | Appends a validation rule |
//! | `#[one_to_one(T)]` and friends | Relation to model `T` |
//!
//! A field carrying none of these is not part of the model.

use darling::FromMeta;
use quote::ToTokens;
use syn::{Attribute, Expr, Field, LitStr, Meta, ext::IdentExt};

use super::docs::doc_summary;
use crate::schema::{
    DefaultValue, EnumDef, FieldOptions, FieldType, RelationDef, RelationKind, RuleValue,
    ValidationRule
};

fn default_required() -> bool {
    true
}

/// Arguments of `#[field(...)]`.
#[derive(Debug, FromMeta)]
struct FieldArgs {
    #[darling(rename = "type")]
    field_type: Option<FieldType>,

    #[darling(default)]
    primary: bool,

    #[darling(default)]
    unique: bool,

    #[darling(default = "default_required")]
    required: bool,

    /// Kept as source text; an array literal marks the field as an array.
    #[darling(default, with = "parse_default")]
    default: Option<DefaultValue>,

    #[darling(default)]
    is_array: bool,

    length: Option<u32>,

    description: Option<String>
}

impl FieldArgs {
    fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        match &attr.meta {
            Meta::Path(_) => Self::from_list(&[]),
            meta => Self::from_meta(meta)
        }
    }

    fn into_options(self) -> FieldOptions {
        FieldOptions {
            field_type:  self.field_type,
            primary:     self.primary,
            unique:      self.unique,
            required:    self.required,
            default:     self.default,
            is_array:    self.is_array,
            length:      self.length,
            description: self.description
        }
    }
}

/// Arguments of `#[validate(...)]`.
#[derive(Debug, FromMeta)]
struct ValidateArgs {
    rule:    String,
    value:   Option<RuleValue>,
    message: Option<String>
}

impl From<ValidateArgs> for ValidationRule {
    fn from(args: ValidateArgs) -> Self {
        Self {
            rule:    args.rule,
            value:   args.value,
            message: args.message
        }
    }
}

fn expr_text(expr: &Expr) -> String {
    expr.to_token_stream().to_string()
}

fn parse_default(meta: &Meta) -> darling::Result<Option<DefaultValue>> {
    let Meta::NameValue(nv) = meta else {
        return Err(darling::Error::custom("expected `default = <value>`").with_span(meta));
    };

    let value = match &nv.value {
        Expr::Array(array) => DefaultValue::Array(array.elems.iter().map(expr_text).collect()),
        other => DefaultValue::Scalar(expr_text(other))
    };
    Ok(Some(value))
}

fn parse_enum_values(attr: &Attribute) -> darling::Result<EnumDef> {
    let mut values = EnumDef::new();
    attr.parse_nested_meta(|meta| {
        let key = meta
            .path
            .get_ident()
            .ok_or_else(|| meta.error("expected an enum key"))?
            .unraw()
            .to_string();
        let value: LitStr = meta.value()?.parse()?;
        values.insert(key, value.value());
        Ok(())
    })?;

    if values.is_empty() {
        return Err(
            darling::Error::custom("`enum_values` needs at least one member").with_span(attr)
        );
    }
    Ok(values)
}

fn parse_relation(kind: RelationKind, attr: &Attribute) -> darling::Result<RelationDef> {
    let path: syn::Path = attr.parse_args()?;
    let target = path
        .segments
        .last()
        .map(|segment| segment.ident.unraw().to_string())
        .ok_or_else(|| darling::Error::custom("expected a target model").with_span(attr))?;
    Ok(RelationDef::new(kind, target))
}

/// Scaffold metadata attached to one struct field.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedField {
    /// Field name without any `r#` prefix.
    pub name:        String,

    /// Present when the field is declared.
    pub options:     Option<FieldOptions>,

    pub enum_values: Option<EnumDef>,

    pub relation:    Option<RelationDef>,

    /// Rules in attribute order.
    pub validations: Vec<ValidationRule>
}

impl ParsedField {
    /// Parse scaffold attributes of a named field.
    ///
    /// Returns `Ok(None)` when the field carries no scaffold attribute.
    ///
    /// # Errors
    ///
    /// Every malformed attribute on the field is reported.
    pub fn from_field(field: &Field) -> darling::Result<Option<Self>> {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| darling::Error::custom("model fields must be named").with_span(field))?;

        let mut errors = darling::Error::accumulator();
        let mut seen = false;
        let mut options = None;
        let mut enum_values = None;
        let mut relation = None;
        let mut validations = Vec::new();

        for attr in &field.attrs {
            let path = attr.path();
            if path.is_ident("field") {
                seen = true;
                options = errors.handle(FieldArgs::from_attr(attr).map(FieldArgs::into_options));
            } else if path.is_ident("enum_values") {
                seen = true;
                enum_values = errors.handle(parse_enum_values(attr));
            } else if path.is_ident("validate") {
                seen = true;
                if let Some(args) = errors.handle(ValidateArgs::from_meta(&attr.meta)) {
                    validations.push(args.into());
                }
            } else if let Some(kind) = path
                .get_ident()
                .and_then(|ident| RelationKind::from_attribute(&ident.to_string()))
            {
                seen = true;
                if relation.is_some() {
                    errors.push(
                        darling::Error::custom("a field may declare only one relation")
                            .with_span(attr)
                    );
                    continue;
                }
                relation = errors.handle(parse_relation(kind, attr));
            }
        }

        if !seen {
            return errors.finish_with(None);
        }

        if options.is_none() && enum_values.is_some() {
            options = Some(FieldOptions::default());
        }
        if let Some(options) = options.as_mut()
            && options.description.is_none()
        {
            options.description = doc_summary(&field.attrs);
        }

        errors.finish_with(Some(Self {
            name: ident.unraw().to_string(),
            options,
            enum_values,
            relation,
            validations
        }))
    }

    /// Whether the field becomes a generated property.
    #[must_use]
    pub const fn is_declared(&self) -> bool {
        self.options.is_some()
    }
}

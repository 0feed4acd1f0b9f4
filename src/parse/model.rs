// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model-level attribute parsing.

use darling::FromMeta;
use syn::{Attribute, Fields, ItemStruct, Meta, ext::IdentExt};

use super::field::ParsedField;
use crate::schema::{FieldType, ModelOptions, ModelSchema};

/// Arguments of `#[model(...)]`.
#[derive(Debug, Default, FromMeta)]
struct ModelArgs {
    name:  Option<String>,
    table: Option<String>
}

/// Types a generated primary key can carry.
const fn is_key_type(field_type: Option<FieldType>) -> bool {
    matches!(
        field_type,
        None | Some(FieldType::String | FieldType::Uuid | FieldType::Number)
    )
}

/// The `#[model]` attribute of a struct, if any.
pub fn model_attr(item: &ItemStruct) -> Option<&Attribute> {
    item.attrs.iter().find(|attr| attr.path().is_ident("model"))
}

/// A struct annotated with `#[model]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedModel {
    /// Rust identifier of the struct.
    pub ident:  String,

    pub schema: ModelSchema
}

impl ParsedModel {
    /// Parse a `#[model]` struct into a schema.
    ///
    /// The schema is named after `#[model(name)]` when given, otherwise after
    /// the struct.
    ///
    /// # Errors
    ///
    /// Every rejected attribute is reported, along with tuple or unit
    /// structs, more than one `primary` field and primary keys of a type no
    /// generated key can have.
    pub fn from_item(item: &ItemStruct, attr: &Attribute) -> darling::Result<Self> {
        let ident = item.ident.unraw().to_string();
        let mut errors = darling::Error::accumulator();

        let args = match &attr.meta {
            Meta::Path(_) => Some(ModelArgs::default()),
            meta => errors.handle(ModelArgs::from_meta(meta))
        }
        .unwrap_or_default();

        let declared_options = args.name.is_some() || args.table.is_some();
        let mut schema = ModelSchema::new(args.name.clone().unwrap_or_else(|| ident.clone()));
        if declared_options {
            schema.define_model(ModelOptions {
                name:  args.name,
                table: args.table
            });
        }

        let Fields::Named(named) = &item.fields else {
            errors.push(
                darling::Error::custom("`#[model]` requires a struct with named fields")
                    .with_span(&item.ident)
            );
            return errors.finish_with(Self {
                ident,
                schema
            });
        };

        let mut primary: Option<String> = None;
        for field in &named.named {
            let Some(Some(parsed)) = errors.handle(ParsedField::from_field(field)) else {
                continue;
            };

            if let Some(options) = &parsed.options {
                if options.primary {
                    if let Some(key_type) = options.field_type
                        && !is_key_type(options.field_type)
                    {
                        errors.push(
                            darling::Error::custom(format!(
                                "primary key `{}` must be typed `uuid`, `string` or `number`, not `{key_type}`",
                                parsed.name
                            ))
                            .with_span(field)
                        );
                    }
                    if let Some(first) = &primary {
                        errors.push(
                            darling::Error::custom(format!(
                                "only one field may be `primary`; `{first}` already is"
                            ))
                            .with_span(field)
                        );
                    } else {
                        primary = Some(parsed.name.clone());
                    }
                }
                schema.define_field(parsed.name.clone(), options.clone());
            }
            if let Some(values) = parsed.enum_values {
                schema.define_enum(parsed.name.clone(), values);
            }
            if let Some(relation) = parsed.relation {
                schema.define_relation(parsed.name.clone(), relation);
            }
            if !parsed.validations.is_empty() {
                schema.define_validation(parsed.name, parsed.validations);
            }
        }

        errors.finish_with(Self {
            ident,
            schema
        })
    }
}

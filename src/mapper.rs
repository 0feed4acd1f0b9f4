// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field type and validator mapping.
//!
//! Translates a field's semantic type into a TypeScript type name and into
//! the `class-validator` decorators a DTO projection attaches to it.
//!
//! # Type Resolution
//!
//! An enum declaration on the field always wins. Otherwise:
//!
//! | Semantic type | TypeScript |
//! |---------------|------------|
//! | `string`, `uuid`, absent | `string` |
//! | `number` | `number` |
//! | `boolean` | `boolean` |
//! | `date` | `Date` |
//! | `json` and anything else | `any` |
//!
//! # Validator Resolution
//!
//! | Projection | Optional marker | Enum field | Other fields |
//! |------------|-----------------|------------|--------------|
//! | Input | when `required = false` | `IsEnum` (+ `IsArray`) | one type validator |
//! | Update | always | `IsEnum` (+ `IsArray`) | one type validator |
//! | Output | never | `IsEnum` | none |

use std::fmt;

use crate::{
    naming,
    schema::{FieldOptions, FieldType, ModelSchema}
};

/// DTO projection of a model's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Projection {
    /// Creation payload.
    Input,

    /// Partial update payload.
    Update,

    /// Serialized response.
    Output
}

impl Projection {
    /// Whether a field is optional in this projection.
    #[must_use]
    pub const fn is_optional(self, options: &FieldOptions) -> bool {
        match self {
            Self::Input => !options.required,
            Self::Update => true,
            Self::Output => false
        }
    }
}

/// A `class-validator` decorator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    IsOptional,
    IsArray,
    IsEnum,
    IsString,
    IsNumber,
    IsBoolean,
    IsDate,
    IsObject
}

impl Validator {
    /// Symbol imported from `class-validator`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IsOptional => "IsOptional",
            Self::IsArray => "IsArray",
            Self::IsEnum => "IsEnum",
            Self::IsString => "IsString",
            Self::IsNumber => "IsNumber",
            Self::IsBoolean => "IsBoolean",
            Self::IsDate => "IsDate",
            Self::IsObject => "IsObject"
        }
    }

    /// Type-based validator for a non-enum field.
    ///
    /// Returns `None` for types without a matching validator.
    #[must_use]
    pub const fn for_type(field_type: Option<FieldType>) -> Option<Self> {
        match field_type {
            None | Some(FieldType::String | FieldType::Uuid) => Some(Self::IsString),
            Some(FieldType::Number) => Some(Self::IsNumber),
            Some(FieldType::Boolean) => Some(Self::IsBoolean),
            Some(FieldType::Date) => Some(Self::IsDate),
            Some(FieldType::Json) => Some(Self::IsObject),
            Some(_) => None
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// TypeScript type for a semantic type, ignoring enums.
#[must_use]
pub const fn scalar_type(field_type: Option<FieldType>) -> &'static str {
    match field_type {
        None | Some(FieldType::String | FieldType::Uuid) => "string",
        Some(FieldType::Number) => "number",
        Some(FieldType::Boolean) => "boolean",
        Some(FieldType::Date) => "Date",
        Some(_) => "any"
    }
}

/// TypeScript type name for a model field.
///
/// Enum declarations take precedence over the semantic type.
#[must_use]
pub fn ts_type(model: &ModelSchema, field: &str, field_type: Option<FieldType>) -> String {
    if model.enum_for(field).is_some() {
        naming::enum_type(model.name(), field)
    } else {
        scalar_type(field_type).to_owned()
    }
}

/// Validators a projection attaches to a field, in rendering order.
#[must_use]
pub fn validators(
    model: &ModelSchema,
    field: &str,
    options: &FieldOptions,
    projection: Projection
) -> Vec<Validator> {
    let is_enum = model.enum_for(field).is_some();

    if projection == Projection::Output {
        return if is_enum { vec![Validator::IsEnum] } else { Vec::new() };
    }

    let mut out = Vec::new();
    if projection.is_optional(options) {
        out.push(Validator::IsOptional);
    }

    if is_enum {
        if options.is_array() {
            out.push(Validator::IsArray);
        }
        out.push(Validator::IsEnum);
        return out;
    }

    out.extend(Validator::for_type(options.field_type));
    out
}

/// Resolved view of one field in one projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    /// Field name.
    pub name:       String,

    /// TypeScript type name (enum name for enum fields).
    pub ts_type:    String,

    /// Enum type, for enum fields.
    pub enum_type:  Option<String>,

    /// Enum multiplicity.
    pub is_array:   bool,

    /// Optional in this projection.
    pub optional:   bool,

    /// Validators attached in this projection.
    pub validators: Vec<Validator>
}

impl FieldMapping {
    /// Resolve a field for a projection.
    #[must_use]
    pub fn resolve(
        model: &ModelSchema,
        field: &str,
        options: &FieldOptions,
        projection: Projection
    ) -> Self {
        let enum_type = model
            .enum_for(field)
            .map(|_| naming::enum_type(model.name(), field));

        Self {
            name: field.to_owned(),
            ts_type: ts_type(model, field, options.field_type),
            is_array: enum_type.is_some() && options.is_array(),
            enum_type,
            optional: projection.is_optional(options),
            validators: validators(model, field, options, projection)
        }
    }

    /// Property type as written in the class body, e.g. `OrderStatusEnum[]`.
    #[must_use]
    pub fn property_type(&self) -> String {
        if self.is_array {
            format!("{}[]", self.ts_type)
        } else {
            self.ts_type.clone()
        }
    }

    /// Rendered decorator for one of this field's validators.
    #[must_use]
    pub fn decorator(&self, validator: Validator) -> String {
        match (validator, &self.enum_type) {
            (Validator::IsEnum, Some(enum_type)) if self.is_array => {
                format!("@IsEnum({enum_type}, {{ each: true }})")
            }
            (Validator::IsEnum, Some(enum_type)) => format!("@IsEnum({enum_type})"),
            _ => format!("@{validator}()")
        }
    }
}

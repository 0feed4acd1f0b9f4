// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity class emission.
//!
//! Both families emit one property per declared field, in declaration order,
//! followed by the `createdAt` and `updatedAt` timestamps.
//!
//! # TypeORM Columns
//!
//! | Field | Decorator | Property type |
//! |-------|-----------|---------------|
//! | primary, uuid/string key | `@PrimaryGeneratedColumn("uuid")` | `string` |
//! | primary, `number` key | `@PrimaryGeneratedColumn()` | `number` |
//! | enum | `@Column({ type: "enum", enum: E, nullable: !required })` | `E` |
//! | `string` / absent | `@Column({ type: "varchar" })` | `string` |
//! | `number` | `@Column({ type: "int" })` | `number` |
//! | `boolean` | `@Column({ type: "boolean" })` | `boolean` |
//! | `date` | `@Column({ type: "timestamp" })` | `Date` |
//! | `uuid` | `@Column({ type: "uuid" })` | `string` |
//! | `json` | `@Column({ type: "jsonb", nullable: true })` | `any` |
//! | anything else | `@Column({ nullable: true })` | `any` |
//!
//! `unique` and `length` options are added where declared, and non-required
//! columns are `nullable: true`.

use super::{enum_import, import_line};
use crate::{
    mapper,
    naming,
    schema::{FieldOptions, FieldType, ModelSchema}
};

/// How a primary key is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyGeneration {
    /// Random UUID, typed `string`.
    Uuid,

    /// Auto-increment integer, typed `number`.
    Increment
}

impl KeyGeneration {
    /// Generation strategy implied by a primary field's type.
    ///
    /// Parsed models only carry `uuid`, `string`, `number` or untyped keys.
    #[must_use]
    pub const fn for_type(field_type: Option<FieldType>) -> Self {
        match field_type {
            None | Some(FieldType::Uuid | FieldType::String) => Self::Uuid,
            Some(_) => Self::Increment
        }
    }

    /// TypeScript type of the key.
    #[must_use]
    pub const fn ts_type(self) -> &'static str {
        match self {
            Self::Uuid => "string",
            Self::Increment => "number"
        }
    }
}

/// Primary key as seen by entities and services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKey {
    pub name:       String,
    pub generation: KeyGeneration
}

impl PrimaryKey {
    /// The model's declared primary key, or a UUID `id` when none is declared.
    #[must_use]
    pub fn of(model: &ModelSchema) -> Self {
        match model.primary_key() {
            Some((name, options)) => Self {
                name:       name.to_owned(),
                generation: KeyGeneration::for_type(options.field_type)
            },
            None => Self {
                name:       "id".to_owned(),
                generation: KeyGeneration::Uuid
            }
        }
    }

    #[must_use]
    pub const fn ts_type(&self) -> &'static str {
        self.generation.ts_type()
    }
}

/// Property type of a non-primary field, with enum arrays as `E[]`.
fn property_type(model: &ModelSchema, name: &str, options: &FieldOptions) -> String {
    let ts_type = mapper::ts_type(model, name, options.field_type);
    if model.enum_for(name).is_some() && options.is_array() {
        format!("{ts_type}[]")
    } else {
        ts_type
    }
}

fn class_header(model: &ModelSchema) -> String {
    format!("export class {} {{\n", naming::entity_class(model.name()))
}

/// Entity without persistence annotations.
///
/// Non-required fields are optional properties.
#[must_use]
pub fn plain(model: &ModelSchema) -> String {
    let mut out = String::new();
    if let Some(import) = enum_import(model) {
        out.push_str(&import);
        out.push_str("\n\n");
    }
    out.push_str(&class_header(model));

    for (name, options) in model.fields() {
        let line = if options.primary {
            format!("  {name}: {};\n", KeyGeneration::for_type(options.field_type).ts_type())
        } else {
            let marker = if options.required { "" } else { "?" };
            format!("  {name}{marker}: {};\n", property_type(model, name, options))
        };
        out.push_str(&line);
    }

    out.push_str("  createdAt: Date;\n  updatedAt: Date;\n}\n");
    out
}

/// Storage type for a semantic type, `None` for untyped columns.
const fn column_type(field_type: Option<FieldType>) -> Option<&'static str> {
    match field_type {
        None | Some(FieldType::String) => Some("varchar"),
        Some(FieldType::Number) => Some("int"),
        Some(FieldType::Boolean) => Some("boolean"),
        Some(FieldType::Date) => Some("timestamp"),
        Some(FieldType::Uuid) => Some("uuid"),
        Some(FieldType::Json) => Some("jsonb"),
        Some(_) => None
    }
}

fn column(model: &ModelSchema, name: &str, options: &FieldOptions) -> String {
    if options.primary {
        let generation = KeyGeneration::for_type(options.field_type);
        let decorator = match generation {
            KeyGeneration::Uuid => "@PrimaryGeneratedColumn(\"uuid\")",
            KeyGeneration::Increment => "@PrimaryGeneratedColumn()"
        };
        return format!("  {decorator}\n  {name}: {};", generation.ts_type());
    }

    let mut args = Vec::new();

    if model.enum_for(name).is_some() {
        args.push("type: \"enum\"".to_owned());
        args.push(format!("enum: {}", naming::enum_type(model.name(), name)));
        if options.is_array() {
            args.push("array: true".to_owned());
        }
        if options.unique {
            args.push("unique: true".to_owned());
        }
        args.push(format!("nullable: {}", !options.required));
    } else {
        let storage = column_type(options.field_type);
        if let Some(storage) = storage {
            args.push(format!("type: \"{storage}\""));
        }
        if let (Some("varchar"), Some(length)) = (storage, options.length) {
            args.push(format!("length: {length}"));
        }
        if options.unique {
            args.push("unique: true".to_owned());
        }
        let always_nullable = matches!(storage, None | Some("jsonb"));
        if always_nullable || !options.required {
            args.push("nullable: true".to_owned());
        }
    }

    format!(
        "  @Column({{ {} }})\n  {name}: {};",
        args.join(", "),
        property_type(model, name, options)
    )
}

/// Entity annotated for TypeORM.
#[must_use]
pub fn type_orm(model: &ModelSchema) -> String {
    let has_primary = model.primary_key().is_some();
    let has_columns = model.fields().any(|(_, options)| !options.primary);

    let mut symbols = Vec::new();
    if has_columns {
        symbols.push("Column");
    }
    symbols.extend(["CreateDateColumn", "Entity"]);
    if has_primary {
        symbols.push("PrimaryGeneratedColumn");
    }
    symbols.push("UpdateDateColumn");

    let mut out = String::new();
    if let Some(import) = enum_import(model) {
        out.push_str(&import);
        out.push('\n');
    }
    out.push_str(&import_line(symbols, "typeorm"));
    out.push_str("\n\n");
    out.push_str(&format!("@Entity(\"{}\")\n", model.table_name()));
    out.push_str(&class_header(model));

    for (name, options) in model.fields() {
        out.push_str(&column(model, name, options));
        out.push_str("\n\n");
    }

    out.push_str("  @CreateDateColumn()\n  createdAt: Date;\n\n");
    out.push_str("  @UpdateDateColumn()\n  updatedAt: Date;\n}\n");
    out
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DTO shape derivation and rendering.
//!
//! A model yields three projections, each rendered into its own file:
//!
//! | Projection | Class | Fields | Optional marker | Decorators |
//! |------------|-------|--------|-----------------|------------|
//! | Input | `<Model>InputDto` | all | `required = false` | validators |
//! | Update | `<Model>UpdateDto` | all | every field | validators |
//! | Output | `<Model>OutputDto` | all | never | `@Expose()`, enum marker |
//!
//! Fields appear in declaration order. Each block records the validators
//! its fields actually use, and only those are imported from
//! `class-validator`.
//!
//! # Example
//!
//! ```rust
//! use nest_scaffold::{
//!     dto::DtoShapes,
//!     schema::{FieldOptions, FieldType, ModelSchema}
//! };
//!
//! let mut user = ModelSchema::new("User");
//! user.define_field("name", FieldOptions::typed(FieldType::String));
//!
//! let shapes = DtoShapes::derive(&user, false);
//! let imported: Vec<_> = shapes.input.validators().map(|v| v.name()).collect();
//! assert_eq!(imported, ["IsString"]);
//! assert!(shapes.input.render().contains("export class UserInputDto {"));
//! ```

use indexmap::IndexSet;

use crate::{
    emit::{
        enum_import, import_line,
        swagger::{self, PropertyDecorator}
    },
    mapper::{FieldMapping, Projection, Validator},
    naming,
    schema::ModelSchema
};

/// One rendered DTO class plus the imports it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtoBlock {
    projection:  Projection,
    class_name:  String,
    enum_import: Option<String>,
    fields:      Vec<String>,
    validators:  IndexSet<Validator>,
    swagger:     IndexSet<PropertyDecorator>
}

impl DtoBlock {
    fn derive(model: &ModelSchema, projection: Projection, use_swagger: bool) -> Self {
        let class_name = match projection {
            Projection::Input => naming::input_dto(model.name()),
            Projection::Update => naming::update_dto(model.name()),
            Projection::Output => naming::output_dto(model.name())
        };

        let mut block = Self {
            projection,
            class_name,
            enum_import: enum_import(model),
            fields: Vec::new(),
            validators: IndexSet::new(),
            swagger: IndexSet::new()
        };

        for (name, options) in model.fields() {
            let mapping = FieldMapping::resolve(model, name, options, projection);
            let description = options.description.as_deref();
            block.push_field(&mapping, description, use_swagger);
        }

        block
    }

    fn push_field(&mut self, field: &FieldMapping, description: Option<&str>, use_swagger: bool) {
        let mut lines = Vec::new();

        if self.projection == Projection::Output {
            lines.push("@Expose()".to_owned());
        }
        for validator in &field.validators {
            self.validators.insert(*validator);
            lines.push(field.decorator(*validator));
        }
        if use_swagger {
            self.swagger.insert(PropertyDecorator::for_field(field.optional));
            lines.push(swagger::property(field, description));
        }

        let marker = if field.optional { "?" } else { "" };
        lines.push(format!("{}{marker}: {};", field.name, field.property_type()));

        let text = lines
            .iter()
            .map(|line| format!("  {line}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.fields.push(text);
    }

    #[must_use]
    pub const fn projection(&self) -> Projection {
        self.projection
    }

    /// Generated class name, e.g. `UserInputDto`.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Validators used by at least one field, in first-use order.
    pub fn validators(&self) -> impl Iterator<Item = Validator> + '_ {
        self.validators.iter().copied()
    }

    /// Rendered field texts in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Full file text: imports, then the class.
    #[must_use]
    pub fn render(&self) -> String {
        let mut imports: Vec<String> = self.enum_import.iter().cloned().collect();

        if !self.swagger.is_empty() {
            imports.push(swagger::property_import(&self.swagger));
        }
        if self.projection == Projection::Output && !self.fields.is_empty() {
            imports.push(import_line(["Expose"], "class-transformer"));
        }
        if !self.validators.is_empty() {
            imports.push(import_line(
                self.validators.iter().map(|v| v.name()),
                "class-validator"
            ));
        }

        let mut out = String::new();
        if !imports.is_empty() {
            out.push_str(&imports.join("\n"));
            out.push_str("\n\n");
        }
        out.push_str(&format!("export class {} {{\n", self.class_name));
        if !self.fields.is_empty() {
            out.push_str(&self.fields.join("\n\n"));
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }
}

/// The three DTO projections of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DtoShapes {
    pub input:  DtoBlock,
    pub update: DtoBlock,
    pub output: DtoBlock
}

impl DtoShapes {
    /// Derive every projection of `model`.
    #[must_use]
    pub fn derive(model: &ModelSchema, use_swagger: bool) -> Self {
        Self {
            input:  DtoBlock::derive(model, Projection::Input, use_swagger),
            update: DtoBlock::derive(model, Projection::Update, use_swagger),
            output: DtoBlock::derive(model, Projection::Output, use_swagger)
        }
    }

    /// Blocks in file order: input, update, output.
    #[must_use]
    pub fn blocks(&self) -> [&DtoBlock; 3] {
        [&self.input, &self.update, &self.output]
    }
}

/// File suffix of a projection, e.g. `inputDto`.
#[must_use]
pub const fn file_suffix(projection: Projection) -> &'static str {
    match projection {
        Projection::Input => "inputDto",
        Projection::Update => "updateDto",
        Projection::Output => "outputDto"
    }
}

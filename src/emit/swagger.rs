// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `@nestjs/swagger` decorator snippets.
//!
//! # DTO Properties
//!
//! | Field in projection | Decorator | Arguments |
//! |---------------------|-----------|-----------|
//! | required | `@ApiProperty` | `example` or `enum` |
//! | optional | `@ApiPropertyOptional` | `example` or `enum` |
//!
//! Examples depend on the TypeScript type: `"example-<name>"` for strings,
//! `123` for numbers, `true` for booleans and `{}` for everything else.

use std::fmt;

use super::{controller::Operation, import_line, string_literal};
use crate::mapper::FieldMapping;

/// Module every swagger symbol is imported from.
pub const MODULE: &str = "@nestjs/swagger";

/// Property decorator attached to a DTO field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyDecorator {
    ApiProperty,
    ApiPropertyOptional
}

impl PropertyDecorator {
    /// Decorator for a field with the given optionality.
    #[must_use]
    pub const fn for_field(optional: bool) -> Self {
        if optional {
            Self::ApiPropertyOptional
        } else {
            Self::ApiProperty
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ApiProperty => "ApiProperty",
            Self::ApiPropertyOptional => "ApiPropertyOptional"
        }
    }
}

impl fmt::Display for PropertyDecorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Example value for a field, keyed by its TypeScript type.
#[must_use]
pub fn example(field: &FieldMapping) -> String {
    match field.ts_type.as_str() {
        "string" => string_literal(&format!("example-{}", field.name)),
        "number" => "123".to_owned(),
        "boolean" => "true".to_owned(),
        _ => "{}".to_owned()
    }
}

/// Full property decorator for a DTO field.
#[must_use]
pub fn property(field: &FieldMapping, description: Option<&str>) -> String {
    let decorator = PropertyDecorator::for_field(field.optional);

    let mut args = match &field.enum_type {
        Some(enum_type) if field.is_array => vec![format!("enum: {enum_type}"), "isArray: true".to_owned()],
        Some(enum_type) => vec![format!("enum: {enum_type}")],
        None => vec![format!("example: {}", example(field))]
    };
    if let Some(description) = description {
        args.push(format!("description: {}", string_literal(description)));
    }

    format!("@{decorator}({{ {} }})", args.join(", "))
}

/// Import line for the property decorators a DTO uses.
pub fn property_import<'a>(used: impl IntoIterator<Item = &'a PropertyDecorator>) -> String {
    let mut used: Vec<_> = used.into_iter().copied().collect();
    used.sort();
    used.dedup();
    import_line(used.iter().map(|d| d.name()), MODULE)
}

/// Import line for a swagger-annotated controller.
#[must_use]
pub fn controller_import() -> String {
    import_line(["ApiOperation", "ApiParam", "ApiTags"], MODULE)
}

/// Controller-level tag, e.g. `@ApiTags("order-item")`.
#[must_use]
pub fn tags(route: &str) -> String {
    format!("@ApiTags({})", string_literal(route))
}

/// Human-readable summary of a CRUD operation.
#[must_use]
pub fn summary(operation: Operation, subject: &str) -> String {
    match operation {
        Operation::FindAll => format!("Get all {subject}s"),
        Operation::FindOne => format!("Get a single {subject} by ID"),
        Operation::Create => format!("Create a new {subject}"),
        Operation::Update => format!("Update an existing {subject}"),
        Operation::Remove => format!("Delete a {subject} by ID")
    }
}

/// Decorators documenting one controller operation.
#[must_use]
pub fn operation(operation: Operation, subject: &str, id: &str) -> Vec<String> {
    let mut out = vec![format!(
        "@ApiOperation({{ summary: {} }})",
        string_literal(&summary(operation, subject))
    )];
    if operation.takes_id() {
        out.push(format!(
            "@ApiParam({{ name: {}, required: true }})",
            string_literal(id)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::Validator;

    fn mapping(name: &str, ts_type: &str, optional: bool) -> FieldMapping {
        FieldMapping {
            name: name.into(),
            ts_type: ts_type.into(),
            enum_type: None,
            is_array: false,
            optional,
            validators: vec![Validator::IsString]
        }
    }

    #[test]
    fn examples_by_type() {
        assert_eq!(example(&mapping("name", "string", false)), r#""example-name""#);
        assert_eq!(example(&mapping("age", "number", false)), "123");
        assert_eq!(example(&mapping("active", "boolean", false)), "true");
        assert_eq!(example(&mapping("born", "Date", false)), "{}");
        assert_eq!(example(&mapping("meta", "any", false)), "{}");
    }

    #[test]
    fn required_and_optional_properties() {
        assert_eq!(
            property(&mapping("name", "string", false), None),
            r#"@ApiProperty({ example: "example-name" })"#
        );
        assert_eq!(
            property(&mapping("age", "number", true), Some("Age in years")),
            r#"@ApiPropertyOptional({ example: 123, description: "Age in years" })"#
        );
    }

    #[test]
    fn enum_property() {
        let mut field = mapping("status", "OrderStatusEnum", false);
        field.enum_type = Some("OrderStatusEnum".into());
        assert_eq!(property(&field, None), "@ApiProperty({ enum: OrderStatusEnum })");

        field.is_array = true;
        assert_eq!(
            property(&field, None),
            "@ApiProperty({ enum: OrderStatusEnum, isArray: true })"
        );
    }

    #[test]
    fn property_import_lists_used_once() {
        let used = [
            PropertyDecorator::ApiPropertyOptional,
            PropertyDecorator::ApiProperty,
            PropertyDecorator::ApiPropertyOptional
        ];
        assert_eq!(
            property_import(&used),
            r#"import { ApiProperty, ApiPropertyOptional } from "@nestjs/swagger";"#
        );
        assert_eq!(
            property_import(&[PropertyDecorator::ApiPropertyOptional]),
            r#"import { ApiPropertyOptional } from "@nestjs/swagger";"#
        );
    }

    #[test]
    fn operation_decorators() {
        assert_eq!(
            operation(Operation::FindAll, "user", "id"),
            [r#"@ApiOperation({ summary: "Get all users" })"#]
        );
        assert_eq!(
            operation(Operation::Remove, "user", "id"),
            [
                r#"@ApiOperation({ summary: "Delete a user by ID" })"#,
                r#"@ApiParam({ name: "id", required: true })"#
            ]
        );
    }
}

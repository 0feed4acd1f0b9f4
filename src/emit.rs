// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! TypeScript source emitters.
//!
//! Each emitter is a pure function from a [`ModelSchema`] to file text.
//!
//! # Emitters
//!
//! | Module | Output | Families |
//! |--------|--------|----------|
//! | [`entity`] | `entities/<Model>.entity.ts` | plain, TypeORM |
//! | [`controller`] | `controllers/<Model>.controller.ts` | shared |
//! | [`service`] | `services/<Model>.service.ts` | plain, TypeORM |
//! | [`enums`] | `enums/<Model>.enums.ts` | shared |
//! | [`swagger`] | decorator snippets | shared |
//!
//! DTO files are rendered by [`crate::dto`].

pub mod controller;
pub mod entity;
pub mod enums;
pub mod service;
pub mod swagger;

use crate::{naming, schema::ModelSchema};

/// Single-line ES import, e.g. `import { A, B } from "mod";`.
pub(crate) fn import_line<'a>(symbols: impl IntoIterator<Item = &'a str>, module: &str) -> String {
    let symbols: Vec<_> = symbols.into_iter().collect();
    format!("import {{ {} }} from \"{module}\";", symbols.join(", "))
}

/// Combined import of every enum type the model declares.
///
/// `None` when the model has no enums.
pub(crate) fn enum_import(model: &ModelSchema) -> Option<String> {
    if !model.has_enums() {
        return None;
    }

    let names: Vec<_> = model
        .enums()
        .map(|(field, _)| naming::enum_type(model.name(), field))
        .collect();

    Some(import_line(
        names.iter().map(String::as_str),
        &naming::import_path("enums", model.name(), "enums")
    ))
}

/// Double-quoted TypeScript string literal.
pub(crate) fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') => {
                out.push_str(&format!("\\u{:04x}", u32::from(c)));
            }
            _ => out.push(c)
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EnumDef, FieldOptions};

    #[test]
    fn import_line_joins_symbols() {
        assert_eq!(
            import_line(["Expose"], "class-transformer"),
            r#"import { Expose } from "class-transformer";"#
        );
        assert_eq!(
            import_line(["IsEnum", "IsString"], "class-validator"),
            r#"import { IsEnum, IsString } from "class-validator";"#
        );
    }

    #[test]
    fn enum_import_absent_without_enums() {
        let mut model = ModelSchema::new("User");
        model.define_field("name", FieldOptions::default());
        assert!(enum_import(&model).is_none());
    }

    #[test]
    fn enum_import_names_every_enum() {
        let mut model = ModelSchema::new("Order");
        model.define_enum("status", [("PAID", "paid")].into_iter().collect::<EnumDef>());
        model.define_enum("channel", [("WEB", "web")].into_iter().collect::<EnumDef>());

        assert_eq!(
            enum_import(&model).unwrap(),
            r#"import { OrderStatusEnum, OrderChannelEnum } from "../enums/Order.enums";"#
        );
    }

    #[test]
    fn string_literal_escapes() {
        assert_eq!(string_literal("plain"), r#""plain""#);
        assert_eq!(string_literal(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(string_literal(r"a\b"), r#""a\\b""#);
    }

    #[test]
    fn string_literal_escapes_line_terminators() {
        assert_eq!(string_literal("x\ry"), r#""x\ry""#);
        assert_eq!(string_literal("a\r\nb"), r#""a\r\nb""#);
        assert_eq!(string_literal("tab\there"), r#""tab\there""#);
        assert_eq!(string_literal("p\u{2028}q\u{2029}"), r#""p\u2028q\u2029""#);
        assert_eq!(string_literal("bell\u{7}"), r#""bell\u0007""#);

        let escaped = string_literal("x\ry\u{2028}z\u{0}");
        assert!(!escaped.chars().any(|c| c.is_control() || c == '\u{2028}'));
    }
}

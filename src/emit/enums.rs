// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Enum declaration emission.

use super::string_literal;
use crate::{naming, schema::ModelSchema};

/// One `export enum` per enum-bearing field, members in declaration order.
///
/// A model without enums yields a single placeholder comment.
#[must_use]
pub fn render(model: &ModelSchema) -> String {
    if !model.has_enums() {
        return format!("// No enums defined for {}\n", model.name());
    }

    let mut out = format!("// Enums for {}\n", model.name());
    for (field, values) in model.enums() {
        let members = values
            .members()
            .map(|(key, value)| format!("  {key} = {}", string_literal(value)))
            .collect::<Vec<_>>()
            .join(",\n");

        out.push_str(&format!(
            "\nexport enum {} {{\n{members}\n}}\n",
            naming::enum_type(model.name(), field)
        ));
    }
    out
}

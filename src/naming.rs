// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated symbol and file names.
//!
//! | Symbol | Example (`User`) |
//! |--------|------------------|
//! | entity class | `UserEntity` |
//! | input DTO | `UserInputDto` |
//! | update DTO | `UserUpdateDto` |
//! | output DTO | `UserOutputDto` |
//! | controller | `UserController` |
//! | service | `UserService` |
//! | enum for `status` | `UserStatusEnum` |

use convert_case::{Case, Casing};

/// Extension of every generated file.
pub const EXTENSION: &str = "ts";

/// Upper-case the first character, leaving the rest untouched.
///
/// ASCII only, independent of locale.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new()
    }
}

/// Lower-case the first character, leaving the rest untouched.
#[must_use]
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new()
    }
}

/// Enum type generated for a model field: `<Model><Field>Enum`.
#[must_use]
pub fn enum_type(model: &str, field: &str) -> String {
    format!("{model}{}Enum", capitalize(field))
}

#[must_use]
pub fn entity_class(model: &str) -> String {
    format!("{model}Entity")
}

#[must_use]
pub fn input_dto(model: &str) -> String {
    format!("{model}InputDto")
}

#[must_use]
pub fn update_dto(model: &str) -> String {
    format!("{model}UpdateDto")
}

#[must_use]
pub fn output_dto(model: &str) -> String {
    format!("{model}OutputDto")
}

#[must_use]
pub fn controller_class(model: &str) -> String {
    format!("{model}Controller")
}

#[must_use]
pub fn service_class(model: &str) -> String {
    format!("{model}Service")
}

/// Route segment for a model's controller, e.g. `order-item`.
#[must_use]
pub fn route_path(model: &str) -> String {
    model.to_case(Case::Kebab)
}

/// File name for a generated artifact, e.g. `User.inputDto.ts`.
#[must_use]
pub fn file_name(model: &str, suffix: &str) -> String {
    format!("{model}.{suffix}.{EXTENSION}")
}

/// Module path of a sibling artifact as imported from another generated
/// file, e.g. `../enums/User.enums`.
#[must_use]
pub fn import_path(dir: &str, model: &str, suffix: &str) -> String {
    format!("../{dir}/{model}.{suffix}")
}

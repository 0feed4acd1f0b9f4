// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model schema values.
//!
//! A model is a plain value: a name, an ordered field table, an enum table,
//! a relation table and a validation table. Parsing produces these values,
//! generators only read them.
//!
//! # Data Structures
//!
//! ```text
//! MetadataStore
//! └── ModelSchema          (keyed by model name)
//!     ├── name: String
//!     ├── options: Option<ModelOptions>
//!     ├── fields: IndexMap<String, FieldOptions>      (declaration order)
//!     ├── enums: IndexMap<String, EnumDef>
//!     ├── relations: IndexMap<String, RelationDef>
//!     └── validations: IndexMap<String, Vec<ValidationRule>>
//! ```

mod field;
mod model;
mod relation;
mod store;
mod validation;

pub use field::{DefaultValue, FieldOptions, FieldType};
pub use model::{EnumDef, ModelOptions, ModelSchema};
pub use relation::{RelationDef, RelationKind};
pub use store::MetadataStore;
pub use validation::{RuleValue, ValidationRule};

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model source parsing.
//!
//! A model source is a Rust file. Every struct carrying `#[model]` becomes a
//! [`ModelSchema`] in a [`MetadataStore`]; everything else in the file is
//! ignored.
//!
//! # Attributes
//!
//! | Attribute | Placement | Options |
//! |-----------|-----------|---------|
//! | `#[model]` | struct | `name`, `table` |
//! | `#[field]` | field | `type`, `primary`, `unique`, `required`, `default`, `is_array`, `length`, `description` |
//! | `#[enum_values]` | field | `KEY = "value"` pairs |
//! | `#[validate]` | field | `rule`, `value`, `message` |
//! | `#[one_to_one(T)]`, `#[one_to_many(T)]`, `#[many_to_one(T)]`, `#[many_to_many(T)]` | field | target model |
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//!
//! let source = r#"
//!     #[model(table = "orders")]
//!     pub struct Order {
//!         #[field(primary, type = "uuid")]
//!         pub id: String,
//!
//!         #[enum_values(PENDING = "pending", PAID = "paid")]
//!         pub status: String,
//!     }
//! "#;
//!
//! let parsed = nest_scaffold::parse::parse_source(source, Path::new("order.rs"))?;
//! let order = parsed.select("Order").expect("defined above");
//! assert_eq!(order.table_name(), "orders");
//! assert!(order.enum_for("status").is_some());
//! # Ok::<(), nest_scaffold::ScaffoldError>(())
//! ```

mod docs;
mod field;
mod model;

use std::path::Path;

pub use field::ParsedField;
use indexmap::IndexMap;
pub use model::ParsedModel;
use syn::Item;
use tracing::debug;

use crate::{
    error::{Result, ScaffoldError},
    schema::{MetadataStore, ModelSchema}
};

/// Every model defined by one source file.
#[derive(Debug, Clone, Default)]
pub struct ParsedSource {
    store:  MetadataStore,
    idents: IndexMap<String, String>
}

impl ParsedSource {
    fn insert(&mut self, model: ParsedModel) {
        self.idents
            .insert(model.ident, model.schema.name().to_owned());
        self.store.insert(model.schema);
    }

    /// Metadata of every parsed model.
    #[must_use]
    pub const fn store(&self) -> &MetadataStore {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> MetadataStore {
        self.store
    }

    /// Find a model by struct identifier or by schema name.
    ///
    /// A source defining exactly one model yields it for any name.
    #[must_use]
    pub fn select(&self, name: &str) -> Option<&ModelSchema> {
        self.idents
            .get(name)
            .and_then(|schema| self.store.model(schema))
            .or_else(|| self.store.model(name))
            .or_else(|| self.single())
    }

    fn single(&self) -> Option<&ModelSchema> {
        let mut names = self.store.model_names();
        match (names.next(), names.next()) {
            (Some(only), None) => self.store.model(only),
            _ => None
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Parse a model source file.
///
/// # Errors
///
/// [`ScaffoldError::Syntax`] when `source` is not valid Rust and
/// [`ScaffoldError::Attribute`] when a model's attributes are rejected.
pub fn parse_source(source: &str, path: &Path) -> Result<ParsedSource> {
    let file = syn::parse_file(source).map_err(|err| ScaffoldError::syntax(path, &err))?;
    parse_items(&file.items)
}

/// Collect every `#[model]` struct among `items`, in order.
///
/// # Errors
///
/// [`ScaffoldError::Attribute`] for the first model with rejected attributes.
pub fn parse_items(items: &[Item]) -> Result<ParsedSource> {
    let mut parsed = ParsedSource::default();

    for item in items {
        let Item::Struct(item) = item else {
            continue;
        };
        let Some(attr) = model::model_attr(item) else {
            continue;
        };

        let model = ParsedModel::from_item(item, attr)
            .map_err(|err| ScaffoldError::attribute(item.ident.to_string(), err))?;

        let schema = &model.schema;
        debug!(
            model = schema.name(),
            fields = schema.fields().count(),
            enums = schema.enums().count(),
            relations = schema.relations().count(),
            validations = schema.validations().count(),
            "Parsed model"
        );
        parsed.insert(model);
    }

    Ok(parsed)
}

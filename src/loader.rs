// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model source resolution on disk.
//!
//! `model_path` is either the model source itself or a directory holding
//! one file per model. Inside a directory the candidates for `name` are, in
//! order:
//!
//! 1. `<name>.rs`
//! 2. `<snake_case(name)>.rs`
//!
//! The first existing candidate is parsed and the requested model selected
//! from it (see [`ParsedSource::select`](crate::parse::ParsedSource::select)).

use std::{
    fs,
    path::{Path, PathBuf}
};

use convert_case::{Case, Casing};
use tracing::debug;

use crate::{
    error::{Result, ScaffoldError},
    parse,
    schema::{MetadataStore, ModelSchema}
};

/// Extension of model source files.
pub const SOURCE_EXTENSION: &str = "rs";

/// A model selected from its source file.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    path:   PathBuf,
    schema: ModelSchema,
    store:  MetadataStore
}

impl LoadedModel {
    /// Source file the model was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The selected model.
    #[must_use]
    pub const fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    /// Every model of the source file, for relation lookups.
    #[must_use]
    pub const fn store(&self) -> &MetadataStore {
        &self.store
    }

    /// Directory containing the source file; the default output base.
    #[must_use]
    pub fn output_base(&self) -> &Path {
        self.path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

/// Candidate source files for `name` inside `dir`, in probing order.
#[must_use]
pub fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    let mut files = vec![dir.join(format!("{name}.{SOURCE_EXTENSION}"))];
    let snake = dir.join(format!("{}.{SOURCE_EXTENSION}", name.to_case(Case::Snake)));
    if !files.contains(&snake) {
        files.push(snake);
    }
    files
}

/// Locate the model source for `name`.
///
/// # Errors
///
/// [`ScaffoldError::ModelFileNotFound`] when `model_path` is not a file and
/// no candidate inside it exists.
pub fn resolve(model_path: &Path, name: &str) -> Result<PathBuf> {
    if model_path.is_file() {
        return Ok(model_path.to_path_buf());
    }

    for candidate in candidates(model_path, name) {
        debug!(candidate = %candidate.display(), "Probing model source");
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(ScaffoldError::ModelFileNotFound {
        name: name.to_owned(),
        dir:  model_path.to_path_buf()
    })
}

/// Resolve, read and parse the model source, then select `name` from it.
///
/// # Errors
///
/// Any resolution, read or parse failure, and
/// [`ScaffoldError::ModelNotFound`] when the source does not define `name`.
pub fn load(model_path: &Path, name: &str) -> Result<LoadedModel> {
    let path = resolve(model_path, name)?;
    let source = fs::read_to_string(&path).map_err(|source| ScaffoldError::ModelSource {
        path: path.clone(),
        source
    })?;

    let parsed = parse::parse_source(&source, &path)?;
    let Some(schema) = parsed.select(name).cloned() else {
        return Err(ScaffoldError::ModelNotFound {
            name: name.to_owned(),
            path
        });
    };

    debug!(model = schema.name(), path = %path.display(), "Loaded model");
    Ok(LoadedModel {
        path,
        schema,
        store: parsed.into_store()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = r#"
        #[model]
        pub struct User {
            #[field(primary, type = "uuid")]
            pub id: String,

            #[field(type = "string")]
            pub name: String,
        }
    "#;

    const TWO_MODELS: &str = r#"
        #[model]
        pub struct OrderItem {
            #[field(type = "number")]
            pub quantity: i32,
        }

        #[model]
        pub struct Order {
            #[one_to_many(OrderItem)]
            pub items: Vec<OrderItem>,
        }
    "#;

    #[test]
    fn candidate_order() {
        let dir = Path::new("models");
        assert_eq!(
            candidates(dir, "OrderItem"),
            [dir.join("OrderItem.rs"), dir.join("order_item.rs")]
        );
        assert_eq!(candidates(dir, "user"), [dir.join("user.rs")]);
    }

    #[test]
    fn explicit_file_is_used() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("anything.rs");
        fs::write(&file, USER).unwrap();

        let loaded = load(&file, "User").unwrap();
        assert_eq!(loaded.path(), file);
        assert_eq!(loaded.schema().name(), "User");
        assert_eq!(loaded.output_base(), tmp.path());
    }

    #[test]
    fn exact_name_in_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("User.rs"), USER).unwrap();

        let loaded = load(tmp.path(), "User").unwrap();
        assert_eq!(loaded.path(), tmp.path().join("User.rs"));
        assert_eq!(loaded.schema().fields().count(), 2);
    }

    #[test]
    fn snake_case_fallback() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("order_item.rs"), TWO_MODELS).unwrap();

        let loaded = load(tmp.path(), "OrderItem").unwrap();
        assert_eq!(loaded.schema().name(), "OrderItem");
        assert_eq!(loaded.store().len(), 2);

        let order = loaded.store().model("Order").unwrap();
        let (_, relation) = order.relations().next().unwrap();
        assert_eq!(
            loaded.store().resolve_relation(relation).map(ModelSchema::name),
            Some("OrderItem")
        );
    }

    #[test]
    fn missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load(tmp.path(), "DoesNotExist").unwrap_err();
        match err {
            ScaffoldError::ModelFileNotFound {
                name,
                dir
            } => {
                assert_eq!(name, "DoesNotExist");
                assert_eq!(dir, tmp.path());
            }
            other => panic!("unexpected error: {other:?}")
        }
    }

    #[test]
    fn missing_model_in_source() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("shop.rs");
        fs::write(&file, TWO_MODELS).unwrap();

        let err = load(&file, "Customer").unwrap_err();
        assert!(matches!(err, ScaffoldError::ModelNotFound { ref name, .. } if name == "Customer"));
    }

    #[test]
    fn unreadable_source() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("User.rs");
        fs::write(&file, [0xff, 0xfe, 0x00]).unwrap();

        let err = load(tmp.path(), "User").unwrap_err();
        assert!(matches!(err, ScaffoldError::ModelSource { .. }));
    }

    #[test]
    fn relative_file_outputs_to_current_dir() {
        let loaded = LoadedModel {
            path:   PathBuf::from("user.rs"),
            schema: ModelSchema::new("User"),
            store:  MetadataStore::new()
        };
        assert_eq!(loaded.output_base(), Path::new("."));
    }
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for scaffold generation.
//!
//! Every failure is fatal to a single generation invocation. Errors are
//! reported to the caller and, at the CLI boundary, turned into a diagnostic
//! plus a non-zero exit status.
//!
//! # Variants
//!
//! | Variant | Raised by | Meaning |
//! |---------|-----------|---------|
//! | `Configuration` | [`Dispatcher`](crate::Dispatcher) | `write_*` before `init` |
//! | `ModelFileNotFound` | [`loader`](crate::loader) | No candidate source file exists |
//! | `ModelSource` | [`loader`](crate::loader) | Candidate exists but cannot be read |
//! | `Syntax` | [`parse`](crate::parse) | Model source is not valid Rust |
//! | `Attribute` | [`parse`](crate::parse) | Scaffold attribute rejected |
//! | `ModelNotFound` | [`loader`](crate::loader) | No matching model in the source |
//! | `UnknownGenerationType` | [`ScaffoldKind`](crate::ScaffoldKind) | Unrecognized scaffold kind |
//! | `FileWrite` | [`FsSink`](crate::FsSink) | Directory creation or file write failed |

use std::{io, path::PathBuf};

/// Result alias used across the crate.
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// Errors produced while loading models or generating scaffolds.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// The dispatcher was used before `init`.
    #[error("scaffold engine is not initialized; call `init` before generating")]
    Configuration,

    /// Neither candidate model source file exists.
    #[error("could not find a model source for `{name}` in {}", dir.display())]
    ModelFileNotFound {
        /// Requested model name.
        name: String,
        /// Directory that was searched.
        dir:  PathBuf
    },

    /// A model source file exists but could not be read.
    #[error("failed to read model source {}: {source}", path.display())]
    ModelSource {
        /// Path of the model source.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    },

    /// The model source is not valid Rust.
    #[error("failed to parse {}: {message}", path.display())]
    Syntax {
        /// Path of the model source.
        path:    PathBuf,
        /// Parser diagnostic with location.
        message: String
    },

    /// A scaffold attribute on a model was rejected.
    #[error("invalid attributes on model `{model}`: {message}")]
    Attribute {
        /// Struct carrying the attribute.
        model:   String,
        /// Diagnostic with location.
        message: String
    },

    /// The model source does not define the requested model.
    #[error("could not find model `{name}` in {}", path.display())]
    ModelNotFound {
        /// Requested model name.
        name: String,
        /// Path of the parsed source.
        path: PathBuf
    },

    /// The requested scaffold kind is not recognized.
    #[error(
        "unknown generation type `{0}` (expected one of: entity, dto, dtos, controller, service, enums, all)"
    )]
    UnknownGenerationType(String),

    /// Writing a generated file failed.
    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        /// Target path (directory or file).
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    }
}

impl ScaffoldError {
    /// Build an [`ScaffoldError::Attribute`] from accumulated darling errors.
    ///
    /// Each error is prefixed with its `line:column` when the span carries a
    /// location.
    pub(crate) fn attribute(model: impl Into<String>, err: darling::Error) -> Self {
        let message = err
            .into_iter()
            .map(|e| {
                let start = e.span().start();
                if start.line > 0 {
                    format!("{}:{}: {}", start.line, start.column + 1, e)
                } else {
                    e.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self::Attribute {
            model: model.into(),
            message
        }
    }

    /// Build a [`ScaffoldError::Syntax`] from a syn parse error.
    pub(crate) fn syntax(path: impl Into<PathBuf>, err: &syn::Error) -> Self {
        let start = err.span().start();
        Self::Syntax {
            path:    path.into(),
            message: format!("{}:{}: {}", start.line, start.column + 1, err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_message_mentions_init() {
        let msg = ScaffoldError::Configuration.to_string();
        assert!(msg.contains("init"));
    }

    #[test]
    fn model_file_not_found_names_model_and_dir() {
        let err = ScaffoldError::ModelFileNotFound {
            name: "Ghost".into(),
            dir:  PathBuf::from("src/models")
        };
        let msg = err.to_string();
        assert!(msg.contains("Ghost"));
        assert!(msg.contains("src/models"));
    }

    #[test]
    fn unknown_generation_type_lists_kinds() {
        let msg = ScaffoldError::UnknownGenerationType("router".into()).to_string();
        assert!(msg.contains("router"));
        assert!(msg.contains("controller"));
    }

    #[test]
    fn attribute_error_joins_messages() {
        let mut errors = darling::Error::accumulator();
        errors.push(darling::Error::custom("first"));
        errors.push(darling::Error::custom("second"));
        let err = errors.finish().unwrap_err();

        let msg = ScaffoldError::attribute("User", err).to_string();
        assert!(msg.contains("`User`"));
        assert!(msg.contains("first"));
        assert!(msg.contains("second"));
    }

    #[test]
    fn file_write_keeps_source() {
        use std::error::Error as _;

        let err = ScaffoldError::FileWrite {
            path:   PathBuf::from("out/entities"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied")
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("out/entities"));
    }
}

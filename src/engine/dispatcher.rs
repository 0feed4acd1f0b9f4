// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Engine dispatcher.
//!
//! Two states: uninitialized and initialized with an [`Engine`]. Every
//! `write_*` call requires the initialized state and fails with
//! [`ScaffoldError::Configuration`] otherwise. Calling `init` again replaces
//! the engine.

use std::path::PathBuf;

use tracing::warn;

use super::{Engine, EngineOptions};
use crate::{
    error::{Result, ScaffoldError},
    kind::ScaffoldKind,
    schema::ModelSchema,
    writer::{FileSink, FsSink}
};

/// Routes generation requests to the configured engine.
#[derive(Debug, Clone)]
pub struct Dispatcher<S = FsSink> {
    engine: Option<Engine<S>>
}

impl<S> Default for Dispatcher<S> {
    fn default() -> Self {
        Self {
            engine: None
        }
    }
}

impl Dispatcher<FsSink> {
    /// Configure a file-system engine from `options`.
    pub fn init(&mut self, options: EngineOptions) {
        self.install(Engine::new(options));
    }
}

impl<S: FileSink> Dispatcher<S> {
    /// Uninitialized dispatcher.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            engine: None
        }
    }

    /// Install an engine, returning the one it replaces.
    pub fn install(&mut self, engine: Engine<S>) -> Option<Engine<S>> {
        if let Some(previous) = &self.engine {
            warn!(
                previous = %previous.family(),
                next = %engine.family(),
                "Replacing initialized scaffold engine"
            );
        }
        self.engine.replace(engine)
    }

    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.engine.is_some()
    }

    /// The configured engine.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Configuration`] before `init`.
    pub fn engine(&self) -> Result<&Engine<S>> {
        self.engine.as_ref().ok_or(ScaffoldError::Configuration)
    }

    /// # Errors
    ///
    /// [`ScaffoldError::Configuration`] before `init`, otherwise see
    /// [`Engine::write`].
    pub fn write(&self, kind: ScaffoldKind, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.engine()?.write(kind, model)
    }

    /// # Errors
    ///
    /// See [`Dispatcher::write`].
    pub fn write_entities(&self, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.engine()?.write_entities(model)
    }

    /// # Errors
    ///
    /// See [`Dispatcher::write`].
    pub fn write_dtos(&self, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.engine()?.write_dtos(model)
    }

    /// # Errors
    ///
    /// See [`Dispatcher::write`].
    pub fn write_controller(&self, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.engine()?.write_controller(model)
    }

    /// # Errors
    ///
    /// See [`Dispatcher::write`].
    pub fn write_service(&self, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.engine()?.write_service(model)
    }

    /// # Errors
    ///
    /// See [`Dispatcher::write`].
    pub fn write_enums(&self, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.engine()?.write_enums(model)
    }

    /// # Errors
    ///
    /// See [`Dispatcher::write`].
    pub fn write_all(&self, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.engine()?.write_all(model)
    }
}

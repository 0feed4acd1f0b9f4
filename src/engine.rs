// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation engine.
//!
//! An [`Engine`] is built from explicit [`EngineOptions`] and selects one
//! [`EmitterFamily`] for its whole lifetime. Rendering is pure; writing
//! renders every requested file first and only then hands them to the
//! [`FileSink`] in order.
//!
//! # Output Layout
//!
//! | Kind | Directory | Files |
//! |------|-----------|-------|
//! | entity | `entities/` | `<Model>.entity.ts` |
//! | dto | `dtos/` | `<Model>.inputDto.ts`, `<Model>.updateDto.ts`, `<Model>.outputDto.ts` |
//! | controller | `controllers/` | `<Model>.controller.ts` |
//! | service | `services/` | `<Model>.service.ts` |
//! | enums | `enums/` | `<Model>.enums.ts` |
//!
//! # Example
//!
//! ```rust,no_run
//! use nest_scaffold::{Engine, EngineOptions, ScaffoldKind, schema::ModelSchema};
//!
//! let engine = Engine::new(EngineOptions::new("src").with_type_orm(true));
//! let written = engine.write(ScaffoldKind::All, &ModelSchema::new("User"))?;
//! assert_eq!(written.len(), 7);
//! # Ok::<(), nest_scaffold::ScaffoldError>(())
//! ```

mod dispatcher;

use std::{
    fmt,
    path::{Path, PathBuf}
};

pub use dispatcher::Dispatcher;
use tracing::info;

use crate::{
    dto::{self, DtoShapes},
    emit::{controller, entity, enums, service},
    error::Result,
    kind::ScaffoldKind,
    naming,
    schema::ModelSchema,
    writer::{FileSink, FsSink}
};

/// Caller-supplied engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Root directory for generated files.
    pub base_path:    PathBuf,

    /// Emit `@nestjs/swagger` decorators.
    pub use_swagger:  bool,

    /// Use the TypeORM emitter family.
    pub use_type_orm: bool
}

impl EngineOptions {
    /// Options rooted at `base_path` with swagger and TypeORM disabled.
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path:    base_path.into(),
            use_swagger:  false,
            use_type_orm: false
        }
    }

    #[must_use]
    pub fn with_swagger(mut self, enabled: bool) -> Self {
        self.use_swagger = enabled;
        self
    }

    #[must_use]
    pub fn with_type_orm(mut self, enabled: bool) -> Self {
        self.use_type_orm = enabled;
        self
    }
}

/// Which entity and service emitters an engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitterFamily {
    /// Plain classes and an in-memory service.
    Plain,

    /// TypeORM entities and a repository-backed service.
    TypeOrm
}

impl EmitterFamily {
    #[must_use]
    pub const fn from_options(options: &EngineOptions) -> Self {
        if options.use_type_orm {
            Self::TypeOrm
        } else {
            Self::Plain
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::TypeOrm => "typeorm"
        }
    }
}

impl fmt::Display for EmitterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered file not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Subdirectory under the base path, e.g. `entities`.
    pub dir:       &'static str,

    /// File name, e.g. `User.entity.ts`.
    pub file_name: String,

    /// Full file text.
    pub contents:  String
}

impl GeneratedFile {
    fn new(dir: &'static str, model: &ModelSchema, suffix: &str, contents: String) -> Self {
        Self {
            dir,
            file_name: naming::file_name(model.name(), suffix),
            contents
        }
    }

    /// Path relative to the base path.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.dir).join(&self.file_name)
    }
}

/// Renders and writes scaffolds for one configuration.
#[derive(Debug, Clone)]
pub struct Engine<S = FsSink> {
    options: EngineOptions,
    family:  EmitterFamily,
    sink:    S
}

impl Engine<FsSink> {
    /// Engine writing to the local file system.
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Self::with_sink(options, FsSink)
    }
}

impl<S: FileSink> Engine<S> {
    /// Engine writing through a custom sink.
    #[must_use]
    pub fn with_sink(options: EngineOptions, sink: S) -> Self {
        Self {
            family: EmitterFamily::from_options(&options),
            options,
            sink
        }
    }

    #[must_use]
    pub const fn options(&self) -> &EngineOptions {
        &self.options
    }

    #[must_use]
    pub const fn family(&self) -> EmitterFamily {
        self.family
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn render_entity(&self, model: &ModelSchema) -> GeneratedFile {
        let contents = match self.family {
            EmitterFamily::Plain => entity::plain(model),
            EmitterFamily::TypeOrm => entity::type_orm(model)
        };
        GeneratedFile::new("entities", model, "entity", contents)
    }

    /// Input, update and output DTO files, in that order.
    #[must_use]
    pub fn render_dtos(&self, model: &ModelSchema) -> Vec<GeneratedFile> {
        let shapes = DtoShapes::derive(model, self.options.use_swagger);
        shapes
            .blocks()
            .into_iter()
            .map(|block| {
                GeneratedFile::new(
                    "dtos",
                    model,
                    dto::file_suffix(block.projection()),
                    block.render()
                )
            })
            .collect()
    }

    #[must_use]
    pub fn render_controller(&self, model: &ModelSchema) -> GeneratedFile {
        let contents = controller::render(model, self.options.use_swagger);
        GeneratedFile::new("controllers", model, "controller", contents)
    }

    #[must_use]
    pub fn render_service(&self, model: &ModelSchema) -> GeneratedFile {
        let contents = match self.family {
            EmitterFamily::Plain => service::plain(model),
            EmitterFamily::TypeOrm => service::type_orm(model)
        };
        GeneratedFile::new("services", model, "service", contents)
    }

    #[must_use]
    pub fn render_enums(&self, model: &ModelSchema) -> GeneratedFile {
        GeneratedFile::new("enums", model, "enums", enums::render(model))
    }

    /// Every file a scaffold kind produces.
    ///
    /// `All` yields the entity, the three DTOs, the controller, the service
    /// and the enums, in that order.
    #[must_use]
    pub fn render(&self, kind: ScaffoldKind, model: &ModelSchema) -> Vec<GeneratedFile> {
        match kind {
            ScaffoldKind::Entity => vec![self.render_entity(model)],
            ScaffoldKind::Dto => self.render_dtos(model),
            ScaffoldKind::Controller => vec![self.render_controller(model)],
            ScaffoldKind::Service => vec![self.render_service(model)],
            ScaffoldKind::Enums => vec![self.render_enums(model)],
            ScaffoldKind::All => {
                let mut files = vec![self.render_entity(model)];
                files.extend(self.render_dtos(model));
                files.push(self.render_controller(model));
                files.push(self.render_service(model));
                files.push(self.render_enums(model));
                files
            }
        }
    }

    /// Render then write every file of `kind`.
    ///
    /// # Errors
    ///
    /// Returns the first [`FileWrite`](crate::ScaffoldError::FileWrite)
    /// failure. Files written before it stay on disk.
    pub fn write(&self, kind: ScaffoldKind, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        let files = self.render(kind, model);
        self.write_files(&files)
    }

    /// Write rendered files under the base path.
    ///
    /// # Errors
    ///
    /// Stops at the first sink failure.
    pub fn write_files(&self, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
        files
            .iter()
            .map(|file| {
                let dir = self.options.base_path.join(file.dir);
                let path = self.sink.write(&dir, &file.file_name, &file.contents)?;
                info!(path = %path.display(), family = %self.family, "Generated");
                Ok(path)
            })
            .collect()
    }

    /// # Errors
    ///
    /// See [`Engine::write`].
    pub fn write_entities(&self, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.write(ScaffoldKind::Entity, model)
    }

    /// # Errors
    ///
    /// See [`Engine::write`].
    pub fn write_dtos(&self, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.write(ScaffoldKind::Dto, model)
    }

    /// # Errors
    ///
    /// See [`Engine::write`].
    pub fn write_controller(&self, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.write(ScaffoldKind::Controller, model)
    }

    /// # Errors
    ///
    /// See [`Engine::write`].
    pub fn write_service(&self, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.write(ScaffoldKind::Service, model)
    }

    /// # Errors
    ///
    /// See [`Engine::write`].
    pub fn write_enums(&self, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.write(ScaffoldKind::Enums, model)
    }

    /// # Errors
    ///
    /// See [`Engine::write`].
    pub fn write_all(&self, model: &ModelSchema) -> Result<Vec<PathBuf>> {
        self.write(ScaffoldKind::All, model)
    }
}

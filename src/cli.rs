// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command-line interface.
//!
//! ```text
//! nest-scaffold generate <TYPE> <NAME> [-m <PATH>] [-o <DIR>] [--use-swagger] [--use-typeorm]
//! ```
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `-m, --model-path` | `NEST_SCAFFOLD_MODEL_PATH` | `src/models` |
//! | `-o, --out` | `NEST_SCAFFOLD_OUT` | directory of the model source |
//! | `--use-swagger` | `NEST_SCAFFOLD_SWAGGER` | off |
//! | `--use-typeorm` | `NEST_SCAFFOLD_TYPEORM` | off |
//! | `-v, --verbose` | | off |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::{
    engine::{Dispatcher, EngineOptions},
    error::Result,
    kind::ScaffoldKind,
    loader
};

#[derive(Debug, Parser)]
#[command(name = "nest-scaffold", version)]
#[command(about = "Generate NestJS scaffolds from annotated Rust model definitions")]
pub struct Cli {
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate scaffold files for one model.
    Generate(GenerateArgs)
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// entity, dto, dtos, controller, service, enums or all.
    #[arg(value_name = "TYPE")]
    pub kind: String,

    /// Model to generate, by struct name or `#[model(name)]`.
    pub name: String,

    /// Model source file, or the directory holding one file per model.
    #[arg(
        short,
        long,
        env = "NEST_SCAFFOLD_MODEL_PATH",
        default_value = "src/models"
    )]
    pub model_path: PathBuf,

    /// Output base directory.
    #[arg(short, long, env = "NEST_SCAFFOLD_OUT")]
    pub out: Option<PathBuf>,

    /// Emit `@nestjs/swagger` decorators.
    #[arg(long, env = "NEST_SCAFFOLD_SWAGGER")]
    pub use_swagger: bool,

    /// Emit TypeORM entities and a repository-backed service.
    #[arg(long = "use-typeorm", env = "NEST_SCAFFOLD_TYPEORM")]
    pub use_type_orm: bool
}

impl Cli {
    /// Default log filter for the chosen verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Execute the parsed command, returning the written paths.
    ///
    /// # Errors
    ///
    /// Any error raised while loading the model or writing files.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        match &self.command {
            Command::Generate(args) => args.run()
        }
    }
}

impl GenerateArgs {
    /// Engine options for a model loaded from `source_dir`.
    #[must_use]
    pub fn engine_options(&self, source_dir: PathBuf) -> EngineOptions {
        EngineOptions::new(self.out.clone().unwrap_or(source_dir))
            .with_swagger(self.use_swagger)
            .with_type_orm(self.use_type_orm)
    }

    /// Load the model and write the requested scaffold.
    ///
    /// The scaffold kind is checked before anything is read.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::UnknownGenerationType`](crate::ScaffoldError::UnknownGenerationType)
    /// for an unrecognized kind, then any loader or write error.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let kind: ScaffoldKind = self.kind.parse()?;
        let loaded = loader::load(&self.model_path, &self.name)?;

        let mut dispatcher: Dispatcher = Dispatcher::default();
        dispatcher.init(self.engine_options(loaded.output_base().to_path_buf()));
        dispatcher.write(kind, loaded.schema())
    }
}

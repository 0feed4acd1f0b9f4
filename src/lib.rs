// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # nest-scaffold
//!
//! Generate NestJS scaffolds (entities, DTOs, controllers, services and
//! enums) from model definitions written as annotated Rust structs.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::path::Path;
//!
//! use nest_scaffold::{Engine, EngineOptions, ScaffoldKind, parse};
//!
//! let source = r#"
//!     #[model(table = "users")]
//!     pub struct User {
//!         #[field(primary, type = "uuid")]
//!         pub id: String,
//!
//!         /// Display name.
//!         #[field(type = "string", length = 64)]
//!         pub name: String,
//!
//!         #[enum_values(ADMIN = "admin", MEMBER = "member")]
//!         pub role: String,
//!     }
//! "#;
//!
//! let parsed = parse::parse_source(source, Path::new("user.rs"))?;
//! let user = parsed.select("User").expect("defined above");
//!
//! let engine = Engine::new(EngineOptions::new("src").with_type_orm(true));
//! let files = engine.render(ScaffoldKind::All, user);
//!
//! assert_eq!(files.len(), 7);
//! assert!(files[0].contents.contains("@Entity(\"users\")"));
//! # Ok::<(), nest_scaffold::ScaffoldError>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! model source ──► parse ──► MetadataStore ──► ModelSchema
//!                                                  │
//!                        ┌─────────────────────────┤
//!                        ▼                         ▼
//!                   mapper / dto              emit::{entity, controller,
//!                        │                         service, enums}
//!                        └────────────┬────────────┘
//!                                     ▼
//!                          Engine ──► FileSink ──► <base>/<dir>/<Model>.<kind>.ts
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`schema`] | Model schema values and the metadata store |
//! | [`parse`] | `#[model]` structs to schemas |
//! | [`loader`] | Model source lookup on disk |
//! | [`mapper`] | Field types and validators per DTO projection |
//! | [`dto`] | Input, update and output DTO files |
//! | [`emit`] | Entity, controller, service and enum files |
//! | [`engine`] | Engine options, rendering and the dispatcher |
//! | [`writer`] | File sinks |
//! | [`cli`] | `generate <type> <name>` |

pub mod cli;
pub mod dto;
pub mod emit;
pub mod engine;
pub mod error;
pub mod kind;
pub mod loader;
pub mod mapper;
pub mod naming;
pub mod parse;
pub mod schema;
pub mod writer;

pub use engine::{Dispatcher, EmitterFamily, Engine, EngineOptions, GeneratedFile};
pub use error::{Result, ScaffoldError};
pub use kind::ScaffoldKind;
pub use loader::{LoadedModel, load};
pub use writer::{FileSink, FsSink};

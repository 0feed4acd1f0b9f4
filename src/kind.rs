// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Scaffold kinds accepted by `generate <type> <name>`.

use std::{fmt, str::FromStr};

use crate::error::ScaffoldError;

/// Unit of generation requested per invocation.
///
/// | Input | Kind | Files |
/// |-------|------|-------|
/// | `entity` | `Entity` | 1 |
/// | `dto`, `dtos` | `Dto` | 3 |
/// | `controller` | `Controller` | 1 |
/// | `service` | `Service` | 1 |
/// | `enums` | `Enums` | 1 |
/// | `all` | `All` | 7 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaffoldKind {
    Entity,
    Dto,
    Controller,
    Service,
    Enums,
    All
}

impl ScaffoldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Dto => "dto",
            Self::Controller => "controller",
            Self::Service => "service",
            Self::Enums => "enums",
            Self::All => "all"
        }
    }
}

impl FromStr for ScaffoldKind {
    type Err = ScaffoldError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entity" => Ok(Self::Entity),
            "dto" | "dtos" => Ok(Self::Dto),
            "controller" => Ok(Self::Controller),
            "service" => Ok(Self::Service),
            "enums" => Ok(Self::Enums),
            "all" => Ok(Self::All),
            other => Err(ScaffoldError::UnknownGenerationType(other.to_owned()))
        }
    }
}

impl fmt::Display for ScaffoldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_kind() {
        let cases = [
            ("entity", ScaffoldKind::Entity),
            ("dto", ScaffoldKind::Dto),
            ("dtos", ScaffoldKind::Dto),
            ("controller", ScaffoldKind::Controller),
            ("service", ScaffoldKind::Service),
            ("enums", ScaffoldKind::Enums),
            ("all", ScaffoldKind::All)
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<ScaffoldKind>().unwrap(), expected);
        }
    }

    #[test]
    fn rejects_unknown_kind() {
        for input in ["entities", "Entity", "", "enum"] {
            let err = input.parse::<ScaffoldKind>().unwrap_err();
            assert!(
                matches!(&err, ScaffoldError::UnknownGenerationType(t) if t == input),
                "{input}"
            );
        }
    }
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Relation declarations.
//!
//! Targets are stored by model name and resolved through the
//! [`MetadataStore`](super::MetadataStore) on demand, so a model can refer to
//! one declared later in the same source.

use std::fmt;

/// Relation cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany
}

impl RelationKind {
    /// Attribute name declaring this relation, e.g. `many_to_one`.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::OneToOne => "one_to_one",
            Self::OneToMany => "one_to_many",
            Self::ManyToOne => "many_to_one",
            Self::ManyToMany => "many_to_many"
        }
    }

    /// Look up a relation kind by attribute name.
    #[must_use]
    pub fn from_attribute(name: &str) -> Option<Self> {
        [Self::OneToOne, Self::OneToMany, Self::ManyToOne, Self::ManyToMany]
            .into_iter()
            .find(|kind| kind.attribute() == name)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OneToOne => "one-to-one",
            Self::OneToMany => "one-to-many",
            Self::ManyToOne => "many-to-one",
            Self::ManyToMany => "many-to-many"
        })
    }
}

/// A relation from one model field to another model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationDef {
    /// Cardinality.
    pub kind:   RelationKind,

    /// Target model name, resolved lazily.
    pub target: String
}

impl RelationDef {
    #[must_use]
    pub fn new(kind: RelationKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_lookup() {
        assert_eq!(RelationKind::from_attribute("many_to_one"), Some(RelationKind::ManyToOne));
        assert_eq!(RelationKind::from_attribute("one_to_one"), Some(RelationKind::OneToOne));
        assert_eq!(RelationKind::from_attribute("belongs_to"), None);
    }

    #[test]
    fn display_uses_hyphens() {
        assert_eq!(RelationKind::ManyToMany.to_string(), "many-to-many");
    }
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Doc comment summaries.
//!
//! `///` comments reach the parser as `#[doc = "..."]` attributes. The first
//! non-empty line describes a field when `#[field(description)]` is absent.

use syn::{Attribute, Expr, ExprLit, Lit, Meta};

/// First non-empty doc line, trimmed.
pub fn doc_summary(attrs: &[Attribute]) -> Option<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(meta) => match &meta.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(text),
                    ..
                }) => Some(text.value()),
                _ => None
            },
            _ => None
        })
        .map(|line| line.trim().to_owned())
        .find(|line| !line.is_empty())
}

// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field declarations.

use std::fmt;

use darling::FromMeta;

/// Semantic type of a declared field.
///
/// An absent type (`None` in [`FieldOptions::field_type`]) means string
/// semantics everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Json,
    Uuid,
    Float,
    Decimal,
    Text,
    Enum
}

impl FieldType {
    /// Tag as written in `#[field(type = "...")]`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Json => "json",
            Self::Uuid => "uuid",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Text => "text",
            Self::Enum => "enum"
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromMeta for FieldType {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "json" => Ok(Self::Json),
            "uuid" => Ok(Self::Uuid),
            "float" => Ok(Self::Float),
            "decimal" => Ok(Self::Decimal),
            "text" => Ok(Self::Text),
            "enum" => Ok(Self::Enum),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

/// Declared default value, kept as source text.
///
/// An array-valued default signals enum multiplicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// Single value, e.g. `"pending"` or `0`.
    Scalar(String),

    /// Array value, e.g. `["pending"]`.
    Array(Vec<String>)
}

impl DefaultValue {
    /// Whether the default is an array.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
}

/// Options attached to a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOptions {
    /// Semantic type; `None` defaults to string.
    pub field_type:  Option<FieldType>,

    /// Primary key column.
    pub primary:     bool,

    /// Unique column.
    pub unique:      bool,

    /// Required in input projections and non-nullable in storage.
    pub required:    bool,

    /// Declared default value.
    pub default:     Option<DefaultValue>,

    /// Explicit array flag.
    pub is_array:    bool,

    /// Maximum length for string columns.
    pub length:      Option<u32>,

    /// Human readable description, carried into API docs.
    pub description: Option<String>
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            field_type:  None,
            primary:     false,
            unique:      false,
            required:    true,
            default:     None,
            is_array:    false,
            length:      None,
            description: None
        }
    }
}

impl FieldOptions {
    /// Options with the given semantic type and everything else defaulted.
    #[must_use]
    pub fn typed(field_type: FieldType) -> Self {
        Self {
            field_type: Some(field_type),
            ..Self::default()
        }
    }

    /// Array multiplicity, either explicit or inferred from the default.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.is_array || self.default.as_ref().is_some_and(DefaultValue::is_array)
    }

    #[must_use]
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }
}

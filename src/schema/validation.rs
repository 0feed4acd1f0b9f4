// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Validation rules declared with `#[validate(...)]`.

use darling::FromMeta;
use syn::Lit;

/// Literal value carried by a rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool)
}

impl FromMeta for RuleValue {
    fn from_value(value: &Lit) -> darling::Result<Self> {
        match value {
            Lit::Str(s) => Ok(Self::Str(s.value())),
            Lit::Int(i) => Ok(Self::Int(i.base10_parse()?)),
            Lit::Float(f) => Ok(Self::Float(f.base10_parse()?)),
            Lit::Bool(b) => Ok(Self::Bool(b.value)),
            _ => Err(darling::Error::unexpected_lit_type(value))
        }
    }
}

/// A single validation rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRule {
    /// Symbolic rule name, e.g. `min_length`.
    pub rule:    String,

    /// Optional rule argument.
    pub value:   Option<RuleValue>,

    /// Optional custom message.
    pub message: Option<String>
}

impl ValidationRule {
    #[must_use]
    pub fn new(rule: impl Into<String>) -> Self {
        Self {
            rule:    rule.into(),
            value:   None,
            message: None
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: RuleValue) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn rule_values_from_literals() {
        let cases: [(Lit, RuleValue); 4] = [
            (parse_quote!("abc"), RuleValue::Str("abc".into())),
            (parse_quote!(3), RuleValue::Int(3)),
            (parse_quote!(0.5), RuleValue::Float(0.5)),
            (parse_quote!(true), RuleValue::Bool(true))
        ];
        for (lit, expected) in cases {
            assert_eq!(RuleValue::from_value(&lit).unwrap(), expected);
        }
    }

    #[test]
    fn byte_literal_rejected() {
        let lit: Lit = parse_quote!(b'x');
        assert!(RuleValue::from_value(&lit).is_err());
    }

    #[test]
    fn builder() {
        let rule = ValidationRule::new("min_length")
            .with_value(RuleValue::Int(3))
            .with_message("too short");
        assert_eq!(rule.rule, "min_length");
        assert_eq!(rule.value, Some(RuleValue::Int(3)));
        assert_eq!(rule.message.as_deref(), Some("too short"));
    }
}

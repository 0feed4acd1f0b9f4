// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The model schema value consumed by every generator.

use indexmap::IndexMap;

use super::{FieldOptions, RelationDef, ValidationRule};

/// Model-level options from `#[model(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelOptions {
    /// Symbol base name override.
    pub name:  Option<String>,

    /// Storage table name override.
    pub table: Option<String>
}

/// Enum declaration: symbolic key to string literal, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumDef {
    values: IndexMap<String, String>
}

impl EnumDef {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member. Redefining a key replaces its value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnumDef
where
    K: Into<String>,
    V: Into<String>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
        }
    }
}

/// A complete model definition.
///
/// Built once, read many times. Field, enum and relation tables keep
/// insertion order, which is the order every generated block follows.
///
/// # Example
///
/// ```rust
/// use nest_scaffold::schema::{FieldOptions, FieldType, ModelSchema};
///
/// let mut user = ModelSchema::new("User");
/// user.define_field("id", FieldOptions::typed(FieldType::Uuid).primary());
/// user.define_field("name", FieldOptions::typed(FieldType::String));
///
/// let names: Vec<_> = user.fields().map(|(name, _)| name).collect();
/// assert_eq!(names, ["id", "name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelSchema {
    name:        String,
    options:     Option<ModelOptions>,
    fields:      IndexMap<String, FieldOptions>,
    enums:       IndexMap<String, EnumDef>,
    relations:   IndexMap<String, RelationDef>,
    validations: IndexMap<String, Vec<ValidationRule>>
}

impl ModelSchema {
    /// Empty model with the given symbol base name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Symbol base name, e.g. `User` for `UserEntity`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set model options.
    pub fn define_model(&mut self, options: ModelOptions) {
        self.options = Some(options);
    }

    /// Model options, if any were declared.
    #[must_use]
    pub fn options(&self) -> Option<&ModelOptions> {
        self.options.as_ref()
    }

    /// Storage table name: the declared `table`, else the lower-cased name.
    #[must_use]
    pub fn table_name(&self) -> String {
        self.options
            .as_ref()
            .and_then(|o| o.table.clone())
            .unwrap_or_else(|| self.name.to_lowercase())
    }

    /// Declare a field. Last write wins; the original position is kept.
    ///
    /// A model has at most one primary key: declaring a `primary` field
    /// clears the flag on every other field.
    pub fn define_field(&mut self, name: impl Into<String>, options: FieldOptions) {
        let name = name.into();
        if options.primary {
            for (other, existing) in &mut self.fields {
                if *other != name {
                    existing.primary = false;
                }
            }
        }
        self.fields.insert(name, options);
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldOptions)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a single field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldOptions> {
        self.fields.get(name)
    }

    /// The primary key field, if one is declared.
    #[must_use]
    pub fn primary_key(&self) -> Option<(&str, &FieldOptions)> {
        self.fields().find(|(_, opts)| opts.primary)
    }

    /// Attach an enum declaration to a field.
    pub fn define_enum(&mut self, field: impl Into<String>, values: EnumDef) {
        self.enums.insert(field.into(), values);
    }

    /// Enum declaration for a field.
    #[must_use]
    pub fn enum_for(&self, field: &str) -> Option<&EnumDef> {
        self.enums.get(field)
    }

    /// All enum declarations in declaration order.
    pub fn enums(&self) -> impl Iterator<Item = (&str, &EnumDef)> {
        self.enums.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn has_enums(&self) -> bool {
        !self.enums.is_empty()
    }

    /// Declare a relation. Last write wins.
    pub fn define_relation(&mut self, field: impl Into<String>, relation: RelationDef) {
        self.relations.insert(field.into(), relation);
    }

    /// Relation declarations in declaration order.
    pub fn relations(&self) -> impl Iterator<Item = (&str, &RelationDef)> {
        self.relations.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Append validation rules for a field.
    ///
    /// Repeated declarations concatenate.
    pub fn define_validation(
        &mut self,
        field: impl Into<String>,
        rules: impl IntoIterator<Item = ValidationRule>
    ) {
        self.validations.entry(field.into()).or_default().extend(rules);
    }

    /// Validation rules per field.
    pub fn validations(&self) -> impl Iterator<Item = (&str, &[ValidationRule])> {
        self.validations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Validation rules for a single field.
    #[must_use]
    pub fn validations_for(&self, field: &str) -> &[ValidationRule] {
        self.validations
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldType, RelationKind};

    #[test]
    fn fields_keep_declaration_order() {
        let mut model = ModelSchema::new("User");
        model.define_field("zeta", FieldOptions::default());
        model.define_field("alpha", FieldOptions::default());
        model.define_field("mid", FieldOptions::default());

        let names: Vec<_> = model.fields().map(|(n, _)| n).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn redefining_field_overwrites_in_place() {
        let mut model = ModelSchema::new("User");
        model.define_field("name", FieldOptions::typed(FieldType::String));
        model.define_field("age", FieldOptions::typed(FieldType::Number));
        model.define_field("name", FieldOptions::typed(FieldType::Text));

        let fields: Vec<_> = model.fields().collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, "name");
        assert_eq!(fields[0].1.field_type, Some(FieldType::Text));
    }

    #[test]
    fn new_primary_demotes_previous_one() {
        let mut model = ModelSchema::new("Pair");
        model.define_field("a", FieldOptions::typed(FieldType::Uuid).primary());
        model.define_field("b", FieldOptions::typed(FieldType::Number).primary());

        let primaries: Vec<_> = model
            .fields()
            .filter(|(_, opts)| opts.primary)
            .map(|(n, _)| n)
            .collect();
        assert_eq!(primaries, ["b"]);
        assert_eq!(model.primary_key().map(|(n, _)| n), Some("b"));
        assert_eq!(model.field("a").map(|o| o.field_type), Some(Some(FieldType::Uuid)));
    }

    #[test]
    fn redefining_primary_keeps_it() {
        let mut model = ModelSchema::new("User");
        model.define_field("id", FieldOptions::typed(FieldType::Uuid).primary());
        model.define_field("name", FieldOptions::typed(FieldType::String));
        model.define_field("id", FieldOptions::typed(FieldType::Number).primary());

        assert_eq!(model.primary_key().map(|(n, _)| n), Some("id"));
        assert!(!model.field("name").unwrap().primary);
    }

    #[test]
    fn validations_append() {
        let mut model = ModelSchema::new("User");
        model.define_validation("email", [ValidationRule::new("required")]);
        model.define_validation("email", [ValidationRule::new("email")]);

        let rules: Vec<_> = model
            .validations_for("email")
            .iter()
            .map(|r| r.rule.as_str())
            .collect();
        assert_eq!(rules, ["required", "email"]);
        assert!(model.validations_for("name").is_empty());
    }

    #[test]
    fn enum_members_keep_order() {
        let status: EnumDef = [("PENDING", "pending"), ("PAID", "paid")].into_iter().collect();
        let members: Vec<_> = status.members().collect();
        assert_eq!(members, [("PENDING", "pending"), ("PAID", "paid")]);
    }

    #[test]
    fn table_name_defaults_to_lowercase() {
        let mut model = ModelSchema::new("OrderItem");
        assert_eq!(model.table_name(), "orderitem");

        model.define_model(ModelOptions {
            name:  None,
            table: Some("order_items".into())
        });
        assert_eq!(model.table_name(), "order_items");
    }

    #[test]
    fn primary_key_lookup() {
        let mut model = ModelSchema::new("User");
        assert!(model.primary_key().is_none());

        model.define_field("name", FieldOptions::default());
        model.define_field("id", FieldOptions::typed(FieldType::Uuid).primary());
        assert_eq!(model.primary_key().map(|(n, _)| n), Some("id"));
    }

    #[test]
    fn relations_are_stored() {
        let mut model = ModelSchema::new("Post");
        model.define_relation("author", RelationDef::new(RelationKind::ManyToOne, "User"));

        let rels: Vec<_> = model.relations().collect();
        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0].1.target, "User");
    }
}

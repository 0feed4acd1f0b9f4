// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata store keyed by model name.
//!
//! Parsing a model source defines every model it contains here; generators
//! then read the selected [`ModelSchema`]. The store is an explicit value, not
//! process-wide state: build one per source and hand out shared references.

use indexmap::IndexMap;

use super::{EnumDef, FieldOptions, ModelOptions, ModelSchema, RelationDef, ValidationRule};

/// Models by name, in definition order.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    models: IndexMap<String, ModelSchema>
}

impl MetadataStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, model: &str) -> &mut ModelSchema {
        self.models
            .entry(model.to_owned())
            .or_insert_with(|| ModelSchema::new(model))
    }

    /// Insert a fully built schema, replacing any model with the same name.
    pub fn insert(&mut self, schema: ModelSchema) {
        self.models.insert(schema.name().to_owned(), schema);
    }

    /// Look up a model.
    #[must_use]
    pub fn model(&self, model: &str) -> Option<&ModelSchema> {
        self.models.get(model)
    }

    /// Model names in definition order.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Upsert a field declaration.
    pub fn define_field(&mut self, model: &str, field: &str, options: FieldOptions) {
        self.entry(model).define_field(field, options);
    }

    /// Ordered field declarations; empty when the model is unknown.
    pub fn get_fields(&self, model: &str) -> impl Iterator<Item = (&str, &FieldOptions)> {
        self.models.get(model).into_iter().flat_map(ModelSchema::fields)
    }

    /// Set model options.
    pub fn define_model(&mut self, model: &str, options: ModelOptions) {
        self.entry(model).define_model(options);
    }

    /// Model options, absent when none were declared.
    #[must_use]
    pub fn get_model(&self, model: &str) -> Option<&ModelOptions> {
        self.models.get(model).and_then(ModelSchema::options)
    }

    /// Upsert a relation declaration.
    pub fn define_relation(&mut self, model: &str, field: &str, relation: RelationDef) {
        self.entry(model).define_relation(field, relation);
    }

    /// Relation declarations; empty when the model is unknown.
    pub fn get_relations(&self, model: &str) -> impl Iterator<Item = (&str, &RelationDef)> {
        self.models
            .get(model)
            .into_iter()
            .flat_map(ModelSchema::relations)
    }

    /// Resolve a relation target to its model, if it is defined.
    #[must_use]
    pub fn resolve_relation(&self, relation: &RelationDef) -> Option<&ModelSchema> {
        self.models.get(&relation.target)
    }

    /// Append validation rules.
    pub fn define_validation(
        &mut self,
        model: &str,
        field: &str,
        rules: impl IntoIterator<Item = ValidationRule>
    ) {
        self.entry(model).define_validation(field, rules);
    }

    /// Validation rules per field; empty when the model is unknown.
    pub fn get_validations(
        &self,
        model: &str
    ) -> impl Iterator<Item = (&str, &[ValidationRule])> {
        self.models
            .get(model)
            .into_iter()
            .flat_map(ModelSchema::validations)
    }

    /// Attach an enum declaration.
    pub fn define_enum(&mut self, model: &str, field: &str, values: EnumDef) {
        self.entry(model).define_enum(field, values);
    }

    /// Enum declarations; absent when the model has none.
    #[must_use]
    pub fn get_enums(&self, model: &str) -> Option<Vec<(&str, &EnumDef)>> {
        self.models
            .get(model)
            .filter(|m| m.has_enums())
            .map(|m| m.enums().collect())
    }
}

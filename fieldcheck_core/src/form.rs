//! Form-level validation on top of the registry.
//!
//! A form is a set of named fields with raw string values. Each field name is
//! resolved to a [`FieldKind`], either through an explicit mapping or because
//! the name is itself a kind (`"email"`). Accepted values are collected in
//! their normalized form; everything else becomes a [`FieldViolation`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::FieldKind;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationReason {
    /// The value does not match the field kind's pattern.
    NoMatch,
    /// The field name maps to no known kind.
    UnknownField,
}

/// A rejected form field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldKind>,
    pub reason: ViolationReason,
}

impl FieldViolation {
    /// User-facing description of the violation.
    #[must_use]
    pub fn message(&self) -> String {
        match (self.reason, self.kind) {
            (ViolationReason::NoMatch, Some(kind)) => {
                format!("Field `{}` is not a valid {kind}", self.field)
            }
            (ViolationReason::NoMatch, None) => format!("Field `{}` is invalid", self.field),
            (ViolationReason::UnknownField, _) => format!("Field `{}` is not recognized", self.field),
        }
    }
}

/// Outcome of validating a whole form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormReport {
    /// Normalized values of the fields that passed.
    pub accepted: BTreeMap<String, String>,
    pub violations: Vec<FieldViolation>,
}

impl FormReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Split into the accepted values or the list of violations.
    pub fn into_result(self) -> Result<BTreeMap<String, String>, Vec<FieldViolation>> {
        if self.violations.is_empty() {
            Ok(self.accepted)
        } else {
            Err(self.violations)
        }
    }
}

/// Maps form field names to kinds and validates submitted values.
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    fields: BTreeMap<String, FieldKind>,
}

impl FormValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `field` to `kind`.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.insert(field.into(), kind);
        self
    }

    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (S, FieldKind)>,
        S: Into<String>,
    {
        self.fields
            .extend(fields.into_iter().map(|(field, kind)| (field.into(), kind)));
        self
    }

    /// Resolve a field name to its kind.
    ///
    /// Explicit mappings win; otherwise the name itself is parsed as a kind.
    #[must_use]
    pub fn kind_of(&self, field: &str) -> Option<FieldKind> {
        self.fields
            .get(field)
            .copied()
            .or_else(|| field.parse().ok())
    }

    pub fn validate<I, K, V>(&self, values: I) -> FormReport
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut report = FormReport::default();

        for (field, raw) in values {
            let field = field.as_ref();
            let Some(kind) = self.kind_of(field) else {
                debug!(field, "Unknown form field");
                report.violations.push(FieldViolation {
                    field: field.to_string(),
                    kind: None,
                    reason: ViolationReason::UnknownField,
                });
                continue;
            };

            match kind.validate(raw.as_ref()) {
                Some(normalized) => {
                    report.accepted.insert(field.to_string(), normalized);
                }
                None => report.violations.push(FieldViolation {
                    field: field.to_string(),
                    kind: Some(kind),
                    reason: ViolationReason::NoMatch,
                }),
            }
        }

        debug!(
            accepted = report.accepted.len(),
            violations = report.violations.len(),
            "Form validated"
        );
        report
    }
}

//! Schema-driven validation
//!
//! A schema is a table of rules keyed by field name, evaluated eagerly on
//! every field change and again on submit.

mod rules;

pub use rules::{Rule, ValidationContext};

use crate::state::FormSnapshot;
use std::collections::BTreeMap;

/// Per-field error messages; fields without an entry are valid
pub type FieldErrors = BTreeMap<String, String>;

/// Rules attached to a single field.
///
/// A field with no entry in the schema is optional and unconstrained.
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: &'static str, rules: Vec<Rule>) -> Self {
        Self { field, rules }
    }

    /// First failing rule's message, or Ok if all pass
    fn check(&self, snapshot: &FormSnapshot, ctx: &ValidationContext) -> Result<(), String> {
        let Some(value) = snapshot.value(self.field) else {
            return Ok(());
        };
        for rule in &self.rules {
            rule.apply(value, ctx)?;
        }
        Ok(())
    }
}

/// Validation table for one form
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    rules: Vec<FieldRules>,
}

impl FormSchema {
    pub fn new(rules: Vec<FieldRules>) -> Self {
        Self { rules }
    }

    /// Validate a single field; None means the field is valid (or has no rules)
    pub fn validate_field(
        &self,
        name: &str,
        snapshot: &FormSnapshot,
        ctx: &ValidationContext,
    ) -> Option<String> {
        self.rules
            .iter()
            .find(|r| r.field == name)
            .and_then(|r| r.check(snapshot, ctx).err())
    }

    /// Validate the whole snapshot; an empty map means the form is valid
    pub fn validate(&self, snapshot: &FormSnapshot, ctx: &ValidationContext) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field_rules in &self.rules {
            if let Err(message) = field_rules.check(snapshot, ctx) {
                errors.insert(field_rules.field.to_string(), message);
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldValue, FormField};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn ctx() -> ValidationContext {
        ValidationContext::with_today(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
    }

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldRules::new(
                "name",
                vec![Rule::MinLen {
                    min: 2,
                    message: "Name must be at least 2 characters",
                }],
            ),
            FieldRules::new(
                "date",
                vec![
                    Rule::Required {
                        message: "Please select a date",
                    },
                    Rule::NotBeforeToday {
                        message: "Date must be today or in the future",
                    },
                ],
            ),
        ])
    }

    fn snapshot() -> FormSnapshot {
        FormSnapshot::new(&[
            FormField::text("name", "Name", "John Doe", false),
            FormField::date("date", "Preferred Date", "Pick a date"),
            FormField::text("phone", "Phone (Optional)", "", false),
        ])
    }

    #[test]
    fn test_validate_reports_every_failing_field() {
        let errors = schema().validate(&snapshot(), &ctx());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["name"], "Name must be at least 2 characters");
        assert_eq!(errors["date"], "Please select a date");
    }

    #[test]
    fn test_validate_empty_when_all_pass() {
        let mut snap = snapshot();
        snap.set("name", FieldValue::Text("Jo".to_string()));
        snap.set(
            "date",
            FieldValue::Date(NaiveDate::from_ymd_opt(2025, 6, 15)),
        );
        assert!(schema().validate(&snap, &ctx()).is_empty());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Unset date reports the Required message, not the date-range one
        let errors = schema().validate(&snapshot(), &ctx());
        assert_eq!(errors["date"], "Please select a date");

        let mut snap = snapshot();
        snap.set(
            "date",
            FieldValue::Date(NaiveDate::from_ymd_opt(2025, 6, 14)),
        );
        let errors = schema().validate(&snap, &ctx());
        assert_eq!(errors["date"], "Date must be today or in the future");
    }

    #[test]
    fn test_validate_field_only_checks_that_field() {
        let snap = snapshot();
        let error = schema().validate_field("name", &snap, &ctx());
        assert_eq!(error, Some("Name must be at least 2 characters".to_string()));
    }

    #[test]
    fn test_field_without_rules_is_valid() {
        let snap = snapshot();
        assert_eq!(schema().validate_field("phone", &snap, &ctx()), None);
        assert!(!schema().validate(&snap, &ctx()).contains_key("phone"));
    }

    #[test]
    fn test_rules_for_absent_field_are_skipped() {
        // Schema mentions a field the snapshot does not carry
        let schema = FormSchema::new(vec![FieldRules::new(
            "ghost",
            vec![Rule::Required { message: "missing" }],
        )]);
        assert!(schema.validate(&snapshot(), &ctx()).is_empty());
    }
}

//! Declarative validation rules
//!
//! Each rule is a pure predicate over one field value. Rules carry their
//! error message so schemas stay plain data; no closures, no dynamic
//! dispatch.

use crate::state::FieldValue;
use chrono::NaiveDate;

/// Evaluation context for rules that depend on the environment.
///
/// Carries "today" explicitly so date rules stay deterministic under test.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext {
    pub today: NaiveDate,
}

impl ValidationContext {
    /// Context anchored at the start of the current local day
    pub fn local() -> Self {
        Self {
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Context with a fixed date (tests, replay)
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today }
    }
}

/// A single validation rule with its user-facing error message
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must be present: non-empty text/choice, or a picked date
    Required { message: &'static str },
    /// Text value must have at least `min` characters
    MinLen { min: usize, message: &'static str },
    /// Text value must be a structurally valid email address
    Email { message: &'static str },
    /// Date value must be on or after the current local day
    NotBeforeToday { message: &'static str },
    /// Choice value must be one of the allowed values
    OneOf {
        allowed: Vec<String>,
        message: &'static str,
    },
}

impl Rule {
    /// Evaluate the rule against one field value.
    ///
    /// Ok means the rule passes; Err carries the message to surface next to
    /// the field.
    pub fn apply(&self, value: &FieldValue, ctx: &ValidationContext) -> Result<(), String> {
        match self {
            Rule::Required { message } => {
                if value.is_empty() {
                    Err((*message).to_string())
                } else {
                    Ok(())
                }
            }
            Rule::MinLen { min, message } => {
                if value.as_text().chars().count() < *min {
                    Err((*message).to_string())
                } else {
                    Ok(())
                }
            }
            Rule::Email { message } => {
                if is_valid_email(value.as_text()) {
                    Ok(())
                } else {
                    Err((*message).to_string())
                }
            }
            Rule::NotBeforeToday { message } => match value.as_date() {
                Some(date) if date >= ctx.today => Ok(()),
                // An unset date is Required's concern, not this rule's
                None => Ok(()),
                Some(_) => Err((*message).to_string()),
            },
            Rule::OneOf { allowed, message } => {
                if allowed.iter().any(|a| a == value.as_text()) {
                    Ok(())
                } else {
                    Err((*message).to_string())
                }
            }
        }
    }
}

/// Structural email check: one '@', non-empty local part, dotted domain.
///
/// Mirrors what a typical schema validator accepts; not an RFC 5322 parser.
fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return false;
    }
    domain.contains('.')
}

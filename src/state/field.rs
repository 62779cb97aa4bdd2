//! Form field value objects

use chrono::NaiveDate;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text (single or multi line)
    Text(String),
    /// Calendar date, unset until the user picks one
    Date(Option<NaiveDate>),
    /// One value out of a fixed set (e.g. a time slot)
    Choice(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (empty string for date fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => s,
            FieldValue::Date(_) => "",
        }
    }

    /// Get the date value (None for non-date fields)
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => *d,
            _ => None,
        }
    }

    /// Whether the value is unset/empty
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => s.is_empty(),
            FieldValue::Date(d) => d.is_none(),
        }
    }

    /// JSON representation for the submission payload
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) | FieldValue::Choice(s) => {
                serde_json::Value::String(s.clone())
            }
            FieldValue::Date(Some(d)) => {
                serde_json::Value::String(d.format("%Y-%m-%d").to_string())
            }
            FieldValue::Date(None) => serde_json::Value::Null,
        }
    }
}

/// A single form field: identity, display metadata, and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: FieldValue,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
        }
    }

    /// Create a new date field
    pub fn date(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Date(None),
            is_multiline: false,
        }
    }

    /// Create a new choice field
    pub fn choice(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Choice(String::new()),
            is_multiline: false,
        }
    }

    /// Get the text value (empty string for date fields)
    pub fn as_text(&self) -> &str {
        self.value.as_text()
    }

    /// Get the date value (None for non-date fields)
    pub fn as_date(&self) -> Option<NaiveDate> {
        self.value.as_date()
    }

    /// Reset the value to its empty default, keeping the field type
    pub fn clear(&mut self) {
        self.value = match self.value {
            FieldValue::Text(_) => FieldValue::Text(String::new()),
            FieldValue::Date(_) => FieldValue::Date(None),
            FieldValue::Choice(_) => FieldValue::Choice(String::new()),
        };
    }
}

//! Immutable aggregate of all current field values

use super::field::{FieldValue, FormField};

/// All field values of one form at one point in time.
///
/// Field identity is the field name; names are unique within a form. A
/// snapshot is rebuilt from the form definition on reset, so no field state
/// leaks across submission attempts.
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    fields: Vec<FormField>,
}

impl FormSnapshot {
    /// Build a snapshot with every field at its empty default value
    pub fn new(fields: &[FormField]) -> Self {
        let mut fields = fields.to_vec();
        for field in &mut fields {
            field.clear();
        }
        Self { fields }
    }

    /// All fields, in definition order
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Current value of a field, if the field exists
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.field(name).map(|f| &f.value)
    }

    /// Set a field's value. Returns false for an unknown field name.
    pub fn set(&mut self, name: &str, value: FieldValue) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value;
                true
            }
            None => false,
        }
    }

    /// Whether every field is back at its empty default
    pub fn is_default(&self) -> bool {
        self.fields.iter().all(|f| f.value.is_empty())
    }

    /// JSON payload handed to the submission effect, keyed by field name
    pub fn payload(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for field in &self.fields {
            map.insert(field.name.clone(), field.value.to_json());
        }
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample_fields() -> Vec<FormField> {
        vec![
            FormField::text("name", "Name", "John Doe", false),
            FormField::date("date", "Preferred Date", "Pick a date"),
            FormField::choice("time", "Preferred Time", "Select time"),
        ]
    }

    #[test]
    fn test_new_starts_with_defaults() {
        let snapshot = FormSnapshot::new(&sample_fields());
        assert!(snapshot.is_default());
        assert_eq!(snapshot.fields().len(), 3);
    }

    #[test]
    fn test_set_known_field() {
        let mut snapshot = FormSnapshot::new(&sample_fields());
        assert!(snapshot.set("name", FieldValue::Text("Jo".to_string())));
        assert_eq!(snapshot.field("name").unwrap().as_text(), "Jo");
        assert!(!snapshot.is_default());
    }

    #[test]
    fn test_set_unknown_field_is_rejected() {
        let mut snapshot = FormSnapshot::new(&sample_fields());
        assert!(!snapshot.set("nope", FieldValue::Text("x".to_string())));
        assert!(snapshot.is_default());
    }

    #[test]
    fn test_value_lookup() {
        let mut snapshot = FormSnapshot::new(&sample_fields());
        snapshot.set("time", FieldValue::Choice("09:00".to_string()));
        assert_eq!(snapshot.value("time").unwrap().as_text(), "09:00");
        assert!(snapshot.value("missing").is_none());
    }

    #[test]
    fn test_payload_keys_every_field_by_name() {
        let mut snapshot = FormSnapshot::new(&sample_fields());
        snapshot.set("name", FieldValue::Text("Jo".to_string()));
        snapshot.set(
            "date",
            FieldValue::Date(NaiveDate::from_ymd_opt(2025, 6, 1)),
        );
        snapshot.set("time", FieldValue::Choice("09:00".to_string()));

        let payload = snapshot.payload();
        assert_eq!(
            payload,
            serde_json::json!({
                "name": "Jo",
                "date": "2025-06-01",
                "time": "09:00",
            })
        );
    }

    #[test]
    fn test_new_clears_any_values_in_definition() {
        let mut fields = sample_fields();
        fields[0].value = FieldValue::Text("leftover".to_string());
        let snapshot = FormSnapshot::new(&fields);
        assert!(snapshot.is_default());
    }
}

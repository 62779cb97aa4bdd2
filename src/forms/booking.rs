//! Demo-booking form definition

use super::{FormCopy, FormDefinition};
use crate::schema::{FieldRules, FormSchema, Rule};
use crate::slots;
use crate::state::FormField;

/// The demo-booking scheduler form
pub fn booking_form() -> FormDefinition {
    FormDefinition {
        name: "book-demo",
        title: "Schedule a Demo",
        intro: "Book a personalized demo and see how our automation platform \
                can transform your business.",
        fields: vec![
            FormField::text("name", "Name", "John Doe", false),
            FormField::text("email", "Email", "john@example.com", false),
            FormField::text("company", "Company", "Acme Inc.", false),
            FormField::text("phone", "Phone (Optional)", "+1 (555) 123-4567", false),
            FormField::date("date", "Preferred Date", "Pick a date"),
            FormField::choice("time", "Preferred Time", "Select time"),
            FormField::text(
                "additionalNotes",
                "Additional Notes (Optional)",
                "Tell us what you'd like to see in the demo...",
                true,
            ),
        ],
        schema: FormSchema::new(vec![
            FieldRules::new(
                "name",
                vec![Rule::MinLen {
                    min: 2,
                    message: "Name must be at least 2 characters",
                }],
            ),
            FieldRules::new(
                "email",
                vec![Rule::Email {
                    message: "Please enter a valid email address",
                }],
            ),
            FieldRules::new(
                "company",
                vec![Rule::MinLen {
                    min: 2,
                    message: "Company name is required",
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
            FieldRules::new(
                "time",
                vec![
                    Rule::Required {
                        message: "Please select a time",
                    },
                    Rule::OneOf {
                        allowed: slots::slot_values(),
                        message: "Please select a time",
                    },
                ],
            ),
        ]),
        copy: FormCopy {
            submit_label: "Schedule Demo",
            submitting_label: "Booking...",
            success_title: "Demo Scheduled!",
            success_body: "We've received your request. Our team will contact \
                           you shortly to confirm your demo appointment.",
        },
    }
}

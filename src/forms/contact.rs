//! Contact form definition

use super::{FormCopy, FormDefinition};
use crate::schema::{FieldRules, FormSchema, Rule};
use crate::state::FormField;

/// The get-in-touch contact form
pub fn contact_form() -> FormDefinition {
    FormDefinition {
        name: "contact",
        title: "Get in Touch",
        intro: "Fill out the form below and we'll get back to you as soon as \
                possible.",
        fields: vec![
            FormField::text("name", "Name", "John Doe", false),
            FormField::text("email", "Email", "john@example.com", false),
            FormField::text("company", "Company (Optional)", "Acme Inc.", false),
            FormField::text(
                "message",
                "Message",
                "Tell us about your automation needs...",
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
                "message",
                vec![Rule::MinLen {
                    min: 10,
                    message: "Message must be at least 10 characters",
                }],
            ),
        ]),
        copy: FormCopy {
            submit_label: "Send Message",
            submitting_label: "Sending...",
            success_title: "Message Sent!",
            success_body: "Thank you for contacting us. We'll get back to you soon.",
        },
    }
}

//! Concrete form definitions
//!
//! A definition bundles everything a presentation shell needs to render a
//! form and everything the state machine needs to validate it: field list,
//! validation schema, and per-form copy.

mod booking;
mod contact;

pub use booking::booking_form;
pub use contact::contact_form;

use crate::schema::FormSchema;
use crate::state::FormField;

/// Static copy rendered around a form's lifecycle
#[derive(Debug, Clone)]
pub struct FormCopy {
    /// Submit button at rest
    pub submit_label: &'static str,
    /// Submit button while the effect is in flight
    pub submitting_label: &'static str,
    /// Heading of the success view
    pub success_title: &'static str,
    /// Body of the success view
    pub success_body: &'static str,
}

/// One form: identity, renderable fields, validation schema, and copy
#[derive(Debug, Clone)]
pub struct FormDefinition {
    pub name: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub fields: Vec<FormField>,
    pub schema: FormSchema,
    pub copy: FormCopy,
}

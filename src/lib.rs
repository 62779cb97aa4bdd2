//! leadform - form validation and submission lifecycle
//!
//! The shared core behind the demo-booking and contact forms: schema-driven
//! field validation, a per-instance submission state machine
//! (Idle -> Submitting -> Succeeded), a stand-in async submission effect,
//! and a cancellable post-success redirect. Rendering is left to the
//! embedding shell, which dispatches [`FormInstance::set_field`],
//! [`FormInstance::submit`], and [`FormInstance::reset`] and reads state
//! back for display.

pub mod config;
pub mod forms;
pub mod schema;
pub mod slots;
pub mod state;
pub mod submit;

pub use config::FormConfig;
pub use forms::{booking_form, contact_form, FormCopy, FormDefinition};
pub use schema::{FieldErrors, FieldRules, FormSchema, Rule, ValidationContext};
pub use slots::{time_slots, TimeSlot};
pub use state::{FieldValue, FormField, FormInstance, FormSnapshot, SubmissionPhase};
pub use submit::{DelaySubmitter, Navigate, RedirectGuard, Submit, SubmitError};

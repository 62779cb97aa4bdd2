//! Form submission state machine
//!
//! One [`FormInstance`] per rendered form. The instance owns its snapshot,
//! validity map, and phase; nothing is shared across instances.

use super::field::FieldValue;
use super::snapshot::FormSnapshot;
use crate::config::FormConfig;
use crate::forms::FormDefinition;
use crate::schema::{FieldErrors, ValidationContext};
use crate::submit::{self, DelaySubmitter, Navigate, RedirectGuard, Submit};
use std::sync::Arc;
use std::time::Duration;

/// Submission lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Accepting input; submit is allowed
    #[default]
    Idle,
    /// Effect in flight; inputs and submit are disabled
    Submitting,
    /// Effect completed; success view shown until the redirect fires
    Succeeded,
}

/// State machine for one form instance.
///
/// The submission invariant: [`SubmissionPhase::Submitting`] is unreachable
/// unless every field passes its schema rules. A second submit cannot start
/// while one is awaiting (the call takes `&mut self`), and the phase guard
/// ignores submits after success until [`reset`](Self::reset).
pub struct FormInstance {
    definition: FormDefinition,
    snapshot: FormSnapshot,
    errors: FieldErrors,
    banner: Option<String>,
    phase: SubmissionPhase,
    context: ValidationContext,
    submitter: Arc<dyn Submit>,
    navigator: Arc<dyn Navigate>,
    redirect_delay: Duration,
    home_route: String,
    redirect: Option<RedirectGuard>,
}

impl FormInstance {
    /// Create an instance with default lifecycle timings
    pub fn new(
        definition: FormDefinition,
        submitter: Arc<dyn Submit>,
        navigator: Arc<dyn Navigate>,
    ) -> Self {
        Self::with_config(definition, submitter, navigator, &FormConfig::default())
    }

    /// Create an instance with timings and home route from configuration
    pub fn with_config(
        definition: FormDefinition,
        submitter: Arc<dyn Submit>,
        navigator: Arc<dyn Navigate>,
        config: &FormConfig,
    ) -> Self {
        let snapshot = FormSnapshot::new(&definition.fields);
        Self {
            definition,
            snapshot,
            errors: FieldErrors::new(),
            banner: None,
            phase: SubmissionPhase::Idle,
            context: ValidationContext::local(),
            submitter,
            navigator,
            redirect_delay: config.redirect_delay(),
            home_route: config.home_route().to_string(),
            redirect: None,
        }
    }

    /// Create an instance wired to the stand-in delay submitter
    pub fn prototype(
        definition: FormDefinition,
        navigator: Arc<dyn Navigate>,
        config: &FormConfig,
    ) -> Self {
        let submitter = Arc::new(DelaySubmitter::new(config.submit_delay()));
        Self::with_config(definition, submitter, navigator, config)
    }

    /// Override the validation context (fixed "today" in tests)
    pub fn with_context(mut self, context: ValidationContext) -> Self {
        self.context = context;
        self
    }

    /// The form definition this instance runs
    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    /// Current field values
    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// All current per-field errors
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error message for one field, if it is currently invalid
    pub fn field_error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// Form-level error banner from a failed submission effect
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Whether the whole snapshot currently passes the schema
    pub fn is_valid(&self) -> bool {
        self.definition
            .schema
            .validate(&self.snapshot, &self.context)
            .is_empty()
    }

    /// Submit button label for the current phase
    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmissionPhase::Submitting => self.definition.copy.submitting_label,
            _ => self.definition.copy.submit_label,
        }
    }

    /// Whether a post-success redirect is scheduled and not yet fired
    pub fn redirect_pending(&self) -> bool {
        self.redirect.as_ref().is_some_and(|r| !r.is_finished())
    }

    /// Update one field's value and re-validate that field.
    ///
    /// Ignored while a submission is in flight or after success; unknown
    /// field names are ignored too.
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        if self.phase != SubmissionPhase::Idle {
            tracing::debug!(
                form = self.definition.name,
                field = name,
                phase = ?self.phase,
                "field edit ignored"
            );
            return;
        }
        if !self.snapshot.set(name, value) {
            tracing::warn!(
                form = self.definition.name,
                field = name,
                "edit to unknown field ignored"
            );
            return;
        }
        match self
            .definition
            .schema
            .validate_field(name, &self.snapshot, &self.context)
        {
            Some(message) => {
                self.errors.insert(name.to_string(), message);
            }
            None => {
                self.errors.remove(name);
            }
        }
    }

    /// Request submission.
    ///
    /// If any field fails validation the effect does not run and the errors
    /// are recorded. On success the snapshot resets to defaults and the
    /// redirect home is scheduled; on effect failure the snapshot is kept and
    /// the banner is set.
    pub async fn submit(&mut self) {
        if self.phase != SubmissionPhase::Idle {
            tracing::debug!(
                form = self.definition.name,
                phase = ?self.phase,
                "submit ignored"
            );
            return;
        }

        let errors = self
            .definition
            .schema
            .validate(&self.snapshot, &self.context);
        if !errors.is_empty() {
            tracing::debug!(
                form = self.definition.name,
                invalid_fields = errors.len(),
                "submission blocked by validation"
            );
            self.errors = errors;
            return;
        }

        self.errors.clear();
        self.banner = None;
        self.phase = SubmissionPhase::Submitting;

        let payload = self.snapshot.payload();
        match self.submitter.submit(payload).await {
            Ok(()) => {
                tracing::info!(form = self.definition.name, "submission succeeded");
                self.phase = SubmissionPhase::Succeeded;
                self.snapshot = FormSnapshot::new(&self.definition.fields);
                self.redirect = Some(submit::schedule(
                    self.navigator.clone(),
                    self.home_route.clone(),
                    self.redirect_delay,
                ));
            }
            Err(err) => {
                tracing::warn!(
                    form = self.definition.name,
                    error = %err,
                    "submission failed"
                );
                self.phase = SubmissionPhase::Idle;
                self.banner = Some(err.to_string());
            }
        }
    }

    /// Return to a fresh Idle snapshot, cancelling any pending redirect
    pub fn reset(&mut self) {
        if let Some(redirect) = self.redirect.take() {
            redirect.cancel();
        }
        self.snapshot = FormSnapshot::new(&self.definition.fields);
        self.errors.clear();
        self.banner = None;
        self.phase = SubmissionPhase::Idle;
    }
}

//! Newsletter signup flow
//!
//! A single-field form validated locally before anything is sent. The
//! endpoint is behind [`NewsletterService`]; [`SimulatedNewsletter`] stands in
//! for it until a real backend exists.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

use crate::constants::newsletter::{EMAIL_FIELD, SIMULATED_DELAY_MS};
use crate::error::NewsletterError;
use crate::forms::{FieldRules, FieldView, FormState};

pub const SUCCESS_MESSAGE: &str =
    "Successfully subscribed! Welcome to Anoohe Beauty.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionReceipt {
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

#[async_trait]
pub trait NewsletterService: Send + Sync {
    async fn subscribe(
        &self,
        email: &str,
    ) -> Result<SubscriptionReceipt, NewsletterError>;
}

/// Accepts every address after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedNewsletter {
    delay: Duration,
}

impl SimulatedNewsletter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedNewsletter {
    fn default() -> Self {
        Self::new(Duration::from_millis(SIMULATED_DELAY_MS))
    }
}

#[async_trait]
impl NewsletterService for SimulatedNewsletter {
    async fn subscribe(
        &self,
        email: &str,
    ) -> Result<SubscriptionReceipt, NewsletterError> {
        tokio::time::sleep(self.delay).await;
        Ok(SubscriptionReceipt {
            email: email.to_string(),
            subscribed_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum SubscriptionStatus {
    #[default]
    Idle,
    Success,
    Failed(String),
}

impl SubscriptionStatus {
    /// Banner text shown under the form, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Success => Some(SUCCESS_MESSAGE),
            Self::Failed(_) => Some(FAILURE_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    Subscribed(SubscriptionReceipt),
    Failed(NewsletterError),
}

#[derive(Debug, Clone)]
pub struct NewsletterForm {
    form: FormState,
    status: SubscriptionStatus,
    submitting: bool,
}

impl Default for NewsletterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self {
            form: FormState::new([(
                EMAIL_FIELD,
                FieldRules::required().with_email(),
            )]),
            status: SubscriptionStatus::Idle,
            submitting: false,
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.update_field(EMAIL_FIELD, value);
    }

    pub fn blur(&mut self) {
        self.form.blur(EMAIL_FIELD);
    }

    pub fn email_props(&self) -> FieldView {
        self.form.field_props(EMAIL_FIELD)
    }

    pub fn status(&self) -> &SubscriptionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.email_props().has_error
    }

    /// Validate and mark the form as submitting. Returns the address to send,
    /// or `None` when validation fails or a submit is already running.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.submitting {
            return None;
        }
        if !self.form.validate_form() {
            tracing::debug!(
                error = ?self.email_props().error,
                "newsletter submit rejected by validation"
            );
            return None;
        }
        self.submitting = true;
        Some(self.form.value(EMAIL_FIELD).trim().to_string())
    }

    /// Record the endpoint's answer. Success clears the form; failure keeps
    /// the address so the user can retry.
    pub fn finish_submit(
        &mut self,
        result: Result<SubscriptionReceipt, NewsletterError>,
    ) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(receipt) => {
                tracing::info!(email = %receipt.email, "newsletter subscription confirmed");
                self.status = SubscriptionStatus::Success;
                self.form.reset_form();
                SubmitOutcome::Subscribed(receipt)
            }
            Err(err) => {
                tracing::warn!(error = %err, "newsletter subscription failed");
                self.status = SubscriptionStatus::Failed(err.to_string());
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Validate, send and record the outcome.
    pub async fn submit(
        &mut self,
        service: &dyn NewsletterService,
    ) -> SubmitOutcome {
        let Some(email) = self.begin_submit() else {
            return SubmitOutcome::Invalid;
        };
        let result = service.subscribe(&email).await;
        self.finish_submit(result)
    }
}

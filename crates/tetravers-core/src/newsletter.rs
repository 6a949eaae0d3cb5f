//! Newsletter signup ("la Veille de la Transcendance").
//!
//! A submission goes through [`NewsletterForm::begin_submit`], one insert
//! via [`subscribe`], then [`NewsletterForm::finish_submit`]. The split lets
//! a UI hold the form in reactive state without keeping it borrowed across
//! the network call.

use crate::backend::{insert_rows, Backend};
use crate::error::{TetraversError, TetraversResult};
use crate::types::{NewsletterSubscription, NEWSLETTER_TABLE};

pub const INVALID_EMAIL_MESSAGE: &str = "Veuillez entrer une adresse email valide.";
pub const ALREADY_SUBSCRIBED_MESSAGE: &str =
    "Cette adresse email est déjà inscrite à la Veille de la Transcendance.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Une erreur est survenue. Veuillez réessayer.";
pub const SUCCESS_MESSAGE: &str =
    "Bienvenue dans la Veille de la Transcendance ! Vous recevrez nos communications mystiques.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class for the message box
    pub fn class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Feedback shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    fn error(text: &str) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.to_string(),
        }
    }

    fn success(text: &str) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.to_string(),
        }
    }
}

/// Check an address before any network call: non-empty, containing `@`.
pub fn validate_email(email: &str) -> TetraversResult<()> {
    if email.is_empty() || !email.contains('@') {
        return Err(TetraversError::Validation(INVALID_EMAIL_MESSAGE.to_string()));
    }
    Ok(())
}

/// Insert one subscription.
pub async fn subscribe(
    backend: &dyn Backend,
    subscription: &NewsletterSubscription,
) -> TetraversResult<()> {
    insert_rows(backend, NEWSLETTER_TABLE, std::slice::from_ref(subscription)).await
}

/// Email input, submission flag and feedback message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsletterForm {
    pub email: String,
    submitting: bool,
    message: Option<FormMessage>,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Input and button are disabled while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Inscription..."
        } else {
            "S'inscrire"
        }
    }

    /// Validate and start a submission.
    ///
    /// Returns the row to insert, or `None` when validation failed (the
    /// error message is set) or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<NewsletterSubscription> {
        if self.submitting {
            return None;
        }
        if let Err(e) = validate_email(&self.email) {
            tracing::debug!("Newsletter validation rejected input: {}", e);
            self.message = Some(FormMessage::error(INVALID_EMAIL_MESSAGE));
            return None;
        }

        self.submitting = true;
        self.message = None;
        Some(NewsletterSubscription::active(self.email.clone()))
    }

    /// Record the outcome of the insert and re-enable the form.
    ///
    /// The email is cleared only on success.
    pub fn finish_submit(&mut self, result: TetraversResult<()>) {
        self.message = Some(match result {
            Ok(()) => {
                tracing::info!("Newsletter subscription recorded");
                self.email.clear();
                FormMessage::success(SUCCESS_MESSAGE)
            }
            Err(e) if e.is_unique_violation() => FormMessage::error(ALREADY_SUBSCRIBED_MESSAGE),
            Err(e) => {
                tracing::error!("Newsletter subscription failed: {}", e);
                FormMessage::error(GENERIC_FAILURE_MESSAGE)
            }
        });
        self.submitting = false;
    }

    /// Run a whole submission against `backend`.
    pub async fn submit(&mut self, backend: &dyn Backend) {
        let Some(subscription) = self.begin_submit() else {
            return;
        };
        let result = subscribe(backend, &subscription).await;
        self.finish_submit(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rules() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("veille@tetravers.fr").is_ok());
        assert!(validate_email("@").is_ok());
    }

    #[test]
    fn invalid_email_sets_message_and_stays_idle() {
        let mut form = NewsletterForm::new();
        form.set_email("not-an-email");

        assert!(form.begin_submit().is_none());
        assert!(!form.is_submitting());
        assert_eq!(form.email, "not-an-email");
        let message = form.message().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn begin_disables_and_clears_message() {
        let mut form = NewsletterForm::new();
        form.set_email("bad");
        form.begin_submit();
        assert!(form.message().is_some());

        form.set_email("veille@tetravers.fr");
        let sub = form.begin_submit().unwrap();
        assert_eq!(sub, NewsletterSubscription::active("veille@tetravers.fr"));
        assert!(form.is_submitting());
        assert!(form.message().is_none());
        assert_eq!(form.button_label(), "Inscription...");

        // A second submit while in flight is ignored
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn duplicate_keeps_email() {
        let mut form = NewsletterForm::new();
        form.set_email("veille@tetravers.fr");
        form.begin_submit();
        form.finish_submit(Err(TetraversError::Backend {
            code: Some("23505".to_string()),
            message: "duplicate key".to_string(),
        }));

        assert!(!form.is_submitting());
        assert_eq!(form.email, "veille@tetravers.fr");
        assert_eq!(form.message().unwrap().text, ALREADY_SUBSCRIBED_MESSAGE);
    }

    #[test]
    fn generic_failure_keeps_email() {
        let mut form = NewsletterForm::new();
        form.set_email("veille@tetravers.fr");
        form.begin_submit();
        form.finish_submit(Err(TetraversError::Request("timeout".to_string())));

        assert!(!form.is_submitting());
        assert_eq!(form.email, "veille@tetravers.fr");
        assert_eq!(form.message().unwrap().text, GENERIC_FAILURE_MESSAGE);
        assert_eq!(form.button_label(), "S'inscrire");
    }

    #[test]
    fn success_clears_email() {
        let mut form = NewsletterForm::new();
        form.set_email("veille@tetravers.fr");
        form.begin_submit();
        form.finish_submit(Ok(()));

        assert!(form.email.is_empty());
        let message = form.message().unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.kind.class(), "success");
    }
}

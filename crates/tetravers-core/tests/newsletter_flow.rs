//! Newsletter submission against the in-memory backend

use serde_json::json;
use tetravers_core::newsletter::{
    ALREADY_SUBSCRIBED_MESSAGE, GENERIC_FAILURE_MESSAGE, INVALID_EMAIL_MESSAGE, SUCCESS_MESSAGE,
};
use tetravers_core::{MemoryBackend, MessageKind, NewsletterForm};

const TABLE: &str = "newsletter_subscriptions";

fn backend() -> MemoryBackend {
    MemoryBackend::new().with_unique(TABLE, "email")
}

#[tokio::test]
async fn invalid_email_makes_no_call() {
    let backend = backend();
    let mut form = NewsletterForm::new();
    form.set_email("not-an-email");

    form.submit(&backend).await;

    assert_eq!(backend.insert_count(), 0);
    assert_eq!(form.message().map(|m| m.text.as_str()), Some(INVALID_EMAIL_MESSAGE));
    assert_eq!(form.email, "not-an-email");
}

#[tokio::test]
async fn empty_email_makes_no_call() {
    let backend = backend();
    let mut form = NewsletterForm::new();

    form.submit(&backend).await;

    assert_eq!(backend.insert_count(), 0);
    assert_eq!(form.message().map(|m| m.kind), Some(MessageKind::Error));
}

#[tokio::test]
async fn fresh_email_is_inserted_and_cleared() {
    let backend = backend();
    let mut form = NewsletterForm::new();
    form.set_email("veille@tetravers.fr");

    form.submit(&backend).await;

    assert_eq!(backend.insert_count(), 1);
    assert_eq!(
        backend.rows(TABLE),
        vec![json!({"email": "veille@tetravers.fr", "is_active": true})]
    );
    assert!(form.email.is_empty());
    assert!(!form.is_submitting());
    let message = form.message().unwrap();
    assert_eq!(message.kind, MessageKind::Success);
    assert_eq!(message.text, SUCCESS_MESSAGE);
}

#[tokio::test]
async fn duplicate_email_gets_specific_message() {
    let backend = backend();

    let mut first = NewsletterForm::new();
    first.set_email("veille@tetravers.fr");
    first.submit(&backend).await;

    let mut form = NewsletterForm::new();
    form.set_email("veille@tetravers.fr");
    form.submit(&backend).await;

    assert_eq!(backend.insert_count(), 2);
    assert_eq!(backend.rows(TABLE).len(), 1);
    assert_eq!(form.email, "veille@tetravers.fr");
    assert!(!form.is_submitting());
    assert_eq!(
        form.message().map(|m| m.text.as_str()),
        Some(ALREADY_SUBSCRIBED_MESSAGE)
    );
}

#[tokio::test]
async fn other_failures_get_generic_message() {
    let backend = backend();
    backend.fail_unreachable(TABLE);
    let mut form = NewsletterForm::new();
    form.set_email("veille@tetravers.fr");

    form.submit(&backend).await;

    assert_eq!(form.email, "veille@tetravers.fr");
    assert!(!form.is_submitting());
    assert_eq!(form.message().map(|m| m.text.as_str()), Some(GENERIC_FAILURE_MESSAGE));

    backend.fail_rejected(TABLE, Some("42501"), "permission denied");
    form.submit(&backend).await;
    assert_eq!(form.message().map(|m| m.text.as_str()), Some(GENERIC_FAILURE_MESSAGE));
}

#[tokio::test]
async fn resubmit_after_failure_succeeds() {
    let backend = backend();
    backend.fail_unreachable(TABLE);
    let mut form = NewsletterForm::new();
    form.set_email("veille@tetravers.fr");
    form.submit(&backend).await;

    backend.heal(TABLE);
    form.submit(&backend).await;

    assert!(form.email.is_empty());
    assert_eq!(form.message().map(|m| m.kind), Some(MessageKind::Success));
}

//! Where validated contact submissions go.
//!
//! The submission flow only knows the [`Notifier`] trait. [`LogNotifier`]
//! writes each message to the log; a mail transport implements the same
//! trait and is swapped in at startup without touching validation or
//! rendering.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::contact::ContactSubmission;

/// Delivery failed. The visitor is told to try again; nothing is retried.
#[derive(Debug, Error)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), NotifyError>;
}

/// Logs every submission as a structured `info` event. Never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        info!(
            name = submission.name(),
            email = submission.email(),
            subject = submission.subject(),
            message = submission.message(),
            "contact form submission"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactForm;

    #[tokio::test]
    async fn log_notifier_accepts_submissions() {
        let submission = ContactForm::new("Ada", "a@b", "Hi", "Body").validate().unwrap();
        assert!(LogNotifier.send(&submission).await.is_ok());
    }
}

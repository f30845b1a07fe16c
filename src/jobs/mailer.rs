//! Queue-backed email enqueuer.
//!
//! Handlers hand notification emails to the mailer; delivery happens
//! in the separate job worker process. Enqueue failures are logged
//! and never fail the request that triggered the notification.

use apalis::prelude::Storage;
use apalis_sql::postgres::PostgresStorage;

use super::EmailJob;

/// Enqueues email jobs onto the PostgreSQL-backed queue.
pub struct Mailer {
    storage: Option<PostgresStorage<EmailJob>>,
}

impl Mailer {
    /// Create a mailer over the job storage
    pub fn new(storage: PostgresStorage<EmailJob>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    /// Mailer that drops jobs (queue unavailable or tests)
    pub fn disabled() -> Self {
        Self { storage: None }
    }

    /// Enqueue an email job, logging instead of failing on errors
    pub async fn send(&self, job: EmailJob) {
        match &self.storage {
            Some(storage) => {
                let mut storage = storage.clone();
                match storage.push(job).await {
                    Ok(_) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to enqueue email job");
                    }
                }
            }
            None => {
                tracing::info!(
                    to = %job.to,
                    subject = %job.subject,
                    "Email queue disabled - notification skipped"
                );
            }
        }
    }
}

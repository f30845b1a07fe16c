//! Background jobs.

mod email_job;
mod mailer;

pub use email_job::{email_job_handler, EmailJob};
pub use mailer::Mailer;

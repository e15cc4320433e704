//! Mail Config

use std::sync::Arc;

use clap::Args;
use darkroom_app::notify::{LogNotifier, Notifier, NotifyError, SmtpConfig, SmtpNotifier};

/// Outbound mail settings. Contact notifications are logged instead of sent
/// when no SMTP relay is configured.
#[derive(Debug, Args)]
pub struct MailConfig {
    /// SMTP relay host
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP relay port
    #[arg(long, env = "SMTP_PORT", default_value = "587")]
    pub smtp_port: u16,

    /// SMTP authentication username
    #[arg(long, env = "SMTP_USERNAME", default_value = "")]
    pub smtp_username: String,

    /// SMTP authentication password
    #[arg(long, env = "SMTP_PASSWORD", default_value = "", hide_env_values = true)]
    pub smtp_password: String,

    /// Sender address for notification mail
    #[arg(long, env = "MAIL_FROM", default_value = "noreply@darkroom.example")]
    pub mail_from: String,

    /// Studio inbox that receives contact notifications
    #[arg(long, env = "MAIL_TO", default_value = "studio@darkroom.example")]
    pub mail_to: String,
}

impl MailConfig {
    /// Build the notifier selected by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured relay or addresses are invalid.
    pub fn notifier(&self) -> Result<Arc<dyn Notifier>, NotifyError> {
        match &self.smtp_host {
            Some(host) => Ok(Arc::new(SmtpNotifier::new(SmtpConfig {
                host: host.clone(),
                port: self.smtp_port,
                username: self.smtp_username.clone(),
                password: self.smtp_password.clone(),
                from: self.mail_from.clone(),
                to: self.mail_to.clone(),
            })?)),
            None => Ok(Arc::new(LogNotifier)),
        }
    }
}

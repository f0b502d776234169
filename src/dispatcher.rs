use std::sync::Arc;
use std::time::Duration;

use crate::config::{AppEnvironment, Config};
use crate::errors::{AppError, MAIL_NOT_CONFIGURED_MESSAGE, SENDER_MISSING_MESSAGE};
use crate::formatter::LeadMessage;
use crate::mailer::{EmailSender, OutboundEmail, ResendClient};
use crate::models::ContactSuccess;

pub const TEST_DOMAIN_HINT: &str = "RESEND_FROM_EMAIL su an test domaininde. Farkli alicilara gondermek icin verified domain kullanmalisin.";

/// Hint for senders on Resend's shared test domain, which only delivers to the account owner.
pub fn test_domain_hint(sender: &str) -> Option<&'static str> {
    (sender.ends_with("@resend.dev") || sender.ends_with(".resend.dev")).then_some(TEST_DOMAIN_HINT)
}

/// Hands rendered lead messages to the email capability and maps the outcome.
///
/// Holds no per-request state; one instance is shared by all requests.
#[derive(Clone)]
pub struct Dispatcher {
    /// `None` when the provider credential is not configured.
    sender: Option<Arc<dyn EmailSender>>,
    from: Option<String>,
    to: String,
    environment: AppEnvironment,
}

impl Dispatcher {
    pub fn new(
        sender: Option<Arc<dyn EmailSender>>,
        from: Option<String>,
        to: String,
        environment: AppEnvironment,
    ) -> Self {
        Self {
            sender,
            from,
            to,
            environment,
        }
    }

    /// Builds a dispatcher backed by Resend when an API key is configured.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let sender: Option<Arc<dyn EmailSender>> = match config.resend_api_key {
            Some(ref api_key) => {
                let client = ResendClient::new(
                    config.resend_base_url.clone(),
                    api_key.clone(),
                    Duration::from_secs(config.email_timeout_secs),
                )
                .map_err(|e| anyhow::anyhow!(e))?;
                tracing::info!("✓ Resend client initialized: {}", config.resend_base_url);
                Some(Arc::new(client) as Arc<dyn EmailSender>)
            }
            None => {
                tracing::warn!("RESEND_API_KEY is not set; contact submissions will fail");
                None
            }
        };

        Ok(Self::new(
            sender,
            config.resend_from_email.clone(),
            config.contact_to_email.clone(),
            config.app_env,
        ))
    }

    pub fn recipient(&self) -> &str {
        &self.to
    }

    /// Checks configuration, then sends exactly once.
    ///
    /// Missing configuration fails before any call to the capability.
    pub async fn dispatch(&self, message: LeadMessage) -> Result<ContactSuccess, AppError> {
        let Some(sender) = self.sender.as_ref() else {
            return Err(AppError::ServiceUnavailable(
                MAIL_NOT_CONFIGURED_MESSAGE.to_string(),
            ));
        };
        let Some(from) = self.from.as_deref() else {
            return Err(AppError::ServiceUnavailable(
                SENDER_MISSING_MESSAGE.to_string(),
            ));
        };

        let email = OutboundEmail {
            from: from.to_string(),
            to: self.to.clone(),
            subject: message.subject,
            reply_to: message.reply_to,
            text: message.text,
            html: message.html,
        };

        match sender.send(email).await {
            Ok(()) => {
                tracing::info!(recipient_email = %self.to, "Contact email sent");
                Ok(ContactSuccess::ok())
            }
            Err(error) => {
                let error_message = error.message.clone();
                tracing::error!(
                    error = ?error,
                    error_message = %error_message,
                    sender_email = %from,
                    recipient_email = %self.to,
                    "Contact email could not be sent"
                );

                Err(AppError::SendFailed {
                    error_message,
                    hint: test_domain_hint(from).map(str::to_string),
                    expose_debug: !self.environment.is_production(),
                })
            }
        }
    }
}

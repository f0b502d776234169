use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A fully addressed email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub reply_to: String,
    pub text: String,
    pub html: String,
}

/// Failure reported by an email backend. The message is what operators see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendError {
    pub message: String,
}

impl SendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SendError {}

/// The "send email" capability consumed by the dispatcher.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), SendError>;
}

#[derive(Serialize)]
struct ResendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    reply_to: &'a str,
    text: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
}

/// Client for the Resend transactional email API.
#[derive(Clone)]
pub struct ResendClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ResendClient {
    /// Creates a new `ResendClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the Resend API.
    /// * `api_key` - The API key sent as a bearer token.
    /// * `timeout` - Upper bound for a single send call.
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, SendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SendError::new(format!("Failed to create Resend client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, email: OutboundEmail) -> Result<(), SendError> {
        let url = format!("{}/emails", self.base_url);
        tracing::info!("Sending email via Resend to {}", email.to);

        let body = ResendEmailRequest {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            reply_to: &email.reply_to,
            text: &email.text,
            html: &email.html,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SendError::new(format!("Resend request timed out: {}", e))
                } else {
                    SendError::new(format!("Resend request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            // Resend answers errors with {"statusCode", "name", "message"}
            let message = serde_json::from_str::<ResendErrorBody>(&error_text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or(error_text);
            tracing::warn!("Resend returned {}: {}", status, message);
            return Err(SendError::new(message));
        }

        tracing::info!("✓ Email accepted by Resend");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ResendClient::new(
            "https://api.resend.com/".to_string(),
            "re_test".to_string(),
            Duration::from_secs(5),
        );
        assert_eq!(client.unwrap().base_url, "https://api.resend.com");
    }

    #[test]
    fn test_request_serializes_single_recipient() {
        let body = ResendEmailRequest {
            from: "site@example.com",
            to: ["sales@example.com"],
            subject: "s",
            reply_to: "lead@example.com",
            text: "t",
            html: "<p>h</p>",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["to"], serde_json::json!(["sales@example.com"]));
        assert_eq!(json["reply_to"], "lead@example.com");
    }
}

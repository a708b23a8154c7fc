use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::{config::Config, error::DispatchError, models::message::WebhookMessage};

/// One-shot delivery of chat messages to a preconfigured webhook.
///
/// The destination URL is injected at construction, so tests can point
/// the client at a mock server without touching the environment. Each
/// `execute` call makes at most one request; retry policy belongs to
/// the caller.
pub struct WebhookClient {
    http_client: Client,
    url: Option<String>,
}

impl WebhookClient {
    pub fn new(config: &Config) -> Result<Self, DispatchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        match &config.webhook_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Webhook client initialized");
            }
            _ => warn!("WEBHOOK_URL is not set, form notifications are disabled"),
        }

        Ok(Self {
            http_client: client,
            url: config.webhook_url.clone(),
        })
    }

    pub fn with_url(url: impl Into<String>, timeout: Duration) -> Result<Self, DispatchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client: client,
            url: Some(url.into()),
        })
    }

    /// Delivers one message. Exactly one POST per call on the happy
    /// path, zero network I/O when the URL is missing or malformed.
    pub async fn execute(&self, message: &WebhookMessage) -> Result<(), DispatchError> {
        let url = self.destination()?;

        debug!(embeds = message.embeds.len(), "Posting webhook message");

        let response = self
            .http_client
            .post(url)
            .json(message)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            info!(status = status.as_u16(), "Webhook message delivered");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();

        warn!(
            status = status.as_u16(),
            body = %body,
            "Webhook endpoint rejected message"
        );

        Err(DispatchError::Delivery {
            status: status.as_u16(),
            body,
        })
    }

    fn destination(&self) -> Result<&str, DispatchError> {
        let url = self
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| DispatchError::Configuration("destination URL is not set".into()))?;

        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(DispatchError::Configuration(
                "destination URL must be an http(s) endpoint".into(),
            ));
        }

        Ok(url)
    }
}

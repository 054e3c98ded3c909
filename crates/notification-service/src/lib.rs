mod smtp;
mod templates;

pub use smtp::SmtpNotifier;
pub use templates::EmailTemplate;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use downgrade_detector::DowngradeAlert;
use serde::{Deserialize, Serialize};

/// A batch of downgrade alerts stamped with its generation time, delivered
/// as one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertDigest {
    pub generated_at: DateTime<Utc>,
    pub alerts: Vec<DowngradeAlert>,
}

impl AlertDigest {
    pub fn new(alerts: Vec<DowngradeAlert>) -> Self {
        Self {
            generated_at: Utc::now(),
            alerts,
        }
    }

    pub fn subject(&self) -> String {
        format!("Company Downgrade Alerts ({})", self.alerts.len())
    }
}

/// Trait for notification channels.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn send(&self, digest: &AlertDigest) -> Result<(), NotificationError>;
    fn name(&self) -> &str;
}

/// Errors from the notification system.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("SMTP error: {0}")]
    Smtp(String),
    #[error("Discord webhook error: {0}")]
    Discord(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Configuration for the notification service.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_from: Option<String>,
    pub smtp_to: Vec<String>,
    pub smtp_tls: SmtpTls,
    pub discord_webhook_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub enum SmtpTls {
    #[default]
    StartTls,
    Tls,
    None,
}

impl NotificationConfig {
    /// Load from environment variables.
    pub fn from_env() -> Self {
        let smtp_to = std::env::var("NOTIFICATION_EMAIL_TO")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let smtp_tls = match std::env::var("SMTP_TLS").unwrap_or_default().as_str() {
            "tls" => SmtpTls::Tls,
            "none" => SmtpTls::None,
            _ => SmtpTls::StartTls,
        };

        Self {
            smtp_host: std::env::var("SMTP_HOST").ok().filter(|s| !s.is_empty()),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(587),
            smtp_username: std::env::var("SMTP_USERNAME")
                .ok()
                .filter(|s| !s.is_empty()),
            smtp_password: std::env::var("SMTP_PASSWORD")
                .ok()
                .filter(|s| !s.is_empty()),
            smtp_from: std::env::var("SMTP_FROM_ADDRESS")
                .ok()
                .filter(|s| !s.is_empty()),
            smtp_to,
            smtp_tls,
            discord_webhook_url: std::env::var("DISCORD_WEBHOOK_URL")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Dispatches downgrade digests to all configured channels.
pub struct NotificationService {
    channels: Vec<Box<dyn NotificationChannel>>,
}

impl NotificationService {
    pub fn new(config: &NotificationConfig) -> Self {
        let mut channels: Vec<Box<dyn NotificationChannel>> = Vec::new();

        if config.smtp_host.is_some() && config.smtp_from.is_some() && !config.smtp_to.is_empty() {
            match SmtpNotifier::new(config) {
                Ok(notifier) => {
                    tracing::info!(
                        "Email notifications enabled (SMTP -> {} recipients)",
                        config.smtp_to.len()
                    );
                    channels.push(Box::new(notifier));
                }
                Err(e) => {
                    tracing::warn!("Failed to initialize SMTP notifier: {}", e);
                }
            }
        }

        if let Some(ref webhook_url) = config.discord_webhook_url {
            channels.push(Box::new(DiscordWebhookNotifier {
                webhook_url: webhook_url.clone(),
                client: reqwest::Client::new(),
            }));
            tracing::info!("Discord webhook notifications enabled");
        }

        if channels.is_empty() {
            tracing::info!(
                "No notification channels configured (set SMTP_HOST or DISCORD_WEBHOOK_URL)"
            );
        }

        Self { channels }
    }

    /// Deliver the alert batch to every configured channel, awaiting
    /// completion. An empty batch is suppressed outright; delivery failures
    /// are logged, never propagated.
    pub async fn notify(&self, alerts: &[DowngradeAlert]) {
        if alerts.is_empty() {
            tracing::info!("No downgrades detected, suppressing notifications");
            return;
        }

        let digest = AlertDigest::new(alerts.to_vec());
        for channel in &self.channels {
            match channel.send(&digest).await {
                Ok(()) => tracing::debug!("Sent downgrade digest via {}", channel.name()),
                Err(e) => tracing::warn!(
                    "Failed to send downgrade digest via {}: {}",
                    channel.name(),
                    e
                ),
            }
        }
    }
}

/// Discord webhook notifier.
struct DiscordWebhookNotifier {
    webhook_url: String,
    client: reqwest::Client,
}

#[async_trait]
impl NotificationChannel for DiscordWebhookNotifier {
    async fn send(&self, digest: &AlertDigest) -> Result<(), NotificationError> {
        let lines: Vec<String> = digest
            .alerts
            .iter()
            .map(|a| {
                format!(
                    "**{}** {}: {} -> {} ({})",
                    a.ticker, a.fiscal_year, a.from_status, a.to_status, a.model
                )
            })
            .collect();

        let payload = serde_json::json!({
            "embeds": [{
                "title": digest.subject(),
                "description": lines.join("\n"),
                "color": 0xef4444,
                "timestamp": digest.generated_at.to_rfc3339(),
            }]
        });

        self.client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotificationError::Discord(e.to_string()))?;

        Ok(())
    }

    fn name(&self) -> &str {
        "discord-webhook"
    }
}

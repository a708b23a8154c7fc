use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;

use crate::{
    config::Config,
    models::health::{HealthCheckResponse, HealthStatus, ServiceHealth},
};

pub struct HealthChecker {
    config: Config,
}

impl HealthChecker {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn check_all(&self) -> HealthCheckResponse {
        let mut checks = HashMap::new();

        let webhook_health = self.check_webhook_config();
        checks.insert("webhook".to_string(), webhook_health);

        let overall_status = Self::determine_overall_status(&checks);

        HealthCheckResponse {
            status: overall_status,
            timestamp: Utc::now(),
            checks,
        }
    }

    /// Inspects configuration only. Probing the webhook with a real
    /// request would post noise into the staff channel.
    fn check_webhook_config(&self) -> ServiceHealth {
        match self.config.webhook_url.as_deref().map(str::trim) {
            Some(url) if url.starts_with("https://") || url.starts_with("http://") => {
                debug!("Webhook destination configured");
                ServiceHealth::healthy("destination configured")
            }
            Some(url) if !url.is_empty() => {
                ServiceHealth::unhealthy("destination URL is not an http(s) endpoint")
            }
            _ => ServiceHealth::degraded("destination not configured, notifications disabled"),
        }
    }

    fn determine_overall_status(checks: &HashMap<String, ServiceHealth>) -> HealthStatus {
        if checks
            .values()
            .any(|check| check.status == HealthStatus::Unhealthy)
        {
            return HealthStatus::Unhealthy;
        }

        if checks
            .values()
            .any(|check| check.status == HealthStatus::Degraded)
        {
            return HealthStatus::Degraded;
        }

        HealthStatus::Healthy
    }
}

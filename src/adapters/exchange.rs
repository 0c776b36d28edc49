use crate::config::toml_config::ExchangeConfig;
use crate::domain::catalog::Currency;
use crate::domain::model::ExchangeRate;
use crate::domain::ports::{RateProvider, RateResolution, RateOutcome};
use crate::utils::error::{EduSpendError, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Seeds the exchange rate from a `convert?from=&to=` style service.
///
/// A single GET per call, no retries. Whatever goes wrong, the answer is a
/// rate of 1.0 tagged as a fallback.
#[derive(Debug, Clone)]
pub struct ExchangeRateResolver {
    client: Client,
    endpoint: String,
    access_key: Option<String>,
}

impl ExchangeRateResolver {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            access_key: None,
        }
    }

    pub fn from_config(config: &ExchangeConfig, access_key: Option<&str>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
            access_key: access_key.map(str::to_string),
        })
    }

    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = Some(access_key.into());
        self
    }

    async fn fetch(&self, from: Currency, to: Currency) -> Result<ExchangeRate> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("from", from.code()), ("to", to.code())]);
        if let Some(key) = &self.access_key {
            request = request.query(&[("access_key", key.as_str())]);
        }

        tracing::debug!("Requesting {}->{} rate from {}", from, to, self.endpoint);
        let response = request.send().await?;
        tracing::debug!("Rate service response status: {}", response.status());

        if response.status() != StatusCode::OK {
            return Err(EduSpendError::RateServiceError {
                message: format!("unexpected status {}", response.status()),
            });
        }

        let body: serde_json::Value = response.json().await?;
        let result = body
            .get("result")
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| EduSpendError::RateServiceError {
                message: "response has no numeric 'result' field".to_string(),
            })?;

        ExchangeRate::new(result).map_err(|_| EduSpendError::RateServiceError {
            message: format!("service returned unusable rate {}", result),
        })
    }
}

#[async_trait::async_trait]
impl RateProvider for ExchangeRateResolver {
    async fn resolve(&self, from: Currency, to: Currency) -> RateResolution {
        if from == to {
            return RateResolution::identity();
        }

        match self.fetch(from, to).await {
            Ok(rate) => RateResolution {
                rate,
                outcome: RateOutcome::Fetched,
            },
            Err(e) => {
                tracing::warn!("Exchange rate lookup {}->{} failed, using 1.0: {}", from, to, e);
                RateResolution::fallback(e.to_string())
            }
        }
    }
}

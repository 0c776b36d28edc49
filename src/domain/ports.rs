use crate::domain::catalog::Currency;
use crate::domain::model::{ExchangeRate, FeatureRecord};
use async_trait::async_trait;
use serde::Serialize;

/// How a rate was obtained. Only `Fetched` came from the remote service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RateOutcome {
    Identity,
    Fetched,
    Fallback { reason: String },
    Override,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateResolution {
    pub rate: ExchangeRate,
    pub outcome: RateOutcome,
}

impl RateResolution {
    pub fn identity() -> Self {
        Self {
            rate: ExchangeRate::IDENTITY,
            outcome: RateOutcome::Identity,
        }
    }

    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            rate: ExchangeRate::IDENTITY,
            outcome: RateOutcome::Fallback {
                reason: reason.into(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.outcome, RateOutcome::Fallback { .. })
    }
}

/// Seeds the exchange rate for a currency pair. Implementations never fail;
/// an unusable answer collapses to a fallback resolution.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn resolve(&self, from: Currency, to: Currency) -> RateResolution;
}

/// A trained cost model, loaded once and shared read-only.
pub trait CostModel: Send + Sync {
    fn predict(&self, record: &FeatureRecord) -> f64;

    fn name(&self) -> &str;

    fn version(&self) -> &str;
}

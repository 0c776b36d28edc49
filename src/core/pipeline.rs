use crate::core::assembler::FeatureAssembler;
use crate::core::predictor::CostPredictor;
use crate::core::presentation::{DisplayPayload, PresentationFormatter};
use crate::domain::catalog::Currency;
use crate::domain::model::{CurrencyContext, ExchangeRate, FinancialInputs, StudentProfile};
use crate::domain::ports::{RateOutcome, RateProvider, RateResolution};
use crate::utils::error::Result;
use serde::Serialize;

/// One form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub profile: StudentProfile,
    pub financials: FinancialInputs,
    pub local_currency: Currency,
    /// A user-entered rate always wins over the looked-up one.
    pub exchange_rate_override: Option<ExchangeRate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub payload: DisplayPayload,
    pub rate_outcome: RateOutcome,
}

impl PredictionReport {
    pub fn render_text(&self) -> Result<String> {
        let mut out = String::new();
        if let RateOutcome::Fallback { reason } = &self.rate_outcome {
            out.push_str(&format!(
                "Warning: exchange rate lookup failed ({}); using 1.0. Pass --exchange-rate to set it.\n\n",
                reason
            ));
        }
        out.push_str(&self.payload.render_text()?);
        Ok(out)
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct PredictionPipeline<R: RateProvider> {
    rates: R,
    predictor: CostPredictor,
}

impl<R: RateProvider> PredictionPipeline<R> {
    pub fn new(rates: R, predictor: CostPredictor) -> Self {
        Self { rates, predictor }
    }

    /// The seeded rate for a currency pair selection.
    pub async fn quote_rate(&self, base: Currency, local: Currency) -> RateResolution {
        self.rates.resolve(base, local).await
    }

    async fn currency_context(&self, submission: &Submission) -> (CurrencyContext, RateOutcome) {
        let base_currency = submission.profile.base_currency();
        let resolution = match submission.exchange_rate_override {
            Some(rate) => {
                tracing::debug!("Using user-supplied rate {}", rate.value());
                RateResolution {
                    rate,
                    outcome: RateOutcome::Override,
                }
            }
            None => self.quote_rate(base_currency, submission.local_currency).await,
        };

        let context = CurrencyContext {
            base_currency,
            local_currency: submission.local_currency,
            exchange_rate: resolution.rate,
        };
        (context, resolution.outcome)
    }

    pub async fn run(&self, submission: &Submission) -> PredictionReport {
        let (context, rate_outcome) = self.currency_context(submission).await;
        tracing::info!(
            "Predicting TCA for {} / {} ({} -> {} at {})",
            submission.profile.country(),
            submission.profile.city(),
            context.base_currency,
            context.local_currency,
            context.exchange_rate.value()
        );

        let record = FeatureAssembler::assemble(
            &submission.profile,
            &submission.financials,
            context.exchange_rate,
        );
        let tca_base = self.predictor.predict(&record);

        let payload = PresentationFormatter::format(
            tca_base,
            context.exchange_rate,
            context.local_currency,
            context.base_currency,
            &submission.financials,
            record,
        );

        PredictionReport {
            payload,
            rate_outcome,
        }
    }
}

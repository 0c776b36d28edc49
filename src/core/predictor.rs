use crate::domain::model::FeatureRecord;
use crate::domain::ports::CostModel;
use std::sync::Arc;

/// Scores feature records against a model loaded once at startup.
#[derive(Clone)]
pub struct CostPredictor {
    model: Arc<dyn CostModel>,
}

impl CostPredictor {
    pub fn new(model: Arc<dyn CostModel>) -> Self {
        Self { model }
    }

    /// TCA estimate in the institution's base currency.
    pub fn predict(&self, record: &FeatureRecord) -> f64 {
        let tca_base = self.model.predict(record);
        tracing::debug!(
            "Model {} v{} predicted {:.2}",
            self.model.name(),
            self.model.version(),
            tca_base
        );
        tca_base
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }
}

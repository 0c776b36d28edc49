pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ExchangeRateResolver, LinearCostModel};
pub use config::AppConfig;
pub use crate::core::{
    assembler::FeatureAssembler,
    pipeline::{PredictionPipeline, PredictionReport, Submission},
    predictor::CostPredictor,
    presentation::{DisplayPayload, PresentationFormatter},
};
pub use utils::error::{EduSpendError, Result};

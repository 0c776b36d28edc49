pub mod assembler;
pub mod pipeline;
pub mod predictor;
pub mod presentation;

pub use crate::domain::model::{FeatureRecord, PredictionResult};
pub use crate::domain::ports::{CostModel, RateProvider};
pub use crate::utils::error::Result;

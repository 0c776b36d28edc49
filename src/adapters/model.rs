//! Model artifact loading.
//!
//! The artifact is a JSON export of a linear regressor over the feature
//! record: an intercept, one weight per numeric column and one weight per
//! categorical level (one-hot encoded at training time). A level with no
//! weight contributes nothing, the same as an ignored unknown category.

use crate::domain::catalog::{City, Country, Level, Program};
use crate::domain::model::FeatureRecord;
use crate::domain::ports::CostModel;
use crate::utils::error::{EduSpendError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearCostModel {
    pub name: String,
    pub version: String,
    pub intercept: f64,
    #[serde(default)]
    pub numeric_weights: HashMap<String, f64>,
    #[serde(default)]
    pub categorical_weights: HashMap<String, HashMap<String, f64>>,
}

impl LinearCostModel {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let display = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(&path).map_err(|e| EduSpendError::ModelLoadError {
            path: display.clone(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&content).map_err(|e| match e {
            EduSpendError::ModelLoadError { message, .. } => EduSpendError::ModelLoadError {
                path: display,
                message,
            },
            other => other,
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;
        model.check_schema()?;
        Ok(model)
    }

    fn check_schema(&self) -> Result<()> {
        if !self.intercept.is_finite() {
            return Err(invalid("intercept is not finite"));
        }

        for (column, weight) in &self.numeric_weights {
            if !FeatureRecord::NUMERIC_FIELDS.contains(&column.as_str()) {
                return Err(invalid(format!("unknown numeric column '{}'", column)));
            }
            if !weight.is_finite() {
                return Err(invalid(format!("weight for '{}' is not finite", column)));
            }
        }

        for (column, levels) in &self.categorical_weights {
            for (level, weight) in levels {
                let known = match column.as_str() {
                    "Country" => level.parse::<Country>().is_ok(),
                    "City" => level.parse::<City>().is_ok(),
                    "Level" => level.parse::<Level>().is_ok(),
                    "Program" => level.parse::<Program>().is_ok(),
                    _ => return Err(invalid(format!("unknown categorical column '{}'", column))),
                };
                if !known {
                    return Err(invalid(format!("unknown level '{}' for '{}'", level, column)));
                }
                if !weight.is_finite() {
                    return Err(invalid(format!("weight for {}={} is not finite", column, level)));
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> EduSpendError {
    EduSpendError::ModelLoadError {
        path: "<inline>".to_string(),
        message: message.into(),
    }
}

impl CostModel for LinearCostModel {
    fn predict(&self, record: &FeatureRecord) -> f64 {
        // Fixed column order keeps the floating-point sum identical across runs.
        let numeric: f64 = FeatureRecord::NUMERIC_FIELDS
            .iter()
            .map(|column| {
                let weight = self.numeric_weights.get(*column).copied().unwrap_or(0.0);
                weight * record.numeric(column).unwrap_or(0.0)
            })
            .sum();

        let categorical: f64 = FeatureRecord::CATEGORICAL_FIELDS
            .iter()
            .filter_map(|column| {
                let label = record.categorical(column)?;
                self.categorical_weights.get(*column)?.get(label).copied()
            })
            .sum();

        self.intercept + numeric + categorical
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }
}

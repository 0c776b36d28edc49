use crate::domain::catalog::{City, Country, Currency, Level, Program};
use crate::utils::error::{EduSpendError, Result};
use crate::utils::validation::validate_non_negative;
use serde::{Deserialize, Serialize};

/// Academic half of the form. The city is always one of its country's cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudentProfile {
    country: Country,
    city: City,
    level: Level,
    program: Program,
}

impl StudentProfile {
    pub fn new(country: Country, city: City, level: Level, program: Program) -> Result<Self> {
        if !country.cities().contains(&city) {
            let allowed: Vec<&str> = country.cities().iter().map(|c| c.as_str()).collect();
            return Err(EduSpendError::invalid_input(
                "city",
                format!("{} is not in {} (choose from: {})", city, country, allowed.join(", ")),
            ));
        }
        Ok(Self {
            country,
            city,
            level,
            program,
        })
    }

    pub fn country(&self) -> Country {
        self.country
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn program(&self) -> Program {
        self.program
    }

    pub fn base_currency(&self) -> Currency {
        self.country.base_currency()
    }
}

/// Financial half of the form, in the institution's base currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialInputs {
    living_cost_index: f64,
    rent_monthly: f64,
    visa_fee: f64,
    insurance_annual: f64,
    tuition_annual: f64,
}

impl FinancialInputs {
    pub fn new(
        living_cost_index: f64,
        rent_monthly: f64,
        visa_fee: f64,
        insurance_annual: f64,
        tuition_annual: f64,
    ) -> Result<Self> {
        Ok(Self {
            living_cost_index: validate_non_negative("living_cost_index", living_cost_index)?,
            rent_monthly: validate_non_negative("rent_monthly", rent_monthly)?,
            visa_fee: validate_non_negative("visa_fee", visa_fee)?,
            insurance_annual: validate_non_negative("insurance_annual", insurance_annual)?,
            tuition_annual: validate_non_negative("tuition_annual", tuition_annual)?,
        })
    }

    pub fn living_cost_index(&self) -> f64 {
        self.living_cost_index
    }

    pub fn rent_monthly(&self) -> f64 {
        self.rent_monthly
    }

    pub fn visa_fee(&self) -> f64 {
        self.visa_fee
    }

    pub fn insurance_annual(&self) -> f64 {
        self.insurance_annual
    }

    pub fn tuition_annual(&self) -> f64 {
        self.tuition_annual
    }
}

/// Units of local currency per one unit of base currency. Always finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    pub const IDENTITY: ExchangeRate = ExchangeRate(1.0);

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(EduSpendError::invalid_input(
                "exchange_rate",
                format!("must be a positive number, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ExchangeRate {
    type Error = EduSpendError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ExchangeRate> for f64 {
    fn from(rate: ExchangeRate) -> f64 {
        rate.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrencyContext {
    pub base_currency: Currency,
    pub local_currency: Currency,
    pub exchange_rate: ExchangeRate,
}

/// The single-row input the cost model scores. Serialized field names and
/// order are the model's column contract; rent stays monthly here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    #[serde(rename = "Country")]
    country: Country,
    #[serde(rename = "City")]
    city: City,
    #[serde(rename = "Level")]
    level: Level,
    #[serde(rename = "Program")]
    program: Program,
    #[serde(rename = "Living_Cost_Index")]
    living_cost_index: f64,
    #[serde(rename = "Rent_USD")]
    rent_usd: f64,
    #[serde(rename = "Visa_Fee_USD")]
    visa_fee_usd: f64,
    #[serde(rename = "Insurance_USD")]
    insurance_usd: f64,
    #[serde(rename = "Exchange_Rate")]
    exchange_rate: ExchangeRate,
    #[serde(rename = "Tuition_USD")]
    tuition_usd: f64,
}

impl FeatureRecord {
    pub const FIELD_NAMES: [&'static str; 10] = [
        "Country",
        "City",
        "Level",
        "Program",
        "Living_Cost_Index",
        "Rent_USD",
        "Visa_Fee_USD",
        "Insurance_USD",
        "Exchange_Rate",
        "Tuition_USD",
    ];

    pub const CATEGORICAL_FIELDS: [&'static str; 4] = ["Country", "City", "Level", "Program"];

    pub const NUMERIC_FIELDS: [&'static str; 6] = [
        "Living_Cost_Index",
        "Rent_USD",
        "Visa_Fee_USD",
        "Insurance_USD",
        "Exchange_Rate",
        "Tuition_USD",
    ];

    pub(crate) fn from_parts(
        profile: &StudentProfile,
        financials: &FinancialInputs,
        exchange_rate: ExchangeRate,
    ) -> Self {
        Self {
            country: profile.country,
            city: profile.city,
            level: profile.level,
            program: profile.program,
            living_cost_index: financials.living_cost_index,
            rent_usd: financials.rent_monthly,
            visa_fee_usd: financials.visa_fee,
            insurance_usd: financials.insurance_annual,
            exchange_rate,
            tuition_usd: financials.tuition_annual,
        }
    }

    /// Label of a categorical column, or `None` for an unknown column name.
    pub fn categorical(&self, field: &str) -> Option<&'static str> {
        match field {
            "Country" => Some(self.country.as_str()),
            "City" => Some(self.city.as_str()),
            "Level" => Some(self.level.as_str()),
            "Program" => Some(self.program.as_str()),
            _ => None,
        }
    }

    /// Value of a numeric column, or `None` for an unknown column name.
    pub fn numeric(&self, field: &str) -> Option<f64> {
        match field {
            "Living_Cost_Index" => Some(self.living_cost_index),
            "Rent_USD" => Some(self.rent_usd),
            "Visa_Fee_USD" => Some(self.visa_fee_usd),
            "Insurance_USD" => Some(self.insurance_usd),
            "Exchange_Rate" => Some(self.exchange_rate.value()),
            "Tuition_USD" => Some(self.tuition_usd),
            _ => None,
        }
    }

    pub fn exchange_rate(&self) -> ExchangeRate {
        self.exchange_rate
    }
}

/// Placeholder confidence reported with every prediction. The model does not
/// produce it and it does not depend on the inputs.
// TODO: replace with an interval derived from the model's residuals once the
// artifact exports them.
pub const PLACEHOLDER_CONFIDENCE: f64 = 0.87;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub tca_base: f64,
    pub tca_local: f64,
    pub confidence_score: f64,
}

impl PredictionResult {
    pub fn new(tca_base: f64, rate: ExchangeRate) -> Self {
        Self {
            tca_base,
            tca_local: tca_base * rate.value(),
            confidence_score: PLACEHOLDER_CONFIDENCE,
        }
    }
}

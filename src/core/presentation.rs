use crate::domain::catalog::Currency;
use crate::domain::model::{ExchangeRate, FeatureRecord, FinancialInputs, PredictionResult};
use crate::utils::error::{EduSpendError, Result};
use serde::Serialize;
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonetarySummary {
    pub tca_base: f64,
    pub base_currency: Currency,
    pub tca_local: f64,
    pub local_currency: Currency,
    pub exchange_rate: ExchangeRate,
    /// Constant placeholder, see `PLACEHOLDER_CONFIDENCE`.
    pub confidence_score: f64,
}

/// One slice of the cost chart, in base currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownSlice {
    pub label: &'static str,
    pub value: f64,
    /// Fraction of the breakdown total; `None` when the total is not positive.
    pub share: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayPayload {
    pub summary: MonetarySummary,
    pub breakdown: Vec<BreakdownSlice>,
    pub inputs: FeatureRecord,
}

pub struct PresentationFormatter;

impl PresentationFormatter {
    pub fn format(
        tca_base: f64,
        rate: ExchangeRate,
        local_currency: Currency,
        base_currency: Currency,
        financials: &FinancialInputs,
        inputs: FeatureRecord,
    ) -> DisplayPayload {
        let result = PredictionResult::new(tca_base, rate);

        DisplayPayload {
            summary: MonetarySummary {
                tca_base: result.tca_base,
                base_currency,
                tca_local: result.tca_local,
                local_currency,
                exchange_rate: rate,
                confidence_score: result.confidence_score,
            },
            breakdown: Self::breakdown(financials),
            inputs,
        }
    }

    /// Rent is annualized here only; the feature record keeps it monthly.
    pub fn breakdown(financials: &FinancialInputs) -> Vec<BreakdownSlice> {
        let values = [
            ("Tuition", financials.tuition_annual()),
            ("Rent (x12)", financials.rent_monthly() * 12.0),
            ("Visa", financials.visa_fee()),
            ("Insurance", financials.insurance_annual()),
        ];
        let total: f64 = values.iter().map(|(_, v)| v).sum();

        values
            .into_iter()
            .map(|(label, value)| BreakdownSlice {
                label,
                value,
                share: (total > 0.0).then(|| value / total),
            })
            .collect()
    }
}

impl DisplayPayload {
    pub fn labels(&self) -> Vec<&'static str> {
        self.breakdown.iter().map(|s| s.label).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.breakdown.iter().map(|s| s.value).collect()
    }

    pub fn breakdown_total(&self) -> f64 {
        self.breakdown.iter().map(|s| s.value).sum()
    }

    /// The raw model input as a one-row CSV table.
    pub fn inputs_table(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&self.inputs)?;
        let bytes = writer
            .into_inner()
            .map_err(|e| EduSpendError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| EduSpendError::ConfigError {
            message: format!("input table is not UTF-8: {}", e),
        })
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> Result<String> {
        let summary = &self.summary;
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "Predicted TCA: {} {}",
            format_amount(summary.tca_base),
            summary.base_currency
        );
        let _ = writeln!(
            out,
            "In Your Local Currency: {} {} (1 {} = {:.4} {})",
            format_amount(summary.tca_local),
            summary.local_currency,
            summary.base_currency,
            summary.exchange_rate.value(),
            summary.local_currency
        );
        let _ = writeln!(
            out,
            "Confidence Score: {:.1}% (placeholder, not computed from the model)",
            summary.confidence_score * 100.0
        );

        let _ = writeln!(out);
        let _ = writeln!(out, "Cost Breakdown ({})", summary.base_currency);
        for slice in &self.breakdown {
            let (percent, bar) = match slice.share {
                Some(share) => (
                    format!("{:5.1}%", share * 100.0),
                    "#".repeat((share * BAR_WIDTH as f64).round() as usize),
                ),
                None => ("  n/a".to_string(), String::new()),
            };
            let _ = writeln!(
                out,
                "  {:<12} {:>14}  {}  {}",
                slice.label,
                format_amount(slice.value),
                percent,
                bar
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Model Input Data");
        out.push_str(&self.inputs_table()?);

        Ok(out)
    }
}

/// Two decimals with comma thousands separators, e.g. `35,100.00`.
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assembler::FeatureAssembler;
    use crate::domain::catalog::{City, Country, Level, Program};
    use crate::domain::model::StudentProfile;

    fn payload(financials: FinancialInputs, tca_base: f64, rate: f64) -> DisplayPayload {
        let profile =
            StudentProfile::new(Country::Usa, City::NewYork, Level::Master, Program::Engineering)
                .unwrap();
        let rate = ExchangeRate::new(rate).unwrap();
        let record = FeatureAssembler::assemble(&profile, &financials, rate);
        PresentationFormatter::format(
            tca_base,
            rate,
            Currency::Gbp,
            Currency::Usd,
            &financials,
            record,
        )
    }

    #[test]
    fn test_breakdown_annualizes_rent() {
        let financials = FinancialInputs::new(70.0, 1500.0, 200.0, 1000.0, 30000.0).unwrap();
        let payload = payload(financials, 45000.0, 0.78);

        assert_eq!(payload.labels(), vec!["Tuition", "Rent (x12)", "Visa", "Insurance"]);
        assert_eq!(payload.values(), vec![30000.0, 18000.0, 200.0, 1000.0]);
        assert_eq!(payload.breakdown_total(), 30000.0 + 1500.0 * 12.0 + 200.0 + 1000.0);
        assert_eq!(payload.inputs.numeric("Rent_USD"), Some(1500.0));
    }

    #[test]
    fn test_breakdown_sum_matches_inputs() {
        let cases = [
            (0.0, 0.0, 0.0, 0.0),
            (812.35, 160.0, 1234.56, 41250.10),
            (2999.99, 0.01, 0.0, 17.5),
        ];
        for (rent, visa, insurance, tuition) in cases {
            let financials = FinancialInputs::new(50.0, rent, visa, insurance, tuition).unwrap();
            let payload = payload(financials, 1.0, 1.0);
            assert_eq!(
                payload.breakdown_total(),
                tuition + rent * 12.0 + visa + insurance
            );
        }
    }

    #[test]
    fn test_zero_total_has_no_shares() {
        let financials = FinancialInputs::new(0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
        let payload = payload(financials, 0.0, 1.0);
        assert!(payload.breakdown.iter().all(|s| s.share.is_none()));
        assert!(payload.render_text().unwrap().contains("n/a"));
    }

    #[test]
    fn test_shares_sum_to_one() {
        let financials = FinancialInputs::new(70.0, 1500.0, 200.0, 1000.0, 30000.0).unwrap();
        let payload = payload(financials, 45000.0, 0.78);
        let total: f64 = payload.breakdown.iter().filter_map(|s| s.share).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_render_text() {
        let financials = FinancialInputs::new(70.0, 1500.0, 200.0, 1000.0, 30000.0).unwrap();
        let text = payload(financials, 45000.0, 0.78).render_text().unwrap();

        assert!(text.contains("Predicted TCA: 45,000.00 USD"));
        assert!(text.contains("In Your Local Currency: 35,100.00 GBP"));
        assert!(text.contains("Confidence Score: 87.0%"));
        assert!(text.contains("Rent (x12)"));
        assert!(text.contains("18,000.00"));
        assert!(text.contains("Country,City,Level,Program,Living_Cost_Index"));
        assert!(text.contains("USA,New York,Master,Engineering,"));
    }

    #[test]
    fn test_render_json() {
        let financials = FinancialInputs::new(70.0, 1500.0, 200.0, 1000.0, 30000.0).unwrap();
        let json = payload(financials, 45000.0, 0.78).render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["base_currency"], "USD");
        assert_eq!(value["summary"]["local_currency"], "GBP");
        assert_eq!(value["summary"]["confidence_score"], 0.87);
        assert_eq!(value["breakdown"][1]["label"], "Rent (x12)");
        assert_eq!(value["inputs"]["City"], "New York");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(35100.0), "35,100.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-4200.5), "-4,200.50");
        assert_eq!(format_amount(-0.001), "0.00");
    }
}

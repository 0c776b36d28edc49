use crate::domain::model::{ExchangeRate, FeatureRecord, FinancialInputs, StudentProfile};

/// Builds the model's single-row input from the two halves of the form.
pub struct FeatureAssembler;

impl FeatureAssembler {
    /// Total: every input was validated when it was constructed.
    pub fn assemble(
        profile: &StudentProfile,
        financials: &FinancialInputs,
        rate: ExchangeRate,
    ) -> FeatureRecord {
        FeatureRecord::from_parts(profile, financials, rate)
    }
}

use crate::core::pipeline::Submission;
use crate::domain::catalog::{City, Country, Currency, Level, Program};
use crate::domain::model::{ExchangeRate, FinancialInputs, StudentProfile};
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "eduspend")]
#[command(about = "Predict the total cost of attendance for an international student")]
pub struct CliConfig {
    #[arg(long, global = true, default_value = "eduspend.toml", help = "Path to TOML configuration file")]
    pub config: String,

    #[arg(long, global = true, help = "Override the model artifact path from the config")]
    pub model: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Score one submission and print the prediction with its cost breakdown
    Predict(PredictArgs),

    /// List accepted values; with --country, only that country's cities
    Options {
        #[arg(long)]
        country: Option<Country>,
    },

    /// Show the exchange rate that would seed the currency settings
    Rate {
        #[arg(long)]
        from: Currency,

        #[arg(long)]
        to: Currency,
    },
}

/// The form fields. Defaults mirror an untouched form: first option of each
/// select box and zero for every amount.
#[derive(Debug, Clone, Args)]
pub struct PredictArgs {
    #[arg(long, default_value = "USA")]
    pub country: Country,

    /// Defaults to the first city of the selected country
    #[arg(long)]
    pub city: Option<City>,

    #[arg(long, default_value = "Bachelor")]
    pub level: Level,

    #[arg(long, default_value = "Engineering")]
    pub program: Program,

    #[arg(long, default_value_t = 0.0)]
    pub living_cost_index: f64,

    /// Monthly rent in the institution currency
    #[arg(long, default_value_t = 0.0)]
    pub rent: f64,

    #[arg(long, default_value_t = 0.0)]
    pub visa_fee: f64,

    /// Annual insurance cost
    #[arg(long, default_value_t = 0.0)]
    pub insurance: f64,

    /// Annual tuition fee
    #[arg(long, default_value_t = 0.0)]
    pub tuition: f64,

    #[arg(long, default_value = "USD")]
    pub local_currency: Currency,

    /// 1 unit of institution currency = ? local currency; skips the rate lookup
    #[arg(long)]
    pub exchange_rate: Option<f64>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,
}

impl PredictArgs {
    pub fn to_submission(&self) -> Result<Submission> {
        let city = self
            .city
            .unwrap_or_else(|| self.country.cities()[0]);
        let profile = StudentProfile::new(self.country, city, self.level, self.program)?;
        let financials = FinancialInputs::new(
            self.living_cost_index,
            self.rent,
            self.visa_fee,
            self.insurance,
            self.tuition,
        )?;
        let exchange_rate_override = self.exchange_rate.map(ExchangeRate::new).transpose()?;

        Ok(Submission {
            profile,
            financials,
            local_currency: self.local_currency,
            exchange_rate_override,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_predict_defaults_follow_first_options() {
        let cli = parse(&["eduspend", "predict"]);
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };

        let submission = args.to_submission().unwrap();
        assert_eq!(submission.profile.country(), Country::Usa);
        assert_eq!(submission.profile.city(), City::NewYork);
        assert_eq!(submission.profile.level(), Level::Bachelor);
        assert_eq!(submission.local_currency, Currency::Usd);
        assert!(submission.exchange_rate_override.is_none());
        assert_eq!(cli.config, "eduspend.toml");
    }

    #[test]
    fn test_predict_full_form() {
        let cli = parse(&[
            "eduspend",
            "predict",
            "--country",
            "Canada",
            "--city",
            "Vancouver",
            "--level",
            "PhD",
            "--program",
            "Science",
            "--rent",
            "1200",
            "--tuition",
            "25000",
            "--local-currency",
            "INR",
            "--exchange-rate",
            "61.5",
            "--json",
            "--verbose",
        ]);
        assert!(cli.verbose);
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert!(args.json);

        let submission = args.to_submission().unwrap();
        assert_eq!(submission.profile.city(), City::Vancouver);
        assert_eq!(submission.financials.rent_monthly(), 1200.0);
        assert_eq!(submission.local_currency, Currency::Inr);
        assert_eq!(submission.exchange_rate_override.unwrap().value(), 61.5);
    }

    #[test]
    fn test_city_outside_country_is_rejected() {
        let cli = parse(&["eduspend", "predict", "--country", "Canada", "--city", "London"]);
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert!(args.to_submission().is_err());
    }

    #[test]
    fn test_non_positive_override_is_rejected() {
        let cli = parse(&["eduspend", "predict", "--exchange-rate", "0"]);
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert!(args.to_submission().is_err());
    }

    #[test]
    fn test_unknown_currency_fails_to_parse() {
        assert!(CliConfig::try_parse_from(["eduspend", "rate", "--from", "USD", "--to", "JPY"]).is_err());
    }
}

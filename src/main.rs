use clap::Parser;
use eduspend::config::cli::{Command, PredictArgs};
use eduspend::domain::catalog::{Country, Currency, Level, Program};
use eduspend::domain::ports::{RateOutcome, RateProvider};
use eduspend::utils::{logger, validation::Validate};
use eduspend::{
    AppConfig, CliConfig, CostPredictor, EduSpendError, ExchangeRateResolver, LinearCostModel,
    PredictionPipeline,
};
use std::sync::Arc;

fn fail(e: &EduSpendError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let config = match AppConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            std::process::exit(e.exit_code());
        }
    };

    let json_mode = matches!(&cli.command, Command::Predict(args) if args.json) || config.json_output();
    if json_mode {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }
    tracing::debug!("Configuration: {:?}", config);

    let resolver = match ExchangeRateResolver::from_config(&config.exchange, config.access_key()) {
        Ok(resolver) => resolver,
        Err(e) => fail(&e),
    };

    match &cli.command {
        Command::Options { country } => print_options(*country),
        Command::Rate { from, to } => {
            let resolution = resolver.resolve(*from, *to).await;
            let source = match &resolution.outcome {
                RateOutcome::Fetched => "fetched".to_string(),
                RateOutcome::Identity => "same currency".to_string(),
                RateOutcome::Fallback { reason } => format!("fallback: {}", reason),
                RateOutcome::Override => "override".to_string(),
            };
            println!("1 {} = {:.4} {} ({})", from, resolution.rate.value(), to, source);
        }
        Command::Predict(args) => predict(&cli, &config, resolver, args, json_mode).await,
    }
}

async fn predict(
    cli: &CliConfig,
    config: &AppConfig,
    resolver: ExchangeRateResolver,
    args: &PredictArgs,
    json_mode: bool,
) {
    let submission = match args.to_submission() {
        Ok(submission) => submission,
        Err(e) => fail(&e),
    };

    // The model must load before anything is predicted or printed.
    let model_path = cli.model.as_deref().unwrap_or(&config.model.path);
    let model = match LinearCostModel::from_file(model_path) {
        Ok(model) => model,
        Err(e) => fail(&e),
    };
    tracing::info!("Loaded model {} v{} from {}", model.name, model.version, model_path);

    let pipeline = PredictionPipeline::new(resolver, CostPredictor::new(Arc::new(model)));
    let report = pipeline.run(&submission).await;

    let rendered = if json_mode {
        report.render_json()
    } else {
        report.render_text()
    };
    match rendered {
        Ok(output) => print!("{}", output),
        Err(e) => fail(&e),
    }
}

fn print_options(country: Option<Country>) {
    let countries: Vec<Country> = match country {
        Some(country) => vec![country],
        None => Country::ALL.to_vec(),
    };

    for country in countries {
        let cities: Vec<&str> = country.cities().iter().map(|c| c.as_str()).collect();
        println!("{} ({}): {}", country, country.base_currency(), cities.join(", "));
    }

    if country.is_none() {
        let levels: Vec<&str> = Level::ALL.iter().map(|l| l.as_str()).collect();
        let programs: Vec<&str> = Program::ALL.iter().map(|p| p.as_str()).collect();
        let currencies: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
        println!("Levels: {}", levels.join(", "));
        println!("Programs: {}", programs.join(", "));
        println!("Local currencies: {}", currencies.join(", "));
    }
}

use anyhow::Context;
use auto_quote::config::cli::{Command, QuoteArgs};
use auto_quote::core::reference::{
    coverage_options, vehicle_years, DEDUCTIBLE_OPTIONS, LIABILITY_LIMITS,
};
use auto_quote::domain::ports::{CatalogSettings, Clock};
use auto_quote::utils::{logger, validation::validate_quote_input, validation::Validate};
use auto_quote::{
    calculate_quote_on, rating_factors, CliConfig, NhtsaCatalog, QuoteError, SystemClock,
    VehicleCache,
};
use chrono::Datelike;
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);

        let exit_code = match e.downcast_ref::<QuoteError>() {
            Some(err) if err.is_user_error() => 2,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: &CliConfig) -> anyhow::Result<()> {
    match &cli.command {
        Command::Quote(args) => print_quote(args),
        Command::Makes => {
            let cache = build_cache(cli)?;
            for make in cache.get_makes() {
                println!("{:>3}  {}", make.id, make.name);
            }
            Ok(())
        }
        Command::Models { make_id, year } => {
            let cache = build_cache(cli)?;
            let models = cache.get_models(*make_id, *year).await?;
            for model in models {
                println!("{:>5}  {}", model.id, model.name);
            }
            Ok(())
        }
        Command::Options => {
            print_options();
            Ok(())
        }
    }
}

fn build_cache(cli: &CliConfig) -> anyhow::Result<VehicleCache<NhtsaCatalog, SystemClock>> {
    let settings = cli.load_settings().context("Failed to load settings")?;
    settings.validate().context("Invalid settings")?;

    let catalog = NhtsaCatalog::new(settings.base_url(), settings.request_timeout())?;
    Ok(VehicleCache::with_ttl(
        catalog,
        SystemClock,
        settings.cache_ttl(),
    ))
}

fn print_quote(args: &QuoteArgs) -> anyhow::Result<()> {
    let as_of = args
        .as_of
        .unwrap_or_else(|| SystemClock.now().date_naive());
    let input = args.to_input();

    validate_quote_input(&input, as_of)?;
    let result = calculate_quote_on(&input, as_of);

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to encode quote")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Annual premium:  ${}", result.premium);
    println!("Monthly payment: ${}", result.monthly_payment);
    for (component, amount) in &result.breakdown {
        println!("  {:<15} ${}", component.as_str(), amount);
    }

    if args.explain {
        let factors = rating_factors(&input, as_of);
        println!("Rating factors (driver age {}):", factors.driver_age);
        println!("  age          x{}", factors.age);
        println!("  state        x{}", factors.state);
        println!(
            "  vehicle      x{} (age x{}, make x{})",
            factors.vehicle(),
            factors.vehicle_age,
            factors.vehicle_make
        );
        println!("  coverage     x{}", factors.coverage);
        println!("  liability    x{}", factors.liability);
        println!("  deductible   x{}", factors.deductible);
    }

    Ok(())
}

fn print_options() {
    for option in coverage_options() {
        println!("{} ({})", option.name, option.coverage_type);
        println!("  {}", option.description);
        for feature in option.features {
            println!("  - {}", feature);
        }
    }

    let limits: Vec<&str> = LIABILITY_LIMITS.iter().map(|o| o.label).collect();
    println!("Liability limits: {}", limits.join(", "));

    let deductibles: Vec<&str> = DEDUCTIBLE_OPTIONS.iter().map(|o| o.label).collect();
    println!("Deductibles: {}", deductibles.join(", "));

    let years = vehicle_years(SystemClock.now().year());
    if let (Some(newest), Some(oldest)) = (years.first(), years.last()) {
        println!("Model years: {} to {}", oldest, newest);
    }
}

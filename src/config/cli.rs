use crate::domain::model::{CoverageType, QuoteInput};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Rate a quote
    Quote(QuoteArgs),
    /// List vehicle makes
    Makes,
    /// List models for a make and model year
    Models {
        #[arg(long)]
        make_id: u32,
        #[arg(long, help = "Model year (defaults to the current year)")]
        year: Option<i32>,
    },
    /// Show coverage options, limit and deductible ladders and model years
    Options,
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    #[arg(long, help = "Date of birth (YYYY-MM-DD)")]
    pub dob: NaiveDate,

    #[arg(long, help = "Two-letter state code")]
    pub state: String,

    #[arg(long)]
    pub vehicle_year: i32,

    #[arg(long)]
    pub make: String,

    #[arg(long, default_value = "STANDARD", help = "LIABILITY, STANDARD or FULL")]
    pub coverage: String,

    #[arg(long, default_value = "100000")]
    pub liability_limit: u32,

    #[arg(long, default_value = "500")]
    pub deductible: u32,

    #[arg(long, help = "Evaluation date (defaults to today)")]
    pub as_of: Option<NaiveDate>,

    #[arg(long, help = "Print the individual rating factors")]
    pub explain: bool,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,
}

impl QuoteArgs {
    pub fn to_input(&self) -> QuoteInput {
        let coverage_type = self
            .coverage
            .parse::<CoverageType>()
            .unwrap_or(CoverageType::Unrecognized);

        QuoteInput {
            date_of_birth: self.dob,
            state: self.state.trim().to_ascii_uppercase(),
            vehicle_year: self.vehicle_year,
            vehicle_make: self.make.trim().to_string(),
            coverage_type,
            liability_limit: self.liability_limit,
            deductible: self.deductible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use clap::Parser;

    #[test]
    fn test_parse_quote_command() {
        let cli = CliConfig::try_parse_from([
            "auto-quote",
            "quote",
            "--dob",
            "1994-06-01",
            "--state",
            "wy",
            "--vehicle-year",
            "2023",
            "--make",
            "Toyota",
            "--coverage",
            "standard",
            "--deductible",
            "1000",
        ])
        .unwrap();

        let Command::Quote(args) = cli.command else {
            panic!("expected quote command");
        };
        let input = args.to_input();
        assert_eq!(input.state, "WY");
        assert_eq!(input.coverage_type, CoverageType::Standard);
        assert_eq!(input.liability_limit, 100_000);
        assert_eq!(input.deductible, 1_000);
    }

    #[test]
    fn test_parse_models_with_global_flags() {
        let cli = CliConfig::try_parse_from([
            "auto-quote",
            "models",
            "--make-id",
            "14",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Models {
                make_id: 14,
                year: None
            }
        ));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = CliConfig::try_parse_from([
            "auto-quote",
            "quote",
            "--dob",
            "06/01/1994",
            "--state",
            "WY",
            "--vehicle-year",
            "2023",
            "--make",
            "Toyota",
        ]);
        assert!(result.is_err());
    }
}

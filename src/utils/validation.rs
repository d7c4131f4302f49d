use crate::core::reference::{vehicle_years, DEDUCTIBLE_OPTIONS, LIABILITY_LIMITS};
use crate::domain::model::{CoverageType, QuoteInput};
use crate::utils::error::{QuoteError, Result};
use chrono::{Datelike, NaiveDate};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(QuoteError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> QuoteError {
    QuoteError::ValidationError {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Form-level checks a caller runs before handing input to the rating engine.
pub fn validate_quote_input(input: &QuoteInput, as_of: NaiveDate) -> Result<()> {
    if input.date_of_birth > as_of {
        return Err(invalid("dateOfBirth", "Date of birth is in the future"));
    }

    if input.state.len() != 2 || !input.state.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(invalid(
            "state",
            format!("Expected a two-letter state code, got {:?}", input.state),
        ));
    }

    let years = vehicle_years(as_of.year());
    if !years.contains(&input.vehicle_year) {
        return Err(invalid(
            "vehicleYear",
            format!(
                "Vehicle year must be between {} and {}",
                years.last().copied().unwrap_or_default(),
                years.first().copied().unwrap_or_default()
            ),
        ));
    }

    if input.vehicle_make.trim().is_empty() {
        return Err(invalid("vehicleMake", "Vehicle make is required"));
    }

    if input.coverage_type == CoverageType::Unrecognized {
        return Err(invalid(
            "coverageType",
            "Coverage type must be LIABILITY, STANDARD or FULL",
        ));
    }

    if !LIABILITY_LIMITS.iter().any(|o| o.value == input.liability_limit) {
        return Err(invalid(
            "liabilityLimit",
            format!("{} is not an offered liability limit", input.liability_limit),
        ));
    }

    if !DEDUCTIBLE_OPTIONS.iter().any(|o| o.value == input.deductible) {
        return Err(invalid(
            "deductible",
            format!("{} is not an offered deductible", input.deductible),
        ));
    }

    Ok(())
}

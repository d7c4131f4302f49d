use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Tier of protection purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoverageType {
    Liability,
    Standard,
    Full,
    /// Anything outside the known tiers. Rated at the neutral factor.
    #[serde(other)]
    Unrecognized,
}

impl CoverageType {
    pub const ALL: [CoverageType; 3] = [
        CoverageType::Liability,
        CoverageType::Standard,
        CoverageType::Full,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageType::Liability => "LIABILITY",
            CoverageType::Standard => "STANDARD",
            CoverageType::Full => "FULL",
            CoverageType::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for CoverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverageType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "LIABILITY" => CoverageType::Liability,
            "STANDARD" => CoverageType::Standard,
            "FULL" => CoverageType::Full,
            _ => CoverageType::Unrecognized,
        })
    }
}

/// Line item of a premium breakdown. Ordering follows the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoverageComponent {
    Liability,
    Collision,
    Comprehensive,
    PersonalInjury,
}

impl CoverageComponent {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageComponent::Liability => "liability",
            CoverageComponent::Collision => "collision",
            CoverageComponent::Comprehensive => "comprehensive",
            CoverageComponent::PersonalInjury => "personalInjury",
        }
    }
}

/// Completed applicant/vehicle/coverage record handed to the rating engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    pub date_of_birth: NaiveDate,
    pub state: String,
    pub vehicle_year: i32,
    pub vehicle_make: String,
    pub coverage_type: CoverageType,
    pub liability_limit: u32,
    pub deductible: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub premium: i64,
    pub monthly_payment: i64,
    pub breakdown: BTreeMap<CoverageComponent, i64>,
}

impl QuoteResult {
    pub fn breakdown_total(&self) -> i64 {
        self.breakdown.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleMake {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleModel {
    pub id: u32,
    pub name: String,
    pub make_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_type_parses_case_insensitively() {
        assert_eq!("full".parse::<CoverageType>().unwrap(), CoverageType::Full);
        assert_eq!(
            " Standard ".parse::<CoverageType>().unwrap(),
            CoverageType::Standard
        );
        assert_eq!(
            "PLATINUM".parse::<CoverageType>().unwrap(),
            CoverageType::Unrecognized
        );
    }

    #[test]
    fn test_quote_input_uses_camel_case_and_upper_case_coverage() {
        let json = serde_json::json!({
            "dateOfBirth": "1994-06-01",
            "state": "WY",
            "vehicleYear": 2023,
            "vehicleMake": "Toyota",
            "coverageType": "STANDARD",
            "liabilityLimit": 100000,
            "deductible": 1000
        });

        let input: QuoteInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.coverage_type, CoverageType::Standard);
        assert_eq!(
            input.date_of_birth,
            NaiveDate::from_ymd_opt(1994, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_unknown_coverage_deserializes_as_unrecognized() {
        let coverage: CoverageType = serde_json::from_str("\"GOLD\"").unwrap();
        assert_eq!(coverage, CoverageType::Unrecognized);
    }

    #[test]
    fn test_breakdown_serializes_with_component_names() {
        let mut breakdown = BTreeMap::new();
        breakdown.insert(CoverageComponent::Liability, 40);
        breakdown.insert(CoverageComponent::PersonalInjury, 10);
        let result = QuoteResult {
            premium: 50,
            monthly_payment: 4,
            breakdown,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["monthlyPayment"], 4);
        assert_eq!(value["breakdown"]["personalInjury"], 10);
        assert_eq!(result.breakdown_total(), 50);
    }
}

//! Premium rating engine.
//!
//! A quote starts from [`BASE_PREMIUM`] and is multiplied by six independent
//! risk factors: driver age, state, vehicle (age x make), coverage type,
//! liability limit and deductible. The engine is a pure function of its input
//! and the evaluation date; it performs no validation and never fails.

use crate::domain::model::{CoverageComponent, CoverageType, QuoteInput, QuoteResult};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Annual premium in USD before any factor is applied.
pub const BASE_PREMIUM: f64 = 800.0;

const HIGH_RISK_STATES: [&str; 5] = ["CA", "NY", "FL", "TX", "MI"];
const LOW_RISK_STATES: [&str; 5] = ["VT", "ME", "NH", "IA", "WY"];

const SPORTS_MAKES: [&str; 4] = ["FERRARI", "LAMBORGHINI", "PORSCHE", "MASERATI"];
const LUXURY_MAKES: [&str; 7] = [
    "BMW",
    "MERCEDES-BENZ",
    "AUDI",
    "LEXUS",
    "ACURA",
    "INFINITI",
    "CADILLAC",
];
const ECONOMY_MAKES: [&str; 5] = ["TOYOTA", "HONDA", "HYUNDAI", "KIA", "NISSAN"];

/// Every multiplier that went into a quote, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingFactors {
    pub driver_age: i32,
    pub age: f64,
    pub state: f64,
    pub vehicle_age: f64,
    pub vehicle_make: f64,
    pub coverage: f64,
    pub liability: f64,
    pub deductible: f64,
}

impl RatingFactors {
    pub fn vehicle(&self) -> f64 {
        self.vehicle_age * self.vehicle_make
    }

    /// Unrounded annual premium.
    pub fn apply(&self, base: f64) -> f64 {
        base * self.age
            * self.state
            * self.vehicle()
            * self.coverage
            * self.liability
            * self.deductible
    }
}

/// Rates `input` as of today (UTC).
pub fn calculate_quote(input: &QuoteInput) -> QuoteResult {
    calculate_quote_on(input, Utc::now().date_naive())
}

pub fn calculate_quote_on(input: &QuoteInput, as_of: NaiveDate) -> QuoteResult {
    let factors = rating_factors(input, as_of);
    let raw_premium = factors.apply(BASE_PREMIUM);

    let premium = raw_premium.round() as i64;
    let monthly_payment = (premium as f64 / 12.0).round() as i64;
    let breakdown = breakdown(raw_premium, input.coverage_type);

    tracing::debug!(
        premium,
        monthly_payment,
        coverage = %input.coverage_type,
        "Calculated quote"
    );

    QuoteResult {
        premium,
        monthly_payment,
        breakdown,
    }
}

pub fn rating_factors(input: &QuoteInput, as_of: NaiveDate) -> RatingFactors {
    let driver_age = age_in_years(input.date_of_birth, as_of);
    RatingFactors {
        driver_age,
        age: age_factor(driver_age),
        state: state_factor(&input.state),
        vehicle_age: vehicle_age_factor(as_of.year() - input.vehicle_year),
        vehicle_make: make_factor(&input.vehicle_make),
        coverage: coverage_factor(input.coverage_type),
        liability: liability_factor(input.liability_limit),
        deductible: deductible_factor(input.deductible),
    }
}

/// Whole years elapsed between `date_of_birth` and `as_of`.
pub fn age_in_years(date_of_birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - date_of_birth.year();
    if (as_of.month(), as_of.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

pub fn age_factor(age: i32) -> f64 {
    match age {
        a if a < 18 => 2.5,
        a if a < 25 => 1.8,
        a if a < 35 => 1.2,
        a if a < 55 => 1.0,
        a if a < 70 => 1.1,
        _ => 1.3,
    }
}

pub fn state_factor(state: &str) -> f64 {
    if HIGH_RISK_STATES.contains(&state) {
        1.3
    } else if LOW_RISK_STATES.contains(&state) {
        0.8
    } else {
        1.0
    }
}

pub fn vehicle_age_factor(vehicle_age: i32) -> f64 {
    match vehicle_age {
        a if a < 3 => 1.2,
        a if a < 7 => 1.0,
        a if a < 15 => 0.9,
        _ => 0.8,
    }
}

pub fn make_factor(make: &str) -> f64 {
    let make = make.to_uppercase();
    let make = make.as_str();
    if SPORTS_MAKES.contains(&make) {
        2.0
    } else if LUXURY_MAKES.contains(&make) {
        1.4
    } else if ECONOMY_MAKES.contains(&make) {
        0.9
    } else {
        1.0
    }
}

pub fn coverage_factor(coverage: CoverageType) -> f64 {
    match coverage {
        CoverageType::Liability => 0.6,
        CoverageType::Standard => 1.0,
        CoverageType::Full => 1.6,
        CoverageType::Unrecognized => 1.0,
    }
}

pub fn liability_factor(limit: u32) -> f64 {
    match limit {
        l if l <= 25_000 => 0.8,
        l if l <= 50_000 => 0.9,
        l if l <= 100_000 => 1.0,
        l if l <= 250_000 => 1.1,
        _ => 1.2,
    }
}

pub fn deductible_factor(deductible: u32) -> f64 {
    match deductible {
        d if d >= 2_000 => 0.8,
        d if d >= 1_000 => 0.9,
        d if d >= 500 => 0.95,
        _ => 1.0,
    }
}

/// Splits the unrounded premium across components. Each share is rounded on
/// its own, so the total may drift from the rounded premium by a unit.
pub fn breakdown(raw_premium: f64, coverage: CoverageType) -> BTreeMap<CoverageComponent, i64> {
    let shares: &[(CoverageComponent, f64)] = match coverage {
        CoverageType::Standard => &[
            (CoverageComponent::Liability, 0.5),
            (CoverageComponent::Collision, 0.3),
            (CoverageComponent::Comprehensive, 0.2),
        ],
        CoverageType::Full => &[
            (CoverageComponent::Liability, 0.4),
            (CoverageComponent::Collision, 0.3),
            (CoverageComponent::Comprehensive, 0.2),
            (CoverageComponent::PersonalInjury, 0.1),
        ],
        CoverageType::Liability | CoverageType::Unrecognized => {
            &[(CoverageComponent::Liability, 1.0)]
        }
    };

    shares
        .iter()
        .map(|&(component, share)| (component, (raw_premium * share).round() as i64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_in_years_counts_only_completed_years() {
        let as_of = date(2025, 1, 1);
        assert_eq!(age_in_years(date(1994, 6, 1), as_of), 30);
        assert_eq!(age_in_years(date(2000, 1, 1), as_of), 25);
        assert_eq!(age_in_years(date(2000, 1, 2), as_of), 24);
        assert_eq!(age_in_years(date(2000, 2, 29), date(2025, 2, 28)), 24);
        assert_eq!(age_in_years(date(2000, 2, 29), date(2025, 3, 1)), 25);
    }

    #[test]
    fn test_age_factor_tiers() {
        assert_eq!(age_factor(16), 2.5);
        assert_eq!(age_factor(17), 2.5);
        assert_eq!(age_factor(18), 1.8);
        assert_eq!(age_factor(24), 1.8);
        assert_eq!(age_factor(25), 1.2);
        assert_eq!(age_factor(34), 1.2);
        assert_eq!(age_factor(35), 1.0);
        assert_eq!(age_factor(54), 1.0);
        assert_eq!(age_factor(55), 1.1);
        assert_eq!(age_factor(69), 1.1);
        assert_eq!(age_factor(70), 1.3);
        assert_eq!(age_factor(95), 1.3);
    }

    #[test]
    fn test_state_factor() {
        assert_eq!(state_factor("CA"), 1.3);
        assert_eq!(state_factor("MI"), 1.3);
        assert_eq!(state_factor("WY"), 0.8);
        assert_eq!(state_factor("IA"), 0.8);
        assert_eq!(state_factor("OH"), 1.0);
    }

    #[test]
    fn test_vehicle_age_factor_tiers() {
        assert_eq!(vehicle_age_factor(0), 1.2);
        assert_eq!(vehicle_age_factor(2), 1.2);
        assert_eq!(vehicle_age_factor(3), 1.0);
        assert_eq!(vehicle_age_factor(6), 1.0);
        assert_eq!(vehicle_age_factor(7), 0.9);
        assert_eq!(vehicle_age_factor(14), 0.9);
        assert_eq!(vehicle_age_factor(15), 0.8);
        assert_eq!(vehicle_age_factor(40), 0.8);
    }

    #[test]
    fn test_make_factor_is_case_insensitive() {
        assert_eq!(make_factor("Ferrari"), 2.0);
        assert_eq!(make_factor("porsche"), 2.0);
        assert_eq!(make_factor("Mercedes-Benz"), 1.4);
        assert_eq!(make_factor("bmw"), 1.4);
        assert_eq!(make_factor("Toyota"), 0.9);
        assert_eq!(make_factor("KIA"), 0.9);
        assert_eq!(make_factor("Ford"), 1.0);
        assert_eq!(make_factor(""), 1.0);
    }

    #[test]
    fn test_vehicle_factor_multiplies_sub_factors() {
        let as_of = date(2025, 1, 1);
        let cases = [(2023, "Toyota", 1.08), (2025, "Ferrari", 2.4), (2005, "Volvo", 0.8)];
        for (year, make, expected) in cases {
            let input = QuoteInput {
                date_of_birth: date(1980, 1, 1),
                state: "OH".to_string(),
                vehicle_year: year,
                vehicle_make: make.to_string(),
                coverage_type: CoverageType::Standard,
                liability_limit: 100_000,
                deductible: 250,
            };
            let factors = rating_factors(&input, as_of);
            assert!((factors.vehicle() - expected).abs() < 1e-9, "{} {}", year, make);
        }
    }

    #[test]
    fn test_coverage_factor() {
        assert_eq!(coverage_factor(CoverageType::Liability), 0.6);
        assert_eq!(coverage_factor(CoverageType::Standard), 1.0);
        assert_eq!(coverage_factor(CoverageType::Full), 1.6);
        assert_eq!(coverage_factor(CoverageType::Unrecognized), 1.0);
    }

    #[test]
    fn test_liability_factor_ladder() {
        assert_eq!(liability_factor(25_000), 0.8);
        assert_eq!(liability_factor(25_001), 0.9);
        assert_eq!(liability_factor(50_000), 0.9);
        assert_eq!(liability_factor(100_000), 1.0);
        assert_eq!(liability_factor(250_000), 1.1);
        assert_eq!(liability_factor(500_000), 1.2);
    }

    #[test]
    fn test_deductible_factor_ladder() {
        assert_eq!(deductible_factor(250), 1.0);
        assert_eq!(deductible_factor(499), 1.0);
        assert_eq!(deductible_factor(500), 0.95);
        assert_eq!(deductible_factor(1_000), 0.9);
        assert_eq!(deductible_factor(2_000), 0.8);
        assert_eq!(deductible_factor(5_000), 0.8);
    }

    #[test]
    fn test_breakdown_uses_unrounded_premium() {
        let parts = breakdown(622.08, CoverageType::Standard);
        assert_eq!(parts[&CoverageComponent::Liability], 311);
        assert_eq!(parts[&CoverageComponent::Collision], 187);
        assert_eq!(parts[&CoverageComponent::Comprehensive], 124);
        assert!(!parts.contains_key(&CoverageComponent::PersonalInjury));
    }

    #[test]
    fn test_calculate_quote_rates_as_of_today() {
        let input = QuoteInput {
            date_of_birth: date(1940, 1, 1),
            state: "OH".to_string(),
            vehicle_year: 1990,
            vehicle_make: "Ford".to_string(),
            coverage_type: CoverageType::Standard,
            liability_limit: 100_000,
            deductible: 250,
        };
        // Both the 70+ driver tier and the 15+ vehicle tier are open-ended.
        let result = calculate_quote(&input);
        assert_eq!(result.premium, 832);
        assert_eq!(result, calculate_quote_on(&input, Utc::now().date_naive()));
    }

    #[test]
    fn test_unrecognized_coverage_breakdown_is_liability_only() {
        let parts = breakdown(1000.4, CoverageType::Unrecognized);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[&CoverageComponent::Liability], 1000);
    }
}

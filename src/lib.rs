pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{NhtsaCatalog, SystemClock};
pub use config::AppConfig;
pub use crate::core::rating::{calculate_quote, calculate_quote_on, rating_factors, RatingFactors};
pub use crate::core::vehicle_cache::VehicleCache;
pub use crate::core::{CoverageComponent, CoverageType, QuoteInput, QuoteResult, VehicleMake, VehicleModel};
pub use utils::error::{QuoteError, Result};

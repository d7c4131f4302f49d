pub mod rating;
pub mod reference;
pub mod vehicle_cache;

pub use crate::domain::model::{
    CoverageComponent, CoverageType, QuoteInput, QuoteResult, VehicleMake, VehicleModel,
};
pub use crate::domain::ports::{CatalogSettings, Clock, ModelCatalog};
pub use crate::utils::error::Result;

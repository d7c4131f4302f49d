use crate::domain::model::VehicleModel;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Remote vehicle catalog queried by make name and model year.
#[async_trait]
pub trait ModelCatalog: Send + Sync {
    async fn fetch_models(&self, make_name: &str, year: i32) -> Result<Vec<VehicleModel>>;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait CatalogSettings: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn cache_ttl(&self) -> Duration;
}

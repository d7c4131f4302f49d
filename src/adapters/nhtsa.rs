use crate::domain::model::VehicleModel;
use crate::domain::ports::ModelCatalog;
use crate::utils::error::{QuoteError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api";

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(rename = "Results")]
    results: Vec<ModelRecord>,
}

#[derive(Debug, Deserialize)]
struct ModelRecord {
    #[serde(rename = "Model_ID")]
    model_id: u32,
    #[serde(rename = "Model_Name", default)]
    model_name: Option<String>,
    #[serde(rename = "Make_Name", default)]
    make_name: Option<String>,
}

/// vPIC "models for make and model year" client.
#[derive(Debug, Clone)]
pub struct NhtsaCatalog {
    base_url: String,
    client: Client,
}

impl NhtsaCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn models_url(&self, make_name: &str, year: i32) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        let year = year.to_string();
        let make = make_name.to_lowercase();

        url.path_segments_mut()
            .map_err(|_| QuoteError::ConfigError {
                message: format!("Catalog base URL cannot carry a path: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend([
                "vehicles",
                "getmodelsformakeyear",
                "make",
                make.as_str(),
                "modelyear",
                year.as_str(),
            ]);
        url.query_pairs_mut().append_pair("format", "json");
        Ok(url)
    }
}

#[async_trait]
impl ModelCatalog for NhtsaCatalog {
    async fn fetch_models(&self, make_name: &str, year: i32) -> Result<Vec<VehicleModel>> {
        let url = self.models_url(make_name, year)?;
        tracing::debug!("Making catalog request to: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            return Err(QuoteError::CatalogStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: ModelsResponse = serde_json::from_str(&body)?;

        Ok(parsed
            .results
            .into_iter()
            .map(|record| VehicleModel {
                id: record.model_id,
                name: record.model_name.unwrap_or_default(),
                make_name: record.make_name.unwrap_or_else(|| make_name.to_string()),
            })
            .collect())
    }
}

//! Make/model lookup with a time-bounded in-memory cache.
//!
//! Makes come from embedded reference data. Models are fetched from a
//! [`ModelCatalog`] and cached per `(make id, model year)`; any fetch failure
//! falls back to the static model list for the make, which is cached the same
//! way. Expired entries are never removed, only ignored and overwritten.

use crate::core::reference;
use crate::domain::model::{VehicleMake, VehicleModel};
use crate::domain::ports::{Clock, ModelCatalog};
use crate::utils::error::{QuoteError, Result};
use chrono::{DateTime, Datelike, Utc};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use std::time::Duration;

pub const DEFAULT_MODEL_TTL: Duration = Duration::from_secs(60 * 60);

type CacheKey = (u32, i32);

#[derive(Debug, Clone)]
struct CacheEntry {
    models: Vec<VehicleModel>,
    expires_at: DateTime<Utc>,
}

pub struct VehicleCache<S: ModelCatalog, C: Clock> {
    source: S,
    clock: C,
    ttl: Duration,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl<S: ModelCatalog, C: Clock> VehicleCache<S, C> {
    pub fn new(source: S, clock: C) -> Self {
        Self::with_ttl(source, clock, DEFAULT_MODEL_TTL)
    }

    pub fn with_ttl(source: S, clock: C, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get_makes(&self) -> Vec<VehicleMake> {
        reference::makes()
    }

    /// Models for `make_id` in `year` (current year when `None`).
    ///
    /// Only an unknown `make_id` is an error; remote failures resolve to the
    /// make's fallback list.
    pub async fn get_models(&self, make_id: u32, year: Option<i32>) -> Result<Vec<VehicleModel>> {
        let year = year.unwrap_or_else(|| self.clock.now().year());
        let key = (make_id, year);

        if let Some(models) = self.lookup(&key) {
            tracing::debug!(make_id, year, "Using cached models");
            return Ok(models);
        }

        let make = reference::find_make(make_id).ok_or(QuoteError::UnknownMake { make_id })?;

        tracing::debug!(make = %make.name, make_id, year, "Fetching models from catalog");

        let models = match self.source.fetch_models(&make.name, year).await {
            Ok(fetched) => {
                let models = normalize_models(fetched, &make.name);
                tracing::info!(make = %make.name, year, count = models.len(), "Found models");
                models
            }
            Err(e) => {
                tracing::warn!(
                    make = %make.name,
                    year,
                    error = %e,
                    "Catalog lookup failed, using fallback models"
                );
                normalize_models(reference::fallback_models(&make.name), &make.name)
            }
        };

        self.store(key, models.clone());
        Ok(models)
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, key: &CacheKey) -> Option<Vec<VehicleModel>> {
        let now = self.clock.now();
        self.read_entries()
            .get(key)
            .filter(|entry| now < entry.expires_at)
            .map(|entry| entry.models.clone())
    }

    fn store(&self, key: CacheKey, models: Vec<VehicleModel>) {
        let ttl = chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::MAX);
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        tracing::debug!(
            make_id = key.0,
            year = key.1,
            count = models.len(),
            %expires_at,
            "Caching models"
        );

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(key, CacheEntry { models, expires_at });
    }

    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, HashMap<CacheKey, CacheEntry>> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Drops blank names, keeps the first model of each name, sorts by name and
/// stamps the cache's own make name on every entry.
pub fn normalize_models(models: Vec<VehicleModel>, make_name: &str) -> Vec<VehicleModel> {
    let mut seen = HashSet::new();
    let mut normalized: Vec<VehicleModel> = models
        .into_iter()
        .filter(|m| !m.name.trim().is_empty())
        .filter(|m| seen.insert(m.name.clone()))
        .map(|m| VehicleModel {
            make_name: make_name.to_string(),
            ..m
        })
        .collect();

    normalized.sort_by(|a, b| compare_names(&a.name, &b.name));
    normalized
}

/// Alphabetical, case-insensitive first.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

use std::{collections::HashMap, str::FromStr, sync::Mutex};

use sqlx::PgPool;
use thiserror::Error;

use crate::{
    dal::snapshot_db,
    domain::{grouping::CategoryGroups, resource::ResourceRecord},
};

const TOTAL_EMISSIONS_KEY: &str = "totalEmissions";
const QUIZ_COMPLETED_KEY: &str = "quizCompleted";
const RECOMMENDATIONS_KEY: &str = "recommendations";
const MATCHED_RESOURCES_KEY: &str = "matchedResources";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot store failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("snapshot could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Per-profile key/value values that outlive a single request: the last
/// score, the last AI text and the last matched resources.
pub enum SnapshotStore {
    Postgres(PgPool),
    Memory(MemorySnapshotStore),
}

#[derive(Default)]
pub struct MemorySnapshotStore {
    values: Mutex<HashMap<(String, String), String>>,
}

impl SnapshotStore {
    pub fn memory() -> Self {
        SnapshotStore::Memory(MemorySnapshotStore::default())
    }

    pub async fn get(&self, profile: &str, key: &str) -> Result<Option<String>, SnapshotError> {
        match self {
            SnapshotStore::Postgres(pool) => Ok(snapshot_db::get_value(pool, profile, key).await?),
            SnapshotStore::Memory(store) => {
                let values = store.values.lock().unwrap_or_else(|e| e.into_inner());
                Ok(values
                    .get(&(profile.to_string(), key.to_string()))
                    .cloned())
            }
        }
    }

    pub async fn set(&self, profile: &str, key: &str, value: &str) -> Result<(), SnapshotError> {
        match self {
            SnapshotStore::Postgres(pool) => {
                snapshot_db::set_value(pool, profile, key, value).await?;
            }
            SnapshotStore::Memory(store) => {
                let mut values = store.values.lock().unwrap_or_else(|e| e.into_inner());
                values.insert((profile.to_string(), key.to_string()), value.to_string());
            }
        }
        Ok(())
    }

    pub fn profile<'a>(&'a self, profile: &'a str) -> ProfileSnapshot<'a> {
        ProfileSnapshot {
            store: self,
            profile,
        }
    }
}

/// Typed view over one profile's snapshot values.
pub struct ProfileSnapshot<'a> {
    store: &'a SnapshotStore,
    profile: &'a str,
}

impl ProfileSnapshot<'_> {
    pub fn profile(&self) -> &str {
        self.profile
    }

    pub async fn total_emissions(&self) -> Result<Option<f64>, SnapshotError> {
        self.parsed(TOTAL_EMISSIONS_KEY).await
    }

    pub async fn set_total_emissions(&self, total: f64) -> Result<(), SnapshotError> {
        self.store
            .set(self.profile, TOTAL_EMISSIONS_KEY, &total.to_string())
            .await
    }

    pub async fn quiz_completed(&self) -> Result<bool, SnapshotError> {
        Ok(self.parsed(QUIZ_COMPLETED_KEY).await?.unwrap_or(false))
    }

    pub async fn set_quiz_completed(&self, completed: bool) -> Result<(), SnapshotError> {
        self.store
            .set(self.profile, QUIZ_COMPLETED_KEY, &completed.to_string())
            .await
    }

    pub async fn recommendations(&self) -> Result<Option<String>, SnapshotError> {
        self.store.get(self.profile, RECOMMENDATIONS_KEY).await
    }

    pub async fn set_recommendations(&self, text: &str) -> Result<(), SnapshotError> {
        self.store.set(self.profile, RECOMMENDATIONS_KEY, text).await
    }

    pub async fn matched_resources(
        &self,
    ) -> Result<Option<CategoryGroups<ResourceRecord>>, SnapshotError> {
        let Some(raw) = self.store.get(self.profile, MATCHED_RESOURCES_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(groups) => Ok(Some(groups)),
            Err(e) => {
                log::error!(
                    "Error parsing saved resources for profile {}: {:?}",
                    self.profile,
                    e
                );
                Ok(None)
            }
        }
    }

    pub async fn set_matched_resources(
        &self,
        matched: &CategoryGroups<ResourceRecord>,
    ) -> Result<(), SnapshotError> {
        let raw = serde_json::to_string(matched)?;
        self.store.set(self.profile, MATCHED_RESOURCES_KEY, &raw).await
    }

    async fn parsed<T: FromStr>(&self, key: &str) -> Result<Option<T>, SnapshotError> {
        let Some(raw) = self.store.get(self.profile, key).await? else {
            return Ok(None);
        };

        match raw.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                log::error!(
                    "Ignoring malformed {} for profile {}: {:?}",
                    key,
                    self.profile,
                    raw
                );
                Ok(None)
            }
        }
    }
}

//! Subscription store backends.

use super::{NewSubscription, Subscription, SubscriptionStore};
use crate::error::{DocketPostError, Result};
use crate::fs::atomic_write_file;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Serialized contents of a store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    subscriptions: Vec<Subscription>,
}

impl StoreData {
    fn find(&self, pacer_case_id: &str) -> Option<&Subscription> {
        self.subscriptions
            .iter()
            .find(|s| s.pacer_case_id == pacer_case_id)
    }

    fn insert(&mut self, new: NewSubscription) -> Result<Subscription> {
        if self.find(&new.pacer_case_id).is_some() {
            return Err(DocketPostError::StoreError(format!(
                "case '{}' is already subscribed",
                new.pacer_case_id
            )));
        }

        // Ids start at 1, even for data written before next_id existed.
        let max_id = self.subscriptions.iter().map(|s| s.id).max().unwrap_or(0);
        let id = self.next_id.max(max_id + 1);
        self.next_id = id + 1;

        let subscription = new.into_subscription(id, Utc::now());
        self.subscriptions.push(subscription.clone());
        Ok(subscription)
    }
}

/// Store kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: StoreData,
}

impl SubscriptionStore for MemoryStore {
    fn get_by_case_id(&self, pacer_case_id: &str) -> Result<Option<Subscription>> {
        Ok(self.data.find(pacer_case_id).cloned())
    }

    fn insert(&mut self, subscription: NewSubscription) -> Result<Subscription> {
        self.data.insert(subscription)
    }

    fn list(&self) -> Result<Vec<Subscription>> {
        Ok(self.data.subscriptions.clone())
    }
}

/// Store persisted as a JSON document.
///
/// Every write replaces the file atomically. A missing file is an empty
/// store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoreData> {
        if !self.path.exists() {
            return Ok(StoreData::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            DocketPostError::StoreError(format!(
                "failed to read subscriptions file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            DocketPostError::StoreError(format!(
                "failed to parse subscriptions file '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, data: &StoreData) -> Result<()> {
        let content = serde_json::to_string_pretty(data).map_err(|e| {
            DocketPostError::StoreError(format!("failed to serialize subscriptions: {}", e))
        })?;

        atomic_write_file(&self.path, &content).map_err(|e| match e {
            DocketPostError::UserError(msg) => DocketPostError::StoreError(msg),
            other => other,
        })
    }
}

impl SubscriptionStore for FileStore {
    fn get_by_case_id(&self, pacer_case_id: &str) -> Result<Option<Subscription>> {
        Ok(self.load()?.find(pacer_case_id).cloned())
    }

    fn insert(&mut self, subscription: NewSubscription) -> Result<Subscription> {
        let mut data = self.load()?;
        let created = data.insert(subscription)?;
        self.save(&data)?;
        Ok(created)
    }

    fn list(&self) -> Result<Vec<Subscription>> {
        Ok(self.load()?.subscriptions)
    }
}

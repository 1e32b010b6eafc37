//! Frecency ranking of gallery items
//!
//! Every time a GIF is copied or opened a visit is recorded. The score of an
//! item halves every [`HALF_LIFE_DAYS`] days, so frequently and recently used
//! items surface first. History is bincode-encoded into one key-value slot.

use crate::db::{DbError, KeyValueStore};
use crate::gallery::GifItem;
use bincode::{Decode, Encode};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// Slot holding the encoded usage history
pub const USAGE_KEY: &str = "gif-frecency";

/// Days after which a visit counts half
pub const HALF_LIFE_DAYS: f64 = 10.0;

const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Orders gallery items by how they have been used
pub trait UsageRanker {
    /// Return the same items, most relevant first
    fn rank(&self, items: Vec<GifItem>) -> Vec<GifItem>;
}

/// Leaves items in enumeration order
#[derive(Debug, Clone, Copy, Default)]
pub struct Unranked;

impl UsageRanker for Unranked {
    fn rank(&self, items: Vec<GifItem>) -> Vec<GifItem> {
        items
    }
}

/// Usage history of one file
#[derive(Encode, Decode, Clone, Debug, PartialEq)]
pub struct UsageRecord {
    /// Decayed score as of `last_visited_ms`
    pub score: f64,
    pub last_visited_ms: i64,
    pub visits: u64,
}

impl UsageRecord {
    /// Score decayed to `now`
    #[must_use]
    pub fn score_at(&self, now: DateTime<Utc>) -> f64 {
        self.score * decay(now.timestamp_millis() - self.last_visited_ms)
    }
}

fn decay(elapsed_ms: i64) -> f64 {
    // Clock skew can make elapsed negative; never boost a score.
    let days = elapsed_ms.max(0) as f64 / MS_PER_DAY;
    0.5_f64.powf(days / HALF_LIFE_DAYS)
}

/// Frecency history backed by a key-value slot
pub struct FrecencyTracker<'a> {
    storage: &'a dyn KeyValueStore,
    now: Option<DateTime<Utc>>,
}

impl<'a> FrecencyTracker<'a> {
    #[must_use]
    pub fn new(storage: &'a dyn KeyValueStore) -> Self {
        Self { storage, now: None }
    }

    /// Pin the clock used for ranking and visits
    #[must_use]
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }

    /// Read the history; an unreadable slot counts as no history
    #[must_use]
    pub fn records(&self) -> HashMap<String, UsageRecord> {
        match self.read() {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "usage history unreadable, ranking without it");
                HashMap::new()
            }
        }
    }

    fn read(&self) -> Result<HashMap<String, UsageRecord>, DbError> {
        match self.storage.get(USAGE_KEY)? {
            Some(raw) => {
                let (records, _): (HashMap<String, UsageRecord>, usize) =
                    bincode::decode_from_slice(&raw, bincode::config::standard())?;
                Ok(records)
            }
            None => Ok(HashMap::new()),
        }
    }

    fn write(&self, records: &HashMap<String, UsageRecord>) -> Result<(), DbError> {
        let encoded = bincode::encode_to_vec(records, bincode::config::standard())?;
        self.storage.set(USAGE_KEY, &encoded)
    }

    /// Record a use of `id`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the history cannot be written.
    pub fn visit(&self, id: &str) -> Result<(), DbError> {
        let now = self.now();
        let mut records = self.records();
        let record = records.entry(id.to_string()).or_insert(UsageRecord {
            score: 0.0,
            last_visited_ms: now.timestamp_millis(),
            visits: 0,
        });
        record.score = record.score_at(now) + 1.0;
        record.last_visited_ms = now.timestamp_millis();
        record.visits += 1;
        tracing::debug!(id, visits = record.visits, "recorded visit");
        self.write(&records)
    }

    /// Forget the history of `id`
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the history cannot be written.
    pub fn forget(&self, id: &str) -> Result<bool, DbError> {
        let mut records = self.records();
        if records.remove(id).is_none() {
            return Ok(false);
        }
        self.write(&records)?;
        Ok(true)
    }

    /// Drop history for files that are no longer present
    ///
    /// Returns the number of records removed; writes only when non-zero.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the history cannot be written.
    pub fn retain(&self, existing: &HashSet<String>) -> Result<usize, DbError> {
        let mut records = self.records();
        let before = records.len();
        records.retain(|id, _| existing.contains(id));
        let removed = before - records.len();
        if removed > 0 {
            self.write(&records)?;
        }
        Ok(removed)
    }
}

impl UsageRanker for FrecencyTracker<'_> {
    fn rank(&self, mut items: Vec<GifItem>) -> Vec<GifItem> {
        let now = self.now();
        let records = self.records();
        let score = |item: &GifItem| records.get(&item.id).map_or(0.0, |r| r.score_at(now));
        // Stable: equal scores keep enumeration order.
        items.sort_by(|a, b| score(b).total_cmp(&score(a)));
        items
    }
}

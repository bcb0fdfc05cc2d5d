//! Bounded least-recently-used cache of chart views.
//!
//! Each entry carries the tick of its last use; a tick-ordered index makes
//! touching and evicting logarithmic in the capacity.
//!
//! Values are `Arc`-shared and never mutated after insertion. The lock is
//! held only for map bookkeeping; chart computation runs outside it, so two
//! threads missing on the same key may both compute. Their results are equal.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;
use ziwei_engine::{ChartView, Selection};
use ziwei_time::{BirthRecord, Gender};

use crate::error::ZiweiError;

/// Everything that distinguishes one cached view from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChartKey {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub gender: Gender,
    pub is_lunar: bool,
    pub is_leap_month: bool,
    pub period: Option<u8>,
    pub selected_year: Option<i32>,
}

impl ChartKey {
    pub fn new(record: &BirthRecord, selection: Selection) -> Self {
        Self {
            year: record.year,
            month: record.month,
            day: record.day,
            hour: record.hour,
            gender: record.gender,
            is_lunar: record.is_lunar,
            is_leap_month: record.is_leap_month,
            period: selection.period,
            selected_year: selection.year,
        }
    }

    /// Key of the natal view for the same birth record.
    pub fn natal(&self) -> Self {
        Self {
            period: None,
            selected_year: None,
            ..*self
        }
    }

    /// Stable SHA-256 of the key as lowercase hex.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(b"ziwei-chart:v1");
        hasher.update(self.year.to_be_bytes());
        hasher.update([self.month, self.day, self.hour]);
        hasher.update([gender_tag(self.gender)]);
        hasher.update([u8::from(self.is_lunar), u8::from(self.is_leap_month)]);
        match self.period {
            Some(p) => hasher.update([1, p]),
            None => hasher.update([0]),
        }
        match self.selected_year {
            Some(y) => {
                hasher.update([1]);
                hasher.update(y.to_be_bytes());
            }
            None => hasher.update([0]),
        }
        hex::encode(hasher.finalize())
    }
}

const fn gender_tag(gender: Gender) -> u8 {
    match gender {
        Gender::Male => 0x01,
        Gender::Female => 0x02,
    }
}

/// Counters since construction or the last [`ResultCache::clear`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub len: usize,
    pub capacity: usize,
}

#[derive(Debug)]
struct Slot {
    value: Arc<ChartView>,
    tick: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<ChartKey, Slot>,
    // Lowest tick is least recently used.
    recency: BTreeMap<u64, ChartKey>,
    next_tick: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl CacheState {
    fn bump(&mut self) -> u64 {
        let tick = self.next_tick;
        self.next_tick += 1;
        tick
    }

    /// Mark `key` most recently used and return its value.
    fn touch(&mut self, key: &ChartKey) -> Option<Arc<ChartView>> {
        let tick = self.bump();
        let slot = self.entries.get_mut(key)?;
        self.recency.remove(&slot.tick);
        slot.tick = tick;
        self.recency.insert(tick, *key);
        Some(Arc::clone(&slot.value))
    }

    fn push(&mut self, key: ChartKey, value: Arc<ChartView>) {
        let tick = self.bump();
        self.entries.insert(key, Slot { value, tick });
        self.recency.insert(tick, key);
    }

    fn evict_oldest(&mut self) -> Option<ChartKey> {
        let (_, key) = self.recency.pop_first()?;
        self.entries.remove(&key);
        Some(key)
    }
}

#[derive(Debug)]
pub struct ResultCache {
    capacity: usize,
    state: Mutex<CacheState>,
}

impl ResultCache {
    pub fn new(capacity: usize) -> Result<Self, ZiweiError> {
        if capacity == 0 {
            return Err(ZiweiError::InvalidConfig(
                "cache_capacity must be greater than zero",
            ));
        }
        Ok(Self {
            capacity,
            state: Mutex::new(CacheState::default()),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up `key`, marking it most recently used. Counts a hit or a miss.
    pub fn get(&self, key: &ChartKey) -> Option<Arc<ChartView>> {
        let mut state = self.state.lock();
        match state.touch(key) {
            Some(found) => {
                state.hits += 1;
                Some(found)
            }
            None => {
                state.misses += 1;
                None
            }
        }
    }

    /// Store `value`, evicting the least recently used entries over capacity.
    /// An existing entry for `key` is kept and returned instead.
    pub fn insert(&self, key: ChartKey, value: Arc<ChartView>) -> Arc<ChartView> {
        let mut state = self.state.lock();
        if let Some(existing) = state.touch(&key) {
            return existing;
        }
        state.push(key, Arc::clone(&value));
        while state.entries.len() > self.capacity {
            let Some(oldest) = state.evict_oldest() else {
                break;
            };
            state.evictions += 1;
            debug!(fingerprint = %oldest.fingerprint(), "evicted chart view");
        }
        value
    }

    /// Cached value for `key`, or the result of `compute` stored under it.
    /// Errors are returned to the caller and never cached.
    pub fn get_or_compute<E>(
        &self,
        key: ChartKey,
        compute: impl FnOnce() -> Result<ChartView, E>,
    ) -> Result<Arc<ChartView>, E> {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }
        let value = Arc::new(compute()?);
        Ok(self.insert(key, value))
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            evictions: state.evictions,
            len: state.entries.len(),
            capacity: self.capacity,
        }
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&self) {
        *self.state.lock() = CacheState::default();
    }
}

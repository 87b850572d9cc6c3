//! The wheel session facade.
//!
//! ```text
//! Input surface (add/remove/filter/import/spin/...)
//!   ↓
//! WheelSession (serializes mutations through one async mutex)
//!   ↓
//! sw-core domain (pure state transitions)
//!   ↓
//! watch channel (immutable WheelSnapshot per mutation)
//! ```
//!
//! The spin resolution timer and the chunked import drain are the only
//! suspension points; both are schedule-then-return and both observe
//! the session cancellation token so a reset tears them down cleanly.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{watch, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use sw_core::ports::{ClockPort, RandomnessPort};
use sw_core::{
    entries::DEFAULT_ENTRIES, ConfigError, EntryStore, FilterPredicate, HistoryLedger,
    PersistedWheel, SpinSample, SpinWheel, Viewport, WheelConfig, WheelSnapshot,
};

use crate::listing::{build_window, EntryWindow};

struct SessionState {
    store: EntryStore,
    wheel: SpinWheel,
    history: HistoryLedger,
    filter: FilterPredicate,
    viewport: Viewport,
    /// Cancelled (and replaced) on reset; in-flight timers and import
    /// drains hold a clone and stand down once it fires.
    cancel: CancellationToken,
}

impl SessionState {
    fn snapshot(&self) -> WheelSnapshot {
        WheelSnapshot {
            entries: self.store.entries().to_vec(),
            rotation: self.wheel.rotation(),
            spinning: self.wheel.is_spinning(),
            current_winner: self.wheel.current_winner().cloned(),
            history: self.history.records().cloned().collect(),
            filter: self.filter.text().to_string(),
        }
    }
}

/// Owns one wheel: the entry store, the spin machine, the history
/// ledger and the active filter/viewport. All operations are async
/// because they serialize through the session mutex, but none of them
/// block beyond that.
pub struct WheelSession {
    state: Arc<Mutex<SessionState>>,
    snapshot_tx: Arc<watch::Sender<WheelSnapshot>>,
    clock: Arc<dyn ClockPort>,
    randomness: Arc<dyn RandomnessPort>,
    config: WheelConfig,
}

impl WheelSession {
    /// Session seeded with the default demo wheel.
    pub fn new(
        config: WheelConfig,
        clock: Arc<dyn ClockPort>,
        randomness: Arc<dyn RandomnessPort>,
    ) -> Result<Self, ConfigError> {
        Self::with_entries(&DEFAULT_ENTRIES, config, clock, randomness)
    }

    pub fn with_entries(
        names: &[&str],
        config: WheelConfig,
        clock: Arc<dyn ClockPort>,
        randomness: Arc<dyn RandomnessPort>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut store = EntryStore::new();
        for name in names {
            store.add(name);
        }
        let state = SessionState {
            store,
            wheel: SpinWheel::new(),
            history: HistoryLedger::with_capacity(config.history_capacity),
            filter: FilterPredicate::default(),
            viewport: Viewport::default(),
            cancel: CancellationToken::new(),
        };
        let (snapshot_tx, _) = watch::channel(state.snapshot());
        Ok(Self {
            state: Arc::new(Mutex::new(state)),
            snapshot_tx: Arc::new(snapshot_tx),
            clock,
            randomness,
            config,
        })
    }

    /// Receiver for snapshot updates; the current snapshot is available
    /// immediately.
    pub fn subscribe(&self) -> watch::Receiver<WheelSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn snapshot(&self) -> WheelSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Serialized `{entries, history}` document for the persistence
    /// collaborator (save/share).
    pub fn persisted_document(&self) -> anyhow::Result<String> {
        let snapshot = self.snapshot();
        Ok(serde_json::to_string(&PersistedWheel::from(&snapshot))?)
    }

    fn publish(&self, state: &SessionState) {
        self.snapshot_tx.send_replace(state.snapshot());
    }

    /// Add one entry; blank or duplicate input is silently ignored.
    pub async fn add_entry(&self, raw: &str) -> bool {
        let mut state = self.state.lock().await;
        let added = state.store.add(raw);
        if added {
            debug!(entry = raw.trim(), total = state.store.len(), "entry added");
            self.publish(&state);
        }
        added
    }

    /// Remove the entry with exactly this label; absent labels are a
    /// no-op.
    pub async fn remove_entry(&self, name: &str) -> bool {
        let mut state = self.state.lock().await;
        let removed = state.store.remove(name);
        if removed {
            debug!(entry = name, total = state.store.len(), "entry removed");
            self.publish(&state);
        }
        removed
    }

    pub async fn set_filter(&self, text: &str) {
        let mut state = self.state.lock().await;
        state.filter = FilterPredicate::new(text);
        self.publish(&state);
    }

    pub async fn scroll_to(&self, offset: f64) {
        let mut state = self.state.lock().await;
        state.viewport.scroll_offset = offset.max(0.0);
    }

    pub async fn set_viewport(&self, height: f64, row_height: f64) {
        let mut state = self.state.lock().await;
        state.viewport.height = height;
        state.viewport.row_height = row_height;
    }

    /// Rows the list view should materialize right now.
    pub async fn visible_entries(&self) -> EntryWindow {
        let state = self.state.lock().await;
        build_window(&state.store, &state.filter, &state.viewport)
    }

    /// Explicitly break insertion order.
    pub async fn shuffle(&self) {
        let mut state = self.state.lock().await;
        state.store.shuffle(self.randomness.as_ref());
        self.publish(&state);
    }

    /// Explicitly break insertion order, lexicographically.
    pub async fn sort(&self) {
        let mut state = self.state.lock().await;
        state.store.sort();
        self.publish(&state);
    }

    /// Start a spin. Returns whether one actually started; an empty
    /// wheel or an in-flight spin turns the request into a no-op (it is
    /// never queued). Resolution fires after the configured duration.
    pub async fn spin(&self) -> bool {
        let mut state = self.state.lock().await;
        let entry_count = state.store.len();
        if state.wheel.is_spinning() || entry_count == 0 {
            debug!(entry_count, "spin request ignored");
            return false;
        }
        // Draw only once the request is known to be accepted, so a
        // rejected spin never consumes randomness.
        let sample = SpinSample::draw(&self.config.spin, self.randomness.as_ref());
        match state.wheel.begin_spin(entry_count, sample, self.clock.now_ms()) {
            Ok(target_rotation) => {
                info!(target_rotation, entry_count, "spin started");
                self.publish(&state);
                self.schedule_resolution(state.cancel.clone());
                true
            }
            Err(rejection) => {
                debug!(%rejection, "spin request ignored");
                false
            }
        }
    }

    /// Resolution is a scheduled callback, not a blocking wait: the
    /// session stays fully usable during the spin window and the store
    /// is re-read at resolution time (entries may have changed).
    fn schedule_resolution(&self, cancel: CancellationToken) {
        let state = Arc::clone(&self.state);
        let snapshot_tx = Arc::clone(&self.snapshot_tx);
        let clock = Arc::clone(&self.clock);
        let duration = Duration::from_millis(self.config.spin.duration_ms);
        // Fix the deadline now, not at the task's first poll, so the
        // resolution delay is measured from spin start.
        let deadline = tokio::time::Instant::now() + duration;
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = tokio::time::sleep_until(deadline) => {
                    let mut guard = state.lock().await;
                    if cancel.is_cancelled() {
                        return;
                    }
                    let state = &mut *guard;
                    if let Some(winner) = state.wheel.resolve(&state.store) {
                        let timestamp = timestamp_from(clock.now_ms());
                        info!(winner = %winner, "winner recorded");
                        state.history.record(winner, timestamp);
                    }
                    snapshot_tx.send_replace(state.snapshot());
                }
            }
        });
    }

    /// Drop the currently shown result.
    pub async fn dismiss_result(&self) -> bool {
        let mut state = self.state.lock().await;
        if state.wheel.current_winner().is_none() {
            return false;
        }
        state.wheel.dismiss();
        self.publish(&state);
        true
    }

    /// Bulk-import pasted text.
    ///
    /// The batch is tokenized against the pre-import store. Small
    /// batches apply atomically; large ones apply in fixed chunks with
    /// a cooperative yield between chunks, so a huge paste never blocks
    /// the host loop. Chunking never reorders: the final store equals
    /// what one atomic apply would have produced. Returns the number of
    /// entries added.
    pub async fn import_bulk(&self, raw: &str) -> usize {
        let (batch, cancel) = {
            let state = self.state.lock().await;
            (state.store.tokenize_import(raw), state.cancel.clone())
        };
        if batch.is_empty() {
            debug!("bulk import carried no new names");
            return 0;
        }
        let total = batch.len();
        if total <= self.config.import.atomic_limit {
            let mut state = self.state.lock().await;
            let added = state.store.extend(batch);
            self.publish(&state);
            info!(added, total, "bulk import applied atomically");
            return added;
        }

        let mut added = 0;
        let mut pending = batch.into_iter();
        loop {
            let chunk: Vec<_> = pending.by_ref().take(self.config.import.chunk_size).collect();
            if chunk.is_empty() {
                break;
            }
            {
                let mut state = self.state.lock().await;
                if cancel.is_cancelled() {
                    debug!(added, total, "bulk import cancelled mid-drain");
                    return added;
                }
                added += state.store.extend(chunk);
                self.publish(&state);
            }
            tokio::task::yield_now().await;
        }
        info!(added, total, "bulk import drained in chunks");
        added
    }

    /// Reset the session: cancel in-flight work, restore the seed
    /// wheel, clear history and filter. The accumulated rotation is
    /// presentation continuity and survives.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.cancel.cancel();
        state.cancel = CancellationToken::new();
        state.store.reset_to(&DEFAULT_ENTRIES);
        state.wheel.abort();
        state.history.clear();
        state.filter = FilterPredicate::default();
        info!("session reset");
        self.publish(&state);
    }
}

fn timestamp_from(now_ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(now_ms).unwrap_or_default()
}

use crate::store::KeyValueStore;

/// Maximum number of recently viewed names to keep (most-recent-first).
pub const RECENT_CAPACITY: usize = 3;

/// Session storage slot holding the serialized queue.
pub const RECENT_KEY: &str = "showroom.recent";

/// Result of recording a detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordOutcome {
    /// Queue after the call, most-recent-first.
    pub queue: Vec<String>,
    /// Name pushed out of the tail, if any.
    pub evicted: Option<String>,
    /// `false` when the name was already at the front and nothing changed.
    pub changed: bool,
}

/// What: Bounded most-recent-first history of viewed vehicle names.
///
/// Details:
/// - Only a repeat of the current head is suppressed; an older entry that is viewed
///   again is pushed to the front a second time.
/// - Every mutation overwrites the `RECENT_KEY` slot with the full JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecencyQueue {
    /// Names, most recent first.
    names: Vec<String>,
}

impl RecencyQueue {
    /// What: Restore the queue from session storage.
    ///
    /// Inputs:
    /// - `kv`: Session store
    ///
    /// Output:
    /// - Queue seeded from `RECENT_KEY`, truncated to capacity; empty when the slot is
    ///   missing or unreadable.
    pub fn restore(kv: &dyn KeyValueStore) -> Self {
        let names = kv
            .get(RECENT_KEY)
            .and_then(|raw| match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!(error = %e, "[Recent] Ignoring unreadable recent list");
                    None
                }
            })
            .map(|mut v| {
                v.truncate(RECENT_CAPACITY);
                v
            })
            .unwrap_or_default();
        Self { names }
    }

    /// What: Record a detail view of `name`.
    ///
    /// Inputs:
    /// - `name`: Vehicle name that was opened
    /// - `kv`: Session store to overwrite on change
    ///
    /// Output:
    /// - `RecordOutcome` with the new queue and the evicted tail, if any.
    pub fn record(&mut self, name: &str, kv: &mut dyn KeyValueStore) -> RecordOutcome {
        if self.names.first().map(String::as_str) == Some(name) {
            return RecordOutcome {
                queue: self.names.clone(),
                evicted: None,
                changed: false,
            };
        }
        self.names.insert(0, name.to_string());
        let evicted = if self.names.len() > RECENT_CAPACITY {
            self.names.pop()
        } else {
            None
        };
        match &evicted {
            Some(old) => tracing::info!(evicted = %old, "[Recent] Queue full, dropped oldest"),
            None => tracing::debug!(name, size = self.names.len(), "[Recent] Added to queue"),
        }
        self.persist(kv);
        RecordOutcome {
            queue: self.names.clone(),
            evicted,
            changed: true,
        }
    }

    /// Names for display, most recent first; empty hides the section.
    #[must_use]
    pub fn current(&self) -> &[String] {
        &self.names
    }

    /// Write the full queue to its slot.
    fn persist(&self, kv: &mut dyn KeyValueStore) {
        if let Ok(s) = serde_json::to_string(&self.names) {
            kv.set(RECENT_KEY, s);
        }
    }
}

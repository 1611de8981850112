//! A boolean view-model value bound to a preference-store key.
//!
//! The held value is read once on creation and afterwards updates only
//! through the store's change notifications: `set` writes the store and the
//! new value lands in the flag when the resulting notification is observed
//! via `sync` or `changed`. An unchanged re-read is a no-op so downstream
//! observers are not poked redundantly.

use tokio::sync::broadcast::{self, error::TryRecvError};

use super::store::PreferenceStore;

type Reader = Box<dyn Fn(&PreferenceStore, &str) -> bool + Send + Sync>;

pub struct StoredFlag {
    store: PreferenceStore,
    key: String,
    default: bool,
    reader: Option<Reader>,
    value: bool,
    changes: broadcast::Receiver<String>,
}

impl StoredFlag {
    pub fn new(store: PreferenceStore, key: impl Into<String>, default: bool) -> Self {
        Self::build(store, key.into(), default, None)
    }

    /// Like `new`, but reads through a caller-supplied getter instead of the
    /// default literal-"true" comparison.
    pub fn with_reader(
        store: PreferenceStore,
        key: impl Into<String>,
        default: bool,
        reader: impl Fn(&PreferenceStore, &str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::build(store, key.into(), default, Some(Box::new(reader)))
    }

    fn build(store: PreferenceStore, key: String, default: bool, reader: Option<Reader>) -> Self {
        let changes = store.subscribe();
        let value = match &reader {
            Some(read) => read(&store, &key),
            None => store.read_bool(&key, default),
        };
        Self {
            store,
            key,
            default,
            reader,
            value,
            changes,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write the flag into the store. The held value is deliberately left
    /// alone; it follows through the notification path.
    pub fn set(&self, value: bool) {
        self.store.set_bool(&self.key, value);
    }

    /// Drain pending store notifications and re-read if any touched this
    /// key. Returns whether the held value changed.
    pub fn sync(&mut self) -> bool {
        let mut touched = false;
        loop {
            match self.changes.try_recv() {
                Ok(key) => touched |= key == self.key,
                // Missed notifications: the store is re-read either way.
                Err(TryRecvError::Lagged(_)) => touched = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        if touched { self.apply() } else { false }
    }

    /// Wait for the next notification of this key and apply it. Returns
    /// whether the held value changed.
    pub async fn changed(&mut self) -> bool {
        loop {
            match self.changes.recv().await {
                Ok(key) if key == self.key => return self.apply(),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(_)) => return self.apply(),
                Err(broadcast::error::RecvError::Closed) => return false,
            }
        }
    }

    fn read(&self) -> bool {
        match &self.reader {
            Some(read) => read(&self.store, &self.key),
            None => self.store.read_bool(&self.key, self.default),
        }
    }

    fn apply(&mut self) -> bool {
        let fresh = self.read();
        if fresh != self.value {
            self.value = fresh;
            true
        } else {
            false
        }
    }
}

//! Shared preference store: string flags persisted as a JSON object, with a
//! change broadcast so every observer sees every write, whichever handle
//! performed it. Handles are cheap clones of the same shared state.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use tracing::warn;

const CHANGE_BUFFER: usize = 64;

#[derive(Clone)]
pub struct PreferenceStore {
    inner: Arc<Inner>,
}

struct Inner {
    path: Option<PathBuf>,
    values: Mutex<HashMap<String, String>>,
    changes: broadcast::Sender<String>,
}

impl PreferenceStore {
    /// Store with no backing file; useful for tests and one-shot commands.
    pub fn in_memory() -> Self {
        Self::with_values(None, HashMap::new())
    }

    /// Open the store backed by `path`. A missing or unreadable file
    /// degrades to an empty store; every flag then reads as its default.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "unreadable preference file, starting empty");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self::with_values(Some(path), values)
    }

    fn with_values(path: Option<PathBuf>, values: HashMap<String, String>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_BUFFER);
        Self {
            inner: Arc::new(Inner {
                path,
                values: Mutex::new(values),
                changes,
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.values.lock().ok()?.get(key).cloned()
    }

    /// Missing key reads as `default`; a stored value is compared against
    /// the literal text `"true"`.
    pub fn read_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(value) => value == "true",
            None => default,
        }
    }

    /// Write a value, persist, then notify every subscriber. Last write
    /// wins; persistence failures are logged and do not block the update.
    pub fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.inner.values.lock() {
            values.insert(key.to_string(), value.to_string());
            self.persist(&values);
        }
        // Subscribers re-read on delivery; a send with no receivers is fine.
        let _ = self.inner.changes.send(key.to_string());
    }

    /// Booleans are serialized as the literal text `"true"`/`"false"`.
    pub fn set_bool(&self, key: &str, value: bool) {
        self.set(key, if value { "true" } else { "false" });
    }

    /// Receive the key of every subsequent write, from any handle.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.inner.changes.subscribe()
    }

    fn persist(&self, values: &HashMap<String, String>) {
        let Some(path) = &self.inner.path else {
            return;
        };
        if let Some(dir) = path.parent() {
            if let Err(e) = fs::create_dir_all(dir) {
                warn!(path = %path.display(), error = %e, "cannot create preference directory");
                return;
            }
        }
        match serde_json::to_string_pretty(values) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    warn!(path = %path.display(), error = %e, "cannot persist preferences");
                }
            }
            Err(e) => warn!(error = %e, "cannot serialize preferences"),
        }
    }
}

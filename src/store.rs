//! Typed persistent view-flag store
//!
//! A small JSON document under the user config directory holding UI view
//! flags (chat open, chat visited). Load errors fall back to defaults and
//! write errors are held until the terminal is restored, never panicking
//! mid-draw.

use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

pub const CHAT_OPEN_KEY: &str = "portal-business-ai-open";
pub const CHAT_VISITED_KEY: &str = "portal-business-ai-visited";

pub struct Store {
    path: Option<PathBuf>,
    values: Map<String, Value>,
    write_error: Option<String>,
}

impl Store {
    /// Open the store at the given path, loading existing values. A
    /// missing or corrupt file yields an empty store.
    pub fn open(path: PathBuf) -> Self {
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<Map<String, Value>>(&content).unwrap_or_default(),
            Err(_) => Map::new(),
        };
        Self {
            path: Some(path),
            values,
            write_error: None,
        }
    }

    /// In-memory store used when no config directory is available
    pub fn ephemeral() -> Self {
        Self {
            path: None,
            values: Map::new(),
            write_error: None,
        }
    }

    /// Default location: `<config-dir>/portal-tui/state.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("portal-tui").join("state.json"))
    }

    /// Read a typed value, falling back to the default when the key is
    /// missing or fails to deserialize.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.values
            .get(key)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or(default)
    }

    /// Write a typed value and save immediately. Save failures are
    /// remembered rather than surfaced mid-draw.
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) {
        match serde_json::to_value(value) {
            Ok(json) => {
                self.values.insert(key.to_string(), json);
                if let Err(error) = self.save() {
                    self.write_error = Some(error.to_string());
                }
            }
            Err(error) => self.write_error = Some(error.to_string()),
        }
    }

    fn save(&self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Take the pending write error, if any, for reporting after the
    /// terminal is restored.
    pub fn take_write_error(&mut self) -> Option<String> {
        self.write_error.take()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_roundtrip_typed_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = Store::open(path.clone());
        store.set(CHAT_OPEN_KEY, true);
        store.set("count", 3u32);
        assert!(store.take_write_error().is_none());

        let reloaded = Store::open(path);
        assert!(reloaded.get(CHAT_OPEN_KEY, false));
        assert_eq!(reloaded.get("count", 0u32), 3);
    }

    #[test]
    fn test_missing_key_returns_default() {
        let dir = tempdir().unwrap();
        let store = Store::open(dir.path().join("state.json"));
        assert!(!store.get(CHAT_VISITED_KEY, false));
        assert_eq!(store.get("nothing", 7i64), 7);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = Store::open(path);
        assert!(!store.get(CHAT_OPEN_KEY, false));
    }

    #[test]
    fn test_type_mismatch_returns_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"portal-business-ai-open": "yes"}"#).unwrap();

        let store = Store::open(path);
        assert!(!store.get(CHAT_OPEN_KEY, false));
    }

    #[test]
    fn test_ephemeral_store_does_not_touch_disk() {
        let mut store = Store::ephemeral();
        store.set(CHAT_OPEN_KEY, true);
        assert!(store.get(CHAT_OPEN_KEY, false));
        assert!(store.take_write_error().is_none());
        assert!(store.path().is_none());
    }

    #[test]
    fn test_write_error_is_deferred() {
        // Parent of the store path is a file, so create_dir_all fails
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let mut store = Store::open(blocker.join("state.json"));
        store.set(CHAT_OPEN_KEY, true);
        assert!(store.take_write_error().is_some());
        // The in-memory value still reflects the write
        assert!(store.get(CHAT_OPEN_KEY, false));
    }
}

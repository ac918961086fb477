//! JSON-file task store.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use taskfall_engine::{ShapeId, TaskStore};

/// Write-through task store backed by a flat JSON object.
///
/// The file maps shape identifiers to task text, `{"<id>": "<text>"}`, with
/// no further schema. The whole map is loaded at open; every `put`/`remove`
/// rewrites the file so the text survives the process.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    tasks: HashMap<ShapeId, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading any existing entries.
    /// A missing file starts an empty store; it is created on first write.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let tasks = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read task store {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("task store {} is not valid JSON", path.display()))?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            tasks,
        })
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.tasks) {
            Ok(json) => json,
            Err(err) => {
                eprintln!("taskfall: failed to encode task store: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            eprintln!(
                "taskfall: failed to write task store {}: {err}",
                self.path.display()
            );
        }
    }
}

impl TaskStore for JsonFileStore {
    fn put(&mut self, id: ShapeId, text: &str) {
        self.tasks.insert(id, text.to_owned());
        self.flush();
    }

    fn get(&self, id: ShapeId, default: &str) -> String {
        self.tasks
            .get(&id)
            .cloned()
            .unwrap_or_else(|| default.to_owned())
    }

    fn remove(&mut self, id: ShapeId) {
        if self.tasks.remove(&id).is_some() {
            self.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("taskfall-{name}-{}.json", std::process::id()))
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get(ShapeId::new(1), "fallback"), "fallback");
        assert!(!path.exists());
    }

    #[test]
    fn test_put_survives_reopen() {
        let path = temp_path("put-reopen");
        let _ = fs::remove_file(&path);

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put(ShapeId::new(7), "water the plants");
        assert_eq!(store.get(ShapeId::new(7), ""), "water the plants");

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(ShapeId::new(7), ""), "water the plants");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_remove_deletes_entry_from_disk() {
        let path = temp_path("remove");
        let _ = fs::remove_file(&path);

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put(ShapeId::new(1), "keep");
        store.put(ShapeId::new(2), "drop");
        store.remove(ShapeId::new(2));

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(ShapeId::new(1), ""), "keep");
        assert_eq!(reopened.get(ShapeId::new(2), "gone"), "gone");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_fails_to_open() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json at all").unwrap();

        assert!(JsonFileStore::open(&path).is_err());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_file_layout_is_flat_id_to_text() {
        let path = temp_path("layout");
        let _ = fs::remove_file(&path);

        let mut store = JsonFileStore::open(&path).unwrap();
        store.put(ShapeId::new(12), "review the patch");

        let contents = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["12"], "review the patch");

        let _ = fs::remove_file(&path);
    }
}

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::dto::file_dto::FileDto;
use crate::models::file::StoredFile;

/// Keyed store for raw uploaded bytes, lifecycle-independent of the entities
/// referencing them. Keys are generated here and are opaque to callers.
pub struct FileStore {
    inner: Mutex<HashMap<Uuid, StoredFile>>,
}

impl FileStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, StoredFile>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn save(&self, file: FileDto) -> StoredFile {
        let stored = StoredFile {
            id: Uuid::new_v4(),
            name: file.name,
            content: file.content,
        };
        self.lock().insert(stored.id, stored.clone());
        stored
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<StoredFile> {
        self.lock().get(&id).cloned()
    }

    pub fn delete_by_id(&self, id: Uuid) -> bool {
        self.lock().remove(&id).is_some()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn save_then_find_returns_the_same_content() {
        let store = FileStore::new();
        let stored = store.save(FileDto::new("logo.png", Bytes::from_static(b"png-bytes")));

        let found = store.find_by_id(stored.id).expect("stored file");
        assert_eq!(found.name, "logo.png");
        assert_eq!(found.content, Bytes::from_static(b"png-bytes"));
    }

    #[test]
    fn delete_removes_the_entry() {
        let store = FileStore::new();
        let stored = store.save(FileDto::new("cv.pdf", Bytes::from_static(b"%PDF")));

        assert!(store.delete_by_id(stored.id));
        assert!(store.find_by_id(stored.id).is_none());
        assert!(!store.delete_by_id(stored.id));
    }

    #[test]
    fn delete_unknown_reference_returns_false() {
        let store = FileStore::new();
        assert!(!store.delete_by_id(Uuid::new_v4()));
    }
}

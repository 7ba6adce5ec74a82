use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::models::candidate::Candidate;
use crate::models::city::City;
use crate::models::vacancy::Vacancy;

/// A record that can live in a [`MemoryStore`]. Id 0 is the "not yet
/// persisted" sentinel; the store replaces it on save and it is immutable
/// afterwards.
pub trait Entity: Clone {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
}

impl Entity for Vacancy {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl Entity for Candidate {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl Entity for City {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

struct Inner<T> {
    next_id: i32,
    entries: HashMap<i32, T>,
}

/// In-memory keyed store for one entity type. All request handlers share one
/// instance, so every operation takes the store's mutex; the lock is never
/// held across an await point.
pub struct MemoryStore<T> {
    inner: Mutex<Inner<T>>,
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                entries: HashMap::new(),
            }),
        }
    }

    /// A store pre-populated through the normal save path, so seeded entities
    /// get real ids assigned.
    pub fn with_entities(seed: impl IntoIterator<Item = T>) -> Self {
        let store = Self::new();
        for entity in seed {
            store.save(entity);
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        // A poisoned lock still holds consistent data: no critical section
        // below can leave the map half-written.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Stores the entity, assigning the next sequential id when it carries
    /// the unset sentinel 0. Assigned ids are strictly increasing and never
    /// reused, even after deletes.
    pub fn save(&self, mut entity: T) -> T {
        let mut inner = self.lock();
        if entity.id() == 0 {
            entity.set_id(inner.next_id);
            inner.next_id += 1;
        }
        inner.entries.insert(entity.id(), entity.clone());
        entity
    }

    /// Replaces the stored value when the id exists. A missing id is reported
    /// through the return value, not an error.
    pub fn update(&self, entity: T) -> bool {
        let mut inner = self.lock();
        match inner.entries.get_mut(&entity.id()) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        }
    }

    pub fn delete_by_id(&self, id: i32) -> bool {
        self.lock().entries.remove(&id).is_some()
    }

    pub fn find_by_id(&self, id: i32) -> Option<T> {
        self.lock().entries.get(&id).cloned()
    }

    /// All entities; iteration order is unspecified.
    pub fn find_all(&self) -> Vec<T> {
        self.lock().entries.values().cloned().collect()
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, description: &str) -> Candidate {
        Candidate {
            id: 0,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn save_assigns_id_and_round_trips() {
        let store = MemoryStore::new();
        let saved = store.save(candidate("Vasiliy", "Intern java developer"));

        assert_eq!(saved.id, 1);
        let found = store.find_by_id(1).expect("saved candidate");
        assert_eq!(found.name, "Vasiliy");
        assert_eq!(found.description, "Intern java developer");
    }

    #[test]
    fn ids_are_sequential_and_never_recycled() {
        let store = MemoryStore::new();
        let first = store.save(candidate("Vasiliy", "Intern java developer"));
        let second = store.save(candidate("Oleg", "Junior java developer"));
        assert_eq!((first.id, second.id), (1, 2));

        assert!(store.delete_by_id(first.id));
        let third = store.save(candidate("Petr", "Junior+ java developer"));
        assert_eq!(third.id, 3);
    }

    #[test]
    fn update_replaces_existing_entity() {
        let store = MemoryStore::new();
        let saved = store.save(candidate("Oleg", "Junior java developer"));

        let updated = Candidate {
            id: saved.id,
            name: "Oleg".to_string(),
            description: "Middle java developer".to_string(),
        };
        assert!(store.update(updated));
        assert_eq!(
            store.find_by_id(saved.id).unwrap().description,
            "Middle java developer"
        );
    }

    #[test]
    fn update_unknown_id_returns_false_and_leaves_store_unchanged() {
        let store = MemoryStore::new();
        store.save(candidate("Vasiliy", "Intern java developer"));

        let ghost = Candidate {
            id: 99,
            name: "Nobody".to_string(),
            description: "Never saved".to_string(),
        };
        assert!(!store.update(ghost));
        assert_eq!(store.find_all().len(), 1);
        assert!(store.find_by_id(99).is_none());
    }

    #[test]
    fn delete_reports_whether_a_removal_occurred() {
        let store = MemoryStore::new();
        let saved = store.save(candidate("Igor", "Middle+ java developer"));

        assert!(!store.delete_by_id(42));
        assert!(store.delete_by_id(saved.id));
        assert!(store.find_by_id(saved.id).is_none());
        assert!(!store.delete_by_id(saved.id));
    }

    #[test]
    fn find_all_tracks_saves_minus_deletes() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store.save(candidate(&format!("c{i}"), "dev"));
        }
        store.delete_by_id(2);
        store.delete_by_id(4);
        assert_eq!(store.find_all().len(), 3);
    }
}

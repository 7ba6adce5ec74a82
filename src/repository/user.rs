use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::models::user::User;

struct Inner {
    next_id: i32,
    // Keyed by email: registration doubles as the uniqueness check.
    users: HashMap<String, User>,
}

/// In-memory user store. Email is the natural key; numeric ids follow the
/// same sequential assignment as the entity stores.
pub struct UserRepository {
    inner: Mutex<Inner>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                users: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Stores the user unless the email is already registered. The check and
    /// the insert happen under one lock, so two concurrent registrations of
    /// the same email cannot both succeed.
    pub fn save(&self, mut user: User) -> Option<User> {
        let mut inner = self.lock();
        if inner.users.contains_key(&user.email) {
            return None;
        }
        if user.id == 0 {
            user.id = inner.next_id;
            inner.next_id += 1;
        }
        inner.users.insert(user.email.clone(), user.clone());
        Some(user)
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.lock().users.get(email).cloned()
    }
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

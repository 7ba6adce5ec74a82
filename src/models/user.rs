use serde::{Deserialize, Serialize};

/// Registered user. `password` holds the argon2 hash, never the plain text,
/// and is excluded from serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
}

use serde::{Deserialize, Serialize};

/// Static reference data, read-only after seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: i32,
    pub name: String,
}

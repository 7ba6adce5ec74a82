use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A job opening. `file_id` points into the file store and does not own the
/// attachment; an id of 0 marks an entity the repository has not assigned yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub visible: bool,
    pub city_id: i32,
    pub file_id: Option<Uuid>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vacancy::Vacancy;

/// Text fields of the vacancy form. The attachment travels beside it as a
/// separate multipart part and never passes through serde.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VacancyPayload {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub visible: bool,
    pub city_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub visible: bool,
    pub city_id: i32,
    pub file_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VacancyListQuery {
    pub visible: Option<bool>,
}

impl From<Vacancy> for VacancyResponse {
    fn from(value: Vacancy) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            creation_date: value.creation_date,
            visible: value.visible,
            city_id: value.city_id,
            file_id: value.file_id,
        }
    }
}

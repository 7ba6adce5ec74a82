use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::candidate::Candidate;

/// Full candidate form body, used for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidatePayload {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<Candidate> for CandidateResponse {
    fn from(value: Candidate) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
        }
    }
}

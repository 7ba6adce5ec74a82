use std::sync::Arc;

use crate::models::candidate::Candidate;
use crate::repository::memory::MemoryStore;

/// Pure delegation: candidates carry no attachments, so the service adds
/// nothing on top of the store.
#[derive(Clone)]
pub struct CandidateService {
    candidates: Arc<MemoryStore<Candidate>>,
}

impl CandidateService {
    pub fn new(candidates: Arc<MemoryStore<Candidate>>) -> Self {
        Self { candidates }
    }

    pub async fn save(&self, candidate: Candidate) -> Candidate {
        self.candidates.save(candidate)
    }

    pub async fn update(&self, candidate: Candidate) -> bool {
        self.candidates.update(candidate)
    }

    pub async fn delete_by_id(&self, id: i32) -> bool {
        self.candidates.delete_by_id(id)
    }

    pub async fn find_by_id(&self, id: i32) -> Option<Candidate> {
        self.candidates.find_by_id(id)
    }

    pub async fn find_all(&self) -> Vec<Candidate> {
        self.candidates.find_all()
    }
}

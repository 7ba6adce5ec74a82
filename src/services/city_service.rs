use std::sync::Arc;

use crate::models::city::City;
use crate::repository::memory::MemoryStore;

/// Read-only access to the seeded city reference data.
#[derive(Clone)]
pub struct CityService {
    cities: Arc<MemoryStore<City>>,
}

impl CityService {
    pub fn new(cities: Arc<MemoryStore<City>>) -> Self {
        Self { cities }
    }

    pub async fn find_all(&self) -> Vec<City> {
        self.cities.find_all()
    }

    pub async fn find_by_id(&self, id: i32) -> Option<City> {
        self.cities.find_by_id(id)
    }
}

pub mod candidate_routes;
pub mod cities;
pub mod files;
pub mod health;
pub mod users;
pub mod vacancy;

pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use chrono::Utc;

use crate::models::{candidate::Candidate, city::City, vacancy::Vacancy};
use crate::repository::{file_store::FileStore, memory::MemoryStore, user::UserRepository};
use crate::services::{
    candidate_service::CandidateService, city_service::CityService, file_service::FileService,
    user_service::UserService, vacancy_service::VacancyService,
};

#[derive(Clone)]
pub struct AppState {
    pub vacancy_service: VacancyService,
    pub candidate_service: CandidateService,
    pub city_service: CityService,
    pub file_service: FileService,
    pub user_service: UserService,
}

impl AppState {
    /// Builds every store once and hands them to the services; nothing holds
    /// global state, so tests can spin up as many isolated instances as they
    /// like.
    pub fn new() -> Self {
        let files = Arc::new(FileStore::new());
        let vacancies = Arc::new(MemoryStore::with_entities(sample_vacancies()));
        let candidates = Arc::new(MemoryStore::with_entities(sample_candidates()));
        let cities = Arc::new(MemoryStore::with_entities(sample_cities()));
        let users = Arc::new(UserRepository::new());

        let file_service = FileService::new(files);
        let vacancy_service = VacancyService::new(vacancies, file_service.clone());
        let candidate_service = CandidateService::new(candidates);
        let city_service = CityService::new(cities);
        let user_service = UserService::new(users);

        Self {
            vacancy_service,
            candidate_service,
            city_service,
            file_service,
            user_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/vacancies",
            get(routes::vacancy::list_vacancies).post(routes::vacancy::create_vacancy),
        )
        .route(
            "/api/vacancies/:id",
            get(routes::vacancy::get_vacancy)
                .patch(routes::vacancy::update_vacancy)
                .delete(routes::vacancy::delete_vacancy),
        )
        .route(
            "/api/candidates",
            get(routes::candidate_routes::list_candidates)
                .post(routes::candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/:id",
            get(routes::candidate_routes::get_candidate)
                .patch(routes::candidate_routes::update_candidate)
                .delete(routes::candidate_routes::delete_candidate),
        )
        .route("/api/cities", get(routes::cities::list_cities))
        .route("/api/files/:id", get(routes::files::get_file))
        .route("/api/users/register", post(routes::users::register_user))
        .route("/api/users/login", post(routes::users::login_user))
        .with_state(state)
}

fn sample_cities() -> Vec<City> {
    ["Moscow", "Saint Petersburg", "Yekaterinburg"]
        .into_iter()
        .map(|name| City {
            id: 0,
            name: name.to_string(),
        })
        .collect()
}

fn sample_candidates() -> Vec<Candidate> {
    [
        ("Vasiliy", "Intern java developer"),
        ("Oleg", "Junior java developer"),
        ("Petr", "Junior+ java developer"),
        ("Aleksey", "Middle java developer"),
        ("Igor", "Middle+ java developer"),
        ("Andrey", "Senior java developer"),
    ]
    .into_iter()
    .map(|(name, description)| Candidate {
        id: 0,
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn sample_vacancies() -> Vec<Vacancy> {
    let now = Utc::now();
    [
        ("Intern Java Developer", 1),
        ("Junior Java Developer", 2),
        ("Junior+ Java Developer", 3),
        ("Middle Java Developer", 1),
        ("Middle+ Java Developer", 2),
        ("Senior Java Developer", 3),
    ]
    .into_iter()
    .map(|(title, city_id)| Vacancy {
        id: 0,
        title: title.to_string(),
        description: format!("{} wanted", title),
        creation_date: now,
        visible: true,
        city_id,
        file_id: None,
    })
    .collect()
}

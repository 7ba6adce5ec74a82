pub mod candidate_service;
pub mod city_service;
pub mod file_service;
pub mod user_service;
pub mod vacancy_service;

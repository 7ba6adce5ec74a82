use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::candidate_dto::{CandidatePayload, CandidateResponse},
    error::{Error, Result},
    models::candidate::Candidate,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates",
    responses(
        (status = 200, description = "List of candidates", body = Json<Vec<CandidateResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items: Vec<CandidateResponse> = state
        .candidate_service
        .find_all()
        .await
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = CandidatePayload,
    responses(
        (status = 201, description = "Candidate created successfully", body = Json<CandidateResponse>),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state
        .candidate_service
        .save(Candidate {
            id: 0,
            name: payload.name,
            description: payload.description,
        })
        .await;
    tracing::info!(id = candidate.id, "candidate created");
    Ok((StatusCode::CREATED, Json(CandidateResponse::from(candidate))))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}",
    params(
        ("id" = i32, Path, description = "Candidate ID")
    ),
    responses(
        (status = 200, description = "Candidate found", body = Json<CandidateResponse>),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .find_by_id(id)
        .await
        .ok_or_else(candidate_not_found)?;
    Ok(Json(CandidateResponse::from(candidate)))
}

#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let updated = state
        .candidate_service
        .update(Candidate {
            id,
            name: payload.name,
            description: payload.description,
        })
        .await;
    if !updated {
        return Err(candidate_not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    if !state.candidate_service.delete_by_id(id).await {
        return Err(candidate_not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}

fn candidate_not_found() -> Error {
    Error::NotFound("Candidate with the given id was not found".into())
}

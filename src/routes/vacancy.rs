use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use validator::Validate;

use crate::{
    dto::{
        file_dto::FileDto,
        vacancy_dto::{VacancyListQuery, VacancyPayload, VacancyResponse},
    },
    error::{Error, Result},
    models::vacancy::Vacancy,
    AppState,
};

struct VacancyForm {
    payload: VacancyPayload,
    upload: Option<FileDto>,
}

/// Reads the vacancy multipart form: text fields plus an optional `file`
/// part. An empty file part (submitted form with no selection) counts as no
/// upload.
async fn read_vacancy_form(multipart: &mut Multipart) -> Result<VacancyForm> {
    let mut title = String::new();
    let mut description = String::new();
    let mut visible = false;
    let mut city_id = None;
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "title" => title = field.text().await?,
            "description" => description = field.text().await?,
            "visible" => {
                let raw = field.text().await?;
                visible = matches!(raw.trim(), "true" | "on" | "1");
            }
            "city_id" => {
                let raw = field.text().await?;
                let parsed = raw
                    .trim()
                    .parse()
                    .map_err(|_| Error::BadRequest("city_id must be an integer".into()))?;
                city_id = Some(parsed);
            }
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                if !data.is_empty() {
                    upload = Some(FileDto::new(filename, data));
                }
            }
            _ => {}
        }
    }

    let city_id = city_id.ok_or_else(|| Error::BadRequest("city_id is required".into()))?;
    let payload = VacancyPayload {
        title,
        description,
        visible,
        city_id,
    };
    payload.validate()?;

    Ok(VacancyForm { payload, upload })
}

#[utoipa::path(
    get,
    path = "/api/vacancies",
    params(
        ("visible" = Option<bool>, Query, description = "Return only visible vacancies")
    ),
    responses(
        (status = 200, description = "List of vacancies", body = Json<Vec<VacancyResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(
    State(state): State<AppState>,
    Query(query): Query<VacancyListQuery>,
) -> Result<impl IntoResponse> {
    let items = match query.visible {
        Some(true) => state.vacancy_service.find_visible().await,
        _ => state.vacancy_service.find_all().await,
    };
    let items: Vec<VacancyResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = read_vacancy_form(&mut multipart).await?;
    let vacancy = Vacancy {
        id: 0,
        title: form.payload.title,
        description: form.payload.description,
        creation_date: Utc::now(),
        visible: form.payload.visible,
        city_id: form.payload.city_id,
        file_id: None,
    };
    let vacancy = state.vacancy_service.save(vacancy, form.upload).await?;
    tracing::info!(id = vacancy.id, "vacancy created");
    Ok((StatusCode::CREATED, Json(VacancyResponse::from(vacancy))))
}

#[utoipa::path(
    get,
    path = "/api/vacancies/{id}",
    params(
        ("id" = i32, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy found", body = Json<VacancyResponse>),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let vacancy = state
        .vacancy_service
        .find_by_id(id)
        .await
        .ok_or_else(vacancy_not_found)?;
    Ok(Json(VacancyResponse::from(vacancy)))
}

#[axum::debug_handler]
pub async fn update_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = read_vacancy_form(&mut multipart).await?;
    let vacancy = Vacancy {
        id,
        title: form.payload.title,
        description: form.payload.description,
        // Placeholder only: the service keeps the stored creation date.
        creation_date: Utc::now(),
        visible: form.payload.visible,
        city_id: form.payload.city_id,
        file_id: None,
    };
    let updated = state.vacancy_service.update(vacancy, form.upload).await?;
    if !updated {
        return Err(vacancy_not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/vacancies/{id}",
    params(
        ("id" = i32, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 204, description = "Vacancy deleted successfully"),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    if !state.vacancy_service.delete_by_id(id).await {
        return Err(vacancy_not_found());
    }
    Ok(StatusCode::NO_CONTENT)
}

fn vacancy_not_found() -> Error {
    Error::NotFound("Vacancy with the given id was not found".into())
}

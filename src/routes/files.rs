use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    error::{Error, Result},
    AppState,
};

/// Serves stored attachment bytes under the original upload name.
#[axum::debug_handler]
pub async fn get_file(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let file = state
        .file_service
        .find_by_id(id)
        .await
        .ok_or_else(|| Error::NotFound("File with the given id was not found".into()))?;

    let headers = [
        (header::CONTENT_TYPE, "application/octet-stream".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.name.replace('"', "")),
        ),
    ];
    Ok((headers, file.content))
}

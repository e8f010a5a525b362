use axum::{extract::State, Json};
use serde_json::Value;
use tracing::{debug, info};

use super::ApiError;
use crate::models::AddSchoolResponse;
use crate::services::SchoolStore;
use crate::validation;

/// Handle `POST /addSchool`.
///
/// The body is taken as loose JSON and validated into a typed record before
/// any storage access; nothing is written when validation fails.
pub async fn add_school(
    State(store): State<SchoolStore>,
    Json(body): Json<Value>,
) -> Result<Json<AddSchoolResponse>, ApiError> {
    let school = validation::parse_new_school(&body)?;

    debug!(
        "adding school {} at ({}, {})",
        school.name, school.latitude, school.longitude
    );

    let id = store.insert(&school).await?;

    info!("added school {} with id {}", school.name, id);
    Ok(Json(AddSchoolResponse::created(id)))
}

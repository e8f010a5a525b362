use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use super::ApiError;
use crate::models::{ListSchoolsQuery, School};
use crate::services::SchoolStore;
use crate::validation;

/// Handle `GET /listSchools`.
///
/// Returns every stored school ordered nearest-first relative to the
/// reference point given in the query string.
pub async fn list_schools(
    State(store): State<SchoolStore>,
    Query(query): Query<ListSchoolsQuery>,
) -> Result<Json<Vec<School>>, ApiError> {
    let (ref_lat, ref_lng) =
        validation::parse_reference_point(query.latitude.as_deref(), query.longitude.as_deref())?;

    let schools = store.list_by_distance(ref_lat, ref_lng).await?;

    debug!(
        "listed {} schools around ({}, {})",
        schools.len(),
        ref_lat,
        ref_lng
    );

    Ok(Json(schools))
}

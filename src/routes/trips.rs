use axum::{
    extract::{rejection::PathRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::{
    error::AppError,
    grouping::{group_by_day, DayBucket},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/trips/:trip_id/activities", get(trip_activities))
}

#[derive(Debug, Serialize)]
pub struct TripActivitiesResponse {
    pub activities: Vec<DayBucket>,
}

async fn trip_activities(
    State(state): State<AppState>,
    trip_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TripActivitiesResponse>, AppError> {
    let Path(trip_id) = trip_id.map_err(|rejection| {
        debug!("rejected trip id: {rejection}");
        AppError::BadRequest("Invalid input".into())
    })?;

    let Some(trip) = state.trips.find_trip_with_activities(trip_id).await? else {
        debug!(%trip_id, "trip not found");
        return Err(AppError::trip_not_found());
    };

    let activities = group_by_day(
        &state.config.calendar_offset,
        trip.starts_at,
        trip.ends_at,
        &trip.activities,
    );
    debug!(%trip_id, days = activities.len(), "grouped trip activities by day");

    Ok(Json(TripActivitiesResponse { activities }))
}

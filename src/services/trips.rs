use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        activity::{Activity, NewActivity},
        trip::{NewTrip, Trip},
    },
};

#[async_trait]
pub trait TripStore: Send + Sync {
    /// The trip with its activities sorted ascending by `occurs_at`.
    async fn find_trip_with_activities(&self, trip_id: Uuid) -> Result<Option<Trip>, AppError>;
}

#[derive(Clone)]
pub struct SqliteTripStore {
    db: DbPool,
}

impl SqliteTripStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn create_trip(&self, new: NewTrip) -> Result<Trip, AppError> {
        let trip = Trip {
            id: Uuid::new_v4().to_string(),
            destination: new.destination,
            starts_at: new.starts_at,
            ends_at: new.ends_at,
            is_confirmed: false,
            created_at: Utc::now(),
            activities: Vec::new(),
        };
        sqlx::query(
            r#"INSERT INTO trips (id, destination, starts_at, ends_at, is_confirmed, created_at)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)"#,
        )
        .bind(&trip.id)
        .bind(&trip.destination)
        .bind(trip.starts_at)
        .bind(trip.ends_at)
        .bind(trip.is_confirmed)
        .bind(trip.created_at)
        .execute(&self.db)
        .await?;
        debug!(trip_id = %trip.id, "trip created");
        Ok(trip)
    }

    pub async fn create_activity(
        &self,
        trip_id: Uuid,
        new: NewActivity,
    ) -> Result<Activity, AppError> {
        let trip_id = trip_id.to_string();
        let exists: Option<String> = sqlx::query_scalar("SELECT id FROM trips WHERE id = ?1")
            .bind(&trip_id)
            .fetch_optional(&self.db)
            .await?;
        if exists.is_none() {
            return Err(AppError::trip_not_found());
        }

        let activity = Activity {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            occurs_at: new.occurs_at,
            trip_id,
        };
        sqlx::query("INSERT INTO activities (id, title, occurs_at, trip_id) VALUES (?1, ?2, ?3, ?4)")
            .bind(&activity.id)
            .bind(&activity.title)
            .bind(activity.occurs_at)
            .bind(&activity.trip_id)
            .execute(&self.db)
            .await?;
        Ok(activity)
    }
}

#[async_trait]
impl TripStore for SqliteTripStore {
    async fn find_trip_with_activities(&self, trip_id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip_id = trip_id.to_string();
        let trip: Option<Trip> = sqlx::query_as(
            "SELECT id, destination, starts_at, ends_at, is_confirmed, created_at FROM trips WHERE id = ?1",
        )
        .bind(&trip_id)
        .fetch_optional(&self.db)
        .await?;
        let Some(mut trip) = trip else {
            return Ok(None);
        };

        trip.activities = sqlx::query_as(
            "SELECT id, title, occurs_at, trip_id FROM activities WHERE trip_id = ?1 ORDER BY occurs_at ASC",
        )
        .bind(&trip_id)
        .fetch_all(&self.db)
        .await?;
        Ok(Some(trip))
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub occurs_at: DateTime<Utc>,
    pub trip_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewActivity {
    pub title: String,
    pub occurs_at: DateTime<Utc>,
}

use rusqlite::Row;
use serde::Deserialize;

use super::FromSqliteRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: i64,
    pub exercise: String,
    /// Minutes.
    pub duration: i64,
    pub location: String,
    pub description: String,
}

impl FromSqliteRow for Workout {
    // Columns are nullable; a NULL reads back as the empty value.
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            exercise: row.get::<_, Option<String>>("exercise")?.unwrap_or_default(),
            duration: row.get::<_, Option<i64>>("duration")?.unwrap_or_default(),
            location: row.get::<_, Option<String>>("location")?.unwrap_or_default(),
            description: row
                .get::<_, Option<String>>("description")?
                .unwrap_or_default(),
        })
    }
}

/// Form payload shared by the create and update pages. `duration` stays raw
/// so the handler can answer 400 on a bad number instead of a rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WorkoutForm {
    pub exercise: String,
    pub duration: String,
    pub location: String,
    pub description: String,
}

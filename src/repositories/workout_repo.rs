use rusqlite::OptionalExtension;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, Workout};

#[derive(Clone)]
pub struct WorkoutRepository {
    pool: DbPool,
}

impl WorkoutRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Workout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT id, exercise, duration, location, description FROM workouts ORDER BY id",
            )?;
            let workouts = stmt
                .query_map([], Workout::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(workouts)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Workout>> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT id, exercise, duration, location, description FROM workouts WHERE id = ?",
            )?;
            let result = stmt.query_row([id], Workout::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Insert a workout and return the id SQLite assigned to it.
    pub async fn create(
        &self,
        exercise: &str,
        duration: i64,
        location: &str,
        description: &str,
    ) -> Result<i64> {
        let pool = self.pool.clone();
        let exercise = exercise.to_string();
        let location = location.to_string();
        let description = description.to_string();

        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO workouts (exercise, duration, location, description) VALUES (?, ?, ?, ?)",
                rusqlite::params![exercise, duration, location, description],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Overwrite every field of the workout with `id`. Returns `false` when no
    /// row matched, which callers treat as success.
    pub async fn update(
        &self,
        id: i64,
        exercise: &str,
        duration: i64,
        location: &str,
        description: &str,
    ) -> Result<bool> {
        let pool = self.pool.clone();
        let exercise = exercise.to_string();
        let location = location.to_string();
        let description = description.to_string();

        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let rows = conn.execute(
                "UPDATE workouts SET exercise = ?, duration = ?, location = ?, description = ? WHERE id = ?",
                rusqlite::params![exercise, duration, location, description, id],
            )?;
            Ok(rows > 0)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

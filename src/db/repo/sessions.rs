use super::Repository;
use crate::domain::{SessionFields, WorkoutSession};

impl Repository {
    // =========================================================================
    // Workout session operations
    // =========================================================================

    pub async fn get_session(&self, session_id: i64) -> Result<Option<WorkoutSession>, sqlx::Error> {
        sqlx::query_as::<_, WorkoutSession>(
            r#"
            SELECT session_id, member_id, session_date, session_time,
                   activity, duration_minutes, calories_burned
            FROM workout_sessions
            WHERE session_id = ?
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn session_exists(&self, session_id: i64) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT 1 FROM workout_sessions WHERE session_id = ?")
                .bind(session_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.is_some())
    }

    /// Insert a session with all seven columns and return its id.
    ///
    /// # Errors
    /// Returns an error if the insert fails, including a unique violation
    /// on a duplicate `session_id`.
    pub async fn insert_session(&self, fields: &SessionFields) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO workout_sessions (
                session_id, member_id, session_date, session_time,
                activity, duration_minutes, calories_burned
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(fields.session_id)
        .bind(fields.member_id)
        .bind(fields.session_date)
        .bind(fields.session_time.as_str())
        .bind(fields.activity.as_str())
        .bind(fields.duration_minutes)
        .bind(fields.calories_burned)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrite every column of the session addressed by `session_id`.
    ///
    /// `fields.session_id`, when set, becomes the row's new key; otherwise
    /// the key is unchanged. Returns the number of rows changed.
    pub async fn update_session(
        &self,
        session_id: i64,
        fields: &SessionFields,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE workout_sessions
            SET session_id = ?,
                member_id = ?,
                session_date = ?,
                session_time = ?,
                activity = ?,
                duration_minutes = ?,
                calories_burned = ?
            WHERE session_id = ?
            "#,
        )
        .bind(fields.session_id.unwrap_or(session_id))
        .bind(fields.member_id)
        .bind(fields.session_date)
        .bind(fields.session_time.as_str())
        .bind(fields.activity.as_str())
        .bind(fields.duration_minutes)
        .bind(fields.calories_burned)
        .bind(session_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a session. Returns `true` if a row was removed.
    pub async fn delete_session(&self, session_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workout_sessions WHERE session_id = ?")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

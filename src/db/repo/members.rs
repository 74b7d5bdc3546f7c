use super::Repository;
use crate::domain::{Member, MemberUpdate};

impl Repository {
    // =========================================================================
    // Member operations
    // =========================================================================

    /// Insert a member and return its id.
    ///
    /// When `id` is `None` SQLite assigns the next rowid.
    ///
    /// # Errors
    /// Returns an error if the insert fails, including a unique violation
    /// on a duplicate `id`.
    pub async fn insert_member(
        &self,
        id: Option<i64>,
        name: &str,
        age: i64,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO members (id, name, age)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(age)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// List every member, ordered by id.
    pub async fn list_members(&self) -> Result<Vec<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>(
            r#"
            SELECT id, name, age
            FROM members
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Fetch a single member by id.
    pub async fn get_member(&self, id: i64) -> Result<Option<Member>, sqlx::Error> {
        sqlx::query_as::<_, Member>("SELECT id, name, age FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn member_exists(&self, id: i64) -> Result<bool, sqlx::Error> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    /// Apply the fields present in `update` to the member row.
    ///
    /// Absent fields keep their stored value. Returns the number of rows
    /// changed, which is 0 when no member has this id.
    pub async fn update_member(&self, id: i64, update: &MemberUpdate) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE members
            SET name = COALESCE(?, name),
                age = COALESCE(?, age)
            WHERE id = ?
            "#,
        )
        .bind(update.name.as_deref())
        .bind(update.age)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a member. Returns `true` if a row was removed.
    pub async fn delete_member(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

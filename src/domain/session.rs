//! Workout session rows and payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

const REQUIRED: &str = "Missing data for required field.";

/// A row of the `workout_sessions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkoutSession {
    pub session_id: i64,
    /// Not checked against `members`.
    pub member_id: i64,
    pub session_date: i64,
    pub session_time: String,
    pub activity: String,
    pub duration_minutes: i64,
    pub calories_burned: i64,
}

/// Body of `POST /add_session` and `PUT /sessions/{session_id}`.
///
/// `session_id` is optional. On insert it lets the client pick the key; on
/// update it reassigns the key of the addressed row.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SessionPayload {
    pub session_id: Option<i64>,
    #[validate(required(message = "Missing data for required field."))]
    pub member_id: Option<i64>,
    #[validate(required(message = "Missing data for required field."))]
    pub session_date: Option<i64>,
    #[validate(
        required(message = "Missing data for required field."),
        length(min = 1, message = "Session time must not be empty.")
    )]
    pub session_time: Option<String>,
    #[validate(
        required(message = "Missing data for required field."),
        length(min = 1, message = "Activity must not be empty.")
    )]
    pub activity: Option<String>,
    #[validate(
        required(message = "Missing data for required field."),
        range(min = 0, message = "Duration must not be negative.")
    )]
    pub duration_minutes: Option<i64>,
    #[validate(
        required(message = "Missing data for required field."),
        range(min = 0, message = "Calories must not be negative.")
    )]
    pub calories_burned: Option<i64>,
}

/// A validated session payload with every column present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFields {
    pub session_id: Option<i64>,
    pub member_id: i64,
    pub session_date: i64,
    pub session_time: String,
    pub activity: String,
    pub duration_minutes: i64,
    pub calories_burned: i64,
}

#[derive(Debug, thiserror::Error)]
#[error("missing field: {0}")]
pub struct MissingField(pub &'static str);

impl MissingField {
    pub fn field(&self) -> &'static str {
        self.0
    }

    pub fn message(&self) -> &'static str {
        REQUIRED
    }
}

impl TryFrom<SessionPayload> for SessionFields {
    type Error = MissingField;

    fn try_from(p: SessionPayload) -> Result<Self, Self::Error> {
        Ok(SessionFields {
            session_id: p.session_id,
            member_id: p.member_id.ok_or(MissingField("member_id"))?,
            session_date: p.session_date.ok_or(MissingField("session_date"))?,
            session_time: p.session_time.ok_or(MissingField("session_time"))?,
            activity: p.activity.ok_or(MissingField("activity"))?,
            duration_minutes: p.duration_minutes.ok_or(MissingField("duration_minutes"))?,
            calories_burned: p.calories_burned.ok_or(MissingField("calories_burned"))?,
        })
    }
}

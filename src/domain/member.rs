//! Member rows and the payloads accepted by the member routes.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// A row of the `members` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Body of `POST /add_member`.
///
/// `id` is optional; when it is absent SQLite assigns the next rowid.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewMember {
    pub id: Option<i64>,
    #[validate(
        required(message = "Missing data for required field."),
        length(min = 1, message = "Name must not be empty.")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_age")]
    #[validate(
        required(message = "Missing data for required field."),
        range(min = 0, message = "Age must not be negative.")
    )]
    pub age: Option<i64>,
}

/// Body of `PUT /members/{id}`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MemberUpdate {
    #[validate(length(min = 1, message = "Name must not be empty."))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_age")]
    #[validate(range(min = 0, message = "Age must not be negative."))]
    pub age: Option<i64>,
}

impl MemberUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}

/// Accepts `age` either as a JSON integer or as a string of digits.
fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AgeRepr {
        Int(i64),
        Text(String),
    }

    match Option::<AgeRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(AgeRepr::Int(n)) => Ok(Some(n)),
        Some(AgeRepr::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("age must be an integer, got {:?}", s))),
    }
}

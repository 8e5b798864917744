use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub country: String,
}

impl User {
    /// A user that has not been stored yet. The id is assigned on insert.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self::with_id(0, name, email, country)
    }

    pub fn with_id(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        User {
            id,
            name: name.into(),
            email: email.into(),
            country: country.into(),
        }
    }
}

/// Request body for creating or replacing a user over HTTP.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub country: String,
}

impl UserPayload {
    pub fn into_user(self, id: i64) -> User {
        User::with_id(id, self.name, self.email, self.country)
    }
}

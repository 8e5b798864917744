//! Data access for the `users` table.
//!
//! Every operation acquires its own connection, runs a single prepared
//! statement and releases the connection before returning, whether the
//! statement succeeded or not. Faults are returned to the caller untouched.

use std::sync::Arc;

use futures::TryStreamExt;
use log::debug;

use crate::datasource::ConnectionProvider;
use crate::error::DaoResult;
use crate::user::User;

pub const INSERT_USER_SQL: &str = "INSERT INTO users (name, email, country) VALUES (?,?,?)";
pub const SELECT_USER_BY_ID_SQL: &str = "SELECT * FROM users WHERE id=?";
pub const SELECT_ALL_USERS_SQL: &str = "SELECT * FROM users";
pub const DELETE_USER_SQL: &str = "DELETE FROM users WHERE id=?";
pub const UPDATE_USER_SQL: &str = "UPDATE users SET name=?, email=?, country=? WHERE id=?";

#[derive(Clone)]
pub struct UserRepository {
    provider: Arc<dyn ConnectionProvider>,
}

impl UserRepository {
    pub fn new<P>(provider: P) -> Self
    where
        P: ConnectionProvider + 'static,
    {
        Self::from_shared(Arc::new(provider))
    }

    pub fn from_shared(provider: Arc<dyn ConnectionProvider>) -> Self {
        UserRepository { provider }
    }

    /// Inserts `user` and returns the id the store assigned. `user.id` is ignored.
    pub async fn create(&self, user: &User) -> DaoResult<i64> {
        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query(INSERT_USER_SQL)
            .bind(user.name.as_str())
            .bind(user.email.as_str())
            .bind(user.country.as_str())
            .execute(&mut *conn)
            .await?;
        let id = result.last_insert_rowid();
        debug!("Repository: inserted user {}", id);
        Ok(id)
    }

    /// Returns true if a row with `user.id` was updated.
    pub async fn update(&self, user: &User) -> DaoResult<bool> {
        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query(UPDATE_USER_SQL)
            .bind(user.name.as_str())
            .bind(user.email.as_str())
            .bind(user.country.as_str())
            .bind(user.id)
            .execute(&mut *conn)
            .await?;
        debug!(
            "Repository: update of user {} touched {} row(s)",
            user.id,
            result.rows_affected()
        );
        Ok(result.rows_affected() > 0)
    }

    pub async fn read_by_id(&self, id: i64) -> DaoResult<Option<User>> {
        debug!("Repository: Finding user by ID: {}", id);
        let mut conn = self.provider.acquire().await?;
        let user = sqlx::query_as::<_, User>(SELECT_USER_BY_ID_SQL)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(user)
    }

    /// All rows, in whatever order the engine returns them.
    pub async fn read_all(&self) -> DaoResult<Vec<User>> {
        let mut conn = self.provider.acquire().await?;
        let users: Vec<User> = sqlx::query_as::<_, User>(SELECT_ALL_USERS_SQL)
            .fetch(&mut *conn)
            .try_collect()
            .await?;
        debug!("Repository: read {} user(s)", users.len());
        Ok(users)
    }

    /// Returns true if a row was removed.
    pub async fn delete(&self, id: i64) -> DaoResult<bool> {
        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query(DELETE_USER_SQL)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        debug!(
            "Repository: delete of user {} removed {} row(s)",
            id,
            result.rows_affected()
        );
        Ok(result.rows_affected() > 0)
    }
}

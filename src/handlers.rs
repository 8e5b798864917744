use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use log::{error, info, warn};
use serde::Serialize;

use crate::error::DaoError;
use crate::repository::UserRepository;
use crate::user::UserPayload;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(i64),
    Dao(DaoError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(id) => write!(f, "user {} not found", id),
            ApiError::Dao(err) => write!(f, "{}", err),
        }
    }
}

impl From<DaoError> for ApiError {
    fn from(err: DaoError) -> Self {
        error!("repository fault: {}", err);
        ApiError::Dao(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Dao(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let code = match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Dao(err) => err.code(),
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct Created {
    id: i64,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/{id}", web::get().to(get_user))
            .route("/{id}", web::put().to(update_user))
            .route("/{id}", web::delete().to(delete_user)),
    );
}

async fn list_users(repo: web::Data<UserRepository>) -> Result<HttpResponse, ApiError> {
    let users = repo.read_all().await?;
    Ok(HttpResponse::Ok().json(users))
}

async fn get_user(
    repo: web::Data<UserRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let user = repo.read_by_id(id).await?.ok_or_else(|| {
        warn!("User not found with id: {}", id);
        ApiError::NotFound(id)
    })?;
    Ok(HttpResponse::Ok().json(user))
}

async fn create_user(
    repo: web::Data<UserRepository>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    let user = body.into_inner().into_user(0);
    let id = repo.create(&user).await?;
    info!("Created user {}", id);
    Ok(HttpResponse::Created().json(Created { id }))
}

async fn update_user(
    repo: web::Data<UserRepository>,
    path: web::Path<i64>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, ApiError> {
    let user = body.into_inner().into_user(path.into_inner());
    if !repo.update(&user).await? {
        return Err(ApiError::NotFound(user.id));
    }
    Ok(HttpResponse::Ok().json(user))
}

async fn delete_user(
    repo: web::Data<UserRepository>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if !repo.delete(id).await? {
        return Err(ApiError::NotFound(id));
    }
    info!("Deleted user {}", id);
    Ok(HttpResponse::NoContent().finish())
}

//! User CRUD handlers: create, list, update, delete.
//!
//! Every body is bound through `Result<Json<T>, JsonRejection>` so that any
//! bind failure (malformed JSON, missing or ill-typed field) maps to 400
//! rather than axum's default 415/422 split.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::{CreateUserParams, ListUsersParams, UpdateUserParams, User};
use crate::validation::{validate_alpha, validate_country, validate_email};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    // nickname and password are free-form and may be omitted; an absent
    // field binds as the empty string.
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub password: String,
    pub email: String,
    pub country: String,
}

impl CreateUserRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate_alpha("first_name", &self.first_name)?;
        validate_alpha("last_name", &self.last_name)?;
        validate_email("email", &self.email)?;
        validate_country("country", &self.country)
    }
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    request.validate()?;

    let params = CreateUserParams {
        first_name: request.first_name,
        last_name: request.last_name,
        nickname: request.nickname,
        password: request.password,
        email: request.email,
        country: request.country,
    };

    let user = state.querier.create_user(params).await?;
    Ok(Json(user))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListUsersRequest {
    pub page_size: i32,
    pub page_number: i32,
}

pub async fn list_users(
    State(state): State<AppState>,
    payload: Result<Json<ListUsersRequest>, JsonRejection>,
) -> Result<Json<Vec<User>>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    if request.page_size < 1 {
        return Err(AppError::Validation("page_size must be at least 1".into()));
    }
    if request.page_number < 1 {
        return Err(AppError::Validation(
            "page_number must be at least 1".into(),
        ));
    }

    // Page math in i64: (page_number - 1) * page_size can exceed i32 for
    // the largest valid pages.
    let params = ListUsersParams {
        limit: i64::from(request.page_size),
        offset: (i64::from(request.page_number) - 1) * i64::from(request.page_size),
    };

    let users = state.querier.list_users(params).await?;
    Ok(Json(users))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub password: String,
    pub email: String,
    pub country: String,
}

impl UpdateUserRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate_alpha("first_name", &self.first_name)?;
        validate_alpha("last_name", &self.last_name)?;
        validate_email("email", &self.email)?;
        validate_country("country", &self.country)
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    request.validate()?;

    let params = UpdateUserParams {
        id: request.id,
        first_name: request.first_name,
        last_name: request.last_name,
        nickname: request.nickname,
        password: request.password,
        email: request.email,
        country: request.country,
    };

    // RowNotFound propagates as 404, anything else as 500.
    let user = state.querier.update_user(params).await?;
    Ok(Json(user))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    #[serde(rename = "ID")]
    pub id: Uuid,
}

pub async fn delete_user(
    State(state): State<AppState>,
    payload: Result<Json<DeleteUserRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    state.querier.delete_user(request.id).await?;
    Ok(Json(serde_json::json!({})))
}

//! User table DDL and the `Querier` data accessor over PostgreSQL.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A persisted user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub password: String,
    pub email: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserParams {
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub password: String,
    pub email: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserParams {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub password: String,
    pub email: String,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListUsersParams {
    pub limit: i64,
    pub offset: i64,
}

/// Data accessor: one parameterized statement per operation.
/// `sqlx::Error::RowNotFound` is the distinguished not-found condition for
/// the mutating operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Querier: Send + Sync {
    async fn create_user(&self, params: CreateUserParams) -> Result<User, sqlx::Error>;
    async fn list_users(&self, params: ListUsersParams) -> Result<Vec<User>, sqlx::Error>;
    async fn update_user(&self, params: UpdateUserParams) -> Result<User, sqlx::Error>;
    async fn delete_user(&self, id: Uuid) -> Result<(), sqlx::Error>;
    async fn get_user(&self, id: Uuid) -> Result<User, sqlx::Error>;
}

/// `Querier` backed by a shared PostgreSQL pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

const CREATE_USER: &str = "\
    INSERT INTO users (first_name, last_name, nickname, password, email, country) \
    VALUES ($1, $2, $3, $4, $5, $6) \
    RETURNING *";

// No ORDER BY: pages come back in store-default order.
const LIST_USERS: &str = "SELECT * FROM users LIMIT $1 OFFSET $2";

const UPDATE_USER: &str = "\
    UPDATE users \
    SET first_name = $2, last_name = $3, nickname = $4, password = $5, email = $6, country = $7 \
    WHERE id = $1 \
    RETURNING *";

// RETURNING id so a missing row surfaces as RowNotFound instead of a silent
// zero-row delete.
const DELETE_USER: &str = "DELETE FROM users WHERE id = $1 RETURNING id";

const GET_USER: &str = "SELECT * FROM users WHERE id = $1";

#[async_trait]
impl Querier for PgStore {
    async fn create_user(&self, params: CreateUserParams) -> Result<User, sqlx::Error> {
        tracing::debug!(sql = CREATE_USER, "query");
        sqlx::query_as::<_, User>(CREATE_USER)
            .bind(&params.first_name)
            .bind(&params.last_name)
            .bind(&params.nickname)
            .bind(&params.password)
            .bind(&params.email)
            .bind(&params.country)
            .fetch_one(&self.pool)
            .await
    }

    async fn list_users(&self, params: ListUsersParams) -> Result<Vec<User>, sqlx::Error> {
        tracing::debug!(sql = LIST_USERS, limit = params.limit, offset = params.offset, "query");
        sqlx::query_as::<_, User>(LIST_USERS)
            .bind(params.limit)
            .bind(params.offset)
            .fetch_all(&self.pool)
            .await
    }

    async fn update_user(&self, params: UpdateUserParams) -> Result<User, sqlx::Error> {
        tracing::debug!(sql = UPDATE_USER, id = %params.id, "query");
        sqlx::query_as::<_, User>(UPDATE_USER)
            .bind(params.id)
            .bind(&params.first_name)
            .bind(&params.last_name)
            .bind(&params.nickname)
            .bind(&params.password)
            .bind(&params.email)
            .bind(&params.country)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), sqlx::Error> {
        tracing::debug!(sql = DELETE_USER, id = %id, "query");
        sqlx::query(DELETE_USER)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_user(&self, id: Uuid) -> Result<User, sqlx::Error> {
        tracing::debug!(sql = GET_USER, id = %id, "query");
        sqlx::query_as::<_, User>(GET_USER)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }
}

/// Create the users table if it does not exist. `gen_random_uuid()` assigns
/// ids server-side (PostgreSQL 13+).
pub async fn ensure_users_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            nickname TEXT NOT NULL,
            password TEXT NOT NULL,
            email TEXT NOT NULL,
            country TEXT NOT NULL
        )
        "#;
    sqlx::query(ddl).execute(pool).await?;
    Ok(())
}

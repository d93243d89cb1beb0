//! API route handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::extract::{JsonBody, UserId};
use super::server::SharedState;
use super::validation::CreateUserRequest;
use crate::auth::{LoginRequest, LoginResponse};
use crate::error::Result;
use crate::users::UserView;

// Response types

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub title: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub users_count: usize,
    pub active_sessions: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// Service info

pub async fn root(State(state): State<SharedState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        title: state.config.server.title.clone(),
        version: state.config.server.version.clone(),
    })
}

// Health check

pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let now = Utc::now();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now,
        users_count: state.users.count().await,
        active_sessions: state.auth.sessions().count_active(now).await,
    })
}

// User routes

pub async fn create_user(
    State(state): State<SharedState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserView>)> {
    let new_user = req.into_new_user()?;
    let user = state.users.register(new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list_users(State(state): State<SharedState>) -> Json<Vec<UserView>> {
    Json(state.users.list().await)
}

pub async fn get_user(
    State(state): State<SharedState>,
    UserId(id): UserId,
) -> Result<Json<UserView>> {
    Ok(Json(state.users.get(id).await?))
}

pub async fn delete_user(
    State(state): State<SharedState>,
    UserId(id): UserId,
) -> Result<Json<MessageResponse>> {
    state.users.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}

// Auth routes

pub async fn login(
    State(state): State<SharedState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let response = state.auth.login(&req.username, &req.password).await?;
    Ok(Json(response))
}

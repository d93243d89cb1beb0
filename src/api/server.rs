//! HTTP API server

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::{require_session, AuthService, SessionStore};
use crate::config::Config;
use crate::error::Result;
use crate::users::{UserService, UserStore};

use super::routes;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub users: UserService,
    pub auth: AuthService,
}

impl AppState {
    /// Build fresh, empty stores and the services over them
    pub fn new(config: Config) -> Self {
        let user_store = UserStore::new();
        let session_store = SessionStore::new();

        let users = UserService::new(user_store.clone(), config.compat.clone());
        let auth = AuthService::new(user_store, session_store, &config.compat);

        Self {
            config,
            users,
            auth,
        }
    }
}

pub type SharedState = Arc<AppState>;

/// Run the HTTP API server
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    let compat = &config.compat;
    if compat.legacy_email_check || compat.legacy_session_ttl || compat.legacy_soft_delete {
        tracing::warn!(
            "Legacy behaviour enabled: email_check={} session_ttl={} soft_delete={}",
            compat.legacy_email_check,
            compat.legacy_session_ttl,
            compat.legacy_soft_delete
        );
    }

    let state = Arc::new(AppState::new(config));
    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: SharedState) -> Router {
    let mut list_users = get(routes::list_users);
    let mut get_user = get(routes::get_user);

    if state.config.auth.protect_reads {
        let auth = middleware::from_fn_with_state(state.auth.clone(), require_session);
        list_users = list_users.route_layer(auth.clone());
        get_user = get_user.route_layer(auth);
    }

    let router = Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/login", post(routes::login))
        .route("/users", list_users.post(routes::create_user))
        .route("/users/{id}", get_user.delete(routes::delete_user))
        .layer(TraceLayer::new_for_http());

    let router = if state.config.server.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

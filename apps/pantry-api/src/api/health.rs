//! Readiness check probing the JSON store locations.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::json_file::check_health;

/// Readiness check: both store files must be creatable in their directories.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let users_path = state.config.store.users_path();
    let codes_path = state.config.store.codes_path();

    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "users_store",
            Box::pin(async {
                check_health(&users_path)
                    .await
                    .map_err(|e| format!("User store check failed: {}", e))
            }),
        ),
        (
            "codes_store",
            Box::pin(async {
                check_health(&codes_path)
                    .await
                    .map_err(|e| format!("Code store check failed: {}", e))
            }),
        ),
    ];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{IssueSteamTokenUseCase, IssueTestTokenUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{TokenRequest, TokenResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Test Issuance
// ============================================================================

/// POST /token/test
pub async fn issue_test_token<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<TokenRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = IssueTestTokenUseCase::new(state.config.clone());
    let output = use_case.execute(&req.username)?;

    Ok(Json(TokenResponse {
        token: output.token,
    }))
}

// ============================================================================
// Steam Issuance
// ============================================================================

/// POST /token/steam
pub async fn issue_steam_token<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<TokenRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = IssueSteamTokenUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(&req.username).await?;

    Ok(Json(TokenResponse {
        token: output.token,
    }))
}

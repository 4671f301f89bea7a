//! Character Router

use axum::{Router, routing::post};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::{AuthConfig, PgAuthRepository};

use crate::domain::repository::CharacterRepository;
use crate::infra::postgres::PgCharacterRepository;
use crate::presentation::handlers::{self, CharacterAppState};

/// Create the Character router with PostgreSQL repositories
pub fn character_router(
    user_repo: PgAuthRepository,
    character_repo: PgCharacterRepository,
    config: Arc<AuthConfig>,
) -> Router {
    character_router_generic(user_repo, character_repo, config)
}

/// Create a generic Character router for any repository implementations
pub fn character_router_generic<U, C>(user_repo: U, character_repo: C, config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: CharacterRepository + Clone + Send + Sync + 'static,
{
    let state = CharacterAppState {
        user_repo: Arc::new(user_repo),
        character_repo: Arc::new(character_repo),
        config,
    };

    Router::new()
        .route(
            "/character/create/test",
            post(handlers::create_character::<U, C>),
        )
        .route(
            "/character/create/steam",
            post(handlers::create_character::<U, C>),
        )
        .route("/characters", post(handlers::list_characters::<U, C>))
        .with_state(state)
}

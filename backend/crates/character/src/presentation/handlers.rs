//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use auth::AuthConfig;
use auth::domain::repository::UserRepository;

use crate::application::{CreateCharacterInput, CreateCharacterUseCase, ListCharactersUseCase};
use crate::domain::repository::CharacterRepository;
use crate::error::CharacterResult;
use crate::presentation::dto::{
    CharacterListResponse, CharacterSummary, CreateCharacterRequest, ListCharactersRequest,
};

/// Shared state for character handlers
#[derive(Clone)]
pub struct CharacterAppState<U, C>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: CharacterRepository + Clone + Send + Sync + 'static,
{
    pub user_repo: Arc<U>,
    pub character_repo: Arc<C>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Create Character
// ============================================================================

/// POST /character/create/test, POST /character/create/steam
pub async fn create_character<U, C>(
    State(state): State<CharacterAppState<U, C>>,
    Json(req): Json<CreateCharacterRequest>,
) -> CharacterResult<StatusCode>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: CharacterRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateCharacterUseCase::new(
        state.user_repo.clone(),
        state.character_repo.clone(),
        state.config.clone(),
    );

    let input = CreateCharacterInput {
        username: req.username,
        token: req.token,
        character_name: req.character_name,
        race: req.race,
    };

    use_case.execute(input).await?;

    Ok(StatusCode::OK)
}

// ============================================================================
// List Characters
// ============================================================================

/// POST /characters
pub async fn list_characters<U, C>(
    State(state): State<CharacterAppState<U, C>>,
    Json(req): Json<ListCharactersRequest>,
) -> CharacterResult<Json<CharacterListResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: CharacterRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCharactersUseCase::new(
        state.user_repo.clone(),
        state.character_repo.clone(),
        state.config.clone(),
    );

    let characters = use_case.execute(&req.username, &req.token).await?;

    Ok(Json(CharacterListResponse {
        characters: characters
            .into_iter()
            .map(|c| CharacterSummary {
                name: c.character_name.into(),
            })
            .collect(),
    }))
}

//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire.

use auth::models::Platform;
use serde::{Deserialize, Serialize};

use crate::domain::value_object::race::Race;

// ============================================================================
// Create Character
// ============================================================================

/// Create character request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacterRequest {
    /// Decoded for shape only; identity comes from the token
    pub platform: Platform,
    pub username: String,
    #[serde(alias = "jwt")]
    pub token: String,
    pub character_name: String,
    pub race: Race,
}

// ============================================================================
// List Characters
// ============================================================================

/// List characters request
#[derive(Debug, Clone, Deserialize)]
pub struct ListCharactersRequest {
    pub platform: Platform,
    pub username: String,
    #[serde(alias = "jwt")]
    pub token: String,
}

/// One listed character
#[derive(Debug, Clone, Serialize)]
pub struct CharacterSummary {
    pub name: String,
}

/// List characters response
#[derive(Debug, Clone, Serialize)]
pub struct CharacterListResponse {
    pub characters: Vec<CharacterSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_accepts_jwt_alias() {
        let req: ListCharactersRequest = serde_json::from_str(
            r#"{"platform":"STEAM","username":"alice_01","jwt":"a.b.c"}"#,
        )
        .unwrap();
        assert_eq!(req.token, "a.b.c");
        assert_eq!(req.platform, Platform::Steam);
    }

    #[test]
    fn test_unknown_race_rejected() {
        let result = serde_json::from_str::<CreateCharacterRequest>(
            r#"{"platform":"TEST","username":"alice_01","token":"t","character_name":"Hero_001","race":"ORC"}"#,
        );
        assert!(result.is_err());
    }
}

//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Token Issuance
// ============================================================================

/// Token request (test and Steam issuance)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub username: String,
}

/// Token response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CharacterAppState;
pub use router::{character_router, character_router_generic};

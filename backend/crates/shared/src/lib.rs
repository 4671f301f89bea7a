//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! `auth` and `character` contexts:
//! - Common error types and result aliases
//! - Typed integer IDs for persisted rows
//! - The handle rule shared by user names and character names
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod handle;
pub mod id;

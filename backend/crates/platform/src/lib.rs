//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, base64url, secure random bytes)
//! - Configuration loading from the environment and secret files

pub mod config;
pub mod crypto;

//! Value Object Module

pub mod platform;
pub mod user_id;
pub mod user_name;
pub mod user_status;

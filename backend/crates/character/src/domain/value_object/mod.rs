//! Value Object Module

pub mod character_id;
pub mod character_name;
pub mod race;

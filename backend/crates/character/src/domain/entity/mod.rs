//! Entity Module

pub mod character;

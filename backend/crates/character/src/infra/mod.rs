//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCharacterRepository;
pub use postgres::PgCharacterRepository;

//! Character ID Value Object

pub use kernel::id::CharacterId;

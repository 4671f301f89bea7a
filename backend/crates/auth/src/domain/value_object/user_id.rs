//! User ID Value Object

pub use kernel::id::UserId;

pub mod auth;
pub mod equipment;
pub mod personnel;
pub mod records;
pub mod shared;

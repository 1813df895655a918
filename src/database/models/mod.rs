pub mod equipment;
pub mod personnel;
pub mod record;
pub mod user;

// Re-export all models for easy importing
pub use equipment::*;
pub use personnel::*;
pub use record::*;
pub use user::*;

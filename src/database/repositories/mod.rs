pub mod equipment;
pub mod personnel;
pub mod record;
pub mod user;

// Re-export all repositories for easy importing
pub use equipment::EquipmentRepository;
pub use personnel::PersonnelRepository;
pub use record::RecordRepository;
pub use user::UserRepository;

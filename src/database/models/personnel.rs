use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A person who can be listed as responsible for a checkout or return.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Personnel {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PersonnelInput {
    pub name: String,
    pub email: Option<String>,
}

impl PersonnelInput {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }
        Ok(())
    }
}

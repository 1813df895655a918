use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::{Equipment, EquipmentInput};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: SqlitePool,
}

impl EquipmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: EquipmentInput) -> Result<Equipment> {
        let equipment = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (name, description)
            VALUES (?, ?)
            RETURNING id, name, description
            "#,
        )
        .bind(input.name)
        .bind(input.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(equipment)
    }

    pub async fn get_all(&self) -> Result<Vec<Equipment>> {
        let equipment = sqlx::query_as::<_, Equipment>(
            "SELECT id, name, description FROM equipment ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(equipment)
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

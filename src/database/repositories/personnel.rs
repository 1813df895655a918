use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::{Personnel, PersonnelInput};

#[derive(Clone)]
pub struct PersonnelRepository {
    pool: SqlitePool,
}

impl PersonnelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: PersonnelInput) -> Result<Personnel> {
        let person = sqlx::query_as::<_, Personnel>(
            r#"
            INSERT INTO personnel (name, email)
            VALUES (?, ?)
            RETURNING id, name, email
            "#,
        )
        .bind(input.name)
        .bind(input.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(person)
    }

    pub async fn get_all(&self) -> Result<Vec<Personnel>> {
        let personnel = sqlx::query_as::<_, Personnel>(
            "SELECT id, name, email FROM personnel ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(personnel)
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM personnel WHERE name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM personnel WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

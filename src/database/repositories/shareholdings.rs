use sqlx::{Executor, Sqlite, SqlitePool};

use crate::database::models::Shareholding;
use crate::database::DatabaseError;
use crate::services::validation::ShareholdingInput;

pub struct ShareholdingRepository {
    pool: SqlitePool,
}

async fn fetch_shareholding<'e, E>(
    executor: E,
    id: i64,
) -> Result<Option<Shareholding>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Shareholding>(
        r#"
        SELECT id, company_id, shareholder_id, shares_owned, acquired_at, source
        FROM shareholdings
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

impl ShareholdingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, id: i64) -> Result<Option<Shareholding>, DatabaseError> {
        Ok(fetch_shareholding(&self.pool, id).await?)
    }

    /// A missing shareholder surfaces as `DatabaseError::ForeignKeyViolation`
    pub async fn create(&self, input: &ShareholdingInput) -> Result<Shareholding, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            r#"
            INSERT INTO shareholdings (company_id, shareholder_id, shares_owned, acquired_at, source)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(input.company_id)
        .bind(input.shareholder_id)
        .bind(input.shares_owned)
        .bind(&input.acquired_at)
        .bind(&input.source)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let shareholding = fetch_shareholding(&mut *tx, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;

        Ok(shareholding)
    }

    /// Only the holding's own attributes change; both ends stay fixed.
    pub async fn update(
        &self,
        id: i64,
        input: &ShareholdingInput,
    ) -> Result<Option<Shareholding>, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE shareholdings SET shares_owned = ?, acquired_at = ?, source = ? WHERE id = ?",
        )
        .bind(input.shares_owned)
        .bind(&input.acquired_at)
        .bind(&input.source)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let shareholding = fetch_shareholding(&mut *tx, id).await?;
        tx.commit().await?;

        Ok(shareholding)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM shareholdings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::database::models::{Shareholder, ShareholderHolding};
use crate::database::DatabaseError;
use crate::services::validation::ShareholderInput;

pub struct ShareholderRepository {
    pool: SqlitePool,
}

async fn fetch_shareholder<'e, E>(executor: E, id: i64) -> Result<Option<Shareholder>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Shareholder>(
        "SELECT id, name, last_name, identifier, notes FROM shareholders WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

impl ShareholderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shareholders")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Shareholder>, DatabaseError> {
        let shareholders = sqlx::query_as::<_, Shareholder>(
            r#"
            SELECT id, name, last_name, identifier, notes
            FROM shareholders
            ORDER BY name, last_name, id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(shareholders)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Shareholder>, DatabaseError> {
        Ok(fetch_shareholder(&self.pool, id).await?)
    }

    /// Holdings ordered by company name; restricted companies dropped for guests
    pub async fn holdings(
        &self,
        shareholder_id: i64,
        guest_only: bool,
    ) -> Result<Vec<ShareholderHolding>, DatabaseError> {
        let mut sql = String::from(
            r#"
            SELECT sh.id, sh.shares_owned, sh.acquired_at, sh.source,
                   c.id AS company_id, c.name AS company_name, c.nip AS company_nip
            FROM shareholdings sh
            JOIN companies c ON c.id = sh.company_id
            WHERE sh.shareholder_id = ?
            "#,
        );
        if guest_only {
            sql.push_str(" AND c.is_restricted = 0");
        }
        sql.push_str(" ORDER BY c.name, sh.id");

        let holdings = sqlx::query_as::<_, ShareholderHolding>(&sql)
            .bind(shareholder_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(holdings)
    }

    pub async fn create(&self, input: &ShareholderInput) -> Result<Shareholder, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            "INSERT INTO shareholders (name, last_name, identifier, notes) VALUES (?, ?, ?, ?)",
        )
        .bind(&input.name)
        .bind(&input.last_name)
        .bind(&input.identifier)
        .bind(&input.notes)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let shareholder = fetch_shareholder(&mut *tx, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;

        Ok(shareholder)
    }

    pub async fn update(
        &self,
        id: i64,
        input: &ShareholderInput,
    ) -> Result<Option<Shareholder>, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE shareholders SET name = ?, last_name = ?, identifier = ?, notes = ? WHERE id = ?",
        )
        .bind(&input.name)
        .bind(&input.last_name)
        .bind(&input.identifier)
        .bind(&input.notes)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let shareholder = fetch_shareholder(&mut *tx, id).await?;
        tx.commit().await?;

        Ok(shareholder)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM shareholders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::database::models::{Company, CompanyHolding, CompanyType};
use crate::database::DatabaseError;
use crate::services::validation::CompanyInput;

const COMPANY_SELECT: &str = r#"
    SELECT c.id, c.name, c.nip, c.krs, c.founded_at, c.company_type_id,
           c.share_capital, c.last_valuation, c.created_by_user_id,
           c.is_restricted, c.notes,
           ct.code AS company_type_code, ct.label_pl AS company_type_label
    FROM companies c
    JOIN company_types ct ON ct.id = c.company_type_id
"#;

const GUEST_FILTER: &str = "c.is_restricted = 0";

pub struct CompanyRepository {
    pool: SqlitePool,
}

async fn fetch_company<'e, E>(executor: E, id: i64) -> Result<Option<Company>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Company>(&format!("{COMPANY_SELECT} WHERE c.id = ?"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

fn where_clause(guest_only: bool) -> &'static str {
    if guest_only {
        " WHERE c.is_restricted = 0"
    } else {
        ""
    }
}

impl CompanyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn count(&self, guest_only: bool) -> Result<i64, DatabaseError> {
        let sql = format!("SELECT COUNT(*) FROM companies c{}", where_clause(guest_only));
        let total = sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// One page ordered by name. Restricted rows are skipped for guests.
    pub async fn list(
        &self,
        guest_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Company>, DatabaseError> {
        let sql = format!(
            "{COMPANY_SELECT}{} ORDER BY c.name, c.id LIMIT ? OFFSET ?",
            where_clause(guest_only)
        );
        let companies = sqlx::query_as::<_, Company>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(companies)
    }

    /// Bare row, used for ownership checks
    pub async fn find(&self, id: i64) -> Result<Option<Company>, DatabaseError> {
        Ok(fetch_company(&self.pool, id).await?)
    }

    /// Detail row with the creator's display name. `None` when absent or
    /// hidden from a guest.
    pub async fn find_detail(
        &self,
        id: i64,
        guest_only: bool,
    ) -> Result<Option<Company>, DatabaseError> {
        let mut sql = String::from(
            r#"
            SELECT c.id, c.name, c.nip, c.krs, c.founded_at, c.company_type_id,
                   c.share_capital, c.last_valuation, c.created_by_user_id,
                   c.is_restricted, c.notes,
                   ct.code AS company_type_code, ct.label_pl AS company_type_label,
                   u.display_name AS created_by_name
            FROM companies c
            JOIN company_types ct ON ct.id = c.company_type_id
            LEFT JOIN users u ON u.id = c.created_by_user_id
            WHERE c.id = ?
            "#,
        );
        if guest_only {
            sql.push_str(" AND ");
            sql.push_str(GUEST_FILTER);
        }

        let company = sqlx::query_as::<_, Company>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(company)
    }

    pub async fn list_types(&self) -> Result<Vec<CompanyType>, DatabaseError> {
        let types = sqlx::query_as::<_, CompanyType>(
            "SELECT id, code, label_pl, description FROM company_types ORDER BY label_pl",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(types)
    }

    pub async fn holdings(&self, company_id: i64) -> Result<Vec<CompanyHolding>, DatabaseError> {
        let holdings = sqlx::query_as::<_, CompanyHolding>(
            r#"
            SELECT sh.id, sh.shares_owned, sh.acquired_at, sh.source,
                   s.id AS shareholder_id, s.name AS shareholder_name,
                   s.last_name AS shareholder_last_name
            FROM shareholdings sh
            JOIN shareholders s ON s.id = sh.shareholder_id
            WHERE sh.company_id = ?
            ORDER BY s.name, s.last_name, sh.id
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(holdings)
    }

    pub async fn create(
        &self,
        input: &CompanyInput,
        created_by_user_id: i64,
    ) -> Result<Company, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            r#"
            INSERT INTO companies
                (name, nip, krs, founded_at, company_type_id, share_capital,
                 last_valuation, created_by_user_id, is_restricted, notes)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(&input.nip)
        .bind(&input.krs)
        .bind(&input.founded_at)
        .bind(input.company_type_id)
        .bind(input.share_capital)
        .bind(input.last_valuation)
        .bind(created_by_user_id)
        .bind(input.is_restricted)
        .bind(&input.notes)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let company = fetch_company(&mut *tx, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;

        Ok(company)
    }

    /// Full replace of the editable columns. `None` if the row is gone.
    pub async fn update(
        &self,
        id: i64,
        input: &CompanyInput,
    ) -> Result<Option<Company>, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE companies
            SET name = ?, nip = ?, krs = ?, founded_at = ?, company_type_id = ?,
                share_capital = ?, last_valuation = ?, is_restricted = ?, notes = ?
            WHERE id = ?
            "#,
        )
        .bind(&input.name)
        .bind(&input.nip)
        .bind(&input.krs)
        .bind(&input.founded_at)
        .bind(input.company_type_id)
        .bind(input.share_capital)
        .bind(input.last_valuation)
        .bind(input.is_restricted)
        .bind(&input.notes)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let company = fetch_company(&mut *tx, id).await?;
        tx.commit().await?;

        Ok(company)
    }

    /// Holdings of the company go with it (FK cascade)
    pub async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

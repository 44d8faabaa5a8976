use chrono::Utc;
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::database::models::User;
use crate::database::DatabaseError;
use crate::types::Role;

const USER_COLUMNS: &str = r#"
    SELECT u.id, u.email, u.password_hash, u.display_name, r.code AS role_code,
           u.is_active, u.created_at
    FROM users u
    JOIN roles r ON r.id = u.role_id
"#;

/// Values for a freshly registered account
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub display_name: &'a str,
    pub role_id: i64,
}

pub struct UserRepository {
    pool: SqlitePool,
}

async fn fetch_by_id<'e, E>(executor: E, id: i64) -> Result<Option<User>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, User>(&format!("{USER_COLUMNS} WHERE u.id = ?"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Any account with this email, active or not
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(&format!("{USER_COLUMNS} WHERE u.email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "{USER_COLUMNS} WHERE u.email = ? AND u.is_active = 1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn role_id_by_code(&self, role: Role) -> Result<Option<i64>, DatabaseError> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM roles WHERE code = ?")
            .bind(role.code())
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }

    /// Inserts an active account and reads it back in the same transaction
    pub async fn create(&self, new_user: NewUser<'_>) -> Result<User, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            r#"
            INSERT INTO users (email, password_hash, display_name, role_id, is_active, created_at)
            VALUES (?, ?, ?, ?, 1, ?)
            "#,
        )
        .bind(new_user.email)
        .bind(new_user.password_hash)
        .bind(new_user.display_name)
        .bind(new_user.role_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let user = fetch_by_id(&mut *tx, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;

        Ok(user)
    }

    /// Changes an account's role. Returns false when no such email exists.
    pub async fn set_role(&self, email: &str, role: Role) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            "UPDATE users SET role_id = (SELECT id FROM roles WHERE code = ?) WHERE email = ?",
        )
        .bind(role.code())
        .bind(email)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

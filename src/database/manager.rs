use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Executor;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::auth::password::hash_password;
use crate::auth::AuthError;
use crate::config::DatabaseConfig;
use crate::types::Role;

use super::repositories::{
    CompanyRepository, ShareholderRepository, ShareholdingRepository, UserRepository,
};

const SCHEMA_SQL: &str = include_str!("sql/schema.sql");
const REFERENCE_DATA_SQL: &str = include_str!("sql/reference_data.sql");
const DEMO_DATA_SQL: &str = include_str!("sql/demo_data.sql");

/// Errors from the store
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    return DatabaseError::UniqueViolation(db_err.message().to_string())
                }
                ErrorKind::ForeignKeyViolation => {
                    return DatabaseError::ForeignKeyViolation(db_err.message().to_string())
                }
                _ => {}
            }
        }
        DatabaseError::Sqlx(err)
    }
}

/// Demo account created by `db seed`
struct DemoUser {
    id: i64,
    email: &'static str,
    password: &'static str,
    display_name: &'static str,
    role: Role,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        id: 1,
        email: "analyst@example.com",
        password: "analyst123",
        display_name: "Demo Analyst",
        role: Role::Analyst,
    },
    DemoUser {
        id: 2,
        email: "viewer@example.com",
        password: "viewer123",
        display_name: "Demo Viewer",
        role: Role::Viewer,
    },
];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl From<sqlx::Error> for SeedError {
    fn from(err: sqlx::Error) -> Self {
        SeedError::Database(err.into())
    }
}

/// Store handle shared by every request. Cloning is cheap (the pool is an `Arc`).
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout));

        // An in-memory database lives exactly as long as its connection
        if Self::is_memory_url(&config.url) {
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        info!("Connected to database at: {}", config.url);
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn is_memory_url(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }

    /// Creates missing tables and indexes. Safe to run repeatedly.
    pub async fn apply_schema(&self) -> Result<(), DatabaseError> {
        self.pool.execute(SCHEMA_SQL).await?;
        info!("Schema applied");
        Ok(())
    }

    /// Roles and company types. Registration depends on the VIEWER role existing.
    pub async fn seed_reference_data(&self) -> Result<(), DatabaseError> {
        self.pool.execute(REFERENCE_DATA_SQL).await?;
        info!("Reference data inserted");
        Ok(())
    }

    /// Reference data plus demo accounts, companies, shareholders and holdings.
    pub async fn seed_demo_data(&self) -> Result<(), SeedError> {
        self.seed_reference_data().await?;

        let mut tx = self.pool.begin().await?;
        for user in DEMO_USERS {
            let password_hash = hash_password(user.password)?;
            sqlx::query(
                r#"
                INSERT OR IGNORE INTO users (id, email, password_hash, display_name, role_id, is_active, created_at)
                SELECT ?, ?, ?, ?, r.id, 1, ?
                FROM roles r
                WHERE r.code = ?
                "#,
            )
            .bind(user.id)
            .bind(user.email)
            .bind(password_hash)
            .bind(user.display_name)
            .bind(chrono::Utc::now())
            .bind(user.role.code())
            .execute(&mut *tx)
            .await?;
        }
        (&mut *tx).execute(DEMO_DATA_SQL).await?;
        tx.commit().await?;

        info!("Demo data inserted ({} users)", DEMO_USERS.len());
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    pub fn companies(&self) -> CompanyRepository {
        CompanyRepository::new(self.pool.clone())
    }

    pub fn shareholders(&self) -> ShareholderRepository {
        ShareholderRepository::new(self.pool.clone())
    }

    pub fn shareholdings(&self) -> ShareholdingRepository {
        ShareholdingRepository::new(self.pool.clone())
    }
}

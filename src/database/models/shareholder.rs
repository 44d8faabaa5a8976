use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Shareholder {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub identifier: Option<String>,
    pub notes: Option<String>,
}

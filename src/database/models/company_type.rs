use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyType {
    pub id: i64,
    pub code: String,
    pub label_pl: String,
    pub description: Option<String>,
}

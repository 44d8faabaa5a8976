use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `companies` row joined with its type code and label.
///
/// Serializes as the full row returned by create and update.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub nip: String,
    pub krs: Option<String>,
    pub founded_at: Option<String>,
    pub company_type_id: i64,
    pub share_capital: f64,
    pub last_valuation: Option<f64>,
    pub created_by_user_id: Option<i64>,
    pub is_restricted: bool,
    pub notes: Option<String>,
    pub company_type_code: String,
    pub company_type_label: String,
    /// Only populated by the detail query
    #[sqlx(default)]
    #[serde(skip)]
    pub created_by_name: Option<String>,
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Shareholding {
    pub id: i64,
    pub company_id: i64,
    pub shareholder_id: i64,
    pub shares_owned: i64,
    pub acquired_at: Option<String>,
    pub source: Option<String>,
}

/// A holding seen from its company, joined with the shareholder's name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyHolding {
    pub id: i64,
    pub shares_owned: i64,
    pub acquired_at: Option<String>,
    pub source: Option<String>,
    pub shareholder_id: i64,
    pub shareholder_name: String,
    pub shareholder_last_name: String,
}

/// A holding seen from its shareholder, joined with the company's name and NIP
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShareholderHolding {
    pub id: i64,
    pub shares_owned: i64,
    pub acquired_at: Option<String>,
    pub source: Option<String>,
    pub company_id: i64,
    pub company_name: String,
    pub company_nip: String,
}

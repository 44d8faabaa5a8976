// handlers/protected/companies/mod.rs - /api/companies

pub mod create;
pub mod delete;
pub mod list;
pub mod show;
pub mod types;
pub mod types_as_id;
pub mod update;

pub use create::company_post;
pub use delete::company_delete;
pub use list::companies_get;
pub use show::company_get;
pub use types::company_types_get;
pub use types_as_id::company_types_as_id;
pub use update::company_put;

pub(crate) const INVALID_COMPANY_ID: &str = "Invalid company id.";
pub(crate) const COMPANY_NOT_FOUND: &str = "Company not found.";

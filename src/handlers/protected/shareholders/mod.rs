// handlers/protected/shareholders/mod.rs - /api/shareholders

pub mod create;
pub mod delete;
pub mod list;
pub mod shareholdings_as_id;
pub mod show;
pub mod update;

pub use create::shareholder_post;
pub use delete::shareholder_delete;
pub use list::shareholders_get;
pub use shareholdings_as_id::shareholdings_as_id;
pub use show::shareholder_get;
pub use update::shareholder_put;

pub(crate) const INVALID_SHAREHOLDER_ID: &str = "Invalid shareholder id.";
pub(crate) const SHAREHOLDER_NOT_FOUND: &str = "Shareholder not found.";

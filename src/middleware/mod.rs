pub mod auth;
pub mod json;
pub mod response;

pub use auth::{optional_auth, require_analyst, require_auth, MaybeAuthUser};
pub use json::JsonBody;
pub use response::{ApiResponse, ApiResult};

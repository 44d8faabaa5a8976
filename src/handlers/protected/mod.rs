// handlers/protected/mod.rs - token-aware endpoints
//
// Reads run behind optional auth and shape their output for guests.
// Mutations run behind the ANALYST gate and re-check ownership per row.

pub mod auth;
pub mod companies;
pub mod shareholders;
pub mod shareholdings;

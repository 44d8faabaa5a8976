// handlers/protected/auth/mod.rs - endpoints for an authenticated caller

pub mod me;

pub use me::me_get;

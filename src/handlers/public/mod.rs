// handlers/public/mod.rs - endpoints that never look at a token

pub mod auth;
pub mod health;

pub use health::health_get;

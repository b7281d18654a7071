//! Vault asset router — library crate for the REST server.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `vault-e2e-tests`) can access internal types like `AppState` and
//! `build_router`.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

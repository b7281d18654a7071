//! Intent resolution for the Vault asset router.
//!
//! Converts free-text asset requests ("Oracle Jet logo for my presentation")
//! into a structured [`vault_protocol::Intent`] against the static knowledge
//! base.
//!
//! Two strategies:
//! - **Pattern-matching** (local, deterministic): product/section/use-case/
//!   region extractors over the catalog.
//! - **Model-assisted** (best-effort): external chat-completion endpoint with
//!   a strict JSON response contract, falling back to pattern matching on any
//!   failure.

pub mod catalog;
pub mod extract;
pub mod resolver;

pub use catalog::Catalog;
pub use resolver::{IntentResolver, IntentStrategy};
pub use resolver::model::{ModelConfig, ModelStrategy};

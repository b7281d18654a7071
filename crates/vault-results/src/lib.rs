//! Result synthesis and follow-up guidance for resolved intents.
//!
//! - [`synth`] — templated candidate results when no live DAM connection is
//!   available (the default).
//! - [`live`] + [`client`] — live-integration variant: search the DAM over
//!   HTTP and blend per-asset confidence from intent signals.
//! - [`suggest`] — follow-up suggestions derived from intent + results.

pub mod client;
pub mod live;
pub mod suggest;
pub mod synth;

pub use client::{DamClient, DamConfig, DamError};
pub use suggest::suggest;
pub use synth::{MAX_RESULTS, synthesize};

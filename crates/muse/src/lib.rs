//! AI-assisted chord progression generation.
//!
//! Sends a single natural-language instruction to a generateContent-style
//! API and parses a JSON array of progressions out of the free-text reply.
//! Every failure mode, from a network timeout to an unparseable response,
//! falls back to the deterministic rule-based generator in `harmony`, so
//! callers always get a usable result.

pub mod client;
pub mod error;
pub mod extract;
pub mod generate;
pub mod maintenance;
pub mod types;

pub use client::MuseClient;
pub use error::MuseError;
pub use generate::AssistedGenerator;
pub use maintenance::MaintenanceSwitch;

//! `modshop-core` — shared foundation for the order-management demo.
//!
//! This crate contains **pure domain** primitives (no I/O concerns): the
//! error model and the per-run shared context (settings + system event log).

pub mod context;
pub mod error;

pub use context::{AppContext, EventLog, LogEntry, Settings, SettingsUpdate};
pub use error::{DomainError, DomainResult};

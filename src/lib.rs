//! Puyo Drop (workspace facade crate).
//!
//! Re-exports the workspace crates as `puyo_drop::{core,input,term,types}` and
//! hosts the pieces only the binary needs: run configuration and the JSON-lines
//! event log.

pub use puyo_drop_core as core;
pub use puyo_drop_input as input;
pub use puyo_drop_term as term;
pub use puyo_drop_types as types;

pub mod config;
pub mod event_log;

pub use config::RunConfig;
pub use event_log::{EventLog, EventRecord};

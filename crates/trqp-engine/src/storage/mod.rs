//! Storage layer for registry snapshots.
//!
//! The engine evaluates purely in memory; this module handles getting a
//! consistent snapshot into memory from a file and back out.
//!
//! # Modules
//!
//! - [`snapshot_file`] — versioned JSON snapshot save/load.

pub mod snapshot_file;

pub use snapshot_file::{load_snapshot, save_snapshot};

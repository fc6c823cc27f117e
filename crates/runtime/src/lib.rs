//! Blocking file persistence for character chronicles.
//!
//! This crate owns every filesystem concern of the system: writing a
//! character to a chronicle file, reading one back (logging per-line
//! warnings the codec surfaced), and the directory-backed
//! [`ChronicleVault`] used to keep a collection of saves. All I/O is
//! synchronous whole-file read/write; failures are reported once to the
//! caller and never abort the process.
pub mod repository;

pub use repository::{
    ChronicleVault, RepositoryError, Result, load_chronicle, save_chronicle,
};

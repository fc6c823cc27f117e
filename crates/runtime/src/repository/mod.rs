//! Repository layer for chronicle files.
//!
//! Two levels of access:
//! - path-level operations ([`save_chronicle`], [`load_chronicle`]) for a
//!   caller-chosen file anywhere on disk
//! - [`ChronicleVault`], a directory of saves addressed by character name
//!
//! Codec warnings raised while loading are logged here and skipped; only
//! completeness and class-validity failures abort a load.

mod chronicle;
mod error;
mod vault;

pub use chronicle::{load_chronicle, save_chronicle};
pub use error::{RepositoryError, Result};
pub use vault::ChronicleVault;

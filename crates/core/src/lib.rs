//! Deterministic character rules and the chronicle text codec.
//!
//! `chronicle-core` defines the canonical character model (classes, the
//! linear stat progression, creation and level-up) together with the
//! line-oriented chronicle format used by save files. Everything here is
//! pure: no I/O, no clocks, no global mutable state. File access lives in
//! `chronicle-runtime`, presentation in the client binary.
pub mod character;
pub mod chronicle;
pub mod class;
pub mod config;
pub mod stats;

pub use character::{Character, UnknownClassError};
pub use chronicle::{
    DecodeError, Field, LineWarning, PartialRecord, decode, encode, scan,
};
pub use class::{CharacterClass, ClassProfile};
pub use config::{CREATION_LEVEL, STARTING_GOLD};
pub use stats::StatBlock;

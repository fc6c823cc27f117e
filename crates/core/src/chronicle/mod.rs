//! The chronicle text codec.
//!
//! A chronicle file is a line-oriented `Label: value` document with seven
//! fixed fields. The codec favors maximal recovery over strict rejection:
//! scanning skips blank lines, ignores unknown labels, and downgrades
//! per-line problems (missing separator, non-numeric value) to warnings
//! while continuing. Completeness and class validity are enforced once, as
//! a final gate, when the scanned [`PartialRecord`] is assembled into a
//! [`Character`]. A structurally complete file can therefore still fail the
//! gate if corruption left a required field absent.
//!
//! Modules are organized by direction: `field` names the seven labels,
//! `encode` renders a character to the fixed seven-line layout, and
//! `decode` scans text into a partial record plus warnings and gates it.

mod decode;
mod encode;
mod field;

pub use decode::{DecodeError, LineWarning, PartialRecord, scan};
pub use encode::encode;
pub use field::Field;

use crate::character::Character;

/// Scan `input` and run the completeness/class gate in one call.
///
/// Warnings are returned alongside the outcome so callers can report them
/// even when the gate fails.
pub fn decode(input: &str) -> (Result<Character, DecodeError>, Vec<LineWarning>) {
    let (record, warnings) = scan(input);
    (record.into_character(), warnings)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::character::Character;
    use crate::class::CharacterClass;

    #[test]
    fn round_trip_is_identity_for_every_class() {
        for class in CharacterClass::iter() {
            let mut original = Character::new("Rowan", class);
            original.level_up();
            let (decoded, warnings) = decode(&encode(&original));
            assert!(warnings.is_empty());
            assert_eq!(decoded.unwrap(), original);
        }
    }

    #[test]
    fn round_trip_preserves_names_containing_colons() {
        let original = Character::new("Aria: the Bold", CharacterClass::Mage);
        let (decoded, warnings) = decode(&encode(&original));
        assert!(warnings.is_empty());
        assert_eq!(decoded.unwrap(), original);
    }
}

//! The character record and its lifecycle operations.
//!
//! A [`Character`] is created at level 1 with stats computed from its class
//! and is mutated in place only by [`Character::level_up`], which bumps the
//! level and recomputes the stats. Records produced by this module always
//! satisfy `stats == StatBlock::compute(class, level)`; records decoded
//! from a chronicle file keep whatever values the file carried.

use std::str::FromStr;

use strum::VariantNames;

use crate::class::CharacterClass;
use crate::config::{CREATION_LEVEL, STARTING_GOLD};
use crate::stats::StatBlock;

/// Error raised when creating a character from an unrecognized class name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown class '{input}'; valid classes are: {}", CharacterClass::VARIANTS.join(", "))]
pub struct UnknownClassError {
    /// The class name as the caller supplied it.
    pub input: String,
}

/// A single character record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub class: CharacterClass,
    pub level: i32,
    pub stats: StatBlock,
    pub gold: i32,
}

impl Character {
    /// Create a level-1 character of a known class.
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        Self {
            name: name.into(),
            class,
            level: CREATION_LEVEL,
            stats: StatBlock::compute(class, CREATION_LEVEL),
            gold: STARTING_GOLD,
        }
    }

    /// Create a character from a textual class name.
    ///
    /// The class name is matched case-insensitively against the known
    /// classes. An unknown name fails without producing a partial record.
    pub fn create(
        name: impl Into<String>,
        class_input: &str,
    ) -> Result<Self, UnknownClassError> {
        let class = CharacterClass::from_str(class_input).map_err(|_| UnknownClassError {
            input: class_input.to_owned(),
        })?;
        Ok(Self::new(name, class))
    }

    /// Advance one level and recompute all three stats.
    ///
    /// Gold is untouched by leveling.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.stats = StatBlock::compute(self.class, self.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_is_case_insensitive() {
        let lower = Character::create("X", "mage").unwrap();
        let upper = Character::create("X", "MAGE").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn fresh_mage_matches_reference_record() {
        let aria = Character::create("Aria", "Mage").unwrap();
        assert_eq!(aria.name, "Aria");
        assert_eq!(aria.class, CharacterClass::Mage);
        assert_eq!(aria.level, 1);
        assert_eq!(aria.stats, StatBlock::new(5, 20, 100));
        assert_eq!(aria.gold, 100);
    }

    #[test]
    fn unknown_class_is_rejected_with_valid_names() {
        let err = Character::create("BadHero", "Archivist").unwrap_err();
        assert_eq!(err.input, "Archivist");
        let message = err.to_string();
        assert!(message.contains("Archivist"));
        assert!(message.contains("WARRIOR"));
        assert!(message.contains("CLERIC"));
    }

    #[test]
    fn level_up_recomputes_stats_and_keeps_gold() {
        let mut grog = Character::create("Grog", "Warrior").unwrap();
        for _ in 0..4 {
            grog.level_up();
        }
        assert_eq!(grog.level, 5);
        assert_eq!(grog.stats, StatBlock::compute(CharacterClass::Warrior, 5));
        assert_eq!(grog.gold, 100);
    }

    #[test]
    fn repeated_level_ups_track_the_formula() {
        let mut aria = Character::create("Aria", "Mage").unwrap();
        aria.level_up();
        aria.level_up();
        assert_eq!(aria.level, 3);
        assert_eq!(aria.stats, StatBlock::new(7, 30, 140));
    }
}

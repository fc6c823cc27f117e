//! Character classes and their stat profiles.
//!
//! The four classes form a process-wide constant table: each class carries
//! base values and per-level growth rates for the three stats. The table is
//! baked into the binary as a `const fn` lookup and never mutated.

/// The playable character classes.
///
/// The canonical spelling is uppercase (`WARRIOR`), which is also what the
/// chronicle format stores. Parsing accepts any ASCII casing, so player
/// input like `"Mage"` or `"mage"` resolves to the same class.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::VariantNames,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum CharacterClass {
    /// High strength, low magic, high health.
    Warrior,
    /// Low strength, high magic, medium health.
    Mage,
    /// Medium everything, modest growth across the board.
    Rogue,
    /// Medium strength, high magic, very high health.
    Cleric,
}

/// Base values and per-level growth rates for one class.
///
/// Growth rate is the per-level increment added to the base stat:
/// `stat = base + level * growth`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassProfile {
    pub strength_base: i32,
    pub magic_base: i32,
    pub health_base: i32,
    pub strength_growth: i32,
    pub magic_growth: i32,
    pub health_growth: i32,
}

impl CharacterClass {
    /// Look up this class's stat profile in the constant table.
    ///
    /// Total over the enum; there is no unknown-class case once a value of
    /// this type exists.
    pub const fn profile(self) -> ClassProfile {
        match self {
            Self::Warrior => ClassProfile {
                strength_base: 12,
                magic_base: 4,
                health_base: 100,
                strength_growth: 4,
                magic_growth: 1,
                health_growth: 30,
            },
            Self::Mage => ClassProfile {
                strength_base: 4,
                magic_base: 15,
                health_base: 80,
                strength_growth: 1,
                magic_growth: 5,
                health_growth: 20,
            },
            Self::Rogue => ClassProfile {
                strength_base: 8,
                magic_base: 8,
                health_base: 90,
                strength_growth: 2,
                magic_growth: 2,
                health_growth: 25,
            },
            Self::Cleric => ClassProfile {
                strength_base: 8,
                magic_base: 10,
                health_base: 110,
                strength_growth: 2,
                magic_growth: 3,
                health_growth: 35,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::VariantNames;

    use super::*;

    #[test]
    fn parses_any_ascii_casing() {
        for input in ["MAGE", "Mage", "mage", "mAgE"] {
            assert_eq!(CharacterClass::from_str(input), Ok(CharacterClass::Mage));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(CharacterClass::from_str("Archivist").is_err());
        assert!(CharacterClass::from_str("").is_err());
    }

    #[test]
    fn displays_canonical_uppercase() {
        assert_eq!(CharacterClass::Warrior.to_string(), "WARRIOR");
        assert_eq!(CharacterClass::Cleric.as_ref(), "CLERIC");
    }

    #[test]
    fn variant_names_cover_all_classes() {
        assert_eq!(
            CharacterClass::VARIANTS,
            &["WARRIOR", "MAGE", "ROGUE", "CLERIC"]
        );
    }
}

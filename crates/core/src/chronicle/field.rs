//! The seven labeled fields of a chronicle file.

/// A recognized chronicle label.
///
/// Label matching during a scan is exact (case-sensitive); anything else on
/// the label side of a line is treated as an unknown label and ignored.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "title_case")]
pub enum Field {
    CharacterName,
    Class,
    Level,
    Strength,
    Magic,
    Health,
    Gold,
}

impl Field {
    /// Whether this field's value must parse as an integer.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Level | Self::Strength | Self::Magic | Self::Health | Self::Gold
        )
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn labels_use_spaced_title_case() {
        assert_eq!(Field::CharacterName.to_string(), "Character Name");
        assert_eq!(Field::Gold.to_string(), "Gold");
    }

    #[test]
    fn label_matching_is_case_sensitive() {
        assert_eq!(Field::from_str("Character Name"), Ok(Field::CharacterName));
        assert!(Field::from_str("character name").is_err());
        assert!(Field::from_str("CLASS").is_err());
    }

    #[test]
    fn exactly_the_five_numeric_fields_are_numeric() {
        assert!(!Field::CharacterName.is_numeric());
        assert!(!Field::Class.is_numeric());
        for field in [
            Field::Level,
            Field::Strength,
            Field::Magic,
            Field::Health,
            Field::Gold,
        ] {
            assert!(field.is_numeric());
        }
    }
}

//! Scanning chronicle text and gating the result.
//!
//! [`scan`] is a single pass over the lines that folds into a
//! [`PartialRecord`] plus a list of [`LineWarning`]s; it never aborts
//! early. [`PartialRecord::into_character`] is the final gate that turns
//! the fold result into a [`Character`] or a [`DecodeError`].

use std::str::FromStr;

use crate::character::Character;
use crate::class::CharacterClass;
use crate::stats::StatBlock;

use super::field::Field;

/// A per-line problem found while scanning.
///
/// Warnings are recoverable: the offending line is skipped and scanning
/// continues. Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LineWarning {
    /// The line has no `:` separator at all.
    #[error("line {line}: improperly formatted line (no ':' separator): '{content}'")]
    MissingSeparator { line: usize, content: String },

    /// A numeric field carried a value that does not parse as an integer.
    /// The field is left absent, never defaulted.
    #[error("line {line}: corrupted value for {field}: '{value}'")]
    InvalidNumber {
        line: usize,
        field: Field,
        value: String,
    },
}

/// Error raised by the final gate over a scanned record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// One or more of the seven required fields never appeared (or was
    /// skipped as corrupted).
    #[error("chronicle is missing essential fields: {}", .fields.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(", "))]
    MissingFields { fields: Vec<Field> },

    /// The recovered class value names none of the known classes.
    #[error("chronicle names an invalid class '{value}'")]
    InvalidClass { value: String },
}

/// The fold state of a scan: every field independently present or absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialRecord {
    pub name: Option<String>,
    pub class: Option<String>,
    pub level: Option<i32>,
    pub strength: Option<i32>,
    pub magic: Option<i32>,
    pub health: Option<i32>,
    pub gold: Option<i32>,
}

impl PartialRecord {
    /// The required fields still absent from this record.
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        for (field, absent) in [
            (Field::CharacterName, self.name.is_none()),
            (Field::Class, self.class.is_none()),
            (Field::Level, self.level.is_none()),
            (Field::Strength, self.strength.is_none()),
            (Field::Magic, self.magic.is_none()),
            (Field::Health, self.health.is_none()),
            (Field::Gold, self.gold.is_none()),
        ] {
            if absent {
                missing.push(field);
            }
        }
        missing
    }

    /// The final gate: verify completeness, then class validity.
    ///
    /// Field values pass through verbatim; the gate never recomputes stats
    /// from the class and level it recovered.
    pub fn into_character(self) -> Result<Character, DecodeError> {
        let missing = self.missing_fields();
        match (
            self.name, self.class, self.level, self.strength, self.magic, self.health, self.gold,
        ) {
            (
                Some(name),
                Some(class_name),
                Some(level),
                Some(strength),
                Some(magic),
                Some(health),
                Some(gold),
            ) => match CharacterClass::from_str(&class_name) {
                Ok(class) => Ok(Character {
                    name,
                    class,
                    level,
                    stats: StatBlock::new(strength, magic, health),
                    gold,
                }),
                Err(_) => Err(DecodeError::InvalidClass { value: class_name }),
            },
            _ => Err(DecodeError::MissingFields { fields: missing }),
        }
    }

    fn set_numeric(&mut self, field: Field, value: i32) {
        match field {
            Field::Level => self.level = Some(value),
            Field::Strength => self.strength = Some(value),
            Field::Magic => self.magic = Some(value),
            Field::Health => self.health = Some(value),
            Field::Gold => self.gold = Some(value),
            Field::CharacterName | Field::Class => {}
        }
    }
}

/// Fold chronicle text into a partial record and a list of warnings.
///
/// - blank lines are skipped silently
/// - each non-blank line splits into label and value at the FIRST colon,
///   both trimmed of surrounding whitespace
/// - unknown labels are ignored (forward compatibility)
/// - a later occurrence of a label overwrites an earlier one
/// - per-line problems become warnings and never abort the scan
pub fn scan(input: &str) -> (PartialRecord, Vec<LineWarning>) {
    let mut record = PartialRecord::default();
    let mut warnings = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_number = index + 1;

        let Some((label, value)) = line.split_once(':') else {
            warnings.push(LineWarning::MissingSeparator {
                line: line_number,
                content: line.to_owned(),
            });
            continue;
        };

        let Ok(field) = Field::from_str(label.trim()) else {
            continue;
        };
        let value = value.trim();

        if field.is_numeric() {
            match value.parse::<i32>() {
                Ok(parsed) => record.set_numeric(field, parsed),
                Err(_) => warnings.push(LineWarning::InvalidNumber {
                    line: line_number,
                    field,
                    value: value.to_owned(),
                }),
            }
        } else {
            match field {
                Field::CharacterName => record.name = Some(value.to_owned()),
                Field::Class => record.class = Some(value.to_owned()),
                _ => {}
            }
        }
    }

    (record, warnings)
}

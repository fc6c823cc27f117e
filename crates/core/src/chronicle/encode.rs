//! Rendering a character to chronicle text.

use crate::character::Character;

/// Render `character` as chronicle text: exactly seven `Label: value`
/// lines in fixed order, newline-terminated, integers in plain decimal,
/// class in its canonical uppercase spelling.
pub fn encode(character: &Character) -> String {
    format!(
        "Character Name: {name}\n\
         Class: {class}\n\
         Level: {level}\n\
         Strength: {strength}\n\
         Magic: {magic}\n\
         Health: {health}\n\
         Gold: {gold}\n",
        name = character.name,
        class = character.class,
        level = character.level,
        strength = character.stats.strength,
        magic = character.stats.magic,
        health = character.stats.health,
        gold = character.gold,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::CharacterClass;

    #[test]
    fn emits_the_fixed_seven_line_layout() {
        let aria = Character::new("Aria", CharacterClass::Mage);
        assert_eq!(
            encode(&aria),
            "Character Name: Aria\n\
             Class: MAGE\n\
             Level: 1\n\
             Strength: 5\n\
             Magic: 20\n\
             Health: 100\n\
             Gold: 100\n"
        );
    }

    #[test]
    fn negative_values_render_in_plain_decimal() {
        let mut grog = Character::new("Grog", CharacterClass::Warrior);
        grog.stats.strength = -3;
        assert!(encode(&grog).contains("Strength: -3\n"));
    }
}

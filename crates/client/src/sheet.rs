//! Fixed-layout character sheet output.
//!
//! Sheets go to stdout; diagnostics stay on stderr via tracing. ASCII
//! only, colored with `owo-colors`.

use owo_colors::OwoColorize;

use chronicle_core::Character;

/// Print the character sheet.
pub fn display_character(character: &Character) {
    println!();
    println!("{}", "=== CHARACTER SHEET ===".bold());
    println!("Name:     {}", character.name.cyan());
    println!("Class:    {}", character.class.yellow());
    println!("Level:    {}", character.level);
    println!("{}", "-------------------------".dimmed());
    println!("Strength: {}", character.stats.strength);
    println!("Magic:    {}", character.stats.magic);
    println!("Health:   {}", character.stats.health.green());
    println!("Gold:     {}", character.gold.yellow());
    println!("{}", "=========================".dimmed());
    println!();
}

//! Chronicle client binary.
//!
//! Composition root for the character chronicle toolkit: wires the
//! environment-driven configuration, logging, and the chronicle vault
//! together, then walks a demonstration sequence over the library:
//! creation, leveling, the persistence round-trip, and the rejected-input
//! paths.
//!
//! ```bash
//! # default vault location (platform data dir)
//! cargo run -p chronicle-client
//!
//! # explicit vault directory
//! CHRONICLE_DIR=/tmp/chronicles cargo run -p chronicle-client
//! ```

mod config;
mod logging;
mod sheet;

use anyhow::Result;

use chronicle_core::Character;
use chronicle_runtime::{ChronicleVault, load_chronicle};

use crate::config::ClientConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::setup_logging();

    let config = ClientConfig::from_env();
    tracing::info!("chronicle client starting");
    tracing::info!("vault directory: {}", config.vault_dir.display());

    let vault = ChronicleVault::new(&config.vault_dir)?;
    run_demo(&vault)
}

/// The demonstration sequence: one pass over every library operation.
fn run_demo(vault: &ChronicleVault) -> Result<()> {
    // Creation and display.
    let mut aria = Character::create("Aria", "Mage")?;
    tracing::info!("created '{}' ({}) at level {}", aria.name, aria.class, aria.level);
    sheet::display_character(&aria);

    // Leveling recomputes stats; gold stays put.
    aria.level_up();
    aria.level_up();
    tracing::info!("{} reached level {}", aria.name, aria.level);
    sheet::display_character(&aria);

    // Persistence round-trip through the vault.
    let path = vault.save(&aria)?;
    tracing::info!("saved chronicle to {}", path.display());

    let loaded = vault.load(&aria.name)?;
    tracing::info!("loaded '{}' back from the vault", loaded.name);
    sheet::display_character(&loaded);

    // Unknown classes are rejected without producing a record.
    if let Err(err) = Character::create("BadHero", "Archivist") {
        tracing::warn!("creation rejected: {err}");
    }

    // A chronicle that was never written fails to load; leveling a
    // character that is not there is guarded here at the driver.
    let mut wanderer = match load_chronicle("non_existent_file.txt") {
        Ok(character) => Some(character),
        Err(err) => {
            tracing::warn!("load failed: {err}");
            None
        }
    };
    match wanderer.as_mut() {
        Some(character) => character.level_up(),
        None => tracing::warn!("cannot level up: no character was loaded"),
    }

    // A warrior taken to level 5, saved alongside Aria.
    let mut grog = Character::create("Grog", "Warrior")?;
    for _ in 0..4 {
        grog.level_up();
    }
    tracing::info!("{} reached level {}", grog.name, grog.level);
    sheet::display_character(&grog);
    vault.save(&grog)?;

    let saved = vault.list()?;
    tracing::info!("vault now holds: {}", saved.join(", "));

    Ok(())
}

//! Path-level save and load of a single chronicle file.

use std::fs;
use std::path::Path;

use chronicle_core::{Character, decode, encode};

use super::error::{RepositoryError, Result};

/// Write `character` to `path` as chronicle text.
///
/// The content is written to a sibling temp file first and renamed into
/// place, so a failed write never leaves a truncated chronicle behind.
/// Any I/O failure (permissions, full disk, invalid path) is reported as
/// [`RepositoryError::Write`].
pub fn save_chronicle(character: &Character, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, encode(character)).map_err(RepositoryError::Write)?;
    fs::rename(&temp_path, path).map_err(RepositoryError::Write)?;

    tracing::debug!("saved chronicle of '{}' to {}", character.name, path.display());

    Ok(())
}

/// Read the chronicle at `path` back into a character.
///
/// A missing path is [`RepositoryError::NotFound`]; an unreadable file is
/// [`RepositoryError::Read`]. Per-line codec warnings are logged and
/// skipped; only the final completeness/class gate can fail the load.
pub fn load_chronicle(path: impl AsRef<Path>) -> Result<Character> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RepositoryError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path).map_err(RepositoryError::Read)?;

    let (outcome, warnings) = decode(&text);
    for warning in &warnings {
        tracing::warn!("{}: {}", path.display(), warning);
    }

    let character = outcome?;
    tracing::debug!(
        "loaded chronicle of '{}' from {}",
        character.name,
        path.display()
    );

    Ok(character)
}

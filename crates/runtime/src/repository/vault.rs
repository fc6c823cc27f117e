//! Directory-backed store of chronicle files, addressed by character name.

use std::fs;
use std::path::{Path, PathBuf};

use chronicle_core::Character;

use super::chronicle::{load_chronicle, save_chronicle};
use super::error::{RepositoryError, Result};

const CHRONICLE_EXT: &str = "chronicle";

/// A directory of chronicles, one file per character.
///
/// Files live at `<base_dir>/<slug>.chronicle` where the slug is derived
/// from the character name (lowercased, non-alphanumeric runs collapsed
/// to `_`). Concurrent access to the same vault is out of scope.
pub struct ChronicleVault {
    base_dir: PathBuf,
}

impl ChronicleVault {
    /// Open a vault at `base_dir`, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Write)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The path a character of this name is stored at.
    pub fn chronicle_path(&self, name: &str) -> PathBuf {
        self.base_dir
            .join(format!("{}.{CHRONICLE_EXT}", slug(name)))
    }

    /// Save `character`, returning the path it was written to.
    pub fn save(&self, character: &Character) -> Result<PathBuf> {
        let path = self.chronicle_path(&character.name);
        save_chronicle(character, &path)?;
        Ok(path)
    }

    /// Load the chronicle saved under `name`.
    pub fn load(&self, name: &str) -> Result<Character> {
        load_chronicle(self.chronicle_path(name))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.chronicle_path(name).exists()
    }

    /// Delete the chronicle saved under `name`, if present.
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.chronicle_path(name);
        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Write)?;
            tracing::debug!("deleted chronicle at {}", path.display());
        }
        Ok(())
    }

    /// List the slugs of every chronicle in the vault, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut slugs = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Read)?;
        for entry in entries {
            let entry = entry.map_err(RepositoryError::Read)?;
            let path = entry.path();

            if let Some(file_name) = path.file_name().and_then(|s| s.to_str())
                && let Some(slug) = file_name.strip_suffix(&format!(".{CHRONICLE_EXT}"))
            {
                slugs.push(slug.to_owned());
            }
        }

        slugs.sort_unstable();
        Ok(slugs)
    }
}

/// Derive the file-name slug for a character name.
fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_matches('_').to_owned();
    if slug.is_empty() {
        "unnamed".to_owned()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use chronicle_core::CharacterClass;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn save_load_delete_lifecycle() {
        let temp_dir = TempDir::new().unwrap();
        let vault = ChronicleVault::new(temp_dir.path()).unwrap();

        let grog = Character::new("Grog", CharacterClass::Warrior);
        assert!(!vault.exists("Grog"));

        let path = vault.save(&grog).unwrap();
        assert!(path.ends_with("grog.chronicle"));
        assert!(vault.exists("Grog"));

        let loaded = vault.load("Grog").unwrap();
        assert_eq!(loaded, grog);

        vault.delete("Grog").unwrap();
        assert!(!vault.exists("Grog"));
    }

    #[test]
    fn loading_from_an_empty_vault_reports_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let vault = ChronicleVault::new(temp_dir.path()).unwrap();

        let err = vault.load("Aria").unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[test]
    fn list_returns_sorted_slugs_and_skips_foreign_files() {
        let temp_dir = TempDir::new().unwrap();
        let vault = ChronicleVault::new(temp_dir.path()).unwrap();

        vault.save(&Character::new("Rowan", CharacterClass::Rogue)).unwrap();
        vault.save(&Character::new("Aria", CharacterClass::Mage)).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "not a chronicle").unwrap();

        assert_eq!(vault.list().unwrap(), vec!["aria", "rowan"]);
    }

    #[test]
    fn slugs_are_lowercased_with_collapsed_separators() {
        assert_eq!(slug("Grog"), "grog");
        assert_eq!(slug("Aria the   Bold"), "aria_the_bold");
        assert_eq!(slug("  !! "), "unnamed");
        assert_eq!(slug(""), "unnamed");
    }

    #[test]
    fn deleting_a_missing_chronicle_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let vault = ChronicleVault::new(temp_dir.path()).unwrap();
        assert!(vault.delete("Nobody").is_ok());
    }
}

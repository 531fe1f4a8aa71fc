//! Dark mode preference
//!
//! The flag is read once at startup, falling back to the terminal's own
//! light/dark hint, and written back every time it changes.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name inside the application config directory
const PREFERENCES_FILE: &str = "preferences.toml";

/// Error reading or writing stored preferences
#[derive(Debug)]
pub enum PreferenceError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Preference file I/O failed: {err}"),
            Self::Parse(err) => write!(f, "Preference file is malformed: {err}"),
            Self::Serialize(err) => write!(f, "Could not encode preferences: {err}"),
        }
    }
}

impl std::error::Error for PreferenceError {}

impl From<io::Error> for PreferenceError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Where the dark mode flag lives
pub trait PreferenceStore {
    /// Stored flag, `None` if nothing was saved yet
    ///
    /// # Errors
    /// Returns an error if the stored value cannot be read.
    fn load(&self) -> Result<Option<bool>, PreferenceError>;

    /// Persist the flag
    ///
    /// # Errors
    /// Returns an error if the value cannot be written.
    fn save(&self, dark_mode: bool) -> Result<(), PreferenceError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPreferences {
    dark_mode: Option<bool>,
}

/// TOML file store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user's config directory, if there is one
    #[must_use]
    pub fn in_config_dir() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join("lenape-word-game").join(PREFERENCES_FILE)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Result<Option<bool>, PreferenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let stored: StoredPreferences = toml::from_str(&content).map_err(PreferenceError::Parse)?;
        Ok(stored.dark_mode)
    }

    fn save(&self, dark_mode: bool) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let stored = StoredPreferences {
            dark_mode: Some(dark_mode),
        };
        let content = toml::to_string(&stored).map_err(PreferenceError::Serialize)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-process store, used when there is no config directory
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Cell<Option<bool>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(initial: Option<bool>) -> Self {
        Self {
            value: Cell::new(initial),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<bool>, PreferenceError> {
        Ok(self.value.get())
    }

    fn save(&self, dark_mode: bool) -> Result<(), PreferenceError> {
        self.value.set(Some(dark_mode));
        Ok(())
    }
}

/// Interpret a `COLORFGBG` value such as `15;0` (light text on black)
///
/// The last field is the background palette index; 0-6 and 8 are dark.
#[must_use]
pub fn dark_from_colorfgbg(value: &str) -> Option<bool> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(matches!(background, 0..=6 | 8))
}

/// The terminal's light/dark hint, light when unknown
#[must_use]
pub fn system_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|value| dark_from_colorfgbg(&value))
        .unwrap_or(false)
}

/// Current theme choice with write-through persistence
pub struct Preferences {
    dark_mode: bool,
    store: Box<dyn PreferenceStore>,
}

impl Preferences {
    /// Read the stored flag, or use `system_default` when none is stored
    ///
    /// A broken store is logged and treated as empty.
    #[must_use]
    pub fn init(store: Box<dyn PreferenceStore>, system_default: bool) -> Self {
        let dark_mode = match store.load() {
            Ok(Some(saved)) => saved,
            Ok(None) => system_default,
            Err(err) => {
                tracing::warn!(%err, "could not read preferences, using system default");
                system_default
            }
        };
        Self { dark_mode, store }
    }

    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Change the flag and persist it
    ///
    /// The in-memory value changes even if saving fails.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<(), PreferenceError> {
        self.dark_mode = dark_mode;
        self.store.save(dark_mode)
    }

    /// Flip the flag and persist it, returning the new value
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn toggle_dark_mode(&mut self) -> Result<bool, PreferenceError> {
        let dark_mode = !self.dark_mode;
        self.set_dark_mode(dark_mode)?;
        Ok(dark_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    /// Memory store that can be inspected after being boxed
    struct SharedStore(Rc<MemoryStore>);

    impl PreferenceStore for SharedStore {
        fn load(&self) -> Result<Option<bool>, PreferenceError> {
            self.0.load()
        }

        fn save(&self, dark_mode: bool) -> Result<(), PreferenceError> {
            self.0.save(dark_mode)
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Result<Option<bool>, PreferenceError> {
            Err(io::Error::other("unreadable").into())
        }

        fn save(&self, _dark_mode: bool) -> Result<(), PreferenceError> {
            Err(io::Error::other("read-only").into())
        }
    }

    #[test]
    fn init_prefers_stored_value() {
        let prefs = Preferences::init(Box::new(MemoryStore::new(Some(false))), true);
        assert!(!prefs.dark_mode());
    }

    #[test]
    fn init_falls_back_to_system_default() {
        let prefs = Preferences::init(Box::new(MemoryStore::new(None)), true);
        assert!(prefs.dark_mode());
    }

    #[test]
    fn init_survives_broken_store() {
        let prefs = Preferences::init(Box::new(BrokenStore), true);
        assert!(prefs.dark_mode());
    }

    #[test]
    fn toggle_writes_through() {
        let shared = Rc::new(MemoryStore::new(None));
        let mut prefs = Preferences::init(Box::new(SharedStore(Rc::clone(&shared))), false);

        assert!(prefs.toggle_dark_mode().unwrap());
        assert_eq!(shared.load().unwrap(), Some(true));

        assert!(!prefs.toggle_dark_mode().unwrap());
        assert_eq!(shared.load().unwrap(), Some(false));
    }

    #[test]
    fn failed_save_still_changes_value() {
        let mut prefs = Preferences::init(Box::new(BrokenStore), false);
        assert!(prefs.set_dark_mode(true).is_err());
        assert!(prefs.dark_mode());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join(PREFERENCES_FILE));

        assert_eq!(store.load().unwrap(), None);
        store.save(true).unwrap();
        assert_eq!(store.load().unwrap(), Some(true));

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("dark_mode = true"));
    }

    #[test]
    fn file_store_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, "dark_mode = \"sometimes\"").unwrap();

        assert!(matches!(
            FileStore::new(path).load(),
            Err(PreferenceError::Parse(_))
        ));
    }

    #[test]
    fn colorfgbg_hint() {
        assert_eq!(dark_from_colorfgbg("15;0"), Some(true));
        assert_eq!(dark_from_colorfgbg("0;15"), Some(false));
        assert_eq!(dark_from_colorfgbg("15;default;8"), Some(true));
        assert_eq!(dark_from_colorfgbg("0;7"), Some(false));
        assert_eq!(dark_from_colorfgbg("garbage"), None);
    }
}

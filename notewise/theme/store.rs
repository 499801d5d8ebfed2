use std::{fmt, str::FromStr};

use crate::{backend::Backends, ThemeError};

/// Local storage key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "notewise_theme";

#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum Mode {
    #[default]
    Dark,
    Light,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool { self == Mode::Dark }

    pub fn toggled(self) -> Self {
        match self {
            Mode::Dark => Mode::Light,
            Mode::Light => Mode::Dark,
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Mode::Dark
        } else {
            Mode::Light
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Mode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Mode::Dark),
            "light" => Ok(Mode::Light),
            _ => Err(ThemeError::UnknownMode(s.to_string())),
        }
    }
}

/// Snapshot handed to consumers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThemePreference {
    pub mode: Mode,
    pub is_dark: bool,
}

impl From<Mode> for ThemePreference {
    fn from(mode: Mode) -> Self {
        Self {
            mode,
            is_dark: mode.is_dark(),
        }
    }
}

/// Sole owner of the current mode.
///
/// Persistence and document failures are logged and swallowed: a broken
/// local storage only means the choice won't survive a reload.
pub struct ThemeStore {
    mode: Mode,
    backends: Backends,
}

impl ThemeStore {
    /// Resolves the starting mode and mirrors it onto the document root.
    pub fn open(backends: Backends) -> Self {
        let store = Self {
            mode: resolve(&backends),
            backends,
        };
        store.mirror();
        store
    }

    pub fn mode(&self) -> Mode { self.mode }

    pub fn preference(&self) -> ThemePreference { self.mode.into() }

    pub fn set(&mut self, mode: Mode) {
        tracing::debug!("theme set to {mode}");
        self.mode = mode;
        if let Err(e) = self.backends.storage.write(STORAGE_KEY, mode.as_str()) {
            tracing::warn!("failed to persist theme {mode}: {e:#}");
        }
        self.mirror();
    }

    /// Flips the mode and returns the new one.
    pub fn toggle(&mut self) -> Mode {
        self.set(self.mode.toggled());
        self.mode
    }

    fn mirror(&self) {
        if let Err(e) = self.backends.document.apply(self.mode) {
            tracing::warn!("failed to apply theme {} to document: {e:#}", self.mode);
        }
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

// A failed read counts as "nothing stored" so the system preference still
// gets a say.
fn resolve(backends: &Backends) -> Mode {
    let stored = backends.storage.read(STORAGE_KEY).unwrap_or_else(|e| {
        tracing::warn!("theme storage unavailable: {e:#}");
        None
    });
    match stored {
        Some(v) => v.parse().unwrap_or_else(|e| {
            tracing::warn!("{e}, using dark");
            Mode::Dark
        }),
        None => backends
            .scheme
            .prefers_dark()
            .map(Mode::from_dark)
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod test {
    use crate::{
        Backends,
        DocumentState,
        EphemeralStorage,
        FixedScheme,
        MemoryDocument,
        MemoryStorage,
        Mode,
        NoSignal,
        PreferenceStorage,
        ThemeError,
        ThemePreference,
        ThemeStore,
        UnavailableStorage,
        STORAGE_KEY,
    };

    fn open(storage: &MemoryStorage, prefers_dark: Option<bool>) -> (ThemeStore, MemoryDocument) {
        let document = MemoryDocument::new();
        let store = ThemeStore::open(Backends::new(
            storage.clone(),
            FixedScheme(prefers_dark),
            document.clone(),
        ));
        (store, document)
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("dark".parse::<Mode>().unwrap(), Mode::Dark);
        assert_eq!("light".parse::<Mode>().unwrap(), Mode::Light);
        for loose in ["Light", " light", "DARK", "dark\n"] {
            assert_eq!(
                loose.parse::<Mode>().unwrap_err(),
                ThemeError::UnknownMode(loose.into())
            );
        }
        assert_eq!(
            "system".parse::<Mode>().unwrap_err(),
            ThemeError::UnknownMode("system".into())
        );
        assert_eq!(Mode::Light.to_string(), "light");
    }

    #[test]
    fn test_stored_value_wins() {
        for mode in [Mode::Dark, Mode::Light] {
            let storage = MemoryStorage::new().with_item(STORAGE_KEY, mode.as_str());
            // The system preference points the other way and must be ignored.
            let (store, _) = open(&storage, Some(!mode.is_dark()));
            assert_eq!(store.mode(), mode);
        }
    }

    #[test]
    fn test_system_preference_fallback() {
        let storage = MemoryStorage::new();
        assert_eq!(open(&storage, Some(true)).0.mode(), Mode::Dark);
        assert_eq!(open(&storage, Some(false)).0.mode(), Mode::Light);
        assert_eq!(open(&storage, None).0.mode(), Mode::Dark);
    }

    #[test]
    fn test_fresh_session_light_system() {
        let (store, document) = open(&MemoryStorage::new(), Some(false));
        assert_eq!(
            store.preference(),
            ThemePreference {
                mode: Mode::Light,
                is_dark: false
            }
        );
        assert_eq!(
            document.state(),
            DocumentState {
                dark_class: false,
                data_theme: Some("light".into())
            }
        );
    }

    #[test]
    fn test_garbage_stored_value() {
        let storage = MemoryStorage::new().with_item(STORAGE_KEY, "auto");
        let (store, _) = open(&storage, Some(false));
        assert_eq!(store.mode(), Mode::Dark);
    }

    #[test]
    fn test_stored_value_must_match_exactly() {
        for stored in ["Light", " LIGHT ", "light\n"] {
            let storage = MemoryStorage::new().with_item(STORAGE_KEY, stored);
            let (store, document) = open(&storage, Some(false));
            assert_eq!(store.mode(), Mode::Dark);
            assert!(document.state().dark_class);
        }
    }

    #[test]
    fn test_read_failure() {
        let storage = MemoryStorage::new()
            .with_item(STORAGE_KEY, "dark")
            .failing_reads();
        assert_eq!(open(&storage, Some(false)).0.mode(), Mode::Light);
        assert_eq!(open(&storage, None).0.mode(), Mode::Dark);

        let store = ThemeStore::open(Backends::new(
            UnavailableStorage,
            NoSignal,
            MemoryDocument::new(),
        ));
        assert_eq!(store.mode(), Mode::Dark);
    }

    #[test]
    fn test_ephemeral_storage_is_empty_not_broken() {
        let storage = EphemeralStorage;
        assert_eq!(storage.read(STORAGE_KEY).unwrap(), None);
        storage.write(STORAGE_KEY, "light").unwrap();
        assert_eq!(storage.read(STORAGE_KEY).unwrap(), None);

        let document = MemoryDocument::new();
        let mut store = ThemeStore::open(Backends::new(
            EphemeralStorage,
            FixedScheme(Some(false)),
            document.clone(),
        ));
        assert_eq!(store.mode(), Mode::Light);
        assert_eq!(store.toggle(), Mode::Dark);
        assert!(document.state().dark_class);
    }

    #[test]
    fn test_toggle_persists() {
        let storage = MemoryStorage::new().with_item(STORAGE_KEY, "light");
        let (mut store, document) = open(&storage, None);
        assert_eq!(store.toggle(), Mode::Dark);
        assert_eq!(
            store.preference(),
            ThemePreference {
                mode: Mode::Dark,
                is_dark: true
            }
        );
        assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("dark"));
        assert!(document.state().dark_class);
        assert_eq!(document.state().data_theme.as_deref(), Some("dark"));

        // Reload.
        let (reloaded, _) = open(&storage, Some(false));
        assert_eq!(reloaded.mode(), Mode::Dark);
    }

    #[test]
    fn test_double_toggle() {
        let (mut store, document) = open(&MemoryStorage::new(), Some(false));
        let before = store.mode();
        store.toggle();
        assert_ne!(store.mode(), before);
        assert_eq!(store.preference().is_dark, store.mode() == Mode::Dark);
        store.toggle();
        assert_eq!(store.mode(), before);
        assert_eq!(store.preference().is_dark, store.mode() == Mode::Dark);
        assert_eq!(
            document.state().data_theme.as_deref(),
            Some(before.as_str())
        );
        assert_eq!(document.state().dark_class, before.is_dark());
    }

    #[test]
    fn test_set_mirrors_document() {
        let (mut store, document) = open(&MemoryStorage::new(), None);
        for mode in [Mode::Light, Mode::Light, Mode::Dark] {
            store.set(mode);
            assert_eq!(document.state().dark_class, mode.is_dark());
            assert_eq!(document.state().data_theme.as_deref(), Some(mode.as_str()));
        }
    }

    #[test]
    fn test_write_failure_keeps_memory_value() {
        let storage = MemoryStorage::new().failing_writes();
        let (mut store, document) = open(&storage, Some(true));
        store.toggle();
        assert_eq!(store.mode(), Mode::Light);
        assert_eq!(storage.get(STORAGE_KEY), None);
        assert_eq!(document.state().data_theme.as_deref(), Some("light"));
    }
}

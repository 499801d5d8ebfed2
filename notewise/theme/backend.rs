use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use anyhow::anyhow;
use cfg_if::cfg_if;

use crate::Mode;

/// Key/value persistence, `window.localStorage` in the browser.
pub trait PreferenceStorage: Send + Sync {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// System color scheme. `None` when the environment gives no signal.
pub trait ColorSchemeProbe: Send + Sync {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Reflects the mode onto the document root for CSS selectors.
pub trait DocumentRoot: Send + Sync {
    fn apply(&self, mode: Mode) -> anyhow::Result<()>;
}

/// Everything the store talks to outside itself.
#[derive(Clone)]
pub struct Backends {
    pub(crate) storage: Arc<dyn PreferenceStorage>,
    pub(crate) scheme: Arc<dyn ColorSchemeProbe>,
    pub(crate) document: Arc<dyn DocumentRoot>,
}

impl Backends {
    pub fn new(
        storage: impl PreferenceStorage + 'static,
        scheme: impl ColorSchemeProbe + 'static,
        document: impl DocumentRoot + 'static,
    ) -> Self {
        Self {
            storage: Arc::new(storage),
            scheme: Arc::new(scheme),
            document: Arc::new(document),
        }
    }

    /// Browser APIs when hydrating, inert stand-ins when rendering on the
    /// server.
    pub fn platform() -> Self {
        cfg_if! {
            if #[cfg(feature = "hydrate")] {
                Self::new(LocalStorage, MediaQueryProbe, HtmlRoot)
            } else {
                Self::new(EphemeralStorage, NoSignal, DetachedDocument)
            }
        }
    }
}

/// Storage for renders with no browser behind them: nothing is ever stored
/// and writes go nowhere. Unlike [`UnavailableStorage`] this is not a failure.
pub struct EphemeralStorage;

impl PreferenceStorage for EphemeralStorage {
    fn read(&self, _key: &str) -> anyhow::Result<Option<String>> { Ok(None) }

    fn write(&self, _key: &str, _value: &str) -> anyhow::Result<()> { Ok(()) }
}

pub struct UnavailableStorage;

impl PreferenceStorage for UnavailableStorage {
    fn read(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Err(anyhow!("no local storage"))
    }

    fn write(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
        Err(anyhow!("no local storage"))
    }
}

pub struct NoSignal;

impl ColorSchemeProbe for NoSignal {
    fn prefers_dark(&self) -> Option<bool> { None }
}

pub struct FixedScheme(pub Option<bool>);

impl ColorSchemeProbe for FixedScheme {
    fn prefers_dark(&self) -> Option<bool> { self.0 }
}

pub struct DetachedDocument;

impl DocumentRoot for DetachedDocument {
    fn apply(&self, _mode: Mode) -> anyhow::Result<()> { Ok(()) }
}

/// In-memory storage. Clones share the same map, so a clone can stand in for
/// the same browser profile after a reload.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self { Self::default() }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Peeks at a value regardless of the failure switches.
    pub fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok().and_then(|items| items.get(key).cloned())
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        if self.fail_reads {
            return Err(anyhow!("storage read disabled"));
        }
        let items = self.items.lock().map_err(|_| anyhow!("storage poisoned"))?;
        Ok(items.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.fail_writes {
            return Err(anyhow!("storage quota exceeded"));
        }
        let mut items = self.items.lock().map_err(|_| anyhow!("storage poisoned"))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DocumentState {
    pub dark_class: bool,
    pub data_theme: Option<String>,
}

/// Records what would have been written to `<html>`.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    state: Arc<Mutex<DocumentState>>,
}

impl MemoryDocument {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> DocumentState {
        self.state
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }
}

impl DocumentRoot for MemoryDocument {
    fn apply(&self, mode: Mode) -> anyhow::Result<()> {
        let mut state = self.state.lock().map_err(|_| anyhow!("document poisoned"))?;
        state.dark_class = mode.is_dark();
        state.data_theme = Some(mode.as_str().to_string());
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
pub use web::{HtmlRoot, LocalStorage, MediaQueryProbe};

#[cfg(feature = "hydrate")]
mod web {
    use anyhow::anyhow;
    use leptos::tachys::dom::{document, window};

    use super::{ColorSchemeProbe, DocumentRoot, PreferenceStorage};
    use crate::Mode;

    fn storage() -> anyhow::Result<web_sys::Storage> {
        window()
            .local_storage()
            .map_err(|e| anyhow!("{e:?}"))?
            .ok_or_else(|| anyhow!("no local storage"))
    }

    fn matches(query: &str) -> bool {
        window()
            .match_media(query)
            .ok()
            .flatten()
            .map(|media| media.matches())
            .unwrap_or(false)
    }

    pub struct LocalStorage;

    impl PreferenceStorage for LocalStorage {
        fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
            storage()?.get_item(key).map_err(|e| anyhow!("{e:?}"))
        }

        fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
            storage()?
                .set_item(key, value)
                .map_err(|e| anyhow!("{e:?}"))
        }
    }

    pub struct MediaQueryProbe;

    impl ColorSchemeProbe for MediaQueryProbe {
        fn prefers_dark(&self) -> Option<bool> {
            if matches("(prefers-color-scheme: dark)") {
                Some(true)
            } else if matches("(prefers-color-scheme: light)") {
                Some(false)
            } else {
                None
            }
        }
    }

    pub struct HtmlRoot;

    impl DocumentRoot for HtmlRoot {
        fn apply(&self, mode: Mode) -> anyhow::Result<()> {
            let root = document()
                .document_element()
                .ok_or_else(|| anyhow!("no document element"))?;
            root.class_list()
                .toggle_with_force("dark", mode.is_dark())
                .map_err(|e| anyhow!("{e:?}"))?;
            root.set_attribute("data-theme", mode.as_str())
                .map_err(|e| anyhow!("{e:?}"))
        }
    }
}

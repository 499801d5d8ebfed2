use leptos::prelude::*;

use crate::{palette, Backends, Mode, Palette, ThemeError, ThemePreference, ThemeStore};

/// Handle to the page's theme store, provided once at the app root.
///
/// Consumers only get derived signals plus `toggle`/`set`; the store itself
/// stays private.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: RwSignal<ThemeStore>,
}

impl ThemeContext {
    pub fn mode(&self) -> Signal<Mode> {
        let store = self.store;
        Signal::derive(move || store.with(ThemeStore::mode))
    }

    pub fn is_dark(&self) -> Signal<bool> {
        let store = self.store;
        Signal::derive(move || store.with(|s| s.mode().is_dark()))
    }

    pub fn palette(&self) -> Signal<&'static Palette> {
        let store = self.store;
        Signal::derive(move || palette(store.with(ThemeStore::mode)))
    }

    pub fn preference(&self) -> ThemePreference { self.store.with(ThemeStore::preference) }

    pub fn toggle(&self) {
        self.store.update(|s| {
            s.toggle();
        });
    }

    pub fn set(&self, mode: Mode) { self.store.update(|s| s.set(mode)); }

    /// Reopens the store against `backends`. The server renders with inert
    /// backends, so the browser calls this once hydration is done to pick up
    /// the stored preference without a hydration mismatch.
    pub fn attach(&self, backends: Backends) { self.store.set(ThemeStore::open(backends)); }
}

pub fn provide_theme(backends: Backends) -> ThemeContext {
    let theme = ThemeContext {
        store: RwSignal::new(ThemeStore::open(backends)),
    };
    provide_context(theme);
    theme
}

pub fn try_use_theme() -> Result<ThemeContext, ThemeError> {
    use_context::<ThemeContext>().ok_or(ThemeError::MissingProvider)
}

/// Panics when no ancestor called [`provide_theme`]; that is a wiring bug,
/// not something to recover from.
#[track_caller]
pub fn use_theme() -> ThemeContext {
    match try_use_theme() {
        Ok(theme) => theme,
        Err(e) => panic!("{e}"),
    }
}

#[cfg(test)]
mod test {
    use leptos::{prelude::*, reactive::owner::Owner};

    use crate::{
        provide_theme,
        try_use_theme,
        use_theme,
        Backends,
        FixedScheme,
        MemoryDocument,
        MemoryStorage,
        Mode,
        NoSignal,
        ThemeError,
        DARK_PALETTE,
        LIGHT_PALETTE,
        STORAGE_KEY,
    };

    #[test]
    fn test_missing_provider() {
        Owner::new().with(|| {
            assert_eq!(try_use_theme().err(), Some(ThemeError::MissingProvider));
        });
    }

    #[test]
    #[should_panic(expected = "theme context missing")]
    fn test_use_theme_without_provider() {
        Owner::new().with(|| {
            use_theme();
        });
    }

    #[test]
    fn test_toggle_visible_to_consumers() {
        let storage = MemoryStorage::new().with_item(STORAGE_KEY, "light");
        let document = MemoryDocument::new();
        Owner::new().with(|| {
            let root = provide_theme(Backends::new(
                storage.clone(),
                NoSignal,
                document.clone(),
            ));
            let consumer = use_theme();
            let mode = consumer.mode();
            assert_eq!(mode.get_untracked(), Mode::Light);
            assert_eq!(consumer.palette().get_untracked(), &LIGHT_PALETTE);

            root.toggle();
            assert_eq!(mode.get_untracked(), Mode::Dark);
            assert!(consumer.is_dark().get_untracked());
            assert_eq!(consumer.palette().get_untracked(), &DARK_PALETTE);
            assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("dark"));
            assert!(document.state().dark_class);
        });
    }

    #[test]
    fn test_provided_to_children() {
        Owner::new().with(|| {
            provide_theme(Backends::new(
                MemoryStorage::new(),
                FixedScheme(Some(false)),
                MemoryDocument::new(),
            ));
            let child = Owner::new();
            child.with(|| {
                let theme = use_theme();
                theme.set(Mode::Dark);
                assert!(theme.preference().is_dark);
            });
        });
    }

    #[test]
    fn test_attach_rereads_storage() {
        let storage = MemoryStorage::new().with_item(STORAGE_KEY, "light");
        let document = MemoryDocument::new();
        Owner::new().with(|| {
            let theme = provide_theme(Backends::new(
                MemoryStorage::new(),
                NoSignal,
                MemoryDocument::new(),
            ));
            assert_eq!(theme.mode().get_untracked(), Mode::Dark);

            theme.attach(Backends::new(storage.clone(), NoSignal, document.clone()));
            assert_eq!(theme.mode().get_untracked(), Mode::Light);
            assert_eq!(document.state().data_theme.as_deref(), Some("light"));

            theme.toggle();
            assert_eq!(storage.get(STORAGE_KEY).as_deref(), Some("dark"));
        });
    }
}

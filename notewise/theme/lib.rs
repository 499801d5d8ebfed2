// Dark/light theme state shared by every page and component.
//
// The store resolves the starting mode from local storage, then the system
// color scheme, then falls back to dark. Every change is written back to
// storage and mirrored onto <html> as the `dark` class and `data-theme`.
mod backend;
mod context;
mod palette;
mod store;

pub use backend::{
    Backends,
    ColorSchemeProbe,
    DetachedDocument,
    DocumentRoot,
    DocumentState,
    EphemeralStorage,
    FixedScheme,
    MemoryDocument,
    MemoryStorage,
    NoSignal,
    PreferenceStorage,
    UnavailableStorage,
};
#[cfg(feature = "hydrate")]
pub use backend::{HtmlRoot, LocalStorage, MediaQueryProbe};
pub use context::{provide_theme, try_use_theme, use_theme, ThemeContext};
pub use palette::{palette, Palette, DARK_PALETTE, LIGHT_PALETTE};
pub use store::{Mode, ThemePreference, ThemeStore, STORAGE_KEY};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("theme context missing: call provide_theme() in a component above this one")]
    MissingProvider,
    #[error("unknown theme mode {0:?}, expected \"dark\" or \"light\"")]
    UnknownMode(String),
}

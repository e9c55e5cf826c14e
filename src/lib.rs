pub mod models;
pub mod error;
pub mod i18n;
pub mod storage;
pub mod lightbox;
pub mod gesture;
pub mod layout;
pub mod catalog;
pub mod metadata;

// Re-export commonly used types
pub use models::{Artwork, AspectRatio, Gallery};
pub use error::{CatalogError, LightboxError, StorageError};
pub use i18n::{Language, LanguageStore};
pub use storage::{default_store, JsonFileStore, MemoryStore, PreferenceStore, LANGUAGE_KEY};
pub use lightbox::{Lightbox, LightboxKey, LightboxState, ScrollLock};
pub use gesture::{Point, Swipe, SwipeTracker, SWIPE_THRESHOLD};
pub use layout::{Breakpoint, LayoutSignal, MenuState};

//! UI module - egui renderers for the page and the lightbox overlay

pub mod textures;
pub mod page;
pub mod lightbox_view;

pub use textures::TextureCache;

use portfolio::catalog::Section;
use portfolio::{LanguageStore, PreferenceStore};

/// The language store as the app holds it
pub type Texts = LanguageStore<Box<dyn PreferenceStore>>;

/// Requests collected while drawing and applied once the frame's widgets are done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    OpenArtwork(usize),
    ToggleLanguage,
    ToggleMenu,
    Navigate(Section),
}

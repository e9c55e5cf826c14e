//! Lightbox module - full-screen single artwork viewer
//!
//! State is either closed or open at an index with the detail image on or
//! off. While open the controller holds a [`ScrollGuard`], which keeps the
//! page behind the overlay from scrolling. The guard is released on
//! [`Lightbox::close`] and, if the controller is dropped while open, by its
//! destructor.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::LightboxError;
use crate::models::{Artwork, Gallery};

/// Background scroll lock shared between the lightbox and the page renderer.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    fn acquire(&self) -> ScrollGuard {
        self.holders.set(self.holders.get() + 1);
        tracing::trace!(holders = self.holders.get(), "scroll lock acquired");
        ScrollGuard { holders: Rc::clone(&self.holders) }
    }
}

/// Holds the scroll lock until dropped.
#[derive(Debug)]
pub struct ScrollGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.holders.set(self.holders.get().saturating_sub(1));
        tracing::trace!(holders = self.holders.get(), "scroll lock released");
    }
}

/// Comparable view of the controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    Open { index: usize, detail: bool },
}

/// Keys the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    ArrowLeft,
    ArrowRight,
    Escape,
    Space,
}

pub struct Lightbox {
    gallery: Gallery,
    scroll_lock: ScrollLock,
    open_index: Option<usize>,
    detail_visible: bool,
    info_visible: bool,
    guard: Option<ScrollGuard>,
}

impl Lightbox {
    pub fn new(gallery: Gallery, scroll_lock: ScrollLock) -> Self {
        Self {
            gallery,
            scroll_lock,
            open_index: None,
            detail_visible: false,
            info_visible: false,
            guard: None,
        }
    }

    #[inline]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[inline]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open_index.is_some()
    }

    #[inline]
    pub fn open_index(&self) -> Option<usize> {
        self.open_index
    }

    #[inline]
    pub fn detail_visible(&self) -> bool {
        self.detail_visible
    }

    #[inline]
    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    pub fn snapshot(&self) -> LightboxState {
        match self.open_index {
            Some(index) => LightboxState::Open { index, detail: self.detail_visible },
            None => LightboxState::Closed,
        }
    }

    /// The open artwork
    pub fn current(&self) -> Option<&Artwork> {
        self.open_index.and_then(|i| self.gallery.get(i))
    }

    /// Image path to show: the detail image while it is toggled on,
    /// otherwise the primary image.
    pub fn displayed_image(&self) -> Option<&str> {
        let art = self.current()?;
        match (&art.detail_image, self.detail_visible) {
            (Some(detail), true) => Some(detail.as_str()),
            _ => Some(art.image.as_str()),
        }
    }

    /// Label for the displayed image: the title, suffixed with
    /// `detail_label` while the detail image is shown. The caption itself
    /// always uses the plain title.
    pub fn image_label(&self, detail_label: &str) -> Option<String> {
        let art = self.current()?;
        if self.detail_visible && art.has_detail_image() {
            Some(format!("{} - {}", art.title, detail_label))
        } else {
            Some(art.title.clone())
        }
    }

    pub fn open(&mut self, index: usize) -> Result<(), LightboxError> {
        let len = self.gallery.len();
        if index >= len {
            return Err(LightboxError::IndexOutOfRange { index, len });
        }
        self.show(index);
        if self.guard.is_none() {
            self.guard = Some(self.scroll_lock.acquire());
        }
        tracing::debug!(index, "lightbox opened");
        Ok(())
    }

    pub fn close(&mut self) {
        if self.open_index.take().is_none() {
            return;
        }
        self.detail_visible = false;
        self.info_visible = false;
        self.guard = None;
        tracing::debug!("lightbox closed");
    }

    pub fn next(&mut self) {
        if let Some(i) = self.open_index {
            self.show((i + 1) % self.gallery.len());
        }
    }

    pub fn previous(&mut self) {
        if let Some(i) = self.open_index {
            let len = self.gallery.len();
            self.show(if i == 0 { len - 1 } else { i - 1 });
        }
    }

    /// No-op unless the open artwork has a detail image.
    pub fn toggle_detail(&mut self) {
        if self.current().map_or(false, Artwork::has_detail_image) {
            self.detail_visible = !self.detail_visible;
        }
    }

    /// Compact-layout metadata panel
    pub fn toggle_info(&mut self) {
        if self.is_open() {
            self.info_visible = !self.info_visible;
        }
    }

    /// Returns true if the key was consumed. Ignored while closed.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::Escape => self.close(),
            LightboxKey::Space => {
                if !self.current().map_or(false, Artwork::has_detail_image) {
                    return false;
                }
                self.toggle_detail();
            }
        }
        true
    }

    // 切换到新作品时总是从主图开始
    fn show(&mut self, index: usize) {
        self.open_index = Some(index);
        self.detail_visible = false;
        self.info_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gallery(n: u32) -> Gallery {
        let arts = (1..=n)
            .map(|id| {
                let art = Artwork::new(id, format!("work {}", id), "2024", format!("/images/{}.png", id));
                if id % 2 == 0 {
                    art.with_detail_image(format!("/images/detail-{}.png", id))
                } else {
                    art
                }
            })
            .collect();
        Gallery::new(arts).unwrap()
    }

    fn lightbox(n: u32) -> Lightbox {
        Lightbox::new(gallery(n), ScrollLock::new())
    }

    #[test]
    fn test_open_close_releases_lock() {
        for i in 0..4 {
            let mut lb = lightbox(4);
            lb.open(i).unwrap();
            assert!(lb.scroll_lock().is_locked());
            lb.close();
            assert_eq!(lb.snapshot(), LightboxState::Closed);
            assert!(!lb.scroll_lock().is_locked());
        }
    }

    #[test]
    fn test_open_out_of_range() {
        let mut lb = lightbox(3);
        assert_eq!(lb.open(3), Err(LightboxError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(lb.snapshot(), LightboxState::Closed);
        assert!(!lb.scroll_lock().is_locked());
    }

    #[test]
    fn test_reopen_keeps_single_lock() {
        let mut lb = lightbox(3);
        lb.open(0).unwrap();
        lb.open(2).unwrap();
        lb.close();
        assert!(!lb.scroll_lock().is_locked());
    }

    #[test]
    fn test_next_wraps_around() {
        let mut lb = lightbox(5);
        for start in 0..5 {
            lb.open(start).unwrap();
            lb.next();
            assert_eq!(lb.open_index(), Some((start + 1) % 5));
            for _ in 0..4 {
                lb.next();
            }
            assert_eq!(lb.open_index(), Some((start + 1) % 5));
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        let mut lb = lightbox(3);
        lb.open(0).unwrap();
        lb.previous();
        assert_eq!(lb.open_index(), Some(2));
        for start in 0..3 {
            lb.open(start).unwrap();
            lb.next();
            lb.previous();
            assert_eq!(lb.open_index(), Some(start));
        }
    }

    #[test]
    fn test_navigation_resets_detail() {
        let mut lb = lightbox(4);
        lb.open(1).unwrap();
        lb.toggle_detail();
        assert!(lb.detail_visible());
        lb.toggle_detail();
        assert!(!lb.detail_visible());

        lb.toggle_detail();
        lb.next();
        assert!(!lb.detail_visible());

        lb.open(3).unwrap();
        lb.toggle_detail();
        lb.previous();
        assert!(!lb.detail_visible());
    }

    #[test]
    fn test_toggle_detail_without_detail_image() {
        let mut lb = lightbox(3);
        lb.open(0).unwrap();
        lb.toggle_detail();
        assert_eq!(lb.snapshot(), LightboxState::Open { index: 0, detail: false });
        assert_eq!(lb.displayed_image(), Some("/images/1.png"));
    }

    #[test]
    fn test_displayed_image_follows_detail() {
        let mut lb = lightbox(2);
        lb.open(1).unwrap();
        assert_eq!(lb.displayed_image(), Some("/images/2.png"));
        lb.toggle_detail();
        assert_eq!(lb.displayed_image(), Some("/images/detail-2.png"));
    }

    #[test]
    fn test_image_label_marks_detail() {
        let mut lb = lightbox(2);
        assert_eq!(lb.image_label("Detail"), None);
        lb.open(1).unwrap();
        assert_eq!(lb.image_label("Detail").as_deref(), Some("work 2"));
        lb.toggle_detail();
        assert_eq!(lb.image_label("Detail").as_deref(), Some("work 2 - Detail"));
        assert_eq!(lb.current().map(|a| a.title.as_str()), Some("work 2"));
        lb.next();
        assert_eq!(lb.image_label("Detail").as_deref(), Some("work 1"));
    }

    #[test]
    fn test_operations_while_closed_are_noops() {
        let mut lb = lightbox(3);
        lb.next();
        lb.previous();
        lb.toggle_detail();
        lb.toggle_info();
        lb.close();
        assert_eq!(lb.snapshot(), LightboxState::Closed);
        assert!(!lb.info_visible());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut lb = lightbox(3);
        for key in [LightboxKey::ArrowLeft, LightboxKey::ArrowRight, LightboxKey::Escape, LightboxKey::Space] {
            assert!(!lb.handle_key(key));
        }
        assert_eq!(lb.snapshot(), LightboxState::Closed);
    }

    #[test]
    fn test_keys_while_open() {
        let mut lb = lightbox(3);
        lb.open(0).unwrap();
        assert!(lb.handle_key(LightboxKey::ArrowRight));
        assert_eq!(lb.open_index(), Some(1));
        assert!(lb.handle_key(LightboxKey::Space));
        assert!(lb.detail_visible());
        assert!(lb.handle_key(LightboxKey::ArrowLeft));
        assert_eq!(lb.snapshot(), LightboxState::Open { index: 0, detail: false });
        // item 0 has no detail image
        assert!(!lb.handle_key(LightboxKey::Space));
        assert!(lb.handle_key(LightboxKey::Escape));
        assert_eq!(lb.snapshot(), LightboxState::Closed);
        assert!(!lb.scroll_lock().is_locked());
    }

    #[test]
    fn test_info_panel_resets_on_navigation() {
        let mut lb = lightbox(3);
        lb.open(0).unwrap();
        lb.toggle_info();
        assert!(lb.info_visible());
        lb.next();
        assert!(!lb.info_visible());
    }

    #[test]
    fn test_drop_while_open_releases_lock() {
        let lock = ScrollLock::new();
        {
            let mut lb = Lightbox::new(gallery(3), lock.clone());
            lb.open(1).unwrap();
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
    }
}

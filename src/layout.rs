//! Layout module - width breakpoints
//!
//! Layout decisions are made from a width the renderer reports on resize,
//! never from a global viewport. With no viewport yet the layout is
//! `Regular`.

/// At or below this width the lightbox caption collapses behind an info button
pub const COMPACT_MAX_WIDTH: f32 = 375.0;
/// Desktop navigation from this width up, a menu button below
pub const DESKTOP_NAV_MIN_WIDTH: f32 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Breakpoint {
    Compact,
    #[default]
    Regular,
}

impl Breakpoint {
    pub fn for_width(width: f32) -> Self {
        if width <= COMPACT_MAX_WIDTH {
            Breakpoint::Compact
        } else {
            Breakpoint::Regular
        }
    }

    #[inline]
    pub fn is_compact(&self) -> bool {
        matches!(self, Breakpoint::Compact)
    }
}

/// Number of gallery columns: 1 / 2 / 3 / 4 at 640, 1024 and 1280
pub fn gallery_columns(width: f32) -> usize {
    match width {
        w if w < 640.0 => 1,
        w if w < 1024.0 => 2,
        w if w < 1280.0 => 3,
        _ => 4,
    }
}

#[inline]
pub fn shows_desktop_nav(width: f32) -> bool {
    width >= DESKTOP_NAV_MIN_WIDTH
}

#[derive(Debug, Clone, Default)]
pub struct LayoutSignal {
    width: Option<f32>,
    breakpoint: Breakpoint,
}

impl LayoutSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new width. Returns true when the breakpoint changed.
    pub fn resize(&mut self, width: f32) -> bool {
        self.width = Some(width);
        let next = Breakpoint::for_width(width);
        if next == self.breakpoint {
            return false;
        }
        tracing::debug!(width, ?next, "layout breakpoint changed");
        self.breakpoint = next;
        true
    }

    #[inline]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    #[inline]
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn columns(&self) -> usize {
        self.width.map_or(1, gallery_columns)
    }

    pub fn desktop_nav(&self) -> bool {
        self.width.map_or(true, shows_desktop_nav)
    }
}

/// Collapsible navigation for narrow windows
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(Breakpoint::for_width(320.0), Breakpoint::Compact);
        assert_eq!(Breakpoint::for_width(375.0), Breakpoint::Compact);
        assert_eq!(Breakpoint::for_width(376.0), Breakpoint::Regular);
    }

    #[test]
    fn test_gallery_columns() {
        assert_eq!(gallery_columns(400.0), 1);
        assert_eq!(gallery_columns(640.0), 2);
        assert_eq!(gallery_columns(1023.0), 2);
        assert_eq!(gallery_columns(1024.0), 3);
        assert_eq!(gallery_columns(1920.0), 4);
    }

    #[test]
    fn test_signal_without_viewport() {
        let signal = LayoutSignal::new();
        assert_eq!(signal.width(), None);
        assert_eq!(signal.breakpoint(), Breakpoint::Regular);
        assert!(signal.desktop_nav());
    }

    #[test]
    fn test_signal_reports_changes_only() {
        let mut signal = LayoutSignal::new();
        assert!(!signal.resize(1200.0));
        assert!(signal.resize(360.0));
        assert!(signal.breakpoint().is_compact());
        assert!(!signal.resize(300.0));
        assert!(!signal.desktop_nav());
        assert!(signal.resize(800.0));
        assert_eq!(signal.columns(), 2);
    }

    #[test]
    fn test_menu_state() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}

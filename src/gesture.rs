//! Horizontal swipe recognition for the lightbox

use crate::lightbox::Lightbox;

/// Minimum horizontal travel for a swipe
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger travelled toward smaller x
    Left,
    /// Finger travelled toward larger x
    Right,
}

impl Swipe {
    /// Left shows the next artwork, right the previous one.
    pub fn apply(self, lightbox: &mut Lightbox) {
        match self {
            Swipe::Left => lightbox.next(),
            Swipe::Right => lightbox.previous(),
        }
    }
}

/// `dx`/`dy` are start minus end. Horizontal travel must pass the threshold
/// and exceed the vertical travel.
pub fn classify(dx: f32, dy: f32) -> Option<Swipe> {
    if dx.abs() <= SWIPE_THRESHOLD || dx.abs() <= dy.abs() {
        return None;
    }
    if dx > 0.0 {
        Some(Swipe::Left)
    } else {
        Some(Swipe::Right)
    }
}

#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<Point>,
    end: Option<Point>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, at: Point) {
        self.start = Some(at);
        self.end = None;
    }

    pub fn update(&mut self, at: Point) {
        if self.start.is_some() {
            self.end = Some(at);
        }
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Ends the gesture. A touch that never moved is not a swipe.
    pub fn finish(&mut self) -> Option<Swipe> {
        let start = self.start.take()?;
        let end = self.end.take()?;
        classify(start.x - end.x, start.y - end.y)
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.end = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: (f32, f32), to: (f32, f32)) -> Option<Swipe> {
        let mut tracker = SwipeTracker::new();
        tracker.begin(Point::new(from.0, from.1));
        tracker.update(Point::new(to.0, to.1));
        tracker.finish()
    }

    #[test]
    fn test_threshold_and_dominance() {
        assert_eq!(classify(60.0, 10.0), Some(Swipe::Left));
        assert_eq!(classify(-60.0, 10.0), Some(Swipe::Right));
        assert_eq!(classify(60.0, 70.0), None);
        assert_eq!(classify(30.0, 0.0), None);
        assert_eq!(classify(50.0, 0.0), None);
        assert_eq!(classify(60.0, -60.0), None);
    }

    #[test]
    fn test_tracker_directions() {
        assert_eq!(swipe((200.0, 100.0), (140.0, 110.0)), Some(Swipe::Left));
        assert_eq!(swipe((140.0, 100.0), (200.0, 90.0)), Some(Swipe::Right));
        assert_eq!(swipe((200.0, 100.0), (140.0, 170.0)), None);
    }

    #[test]
    fn test_tap_is_not_swipe() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(Point::new(300.0, 100.0));
        tracker.update(Point::new(100.0, 100.0));
        assert_eq!(tracker.finish(), Some(Swipe::Left));

        // new touch without movement must not reuse the old end point
        tracker.begin(Point::new(300.0, 100.0));
        assert_eq!(tracker.finish(), None);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_update_without_begin_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.update(Point::new(10.0, 10.0));
        assert_eq!(tracker.finish(), None);
    }
}

use portfolio::gesture::classify;
use portfolio::{Artwork, Gallery, Lightbox, LightboxState, Point, ScrollLock, Swipe, SwipeTracker};
use pretty_assertions::assert_eq;

fn three_works(detail_on_second: bool) -> Gallery {
    let second = Artwork::new(20, "Eg drøymer meg burt", "2024", "/images/eg-droymer-meg-bort.png");
    let second = if detail_on_second {
        second.with_detail_image("/images/detalj-eg-droymer-meg-bort.jpeg")
    } else {
        second
    };
    Gallery::new(vec![
        Artwork::new(10, "Vannliljer", "2024", "/images/vannliljer.png"),
        second,
        Artwork::new(30, "Kyss meg", "2024", "/images/kyss-meg.jpeg"),
    ])
    .unwrap()
}

#[test]
fn open_next_detail_close() {
    let lock = ScrollLock::new();
    let mut lb = Lightbox::new(three_works(true), lock.clone());

    lb.open(0).unwrap();
    assert_eq!(lb.snapshot(), LightboxState::Open { index: 0, detail: false });
    lb.next();
    assert_eq!(lb.snapshot(), LightboxState::Open { index: 1, detail: false });
    lb.toggle_detail();
    assert_eq!(lb.snapshot(), LightboxState::Open { index: 1, detail: true });
    lb.close();
    assert_eq!(lb.snapshot(), LightboxState::Closed);
    assert!(!lock.is_locked());
}

#[test]
fn detail_toggle_without_detail_image_is_noop() {
    let mut lb = Lightbox::new(three_works(false), ScrollLock::new());
    lb.open(0).unwrap();
    lb.next();
    lb.toggle_detail();
    assert_eq!(lb.snapshot(), LightboxState::Open { index: 1, detail: false });
}

#[test]
fn full_cycle_returns_to_start() {
    let mut lb = Lightbox::new(three_works(true), ScrollLock::new());
    for start in 0..3 {
        lb.open(start).unwrap();
        for _ in 0..3 {
            lb.next();
        }
        assert_eq!(lb.open_index(), Some(start));
        for _ in 0..3 {
            lb.previous();
        }
        assert_eq!(lb.open_index(), Some(start));
    }
}

#[test]
fn swipes_drive_navigation() {
    assert_eq!(classify(60.0, 10.0), Some(Swipe::Left));
    assert_eq!(classify(60.0, 70.0), None);
    assert_eq!(classify(30.0, 0.0), None);

    let mut lb = Lightbox::new(three_works(true), ScrollLock::new());
    lb.open(0).unwrap();

    let mut tracker = SwipeTracker::new();
    tracker.begin(Point::new(300.0, 400.0));
    tracker.update(Point::new(240.0, 410.0));
    tracker.finish().unwrap().apply(&mut lb);
    assert_eq!(lb.open_index(), Some(1));

    tracker.begin(Point::new(240.0, 400.0));
    tracker.update(Point::new(300.0, 390.0));
    tracker.finish().unwrap().apply(&mut lb);
    assert_eq!(lb.open_index(), Some(0));

    // mostly vertical: scrolling, not navigating
    tracker.begin(Point::new(300.0, 400.0));
    tracker.update(Point::new(240.0, 330.0));
    assert_eq!(tracker.finish(), None);
    assert_eq!(lb.open_index(), Some(0));
}

#[test]
fn teardown_while_open_releases_scroll_lock() {
    let lock = ScrollLock::new();
    let mut lb = Lightbox::new(three_works(true), lock.clone());
    lb.open(2).unwrap();
    lb.toggle_detail();
    assert!(lock.is_locked());
    drop(lb);
    assert!(!lock.is_locked());
}

use super::*;
use std::time::Duration;

fn assert_window_invariant(window: RevealWindow, bolt_height: f32) {
    assert!(window.top >= 0.0, "{window:?}");
    assert!(window.top <= window.bottom, "{window:?}");
    assert!(window.bottom <= bolt_height, "{window:?}");
}

#[test]
fn initial_window_is_empty_and_growing() {
    let window = RevealWindow::default();
    assert_eq!(window, RevealWindow::initial());
    assert!(window.growing);
    assert_eq!((window.top, window.bottom), (0.0, 0.0));
}

#[test]
fn advance_is_pure() {
    let window = RevealWindow {
        top: 10.0,
        bottom: 60.0,
        growing: false,
    };
    assert_eq!(advance(window, 5.0, 60.0), advance(window, 5.0, 60.0));
}

#[test]
fn full_cycle_with_step_five_and_height_sixty() {
    let mut animator = ScanAnimator::new(5.0, 60.0);

    // Growing: eleven ticks stay short of the bolt bottom.
    for tick in 1..=11 {
        assert_eq!(animator.tick(), NextTick::Immediate);
        let window = animator.window();
        assert!(window.growing, "tick {tick}");
        assert_eq!(window.bottom, 5.0 * tick as f32);
        assert_eq!(window.top, 0.0);
    }

    // Twelfth tick clamps and flips to shrinking, still immediate.
    assert_eq!(animator.tick(), NextTick::Immediate);
    let window = animator.window();
    assert!(!window.growing);
    assert_eq!(window.bottom, 60.0);

    // Shrinking: eleven ticks raise the top, the twelfth resets and pauses.
    for tick in 1..=11 {
        assert_eq!(animator.tick(), NextTick::Immediate);
        let window = animator.window();
        assert!(!window.growing, "tick {tick}");
        assert_eq!(window.top, 5.0 * tick as f32);
        assert_eq!(window.bottom, 60.0);
    }
    let next = animator.tick();
    assert_eq!(next, NextTick::AfterPause);
    assert_eq!(animator.window(), RevealWindow::initial());
    assert_eq!(next.delay(), Duration::from_millis(700));
    assert_eq!(next.delay(), CYCLE_PAUSE);
    assert_eq!(NextTick::Immediate.delay(), Duration::ZERO);
}

#[test]
fn window_invariant_holds_after_every_tick() {
    // Step that does not divide the height, to force overshoot clamps.
    let mut animator = ScanAnimator::new(7.0, 60.0);
    for _ in 0..100 {
        animator.tick();
        assert_window_invariant(animator.window(), animator.bolt_height());
    }
}

#[test]
fn retarget_keeps_the_window() {
    let mut animator = ScanAnimator::new(5.0, 60.0);
    for _ in 0..4 {
        animator.tick();
    }
    let before = animator.window();
    animator.retarget(7.0, 90.0);
    assert_eq!(animator.window(), before);
    assert_eq!(animator.bolt_height(), 90.0);
}

#[test]
fn shrunk_height_is_clamped_on_the_next_tick_while_growing() {
    let mut animator = ScanAnimator::new(10.0, 60.0);
    for _ in 0..3 {
        animator.tick();
    }
    assert_eq!(animator.window().bottom, 30.0);

    animator.retarget(10.0, 20.0);
    assert_eq!(animator.tick(), NextTick::Immediate);
    let window = animator.window();
    assert_eq!(window.bottom, 20.0);
    assert!(!window.growing);
    assert_window_invariant(window, 20.0);
}

#[test]
fn shrunk_height_is_clamped_on_the_next_tick_while_shrinking() {
    let mut animator = ScanAnimator::new(7.0, 60.0);
    while animator.window().growing {
        animator.tick();
    }
    assert_eq!(animator.window().bottom, 60.0);

    animator.retarget(7.0, 35.0);
    animator.tick();
    let window = animator.window();
    assert_eq!(window.bottom, 35.0);
    assert_eq!(window.top, 7.0);
    assert_window_invariant(window, 35.0);
}

// Host-side tests for scroll progress and the smoothing loop.

use std::time::Duration;
use vextra_core::progress::{target_progress, ContainerGeometry, ScrollProgress};

#[test]
fn target_progress_matches_reference_geometry() {
    // 800px below the viewport top, 1000px viewport, 2000px tall container
    let geom = ContainerGeometry::new(800.0, 2000.0, 1000.0);
    let p = target_progress(&geom);
    assert!((p - 200.0 / 2300.0).abs() < 1e-12);
    assert!((p - 0.087).abs() < 1e-3);
}

#[test]
fn target_progress_is_clamped() {
    // Not reached yet
    assert_eq!(target_progress(&ContainerGeometry::new(1500.0, 2000.0, 1000.0)), 0.0);
    // Scrolled far past the end
    assert_eq!(target_progress(&ContainerGeometry::new(-5000.0, 2000.0, 1000.0)), 1.0);
}

#[test]
fn target_progress_stays_in_unit_range_for_many_geometries() {
    for height in [0.0, 1.0, 240.0, 2000.0, 10_000.0] {
        for vh in [1.0, 480.0, 1080.0] {
            let mut top = -20_000.0;
            while top <= 20_000.0 {
                let p = target_progress(&ContainerGeometry::new(top, height, vh));
                assert!((0.0..=1.0).contains(&p), "top={top} h={height} vh={vh} p={p}");
                top += 137.0;
            }
        }
    }
}

#[test]
fn zero_height_container_has_a_finite_denominator() {
    // denominator is 0 + 1000 * 0.3 = 300
    let p = target_progress(&ContainerGeometry::new(850.0, 0.0, 1000.0));
    assert!((p - 0.5).abs() < 1e-12);
}

#[test]
fn degenerate_viewport_yields_zero() {
    assert_eq!(target_progress(&ContainerGeometry::new(0.0, 0.0, 0.0)), 0.0);
    assert_eq!(target_progress(&ContainerGeometry::new(10.0, -50.0, 0.0)), 0.0);
}

#[test]
fn smoothing_converges_monotonically_and_lands_on_target() {
    for target in [0.087, 0.5, 1.0] {
        let mut sp = ScrollProgress {
            target,
            current: 0.0,
        };
        let mut gap = (target - sp.current).abs();
        let mut frames = 0;
        while sp.current != target {
            sp.step();
            frames += 1;
            let next_gap = (target - sp.current).abs();
            assert!(next_gap < gap, "gap must shrink until it reaches the target");
            assert!(sp.current <= target, "no overshoot");
            gap = next_gap;
            assert!(frames < 200, "stalled {} short of {}", gap, target);
        }
        // Stays put once there
        sp.step();
        assert_eq!(sp.current, target);
        assert!(sp.is_settled(0.0));
    }
}

#[test]
fn time_corrected_smoothing_also_lands_on_target() {
    let mut sp = ScrollProgress {
        target: 1.0,
        current: 0.0,
    };
    for _ in 0..600 {
        sp.step_for(Duration::from_secs_f64(1.0 / 120.0));
    }
    assert_eq!(sp.current, 1.0);
}

#[test]
fn smoothing_follows_a_target_moving_down() {
    let mut sp = ScrollProgress {
        target: 0.2,
        current: 0.9,
    };
    let first = sp.step();
    assert!((first - (0.9 + (0.2 - 0.9) * 0.08)).abs() < 1e-12);
    for _ in 0..100 {
        let before = sp.current;
        sp.step();
        assert!(sp.current < before && sp.current >= 0.2);
    }
}

#[test]
fn time_corrected_step_matches_fixed_step_at_sixty_hertz() {
    let mut fixed = ScrollProgress {
        target: 1.0,
        current: 0.0,
    };
    let mut timed = fixed;
    fixed.step();
    timed.step_for(Duration::from_secs_f64(1.0 / 60.0));
    assert!((fixed.current - timed.current).abs() < 1e-6);

    // Two 30 Hz frames cover the same ground as four 60 Hz frames
    let mut slow = ScrollProgress {
        target: 1.0,
        current: 0.0,
    };
    let mut fast = slow;
    for _ in 0..2 {
        slow.step_for(Duration::from_secs_f64(1.0 / 30.0));
    }
    for _ in 0..4 {
        fast.step();
    }
    assert!((slow.current - fast.current).abs() < 1e-6);
}

#[test]
fn fill_and_glow_follow_current_progress() {
    let mut sp = ScrollProgress::new();
    assert_eq!(sp.glow_opacity(), 0.0);
    sp.set_target(&ContainerGeometry::new(0.0, 700.0, 1000.0));
    assert!((sp.target - 1.0).abs() < 1e-12);
    sp.step();
    assert!((sp.fill_percent() - 8.0).abs() < 1e-9);
    assert_eq!(sp.glow_opacity(), 1.0);
}

// Host-side tests for tuning constants and DOM hook names.
// The main crate is wasm-only, so we include its constants module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use vextra_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_and_thresholds_are_within_unit_range() {
    assert!(PROGRESS_LERP_FACTOR > 0.0 && PROGRESS_LERP_FACTOR < 1.0);
    assert!(HERO_LERP_FACTOR > 0.0 && HERO_LERP_FACTOR < 1.0);
    assert!(NODE_REVEAL_VIEWPORT_FRACTION > 0.0 && NODE_REVEAL_VIEWPORT_FRACTION <= 1.0);
    for t in [SECTION_THRESHOLD, CARD_THRESHOLD, COUNTER_THRESHOLD, TEXT_THRESHOLD] {
        assert!((0.0..=1.0).contains(&t));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn counters_fire_later_than_sections() {
    assert!(COUNTER_THRESHOLD > SECTION_THRESHOLD);
    assert!(SECTION_ROOT_MARGIN.starts_with("0px 0px -"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_tuning_is_positive() {
    assert!(CARD_TILT_DIVISOR > 0.0);
    assert!(TEAM_TILT_DIVISOR > 0.0);
    // Team cards tilt more steeply than regular cards
    assert!(TEAM_TILT_DIVISOR < CARD_TILT_DIVISOR);
    assert!(MAGNETIC_DAMPING > 0.0 && MAGNETIC_DAMPING < 1.0);
    assert!(PERSPECTIVE_PX > 0.0);
}

#[test]
fn dom_hooks_are_distinct() {
    let ids = [
        NAV_LINKS_ID,
        MOBILE_NAV_LINKS_ID,
        PROBLEMS_GRID_ID,
        STEPS_GRID_ID,
        SHOWCASE_CAROUSEL_ID,
        FEATURES_GRID_ID,
        TREE_NODES_ID,
        TECH_STACK_ID,
        ROADMAP_GRID_ID,
        TEAM_GRID_ID,
        FAQ_LIST_ID,
        FOOTER_LINKS_ID,
        FOOTER_SOCIAL_ID,
        FOOTER_COPYRIGHT_ID,
        CONTACT_STATUS_ID,
    ];
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
    assert!(TREE_NODE.contains(TREE_NODE_INDEX_ATTR));
}

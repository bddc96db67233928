// Host-side tests for the visibility set and the tree state built on it.

use vextra_core::progress::ContainerGeometry;
use vextra_core::tree::{parse_node_index, Side, TreeState};
use vextra_core::visibility::VisibilitySet;

const VH: f64 = 1000.0;

fn tops(first: f64, spacing: f64, count: usize) -> Vec<(usize, f64)> {
    (0..count).map(|i| (i, first + spacing * i as f64)).collect()
}

#[test]
fn nodes_reveal_once_above_the_reveal_line() {
    let mut set = VisibilitySet::new();
    // Reveal line is 850px; node 0 at 700, node 1 at 900
    let newly = set.update(tops(700.0, 200.0, 2), VH);
    assert_eq!(newly, vec![0]);
    assert!(set.contains(0));
    assert!(!set.contains(1));

    // Exactly on the line is not yet above it
    let newly = set.update(vec![(1, 850.0)], VH);
    assert!(newly.is_empty());
    let newly = set.update(vec![(1, 849.0)], VH);
    assert_eq!(newly, vec![1]);
}

#[test]
fn visibility_never_shrinks_when_scrolling_back_up() {
    let mut set = VisibilitySet::new();
    set.update(tops(-400.0, 150.0, 6), VH);
    let revealed = set.indices();
    assert_eq!(revealed, vec![0, 1, 2, 3, 4, 5]);

    // Scroll back to the top: every node is far below the viewport again
    for offset in [500.0, 2000.0, 10_000.0] {
        let newly = set.update(tops(offset, 150.0, 6), VH);
        assert!(newly.is_empty());
        assert_eq!(set.indices(), revealed);
    }
}

#[test]
fn fifteen_nodes_all_revealed_activates_end_dot() {
    let mut tree = TreeState::new(15);
    let geom = ContainerGeometry::new(400.0, 3000.0, VH);

    // Halfway: nodes 0..=4 above the line
    tree.on_scroll(&geom, tops(0.0, 200.0, 15));
    assert_eq!(tree.visible.len(), 5);
    assert!(!tree.end_dot_visible());

    // Scrolled far enough that every node top is above 850px
    let geom = ContainerGeometry::new(-2500.0, 3000.0, VH);
    tree.on_scroll(&geom, tops(-2400.0, 200.0, 15));
    assert_eq!(tree.visible.len(), 15);
    assert!(tree.end_dot_visible());
}

#[test]
fn empty_tree_never_shows_end_dot() {
    let mut tree = TreeState::new(0);
    tree.on_scroll(&ContainerGeometry::new(0.0, 100.0, VH), Vec::new());
    assert!(!tree.end_dot_visible());
}

#[test]
fn scroll_sets_target_and_frames_ease_toward_it() {
    let mut tree = TreeState::new(3);
    let geom = ContainerGeometry::new(800.0, 2000.0, VH);
    tree.on_scroll(&geom, tops(900.0, 300.0, 3));
    assert!((tree.progress.target - 200.0 / 2300.0).abs() < 1e-12);
    assert_eq!(tree.progress.current, 0.0);

    let first = tree.on_frame();
    assert!(first > 0.0 && first < tree.progress.target);
}

#[test]
fn branches_alternate_sides() {
    assert_eq!(Side::for_index(0), Side::Left);
    assert_eq!(Side::for_index(1), Side::Right);
    assert_eq!(Side::for_index(14), Side::Left);
    assert_eq!(Side::Left.class(), "node-left");
    assert!(Side::Right.branch_path().starts_with("M 0 30"));
}

#[test]
fn rows_without_a_valid_index_are_not_tracked() {
    assert_eq!(parse_node_index("3"), Some(3));
    assert_eq!(parse_node_index(" 0 "), Some(0));
    for bad in ["", "abc", "-1", "1.5"] {
        assert_eq!(parse_node_index(bad), None, "{bad:?}");
    }

    // Four rows on the page, one with a broken attribute: only three are tracked
    let rows = ["0", "1", "oops", "2"];
    let tracked: Vec<(usize, f64)> = rows
        .iter()
        .filter_map(|raw| parse_node_index(raw))
        .map(|i| (i, 100.0))
        .collect();
    let mut tree = TreeState::new(tracked.len());
    tree.on_scroll(&ContainerGeometry::new(0.0, 2000.0, VH), tracked);
    assert!(tree.end_dot_visible());
}

// Host-side tests for pointer-driven transforms.

use glam::Vec2;
use vextra_core::pointer::{
    showcase_transforms, ElementRect, Magnetic, PhoneFollower, Tilt, TiltStyle,
};

fn square() -> ElementRect {
    ElementRect::new(0.0, 0.0, 100.0, 100.0)
}

#[test]
fn tilt_follows_the_documented_signs() {
    // Element-relative offset (10, -20) with divisor 10
    let tilt = Tilt::from_offset(Vec2::new(10.0, -20.0), 10.0);
    assert_eq!(tilt.rotate_x, -2.0);
    assert_eq!(tilt.rotate_y, -1.0);

    let rect = square();
    let via_rect = TiltStyle::Card.tilt_at(&rect, Vec2::new(60.0, 30.0));
    assert_eq!(via_rect, tilt);
}

#[test]
fn team_cards_use_a_steeper_divisor() {
    let rect = square();
    let tilt = TiltStyle::TeamMember.tilt_at(&rect, Vec2::new(66.0, 34.0));
    assert_eq!(tilt.rotate_x, -2.0);
    assert_eq!(tilt.rotate_y, -2.0);
}

#[test]
fn tilt_at_center_is_neutral() {
    let rect = ElementRect::new(40.0, 300.0, 250.0, 120.0);
    let tilt = TiltStyle::Card.tilt_at(&rect, rect.center());
    assert!(tilt.is_neutral());
}

#[test]
fn tilt_transforms_render_css() {
    let tilt = Tilt {
        rotate_x: -2.0,
        rotate_y: 1.5,
    };
    assert_eq!(
        TiltStyle::Card.transform(tilt),
        "perspective(1000px) rotateX(-2deg) rotateY(1.5deg) scale3d(1.02, 1.02, 1.02)"
    );
    assert_eq!(
        TiltStyle::TeamMember.transform(tilt),
        "perspective(1000px) rotateX(-2deg) rotateY(1.5deg) translateZ(20px)"
    );
}

#[test]
fn leave_resets_to_neutral_regardless_of_last_position() {
    assert_eq!(
        TiltStyle::Card.neutral_transform(),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)"
    );
    assert_eq!(
        TiltStyle::TeamMember.neutral_transform(),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(0px)"
    );
    assert_eq!(Magnetic::NEUTRAL.transform(), "translate(0px, 0px)");
    assert_eq!(
        TiltStyle::Card.neutral_transform(),
        TiltStyle::Card.transform(Tilt::NEUTRAL).replace("scale3d(1.02, 1.02, 1.02)", "scale3d(1, 1, 1)")
    );
}

#[test]
fn magnetic_pull_is_damped_offset() {
    let rect = ElementRect::new(0.0, 0.0, 100.0, 40.0);
    let pull = Magnetic::at(&rect, Vec2::new(60.0, 30.0));
    assert!((pull.offset.x - 3.0).abs() < 1e-5);
    assert!((pull.offset.y - 3.0).abs() < 1e-5);

    // Same sample, same answer: no accumulated state
    assert_eq!(Magnetic::at(&rect, Vec2::new(60.0, 30.0)), pull);
}

#[test]
fn showcase_stack_has_depth_per_card() {
    let container = ElementRect::new(0.0, 0.0, 300.0, 200.0);
    let t = showcase_transforms(&container, container.center(), 3);
    assert_eq!(t.len(), 3);
    assert_eq!(t[0].rotate_y, -5.0);
    assert_eq!(t[1].rotate_y, 0.0);
    assert_eq!(t[2].rotate_y, 5.0);
    for card in &t {
        assert_eq!(card.rotate_x, 0.0);
    }
    assert_eq!(
        t.iter().map(|c| c.translate_z).collect::<Vec<_>>(),
        vec![50.0, 70.0, 90.0]
    );
}

#[test]
fn showcase_pointer_offset_tilts_every_card_equally() {
    let container = ElementRect::new(0.0, 0.0, 300.0, 200.0);
    // Right edge, top edge
    let t = showcase_transforms(&container, Vec2::new(300.0, 0.0), 3);
    assert!((t[1].rotate_y - 7.5).abs() < 1e-5);
    assert!((t[1].rotate_x - 5.0).abs() < 1e-5);
    assert!((t[2].rotate_y - t[0].rotate_y - 10.0).abs() < 1e-5);
}

#[test]
fn showcase_without_area_does_not_divide_by_zero() {
    let t = showcase_transforms(&ElementRect::default(), Vec2::new(10.0, 10.0), 2);
    assert!(t.iter().all(|c| c.rotate_x.is_finite() && c.rotate_y.is_finite()));
}

#[test]
fn phone_follower_eases_toward_pointer() {
    let rect = ElementRect::new(0.0, 0.0, 200.0, 400.0);
    let mut f = PhoneFollower::new();
    f.set_pointer(&rect, Vec2::new(300.0, 200.0)); // 200px right of center
    let first = f.step();
    assert!((first.x - 1.0).abs() < 1e-5); // (200 / 20) * 0.1
    for _ in 0..300 {
        f.step();
    }
    assert!((f.current().x - 10.0).abs() < 1e-3);
    assert!(f.glow_transform().starts_with("translate("));
}

// Host-side tests for site content, decorative tables and markup builders.

use vextra_core::constants::{FEATURE_STAGGER_MS, PROBLEM_STAGGER_MS};
use vextra_core::content::{initials, SITE};
use vextra_core::decor::{parallax_offset, sparkles, SPARKLE_POSITIONS, SPARKLE_SCALES};
use vextra_core::markup::{self, CardGrid};

#[test]
fn site_config_has_every_section() {
    assert_eq!(SITE.brand.name, "Vextra");
    assert_eq!(SITE.nav_links.len(), 4);
    assert_eq!(SITE.problems.items.len(), 3);
    assert_eq!(SITE.steps.len(), 4);
    assert_eq!(SITE.showcase.len(), 3);
    assert_eq!(SITE.features.items.len(), 6);
    assert_eq!(SITE.differentiators.items.len(), 4);
    assert_eq!(SITE.roadmap.items.len(), 4);
    assert_eq!(SITE.team.len(), 5);
    assert_eq!(SITE.faq.len(), 6);
    assert_eq!(SITE.contact.email, "hello@vextralabs.com");
    assert!(SITE.hero.primary.download);
    assert!(!SITE.hero.secondary.download);
    assert!(SITE.seo.title.starts_with(SITE.brand.name));
}

#[test]
fn initials_from_names() {
    assert_eq!(initials("Rajveer Goud"), "RG");
    assert_eq!(initials("  ayush   nagre "), "AN");
    assert_eq!(initials(""), "");
}

#[test]
fn sparkle_tables_are_fixed_and_aligned() {
    assert_eq!(SPARKLE_POSITIONS.len(), SPARKLE_SCALES.len());
    let all: Vec<_> = sparkles().collect();
    assert_eq!(all.len(), 15);
    assert_eq!(
        all[0].style(),
        "--sparkle-delay: 0s; --sparkle-x: 15%; --sparkle-y: 20%; --sparkle-scale: 0.6"
    );
    assert!((all[14].delay_sec - 4.2).abs() < 1e-5);
    // Same table every time
    assert_eq!(sparkles().collect::<Vec<_>>(), all);
}

#[test]
fn parallax_moves_with_scroll() {
    assert_eq!(parallax_offset(1000.0, 1000.0, 0.5), 0.0);
    assert!((parallax_offset(1000.0, 200.0, 0.5) - 40.0).abs() < 1e-9);
}

#[test]
fn escape_neutralizes_markup() {
    assert_eq!(
        markup::escape("<a href=\"x\">Tom & Jerry's</a>"),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
}

#[test]
fn card_grid_carries_stagger_delays_and_tilt_wrappers() {
    let html = markup::card_grid(
        SITE.problems.items,
        CardGrid {
            tilt_class: Some("problem-card-wrapper"),
            card_class: "problem-card",
            stagger_ms: PROBLEM_STAGGER_MS,
        },
    );
    for delay in ["0", "150", "300"] {
        assert!(html.contains(&format!("data-reveal-delay=\"{}\"", delay)));
    }
    assert_eq!(html.matches("class=\"tilt-card problem-card-wrapper\"").count(), 3);

    let bare = markup::card_grid(
        SITE.features.items,
        CardGrid {
            tilt_class: None,
            card_class: "feature-card",
            stagger_ms: FEATURE_STAGGER_MS,
        },
    );
    assert!(!bare.contains("tilt-card"));
    assert!(bare.contains("data-reveal-delay=\"500\""));
}

#[test]
fn tree_nodes_are_indexed_and_alternate() {
    let html = markup::tree_nodes(SITE.differentiators.items);
    for i in 0..SITE.differentiators.items.len() {
        assert!(html.contains(&format!("data-node-index=\"{}\"", i)));
    }
    assert_eq!(html.matches("node-left").count(), 2);
    assert_eq!(html.matches("node-right").count(), 2);
}

#[test]
fn faq_opens_only_the_requested_item() {
    let html = markup::faq(SITE.faq, Some(0));
    assert_eq!(html.matches("faq-item open").count(), 1);
    assert!(html.starts_with("<div class=\"faq-item open\" data-faq-index=\"0\">"));
    let closed = markup::faq(SITE.faq, None);
    assert!(!closed.contains("faq-item open"));
}

#[test]
fn team_cards_show_initials_and_link_out() {
    let html = markup::team(SITE.team, 100);
    assert!(html.contains("<span>RG</span>"));
    assert!(html.contains("https://linkedin.com/in/rajveergoud"));
    assert_eq!(html.matches("team-member-card").count(), SITE.team.len());
}

#[test]
fn download_links_and_external_links_get_attributes() {
    let nav = markup::nav_links(SITE.nav_links);
    assert!(nav.contains("href=\"/#features\""));
    assert!(!nav.contains("target=\"_blank\""));
    let social = markup::social_links(SITE.footer.social);
    assert_eq!(social.matches("target=\"_blank\"").count(), 3);
}

#[test]
fn text_reveal_markup_uses_nbsp_for_spaces() {
    let html = markup::text_reveal("Hi you");
    assert_eq!(html.matches("text-reveal-char").count(), 6);
    assert!(html.contains("\u{00A0}"));
    assert!(html.contains("--char-delay: 0s"));
}

#[test]
fn accordion_keeps_at_most_one_item_open() {
    use vextra_core::Accordion;
    let mut faq = Accordion::new(Some(0));
    assert!(faq.is_open(0));
    faq.toggle(2);
    assert!(faq.is_open(2));
    assert!(!faq.is_open(0));
    faq.toggle(2);
    assert_eq!(faq.open(), None);
}

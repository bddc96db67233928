use crate::constants::*;
use crate::dom;
use crate::reveal::counter_animation;
use vextra_core::constants::{
    FEATURE_STAGGER_MS, PROBLEM_STAGGER_MS, ROADMAP_STAGGER_MS, STEP_STAGGER_MS, TEAM_STAGGER_MS,
    TECH_STAGGER_MS,
};
use vextra_core::content::SITE;
use vextra_core::markup::{self, CardGrid};
use vextra_core::reveal::RevealKind;
use web_sys as web;

/// Fill the list containers of the static page shell from the site configuration.
///
/// Runs before any effect is mounted so observers and pointer handlers see the
/// generated cards. Containers missing from the current page are skipped.
pub fn populate(document: &web::Document) {
    let fills: [(&str, String); 14] = [
        (NAV_LINKS_ID, markup::nav_links(SITE.nav_links)),
        (MOBILE_NAV_LINKS_ID, markup::nav_links(SITE.nav_links)),
        (
            PROBLEMS_GRID_ID,
            markup::card_grid(
                SITE.problems.items,
                CardGrid {
                    tilt_class: Some("problem-card-wrapper"),
                    card_class: "problem-card",
                    stagger_ms: PROBLEM_STAGGER_MS,
                },
            ),
        ),
        (STEPS_GRID_ID, markup::steps(SITE.steps, STEP_STAGGER_MS)),
        (SHOWCASE_CAROUSEL_ID, markup::showcase(SITE.showcase)),
        (
            FEATURES_GRID_ID,
            markup::card_grid(
                SITE.features.items,
                CardGrid {
                    tilt_class: Some("feature-card-wrapper"),
                    card_class: "feature-card",
                    stagger_ms: FEATURE_STAGGER_MS,
                },
            ),
        ),
        (TREE_NODES_ID, markup::tree_nodes(SITE.differentiators.items)),
        (TECH_STACK_ID, markup::tech_stack(SITE.tech_stack, TECH_STAGGER_MS)),
        (
            ROADMAP_GRID_ID,
            markup::card_grid(
                SITE.roadmap.items,
                CardGrid {
                    tilt_class: Some("roadmap-card-wrapper"),
                    card_class: "roadmap-item",
                    stagger_ms: ROADMAP_STAGGER_MS,
                },
            ),
        ),
        (TEAM_GRID_ID, markup::team(SITE.team, TEAM_STAGGER_MS)),
        (FAQ_LIST_ID, markup::faq(SITE.faq, FAQ_DEFAULT_OPEN)),
        (FOOTER_LINKS_ID, markup::footer_links(SITE.footer.links)),
        (FOOTER_SOCIAL_ID, markup::social_links(SITE.footer.social)),
        (FOOTER_COPYRIGHT_ID, markup::escape(SITE.footer.copyright)),
    ];
    let mut filled = 0usize;
    for (id, html) in &fills {
        if dom::set_inner_html_by_id(document, id, html) {
            filled += 1;
        }
    }

    let sparkles = markup::sparkles();
    for slot in dom::query_all(document, SPARKLES_SLOT) {
        slot.set_inner_html(&sparkles);
    }
    for el in dom::query_all(document, RevealKind::Text.selector()) {
        if let Some(text) = el.get_attribute(TEXT_REVEAL_ATTR) {
            el.set_inner_html(&markup::text_reveal(&text));
        }
    }
    for el in dom::query_all(document, RevealKind::Counter.selector()) {
        el.set_text_content(Some(&counter_animation(&el).initial_text()));
    }
    log::info!("[sections] filled {} containers", filled);
}

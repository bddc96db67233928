//! HTML fragments for the list-driven parts of the page.
//!
//! The page shell is static HTML; these builders fill its containers from
//! [`crate::content::SITE`] so copy lives in one place. All text is escaped.

use crate::content::{Card, FaqItem, Link, Screenshot, SocialLink, Step, TeamMember};
use crate::decor;
use crate::reveal::{reveal_chars, stagger_delay_ms};
use crate::tree::Side;
use std::fmt::Write;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn link_attrs(link: &Link) -> String {
    let mut attrs = format!("href=\"{}\"", escape(link.href));
    if link.download {
        attrs.push_str(" download");
    }
    if link.href.starts_with("http") {
        attrs.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
    }
    attrs
}

#[derive(Clone, Copy, Debug)]
pub struct CardGrid {
    /// Class of the tilt wrapper; `None` renders bare animated cards.
    pub tilt_class: Option<&'static str>,
    pub card_class: &'static str,
    pub stagger_ms: u32,
}

/// Icon cards (problems, features, roadmap).
pub fn card_grid(items: &[Card], grid: CardGrid) -> String {
    let mut html = String::new();
    for (i, card) in items.iter().enumerate() {
        let inner = format!(
            "<div class=\"animated-card {class}\" data-reveal-delay=\"{delay}\">\
             <div class=\"card-icon\">{icon}</div><h3>{title}</h3><p>{desc}</p>\
             <div class=\"card-glow\"></div></div>",
            class = grid.card_class,
            delay = stagger_delay_ms(i, grid.stagger_ms),
            icon = escape(card.icon),
            title = escape(card.title),
            desc = escape(card.description),
        );
        match grid.tilt_class {
            Some(tilt) => {
                _ = write!(html, "<div class=\"tilt-card {}\">{}</div>", tilt, inner);
            }
            None => html.push_str(&inner),
        }
    }
    html
}

pub fn steps(items: &[Step], stagger_ms: u32) -> String {
    let mut html = String::new();
    for (i, step) in items.iter().enumerate() {
        _ = write!(
            html,
            "<div class=\"animated-card step-card\" data-reveal-delay=\"{}\">\
             <div class=\"step-number-wrapper pulse-ring\"><div class=\"step-number\">{}</div></div>\
             <h3>{}</h3><p>{}</p><div class=\"step-connector\"></div></div>",
            stagger_delay_ms(i, stagger_ms),
            escape(step.number),
            escape(step.title),
            escape(step.description),
        );
    }
    html
}

/// Rows of the scroll-progress tree; each carries `data-node-index`.
pub fn tree_nodes(items: &[Card]) -> String {
    let mut html = String::new();
    for (i, item) in items.iter().enumerate() {
        let side = Side::for_index(i);
        let icon = if item.icon.is_empty() { "\u{2713}" } else { item.icon };
        _ = write!(
            html,
            "<div class=\"tree-node-row {side}\" data-node-index=\"{i}\">\
             <div class=\"tree-branch\"><svg class=\"branch-svg\" viewBox=\"0 0 100 60\" preserveAspectRatio=\"none\">\
             <path class=\"branch-path\" d=\"{path}\"/></svg></div>\
             <div class=\"trunk-connector-dot\"><div class=\"dot-pulse\"></div></div>\
             <div class=\"tree-node-card\"><div class=\"node-card-inner\">\
             <div class=\"node-icon-wrapper\"><div class=\"node-icon-glow\"></div><div class=\"node-icon\">{icon}</div></div>\
             <div class=\"node-text\"><h3>{title}</h3><p>{desc}</p></div>\
             <div class=\"node-card-shine\"></div></div></div></div>",
            side = side.class(),
            i = i,
            path = side.branch_path(),
            icon = escape(icon),
            title = escape(item.title),
            desc = escape(item.description),
        );
    }
    html
}

pub fn tech_stack(items: &[&str], stagger_ms: u32) -> String {
    let mut html = String::new();
    for (i, name) in items.iter().enumerate() {
        _ = write!(
            html,
            "<div class=\"animated-card\" data-reveal-delay=\"{}\">\
             <button type=\"button\" class=\"magnetic-btn tech-item\">{}</button></div>",
            stagger_delay_ms(i, stagger_ms),
            escape(name),
        );
    }
    html
}

pub fn team(members: &[TeamMember], stagger_ms: u32) -> String {
    let mut html = String::new();
    for (i, m) in members.iter().enumerate() {
        let card = format!(
            "<div class=\"team-member-card\"><div class=\"team-card-bg\"></div>\
             <div class=\"team-avatar-ring\"><div class=\"team-avatar\"><div class=\"avatar-glow\"></div>\
             <span>{}</span></div></div><h3>{}</h3><p>{}</p></div>",
            escape(&crate::content::initials(m.name)),
            escape(m.name),
            escape(m.role),
        );
        let card = match m.linkedin {
            Some(href) => format!(
                "<a class=\"team-member-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape(href),
                card
            ),
            None => card,
        };
        _ = write!(
            html,
            "<div class=\"animated-card\" data-reveal-delay=\"{}\">{}</div>",
            stagger_delay_ms(i, stagger_ms),
            card
        );
    }
    html
}

pub fn faq(items: &[FaqItem], open: Option<usize>) -> String {
    let mut html = String::new();
    for (i, item) in items.iter().enumerate() {
        let is_open = open == Some(i);
        _ = write!(
            html,
            "<div class=\"faq-item{}\" data-faq-index=\"{}\">\
             <button type=\"button\" class=\"faq-question\"><span>{}</span>\
             <span class=\"faq-icon\">{}</span></button>\
             <div class=\"faq-answer\"><p>{}</p></div></div>",
            if is_open { " open" } else { "" },
            i,
            escape(item.question),
            faq_icon(is_open),
            escape(item.answer),
        );
    }
    html
}

#[inline]
pub fn faq_icon(open: bool) -> &'static str {
    if open {
        "\u{2212}"
    } else {
        "+"
    }
}

pub fn nav_links(links: &[Link]) -> String {
    links
        .iter()
        .map(|l| format!("<a class=\"nav-link\" {}>{}</a>", link_attrs(l), escape(l.label)))
        .collect()
}

pub fn footer_links(links: &[Link]) -> String {
    links
        .iter()
        .map(|l| format!("<a {}>{}</a>", link_attrs(l), escape(l.label)))
        .collect()
}

pub fn social_links(links: &[SocialLink]) -> String {
    links
        .iter()
        .map(|s| {
            format!(
                "<a class=\"social-link\" href=\"{}\" aria-label=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                escape(s.href),
                escape(s.platform),
                escape(s.icon)
            )
        })
        .collect()
}

pub fn sparkles() -> String {
    let mut html = String::from("<div class=\"sparkles\">");
    for s in decor::sparkles() {
        _ = write!(html, "<div class=\"sparkle\" style=\"{}\"></div>", s.style());
    }
    html.push_str("</div>");
    html
}

pub fn text_reveal(text: &str) -> String {
    let mut html = String::new();
    for c in reveal_chars(text) {
        let mut buf = [0u8; 4];
        _ = write!(
            html,
            "<span class=\"text-reveal-char\" style=\"--char-delay: {}s\">{}</span>",
            c.delay_sec,
            escape(c.display.encode_utf8(&mut buf)),
        );
    }
    html
}

pub fn showcase(shots: &[Screenshot]) -> String {
    let mut html = String::new();
    for (i, s) in shots.iter().enumerate() {
        _ = write!(
            html,
            "<div class=\"phone-card phone-{i}\" style=\"--i: {i}\">\
             <div class=\"phone-frame\"><div class=\"phone-notch\"></div>\
             <div class=\"phone-screen\"><img src=\"{src}\" alt=\"{alt}\" loading=\"lazy\"/></div></div>\
             <div class=\"phone-info\"><h4>{title}</h4><p>{desc}</p></div></div>",
            i = i,
            src = escape(s.src),
            alt = escape(s.alt),
            title = escape(s.title),
            desc = escape(s.description),
        );
    }
    html
}

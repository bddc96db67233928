use crate::constants::{
    HERO_GLOW, HERO_PHONE, MAGNETIC_BUTTON, SHOWCASE_CARD, SHOWCASE_WRAPPER, TEAM_CARD, TILT_CARD,
};
use crate::dom;
use crate::frame::AnimationLoop;
use crate::listener::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use vextra_core::lifecycle::{Ledger, Scope};
use vextra_core::pointer::{showcase_transforms, Magnetic, PhoneFollower, TiltStyle};
use web_sys as web;

pub fn mount(ledger: &Rc<Ledger>, document: &web::Document) -> Scope {
    let mut scope = Scope::new("pointer");
    let mut wired = 0usize;
    for (selector, style) in [(TILT_CARD, TiltStyle::Card), (TEAM_CARD, TiltStyle::TeamMember)] {
        for el in dom::query_all(document, selector) {
            wired += wire_tilt(ledger, &el, style, &mut scope) as usize;
        }
    }
    for el in dom::query_all(document, MAGNETIC_BUTTON) {
        wired += wire_magnetic(ledger, &el, &mut scope) as usize;
    }
    if let Some(wrapper) = dom::query(document, SHOWCASE_WRAPPER) {
        wired += wire_showcase(ledger, &wrapper, &mut scope) as usize;
    }
    if let Some(phone) = dom::query(document, HERO_PHONE) {
        let glow = dom::query(document, HERO_GLOW);
        wired += wire_hero_phone(ledger, phone, glow, &mut scope) as usize;
    }
    log::info!("[pointer] wired {} elements", wired);
    scope
}

// Wire a move/leave pair; both must register for the element to count.
fn wire_pair<M, L>(
    ledger: &Rc<Ledger>,
    el: &web::Element,
    scope: &mut Scope,
    on_move: M,
    on_leave: L,
) -> bool
where
    M: FnMut(web::Event) + 'static,
    L: FnMut(web::Event) + 'static,
{
    let result = EventListener::new(ledger, el, "mousemove", on_move)
        .and_then(|m| EventListener::new(ledger, el, "mouseleave", on_leave).map(|l| (m, l)));
    match result {
        Ok((m, l)) => {
            scope.hold(m);
            scope.hold(l);
            true
        }
        Err(e) => {
            log::warn!("[pointer] {:?}", e);
            false
        }
    }
}

fn wire_tilt(ledger: &Rc<Ledger>, el: &web::Element, style: TiltStyle, scope: &mut Scope) -> bool {
    let card = el.clone();
    let on_move = move |ev: web::Event| {
        let Some(client) = dom::client_point(&ev) else {
            return;
        };
        let tilt = style.tilt_at(&dom::element_rect(&card), client);
        dom::set_style(&card, "transform", &style.transform(tilt));
    };
    let card = el.clone();
    let on_leave = move |_: web::Event| {
        dom::set_style(&card, "transform", &style.neutral_transform());
    };
    wire_pair(ledger, el, scope, on_move, on_leave)
}

fn wire_magnetic(ledger: &Rc<Ledger>, el: &web::Element, scope: &mut Scope) -> bool {
    let button = el.clone();
    let on_move = move |ev: web::Event| {
        let Some(client) = dom::client_point(&ev) else {
            return;
        };
        let pull = Magnetic::at(&dom::element_rect(&button), client);
        dom::set_style(&button, "transform", &pull.transform());
    };
    let button = el.clone();
    let on_leave = move |_: web::Event| {
        dom::set_style(&button, "transform", &Magnetic::NEUTRAL.transform());
    };
    wire_pair(ledger, el, scope, on_move, on_leave)
}

/// One handler drives every phone card in the carousel from the same sample.
fn wire_showcase(ledger: &Rc<Ledger>, wrapper: &web::Element, scope: &mut Scope) -> bool {
    let container = wrapper.clone();
    let on_move = move |ev: web::Event| {
        let Some(client) = dom::client_point(&ev) else {
            return;
        };
        let cards = dom::query_all(&container, SHOWCASE_CARD);
        let transforms = showcase_transforms(&dom::element_rect(&container), client, cards.len());
        for (card, t) in cards.iter().zip(transforms.iter()) {
            dom::set_style(card, "transform", &t.css());
        }
    };
    let container = wrapper.clone();
    let on_leave = move |_: web::Event| {
        for card in dom::query_all(&container, SHOWCASE_CARD) {
            dom::set_style(&card, "transform", "");
        }
    };
    wire_pair(ledger, wrapper, scope, on_move, on_leave)
}

/// The hero phone follows the pointer anywhere in the window, eased per frame.
fn wire_hero_phone(
    ledger: &Rc<Ledger>,
    phone: web::Element,
    glow: Option<web::Element>,
    scope: &mut Scope,
) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let follower = Rc::new(RefCell::new(PhoneFollower::new()));

    let follower_move = follower.clone();
    let phone_move = phone.clone();
    let listener = EventListener::passive(ledger, &window, "mousemove", move |ev| {
        if let Some(client) = dom::client_point(&ev) {
            follower_move
                .borrow_mut()
                .set_pointer(&dom::element_rect(&phone_move), client);
        }
    });
    let listener = match listener {
        Ok(l) => l,
        Err(e) => {
            log::warn!("[pointer] hero phone: {:?}", e);
            return false;
        }
    };

    let frames = AnimationLoop::start(ledger, move || {
        let mut f = follower.borrow_mut();
        f.step();
        dom::set_style(&phone, "transform", &f.phone_transform());
        if let Some(glow) = &glow {
            dom::set_style(glow, "transform", &f.glow_transform());
        }
        true
    });
    scope.hold(listener);
    match frames {
        Some(frames) => {
            scope.hold(frames);
            true
        }
        None => false,
    }
}

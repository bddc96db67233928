use crate::constants::{
    COUNTER_DURATION_ATTR, COUNTER_END_ATTR, COUNTER_SUFFIX_ATTR, REVEAL_DELAY_ATTR,
};
use crate::dom;
use crate::frame::AnimationLoop;
use crate::listener::{Observer, Timeout};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use vextra_core::lifecycle::{Ledger, Scope};
use vextra_core::reveal::{CounterAnimation, CounterEnd, OneShot, RevealKind};
use web_sys as web;

fn supports_intersection_observer() -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w, &"IntersectionObserver".into()).unwrap_or(false))
        .unwrap_or(false)
}

/// Observe every reveal target on the page. Without IntersectionObserver
/// support nothing is observed and elements stay in their initial state.
pub fn mount(ledger: &Rc<Ledger>, document: &web::Document) -> Scope {
    let mut scope = Scope::new("reveal");
    if !supports_intersection_observer() {
        log::warn!("[reveal] IntersectionObserver unavailable; reveals disabled");
        return scope;
    }

    // Work started after an element fires (staggered class changes, counters)
    let deferred = Rc::new(RefCell::new(Scope::new("reveal-deferred")));
    let mut observed = 0usize;
    for kind in RevealKind::ALL {
        for el in dom::query_all(document, kind.selector()) {
            match observe(ledger, &el, kind, &deferred) {
                Ok(obs) => {
                    scope.hold(obs);
                    observed += 1;
                }
                Err(e) => log::warn!("[reveal] {:?} not observed: {:?}", kind, e),
            }
        }
    }
    scope.hold(deferred);
    log::info!("[reveal] observing {} elements", observed);
    scope
}

fn observe(
    ledger: &Rc<Ledger>,
    el: &web::Element,
    kind: RevealKind,
    deferred: &Rc<RefCell<Scope>>,
) -> anyhow::Result<Observer> {
    let mut shot = OneShot::new();
    let delay_ms = dom::data_attr_u32(el, REVEAL_DELAY_ATTR).unwrap_or(0);
    let target = el.clone();
    let ledger_cb = ledger.clone();
    let deferred = deferred.clone();
    Observer::new(ledger, el, kind.options(), move |is_intersecting| {
        if shot.observe(is_intersecting) {
            apply(&ledger_cb, &target, kind, delay_ms, &deferred);
        }
        !shot.has_fired()
    })
}

fn apply(
    ledger: &Rc<Ledger>,
    el: &web::Element,
    kind: RevealKind,
    delay_ms: u32,
    deferred: &Rc<RefCell<Scope>>,
) {
    if kind == RevealKind::Counter {
        if let Some(anim) = start_counter(ledger, el) {
            deferred.borrow_mut().hold(anim);
        }
        return;
    }
    let Some(class) = kind.class() else {
        return;
    };
    if delay_ms == 0 {
        _ = el.class_list().add_1(class);
        return;
    }
    let el = el.clone();
    match Timeout::new(ledger, delay_ms, move || {
        _ = el.class_list().add_1(class);
    }) {
        Ok(t) => deferred.borrow_mut().hold(t),
        Err(e) => log::warn!("[reveal] stagger timer: {:?}", e),
    }
}

pub fn counter_animation(el: &web::Element) -> CounterAnimation {
    let end = CounterEnd::parse(&el.get_attribute(COUNTER_END_ATTR).unwrap_or_default());
    let suffix = el.get_attribute(COUNTER_SUFFIX_ATTR).unwrap_or_default();
    let anim = CounterAnimation::new(end, suffix);
    match dom::data_attr_f64(el, COUNTER_DURATION_ATTR) {
        Some(ms) => anim.with_duration_ms(ms),
        None => anim,
    }
}

fn start_counter(ledger: &Rc<Ledger>, el: &web::Element) -> Option<AnimationLoop> {
    let anim = counter_animation(el);
    if let CounterEnd::Text(_) = anim.end {
        el.set_text_content(Some(&anim.frame(0.0).text));
        return None;
    }
    let el = el.clone();
    let started = Instant::now();
    AnimationLoop::start(ledger, move || {
        let frame = anim.frame(started.elapsed().as_secs_f64() * 1000.0);
        el.set_text_content(Some(&frame.text));
        !frame.done
    })
}

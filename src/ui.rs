use crate::constants::*;
use crate::dom;
use crate::listener::EventListener;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use vextra_core::accordion::Accordion;
use vextra_core::lifecycle::{Ledger, Scope};
use vextra_core::markup::faq_icon;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn mount(ledger: &Rc<Ledger>, document: &web::Document) -> Scope {
    let mut scope = Scope::new("ui");
    if let Some(list) = document.get_element_by_id(FAQ_LIST_ID) {
        if let Err(e) = wire_faq(ledger, list, &mut scope) {
            log::warn!("[faq] {:?}", e);
        }
    }
    if let Some(toggle) = dom::query(document, MOBILE_MENU_TOGGLE) {
        if let Err(e) = wire_mobile_menu(ledger, document, toggle, &mut scope) {
            log::warn!("[menu] {:?}", e);
        }
    }
    scope
}

fn render_faq(list: &web::Element, state: &Accordion) {
    for item in dom::query_all(list, FAQ_ITEM) {
        let Some(index) = dom::data_attr_u32(&item, FAQ_INDEX_ATTR) else {
            continue;
        };
        let open = state.is_open(index as usize);
        dom::set_class(&item, CLASS_OPEN, open);
        if let Some(icon) = dom::query(&item, FAQ_ICON) {
            icon.set_text_content(Some(faq_icon(open)));
        }
    }
}

/// One delegated click handler on the list toggles whichever item was hit.
fn wire_faq(ledger: &Rc<Ledger>, list: web::Element, scope: &mut Scope) -> anyhow::Result<()> {
    let state = Rc::new(RefCell::new(Accordion::new(FAQ_DEFAULT_OPEN)));
    render_faq(&list, &state.borrow());
    let target_list = list.clone();
    scope.hold(EventListener::new(ledger, &list, "click", move |ev| {
        let Some(item) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(FAQ_ITEM).ok().flatten())
        else {
            return;
        };
        let Some(index) = dom::data_attr_u32(&item, FAQ_INDEX_ATTR) else {
            return;
        };
        let mut st = state.borrow_mut();
        st.toggle(index as usize);
        render_faq(&target_list, &st);
    })?);
    Ok(())
}

fn wire_mobile_menu(
    ledger: &Rc<Ledger>,
    document: &web::Document,
    toggle: web::Element,
    scope: &mut Scope,
) -> anyhow::Result<()> {
    let menu = dom::query(document, MOBILE_MENU);
    let is_open = Rc::new(Cell::new(false));
    let apply = {
        let toggle = toggle.clone();
        let is_open = is_open.clone();
        move |open: bool| {
            is_open.set(open);
            dom::set_class(&toggle, CLASS_ACTIVE, open);
            if let Some(menu) = &menu {
                dom::set_class(menu, CLASS_OPEN, open);
            }
        }
    };

    let flip = apply.clone();
    scope.hold(EventListener::new(ledger, &toggle, "click", move |_| {
        flip(!is_open.get());
    })?);
    for closer in dom::query_all(document, MOBILE_MENU_CLOSERS) {
        let close = apply.clone();
        scope.hold(EventListener::new(ledger, &closer, "click", move |_| close(false))?);
    }
    Ok(())
}

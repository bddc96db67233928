use crate::constants::*;
use crate::dom;
use crate::listener::EventListener;
use std::rc::Rc;
use vextra_core::contact::{ContactForm, Subject};
use vextra_core::content::SITE;
use vextra_core::lifecycle::{Ledger, Scope};
use wasm_bindgen::JsCast;
use web_sys as web;

fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub fn read_form(document: &web::Document) -> ContactForm {
    ContactForm {
        first_name: field_value(document, FIELD_FIRST_NAME),
        last_name: field_value(document, FIELD_LAST_NAME),
        email: field_value(document, FIELD_EMAIL),
        subject: Subject::from_value(&field_value(document, FIELD_SUBJECT)),
        message: field_value(document, FIELD_MESSAGE),
    }
}

fn show_status(document: &web::Document, text: &str, ok: bool) {
    if let Some(el) = document.get_element_by_id(CONTACT_STATUS_ID) {
        el.set_text_content(Some(text));
        dom::set_class(&el, CLASS_SUCCESS, ok);
        dom::set_class(&el, CLASS_ERROR, !ok);
    }
}

/// Validate on submit and hand a valid message to the user's mail client.
pub fn mount(ledger: &Rc<Ledger>, document: &web::Document) -> Scope {
    let mut scope = Scope::new("contact");
    let Some(form) = dom::query(document, CONTACT_FORM) else {
        return scope;
    };
    let doc = document.clone();
    let listener = EventListener::new(ledger, &form, "submit", move |ev| {
        ev.prevent_default();
        let data = read_form(&doc);
        match data.mailto(SITE.contact.email) {
            Ok(href) => {
                log::info!("[contact] {} message ready", data.subject.value());
                show_status(&doc, "Opening your mail client\u{2026}", true);
                if let Some(w) = web::window() {
                    _ = w.location().set_href(&href);
                }
            }
            Err(e) => {
                log::warn!("[contact] {}", e);
                show_status(&doc, &e.to_string(), false);
            }
        }
    });
    match listener {
        Ok(l) => scope.hold(l),
        Err(e) => log::warn!("[contact] {:?}", e),
    }
    scope
}

#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use vextra_core::lifecycle::{Ledger, Scope};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod listener;
mod reveal;
mod sections;
mod ui;

/// Everything mounted on the current page. Dropping the scopes is the unmount.
struct App {
    ledger: Rc<Ledger>,
    scopes: Vec<Scope>,
}

thread_local! {
    static APP: RefCell<App> = RefCell::new(App {
        ledger: Ledger::new(),
        scopes: Vec::new(),
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vextra-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;
    sections::populate(&document);
    mount_all(&document);
    wire_pagehide();
    Ok(())
}

async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != web::DocumentReadyState::Loading {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let options = web::AddEventListenerOptions::new();
        options.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &options,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}

fn mount_all(document: &web::Document) {
    APP.with(|app| {
        let mut app = app.borrow_mut();
        if !app.scopes.is_empty() {
            log::warn!("[app] already mounted");
            return;
        }
        let ledger = app.ledger.clone();
        app.scopes = vec![
            reveal::mount(&ledger, document),
            events::mount_pointer(&ledger, document),
            events::mount_scroll(&ledger, document),
            ui::mount(&ledger, document),
            contact::mount(&ledger, document),
        ];
        log::info!("[app] mounted {} subscriptions", ledger.total_active());
    });
}

// Lives for the whole page; tears every component down on navigation away.
fn wire_pagehide() {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || unmount()) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Mount every effect on the current document. No-op when already mounted.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    mount_all(&document);
    Ok(())
}

/// Release every listener, observer, timeout and animation frame.
#[wasm_bindgen]
pub fn unmount() {
    let (scopes, ledger) = APP.with(|app| {
        let mut app = app.borrow_mut();
        (std::mem::take(&mut app.scopes), app.ledger.clone())
    });
    let before = ledger.total_active();
    drop(scopes);
    log::info!(
        "[app] unmounted; released {} subscriptions, {} still active",
        before.saturating_sub(ledger.total_active()),
        ledger.total_active()
    );
}

/// Live subscription count, for leak checks from the page.
#[wasm_bindgen(js_name = activeSubscriptions)]
pub fn active_subscriptions() -> usize {
    APP.with(|app| app.borrow().ledger.total_active())
}

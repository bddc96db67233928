//! RAII guards for browser subscriptions.
//!
//! Each guard registers on construction, takes a [`Lease`] from the shared
//! ledger, and unregisters on drop. Components keep their guards in a
//! `Scope`, so unmounting never leaves a callback pointing at a removed node.

use std::rc::Rc;
use vextra_core::lifecycle::{Lease, Ledger, ResourceKind, SharedLease};
use vextra_core::reveal::ObserverOptions;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
    _lease: Lease,
}

impl EventListener {
    pub fn new<F>(
        ledger: &Rc<Ledger>,
        target: &web::EventTarget,
        event: &'static str,
        handler: F,
    ) -> anyhow::Result<Self>
    where
        F: FnMut(web::Event) + 'static,
    {
        Self::with_passive(ledger, target, event, false, handler)
    }

    /// Passive listeners never call `preventDefault`; used for scroll and resize.
    pub fn passive<F>(
        ledger: &Rc<Ledger>,
        target: &web::EventTarget,
        event: &'static str,
        handler: F,
    ) -> anyhow::Result<Self>
    where
        F: FnMut(web::Event) + 'static,
    {
        Self::with_passive(ledger, target, event, true, handler)
    }

    fn with_passive<F>(
        ledger: &Rc<Ledger>,
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: F,
    ) -> anyhow::Result<Self>
    where
        F: FnMut(web::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
            _lease: ledger.acquire(ResourceKind::Listener),
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// A pending `setTimeout`. Cleared on drop unless it already fired.
pub struct Timeout {
    handle: i32,
    lease: SharedLease,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F>(ledger: &Rc<Ledger>, delay_ms: u32, handler: F) -> anyhow::Result<Self>
    where
        F: FnOnce() + 'static,
    {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let lease = ledger.acquire_shared(ResourceKind::Timeout);
        let lease_fired = lease.clone();
        let mut handler = Some(handler);
        let callback = Closure::wrap(Box::new(move || {
            lease_fired.release();
            if let Some(h) = handler.take() {
                h();
            }
        }) as Box<dyn FnMut()>);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| anyhow::anyhow!("setTimeout: {:?}", e))?;
        Ok(Self {
            handle,
            lease,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if self.lease.release() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(self.handle);
            }
        }
    }
}

/// One `IntersectionObserver` over a single target, disconnected on drop.
///
/// `on_entry` returns whether to keep observing; once it returns `false` the
/// observer disconnects and its lease is released right away.
pub struct Observer {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
    lease: SharedLease,
}

impl Observer {
    pub fn new<F>(
        ledger: &Rc<Ledger>,
        target: &web::Element,
        options: ObserverOptions,
        mut on_entry: F,
    ) -> anyhow::Result<Self>
    where
        F: FnMut(bool) -> bool + 'static,
    {
        let lease = ledger.acquire_shared(ResourceKind::Observer);
        let lease_done = lease.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !on_entry(entry.is_intersecting()) {
                        observer.disconnect();
                        lease_done.release();
                        break;
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
            lease,
        })
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        if self.lease.release() {
            self.observer.disconnect();
        }
    }
}

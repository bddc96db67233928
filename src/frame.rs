use std::cell::{Cell, RefCell};
use std::rc::Rc;
use vextra_core::lifecycle::{Ledger, ResourceKind, SharedLease};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A self-rescheduling `requestAnimationFrame` loop.
///
/// `on_frame` returns whether another frame should be scheduled. Dropping the
/// loop cancels the pending frame and frees the closure.
pub struct AnimationLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
    lease: SharedLease,
}

impl AnimationLoop {
    pub fn start<F>(ledger: &Rc<Ledger>, mut on_frame: F) -> Option<Self>
    where
        F: FnMut() -> bool + 'static,
    {
        let window = web::window()?;
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None::<i32>));
        let lease = ledger.acquire_shared(ResourceKind::Frame);

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let lease_tick = lease.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !on_frame() {
                lease_tick.release();
                return;
            }
            if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    pending_tick.set(Some(id));
                }
            }
        }) as Box<dyn FnMut()>));

        let scheduled = tick
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
        match scheduled {
            Some(Ok(id)) => pending.set(Some(id)),
            Some(Err(e)) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                tick.borrow_mut().take();
                return None;
            }
            None => return None,
        }
        Some(Self {
            tick,
            pending,
            lease,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.lease.release();
        // The closure holds an Rc to `tick`; clearing it breaks the cycle.
        self.tick.borrow_mut().take();
    }
}

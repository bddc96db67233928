//! Scoped acquire/release bookkeeping for browser subscriptions.
//!
//! Every listener, observer, scheduled frame and timeout takes a [`Lease`] from
//! the shared [`Ledger`] when it is registered and gives it back exactly once
//! when it is torn down. A mounted component keeps its guards in a [`Scope`];
//! dropping the scope is the unmount.

use fnv::FnvHashMap;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Listener,
    Observer,
    Frame,
    Timeout,
}

#[derive(Debug, Default)]
pub struct Ledger {
    active: RefCell<FnvHashMap<ResourceKind, usize>>,
    registered: Cell<usize>,
    released: Cell<usize>,
}

impl Ledger {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn acquire(self: &Rc<Self>, kind: ResourceKind) -> Lease {
        *self.active.borrow_mut().entry(kind).or_insert(0) += 1;
        self.registered.set(self.registered.get() + 1);
        Lease {
            ledger: Rc::clone(self),
            kind,
            released: false,
        }
    }

    pub fn acquire_shared(self: &Rc<Self>, kind: ResourceKind) -> SharedLease {
        SharedLease::new(self.acquire(kind))
    }

    fn release(&self, kind: ResourceKind) {
        if let Some(n) = self.active.borrow_mut().get_mut(&kind) {
            *n = n.saturating_sub(1);
        }
        self.released.set(self.released.get() + 1);
    }

    pub fn active(&self, kind: ResourceKind) -> usize {
        self.active.borrow().get(&kind).copied().unwrap_or(0)
    }

    pub fn total_active(&self) -> usize {
        self.active.borrow().values().sum()
    }

    pub fn registered(&self) -> usize {
        self.registered.get()
    }

    pub fn released(&self) -> usize {
        self.released.get()
    }
}

/// Proof of one live registration. Released on drop.
#[derive(Debug)]
pub struct Lease {
    ledger: Rc<Ledger>,
    kind: ResourceKind,
    released: bool,
}

impl Lease {
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Release early; later drops are no-ops.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.ledger.release(self.kind);
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        self.release();
    }
}

/// A lease shared between a guard and its browser callback, so a
/// subscription that finishes on its own (a fired timeout, a one-shot
/// observer, a stopped frame loop) stops counting as active before the
/// guard itself is dropped.
#[derive(Clone, Debug)]
pub struct SharedLease(Rc<RefCell<Option<Lease>>>);

impl SharedLease {
    pub fn new(lease: Lease) -> Self {
        Self(Rc::new(RefCell::new(Some(lease))))
    }

    /// Returns whether this call did the release.
    pub fn release(&self) -> bool {
        self.0.borrow_mut().take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.0.borrow().is_some()
    }
}

/// Owns the guards of one mounted component.
#[derive(Default)]
pub struct Scope {
    name: &'static str,
    held: Vec<Box<dyn Any>>,
}

impl Scope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            held: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn hold<T: 'static>(&mut self, guard: T) {
        self.held.push(Box::new(guard));
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Drop every guard, newest first.
    pub fn clear(&mut self) {
        while let Some(guard) = self.held.pop() {
            drop(guard);
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        if !self.held.is_empty() {
            log::debug!("[scope] {} releasing {} guards", self.name, self.held.len());
        }
        self.clear();
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope")
            .field("name", &self.name)
            .field("held", &self.held.len())
            .finish()
    }
}

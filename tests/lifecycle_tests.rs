// Host-side tests for subscription bookkeeping across mount/unmount.

use std::cell::Cell;
use std::rc::Rc;
use vextra_core::lifecycle::{Ledger, ResourceKind, Scope, SharedLease};
use vextra_core::reveal::OneShot;

#[test]
fn unmount_releases_every_subscription() {
    let ledger = Ledger::new();
    let mut tree = Scope::new("tree");
    tree.hold(ledger.acquire(ResourceKind::Listener)); // scroll
    tree.hold(ledger.acquire(ResourceKind::Listener)); // resize
    tree.hold(ledger.acquire(ResourceKind::Frame));
    let mut reveal = Scope::new("reveal");
    for _ in 0..4 {
        reveal.hold(ledger.acquire(ResourceKind::Observer));
    }
    reveal.hold(ledger.acquire(ResourceKind::Timeout));

    assert_eq!(ledger.total_active(), 8);
    assert_eq!(ledger.active(ResourceKind::Observer), 4);

    // Unmount mid-animation
    drop(tree);
    assert_eq!(ledger.active(ResourceKind::Frame), 0);
    drop(reveal);
    assert_eq!(ledger.total_active(), 0);
    assert_eq!(ledger.registered(), ledger.released());
}

#[test]
fn early_release_is_counted_once() {
    let ledger = Ledger::new();
    let mut lease = ledger.acquire(ResourceKind::Timeout);
    lease.release();
    assert!(lease.is_released());
    lease.release();
    drop(lease);
    assert_eq!(ledger.released(), 1);
    assert_eq!(ledger.total_active(), 0);
}

struct Probe(Rc<Cell<usize>>);

impl Drop for Probe {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn clearing_a_scope_drops_guards_and_allows_remount() {
    let dropped = Rc::new(Cell::new(0));
    let ledger = Ledger::new();
    let mut scope = Scope::new("pointer");
    scope.hold(Probe(dropped.clone()));
    scope.hold(ledger.acquire(ResourceKind::Listener));
    assert_eq!(scope.len(), 2);

    scope.clear();
    assert!(scope.is_empty());
    assert_eq!(dropped.get(), 1);
    assert_eq!(ledger.total_active(), 0);

    scope.hold(ledger.acquire(ResourceKind::Listener));
    assert_eq!(ledger.total_active(), 1);
    drop(scope);
    assert_eq!(ledger.total_active(), 0);
    assert_eq!(ledger.registered(), 2);
}

#[test]
fn nested_scopes_release_with_their_parent() {
    let ledger = Ledger::new();
    let deferred = Rc::new(std::cell::RefCell::new(Scope::new("deferred")));
    deferred
        .borrow_mut()
        .hold(ledger.acquire(ResourceKind::Timeout));
    let mut parent = Scope::new("reveal");
    parent.hold(deferred);
    assert_eq!(ledger.active(ResourceKind::Timeout), 1);
    drop(parent);
    assert_eq!(ledger.total_active(), 0);
}

// Stand-in for a browser guard: kept in a scope while its callback may
// finish the subscription early.
struct Guard {
    _lease: SharedLease,
}

#[test]
fn fired_one_shot_stops_counting_before_unmount() {
    let ledger = Ledger::new();
    let mut scope = Scope::new("reveal");
    let mut callbacks = Vec::new();
    for _ in 0..3 {
        let lease = ledger.acquire_shared(ResourceKind::Observer);
        let lease_cb = lease.clone();
        let mut shot = OneShot::new();
        callbacks.push(move |is_intersecting: bool| {
            shot.observe(is_intersecting);
            if shot.has_fired() {
                lease_cb.release();
            }
        });
        scope.hold(Guard { _lease: lease });
    }
    assert_eq!(ledger.active(ResourceKind::Observer), 3);

    callbacks[0](false);
    assert_eq!(ledger.active(ResourceKind::Observer), 3);
    callbacks[0](true);
    callbacks[2](true);
    assert_eq!(ledger.active(ResourceKind::Observer), 1);
    assert_eq!(scope.len(), 3);

    // Later entries and the unmount itself do not release twice
    callbacks[0](true);
    drop(callbacks);
    drop(scope);
    assert_eq!(ledger.total_active(), 0);
    assert_eq!(ledger.released(), 3);
}

#[test]
fn shared_lease_releases_once_across_clones() {
    let ledger = Ledger::new();
    let lease = ledger.acquire_shared(ResourceKind::Timeout);
    let fired = lease.clone();
    assert!(lease.is_active());
    assert!(fired.release());
    assert!(!lease.is_active());
    assert!(!lease.release());
    drop(fired);
    drop(lease);
    assert_eq!(ledger.released(), 1);
}

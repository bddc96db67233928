pub mod accordion;
pub mod constants;
pub mod contact;
pub mod content;
pub mod decor;
pub mod lifecycle;
pub mod markup;
pub mod pointer;
pub mod progress;
pub mod reveal;
pub mod tree;
pub mod visibility;

pub use accordion::Accordion;
pub use lifecycle::{Ledger, Lease, ResourceKind, Scope, SharedLease};
pub use pointer::{ElementRect, Magnetic, PhoneFollower, Tilt, TiltStyle};
pub use progress::{target_progress, ContainerGeometry, ScrollProgress};
pub use reveal::{CounterAnimation, ObserverOptions, OneShot, RevealKind};
pub use tree::TreeState;
pub use visibility::VisibilitySet;

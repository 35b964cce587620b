//! Stable object identity for graph entities.
//!
//! Every [`Node`](crate::Node), [`Socket`](crate::Socket), [`Edge`](crate::Edge)
//! and [`Scene`](crate::Scene) carries a typed id that is unique for the
//! lifetime of the process. Ids are the only cross-entity reference in
//! serialized form; [`IdMap`] translates serialized ids back to live ones
//! during a single deserialize pass.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Mint a process-unique raw id.
fn next_raw() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Make sure fresh ids are minted strictly above `raw`.
fn reserve_raw(raw: u64) {
    NEXT_ID.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Mint a new id that no live entity uses.
            pub fn fresh() -> Self {
                Self(next_raw())
            }

            /// Adopt an id read from a record. Later [`fresh`](Self::fresh)
            /// calls will never return it.
            pub fn restore(raw: u64) -> Self {
                reserve_raw(raw);
                Self(raw)
            }

            pub fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identity of a [`Scene`](crate::Scene).
    SceneId
);
entity_id!(
    /// Identity of a [`Node`](crate::Node).
    NodeId
);
entity_id!(
    /// Identity of a [`Socket`](crate::Socket).
    SocketId
);
entity_id!(
    /// Identity of an [`Edge`](crate::Edge).
    EdgeId
);

/// Either adopt the serialized id or mint a fresh one.
pub(crate) fn pick_id<T>(raw: u64, restore_id: bool, restore: fn(u64) -> T, fresh: fn() -> T) -> T {
    if restore_id {
        restore(raw)
    } else {
        fresh()
    }
}

/// Serialized socket id → live socket id for one deserialize pass.
///
/// Nodes register their sockets here while being rebuilt, and edges resolve
/// their `start`/`end` references through it afterwards. A new map must be
/// built for every pass; entries from a previous load or paste would
/// otherwise leak into the next one.
#[derive(Debug, Default)]
pub struct IdMap {
    sockets: HashMap<u64, SocketId>,
}

impl IdMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_socket(&mut self, serialized: u64, live: SocketId) {
        self.sockets.insert(serialized, live);
    }

    pub fn socket(&self, serialized: u64) -> Option<SocketId> {
        self.sockets.get(&serialized).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.sockets.is_empty()
    }
}

//! # Screen Slots
//!
//! The two state machines every screen is built from.
//!
//! ```text
//! ListSlot:    Idle ──begin──► Loading ──finish──► Ready(items)
//!
//! DetailSlot:  NoSelection ──begin──► Loading ──resolve(Ok)──► Showing
//!                   ▲                    │                        │
//!                   └──────close─────────┴─────────close──────────┘
//! ```
//!
//! Detail loads are never cancelled. Each `begin()` hands out a ticket; a
//! result only lands if its ticket is still the pending one, so a superseded
//! or abandoned load is dropped on arrival.

use crate::api::GatewayError;

/// Identifies one detail request within its slot.
pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListSlot<T> {
    #[default]
    Idle,
    Loading,
    Ready(Vec<T>),
}

impl<T> ListSlot<T> {
    /// Starts the initial load. Returns `false` if it already started.
    pub fn begin(&mut self) -> bool {
        if matches!(self, ListSlot::Idle) {
            *self = ListSlot::Loading;
            true
        } else {
            false
        }
    }

    pub fn finish(&mut self, items: Vec<T>) {
        *self = ListSlot::Ready(items);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListSlot::Loading)
    }

    /// Loaded items; empty while idle or loading.
    pub fn items(&self) -> &[T] {
        match self {
            ListSlot::Ready(items) => items,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPhase {
    NoSelection,
    Loading,
    Showing,
}

/// What happened to a completed detail load.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Applied,
    /// The load failed; whatever was shown before stays.
    Failed(GatewayError),
    /// A newer selection (or a close) superseded this load.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailSlot<T> {
    shown: Option<T>,
    pending: Option<Ticket>,
    issued: Ticket,
}

impl<T> Default for DetailSlot<T> {
    fn default() -> Self {
        Self {
            shown: None,
            pending: None,
            issued: 0,
        }
    }
}

impl<T> DetailSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new load as the one whose result should be shown.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.pending = Some(self.issued);
        self.issued
    }

    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, GatewayError>) -> Resolution {
        if self.pending != Some(ticket) {
            return Resolution::Stale;
        }
        self.pending = None;
        match result {
            Ok(value) => {
                self.shown = Some(value);
                Resolution::Applied
            }
            Err(e) => Resolution::Failed(e),
        }
    }

    /// Back to `NoSelection`; any in-flight result will be discarded.
    pub fn close(&mut self) {
        self.shown = None;
        self.pending = None;
    }

    pub fn shown(&self) -> Option<&T> {
        self.shown.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn phase(&self) -> DetailPhase {
        if self.pending.is_some() {
            DetailPhase::Loading
        } else if self.shown.is_some() {
            DetailPhase::Showing
        } else {
            DetailPhase::NoSelection
        }
    }
}

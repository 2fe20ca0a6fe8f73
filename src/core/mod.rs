//! # Core Application Logic
//!
//! This module contains the guide's business logic.
//! It knows nothing about HTTP or about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (screens)      │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │ ── spawns ────────────►  │  Resolver  │
//!     │  Adapter   │ ◄── Action::*Loaded ──── │  + Gateway │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and one state container per screen
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`slot`]: List and detail state machines shared by every screen
//! - [`listing`]: Participant sorting, filtering and category lookup
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod listing;
pub mod slot;
pub mod state;

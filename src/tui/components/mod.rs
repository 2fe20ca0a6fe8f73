//! # TUI Components
//!
//! Display pieces composed by `ui.rs`:
//! - `TitleBar`: single-line status bar (stateless, props only)
//! - `DetailPopup`: modal text overlay for one record
//! - `ProductList`: modal list of a company's products (borrows its `ListState`)
//!
//! Components receive external data as props, not by reaching into `App`,
//! so each one can be rendered against a `TestBackend` in isolation.

mod popup;
mod title_bar;

pub use popup::{DetailPopup, ProductList};
pub use title_bar::TitleBar;

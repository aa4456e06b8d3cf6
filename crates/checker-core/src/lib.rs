//! # checker-core
//!
//! Framework-free pieces of the supplement-checker web shell.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  LegalNotice   (legal::NOTICE_TEXT)          │
//! ├──────────────────────────────────────────────┤
//! │  Navbar        (route::AppRoute::ALL)        │
//! ├──────────────────────────────────────────────┤
//! │  <main>        AppRoute::resolve(path)       │
//! │                  /       → HomePage          │
//! │                  /check  → CheckerPage       │
//! │                  /legal  → LegalPage         │
//! │                  other   → (nothing)         │
//! ├──────────────────────────────────────────────┤
//! │  Footer                                      │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The browser crate renders this; the static host uses the same route
//! table to pick a status code for deep links.

pub mod error;
pub mod legal;
pub mod route;
pub mod theme;

pub use error::{Result, ShellError};
pub use route::AppRoute;
pub use theme::Theme;

/// Id of the DOM element the application mounts into
pub const MOUNT_ID: &str = "root";

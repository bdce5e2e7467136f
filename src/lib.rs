//! apix - APIs.guru Catalog Explorer
//!
//! Terminal UI for browsing the APIs.guru directory of OpenAPI descriptions:
//! a home screen with a collapsible provider panel, and a details screen
//! summarizing the first version entry of one provider's spec document.
//!
//! The binary in `src/bin/apix.rs` owns the terminal and the event loop;
//! everything testable lives here.

// Core modules
pub mod config;
pub mod types;
pub mod util_text;

// Catalog HTTP client and the background fetch task
pub mod catalog;
pub mod fetch;

// Theme system
pub mod theme;

// UI core (shared layout geometry)
pub mod ui_core;

pub mod app;
pub mod ui;

// Route parsing (startup argument)
pub mod router;

// Clipboard + copy payloads
pub mod clipboard;
pub mod copy_api;

// Re-export commonly used types
pub use app::{App, InputMode, ListPhase};
pub use config::Config;
pub use router::Route;
pub use types::{AppEvent, FetchRequest, SpecSummary};

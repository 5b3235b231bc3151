//! Command-line front end for the elemental arena.
//!
//! # Architecture
//!
//! ```text
//! arena (binary)
//!   ├─→ config    (environment settings, CLI flag overrides)
//!   ├─→ logging   (tracing subscriber: stderr + optional log file)
//!   ├─→ commands  (battle, presets, play)
//!   │     └─→ session (interactive menu)
//!   └─→ display   (all user-facing text)
//! ```
//!
//! Rules live in `arena-core`; this crate only parses input, calls the
//! engine and renders results.

pub mod args;
pub mod commands;
pub mod config;
pub mod display;
pub mod logging;
pub mod session;

pub use config::CliConfig;

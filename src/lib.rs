//! Bubble scatter viewer for infection experiment results.
//!
//! `data` is pure loading and charting; `app`, `state` and `ui` put the
//! chart on screen.

pub mod app;
pub mod color;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;

//! Agidash - terminal dashboard for an AI agent platform
//!
//! Agidash renders the platform's navigation sidebar in the terminal:
//! a fixed list of sections (Agents, Tools, ...) with click-to-select /
//! click-again-to-deselect semantics, plus a connect entry that hands the
//! browser off to the platform's OAuth authorization page.

pub mod app;
pub mod config;
pub mod oauth;
pub mod paths;
pub mod tui;
pub mod ui;

pub use app::{Actions, App, Sidebar};
pub use config::{Config, NavAction, NavEntry};

//! Hotseat - tic-tac-toe for two players sharing one terminal.
//!
//! The game rules live in [`hotseat_tictactoe`]; this crate is the
//! presentation layer around them.
//!
//! # Architecture
//!
//! - **Controller**: owns the game, turns player intents into engine calls
//!   and reports through [`Renderer`] and [`Announcer`] callbacks
//! - **TUI**: ratatui/crossterm front-end feeding keys and clicks to the
//!   controller
//! - **Replay**: headless move-list runner for scripts
//! - **Config / logging**: TOML settings and the tracing subscriber

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};
pub use controller::{Announcer, Controller, Input, Renderer};
pub use logging::{LogSink, init_tracing};
pub use tui::Theme;

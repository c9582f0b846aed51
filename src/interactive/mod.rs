//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Action, App, Message, MessageStyle, map_key, run_tui};

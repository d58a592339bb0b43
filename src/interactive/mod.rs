//! Interactive TUI front end

pub mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, TuiPresenter, run_tui};

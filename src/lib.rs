pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod headless;
pub mod logging;
pub mod tea;
pub mod terminal;
pub mod theme;
pub mod tui;
pub mod ui;

pub use app::App;
pub use error::{FoliotermError, Result};
pub use terminal::{Catalogue, LineKind, Profile, SubmitOutcome, TerminalSession};

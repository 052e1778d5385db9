pub mod actions;
pub mod cli;
pub mod error;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod session;
pub mod storage;

pub use error::{Result, TrackerError};
pub use menu::Action;
pub use prompt::{Choice, Prompter, TerminalPrompter};
pub use session::Session;
pub use storage::{SqliteStore, Store, Table, Value};

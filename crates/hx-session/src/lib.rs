//! # hx-session — the interactive hexplorer session
//!
//! Everything between the terminal and the color math:
//!
//! - [`command`]: the tokens typed at the main prompt and their parser.
//! - [`prompt`]: blocking line input for the prompt and sub-prompts.
//! - [`session`]: the current color, the command loop, and every view.
//! - [`export`]: JSON records and the [`Exporter`] they are written through.
//!
//! The session is generic over its writer, exporter, and random source, so
//! tests drive it with a `Vec<u8>`, an in-memory exporter, and a seeded RNG.

pub mod command;
pub mod export;
pub mod prompt;
pub mod session;

pub use command::Command;
pub use export::{ExportError, ExportRecord, Exporter, JsonDirExporter};
pub use prompt::Prompt;
pub use session::{Flow, Session, SessionError, ask_start_color, write_banner, write_help};

//! Application layer: everything behind the widgets.
//!
//! # Structure
//!
//! - `extractor` - the code-matching rule (pure)
//! - `grid` - column-major preview layout and removal (pure)
//! - `exporter` - spreadsheet construction and artifact staging
//! - `session` - owning state: source file, code list, artifact
//! - `state` - coordinator wiring the session to the FLTK surface
//! - `settings`, `platform`, `file_filters`, `messages`, `error` - ambient

pub mod error;
pub mod exporter;
pub mod extractor;
pub mod file_filters;
pub mod grid;
pub mod messages;
pub mod platform;
pub mod session;
pub mod settings;
pub mod state;

// Re-exports for convenient external access
pub use error::{AppError, Result};
pub use messages::Message;
pub use session::CodeSession;
pub use settings::{AppSettings, ThemeMode};
pub use state::AppState;

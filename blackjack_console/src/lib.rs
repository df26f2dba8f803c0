//! Console front end for `blackjack_lib`: prompts, display, the seating/play-again loop and config loading.

pub mod config;
pub mod console;
pub mod error;
pub mod session;

pub use config::GameConfig;
pub use console::ConsoleDecider;
pub use error::SessionError;
pub use session::{play_session, Session, SessionEvent, SessionInput, SessionSummary};

//! Live adapters for real external interactions.

pub mod clock;
pub mod http;
pub mod prompt;

pub use clock::LiveClock;
pub use http::LiveHttpTransport;
pub use prompt::TerminalPrompt;

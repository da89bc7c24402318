//! Cassettes: YAML recordings of port interactions, replayed in order.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;

pub use config::CassetteConfig;
pub use format::{Cassette, Interaction};
pub use recorder::CassetteRecorder;
pub use replayer::CassetteReplayer;
pub use session::RecordingSession;

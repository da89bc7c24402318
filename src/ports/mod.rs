//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (time, the Tempo HTTP API, the operator at a terminal).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod http;
pub mod prompt;

pub use clock::Clock;
pub use http::{HttpTransport, RawResponse, TransportFuture};
pub use prompt::Prompt;

//! Clock port for obtaining the current date.

use chrono::NaiveDate;

/// Provides today's date.
///
/// Abstracting date access allows deterministic replay by substituting
/// a fixed or recorded clock during tests and cassette playback.
pub trait Clock: Send + Sync {
    /// Today's calendar date.
    fn today(&self) -> NaiveDate;
}

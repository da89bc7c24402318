//! Recording adapter for the `Clock` port.

use chrono::NaiveDate;

use super::record_interaction;
use crate::cassette::format::ports;
use crate::cassette::session::SharedRecorder;
use crate::ports::Clock;

/// Records clock readings while delegating to an inner implementation.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    recorder: SharedRecorder,
}

impl RecordingClock {
    /// Creates a new recording clock wrapping the given implementation.
    pub fn new(inner: Box<dyn Clock>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl Clock for RecordingClock {
    fn today(&self) -> NaiveDate {
        let result = self.inner.today();
        record_interaction(&self.recorder, ports::CLOCK, "today", &(), &result);
        result
    }
}

//! Live clock using the system clock.

use chrono::{Local, NaiveDate};

use crate::ports::clock::Clock;

/// Live clock reading the system time.
///
/// "Today" is the operator's local calendar day, which is what Tempo
/// work-log dates mean.
pub struct LiveClock;

impl Clock for LiveClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

//! Responses for Mobile equipment control and status Commands
use core::fmt::{self, Write as _};
use heapless::String;

/// Length of the `DD/MM/YY,HH:MM:SS` display form
pub const DATE_TIME_LEN: usize = 17;

/// 3.2.22 Clock +CCLK
///
/// Real time clock reading. `year` is the two digit year, 0-99.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTime {
    /// Display form, `DD/MM/YY,HH:MM:SS`
    pub fn formatted(&self) -> String<DATE_TIME_LEN> {
        let mut s = String::new();
        // Every field is range checked to two digits, so this always fits.
        write!(s, "{}", self).ok();
        s
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:02},{:02}:{:02}:{:02}",
            self.day, self.month, self.year, self.hour, self.minute, self.second
        )
    }
}

//! Responses for Short Messages Service Commands
use heapless::String;

pub const SENDER_LEN: usize = 32;
pub const TIMESTAMP_LEN: usize = 24;
pub const MESSAGE_LEN: usize = 160;

/// 4.2.4 Read SMS message +CMGR, text mode
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sms {
    /// Originating address, e.g. `+15551234567`
    pub sender: String<SENDER_LEN>,
    /// Service centre timestamp, `yy/MM/dd,hh:mm:ss±zz`
    pub timestamp: String<TIMESTAMP_LEN>,
    pub message: String<MESSAGE_LEN>,
}

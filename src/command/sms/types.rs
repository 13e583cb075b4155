//! Argument and parameter types used by Short Messages Service Commands and Responses
use atat::atat_derive::AtatEnum;

/// Message format for `+CMGF`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageFormat {
    Pdu = 0,
    Text = 1,
}

/// Deletion scope for `+CMGD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeleteFlag {
    /// Delete the message at `<index>` only
    Index = 0,
    /// Delete all read messages
    Read = 1,
    /// Delete all read and sent messages
    ReadAndSent = 2,
    /// Delete all read, sent and unsent messages
    ReadSentAndUnsent = 3,
    /// Delete all messages
    All = 4,
}

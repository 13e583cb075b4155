#![cfg_attr(not(test), no_std)]

//! Blocking driver for SIMCom SIM800 GSM modules.
//!
//! The driver talks to the module over any [`embedded_io`] serial port and
//! exposes signal quality, SMS, real time clock and power control as typed
//! operations on [`Device`]. Commands are encoded with [`atat`]; replies
//! are matched by tag and parsed without allocation.

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

mod client;
mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod interpreter;
mod module_timing;
mod power;
pub mod session;
mod sms;

#[cfg(test)]
mod test_helpers;

pub use atat;

pub use client::Device;
pub use command::{
    mobile_control::{responses::DateTime, types::Functionality},
    sms::responses::Sms,
};
pub use config::{Config, NoPin, PollBudget, ReverseOutputPin};
pub use error::{Error, GenericError, ParseError};
pub use session::{Response, Session};

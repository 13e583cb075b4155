//! ### 2 - AT commands according to V.25TER
use atat::atat_derive::AtatCmd;

use super::NoResponse;

/// 2.2.35 Save the user setting to ME &W
///
/// Stores the current setting profile (including `+CLTS`) to non-volatile
/// memory, so it survives the next reset.
#[derive(Clone, AtatCmd)]
#[at_cmd("&W", NoResponse)]
pub struct SaveSettings;

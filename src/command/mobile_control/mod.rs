//! ### 3 - AT Commands according to 3GPP TS 27.007 and SIMCom extensions
//! for mobile equipment control and status

pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;

use super::NoResponse;
use types::{Functionality, LocalTimestamp, NetLight, PowerDownMode, SlowClock};

/// 3.2.20 Set phone functionality +CFUN
#[derive(Clone, AtatCmd)]
#[at_cmd("+CFUN", NoResponse)]
pub struct SetModuleFunctionality {
    #[at_arg(position = 0)]
    pub fun: Functionality,
}

/// 3.2.22 Clock +CCLK
///
/// Replies `+CCLK: "yy/MM/dd,hh:mm:ss±zz"`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CCLK?", NoResponse)]
pub struct GetClock;

/// 6.2.3 Configure slow clock +CSCLK
#[derive(Clone, AtatCmd)]
#[at_cmd("+CSCLK", NoResponse)]
pub struct SetSlowClock {
    #[at_arg(position = 0)]
    pub mode: SlowClock,
}

/// 6.2.1 Power off +CPOWD
///
/// A normal power off is acknowledged with `NORMAL POWER DOWN` instead of
/// `OK`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CPOWD", NoResponse)]
pub struct PowerDown {
    #[at_arg(position = 0)]
    pub mode: PowerDownMode,
}

/// 6.2.38 Get local timestamp +CLTS
///
/// Replies `+CLTS: <mode>`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CLTS?", NoResponse)]
pub struct GetLocalTimestamp;

/// 6.2.38 Get local timestamp +CLTS
///
/// Enables or disables setting the RTC from the network time. The setting
/// takes effect after `&W` and a restart.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CLTS", NoResponse)]
pub struct SetLocalTimestamp {
    #[at_arg(position = 0)]
    pub mode: LocalTimestamp,
}

/// 6.2.57 Close the net light or open it to shining +CNETLIGHT
#[derive(Clone, AtatCmd)]
#[at_cmd("+CNETLIGHT", NoResponse)]
pub struct SetNetLight {
    #[at_arg(position = 0)]
    pub mode: NetLight,
}

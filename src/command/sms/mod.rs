//! ### 4 - AT Commands according to 3GPP TS 27.005, Short Messages Service

pub mod responses;
pub mod types;

use atat::atat_derive::AtatCmd;

use super::NoResponse;
use types::{DeleteFlag, MessageFormat};

/// 4.2.3 Select SMS message format +CMGF
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGF", NoResponse)]
pub struct SetMessageFormat {
    #[at_arg(position = 0)]
    pub mode: MessageFormat,
}

/// 4.2.5 Send SMS message +CMGS, text mode
///
/// The module answers with a `> ` prompt; the message text follows,
/// terminated by Ctrl-Z. Completion is reported as `+CMGS: <mr>`.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGS", NoResponse)]
pub struct SendMessage<'a> {
    #[at_arg(position = 0, len = 32)]
    pub number: &'a str,
}

/// 4.2.4 Read SMS message +CMGR
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGR", NoResponse)]
pub struct ReadMessage {
    #[at_arg(position = 0)]
    pub index: u8,
}

/// 4.2.1 Delete SMS message +CMGD
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGD", NoResponse)]
pub struct DeleteMessage {
    #[at_arg(position = 0)]
    pub index: u8,
    #[at_arg(position = 1)]
    pub flag: DeleteFlag,
}

/// Delete all SMS +CMGDA (SIMCom extension), text mode form
#[derive(Clone, AtatCmd)]
#[at_cmd("+CMGDA=\"DEL ALL\"", NoResponse, value_sep = false)]
pub struct DeleteAllMessages;

/// Ctrl-Z, submits the message text entered after the `+CMGS` prompt
pub const SUBMIT: u8 = 0x1A;

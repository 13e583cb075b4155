//! AT Commands for the SIMCom SIM800 module family\
//! Following the SIM800 Series AT Command Manual V1.09
//!
//! Every command is encoded through `atat`'s serializer, so each struct here
//! describes the exact bytes put on the wire, `AT` prefix and `\r\n`
//! terminator included. Replies are not deserialized by `atat`; they are
//! matched by tag in [`crate::session`] and sliced by [`crate::interpreter`].

pub mod general;
pub mod mobile_control;
pub mod network_service;
pub mod sms;

use atat::atat_derive::{AtatCmd, AtatResp};

/// Tag carried by every positive final result code
pub const OK_TAG: &str = "OK";

/// Final result code of a failed command
pub const ERROR_TAG: &str = "ERROR";

/// Prefixes of the extended error result codes, followed by `: <n>`
const EXTENDED_ERROR_TAGS: [&str; 2] = ["+CME ERROR", "+CMS ERROR"];

/// `true` if `line` is an error result code.
///
/// Only whole lines count: `ERROR` on its own, or a line starting with
/// `+CME ERROR`/`+CMS ERROR`. Echoed text or message bodies that merely
/// contain these words do not.
pub fn is_error_result(line: &[u8]) -> bool {
    let line = line.trim_ascii();
    line == ERROR_TAG.as_bytes()
        || EXTENDED_ERROR_TAGS
            .iter()
            .any(|tag| line.starts_with(tag.as_bytes()))
}

#[derive(Debug, Clone, AtatResp, PartialEq)]
pub struct NoResponse;

#[derive(Clone, AtatCmd)]
#[at_cmd("", NoResponse)]
pub struct AT;

#[cfg(test)]
pub(crate) fn encode<A: atat::AtatCmd>(cmd: &A) -> std::string::String {
    let mut buf = [0u8; 128];
    let len = cmd.write(&mut buf);
    std::string::String::from_utf8(buf[..len].to_vec()).unwrap()
}

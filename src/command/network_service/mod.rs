//! ### 3 - Network service Commands
use atat::atat_derive::AtatCmd;

use super::NoResponse;

/// 3.2.53 Signal quality report +CSQ
///
/// Replies `+CSQ: <rssi>,<ber>`, where `<rssi>` is 0-31, or 99 when not
/// known or not detectable.
#[derive(Clone, AtatCmd)]
#[at_cmd("+CSQ", NoResponse)]
pub struct GetSignalQuality;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::encode;

    #[test]
    fn signal_quality() {
        assert_eq!(encode(&GetSignalQuality), "AT+CSQ\r\n");
    }
}

use embedded_hal::{delay::DelayNs, digital::OutputPin};
use embedded_io::{Read, ReadReady, Write};

use crate::{
    client::Device,
    command::mobile_control::{
        responses::DateTime, types::LocalTimestamp, GetClock, GetLocalTimestamp,
        SetLocalTimestamp,
    },
    error::{Error, ParseError},
    interpreter, module_timing,
};

const CLTS_DISABLED: &str = "+CLTS: 0";
const CLTS_ENABLED: &str = "+CLTS: 1";

impl<T, D, RST> Device<T, D, RST>
where
    T: Read + Write + ReadReady,
    D: DelayNs,
    RST: OutputPin,
{
    /// Read the real time clock.
    ///
    /// The module sometimes answers the first query with an error right
    /// after boot, so that case is retried once.
    pub fn clock(&mut self) -> Result<DateTime, Error> {
        let response = match self.query(&GetClock) {
            Err(Error::Modem) => {
                debug!("Clock query failed, retrying");
                self.session.pause(module_timing::clock_retry());
                self.query(&GetClock)?
            }
            other => other?,
        };

        Ok(interpreter::clock(response.as_str()?)?)
    }

    /// Let the network set the clock. Saves the setting and resets the
    /// module if it was off.
    pub fn set_auto_clock(&mut self) -> Result<(), Error> {
        self.auto_clock(LocalTimestamp::Enabled)
    }

    /// Stop the network from setting the clock. Saves the setting and
    /// resets the module if it was on.
    pub fn reset_auto_clock(&mut self) -> Result<(), Error> {
        self.auto_clock(LocalTimestamp::Disabled)
    }

    fn auto_clock(&mut self, target: LocalTimestamp) -> Result<(), Error> {
        let (before, after) = match target {
            LocalTimestamp::Enabled => (CLTS_DISABLED, CLTS_ENABLED),
            LocalTimestamp::Disabled => (CLTS_ENABLED, CLTS_DISABLED),
        };

        let response = self.query(&GetLocalTimestamp)?;
        if response.contains(after) {
            debug!("Network time already {:?}", target);
            return Ok(());
        }
        if !response.contains(before) {
            return Err(ParseError::MissingTag.into());
        }

        self.session.send_cmd(&SetLocalTimestamp { mode: target })?;
        self.session.receive()?;

        if !self.query(&GetLocalTimestamp)?.contains(after) {
            warn!("Module did not apply network time {:?}", target);
            return Err(Error::Rejected);
        }

        self.save_settings()?;
        self.reset()
    }
}

use atat::AtatCmd;
use embedded_hal::{delay::DelayNs, digital::OutputPin};
use embedded_io::{Read, ReadReady, Write};

use crate::{
    command::{network_service::GetSignalQuality, AT, OK_TAG},
    config::Config,
    error::{Error, GenericError},
    interpreter, module_timing,
    session::{Response, Session},
};

/// SIM800 driver.
///
/// Owns the serial channel, the delay provider and the reset line. Every
/// operation takes `&mut self` and runs its whole send, wait, parse
/// sequence before returning, so replies of one command can never be
/// consumed by another.
pub struct Device<T, D, RST> {
    pub(crate) session: Session<T, D>,
    pub(crate) config: Config<RST>,
}

impl<T, D, RST> Device<T, D, RST>
where
    T: Read + Write + ReadReady,
    D: DelayNs,
    RST: OutputPin,
{
    pub fn new(serial: T, delay: D, config: Config<RST>) -> Self {
        Self {
            session: Session::new(serial, delay, config.budget()),
            config,
        }
    }

    pub fn release(self) -> (T, D, Config<RST>) {
        let (serial, delay) = self.session.release();
        (serial, delay, self.config)
    }

    /// Direct access to the session, for commands this driver does not wrap.
    pub fn session(&mut self) -> &mut Session<T, D> {
        &mut self.session
    }

    /// Check that the module answers `AT` with `OK`.
    pub fn is_alive(&mut self) -> Result<(), Error> {
        self.command(&AT).map(drop)
    }

    /// Signal level, 0-31, 0 meaning no signal.
    ///
    /// A reply without the `+CSQ:` tag is reported as
    /// `Error::Parse(ParseError::MissingTag)`, not as 0.
    pub fn signal_quality(&mut self) -> Result<u8, Error> {
        let response = self.query(&GetSignalQuality)?;
        Ok(interpreter::signal_quality(response.as_str()?)?)
    }

    /// Signal level with every failure read as 0.
    pub fn signal_level(&mut self) -> u8 {
        self.signal_quality().unwrap_or_else(|e| {
            debug!("Signal query failed: {:?}", e);
            0
        })
    }

    /// Poll the signal level once a second until it is non-zero.
    ///
    /// After `signal_reset_threshold` consecutive zero readings the module is
    /// reset and counting starts over. Only transport and reset line
    /// failures end the wait early.
    pub fn wait_signal(&mut self) -> Result<u8, Error> {
        let threshold = self.config.signal_reset_threshold.max(1);
        let mut zero_readings = 0u8;

        loop {
            match self.signal_quality() {
                Ok(level) if level > 0 => return Ok(level),
                Err(e @ Error::Io(_)) => return Err(e),
                Ok(_) => {}
                Err(e) => debug!("Signal query failed: {:?}", e),
            }

            debug!("Waiting for signal...");
            self.session.pause(module_timing::signal_poll());

            zero_readings += 1;
            if zero_readings >= threshold {
                warn!("No signal after {} readings", zero_readings);
                match self.reset() {
                    Err(e @ (Error::Io(_) | Error::IoPin)) => return Err(e),
                    Err(e) => warn!("Module did not report ready after reset: {:?}", e),
                    Ok(()) => {}
                }
                zero_readings = 0;
            }
        }
    }

    /// Send `cmd` and wait for the final `OK`.
    pub(crate) fn command<A: AtatCmd>(&mut self, cmd: &A) -> Result<Response, Error> {
        self.session.send_cmd(cmd)?;
        self.session.await_pattern(OK_TAG)
    }

    /// Send `cmd` and capture a single reply chunk, rejecting silence and
    /// error result codes.
    pub(crate) fn query<A: AtatCmd>(&mut self, cmd: &A) -> Result<Response, Error> {
        self.session.send_cmd(cmd)?;
        let response = self.session.receive()?;
        if response.is_empty() {
            return Err(Error::Generic(GenericError::Timeout));
        }
        if response.is_error() {
            return Err(Error::Modem);
        }
        Ok(response)
    }
}

//! Byte level command/response session with the module.
//!
//! The module has no framing beyond `\r\n`, and its replies arrive in chunks
//! whose size and timing depend on the UART and on the command. The session
//! therefore never tries to reassemble a reply: each receive cycle captures
//! whatever the first bulk read returns, and callers look for tags in it.
//! A reply split across two cycles may be truncated.

use atat::AtatCmd;
use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_io::{Read, ReadReady, Write};
use heapless::Vec;

use crate::{
    command::is_error_result,
    config::PollBudget,
    error::{Error, GenericError, ParseError},
};

/// Capacity of a single receive capture
pub const RESPONSE_LEN: usize = 512;

/// Capacity of the stack buffer commands are encoded into
const CMD_BUF_LEN: usize = 128;

const TERMINATOR: &[u8] = b"\r\n";

/// One captured chunk of module output.
///
/// Empty when the receive cycle timed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    buf: Vec<u8, RESPONSE_LEN>,
}

impl Response {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ParseError> {
        Vec::from_slice(bytes)
            .map(|buf| Self { buf })
            .map_err(|_| ParseError::Overflow)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn as_str(&self) -> Result<&str, ParseError> {
        core::str::from_utf8(&self.buf).map_err(|_| ParseError::Utf8)
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Byte offset of the first occurrence of `tag`
    pub fn find(&self, tag: &str) -> Option<usize> {
        let tag = tag.as_bytes();
        if tag.is_empty() {
            return Some(0);
        }
        self.buf.windows(tag.len()).position(|w| w == tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.find(tag).is_some()
    }

    /// `true` if any line of the capture is an error result code
    pub fn is_error(&self) -> bool {
        self.buf.split(|&b| b == b'\n').any(is_error_result)
    }

    fn printable(&self) -> &str {
        self.as_str().unwrap_or("<non-utf8>")
    }
}

/// Exclusive owner of the serial channel and of the delay provider.
pub struct Session<T, D> {
    serial: T,
    delay: D,
    budget: PollBudget,
}

impl<T, D> Session<T, D>
where
    T: Read + Write + ReadReady,
    D: DelayNs,
{
    pub fn new(serial: T, delay: D, budget: PollBudget) -> Self {
        Self {
            serial,
            delay,
            budget,
        }
    }

    pub fn budget(&self) -> PollBudget {
        self.budget
    }

    pub fn release(self) -> (T, D) {
        (self.serial, self.delay)
    }

    #[cfg(test)]
    pub(crate) fn serial_mut(&mut self) -> &mut T {
        &mut self.serial
    }

    /// Write `bytes` as is, followed by `\r\n` if `terminate` is set.
    pub fn send(&mut self, bytes: &[u8], terminate: bool) -> Result<(), Error> {
        trace!(
            "TX: {:?}",
            core::str::from_utf8(bytes).unwrap_or("<non-utf8>")
        );
        self.serial.write_all(bytes).map_err(io_error)?;
        if terminate {
            self.serial.write_all(TERMINATOR).map_err(io_error)?;
        }
        self.serial.flush().map_err(io_error)
    }

    /// Encode `cmd` and write it. The encoding carries its own `AT` prefix
    /// and terminator.
    pub fn send_cmd<A: AtatCmd>(&mut self, cmd: &A) -> Result<(), Error> {
        if A::MAX_LEN > CMD_BUF_LEN {
            error!("Command does not fit the encode buffer");
            return Err(Error::Generic(GenericError::Unsupported));
        }
        let mut buf = [0u8; CMD_BUF_LEN];
        let len = cmd.write(&mut buf);
        self.send(&buf[..len], false)
    }

    /// Receive cycle using the session's default budget.
    pub fn receive(&mut self) -> Result<Response, Error> {
        let budget = self.budget;
        self.receive_within(&budget)
    }

    /// Poll for inbound data up to `budget.polls` times, sleeping
    /// `budget.interval` between polls.
    ///
    /// As soon as data is available, exactly one bulk read is performed and
    /// its bytes are returned. If nothing arrives, the returned response is
    /// empty. A timeout here is not an error.
    pub fn receive_within(&mut self, budget: &PollBudget) -> Result<Response, Error> {
        for _ in 0..budget.polls {
            if self.serial.read_ready().map_err(io_error)? {
                return self.read_chunk();
            }
            self.pause(budget.interval);
        }

        if self.serial.read_ready().map_err(io_error)? {
            return self.read_chunk();
        }

        trace!("RX: timeout");
        Ok(Response::default())
    }

    /// Wait for a capture containing `pattern`, using the session's default
    /// budget.
    pub fn await_pattern(&mut self, pattern: &str) -> Result<Response, Error> {
        let budget = self.budget;
        self.await_pattern_within(pattern, &budget)
    }

    /// Run up to `budget.attempts` receive cycles until one of them contains
    /// `pattern`.
    ///
    /// A capture carrying an error result code ends the wait early with
    /// [`Error::Modem`]. Exhausting the attempts yields
    /// [`GenericError::Timeout`].
    pub fn await_pattern_within(
        &mut self,
        pattern: &str,
        budget: &PollBudget,
    ) -> Result<Response, Error> {
        debug!("Waiting for {:?}", pattern);
        for _ in 0..budget.attempts {
            let response = self.receive_within(budget)?;
            if response.contains(pattern) {
                return Ok(response);
            }
            if response.is_error() {
                warn!(
                    "Error result while waiting for {:?}: {:?}",
                    pattern,
                    response.printable()
                );
                return Err(Error::Modem);
            }
        }

        warn!("Timed out waiting for {:?}", pattern);
        Err(Error::Generic(GenericError::Timeout))
    }

    /// Settle delay.
    pub fn pause(&mut self, duration: Duration) {
        self.delay.delay_us(duration.as_micros() as u32);
    }

    fn read_chunk(&mut self) -> Result<Response, Error> {
        let mut buf = [0u8; RESPONSE_LEN];
        let len = self.serial.read(&mut buf).map_err(io_error)?;
        let response = Response::from_slice(&buf[..len])?;
        trace!("RX: {:?}", response.printable());
        Ok(response)
    }
}

fn io_error<E: embedded_io::Error>(e: E) -> Error {
    Error::Io(e.kind())
}

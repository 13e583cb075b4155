use core::convert::Infallible;
use embassy_time::Duration;
use embedded_hal::{delay::DelayNs, digital};
use embedded_io::{ErrorKind, ErrorType, Read, ReadReady, Write};
use std::{collections::VecDeque, string::String, vec::Vec};

use crate::{client::Device, config::Config};

#[derive(Debug)]
pub struct MockIoError;

impl embedded_io::Error for MockIoError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::BrokenPipe
    }
}

/// Scripted serial port.
///
/// Each queued chunk is handed out by exactly one `read`. A chunk may be
/// held back for a number of `read_ready` polls to simulate a slow reply.
/// Everything written is recorded.
#[derive(Debug, Default)]
pub struct MockSerial {
    chunks: VecDeque<(u32, Vec<u8>)>,
    tx: Vec<u8>,
    pub fail_writes: bool,
}

impl MockSerial {
    pub fn new(chunks: &[&str]) -> Self {
        let mut serial = Self::default();
        for chunk in chunks {
            serial.push(chunk);
        }
        serial
    }

    pub fn push(&mut self, chunk: &str) {
        self.push_after_polls(0, chunk);
    }

    pub fn push_after_polls(&mut self, polls: u32, chunk: &str) {
        self.chunks.push_back((polls, chunk.as_bytes().to_vec()));
    }

    pub fn written(&self) -> String {
        String::from_utf8_lossy(&self.tx).into_owned()
    }

    /// Number of times `needle` was written
    pub fn count(&self, needle: &str) -> usize {
        self.written().matches(needle).count()
    }

    /// Chunks that were never read
    pub fn pending(&self) -> usize {
        self.chunks.len()
    }
}

impl ErrorType for MockSerial {
    type Error = MockIoError;
}

impl ReadReady for MockSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        match self.chunks.front_mut() {
            Some((0, _)) => Ok(true),
            Some((polls, _)) => {
                *polls -= 1;
                Ok(false)
            }
            None => Ok(false),
        }
    }
}

impl Read for MockSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let Some((_, mut chunk)) = self.chunks.pop_front() else {
            return Ok(0);
        };

        let len = chunk.len().min(buf.len());
        buf[..len].copy_from_slice(&chunk[..len]);
        if len < chunk.len() {
            self.chunks.push_front((0, chunk.split_off(len)));
        }
        Ok(len)
    }
}

impl Write for MockSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.fail_writes {
            return Err(MockIoError);
        }
        self.tx.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Delay provider that only accumulates the requested time.
#[derive(Debug, Default)]
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Output pin recording every level it is driven to, `true` being high.
#[derive(Debug, Default)]
pub struct MockPin {
    pub levels: Vec<bool>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

/// Driver over a scripted serial port with a short response budget:
/// 3 attempts of 5 polls of 10 ms, and a reset after 3 readings without
/// signal.
pub fn device(chunks: &[&str]) -> Device<MockSerial, MockDelay, MockPin> {
    let config = Config::new()
        .with_rst(MockPin::new())
        .poll_interval(Duration::from_millis(10))
        .max_polls(5)
        .response_attempts(3)
        .signal_reset_threshold(3);

    Device::new(MockSerial::new(chunks), MockDelay::new(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_serial_hands_out_chunks_in_order() {
        let mut serial = MockSerial::new(&["one", "two"]);
        let mut buf = [0u8; 8];

        assert!(serial.read_ready().unwrap());
        assert_eq!(serial.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"one");
        assert_eq!(serial.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"two");
        assert!(!serial.read_ready().unwrap());
    }

    #[test]
    fn mock_serial_splits_oversized_chunk() {
        let mut serial = MockSerial::new(&["abcdef"]);
        let mut buf = [0u8; 4];

        assert_eq!(serial.read(&mut buf).unwrap(), 4);
        assert_eq!(serial.pending(), 1);
        assert_eq!(serial.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"ef");
    }

    #[test]
    fn mock_delay_accumulates() {
        let mut delay = MockDelay::new();
        delay.delay_ms(1_000);
        delay.delay_us(500);
        delay.delay_us(500);
        assert_eq!(delay.total_ms(), 1_001);
    }
}

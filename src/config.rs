use core::convert::Infallible;
use embassy_time::Duration;
use embedded_hal::digital::{ErrorType, OutputPin, PinState};

pub struct NoPin;

impl ErrorType for NoPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Inverts an output pin, for a reset line wired straight to the module's
/// active-low `RST` pad instead of through a driver transistor.
pub struct ReverseOutputPin<P: OutputPin<Error = Infallible>>(pub P);

impl<P: OutputPin<Error = Infallible>> ErrorType for ReverseOutputPin<P> {
    type Error = Infallible;
}

impl<P: OutputPin<Error = Infallible>> OutputPin for ReverseOutputPin<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set_high()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set_low()
    }

    fn set_state(&mut self, state: PinState) -> Result<(), Self::Error> {
        match state {
            PinState::Low => self.0.set_state(PinState::High),
            PinState::High => self.0.set_state(PinState::Low),
        }
    }
}

/// Bounded polling parameters for one wait.
///
/// A single receive cycle checks for inbound data `polls` times, sleeping
/// `interval` between checks. A pattern wait runs at most `attempts` receive
/// cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollBudget {
    pub interval: Duration,
    pub polls: u32,
    pub attempts: u8,
}

impl PollBudget {
    pub const fn new(interval: Duration, polls: u32, attempts: u8) -> Self {
        Self {
            interval,
            polls,
            attempts,
        }
    }

    /// Sleep time spent by a receive cycle that sees no data.
    pub fn receive_window(&self) -> Duration {
        self.interval * self.polls
    }
}

impl Default for PollBudget {
    fn default() -> Self {
        Self::new(Duration::from_millis(10), 1000, 10)
    }
}

#[derive(Debug)]
pub struct Config<RST> {
    pub(crate) rst_pin: Option<RST>,
    pub(crate) budget: PollBudget,
    pub(crate) signal_reset_threshold: u8,
}

impl Default for Config<NoPin> {
    fn default() -> Self {
        Self {
            rst_pin: None,
            budget: PollBudget::default(),
            signal_reset_threshold: 30,
        }
    }
}

impl<RST> Config<RST>
where
    RST: OutputPin,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            rst_pin: None,
            budget: PollBudget::default(),
            signal_reset_threshold: 30,
        }
    }

    pub fn with_rst(self, rst_pin: RST) -> Self {
        Self {
            rst_pin: Some(rst_pin),
            ..self
        }
    }

    pub fn poll_interval(self, interval: Duration) -> Self {
        Self {
            budget: PollBudget {
                interval,
                ..self.budget
            },
            ..self
        }
    }

    pub fn max_polls(self, polls: u32) -> Self {
        Self {
            budget: PollBudget {
                polls,
                ..self.budget
            },
            ..self
        }
    }

    pub fn response_attempts(self, attempts: u8) -> Self {
        Self {
            budget: PollBudget {
                attempts,
                ..self.budget
            },
            ..self
        }
    }

    /// Number of consecutive zero signal readings after which
    /// [`Device::wait_signal`](crate::Device::wait_signal) resets the module.
    pub fn signal_reset_threshold(self, readings: u8) -> Self {
        Self {
            signal_reset_threshold: readings,
            ..self
        }
    }

    pub fn budget(&self) -> PollBudget {
        self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::MockPin;

    #[test]
    fn builder_overrides_budget_fields() {
        let config = Config::<MockPin>::new()
            .poll_interval(Duration::from_millis(5))
            .max_polls(3)
            .response_attempts(2);

        assert_eq!(
            config.budget(),
            PollBudget::new(Duration::from_millis(5), 3, 2)
        );
        assert_eq!(config.budget().receive_window(), Duration::from_millis(15));
        assert!(config.rst_pin.is_none());
    }

    #[test]
    fn default_budget_is_ten_second_window() {
        let config = Config::default();
        assert_eq!(config.budget().receive_window(), Duration::from_secs(10));
        assert_eq!(config.budget().attempts, 10);
        assert_eq!(config.signal_reset_threshold, 30);
    }

    #[test]
    fn reverse_pin_inverts_levels() {
        let mut pin = ReverseOutputPin(MockPin::new());
        pin.set_high().unwrap();
        pin.set_low().unwrap();
        pin.set_state(PinState::High).unwrap();

        assert_eq!(pin.0.levels, vec![false, true, false]);
    }
}

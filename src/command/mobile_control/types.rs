//! Argument and parameter types used by Mobile equipment control Commands
use atat::atat_derive::AtatEnum;

/// Phone functionality level for `+CFUN`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Functionality {
    /// Minimum functionality
    Minimum = 0,
    /// Full functionality (default)
    Full = 1,
    /// Disable phone both transmit and receive RF circuits
    DisableRf = 4,
}

/// Slow clock mode for `+CSCLK`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlowClock {
    /// Disable slow clock, module will not enter sleep mode
    Disabled = 0,
    /// Enable slow clock, controlled by the DTR pin. Sleep mode is entered
    /// while DTR is high.
    DtrControlled = 1,
    /// Enable slow clock automatically when the serial port is idle
    Automatic = 2,
}

/// Power down urgency for `+CPOWD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerDownMode {
    /// Power off urgently (will not send out "NORMAL POWER DOWN")
    Urgent = 0,
    /// Normal power off (will send out "NORMAL POWER DOWN")
    Normal = 1,
}

/// Network time synchronisation for `+CLTS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LocalTimestamp {
    Disabled = 0,
    Enabled = 1,
}

/// Network status LED for `+CNETLIGHT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, AtatEnum)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetLight {
    Off = 0,
    On = 1,
}

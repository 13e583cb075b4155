use embedded_hal::{delay::DelayNs, digital::OutputPin};
use embedded_io::{Read, ReadReady, Write};

use crate::{
    client::Device,
    command::{
        general::SaveSettings,
        mobile_control::{
            types::{Functionality, NetLight, PowerDownMode, SlowClock},
            PowerDown, SetModuleFunctionality, SetNetLight, SetSlowClock,
        },
    },
    error::Error,
    module_timing,
};

/// Unsolicited indication the module emits once it has booted and found a
/// network.
pub const READY_TAG: &str = "+CIEV";

/// Part of `NORMAL POWER DOWN`, sent in place of `OK` by `+CPOWD=1`
pub const POWER_DOWN_TAG: &str = "POWER DOWN";

impl<T, D, RST> Device<T, D, RST>
where
    T: Read + Write + ReadReady,
    D: DelayNs,
    RST: OutputPin,
{
    /// Hardware reset through the reset line, then wait for the module to
    /// report ready.
    ///
    /// Without a reset pin only the ready wait runs.
    pub fn reset(&mut self) -> Result<(), Error> {
        warn!("Resetting module");
        match self.config.rst_pin {
            Some(ref mut rst) => {
                rst.set_high().map_err(|_| Error::IoPin)?;
                self.session.pause(module_timing::reset_hold());
                rst.set_low().map_err(|_| Error::IoPin)?;
                self.session.pause(module_timing::boot_wait());
            }
            None => warn!("No reset pin configured"),
        }

        self.session.await_pattern(READY_TAG)?;
        info!("Module ready");
        Ok(())
    }

    /// Enable DTR controlled sleep (`AT+CSCLK=1`). The module sleeps while
    /// DTR is held high.
    pub fn sleep_mode(&mut self) -> Result<(), Error> {
        self.command(&SetSlowClock {
            mode: SlowClock::DtrControlled,
        })?;
        Ok(())
    }

    /// Normal power off. The module stops answering until it is powered
    /// up again through its power key.
    pub fn power_down(&mut self) -> Result<(), Error> {
        self.session.send_cmd(&PowerDown {
            mode: PowerDownMode::Normal,
        })?;
        self.session.await_pattern(POWER_DOWN_TAG)?;
        info!("Module powered down");
        Ok(())
    }

    pub fn set_phone_functionality(&mut self, fun: Functionality) -> Result<(), Error> {
        self.command(&SetModuleFunctionality { fun })?;
        Ok(())
    }

    /// Switch the network status LED on or off.
    pub fn set_led_flash(&mut self, on: bool) -> Result<(), Error> {
        let mode = if on { NetLight::On } else { NetLight::Off };
        self.command(&SetNetLight { mode })?;
        Ok(())
    }

    /// Store the current configuration in the user profile (`AT&W`).
    pub fn save_settings(&mut self) -> Result<(), Error> {
        self.command(&SaveSettings)?;
        Ok(())
    }
}

use embassy_time::Duration;

/// High time of the reset line to trigger a module reboot
pub fn reset_hold() -> Duration {
    Duration::from_millis(1000)
}

/// Time to wait after releasing the reset line before listening for the
/// module's ready indication
pub fn boot_wait() -> Duration {
    Duration::from_millis(1000)
}

/// Pause between the SMS text and the Ctrl-Z that submits it
pub fn sms_settle() -> Duration {
    Duration::from_millis(100)
}

/// Pause before repeating a clock query that was answered with an error
pub fn clock_retry() -> Duration {
    Duration::from_millis(500)
}

/// Cadence of signal quality polling while waiting for network coverage
pub fn signal_poll() -> Duration {
    Duration::from_secs(1)
}

//! Millisecond clock sources for sweep timing

use embassy_time::Instant;

/// Monotonic millisecond counter.
///
/// The counter is 32 bits wide and wraps. Consumers only ever subtract two
/// readings with wrapping arithmetic, so the wrap needs no special handling.
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Clock backed by the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// Milliseconds elapsed between two readings, tolerant of counter wraparound
#[inline]
pub const fn elapsed_ms(since: u32, now: u32) -> u32 {
    now.wrapping_sub(since)
}

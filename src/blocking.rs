//! Blocking sweep helpers for simple callers
//!
//! These loops hold the caller until the sweep is over. They are built only
//! from the non-blocking fixture API and a [`Delay`].

use embassy_time::{Duration, block_for};

use crate::OutputDriver;
use crate::clock::Clock;
use crate::fixture::Fixture;
use crate::sweep::StepOutcome;

/// Blocking millisecond delay
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

/// Busy-wait delay on the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingDelay;

impl Delay for BlockingDelay {
    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}

impl<O: OutputDriver, C: Clock, const UNITS: usize> Fixture<O, C, UNITS> {
    /// Step the hue one by one from `hue_start` towards `hue_stop`
    /// (exclusive) at the stored intensity, pausing `dt_ms` after each step.
    pub fn sweep_with_delay<D: Delay>(
        &mut self,
        hue_start: u8,
        hue_stop: u8,
        dt_ms: u32,
        delay: &mut D,
    ) {
        let intensity = self.engine().intensity();
        if hue_stop > hue_start {
            for hue in hue_start..hue_stop {
                self.set_hue_value(hue, intensity);
                delay.delay_ms(dt_ms);
            }
        } else {
            for hue in (hue_stop..hue_start).rev().map(|hue| hue + 1) {
                self.set_hue_value(hue, intensity);
                delay.delay_ms(dt_ms);
            }
        }
    }

    /// Step the intensity from `start` towards `stop` (exclusive) by `step`
    /// at the stored hue, pausing `dt_ms` after each step.
    ///
    /// A `step` of zero is treated as one.
    pub fn sweep_intensity_with_delay<D: Delay>(
        &mut self,
        start: u16,
        stop: u16,
        step: u16,
        dt_ms: u32,
        delay: &mut D,
    ) {
        let hue = self.engine().hue();
        let step = step.max(1);
        let mut intensity = start;
        if stop > start {
            while intensity < stop {
                self.set_hue_value(hue, intensity);
                delay.delay_ms(dt_ms);
                let Some(next) = intensity.checked_add(step) else {
                    break;
                };
                intensity = next;
            }
        } else {
            while intensity > stop {
                self.set_hue_value(hue, intensity);
                delay.delay_ms(dt_ms);
                let Some(next) = intensity.checked_sub(step) else {
                    break;
                };
                intensity = next;
            }
        }
    }

    /// Enable the configured sweep and poll it to completion, pausing
    /// `poll_period_ms` between polls.
    ///
    /// Returns the number of steps applied.
    pub fn run_sweep<D: Delay>(
        &mut self,
        hue_offset: u8,
        poll_period_ms: u32,
        delay: &mut D,
    ) -> u16 {
        self.enable_sweep(true);
        let mut steps: u16 = 0;
        loop {
            match self.poll_sweep(hue_offset) {
                StepOutcome::Stepped => steps = steps.saturating_add(1),
                StepOutcome::Waiting => {}
                StepOutcome::Finished | StepOutcome::Idle => return steps,
            }
            delay.delay_ms(poll_period_ms);
        }
    }
}

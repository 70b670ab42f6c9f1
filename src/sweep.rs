//! Non-blocking sweep state machine
//!
//! A sweep walks the hue (or intensity) from `hue_start` to `hue_stop` in
//! fixed steps, one step per elapsed interval. It never waits: the owner calls
//! [`SweepController::poll`] from its control loop and switches on the
//! returned [`StepOutcome`].

use core::fmt;

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::clock::elapsed_ms;
use crate::engine::ColorEngine;

const OUTCOME_IDLE: u8 = 0;
const OUTCOME_STEPPED: u8 = 1;
const OUTCOME_FINISHED: u8 = 2;
const OUTCOME_WAITING: u8 = 3;

/// Axis a sweep walks along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepAxis {
    /// Steps set the hue, offset by the poll's hue offset
    #[default]
    Hue,
    /// Steps set the intensity at the current hue
    Intensity,
}

/// Sweep parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    pub hue_start: u16,
    pub hue_stop: u16,
    /// Increment per tick
    pub step: u16,
    /// Time between ticks
    pub interval: Duration,
    pub axis: SweepAxis,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            hue_start: 0,
            hue_stop: 255,
            step: 1,
            interval: Duration::from_millis(10),
            axis: SweepAxis::Hue,
        }
    }
}

/// Runtime state of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepState {
    pub config: SweepConfig,
    /// Clock reading of the last tick (or configuration, enable, reset)
    pub last_tick: u32,
    /// Last applied position, always within `[hue_start, hue_stop]` while enabled
    pub current: u16,
    pub enabled: bool,
}

/// Result of one [`SweepController::poll`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StepOutcome {
    /// Sweep is disabled, nothing happened
    Idle = OUTCOME_IDLE,
    /// A step was applied
    Stepped = OUTCOME_STEPPED,
    /// The next step would pass `hue_stop`, the sweep disabled itself
    Finished = OUTCOME_FINISHED,
    /// Interval has not elapsed yet
    Waiting = OUTCOME_WAITING,
}

impl StepOutcome {
    /// Numeric code of the outcome
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            OUTCOME_IDLE => Self::Idle,
            OUTCOME_STEPPED => Self::Stepped,
            OUTCOME_FINISHED => Self::Finished,
            OUTCOME_WAITING => Self::Waiting,
            _ => return None,
        })
    }
}

/// Sweep errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepError {
    /// `hue_start == hue_stop`, progress is undefined
    EmptyRange,
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRange => f.write_str("sweep start and stop are equal"),
        }
    }
}

impl core::error::Error for SweepError {}

/// Sweep state machine with two states, enabled and disabled
#[derive(Debug, Clone)]
pub struct SweepController {
    state: SweepState,
}

impl SweepController {
    /// Create a disabled sweep
    pub const fn new(config: SweepConfig, now: u32) -> Self {
        Self {
            state: SweepState {
                config,
                last_tick: now,
                current: config.hue_start,
                enabled: false,
            },
        }
    }

    /// Replace all parameters, rewind to `hue_start` and disable.
    ///
    /// Does not touch the output.
    pub fn configure(&mut self, config: SweepConfig, now: u32) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[SweepController.configure] {:?}..={:?} step {:?} every {:?}ms",
            config.hue_start,
            config.hue_stop,
            config.step,
            config.interval.as_millis()
        );
        self.state = SweepState {
            config,
            last_tick: now,
            current: config.hue_start,
            enabled: false,
        };
    }

    /// Enable or disable the sweep, restarting the tick interval
    pub fn enable(&mut self, enabled: bool, now: u32) {
        #[cfg(feature = "esp32-log")]
        println!("[SweepController.enable] {:?}", enabled);
        self.state.enabled = enabled;
        self.state.last_tick = now;
    }

    /// Rewind to `hue_start`, keeping the enabled state
    pub fn reset(&mut self, now: u32) {
        self.state.current = self.state.config.hue_start;
        self.state.last_tick = now;
    }

    pub const fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub const fn current(&self) -> u16 {
        self.state.current
    }

    pub const fn config(&self) -> &SweepConfig {
        &self.state.config
    }

    pub const fn state(&self) -> &SweepState {
        &self.state
    }

    /// Progress of the sweep in percent
    pub fn progress(&self) -> Result<f32, SweepError> {
        let config = &self.state.config;
        if config.hue_start == config.hue_stop {
            return Err(SweepError::EmptyRange);
        }
        let start = f32::from(config.hue_start);
        let span = f32::from(config.hue_stop) - start;
        Ok((f32::from(self.state.current) - start) / span * 100.0)
    }

    /// Advance the sweep if its interval elapsed.
    ///
    /// Runs in constant time and only touches the engine when a step is
    /// applied. `hue_offset` is added to the hue on the way out and never
    /// stored, so the sweep bounds are unaffected by it.
    pub fn poll<O: OutputDriver, const UNITS: usize>(
        &mut self,
        now: u32,
        engine: &mut ColorEngine<O, UNITS>,
        hue_offset: u8,
    ) -> StepOutcome {
        if !self.state.enabled {
            return StepOutcome::Idle;
        }

        let interval = self.state.config.interval.as_millis();
        if u64::from(elapsed_ms(self.state.last_tick, now)) <= interval {
            return StepOutcome::Waiting;
        }
        self.state.last_tick = now;

        let next = self
            .state
            .current
            .checked_add(self.state.config.step)
            .filter(|next| *next <= self.state.config.hue_stop);
        let Some(next) = next else {
            #[cfg(feature = "esp32-log")]
            println!("[SweepController.poll] finished at {:?}", self.state.current);
            self.state.enabled = false;
            return StepOutcome::Finished;
        };

        match self.state.config.axis {
            SweepAxis::Hue => {
                // Device hue is 8-bit, higher bits wrap around the wheel
                #[allow(clippy::cast_possible_truncation)]
                let hue = next.wrapping_add(u16::from(hue_offset)) as u8;
                engine.set_hue(hue);
            }
            SweepAxis::Intensity => engine.set_intensity(next),
        }
        engine.update_hsv();

        self.state.current = next;
        StepOutcome::Stepped
    }
}

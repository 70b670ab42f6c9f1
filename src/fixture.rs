//! One physical fixture: color engine, sweep and clock under a single owner

use crate::OutputDriver;
use crate::clock::Clock;
use crate::color::{Rgb, Rgb10};
use crate::command::{CommandReceiver, FixtureCommand};
use crate::engine::ColorEngine;
use crate::gamma::Gamma;
use crate::sweep::{StepOutcome, SweepConfig, SweepController, SweepError};

/// Initial fixture settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixtureConfig {
    /// Whether levels are gamma corrected
    pub gamma: bool,
    pub gamma_curve: Gamma,
    /// Stored 8-bit hue
    pub hue: u8,
    /// Stored 10-bit intensity
    pub intensity: u16,
    pub sweep: SweepConfig,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            gamma: true,
            gamma_curve: Gamma::Gamma2_2,
            hue: 0,
            intensity: 0,
            sweep: SweepConfig::default(),
        }
    }
}

/// A fixture of `UNITS` ganged RGB units
///
/// All mutable state of the light lives here; pass the fixture to whatever
/// needs to change it.
pub struct Fixture<O: OutputDriver, C: Clock, const UNITS: usize> {
    engine: ColorEngine<O, UNITS>,
    sweep: SweepController,
    clock: C,
}

impl<O: OutputDriver, C: Clock, const UNITS: usize> Fixture<O, C, UNITS> {
    /// Create a fixture. The output is not written until the first update.
    pub fn new(output: O, clock: C, config: &FixtureConfig) -> Self {
        let mut engine = ColorEngine::new(output, config.gamma_curve, config.gamma);
        engine.set_hue(config.hue);
        engine.set_intensity(config.intensity);
        let sweep = SweepController::new(config.sweep, clock.now_ms());
        Self {
            engine,
            sweep,
            clock,
        }
    }

    pub fn set_rgb(&mut self, r: u16, g: u16, b: u16) {
        self.engine.set_rgb(r, g, b);
    }

    pub fn set_rgb10(&mut self, color: Rgb10) {
        self.engine.set_rgb10(color);
    }

    pub fn set_hue_value(&mut self, hue: u8, value: u16) {
        self.engine.set_hue_value(hue, value);
    }

    /// Store a hue for [`Self::update_hsv`] and sweeps
    pub fn set_hue(&mut self, hue: u8) {
        self.engine.set_hue(hue);
    }

    /// Store an intensity for [`Self::update_hsv`] and sweeps
    pub fn set_intensity(&mut self, intensity: u16) {
        self.engine.set_intensity(intensity);
    }

    pub fn update_hsv(&mut self) {
        self.engine.update_hsv();
    }

    pub fn all_off(&mut self) {
        self.engine.all_off();
    }

    pub fn set_gamma(&mut self, enabled: bool) {
        self.engine.set_gamma(enabled);
    }

    pub fn set_gamma_curve(&mut self, gamma: Gamma) {
        self.engine.set_gamma_curve(gamma);
    }

    pub fn configure_sweep(&mut self, config: SweepConfig) {
        let now = self.clock.now_ms();
        self.sweep.configure(config, now);
    }

    pub fn enable_sweep(&mut self, enabled: bool) {
        let now = self.clock.now_ms();
        self.sweep.enable(enabled, now);
    }

    pub fn reset_sweep(&mut self) {
        let now = self.clock.now_ms();
        self.sweep.reset(now);
    }

    /// Advance the sweep if its interval elapsed. Call this every loop iteration.
    pub fn poll_sweep(&mut self, hue_offset: u8) -> StepOutcome {
        let now = self.clock.now_ms();
        self.sweep.poll(now, &mut self.engine, hue_offset)
    }

    /// Sweep progress in percent
    pub fn progress(&self) -> Result<f32, SweepError> {
        self.sweep.progress()
    }

    /// Apply every queued command without blocking.
    ///
    /// Returns the number of commands applied.
    pub fn process_commands<const SIZE: usize>(
        &mut self,
        commands: &CommandReceiver<'_, SIZE>,
    ) -> usize {
        let mut applied = 0;
        while let Ok(command) = commands.try_receive() {
            self.apply(command);
            applied += 1;
        }
        applied
    }

    /// Apply a single command
    pub fn apply(&mut self, command: FixtureCommand) {
        match command {
            FixtureCommand::SetRgb(color) => self.set_rgb10(color),
            FixtureCommand::SetHueValue { hue, value } => self.set_hue_value(hue, value),
            FixtureCommand::SetHue(hue) => {
                self.set_hue(hue);
                self.update_hsv();
            }
            FixtureCommand::SetIntensity(intensity) => {
                self.set_intensity(intensity);
                self.update_hsv();
            }
            FixtureCommand::AllOff => self.all_off(),
            FixtureCommand::SetGamma(enabled) => self.set_gamma(enabled),
            FixtureCommand::ConfigureSweep(config) => self.configure_sweep(config),
            FixtureCommand::EnableSweep(enabled) => self.enable_sweep(enabled),
            FixtureCommand::ResetSweep => self.reset_sweep(),
        }
    }

    /// Last frame written to the output
    pub fn frame(&self) -> &[Rgb; UNITS] {
        self.engine.frame()
    }

    pub const fn engine(&self) -> &ColorEngine<O, UNITS> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ColorEngine<O, UNITS> {
        &mut self.engine
    }

    pub const fn sweep(&self) -> &SweepController {
        &self.sweep
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }
}

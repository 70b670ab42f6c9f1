//! Color engine for a fixture of ganged units
//!
//! Owns the frame buffer and is the only component that writes to the
//! [`OutputDriver`]. Every call that changes the frame ends with exactly one
//! write of all units.

use crate::OutputDriver;
use crate::color::{Hsv, OFF, Rgb, Rgb10, hsv2rgb};
use crate::gamma::Gamma;
use crate::ladder::{self, LEVEL_MAX, UNIT_MAX};

/// Color engine driving `UNITS` ganged RGB units
pub struct ColorEngine<O: OutputDriver, const UNITS: usize> {
    output: O,
    frame: [Rgb; UNITS],
    gamma_enabled: bool,
    gamma: Gamma,
    hue: u8,
    intensity: u16,
}

impl<O: OutputDriver, const UNITS: usize> ColorEngine<O, UNITS> {
    /// Create a new engine. Nothing is written until the first update.
    pub fn new(output: O, gamma: Gamma, gamma_enabled: bool) -> Self {
        Self {
            output,
            frame: [OFF; UNITS],
            gamma_enabled,
            gamma,
            hue: 0,
            intensity: 0,
        }
    }

    /// Enable or disable gamma correction of incoming levels
    pub fn set_gamma(&mut self, enabled: bool) {
        self.gamma_enabled = enabled;
    }

    /// Select the gamma curve used when correction is enabled
    pub fn set_gamma_curve(&mut self, gamma: Gamma) {
        self.gamma = gamma;
    }

    pub const fn gamma_enabled(&self) -> bool {
        self.gamma_enabled
    }

    pub const fn gamma_curve(&self) -> Gamma {
        self.gamma
    }

    /// Store the hue used by [`Self::update_hsv`]
    pub fn set_hue(&mut self, hue: u8) {
        self.hue = hue;
    }

    /// Store the intensity used by [`Self::update_hsv`], clamped to 1023
    pub fn set_intensity(&mut self, intensity: u16) {
        self.intensity = intensity.min(LEVEL_MAX);
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }

    pub const fn intensity(&self) -> u16 {
        self.intensity
    }

    /// Last frame written to the output
    pub const fn frame(&self) -> &[Rgb; UNITS] {
        &self.frame
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Set 10-bit red, green and blue levels.
    ///
    /// Each channel is ladder-encoded on its own, so unit `i` takes its red,
    /// green and blue from three independent ladders.
    pub fn set_rgb(&mut self, r: u16, g: u16, b: u16) {
        let reds: [u8; UNITS] = ladder::encode(self.correct(r));
        let greens: [u8; UNITS] = ladder::encode(self.correct(g));
        let blues: [u8; UNITS] = ladder::encode(self.correct(b));

        for (i, unit) in self.frame.iter_mut().enumerate() {
            *unit = Rgb {
                r: reds[i],
                g: greens[i],
                b: blues[i],
            };
        }
        self.show();
    }

    /// Set a 10-bit RGB color
    pub fn set_rgb10(&mut self, color: Rgb10) {
        self.set_rgb(color.r, color.g, color.b);
    }

    /// Set an 8-bit hue at a 10-bit value, saturation is maximal.
    ///
    /// The ganged units act as one dimmer: every lit unit shows the same hue,
    /// fully lit units at full value and the partial unit at the remainder.
    pub fn set_hue_value(&mut self, hue: u8, value: u16) {
        let levels: [u8; UNITS] = ladder::encode(self.correct(value));

        for (unit, level) in self.frame.iter_mut().zip(levels) {
            *unit = if level == 0 {
                OFF
            } else {
                hsv2rgb(Hsv {
                    hue,
                    sat: UNIT_MAX,
                    val: level,
                })
            };
        }
        self.show();
    }

    /// Apply the stored hue and intensity
    pub fn update_hsv(&mut self) {
        self.set_hue_value(self.hue, self.intensity);
    }

    /// Switch every unit off
    pub fn all_off(&mut self) {
        self.frame.fill(OFF);
        self.show();
    }

    fn correct(&self, value: u16) -> u16 {
        let value = value.min(LEVEL_MAX);
        if self.gamma_enabled {
            self.gamma.correct(value)
        } else {
            value
        }
    }

    fn show(&mut self) {
        self.output.write(&self.frame);
    }
}

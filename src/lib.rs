#![no_std]

pub mod blocking;
pub mod clock;
pub mod color;
pub mod command;
pub mod engine;
pub mod fixture;
pub mod gamma;
pub mod ladder;
pub mod sweep;

pub use blocking::{BlockingDelay, Delay};
pub use clock::{Clock, EmbassyClock};
pub use command::{CommandChannel, CommandReceiver, CommandSender, FixtureCommand};
pub use engine::ColorEngine;
pub use fixture::{Fixture, FixtureConfig};
pub use gamma::{Gamma, gamma_correct};
pub use sweep::{StepOutcome, SweepAxis, SweepConfig, SweepController, SweepError, SweepState};

pub use color::{Hsv, Rgb, Rgb10, hue_value_to_rgb};
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms. `colors`
/// holds one color per physical unit, in wiring order.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

mod wheel;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use smart_leds::hsv::hsv2rgb;
pub use wheel::{HUE_MAX, HUE_SEGMENT, hue_value_to_rgb};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// RGB color with 10-bit channels (0-1023)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb10 {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Rgb10 {
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }
}

/// Black unit color
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

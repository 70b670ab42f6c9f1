//! High resolution hue wheel
//!
//! Three segments of 1023 steps each: red to green, green to blue and blue
//! back to red. Saturation is always maximal.

use super::Rgb10;

/// Width of one wheel segment
pub const HUE_SEGMENT: u16 = 1023;

/// Maximum hue accepted by [`hue_value_to_rgb`]
pub const HUE_MAX: u16 = 3071;

/// Last segment index
const LAST_SEGMENT: u16 = 2;

/// Convert a 12-bit hue (0-3071) and a 10-bit value to a 10-bit RGB color.
///
/// Hue is clamped to [`HUE_MAX`]. The ramps are full-scale regardless of
/// `value`: within a segment one channel falls from 1023 while the next one
/// rises from 0 and the third stays at 0. Dimming happens afterwards, through
/// gamma and the ladder.
pub fn hue_value_to_rgb(hue: u16, _value: u16) -> Rgb10 {
    let hue = hue.min(HUE_MAX);

    // 3069..=3071 would divide into a fourth segment
    let segment = (hue / HUE_SEGMENT).min(LAST_SEGMENT);
    let position = (hue - segment * HUE_SEGMENT).min(HUE_SEGMENT);
    let falling = HUE_SEGMENT - position;

    match segment {
        0 => Rgb10::new(falling, position, 0),
        1 => Rgb10::new(0, falling, position),
        _ => Rgb10::new(position, 0, falling),
    }
}

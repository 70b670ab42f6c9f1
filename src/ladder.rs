//! Ladder encoding of 10-bit levels onto ganged 8-bit units
//!
//! A level is split into `level / 256` fully lit units followed by one unit
//! carrying the remainder. Everything after that unit is off.

/// Maximum 10-bit level
pub const LEVEL_MAX: u16 = 1023;

/// Maximum level of a single physical unit
pub const UNIT_MAX: u8 = 255;

/// Level range covered by one fully lit unit
const UNIT_SPAN: u16 = 256;

/// Split of a level into fully lit units and a remainder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderSplit {
    /// Number of fully lit units
    pub full: usize,
    /// Level of the unit following the full ones
    pub remainder: u8,
}

/// Split a level (clamped to [`LEVEL_MAX`]) into full units and a remainder
#[allow(clippy::cast_possible_truncation)]
pub const fn split(value: u16) -> LadderSplit {
    let value = if value > LEVEL_MAX { LEVEL_MAX } else { value };
    LadderSplit {
        full: (value / UNIT_SPAN) as usize,
        remainder: (value % UNIT_SPAN) as u8,
    }
}

/// Encode a level into `units`, one 8-bit level per unit.
///
/// If the level needs more full units than there are, every unit saturates
/// at [`UNIT_MAX`].
pub fn encode_into(value: u16, units: &mut [u8]) {
    let LadderSplit { full, remainder } = split(value);
    if full >= units.len() {
        units.fill(UNIT_MAX);
        return;
    }

    let (lit, rest) = units.split_at_mut(full);
    lit.fill(UNIT_MAX);
    if let Some((partial, off)) = rest.split_first_mut() {
        *partial = remainder;
        off.fill(0);
    }
}

/// Encode a level into a fixed number of units
pub fn encode<const N: usize>(value: u16) -> [u8; N] {
    let mut units = [0; N];
    encode_into(value, &mut units);
    units
}

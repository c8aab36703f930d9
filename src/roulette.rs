use rand::Rng;
use serde::{Deserialize, Serialize};

use std::fmt;

use crate::error::RouletteError;

const MAX_PREALLOCATED_SPINS: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Black,
    Green,
    Red,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Black, Color::Green, Color::Red];

    fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::Green => 1,
            Color::Red => 2,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Black => "BLACK",
            Color::Green => "GREEN",
            Color::Red => "RED",
        };
        f.pad(name)
    }
}

/// A wheel of colored slots: black and red alternate by slot parity,
/// greens fill the tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    slots: Vec<Color>,
    counts: [usize; 3],
}

impl Wheel {
    pub fn new(black: usize, red: usize, green: usize) -> Result<Self, RouletteError> {
        let invalid = RouletteError::InvalidConfiguration { black, red, green };
        let alternating = black.checked_add(red).ok_or_else(|| invalid.clone())?;
        let total = alternating.checked_add(green).ok_or_else(|| invalid.clone())?;
        if total == 0 {
            return Err(invalid);
        }

        // Parity decides the color, even when black != red.
        let mut slots: Vec<Color> = (0..alternating)
            .map(|i| if i % 2 == 0 { Color::Black } else { Color::Red })
            .collect();
        slots.resize(total, Color::Green);

        let mut counts = [0; 3];
        counts[Color::Black.index()] = black;
        counts[Color::Green.index()] = green;
        counts[Color::Red.index()] = red;

        Ok(Wheel { slots, counts })
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Configured number of slots for `color`.
    pub fn count_of(&self, color: Color) -> usize {
        self.counts[color.index()]
    }

    pub fn slot_at(&self, index: usize) -> Result<Color, RouletteError> {
        self.slots
            .get(index)
            .copied()
            .ok_or(RouletteError::IndexOutOfRange {
                index,
                len: self.slots.len(),
            })
    }

    pub fn slots(&self) -> &[Color] {
        &self.slots
    }

    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Color, RouletteError> {
        let result = rng.gen_range(0..self.slot_count());
        self.slot_at(result)
    }
}

/// Spins `wheel` `count` times, returning the outcomes in spin order.
pub fn run_trials<R: Rng + ?Sized>(
    wheel: &Wheel,
    rng: &mut R,
    count: usize,
) -> Result<Vec<Color>, RouletteError> {
    let mut outcomes = Vec::with_capacity(count.min(MAX_PREALLOCATED_SPINS));
    for _ in 0..count {
        outcomes.push(wheel.spin(rng)?);
    }
    Ok(outcomes)
}

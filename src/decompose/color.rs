use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

use super::error::DecomposeError;

/// An RGB display color for a corridor run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const DEFAULT_PALETTE: [Color; 20] = [
    Color::rgb(230, 25, 75),
    Color::rgb(60, 180, 75),
    Color::rgb(255, 225, 25),
    Color::rgb(0, 130, 200),
    Color::rgb(245, 130, 48),
    Color::rgb(145, 30, 180),
    Color::rgb(70, 240, 240),
    Color::rgb(240, 50, 230),
    Color::rgb(210, 245, 60),
    Color::rgb(250, 190, 212),
    Color::rgb(0, 128, 128),
    Color::rgb(220, 190, 255),
    Color::rgb(170, 110, 40),
    Color::rgb(255, 250, 200),
    Color::rgb(128, 0, 0),
    Color::rgb(170, 255, 195),
    Color::rgb(128, 128, 0),
    Color::rgb(255, 215, 180),
    Color::rgb(0, 0, 128),
    Color::rgb(128, 128, 128),
];

/// Hands out palette colors, each at most once, in palette order.
#[derive(Clone, Debug)]
pub struct ColorAllocator {
    remaining: VecDeque<Color>,
    used: usize,
}

impl ColorAllocator {
    pub fn with_palette(palette: impl IntoIterator<Item = Color>) -> Self {
        Self {
            remaining: palette.into_iter().collect(),
            used: 0,
        }
    }

    /// Takes the next unused color.
    ///
    /// # Errors
    /// Returns `DecomposeError::OutOfColors` once the palette is empty.
    pub fn fresh(&mut self) -> Result<Color, DecomposeError> {
        let color = self
            .remaining
            .pop_front()
            .ok_or(DecomposeError::OutOfColors { used: self.used })?;
        self.used += 1;
        Ok(color)
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

impl Default for ColorAllocator {
    fn default() -> Self {
        Self::with_palette(DEFAULT_PALETTE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_palette_is_distinct() {
        let unique: HashSet<_> = DEFAULT_PALETTE.iter().collect();
        assert_eq!(unique.len(), DEFAULT_PALETTE.len());
    }

    #[test]
    fn exhaustion_reports_used_count() {
        let mut colors = ColorAllocator::with_palette([Color::rgb(1, 2, 3)]);
        assert_eq!(colors.fresh(), Ok(Color::rgb(1, 2, 3)));
        assert_eq!(colors.fresh(), Err(DecomposeError::OutOfColors { used: 1 }));
        assert_eq!(colors.remaining(), 0);
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(Color::rgb(255, 0, 16).to_string(), "#ff0010");
    }
}

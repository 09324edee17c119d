//! Named pin ranges.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// A named port covering the pins `lsb..=msb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BasicPort {
    /// Port or net name.
    pub name: String,
    /// Lowest pin index.
    pub lsb: usize,
    /// Highest pin index.
    pub msb: usize,
}

impl BasicPort {
    /// Creates a port of `width` pins starting at pin 0.
    ///
    /// `width` must be at least 1.
    pub fn new(name: impl Into<String>, width: usize) -> Self {
        debug_assert!(width > 0, "port width must be positive");
        Self {
            name: name.into(),
            lsb: 0,
            msb: width.saturating_sub(1),
        }
    }

    /// Creates a port covering `lsb..=msb`.
    pub fn with_range(name: impl Into<String>, lsb: usize, msb: usize) -> Self {
        debug_assert!(lsb <= msb);
        Self {
            name: name.into(),
            lsb,
            msb,
        }
    }

    /// Creates a single-pin port at `index`.
    pub fn pin(name: impl Into<String>, index: usize) -> Self {
        Self::with_range(name, index, index)
    }

    /// Returns the number of pins.
    pub fn width(&self) -> usize {
        self.msb - self.lsb + 1
    }

    /// Returns the pin indices, lowest first.
    pub fn pins(&self) -> RangeInclusive<usize> {
        self.lsb..=self.msb
    }

    /// Returns the single-pin port for `index` of this port.
    pub fn select(&self, index: usize) -> BasicPort {
        BasicPort::pin(self.name.clone(), index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_pins() {
        let port = BasicPort::new("gfpga_pad", 8);
        assert_eq!(port.width(), 8);
        assert_eq!(port.pins().collect::<Vec<_>>(), (0..8).collect::<Vec<_>>());

        let slice = BasicPort::with_range("sram", 2, 5);
        assert_eq!(slice.width(), 4);
        assert_eq!(slice.pins().next(), Some(2));
    }

    #[test]
    fn select_single_pin() {
        let port = BasicPort::new("clk", 4);
        let pin = port.select(3);
        assert_eq!(pin, BasicPort::pin("clk", 3));
        assert_eq!(pin.width(), 1);
    }
}

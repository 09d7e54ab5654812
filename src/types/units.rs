//! Coordinate unit labels.

use std::fmt;

/// Unit label attached to output coordinate fields.
///
/// This is metadata only: the pipeline performs no unit conversion, it
/// simply records what the caller says the coordinates are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CoordUnits {
    /// Coordinates are in degrees.
    #[default]
    Degrees,
    /// Coordinates are in radians.
    Radians,
}

impl CoordUnits {
    /// The label written into output metadata.
    pub fn label(&self) -> &'static str {
        match self {
            CoordUnits::Degrees => "degrees",
            CoordUnits::Radians => "radians",
        }
    }
}

impl fmt::Display for CoordUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(CoordUnits::Degrees.label(), "degrees");
        assert_eq!(CoordUnits::Radians.label(), "radians");
        assert_eq!(CoordUnits::default(), CoordUnits::Degrees);
    }
}

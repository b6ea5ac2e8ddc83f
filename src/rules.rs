use crate::error::ConfigError;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(2, 3, 3);

/// # Representation
/// A life rule is three neighbor thresholds:
/// ```notrust
/// alive, n < underpopulation  -> dies
/// alive, n > overpopulation   -> dies
/// dead,  n == birth           -> born
/// anything else               -> unchanged
/// ```
///
/// Only rules where `underpopulation <= birth <= overpopulation` are accepted by
/// [`RuleSet::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub underpopulation: u8,
    pub overpopulation: u8,
    pub birth: u8,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    pub const fn new(underpopulation: u8, overpopulation: u8, birth: u8) -> Self {
        Self {
            underpopulation,
            overpopulation,
            birth,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.underpopulation > self.overpopulation {
            return Err(ConfigError::ThresholdsInverted {
                underpopulation: self.underpopulation,
                overpopulation: self.overpopulation,
            });
        }

        if self.birth < self.underpopulation || self.birth > self.overpopulation {
            return Err(ConfigError::BirthOutOfRange {
                birth: self.birth,
                underpopulation: self.underpopulation,
                overpopulation: self.overpopulation,
            });
        }

        Ok(())
    }

    /// The state a cell moves to given its current state and the number of live cells around
    /// it. `None` means the rule does not touch the cell, so it keeps whatever it held.
    pub fn next(&self, alive: bool, neighbors: u8) -> Option<bool> {
        match alive {
            true if neighbors < self.underpopulation => Some(false),
            true if neighbors > self.overpopulation => Some(false),
            false if neighbors == self.birth => Some(true),
            _ => None,
        }
    }
}

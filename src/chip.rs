//! Chip denominations and the per-denomination bet tally.

use crate::error::BetError;

/// A betting chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chip {
    /// $1 chip.
    One,
    /// $5 chip.
    Five,
    /// $10 chip.
    Ten,
    /// $50 chip.
    Fifty,
    /// $100 chip.
    Hundred,
}

impl Chip {
    /// All chips from lowest to highest denomination.
    pub const ALL: [Self; 5] = [Self::One, Self::Five, Self::Ten, Self::Fifty, Self::Hundred];

    /// Dollar value of the chip.
    #[must_use]
    pub const fn value(self) -> usize {
        match self {
            Self::One => 1,
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Chip {
    type Error = BetError;

    fn try_from(amount: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|chip| chip.value() == amount)
            .ok_or(BetError::InvalidChip(amount))
    }
}

/// Count of placed chips per denomination.
///
/// During betting the tally always sums to the current bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChipTally {
    counts: [u32; 5],
}

impl ChipTally {
    /// Creates an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 5] }
    }

    /// Returns how many chips of the given denomination are placed.
    #[must_use]
    pub const fn count(&self, chip: Chip) -> u32 {
        self.counts[chip.slot()]
    }

    /// Adds one chip.
    pub const fn add(&mut self, chip: Chip) {
        self.counts[chip.slot()] += 1;
    }

    /// Removes one chip, returning `false` if none of that denomination is placed.
    pub const fn remove(&mut self, chip: Chip) -> bool {
        let slot = chip.slot();
        if self.counts[slot] == 0 {
            return false;
        }
        self.counts[slot] -= 1;
        true
    }

    /// Highest denomination with at least one chip placed.
    #[must_use]
    pub fn highest(&self) -> Option<Chip> {
        Chip::ALL
            .into_iter()
            .rev()
            .find(|&chip| self.count(chip) > 0)
    }

    /// Sum of all placed chips.
    #[must_use]
    pub fn total(&self) -> usize {
        self.iter()
            .map(|(chip, count)| chip.value() * count as usize)
            .sum()
    }

    /// Returns whether no chips are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Removes every chip.
    pub const fn clear(&mut self) {
        self.counts = [0; 5];
    }

    /// Iterates over placed denominations and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (Chip, u32)> + '_ {
        Chip::ALL
            .into_iter()
            .map(|chip| (chip, self.count(chip)))
            .filter(|&(_, count)| count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_from_amount() {
        assert_eq!(Chip::try_from(50), Ok(Chip::Fifty));
        assert_eq!(Chip::try_from(25), Err(BetError::InvalidChip(25)));
    }

    #[test]
    fn tally_tracks_total_and_highest() {
        let mut tally = ChipTally::new();
        tally.add(Chip::Five);
        tally.add(Chip::Hundred);
        tally.add(Chip::Five);

        assert_eq!(tally.total(), 110);
        assert_eq!(tally.highest(), Some(Chip::Hundred));

        assert!(tally.remove(Chip::Hundred));
        assert!(!tally.remove(Chip::Hundred));
        assert_eq!(tally.highest(), Some(Chip::Five));
        assert_eq!(tally.count(Chip::Five), 2);

        tally.clear();
        assert!(tally.is_empty());
        assert_eq!(tally.highest(), None);
    }
}

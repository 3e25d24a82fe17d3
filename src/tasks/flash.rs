//! Title flash animation

use std::collections::VecDeque;

use rand::{seq::SliceRandom, Rng};

/// Colours the title segment can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleColor {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
}

/// Colour of the title segment when no flash is running
pub const DEFAULT_TITLE_COLOR: TitleColor = TitleColor::Blue;

/// Colours cycled through during a flash
pub const PALETTE: [TitleColor; 5] = [
    TitleColor::Red,
    TitleColor::Green,
    TitleColor::Blue,
    TitleColor::Yellow,
    TitleColor::Orange,
];

impl TitleColor {
    pub fn name(&self) -> &'static str {
        match self {
            TitleColor::Red => "red",
            TitleColor::Green => "green",
            TitleColor::Blue => "blue",
            TitleColor::Yellow => "yellow",
            TitleColor::Orange => "orange",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            TitleColor::Red => (255, 0, 0),
            TitleColor::Green => (0, 128, 0),
            TitleColor::Blue => (0, 0, 255),
            TitleColor::Yellow => (255, 255, 0),
            TitleColor::Orange => (255, 165, 0),
        }
    }

    /// Text colour that stays readable on top of this background
    pub fn foreground(&self) -> (u8, u8, u8) {
        match self {
            TitleColor::Yellow | TitleColor::Orange => (0, 0, 0),
            _ => (255, 255, 255),
        }
    }

    /// Single glyph used where only text can carry the colour
    pub fn marker(&self) -> &'static str {
        match self {
            TitleColor::Red => "🔴",
            TitleColor::Green => "🟢",
            TitleColor::Blue => "🔵",
            TitleColor::Yellow => "🟡",
            TitleColor::Orange => "🟠",
        }
    }
}

/// Remaining colours of one flash, consumed one step at a time.
///
/// When the iterator is exhausted the title goes back to
/// [`DEFAULT_TITLE_COLOR`].
#[derive(Debug, Clone)]
pub struct FlashSequence {
    remaining: VecDeque<TitleColor>,
}

impl FlashSequence {
    /// Palette in random order
    pub fn shuffled_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut colors = PALETTE.to_vec();
        colors.shuffle(rng);
        Self::from_colors(colors)
    }

    pub fn from_colors(colors: impl IntoIterator<Item = TitleColor>) -> Self {
        Self {
            remaining: colors.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_finished(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl Iterator for FlashSequence {
    type Item = TitleColor;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len(), Some(self.remaining.len()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn shuffled_sequence_shows_each_colour_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let sequence = FlashSequence::shuffled_with(&mut rng);
        assert_eq!(sequence.remaining(), PALETTE.len());

        let seen: Vec<_> = sequence.collect();
        let unique: HashSet<_> = seen.iter().copied().collect();
        assert_eq!(seen.len(), PALETTE.len());
        assert_eq!(unique, PALETTE.iter().copied().collect());
    }

    #[test]
    fn same_seed_same_order() {
        let a: Vec<_> = FlashSequence::shuffled_with(&mut StdRng::seed_from_u64(42)).collect();
        let b: Vec<_> = FlashSequence::shuffled_with(&mut StdRng::seed_from_u64(42)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn explicit_sequence_ends() {
        let mut sequence = FlashSequence::from_colors([TitleColor::Red, TitleColor::Orange]);
        assert_eq!(sequence.next(), Some(TitleColor::Red));
        assert_eq!(sequence.next(), Some(TitleColor::Orange));
        assert!(sequence.is_finished());
        assert_eq!(sequence.next(), None);
    }

    #[test]
    fn default_title_colour_is_blue() {
        assert_eq!(DEFAULT_TITLE_COLOR.name(), "blue");
        assert_eq!(TitleColor::Yellow.foreground(), (0, 0, 0));
    }
}

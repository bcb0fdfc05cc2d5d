//! Five Elements (五行) and Yin/Yang polarity.

use serde::{Deserialize, Serialize};

/// The five elemental phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order (Wood → Fire → Earth → Metal → Water).
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Wood,
    FiveElement::Fire,
    FiveElement::Earth,
    FiveElement::Metal,
    FiveElement::Water,
];

impl FiveElement {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Element produced by this one in the generating cycle.
    pub const fn generates(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }
}

/// Yin/Yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }

    /// Polarity of the 0-based position in an alternating cycle.
    pub const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle_closes() {
        let mut e = FiveElement::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, FiveElement::Wood);
    }

    #[test]
    fn parity() {
        assert_eq!(Polarity::from_parity(0), Polarity::Yang);
        assert_eq!(Polarity::from_parity(7), Polarity::Yin);
    }
}

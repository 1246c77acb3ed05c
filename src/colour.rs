/// A severity scale, least to most severe.
///
/// The derived `Ord` follows declaration order, which is what the tree
/// propagates: a node's propagated colour is the most severe colour below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Colour {
    Blue = 0,
    Green = 1,
    Yellow = 2,
    Orange = 3,
    Red = 4,
}

impl Colour {
    pub const ALL: [Colour; 5] = [
        Colour::Blue,
        Colour::Green,
        Colour::Yellow,
        Colour::Orange,
        Colour::Red,
    ];
}

impl From<Colour> for usize {
    fn from(colour: Colour) -> usize {
        colour as usize
    }
}

impl From<usize> for Colour {
    /// Wraps around, so any integer maps onto the scale.
    fn from(colour: usize) -> Colour {
        Colour::ALL[colour % Colour::ALL.len()]
    }
}

//! Cell and Preference types for the simulation grid.

use std::fmt;

/// Discriminant values are the bytes handed to the browser renderer — do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Preference {
    Vacant = 0,
    Endline = 1,
    Newline = 2,
}

impl Preference {
    /// Single-character tag used by the text renderer.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Vacant => '.',
            Self::Endline => 'e',
            Self::Newline => 'n',
        }
    }

    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Vacant),
            'e' => Some(Self::Endline),
            'n' => Some(Self::Newline),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_vacant(self) -> bool {
        self == Self::Vacant
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One grid square. Relocation swaps whole `Cell` records, so every field
/// travels with the agent (or the vacancy) that owns it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell {
    pub preference: Preference,
    /// Only meaningful while occupied.
    pub satisfied: bool,
    /// Percentage in `[0, 100]`; vacant cells hold 0.0 after a cycle.
    pub happiness: f32,
    /// Vacant since setup and not yet used as a relocation target.
    pub originally_vacant: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::vacant()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.preference)
    }
}

impl Cell {
    #[must_use]
    pub fn new(preference: Preference) -> Self {
        Self {
            preference,
            satisfied: false,
            happiness: 0.0,
            originally_vacant: false,
        }
    }

    /// A vacancy that has never been moved into.
    #[must_use]
    pub fn vacant() -> Self {
        Self {
            originally_vacant: true,
            ..Self::new(Preference::Vacant)
        }
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        !self.preference.is_vacant()
    }
}

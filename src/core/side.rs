//! River banks.

use serde::{Deserialize, Serialize};

/// One of the two fixed banks of the river.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BankSide {
    /// Starting bank in most levels.
    #[default]
    Left,
    /// Goal bank.
    Right,
}

impl BankSide {
    /// Both banks, left first.
    pub const ALL: [BankSide; 2] = [BankSide::Left, BankSide::Right];

    /// The other bank.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            BankSide::Left => BankSide::Right,
            BankSide::Right => BankSide::Left,
        }
    }
}

impl std::fmt::Display for BankSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankSide::Left => f.write_str("left"),
            BankSide::Right => f.write_str("right"),
        }
    }
}

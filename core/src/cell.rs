use serde::{Deserialize, Serialize};

use crate::*;

/// Static content of one grid square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    /// Exchanges the two particles when either of them lands here.
    SwapGate,
    /// Toggles the phase of the particle landing here.
    PhaseGate,
    /// Impassable unless the particle is phased.
    Wall,
}

impl Cell {
    /// Decodes the literal level table values `0..=3`.
    pub const fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::SwapGate),
            2 => Ok(Self::PhaseGate),
            3 => Ok(Self::Wall),
            other => Err(PuzzleError::InvalidCell(other)),
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::SwapGate => 1,
            Self::PhaseGate => 2,
            Self::Wall => 3,
        }
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Whether a particle with the given phase may stand on this cell.
    pub const fn admits(self, phased: bool) -> bool {
        !self.is_wall() || phased
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl TryFrom<u8> for Cell {
    type Error = PuzzleError;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code)
    }
}

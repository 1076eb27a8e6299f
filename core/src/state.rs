use serde::{Deserialize, Serialize};

use crate::*;

/// Level progress signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Menu,
    Playing,
    Complete,
}

impl Stage {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::Menu
    }
}

/// Mutable simulation state for the level being played.
///
/// Replaced wholesale on every level load; there is no move history.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    pub red_pos: Coord2,
    pub blue_pos: Coord2,
    /// Red may pass through walls while set.
    pub red_phased: bool,
    /// Blue may pass through walls while set.
    pub blue_phased: bool,
    /// Blue moves opposite to the commanded direction while set.
    pub entangled: bool,
    pub moves: u32,
    pub stage: Stage,
}

impl PuzzleState {
    /// Fresh state at the level's starts, in [`Stage::Playing`].
    ///
    /// The stage is a default only; callers entering another stage overwrite it.
    pub fn reset(level: &Level) -> Self {
        Self {
            red_pos: level.red_start(),
            blue_pos: level.blue_start(),
            red_phased: false,
            blue_phased: false,
            entangled: false,
            moves: 0,
            stage: Stage::Playing,
        }
    }

    /// Direction blue actually travels for a commanded `direction`.
    pub const fn blue_direction(&self, direction: Direction) -> Direction {
        if self.entangled {
            direction.reversed()
        } else {
            direction
        }
    }

    pub fn is_phased(&self, particle: Particle) -> bool {
        match particle {
            Particle::Red => self.red_phased,
            Particle::Blue => self.blue_phased,
        }
    }

    pub fn position(&self, particle: Particle) -> Coord2 {
        match particle {
            Particle::Red => self.red_pos,
            Particle::Blue => self.blue_pos,
        }
    }
}

/// One of the two tokens on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Particle {
    Red,
    Blue,
}

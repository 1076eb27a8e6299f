use serde::{Deserialize, Serialize};

use crate::*;

/// Landing cells of both particles for one accepted step, before gates apply.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointMove {
    pub red_to: Coord2,
    pub blue_to: Coord2,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResolution {
    Accepted(JointMove),
    /// Neither particle moves when either one is blocked.
    Rejected {
        red_blocked: bool,
        blue_blocked: bool,
    },
}

impl MoveResolution {
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub const fn accepted(self) -> Option<JointMove> {
        match self {
            Self::Accepted(joint) => Some(joint),
            Self::Rejected { .. } => None,
        }
    }
}

/// Target of a single particle step, if it stays on the grid and the cell admits it.
pub fn step_target(level: &Level, from: Coord2, direction: Direction, phased: bool) -> Option<Coord2> {
    let to = apply_delta(from, direction.offset(), level.size())?;
    level.cell(to)?.admits(phased).then_some(to)
}

fn particle_target(
    state: &PuzzleState,
    level: &Level,
    particle: Particle,
    direction: Direction,
) -> Option<Coord2> {
    let direction = match particle {
        Particle::Red => direction,
        Particle::Blue => state.blue_direction(direction),
    };
    step_target(
        level,
        state.position(particle),
        direction,
        state.is_phased(particle),
    )
}

/// Resolves a commanded step for both particles without touching `state`.
///
/// Red follows `direction`; blue follows it too, or its reverse while entangled.
pub fn try_move(state: &PuzzleState, level: &Level, direction: Direction) -> MoveResolution {
    let red_to = particle_target(state, level, Particle::Red, direction);
    let blue_to = particle_target(state, level, Particle::Blue, direction);

    match (red_to, blue_to) {
        (Some(red_to), Some(blue_to)) => MoveResolution::Accepted(JointMove { red_to, blue_to }),
        (red_to, blue_to) => {
            let red_blocked = red_to.is_none();
            let blue_blocked = blue_to.is_none();
            log::debug!(
                "Step {:?} rejected, red blocked: {}, blue blocked: {}",
                direction,
                red_blocked,
                blue_blocked
            );
            MoveResolution::Rejected {
                red_blocked,
                blue_blocked,
            }
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::*;

/// Effects of the cells the particles landed on, computed from the pre-move state.
///
/// Recomputing a resolution for the same move yields the same value, so each
/// landing toggles a phase flag exactly once, when the resolution is committed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateResolution {
    pub red_pos: Coord2,
    pub blue_pos: Coord2,
    pub red_phased: bool,
    pub blue_phased: bool,
    pub swapped: bool,
    pub completed: bool,
}

impl GateResolution {
    /// Writes positions, phases and completion into `state`. The move counter is left alone.
    pub fn commit(&self, state: &mut PuzzleState) {
        state.red_pos = self.red_pos;
        state.blue_pos = self.blue_pos;
        state.red_phased = self.red_phased;
        state.blue_phased = self.blue_phased;
        if self.completed {
            state.stage = Stage::Complete;
        }
    }
}

/// Applies swap and phase gates to an accepted move, then checks the goals.
pub fn resolve_gates(state: &PuzzleState, level: &Level, joint: JointMove) -> GateResolution {
    let JointMove { red_to, blue_to } = joint;
    let red_cell = level.cell(red_to).unwrap_or_default();
    let blue_cell = level.cell(blue_to).unwrap_or_default();

    // Phase toggles are keyed on the cells read before any swap, in both branches.
    let red_phased = state.red_phased ^ (red_cell == Cell::PhaseGate);
    let blue_phased = state.blue_phased ^ (blue_cell == Cell::PhaseGate);

    if red_cell == Cell::SwapGate || blue_cell == Cell::SwapGate {
        log::trace!("Swap gate: red {:?} <-> blue {:?}", red_to, blue_to);
        return GateResolution {
            red_pos: blue_to,
            blue_pos: red_to,
            red_phased,
            blue_phased,
            swapped: true,
            completed: level.is_solved_by(blue_to, red_to),
        };
    }

    if red_phased != state.red_phased || blue_phased != state.blue_phased {
        log::trace!("Phase gate: red {}, blue {}", red_phased, blue_phased);
    }

    GateResolution {
        red_pos: red_to,
        blue_pos: blue_to,
        red_phased,
        blue_phased,
        swapped: false,
        completed: level.is_solved_by(red_to, blue_to),
    }
}

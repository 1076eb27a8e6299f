use serde::{Deserialize, Serialize};

use crate::*;

/// Discrete player input, one per physical key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Continue,
    ToggleEntanglement,
    Step(Direction),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Not accepted in the current stage.
    Ignored,
    /// Step rejected because a particle could not move.
    Blocked,
    Moved,
    /// Step accepted and both goals reached.
    Completed,
    /// Entanglement flipped to the contained value.
    Toggled(bool),
    /// Level at the contained index was (re)loaded.
    LevelLoaded(usize),
}

impl CommandOutcome {
    pub const fn has_update(self) -> bool {
        use CommandOutcome::*;
        match self {
            Ignored => false,
            Blocked => false,
            Moved => true,
            Completed => true,
            Toggled(_) => true,
            LevelLoaded(_) => true,
        }
    }
}

/// Pure transition of `state` for one directional command.
///
/// Only meaningful while playing; the caller is responsible for stage checks.
pub fn advance(
    state: &PuzzleState,
    level: &Level,
    direction: Direction,
) -> (PuzzleState, CommandOutcome) {
    let MoveResolution::Accepted(joint) = try_move(state, level, direction) else {
        return (*state, CommandOutcome::Blocked);
    };

    let resolution = resolve_gates(state, level, joint);
    let mut next = *state;
    next.moves = next.moves.saturating_add(1);
    resolution.commit(&mut next);
    log::trace!(
        "Step {:?}: red {:?}, blue {:?}, move {}",
        direction,
        next.red_pos,
        next.blue_pos,
        next.moves
    );

    let outcome = if resolution.completed {
        CommandOutcome::Completed
    } else {
        CommandOutcome::Moved
    };
    (next, outcome)
}

/// Drives the menu, play and level-complete progression over a [`LevelSet`].
#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleEngine {
    levels: LevelSet,
    level_index: usize,
    state: PuzzleState,
}

impl PuzzleEngine {
    /// Engine waiting in the menu, with the first level loaded.
    pub fn new(levels: LevelSet) -> Self {
        let state = PuzzleState {
            stage: Stage::Menu,
            ..PuzzleState::reset(levels.first())
        };
        Self {
            levels,
            level_index: 0,
            state,
        }
    }

    pub fn stage(&self) -> Stage {
        self.state.stage
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn level(&self) -> &Level {
        &self.levels[self.level_index]
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn levels(&self) -> &LevelSet {
        &self.levels
    }

    pub fn view(&self) -> PuzzleView<'_> {
        PuzzleView::new(&self.state, self.level(), self.level_index)
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        use Command::*;
        use Stage::*;

        match (self.state.stage, command) {
            (Menu, Start) => self.enter_level(0),
            (Playing, ToggleEntanglement) => {
                self.state.entangled = !self.state.entangled;
                log::trace!("Entanglement {}", self.state.entangled);
                CommandOutcome::Toggled(self.state.entangled)
            }
            (Playing, Step(direction)) => {
                let (next, outcome) = advance(&self.state, self.level(), direction);
                self.state = next;
                if outcome == CommandOutcome::Completed {
                    log::debug!(
                        "Level {} complete in {} moves",
                        self.level_index,
                        self.state.moves
                    );
                }
                outcome
            }
            (Complete, Continue) => {
                let next = self.levels.next_index(self.level_index);
                self.enter_level(next)
            }
            (stage, command) => {
                log::trace!("Ignoring {:?} while {:?}", command, stage);
                CommandOutcome::Ignored
            }
        }
    }

    /// Jumps straight into the level at `index`, whatever the current stage.
    pub fn select_level(&mut self, index: usize) -> Result<CommandOutcome> {
        self.levels.get(index)?;
        Ok(self.enter_level(index))
    }

    fn enter_level(&mut self, index: usize) -> CommandOutcome {
        self.level_index = index;
        self.state = PuzzleState::reset(&self.levels[index]);
        log::debug!("Playing level {}: {}", index, self.level().name());
        CommandOutcome::LevelLoaded(index)
    }
}

impl Default for PuzzleEngine {
    fn default() -> Self {
        Self::new(LevelSet::builtin())
    }
}

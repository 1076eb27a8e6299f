use alloc::format;
use alloc::string::String;

use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Read-only snapshot handed to a renderer once per frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PuzzleView<'a> {
    pub stage: Stage,
    pub level_index: usize,
    pub level_name: &'a str,
    pub grid: &'a Array2<Cell>,
    pub red_pos: Coord2,
    pub blue_pos: Coord2,
    pub red_goal: Coord2,
    pub blue_goal: Coord2,
    pub red_phased: bool,
    pub blue_phased: bool,
    pub entangled: bool,
    pub moves: u32,
}

impl<'a> PuzzleView<'a> {
    pub fn new(state: &PuzzleState, level: &'a Level, level_index: usize) -> Self {
        Self {
            stage: state.stage,
            level_index,
            level_name: level.name(),
            grid: level.grid(),
            red_pos: state.red_pos,
            blue_pos: state.blue_pos,
            red_goal: level.red_goal(),
            blue_goal: level.blue_goal(),
            red_phased: state.red_phased,
            blue_phased: state.blue_phased,
            entangled: state.entangled,
            moves: state.moves,
        }
    }

    /// Heads-up display text: level name, move count, entanglement.
    pub fn status_lines(&self) -> [String; 3] {
        [
            self.level_name.into(),
            format!("Moves: {}", self.moves),
            format!("Entangled: {}", if self.entangled { "ON" } else { "OFF" }),
        ]
    }

    pub fn particle_at(&self, coords: Coord2) -> Option<Particle> {
        if coords == self.red_pos {
            Some(Particle::Red)
        } else if coords == self.blue_pos {
            Some(Particle::Blue)
        } else {
            None
        }
    }
}

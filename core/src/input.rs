use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::*;

/// Physical keys the puzzle reacts to, named by their DOM `KeyboardEvent.code`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    E,
    W,
    A,
    S,
    D,
}

impl Key {
    pub const ALL: [Key; 6] = [Self::Space, Self::E, Self::W, Self::A, Self::S, Self::D];

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.code() == code)
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Space => "Space",
            Self::E => "KeyE",
            Self::W => "KeyW",
            Self::A => "KeyA",
            Self::S => "KeyS",
            Self::D => "KeyD",
        }
    }

    /// Game keys must not scroll the page.
    pub fn should_prevent_default(code: &str) -> bool {
        Self::from_code(code).is_some()
    }

    pub const fn command(self, stage: Stage) -> Option<Command> {
        use Direction::*;

        match (stage, self) {
            (Stage::Menu, Self::Space) => Some(Command::Start),
            (Stage::Complete, Self::Space) => Some(Command::Continue),
            (Stage::Playing, Self::E) => Some(Command::ToggleEntanglement),
            (Stage::Playing, Self::W) => Some(Command::Step(Up)),
            (Stage::Playing, Self::S) => Some(Command::Step(Down)),
            (Stage::Playing, Self::A) => Some(Command::Step(Left)),
            (Stage::Playing, Self::D) => Some(Command::Step(Right)),
            _ => None,
        }
    }
}

/// Turns raw key-down/key-up events into at most one command per press.
///
/// Auto-repeated key-downs carry the same code as the last processed one and are
/// dropped until that key is released. Any key counts, game key or not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    last_code: Option<String>,
}

impl KeyInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_code(&self) -> Option<&str> {
        self.last_code.as_deref()
    }

    pub fn key_down(&mut self, code: &str, stage: Stage) -> Option<Command> {
        if self.last_code() == Some(code) {
            return None;
        }
        self.last_code = Some(code.into());
        Key::from_code(code)?.command(stage)
    }

    pub fn key_up(&mut self, code: &str) {
        if self.last_code() == Some(code) {
            self.last_code = None;
        }
    }

    /// Feeds a key-down straight into `engine`.
    pub fn dispatch_key_down(&mut self, code: &str, engine: &mut PuzzleEngine) -> CommandOutcome {
        match self.key_down(code, engine.stage()) {
            Some(command) => engine.apply(command),
            None => CommandOutcome::Ignored,
        }
    }
}

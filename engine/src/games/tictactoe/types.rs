use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => ' ',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win(Mark),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    VsAi,
    VsPlayer,
}

impl GameMode {
    pub fn from_is_ai(is_ai: bool) -> Self {
        if is_ai { GameMode::VsAi } else { GameMode::VsPlayer }
    }

    pub fn is_ai(&self) -> bool {
        *self == GameMode::VsAi
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai" | "vs-ai" | "vsai" => Ok(GameMode::VsAi),
            "pvp" | "player" | "vs-player" | "vsplayer" => Ok(GameMode::VsPlayer),
            other => Err(format!("Unknown game mode '{}', expected 'ai' or 'pvp'", other)),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::VsAi => write!(f, "vs AI"),
            GameMode::VsPlayer => write!(f, "vs Player"),
        }
    }
}

/// Turn state machine of a single game.
///
/// Only `AwaitingHumanMove` accepts input. `AwaitingAiMove` is the transient
/// state between a human move and the AI reply in `GameMode::VsAi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    AwaitingHumanMove,
    AwaitingAiMove,
    Won(Mark),
    Draw,
}

impl TurnStatus {
    pub fn is_active(&self) -> bool {
        *self == TurnStatus::AwaitingHumanMove
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnStatus::Won(_) | TurnStatus::Draw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange(usize),
    CellOccupied(usize),
    SessionInactive,
    NotAiTurn,
    NoMovesLeft,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange(index) => write!(f, "Cell {} is out of range", index),
            MoveError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            MoveError::SessionInactive => write!(f, "Game is not accepting moves"),
            MoveError::NotAiTurn => write!(f, "It is not the AI's turn"),
            MoveError::NoMovesLeft => write!(f, "Board has no empty cells"),
        }
    }
}

impl std::error::Error for MoveError {}

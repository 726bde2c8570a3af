use super::types::{Mark, Outcome};

/// Counters that survive restarts. `player1` is the X side, `player2` the O
/// side (the AI in `GameMode::VsAi`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    pub player1: u32,
    pub player2: u32,
    pub draws: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Mark::X) => self.player1 += 1,
            Outcome::Win(Mark::O) => self.player2 += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Win(Mark::Empty) | Outcome::Ongoing => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn games_played(&self) -> u32 {
        self.player1 + self.player2 + self.draws
    }
}

use std::io::Write;

use tictactoe_engine::games::GameBroadcaster;
use tictactoe_engine::games::tictactoe::{GameOverNotification, GameStateUpdate};

use crate::render::{game_over_banner, render_update};

const BELL: &str = "\x07";

/// Draws every published state to stdout.
#[derive(Clone)]
pub struct TerminalBroadcaster {
    sound: bool,
}

impl TerminalBroadcaster {
    pub fn new(sound: bool) -> Self {
        Self { sound }
    }

    fn print(&self, text: &str, cue: bool) {
        let mut stdout = std::io::stdout().lock();
        let bell = if cue && self.sound { BELL } else { "" };
        let _ = writeln!(stdout, "\n{}{}", bell, text);
        let _ = stdout.flush();
    }
}

impl GameBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, state: GameStateUpdate) {
        self.print(&render_update(&state), state.last_move.is_some());
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        self.print(&game_over_banner(&notification), true);
    }
}

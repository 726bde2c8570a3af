use tictactoe_engine::games::tictactoe::{CELL_COUNT, GameMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Zero-based cell index.
    Place(usize),
    Restart,
    ResetScores,
    SetMode(GameMode),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9              place your mark (cells numbered left to right, top to bottom)
  restart, r       start a new game, keeping scores
  reset            reset the scoreboard
  mode ai|pvp      switch between playing the AI and another player
  help, h          show this help
  quit, q          leave";

pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let line = line.trim().to_ascii_lowercase();
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty command".to_string());
    };

    let command = match head {
        "restart" | "r" => ClientCommand::Restart,
        "reset" | "reset-scores" => ClientCommand::ResetScores,
        "help" | "h" | "?" => ClientCommand::Help,
        "quit" | "q" | "exit" => ClientCommand::Quit,
        "mode" => {
            let Some(mode) = parts.next() else {
                return Err("Usage: mode ai|pvp".to_string());
            };
            ClientCommand::SetMode(mode.parse()?)
        }
        cell => {
            let number: usize = cell
                .parse()
                .map_err(|_| format!("Unknown command '{}'", cell))?;
            if number == 0 || number > CELL_COUNT {
                return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
            }
            ClientCommand::Place(number - 1)
        }
    };

    if parts.next().is_some() {
        return Err(format!("Unexpected arguments after '{}'", head));
    }

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_numbers_are_one_based() {
        assert_eq!(parse_command("1"), Ok(ClientCommand::Place(0)));
        assert_eq!(parse_command(" 9 \n"), Ok(ClientCommand::Place(8)));
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
    }

    #[test]
    fn test_named_commands() {
        assert_eq!(parse_command("restart"), Ok(ClientCommand::Restart));
        assert_eq!(parse_command("R"), Ok(ClientCommand::Restart));
        assert_eq!(parse_command("reset"), Ok(ClientCommand::ResetScores));
        assert_eq!(parse_command("q"), Ok(ClientCommand::Quit));
        assert_eq!(parse_command("help"), Ok(ClientCommand::Help));
    }

    #[test]
    fn test_mode_command() {
        assert_eq!(parse_command("mode pvp"), Ok(ClientCommand::SetMode(GameMode::VsPlayer)));
        assert_eq!(parse_command("MODE AI"), Ok(ClientCommand::SetMode(GameMode::VsAi)));
        assert!(parse_command("mode").is_err());
        assert!(parse_command("mode chess").is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_command("").is_err());
        assert!(parse_command("   ").is_err());
        assert!(parse_command("hello").is_err());
        assert!(parse_command("restart now").is_err());
    }
}

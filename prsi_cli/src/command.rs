use prsi::{Card, IllegalMove, SupplyExhausted};

/// A line typed at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ListCards,
    PlayCard(Card),
    TakeCard,
    StandRound,
    CardInfo,
    Help,
    Exit,
}

/// Why a command did nothing.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    IllegalMove(IllegalMove),
    BadArgument(String),
    UnknownCommand(String),
    /// Not recoverable: the game cannot go on.
    SupplyExhausted(SupplyExhausted),
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::IllegalMove(err) => Some(err),
            CommandError::SupplyExhausted(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::IllegalMove(err) => write!(f, "{}", err),
            CommandError::BadArgument(msg) => write!(f, "{}", msg),
            CommandError::UnknownCommand(name) => write!(
                f,
                "Unknown command '{}', use 'help' for list of all available commands",
                name
            ),
            CommandError::SupplyExhausted(err) => write!(f, "{}", err),
        }
    }
}

impl From<IllegalMove> for CommandError {
    fn from(err: IllegalMove) -> Self {
        CommandError::IllegalMove(err)
    }
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let command = match name {
            "list_cards" | "lc" => Command::ListCards,
            "play_card" | "pc" => {
                let token = words.next().ok_or_else(|| {
                    CommandError::BadArgument(String::from("Which card? Usage: play_card <card>"))
                })?;
                let card = token.parse::<Card>().map_err(|err| {
                    CommandError::BadArgument(format!("Cannot read card '{}': {}", token, err))
                })?;
                Command::PlayCard(card)
            }
            "take_card" | "tc" => Command::TakeCard,
            "stand_round" | "sr" => Command::StandRound,
            "card_info" | "ci" => Command::CardInfo,
            "help" | "h" => Command::Help,
            "exit" => Command::Exit,
            _ => return Err(CommandError::UnknownCommand(String::from(name))),
        };
        if let Some(extra) = words.next() {
            return Err(CommandError::BadArgument(format!(
                "Unexpected argument '{}'",
                extra
            )));
        }
        Ok(command)
    }
}

pub const HELP: &str = "\
Available commands:
    - list_cards ... lists all cards the player has in his hand
    - play_card <card> ... plays the card if can be played, otherwise it says that it is unplayable
    - take_card ... takes a card from the card deck and adds it to player's hand
    - card_info ... describes all card colours and types
    - help ... shows all commands
    - stand_round ... stands a round (can be only played if you are playing into an ace card)
    - exit ... exits the program";

pub const CARD_INFO: &str = "\
Card colors: l, k, c, z
Card values:
    - a ... ace
    - 7
    - 8
    - 9
    - 10
    - k
    - m ... color changer
    - s";

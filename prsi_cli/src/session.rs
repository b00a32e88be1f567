use std::io::{BufRead, Write};

use prsi::{list_cards, visualize_table, Card, Color, DrawError, Game, GameOutcome, PlayerKind, Rank};
use prsi_ai::{computer_take_turn, Difficulty, TurnOutcome};
use tracing::{debug, info};

use crate::command::{Command, CommandError, CARD_INFO, HELP};
use crate::recording::{RecordedAction, Recorder};
use crate::Config;

/// What a command did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    /// Nothing changed, prompt again.
    Continue,
    /// The human's turn is over.
    TurnTaken,
    Exit,
}

/// An interactive game on a text console.
pub struct Session<R, W> {
    game: Game,
    difficulty: Difficulty,
    recorder: Option<Recorder>,
    input: R,
    output: W,
    // A re-usable buffer for input lines.
    buf: String,
}

/// Asks for the difficulty until a valid one is given.
pub fn select_difficulty<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> anyhow::Result<Difficulty> {
    let mut buf = String::new();
    loop {
        write!(output, "Select difficulty (Easy / Hard): ")?;
        output.flush()?;
        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            anyhow::bail!("Input ended before a difficulty was selected");
        }
        match buf.trim().parse() {
            Ok(difficulty) => {
                writeln!(output)?;
                return Ok(difficulty);
            }
            Err(_) => writeln!(output, "Incorrect input.\n")?,
        }
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, config: Config, input: R, output: W) -> Self {
        Self {
            game,
            difficulty: config.difficulty,
            recorder: config.recorder,
            input,
            output,
            buf: String::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until someone wins, the human exits or the input ends.
    pub fn run(&mut self) -> anyhow::Result<Option<GameOutcome>> {
        writeln!(self.output, "\n              Prsi Card Game\n")?;
        let outcome = self.play();
        if let Some(recorder) = &mut self.recorder {
            recorder.write_game_recording(self.game.outcome())?;
        }
        outcome
    }

    fn play(&mut self) -> anyhow::Result<Option<GameOutcome>> {
        loop {
            writeln!(self.output, "{}", visualize_table(&self.game))?;
            let Some(line) = self.prompt("-> ")? else {
                return Ok(None);
            };
            if line.is_empty() {
                continue;
            }
            // Console I/O faults end the session, rejected commands only re-prompt
            let result = match line.parse::<Command>() {
                Ok(command) => self.execute(command)?,
                Err(err) => Err(err),
            };
            match result {
                Ok(Action::Continue) => {}
                Ok(Action::Exit) => return Ok(None),
                Ok(Action::TurnTaken) => {
                    if let Some(outcome) = self.announce_outcome()? {
                        return Ok(Some(outcome));
                    }
                    self.computer_turn()?;
                    if let Some(outcome) = self.announce_outcome()? {
                        return Ok(Some(outcome));
                    }
                }
                Err(CommandError::SupplyExhausted(err)) => return Err(err.into()),
                Err(err) => {
                    debug!(%line, ?err, "Command rejected");
                    writeln!(self.output, "{}", err)?;
                }
            }
            writeln!(self.output)?;
        }
    }

    /// Runs one command. The outer error is a console fault, the inner one a rejected command.
    fn execute(&mut self, command: Command) -> anyhow::Result<Result<Action, CommandError>> {
        let action = match command {
            Command::ListCards => {
                let hand = self.game.player(PlayerKind::Human).hand();
                writeln!(self.output, "{}", list_cards(hand))?;
                Action::Continue
            }
            Command::PlayCard(card) => {
                let color = match self.color_for(card)? {
                    Ok(color) => color,
                    Err(err) => return Ok(Err(err)),
                };
                if let Err(err) = self.game.play_card(PlayerKind::Human, card, color) {
                    return Ok(Err(err.into()));
                }
                self.record(PlayerKind::Human, RecordedAction::Played { card, color });
                Action::TurnTaken
            }
            Command::TakeCard => {
                let count = match self.game.take_card(PlayerKind::Human) {
                    Ok(count) => count,
                    Err(DrawError::Illegal(err)) => return Ok(Err(err.into())),
                    Err(DrawError::SupplyExhausted(err)) => {
                        return Ok(Err(CommandError::SupplyExhausted(err)))
                    }
                };
                self.record(PlayerKind::Human, RecordedAction::Drew { count });
                Action::TurnTaken
            }
            Command::StandRound => {
                if let Err(err) = self.game.stand_round(PlayerKind::Human) {
                    return Ok(Err(err.into()));
                }
                self.record(PlayerKind::Human, RecordedAction::Stood);
                Action::TurnTaken
            }
            Command::CardInfo => {
                writeln!(self.output, "{}", CARD_INFO)?;
                Action::Continue
            }
            Command::Help => {
                writeln!(self.output, "{}", HELP)?;
                Action::Continue
            }
            Command::Exit => Action::Exit,
        };
        Ok(Ok(action))
    }

    /// Asks which color to switch to, if `card` is a color changer that can be played right now.
    ///
    /// Running out of input while asking rejects the command.
    fn color_for(&mut self, card: Card) -> anyhow::Result<Result<Option<Color>, CommandError>> {
        let human = self.game.player(PlayerKind::Human);
        if card.rank != Rank::Changer || !human.has_card(card) || !self.game.is_card_playable(card) {
            return Ok(Ok(None));
        }
        loop {
            let Some(line) = self.prompt("Select the color you want to switch to: ")? else {
                return Ok(Err(CommandError::BadArgument(String::from(
                    "No color was selected",
                ))));
            };
            match line.parse::<Color>() {
                Ok(color) => return Ok(Ok(Some(color))),
                Err(_) => writeln!(self.output, "Incorrect color, try again.")?,
            }
        }
    }

    fn computer_turn(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Robot turn:")?;
        let outcome = computer_take_turn(&mut self.game, self.difficulty)?;
        match outcome {
            TurnOutcome::Played {
                card,
                color: Some(color),
            } => writeln!(self.output, "Computer plays {} and changes color to {}", card, color)?,
            TurnOutcome::Played { card, color: None } => {
                writeln!(self.output, "Computer plays {}", card)?
            }
            TurnOutcome::Drew { count: 1 } => writeln!(self.output, "Computer takes a card.")?,
            TurnOutcome::Drew { count } => writeln!(self.output, "Computer takes {} cards.", count)?,
            TurnOutcome::Stood => writeln!(self.output, "Computer stands a round")?,
        }
        self.record(PlayerKind::Computer, outcome.into());
        Ok(())
    }

    fn announce_outcome(&mut self) -> anyhow::Result<Option<GameOutcome>> {
        let outcome = self.game.outcome();
        match outcome {
            Some(GameOutcome::Victory) => writeln!(self.output, "Victory")?,
            Some(GameOutcome::Defeat) => writeln!(self.output, "Defeat")?,
            None => return Ok(None),
        }
        info!(?outcome, "Game finished");
        Ok(outcome)
    }

    /// Reads one trimmed line, or `None` at the end of the input.
    fn prompt(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from(self.buf.trim())))
    }

    fn record(&mut self, player: PlayerKind, action: RecordedAction) {
        if let Some(recorder) = &mut self.recorder {
            recorder.record(player, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io::{ErrorKind, Read};

    use prsi::{all_cards, card, Effect};

    use super::*;

    /// Plays a scripted session on the unshuffled pack.
    ///
    /// The human holds la, l7, l10, lk; the computer l8, l9, lm, ls; ka is on top.
    fn run_script(script: &str, difficulty: Difficulty) -> (Session<&[u8], Vec<u8>>, String) {
        let game = Game::new(Vec::from(all_cards()));
        let config = Config {
            difficulty,
            recorder: None,
        };
        let mut session = Session::new(game, config, script.as_bytes(), Vec::new());
        session.run().unwrap();
        let output = String::from_utf8(session.output.clone()).unwrap();
        (session, output)
    }

    #[test]
    fn informational_commands() {
        let (session, output) = run_script("help\nci\nlc\n\nexit\n", Difficulty::Hard);
        assert!(output.contains("Available commands:"));
        assert!(output.contains("m ... color changer"));
        assert!(output.contains("Available cards: la, l7, l10, lk"));
        assert!(output.contains("Last played card:\tka"));
        assert_eq!(session.game().player(PlayerKind::Human).hand_size(), 4);
    }

    #[test]
    fn rejected_commands_are_reported() {
        let (session, output) = run_script("dance\npc zz\npc c7\nsr\nexit\n", Difficulty::Hard);
        assert!(output.contains("Unknown command 'dance'"));
        assert!(output.contains("Cannot read card 'zz'"));
        assert!(output.contains("Tried to play c7, which is not in the player's hand"));
        assert!(output.contains("Standing a round is only allowed against an active ace"));
        assert!(!output.contains("Robot turn:"));
        assert_eq!(session.game().to_move(), PlayerKind::Human);
    }

    #[test]
    fn human_ace_makes_the_computer_stand() {
        let (session, output) = run_script("pc la\n", Difficulty::Hard);
        assert!(output.contains("Robot turn:\nComputer stands a round"));
        assert_eq!(session.game().effects().active, None::<Effect>);
        assert_eq!(session.game().player(PlayerKind::Human).hand_size(), 3);
        assert_eq!(session.game().player(PlayerKind::Computer).hand_size(), 4);
    }

    #[test]
    fn human_draws_and_the_computer_answers() {
        let (session, output) = run_script("pc la\ntc\n", Difficulty::Hard);
        assert!(output.contains("Computer stands a round"));
        assert_eq!(session.game().player(PlayerKind::Human).hand_size(), 4);
        assert_eq!(session.game().player(PlayerKind::Computer).hand_size(), 3);
        assert_eq!(output.matches("Robot turn:").count(), 2);
    }

    #[test]
    fn difficulty_prompt_retries() {
        let mut input: &[u8] = b"medium\nh\n";
        let mut output = Vec::new();
        let difficulty = select_difficulty(&mut input, &mut output).unwrap();
        assert_eq!(difficulty, Difficulty::Hard);
        assert!(String::from_utf8(output).unwrap().contains("Incorrect input."));

        let mut input: &[u8] = b"";
        assert!(select_difficulty(&mut input, &mut Vec::new()).is_err());
    }

    /// The human holds lm, c8, c9, c10; the computer k7, z8, z9, zk; ls is on top.
    fn changer_session<R: BufRead>(input: R) -> Session<R, Vec<u8>> {
        let mut supply = vec![
            card!("lm"), card!("c8"), card!("k7"), card!("z8"), card!("c9"), card!("c10"),
            card!("z9"), card!("zk"), card!("ls"),
        ];
        let dealt = supply.iter().copied().collect::<prsi::CardsSet>();
        supply.extend(all_cards().into_iter().filter(|card| !dealt.contains(*card)));
        let config = Config {
            difficulty: Difficulty::Hard,
            recorder: None,
        };
        Session::new(Game::new(supply), config, input, Vec::new())
    }

    /// Input that fails on one particular read.
    struct BrokenInput {
        lines: VecDeque<&'static str>,
        num_reads: usize,
        fail_on_read: usize,
    }

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Ok(0)
        }
    }

    impl BufRead for BrokenInput {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Ok(&[])
        }

        fn consume(&mut self, _amt: usize) {}

        fn read_line(&mut self, buf: &mut String) -> std::io::Result<usize> {
            self.num_reads += 1;
            if self.num_reads == self.fail_on_read {
                return Err(std::io::Error::new(ErrorKind::BrokenPipe, "stdin went away"));
            }
            match self.lines.pop_front() {
                Some(line) => {
                    buf.push_str(line);
                    buf.push('\n');
                    Ok(line.len() + 1)
                }
                None => Ok(0),
            }
        }
    }

    #[test]
    fn human_picks_a_color() {
        let mut session = changer_session(&b"pc lm\nq\nz\n"[..]);
        assert_eq!(session.run().unwrap(), None);
        let output = String::from_utf8(session.output.clone()).unwrap();

        assert!(output.contains("Select the color you want to switch to: "));
        assert!(output.contains("Incorrect color, try again."));
        assert!(output.contains("Computer plays z"));
        assert_eq!(session.game().player(PlayerKind::Human).hand_size(), 3);
        assert_eq!(session.game().player(PlayerKind::Computer).hand_size(), 3);
    }

    #[test]
    fn input_ending_at_the_color_prompt_rejects_the_play() {
        let mut session = changer_session(&b"pc lm\n"[..]);
        assert_eq!(session.run().unwrap(), None);
        let output = String::from_utf8(session.output.clone()).unwrap();

        assert!(output.contains("No color was selected"));
        assert!(session.game().player(PlayerKind::Human).has_card(card!("lm")));
        assert_eq!(session.game().to_move(), PlayerKind::Human);
    }

    #[test]
    fn read_failure_at_the_color_prompt_ends_the_session() {
        let input = BrokenInput {
            lines: VecDeque::from(["pc lm", "exit"]),
            num_reads: 0,
            fail_on_read: 2,
        };
        let mut session = changer_session(input);
        let err = session.run().unwrap_err();
        assert_eq!(
            err.downcast_ref::<std::io::Error>().map(std::io::Error::kind),
            Some(ErrorKind::BrokenPipe)
        );
        let output = String::from_utf8(session.output.clone()).unwrap();
        assert!(!output.contains("No color was selected"));
        assert!(session.game().player(PlayerKind::Human).has_card(card!("lm")));
    }

    #[test]
    fn no_prompt_for_cards_that_cannot_be_played() {
        let game = Game::new(Vec::from(all_cards()));
        let config = Config {
            difficulty: Difficulty::Hard,
            recorder: None,
        };
        let mut session = Session::new(game, config, &b""[..], Vec::new());
        // Not a changer, and a changer the human does not hold
        assert_eq!(session.color_for(card!("l7")).unwrap(), Ok(None));
        assert_eq!(session.color_for(card!("km")).unwrap(), Ok(None));
        assert!(session.output.is_empty());
    }
}

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use prsi::{Card, Color, GameOutcome, PlayerKind};
use prsi_ai::TurnOutcome;
use serde::{Deserialize, Serialize};

/// Collects the turns of a game and writes them out as JSON when it ends.
pub struct Recorder {
    path: PathBuf,
    recording: GameRecording,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecording {
    pub seed: u64,
    pub turns: Vec<RecordedTurn>,
    pub outcome: Option<GameOutcome>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedTurn {
    pub player: PlayerKind,
    #[serde(flatten)]
    pub action: RecordedAction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RecordedAction {
    Played {
        card: Card,
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde(default)]
        color: Option<Color>,
    },
    Drew {
        count: usize,
    },
    Stood,
}

impl From<TurnOutcome> for RecordedAction {
    fn from(outcome: TurnOutcome) -> Self {
        match outcome {
            TurnOutcome::Played { card, color } => RecordedAction::Played { card, color },
            TurnOutcome::Drew { count } => RecordedAction::Drew { count },
            TurnOutcome::Stood => RecordedAction::Stood,
        }
    }
}

impl Recorder {
    pub fn new(path: PathBuf, seed: u64) -> anyhow::Result<Self> {
        let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());
        if let Some(dir) = parent {
            if !dir.is_dir() {
                anyhow::bail!("Directory '{}' does not exist", dir.display());
            }
        }
        Ok(Self {
            path,
            recording: GameRecording {
                seed,
                turns: Vec::new(),
                outcome: None,
            },
        })
    }

    pub fn record(&mut self, player: PlayerKind, action: RecordedAction) {
        self.recording.turns.push(RecordedTurn { player, action });
    }

    pub fn write_game_recording(&mut self, outcome: Option<GameOutcome>) -> anyhow::Result<()> {
        self.recording.outcome = outcome;
        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, &self.recording)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use prsi::card;

    use super::*;

    #[test]
    fn turns_serialize_flat() {
        let turn = RecordedTurn {
            player: PlayerKind::Computer,
            action: RecordedAction::Played {
                card: card!("zm"),
                color: Some(Color::Hearts),
            },
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "player": "computer",
                "action": "played",
                "card": {"color": "z", "rank": "m"},
                "color": "c",
            })
        );

        let turn = RecordedTurn {
            player: PlayerKind::Human,
            action: RecordedAction::Drew { count: 4 },
        };
        let json = serde_json::to_string(&turn).unwrap();
        assert_eq!(json, r#"{"player":"human","action":"drew","count":4}"#);
        let back: RecordedTurn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, turn);
    }

    #[test]
    fn missing_directory_is_rejected() {
        let path = PathBuf::from("/this/directory/does/not/exist/game.json");
        assert!(Recorder::new(path, 7).is_err());
    }

    #[test]
    fn writes_a_json_file() {
        let path = std::env::temp_dir().join(format!("prsi_recording_{}.json", std::process::id()));
        let mut recorder = Recorder::new(path.clone(), 42).unwrap();
        recorder.record(PlayerKind::Human, RecordedAction::Stood);
        recorder
            .write_game_recording(Some(GameOutcome::Defeat))
            .unwrap();
        let written: GameRecording =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written.seed, 42);
        assert_eq!(written.outcome, Some(GameOutcome::Defeat));
        assert_eq!(written.turns.len(), 1);
    }
}

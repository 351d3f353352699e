//! Game transcript as JSON lines.
//!
//! Every line carries `timestamp`, `type`, the `player` when the event has
//! one, and `game`: a counter that starts at 1 with the first
//! `game_started` written by this logger, so lines of one game can be
//! grouped. Event fields are flattened next to them.
//!
//! ```text
//! {"timestamp":"2024-05-01T09:00:00.000Z","type":"game_started","player":"ada","game":1,"questions":7}
//! {"timestamp":"2024-05-01T09:00:04.120Z","type":"answer_graded","player":"ada","game":1,"delta":2,...}
//! ```

use quiz_application::{GameEvent, GameEventKind, GameLogger};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

#[derive(Serialize)]
struct TranscriptLine<'a> {
    timestamp: String,
    #[serde(rename = "type")]
    kind: GameEventKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    player: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    game: Option<u64>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

struct Transcript {
    writer: BufWriter<File>,
    games: u64,
}

/// [`GameLogger`] appending one JSON object per event to a file
pub struct JsonlGameLogger {
    transcript: Mutex<Transcript>,
    path: PathBuf,
}

impl JsonlGameLogger {
    /// Open `path` for appending, creating it and its parent directories.
    ///
    /// Returns `None` (after a warning) when the file cannot be opened; the
    /// game then runs without a transcript.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create game log directory {}: {}", parent.display(), e);
            return None;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .inspect_err(|e| warn!("Could not open game log file {}: {}", path.display(), e))
            .ok()?;

        Some(Self {
            transcript: Mutex::new(Transcript {
                writer: BufWriter::new(file),
                games: 0,
            }),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn fields(payload: Value) -> Map<String, Value> {
        match payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => Map::from_iter([("data".to_string(), other)]),
        }
    }
}

impl GameLogger for JsonlGameLogger {
    fn log(&self, event: GameEvent) {
        let Ok(mut transcript) = self.transcript.lock() else {
            return;
        };

        if event.kind == GameEventKind::GameStarted {
            transcript.games += 1;
        }
        let game = match event.kind {
            GameEventKind::ScoresCleared => None,
            _ if transcript.games == 0 => None,
            _ => Some(transcript.games),
        };

        let line = TranscriptLine {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            kind: event.kind,
            player: event.player.as_deref(),
            game,
            fields: Self::fields(event.payload),
        };

        match serde_json::to_string(&line) {
            Ok(json) => {
                let _ = writeln!(transcript.writer, "{}", json);
                // Flush per event so a killed terminal keeps the transcript
                let _ = transcript.writer.flush();
            }
            Err(e) => warn!("Could not serialize {} event: {}", event.kind, e),
        }
    }
}

impl Drop for JsonlGameLogger {
    fn drop(&mut self) {
        if let Ok(mut transcript) = self.transcript.lock() {
            let _ = transcript.writer.flush();
        }
    }
}

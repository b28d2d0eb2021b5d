//! JSON puzzle files.
//!
//! A puzzle file looks like this (`fill` is optional; absent means every letter
//! cell is blank):
//!
//! ```json
//! {
//!   "title": "Sample",
//!   "author": "Anonymous",
//!   "width": 3,
//!   "height": 3,
//!   "solution": "CATA.RBEE",
//!   "fill": "C---.----",
//!   "clues": {
//!     "across": [{ "number": 1, "text": "Feline" }],
//!     "down": [{ "number": 1, "text": "Taxi" }]
//!   }
//! }
//! ```
//!
//! Saving writes the same document back with `fill` replaced.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use cursewords_core::{Clue, Clues, PuzzleData, PuzzleError, puzzle::blank_fill};
use cursewords_game::Game;
use serde::{Deserialize, Serialize};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PuzzleFileError {
    #[display("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("invalid puzzle in {}: {source}", path.display())]
    Invalid { path: PathBuf, source: PuzzleError },
    #[display("failed to encode puzzle for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PuzzleFileDto {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    width: u8,
    height: u8,
    solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fill: Option<String>,
    #[serde(default)]
    clues: CluesDto,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct CluesDto {
    #[serde(default)]
    across: Vec<ClueDto>,
    #[serde(default)]
    down: Vec<ClueDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ClueDto {
    number: u16,
    text: String,
}

impl From<PuzzleFileDto> for PuzzleData {
    fn from(dto: PuzzleFileDto) -> Self {
        let fill = dto.fill.unwrap_or_else(|| blank_fill(&dto.solution));
        Self {
            title: dto.title,
            author: dto.author,
            width: dto.width,
            height: dto.height,
            solution: dto.solution,
            fill,
            clues: Clues {
                across: dto.clues.across.into_iter().map(Clue::from).collect(),
                down: dto.clues.down.into_iter().map(Clue::from).collect(),
            },
        }
    }
}

impl From<&PuzzleData> for PuzzleFileDto {
    fn from(data: &PuzzleData) -> Self {
        Self {
            title: data.title.clone(),
            author: data.author.clone(),
            width: data.width,
            height: data.height,
            solution: data.solution.clone(),
            fill: Some(data.fill.clone()),
            clues: CluesDto {
                across: data.clues.across.iter().map(ClueDto::from).collect(),
                down: data.clues.down.iter().map(ClueDto::from).collect(),
            },
        }
    }
}

impl From<ClueDto> for Clue {
    fn from(dto: ClueDto) -> Self {
        Clue::new(dto.number, dto.text)
    }
}

impl From<&Clue> for ClueDto {
    fn from(clue: &Clue) -> Self {
        Self {
            number: clue.number,
            text: clue.text.clone(),
        }
    }
}

/// Parses a puzzle document.
pub fn parse(path: &Path, json: &str) -> Result<PuzzleData, PuzzleFileError> {
    let dto: PuzzleFileDto =
        serde_json::from_str(json).map_err(|source| PuzzleFileError::Parse {
            path: path.to_owned(),
            source,
        })?;
    Ok(dto.into())
}

/// Renders puzzle data as a pretty-printed document.
pub fn render(path: &Path, data: &PuzzleData) -> Result<String, PuzzleFileError> {
    let mut json = serde_json::to_string_pretty(&PuzzleFileDto::from(data)).map_err(|source| {
        PuzzleFileError::Serialize {
            path: path.to_owned(),
            source,
        }
    })?;
    json.push('\n');
    Ok(json)
}

/// Reads and parses the puzzle file at `path`.
pub fn load(path: &Path) -> Result<PuzzleData, PuzzleFileError> {
    let json = fs::read_to_string(path).map_err(|source| PuzzleFileError::Read {
        path: path.to_owned(),
        source,
    })?;
    parse(path, &json)
}

/// Loads the puzzle file at `path` and starts a game on it.
pub fn open(path: &Path) -> Result<Game, PuzzleFileError> {
    let data = load(path)?;
    let game = Game::new(data).map_err(|source| PuzzleFileError::Invalid {
        path: path.to_owned(),
        source,
    })?;
    log::info!(
        "loaded {} ({}x{}) from {}",
        game.title(),
        game.grid().width(),
        game.grid().height(),
        path.display()
    );
    Ok(game)
}

/// Writes `data` to `path`, replacing any existing file.
pub fn save(path: &Path, data: &PuzzleData) -> Result<(), PuzzleFileError> {
    let json = render(path, data)?;
    fs::write(path, json).map_err(|source| PuzzleFileError::Write {
        path: path.to_owned(),
        source,
    })?;
    log::info!("saved puzzle to {}", path.display());
    Ok(())
}

use std::io;

use crate::puzzle_file::PuzzleFileError;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    #[display("{_0}")]
    PuzzleFile(PuzzleFileError),
    #[display("terminal error: {_0}")]
    Terminal(io::Error),
}

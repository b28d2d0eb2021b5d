//! Cursewords: solve crossword puzzles in the terminal.
//!
//! Logging goes to stderr and is off unless `RUST_LOG` is set; redirect stderr to a
//! file when enabling it so log lines do not draw over the grid.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use cursewords_app::{
    app, error::AppError, puzzle_file, session::Session, settings::Settings, version,
};

#[derive(Debug, Parser)]
#[command(version = version::build_version(), about)]
struct Args {
    /// Puzzle file (JSON) to solve.
    puzzle: PathBuf,
    /// Save progress here instead of overwriting the puzzle file.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// How long status messages stay visible, in milliseconds.
    #[arg(long, value_name = "MS")]
    notification_ms: Option<u64>,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::info!("starting cursewords {}", version::build_version());

    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> Result<(), AppError> {
    let settings = Settings::default()
        .with_notification_ms(args.notification_ms)
        .with_output(args.output);
    let game = puzzle_file::open(&args.puzzle)?;
    let mut session = Session::new(game, args.puzzle, settings);
    app::run(&mut session)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "cursewords",
            "puzzle.json",
            "--output",
            "out.json",
            "--notification-ms",
            "500",
        ])
        .unwrap();
        assert_eq!(args.puzzle, PathBuf::from("puzzle.json"));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.notification_ms, Some(500));

        assert!(Args::try_parse_from(["cursewords"]).is_err());
    }
}

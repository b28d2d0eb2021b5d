//! Terminal rendering.
//!
//! Each cell is drawn as a 3-column box. Clue numbers appear as subscript digits
//! on the border above the cell. The current word is underlined, the cursor cell
//! is shown in reverse video and entries flagged by a check are red.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, PrintStyledContent, Stylize as _},
    terminal::{Clear, ClearType},
};
use cursewords_core::{Grid, Position};

use crate::{notification::NotificationKind, session::Session};

const GRID_X: u16 = 2;
const GRID_Y: u16 = 2;
const CELL_WIDTH: u16 = 4;
const CELL_HEIGHT: u16 = 2;
const BLOCK: &str = "▓▓▓";
const HELP: &str = "Tab next word · Ctrl-C/W/E check · Ctrl-G go to · Ctrl-S save · Esc quit";

pub fn render<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let game = session.game();
    let grid = game.grid();

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    let heading = if game.author().is_empty() {
        game.title().to_owned()
    } else {
        format!("{} by {}", game.title(), game.author())
    };
    queue!(out, PrintStyledContent(heading.bold()))?;

    draw_borders(out, grid)?;
    draw_cells(out, session)?;

    let below = GRID_Y + u16::from(grid.height()) * CELL_HEIGHT + 2;
    queue!(out, MoveTo(GRID_X, below))?;
    if let Some(clue) = game.current_clue() {
        queue!(out, Print(clue))?;
    }

    queue!(out, MoveTo(GRID_X, below + 1))?;
    if let Some(digits) = session.prompt() {
        queue!(out, Print(format!("Go to number: {digits}_")))?;
    } else if let Some(notification) = session.status().current() {
        let color = match notification.kind {
            NotificationKind::Info => Color::Reset,
            NotificationKind::Success => Color::Green,
            NotificationKind::Failure => Color::Red,
        };
        queue!(
            out,
            PrintStyledContent(notification.text.as_str().with(color))
        )?;
    }

    queue!(
        out,
        MoveTo(GRID_X, below + 3),
        PrintStyledContent(HELP.dark_grey())
    )?;
    Ok(())
}

fn draw_borders<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    let width = grid.width();
    let height = u16::from(grid.height());

    queue!(
        out,
        MoveTo(GRID_X, GRID_Y),
        Print(border_row(width, '┌', '─', '┬', '┐'))
    )?;
    for row in 0..height {
        let y = GRID_Y + row * CELL_HEIGHT;
        queue!(
            out,
            MoveTo(GRID_X, y + 1),
            Print(border_row(width, '│', ' ', '│', '│'))
        )?;
        let divider = if row + 1 == height {
            border_row(width, '└', '─', '┴', '┘')
        } else {
            border_row(width, '├', '─', '┼', '┤')
        };
        queue!(out, MoveTo(GRID_X, y + 2), Print(divider))?;
    }
    Ok(())
}

fn draw_cells<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let game = session.game();
    let cursor = game.cursor().position();
    let word = game.current_word();

    for (pos, cell) in game.grid().cells() {
        let (x, y) = cell_origin(pos);
        if cell.is_block() {
            queue!(out, MoveTo(x - 1, y), Print(BLOCK))?;
            continue;
        }

        if let Some(number) = cell.number() {
            queue!(out, MoveTo(x - 1, y - 1), Print(subscript(number)))?;
        }

        let mut entry = cell.entry().unwrap_or(' ').to_string().stylize();
        if cell.is_marked_wrong() {
            entry = entry.red();
        }
        if word.contains(&pos) {
            entry = entry.underlined();
        }
        if pos == cursor {
            entry = entry.reverse();
        }
        queue!(out, MoveTo(x, y), PrintStyledContent(entry))?;
    }
    Ok(())
}

/// Terminal column and row of the entry character of the cell at `pos`.
fn cell_origin(pos: Position) -> (u16, u16) {
    (
        GRID_X + CELL_WIDTH * u16::from(pos.x()) + 2,
        GRID_Y + CELL_HEIGHT * u16::from(pos.y()) + 1,
    )
}

fn border_row(width: u8, left: char, fill: char, junction: char, right: char) -> String {
    let mut row = String::new();
    row.push(left);
    for x in 0..width {
        if x > 0 {
            row.push(junction);
        }
        row.extend([fill; 3]);
    }
    row.push(right);
    row
}

fn subscript(number: u16) -> String {
    number
        .to_string()
        .chars()
        .map(|digit| match digit {
            '0' => '₀',
            '1' => '₁',
            '2' => '₂',
            '3' => '₃',
            '4' => '₄',
            '5' => '₅',
            '6' => '₆',
            '7' => '₇',
            '8' => '₈',
            _ => '₉',
        })
        .collect()
}

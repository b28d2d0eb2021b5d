use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use cursewords_core::Direction;
use cursewords_game::{CheckScope, Motion};

use crate::action::{Action, EditAction, GoToAction, SessionAction};

struct Trigger {
    code: KeyCode,
    control: bool,
}

impl Trigger {
    const fn new(code: KeyCode, control: bool) -> Self {
        Self { code, control }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn new(trigger: Trigger, action: Action) -> Self {
        Self { trigger, action }
    }

    const fn control(ch: char, action: Action) -> Self {
        Self::new(Trigger::new(KeyCode::Char(ch), true), action)
    }

    const fn plain(code: KeyCode, action: Action) -> Self {
        Self::new(Trigger::new(code, false), action)
    }
}

const SHORTCUTS: [Shortcut; 13] = [
    Shortcut::control('c', Action::Check(CheckScope::Puzzle)),
    Shortcut::control('w', Action::Check(CheckScope::Word)),
    Shortcut::control('e', Action::Check(CheckScope::Square)),
    Shortcut::control('g', Action::GoTo(GoToAction::Open)),
    Shortcut::control('s', Action::Session(SessionAction::Save)),
    Shortcut::control('q', Action::Session(SessionAction::Quit)),
    Shortcut::plain(KeyCode::Esc, Action::Session(SessionAction::Quit)),
    Shortcut::plain(KeyCode::Delete, Action::Edit(EditAction::Delete)),
    Shortcut::plain(KeyCode::Backspace, Action::Edit(EditAction::Backspace)),
    Shortcut::plain(KeyCode::Tab, Action::Move(Motion::NextWord)),
    Shortcut::plain(KeyCode::BackTab, Action::Move(Motion::PreviousWord)),
    Shortcut::plain(KeyCode::Char(' '), Action::Move(Motion::SwitchDirection)),
    Shortcut::plain(KeyCode::Enter, Action::Move(Motion::SwitchDirection)),
];

/// Maps a key press on the grid to an action. Returns `None` for unbound keys.
///
/// Arrow keys depend on the cursor direction: arrows along it step through the
/// grid, arrows across it switch direction.
#[must_use]
pub fn grid_action(key: &KeyEvent, direction: Direction) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let control = key.modifiers.contains(KeyModifiers::CONTROL);

    for shortcut in &SHORTCUTS {
        if shortcut.trigger.code == key.code && shortcut.trigger.control == control {
            return Some(shortcut.action);
        }
    }

    match key.code {
        KeyCode::Char(ch) if !control && ch.is_ascii_alphanumeric() => {
            Some(EditAction::Type(ch).into())
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down if !control => {
            Some(arrow_motion(key.code, direction).into())
        }
        _ => None,
    }
}

fn arrow_motion(code: KeyCode, direction: Direction) -> Motion {
    match (direction, code) {
        (Direction::Across, KeyCode::Right) | (Direction::Down, KeyCode::Down) => Motion::Advance,
        (Direction::Across, KeyCode::Left) | (Direction::Down, KeyCode::Up) => Motion::Retreat,
        _ => Motion::SwitchDirection,
    }
}

/// Maps a key press while the go-to-number prompt is open.
#[must_use]
pub fn prompt_action(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let step = match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() => GoToAction::Push(ch),
        KeyCode::Backspace => GoToAction::Pop,
        KeyCode::Enter => GoToAction::Submit,
        KeyCode::Esc => GoToAction::Cancel,
        _ => return None,
    };
    Some(step.into())
}

use cursewords_game::{CheckScope, Motion};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::From)]
pub enum Action {
    Edit(EditAction),
    Move(Motion),
    Check(CheckScope),
    GoTo(GoToAction),
    Session(SessionAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Type(char),
    Delete,
    Backspace,
}

/// Steps of the go-to-number prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoToAction {
    Open,
    Push(char),
    Pop,
    Submit,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionAction {
    Save,
    Quit,
}

//! Interactive session state and action dispatch.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use crossterm::event::KeyEvent;
use cursewords_game::{CheckScope, Game};

use crate::{
    action::{Action, EditAction, GoToAction, SessionAction},
    input,
    notification::{NotificationKind, StatusLine},
    puzzle_file,
    settings::Settings,
};

/// Longest clue number the go-to prompt accepts, in digits.
const MAX_PROMPT_DIGITS: usize = 4;

#[derive(Debug)]
pub struct Session {
    game: Game,
    source: PathBuf,
    settings: Settings,
    status: StatusLine,
    prompt: Option<String>,
    quit: bool,
}

impl Session {
    #[must_use]
    pub fn new(game: Game, source: PathBuf, settings: Settings) -> Self {
        let status = StatusLine::new(settings.notification_duration);
        Self {
            game,
            source,
            settings,
            status,
            prompt: None,
            quit: false,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Digits typed into the go-to prompt, if it is open.
    #[must_use]
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    #[must_use]
    pub fn save_path(&self) -> &Path {
        self.settings.output.as_deref().unwrap_or(&self.source)
    }

    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) {
        let action = if self.prompt.is_some() {
            input::prompt_action(key)
        } else {
            input::grid_action(key, self.game.cursor().direction())
        };
        match action {
            Some(action) => self.dispatch(action, now),
            None => log::trace!("ignoring key {key:?}"),
        }
    }

    pub fn dispatch(&mut self, action: Action, now: Instant) {
        log::debug!("action: {action:?}");
        match action {
            Action::Edit(edit) => self.edit(edit, now),
            Action::Move(motion) => self.game.apply_motion(motion),
            Action::Check(scope) => self.check(scope, now),
            Action::GoTo(step) => self.go_to(step, now),
            Action::Session(SessionAction::Save) => self.save(now),
            Action::Session(SessionAction::Quit) => self.quit = true,
        }
    }

    /// Clears the status message once its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.status.expire(now)
    }

    fn edit(&mut self, edit: EditAction, now: Instant) {
        let was_complete = self.game.is_complete();
        match edit {
            EditAction::Type(ch) => {
                if let Err(err) = self.game.type_letter(ch) {
                    log::debug!("entry rejected: {err}");
                    return;
                }
            }
            EditAction::Delete => self.game.delete(),
            EditAction::Backspace => self.game.backspace(),
        }
        if !was_complete && self.game.is_complete() {
            log::info!("puzzle solved");
            self.status.show(
                "Congratulations! The puzzle is solved.",
                NotificationKind::Success,
                now,
            );
        }
    }

    fn check(&mut self, scope: CheckScope, now: Instant) {
        let wrong = self.game.check(scope);
        let (text, kind) = match wrong {
            0 => (
                format!("No wrong squares in this {scope}"),
                NotificationKind::Info,
            ),
            1 => (
                format!("1 wrong square in this {scope}"),
                NotificationKind::Failure,
            ),
            n => (
                format!("{n} wrong squares in this {scope}"),
                NotificationKind::Failure,
            ),
        };
        self.status.show(text, kind, now);
    }

    fn go_to(&mut self, step: GoToAction, now: Instant) {
        match step {
            GoToAction::Open => self.prompt = Some(String::new()),
            GoToAction::Push(ch) => {
                if let Some(digits) = self
                    .prompt
                    .as_mut()
                    .filter(|digits| digits.len() < MAX_PROMPT_DIGITS)
                {
                    digits.push(ch);
                }
            }
            GoToAction::Pop => {
                if let Some(digits) = &mut self.prompt {
                    digits.pop();
                }
            }
            GoToAction::Cancel => self.prompt = None,
            GoToAction::Submit => {
                let Some(digits) = self.prompt.take() else {
                    return;
                };
                let Ok(number) = digits.parse::<u16>() else {
                    return;
                };
                if !self.game.go_to_numbered_square(number) {
                    self.status.show(
                        format!("No square numbered {number}"),
                        NotificationKind::Failure,
                        now,
                    );
                }
            }
        }
    }

    fn save(&mut self, now: Instant) {
        let path = self.save_path().to_owned();
        match puzzle_file::save(&path, &self.game.to_puzzle_data()) {
            Ok(()) => self.status.show(
                format!("Saved to {}", path.display()),
                NotificationKind::Success,
                now,
            ),
            Err(err) => {
                log::error!("{err}");
                self.status
                    .show(format!("Save failed: {err}"), NotificationKind::Failure, now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process, time::Duration};

    use crossterm::event::{KeyCode, KeyModifiers};
    use cursewords_core::{Direction, Position, PuzzleData};
    use cursewords_game::Motion;

    use super::*;

    fn session_with(settings: Settings) -> Session {
        let data = PuzzleData::from_rows("Sample", "Tester", &["CAT", "A.R", "BEE"]);
        Session::new(
            Game::new(data).unwrap(),
            PathBuf::from("sample.json"),
            settings,
        )
    }

    fn session() -> Session {
        session_with(Settings::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn status_text(session: &Session) -> Option<&str> {
        session.status().current().map(|n| n.text.as_str())
    }

    #[test]
    fn typing_through_keys() {
        let mut session = session();
        let now = Instant::now();
        for ch in ['c', 'a', 't'] {
            session.handle_key(&key(KeyCode::Char(ch)), now);
        }
        assert_eq!(session.game().grid().serialize(), "CAT-.----");

        session.handle_key(&key(KeyCode::Char('#')), now);
        assert_eq!(session.game().grid().serialize(), "CAT-.----");
    }

    #[test]
    fn unbound_keys_change_nothing() {
        let mut session = session();
        let now = Instant::now();
        let before = session.game().clone();
        session.handle_key(&key(KeyCode::F(1)), now);
        session.handle_key(&key(KeyCode::PageDown), now);
        assert_eq!(session.game(), &before);
        assert!(!session.should_quit());
        assert_eq!(session.status().current(), None);
    }

    #[test]
    fn check_reports_wrong_count() {
        let mut session = session();
        let now = Instant::now();
        session.dispatch(Action::Check(CheckScope::Puzzle), now);
        assert_eq!(status_text(&session), Some("No wrong squares in this puzzle"));

        session.dispatch(EditAction::Type('X').into(), now);
        session.dispatch(EditAction::Type('X').into(), now);
        session.dispatch(Action::Check(CheckScope::Word), now);
        assert_eq!(status_text(&session), Some("2 wrong squares in this word"));
        assert!(session.status().current().unwrap().kind.is_failure());
    }

    #[test]
    fn solving_announces_success() {
        let mut session = session();
        let now = Instant::now();
        for ch in "CATARBEE".chars() {
            session.dispatch(EditAction::Type(ch).into(), now);
        }
        assert!(session.game().is_complete());
        assert!(session.status().current().unwrap().kind.is_success());
    }

    #[test]
    fn go_to_prompt() {
        let mut session = session();
        let now = Instant::now();
        session.dispatch(Motion::SetDirection(Direction::Down).into(), now);

        session.handle_key(&KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL), now);
        assert_eq!(session.prompt(), Some(""));

        // Letters are not typed into the grid while the prompt is open.
        session.handle_key(&key(KeyCode::Char('a')), now);
        session.handle_key(&key(KeyCode::Char('3')), now);
        session.handle_key(&key(KeyCode::Char('9')), now);
        session.handle_key(&key(KeyCode::Backspace), now);
        assert_eq!(session.prompt(), Some("3"));
        session.handle_key(&key(KeyCode::Enter), now);

        assert_eq!(session.prompt(), None);
        assert_eq!(session.game().cursor().position(), Position::new(0, 2));
        assert_eq!(session.game().cursor().direction(), Direction::Down);
        assert_eq!(session.game().grid().serialize(), "----.----");
    }

    #[test]
    fn go_to_unknown_number_and_cancel() {
        let mut session = session();
        let now = Instant::now();
        session.dispatch(GoToAction::Open.into(), now);
        for ch in "12345".chars() {
            session.dispatch(GoToAction::Push(ch).into(), now);
        }
        assert_eq!(session.prompt(), Some("1234"));
        session.dispatch(GoToAction::Submit.into(), now);
        assert_eq!(status_text(&session), Some("No square numbered 1234"));
        assert_eq!(session.game().cursor().position(), Position::new(0, 0));

        session.dispatch(GoToAction::Open.into(), now);
        session.handle_key(&key(KeyCode::Esc), now);
        assert_eq!(session.prompt(), None);
        assert!(!session.should_quit());

        // An empty prompt submits nothing.
        session.dispatch(GoToAction::Open.into(), now);
        session.dispatch(GoToAction::Submit.into(), now);
        assert_eq!(session.prompt(), None);
    }

    #[test]
    fn notifications_expire_on_tick() {
        let mut session = session_with(Settings::default().with_notification_ms(Some(100)));
        let now = Instant::now();
        session.dispatch(Action::Check(CheckScope::Square), now);
        assert!(!session.tick(now + Duration::from_millis(50)));
        assert!(session.status().current().is_some());
        assert!(session.tick(now + Duration::from_millis(100)));
        assert_eq!(session.status().current(), None);
    }

    #[test]
    fn save_writes_to_output_path() {
        let file = env::temp_dir().join(format!("cursewords-{}-session.json", process::id()));
        let settings = Settings::default().with_output(Some(file.clone()));
        let mut session = session_with(settings);
        let now = Instant::now();
        assert_eq!(session.save_path(), file);

        session.dispatch(EditAction::Type('C').into(), now);
        session.dispatch(SessionAction::Save.into(), now);
        let saved = puzzle_file::load(&file).unwrap();
        fs::remove_file(&file).unwrap();

        assert_eq!(saved.fill, "C---.----");
        assert!(session.status().current().unwrap().kind.is_success());
    }

    #[test]
    fn save_failure_is_reported() {
        let dir = env::temp_dir().join(format!("cursewords-{}-missing-dir", process::id()));
        let settings = Settings::default().with_output(Some(dir.join("out.json")));
        let mut session = session_with(settings);
        session.dispatch(SessionAction::Save.into(), Instant::now());

        let status = session.status().current().unwrap();
        assert!(status.kind.is_failure());
        assert!(status.text.starts_with("Save failed: "));
    }

    #[test]
    fn quit_keys() {
        let mut session = session();
        session.handle_key(&key(KeyCode::Esc), Instant::now());
        assert!(session.should_quit());

        let mut session = session_with(Settings::default());
        session.handle_key(
            &KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(session.should_quit());
    }
}

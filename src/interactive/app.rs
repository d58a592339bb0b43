//! TUI application state and logic

use crate::game::{
    LedgerError, Notice, NoticeKind, Phase, Presenter, Session, SessionError, Snapshot,
};
use crate::puzzle::PuzzleConfig;
use crate::wordlists::WordSources;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl From<NoticeKind> for MessageStyle {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Info => Self::Info,
            NoticeKind::Success => Self::Success,
            NoticeKind::Error => Self::Error,
        }
    }
}

/// Collects what the session reports for the next frame
#[derive(Debug, Default)]
pub struct TuiPresenter {
    pub snapshot: Option<Snapshot>,
    pub messages: Vec<Message>,
}

impl TuiPresenter {
    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

impl Presenter for TuiPresenter {
    fn render(&mut self, snapshot: &Snapshot) {
        self.snapshot = Some(snapshot.clone());
    }

    fn notify(&mut self, notice: &Notice) {
        self.add_message(&notice.to_string(), notice.kind().into());
        if let Notice::Completed { solution, .. } = notice {
            self.add_message(
                &format!("Our solution: {}", solution.join(", ")),
                MessageStyle::Info,
            );
            self.add_message("Press Ctrl-N for a new puzzle.", MessageStyle::Info);
        }
    }
}

/// Application state
pub struct App<'a> {
    pub session: Session<'a, TuiPresenter>,
    /// Index into the accepted words
    pub selected: Option<usize>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Start the TUI on a fresh puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if no puzzle can be generated.
    pub fn new(sources: &'a WordSources, config: PuzzleConfig, rng: StdRng) -> Result<Self> {
        let session = Session::new(sources, config, rng, TuiPresenter::default())?;
        Ok(Self::from_session(session))
    }

    #[must_use]
    pub const fn from_session(session: Session<'a, TuiPresenter>) -> Self {
        Self {
            session,
            selected: None,
            should_quit: false,
        }
    }

    /// Latest snapshot reported by the session
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.session
            .presenter()
            .snapshot
            .clone()
            .unwrap_or_else(|| self.session.snapshot())
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.session.presenter().messages
    }

    /// Handle one key press
    ///
    /// # Errors
    ///
    /// Returns an error only for ledger accounting failures; everything the
    /// player can act on is reported as a message.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        let result = match key.code {
            KeyCode::Char('c' | 'q') if ctrl => {
                self.should_quit = true;
                Ok(())
            }
            KeyCode::Char('n') if ctrl => {
                self.selected = None;
                self.session.reset()
            }
            KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => self.session.type_letter(c),
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Enter => self.session.submit().map(drop),
            KeyCode::Esc => self.session.cancel(),
            KeyCode::Up => {
                self.move_selection(-1);
                Ok(())
            }
            KeyCode::Down => {
                self.move_selection(1);
                Ok(())
            }
            KeyCode::Delete => self.delete_selected(),
            _ => Ok(()),
        };

        self.clamp_selection();
        self.recover(result)
    }

    fn move_selection(&mut self, step: isize) {
        let count = self.session.ledger().used_words().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        let current = self.selected.unwrap_or(count) as isize;
        self.selected = Some((current + step).clamp(0, count as isize - 1) as usize);
    }

    fn delete_selected(&mut self) -> Result<(), SessionError> {
        let Some(index) = self.selected else {
            self.session
                .presenter_mut()
                .add_message("Select a word with ↑/↓ first.", MessageStyle::Info);
            return Ok(());
        };
        let Some(word) = self.session.ledger().used_words().get(index) else {
            return Ok(());
        };
        let text = word.text().to_string();
        self.session.delete(&text).map(drop)
    }

    fn clamp_selection(&mut self) {
        let count = self.session.ledger().used_words().len();
        self.selected = match self.selected {
            Some(_) if count == 0 => None,
            Some(i) => Some(i.min(count - 1)),
            None => None,
        };
    }

    fn recover(&mut self, result: Result<(), SessionError>) -> Result<()> {
        match result {
            Ok(())
            | Err(SessionError::Vetoed(_) | SessionError::Ledger(LedgerError::NotFound(_))) => {
                Ok(())
            }
            Err(SessionError::Completed) => {
                self.session.presenter_mut().add_message(
                    "Puzzle complete! Press Ctrl-N for a new one.",
                    MessageStyle::Info,
                );
                Ok(())
            }
            Err(SessionError::Generate(e)) => {
                self.session
                    .presenter_mut()
                    .add_message(&e.to_string(), MessageStyle::Error);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.session.phase() == Phase::Completed
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! Interactive terminal session: raw mode, alternate screen and key controls

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, queue, terminal};
use tracing::{debug, trace};

use crate::domain::TraversalKind;
use crate::infrastructure::error::{InfraError, InfraResult};
use crate::infrastructure::traits::{Control, ControlSource};

/// Map a key press to a control. Unknown keys map to nothing.
pub fn control_for_key(key: &KeyEvent) -> Option<Control> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Control::Quit),
        KeyCode::Char('p') => Some(Control::Start(TraversalKind::Preorder)),
        KeyCode::Char('i') => Some(Control::Start(TraversalKind::Inorder)),
        KeyCode::Char('o') => Some(Control::Start(TraversalKind::Postorder)),
        KeyCode::Char('r') => Some(Control::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Control::Quit),
        _ => None,
    }
}

/// Reads controls from crossterm key events.
#[derive(Debug, Default)]
pub struct KeyControls;

impl ControlSource for KeyControls {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Control>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => {
                let control = control_for_key(&key);
                trace!("key {:?} -> {:?}", key.code, control);
                Ok(control)
            }
            _ => Ok(None),
        }
    }
}

/// Raw mode plus alternate screen, restored on drop.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn enter() -> InfraResult<Self> {
        if !io::stdout().is_terminal() {
            return Err(InfraError::Terminal {
                message: "interactive mode needs a terminal on stdout".to_string(),
            });
        }
        terminal::enable_raw_mode().map_err(|e| InfraError::io("enable raw mode", e))?;
        // Restores the terminal on drop if anything below fails
        let session = Self { _private: () };
        let mut out = io::stdout();
        queue!(
            out,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0),
        )
        .map_err(|e| InfraError::io("enter alternate screen", e))?;
        out.flush()
            .map_err(|e| InfraError::io("enter alternate screen", e))?;
        debug!("terminal session started");
        Ok(session)
    }

    fn shutdown() -> io::Result<()> {
        let mut out = io::stdout();
        queue!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
        out.flush()?;
        if terminal::is_raw_mode_enabled()? {
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = Self::shutdown() {
            eprintln!("failed to restore terminal: {}", e);
        }
        debug!("terminal session ended");
    }
}

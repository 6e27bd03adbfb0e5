use std::io::{stdout, Stdout};

use crossterm::{cursor, execute, terminal};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use crate::error::Result;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Scopes raw mode and the alternate screen to the questionnaire session.
/// Dropping the guard hands the terminal back even if the loop bails early.
pub struct TerminalGuard {
    tui: Tui,
    active: bool,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        let tui = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self { tui, active: true })
    }

    /// Render one frame of the wizard.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.tui.draw(render)?;
        Ok(())
    }

    /// Leave the alternate screen. Later calls are no-ops.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(
            self.tui.backend_mut(),
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

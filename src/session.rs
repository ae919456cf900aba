/// Terminal setup and teardown.
///
/// `TerminalSession` owns the output writer for the whole game. Whatever it
/// managed to switch on is switched back off when it is dropped, including
/// when setup fails halfway through.
use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};

pub struct TerminalSession<W: Write> {
    out: W,
    keyboard_enhanced: bool,
}

impl<W: Write> TerminalSession<W> {
    /// Raw mode, alternate screen, hidden cursor.
    pub fn start(out: W) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Self::enter(out)
    }

    /// Everything `start` does after raw mode is on. The guard is armed
    /// before the first command, so an early error still restores.
    pub fn enter(out: W) -> io::Result<Self> {
        let mut session = Self { out, keyboard_enhanced: false };
        session.out.execute(terminal::EnterAlternateScreen)?;
        session.out.execute(cursor::Hide)?;

        // Request key-release (and key-repeat) events from the terminal.
        // Kitty-protocol terminals support this; others fall back gracefully.
        session.keyboard_enhanced = session
            .out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        Ok(session)
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        log::debug!("Terminal restored");
    }
}

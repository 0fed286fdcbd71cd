//! crossterm terminal session
//!
//! Owns raw mode, the alternate screen and cursor visibility for as long as
//! it lives. Dropping it restores the terminal, including on early `?` exits.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::Print,
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};

use super::Canvas;
use crate::sim::Playfield;

/// Screen offset of the playfield window (column, row)
const ORIGIN: (u16, u16) = (1, 1);

pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// Enter raw mode and the alternate screen with the cursor hidden
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All)) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        log::debug!("Terminal session opened");
        Ok(Self { out })
    }

    /// Playfield that fits the current terminal with a one-cell margin
    pub fn playfield(&self) -> io::Result<Playfield> {
        let (cols, rows) = terminal::size()?;
        Ok(playfield_for(cols, rows))
    }

    /// Draw a full canvas at the playfield origin
    pub fn draw(&mut self, canvas: &Canvas) -> io::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;
        for (row, line) in canvas.rows().enumerate() {
            queue!(self.out, MoveTo(ORIGIN.0, ORIGIN.1 + row as u16), Print(line))?;
        }
        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        log::debug!("Terminal restored");
    }
}

/// Playfield for a terminal of `cols` x `rows`
pub fn playfield_for(cols: u16, rows: u16) -> Playfield {
    Playfield::new(
        cols as i32 - 2 * ORIGIN.0 as i32,
        rows as i32 - 2 * ORIGIN.1 as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playfield_leaves_margin() {
        assert_eq!(playfield_for(80, 24), Playfield::new(78, 22));
        assert!(!playfield_for(20, 10).is_playable());
    }
}

use crate::canvas::Canvas;
use crate::error::Result;
use crate::state::Position;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use log::{debug, warn};

use std::convert::TryFrom;
use std::io::{self, Stdout, Write};

/// Draws cells by emitting cursor-motion escape sequences into `out`.
pub struct AnsiCanvas<W: Write> {
    out: W,
    rows: usize,
    cols: usize,
}

impl<W: Write> AnsiCanvas<W> {
    pub fn new(out: W, rows: usize, cols: usize) -> Self {
        AnsiCanvas { out, rows, cols }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Canvas for AnsiCanvas<W> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn put(&mut self, at: Position, c: char) -> Result<()> {
        self.check(at)?;
        // Both fit: the canvas is never larger than the terminal.
        let x = u16::try_from(at.x).unwrap_or(u16::MAX);
        let y = u16::try_from(at.y).unwrap_or(u16::MAX);
        queue!(self.out, MoveTo(x, y), Print(c))?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Exclusive hold on the real terminal: alternate screen, raw input and a
/// hidden cursor. Everything is restored on drop.
pub struct Display {
    canvas: AnsiCanvas<Stdout>,
}

impl Display {
    pub fn open() -> Result<Self> {
        let (cols, rows) = terminal::size()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        if let Err(e) = terminal::enable_raw_mode() {
            let _ = execute!(out, Show, LeaveAlternateScreen);
            return Err(e.into());
        }
        debug!("terminal opened at {}x{}", rows, cols);
        Ok(Display {
            canvas: AnsiCanvas::new(out, rows as usize, cols as usize),
        })
    }

    pub fn canvas(&mut self) -> &mut AnsiCanvas<Stdout> {
        &mut self.canvas
    }

    /// Blocks until a key is pressed.
    pub fn wait_for_key(&mut self) -> Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to leave raw mode: {}", e);
        }
        if let Err(e) = execute!(self.canvas.out, Show, LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::term::{Terminal, TerminalConfig};

    #[test]
    fn put_emits_cursor_motion() {
        let mut canvas = AnsiCanvas::new(Vec::new(), 3, 5);
        canvas.put(Position::new(2, 4), '*').unwrap();
        canvas.present().unwrap();
        assert_eq!(canvas.into_inner(), b"\x1b[3;5H*".to_vec());
    }

    #[test]
    fn output_replays_onto_a_grid() {
        let mut canvas = AnsiCanvas::new(Vec::new(), 2, 6);
        canvas.put(Position::new(1, 0), '0').unwrap();
        canvas.put_str(Position::new(0, 2), "quit").unwrap();

        let mut term = Terminal::new(&TerminalConfig { rows: 2, cols: 6 });
        term.send_all(&canvas.into_inner());
        assert_eq!(term.lines(), vec!["  quit", "0     "]);
    }

    #[test]
    fn put_rejects_cells_off_canvas() {
        let mut canvas = AnsiCanvas::new(Vec::new(), 3, 5);
        assert!(matches!(
            canvas.put(Position::new(0, 5), '*'),
            Err(Error::OffCanvas { .. })
        ));
        assert!(canvas.into_inner().is_empty());
    }
}

use crate::action::Action;
use crate::error::{Error, Result};
use crate::state::{Position, State};
use crate::store::Store;
use crate::update::update;

use std::thread;
use std::time::Duration;

/// A fixed-size grid of character cells that can be drawn on one cell at a time.
pub trait Canvas {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// Write `c` at `at`. Nothing becomes visible until `present`.
    fn put(&mut self, at: Position, c: char) -> Result<()>;

    fn present(&mut self) -> Result<()>;

    /// Write `text` starting at `at`, clipped to the right edge.
    fn put_str(&mut self, at: Position, text: &str) -> Result<()> {
        let room = self.cols().saturating_sub(at.x);
        for (i, c) in text.chars().take(room).enumerate() {
            self.put(Position::new(at.y, at.x + i), c)?;
        }
        Ok(())
    }

    fn check(&self, at: Position) -> Result<()> {
        if at.y < self.rows() && at.x < self.cols() {
            Ok(())
        } else {
            Err(Error::OffCanvas {
                at,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }
}

/// Delay between visible draws, owned by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    pub fn new(delay: Duration) -> Self {
        Pacing { delay }
    }

    pub fn none() -> Self {
        Pacing {
            delay: Duration::from_secs(0),
        }
    }

    pub fn wait(&self) {
        if self.delay > Duration::from_secs(0) {
            thread::sleep(self.delay);
        }
    }
}

pub fn headless(rows: usize, cols: usize) -> Store<State, Action> {
    Store::new(update, State::new(rows, cols))
}

impl Canvas for Store<State, Action> {
    fn rows(&self) -> usize {
        self.get_state().rows
    }

    fn cols(&self) -> usize {
        self.get_state().cols
    }

    fn put(&mut self, at: Position, c: char) -> Result<()> {
        self.check(at)?;
        self.dispatch(&Action::MoveTo(at));
        self.dispatch(&Action::Print(c));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

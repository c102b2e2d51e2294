//! Chaos-game triangle.
//!
//! The current point moves halfway toward a randomly chosen anchor on every
//! step and each visited cell is plotted and logged, which traces out a
//! Sierpinski-like triangle.

use crate::canvas::{Canvas, Pacing};
use crate::entropy::Entropy;
use crate::error::{Error, Result};
use crate::record::PositionRecord;
use crate::state::Position;

use log::debug;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub anchors: [Position; 3],
}

impl Triangle {
    pub fn new(a: Position, b: Position, c: Position) -> Self {
        Triangle { anchors: [a, b, c] }
    }

    /// Anchors fitted to a canvas whose last row is `max_row` and last column is `max_col`.
    pub fn spanning(max_row: usize, max_col: usize) -> Self {
        Triangle::new(
            Position::new(1, 1),
            Position::new(max_row, max_col / 2),
            Position::new(0, max_col),
        )
    }

    /// Draws each anchor with its label.
    pub fn label<C: Canvas>(&self, canvas: &mut C, labels: [char; 3]) -> Result<()> {
        for (anchor, label) in self.anchors.iter().zip(labels.iter()) {
            canvas.put(*anchor, *label)?;
        }
        canvas.present()
    }

    pub fn step<E: Entropy>(&self, from: Position, entropy: &mut E) -> Result<Position> {
        let index = entropy.pick(self.anchors.len())?;
        Ok(from.midpoint(self.anchors[index]))
    }
}

/// Runs `iterations` chaos-game steps from `start`, plotting `marker` at every
/// visited cell and appending it to `record` in draw order.
///
/// Fails up front with `CapacityExceeded` when `record` cannot hold every step.
pub fn render<C, E, const CAP: usize>(
    canvas: &mut C,
    triangle: &Triangle,
    start: Position,
    iterations: usize,
    marker: char,
    entropy: &mut E,
    pacing: &Pacing,
    record: &mut PositionRecord<CAP>,
) -> Result<()>
where
    C: Canvas,
    E: Entropy,
{
    if iterations > record.remaining() {
        return Err(Error::CapacityExceeded { capacity: CAP });
    }
    debug!("rendering {} steps from {}", iterations, start);

    let mut current = start;
    for _ in 0..iterations {
        current = triangle.step(current, entropy)?;
        pacing.wait();
        canvas.put(current, marker)?;
        record.push(current)?;
        canvas.present()?;
    }
    Ok(())
}

/// Overwrites every recorded cell, in record order, with `marker`.
pub fn flip<C: Canvas>(
    canvas: &mut C,
    record: &[Position],
    marker: char,
    pacing: &Pacing,
) -> Result<()> {
    debug!("flipping {} cells to {:?}", record.len(), marker);
    for at in record {
        pacing.wait();
        canvas.put(*at, marker)?;
        canvas.present()?;
    }
    Ok(())
}

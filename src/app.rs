use crate::canvas::{Canvas, Pacing};
use crate::chaos::{self, Triangle};
use crate::config::Config;
use crate::entropy::Entropy;
use crate::error::{Error, Result};
use crate::invert;
use crate::record::PositionRecord;
use crate::state::Position;

use log::{debug, info};

#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub start: Position,
    pub plotted: usize,
    pub flipped: bool,
    pub inverted_rows: usize,
}

/// Draws the triangle, optionally flips it, inverts every row and leaves the
/// farewell line on the last row.
pub fn run<C, E, const CAP: usize>(
    config: &Config,
    canvas: &mut C,
    entropy: &mut E,
    record: &mut PositionRecord<CAP>,
) -> Result<Outcome>
where
    C: Canvas,
    E: Entropy,
{
    let (rows, cols) = (canvas.rows(), canvas.cols());
    if rows < 2 || cols < 2 {
        return Err(Error::CanvasTooSmall { rows, cols });
    }
    let max_row = rows - 1;
    let max_col = cols - 1;
    let pacing = Pacing::new(config.delay);

    let triangle = Triangle::spanning(max_row, max_col);
    triangle.label(canvas, config.anchor_labels)?;

    let start = Position::new(entropy.pick(max_row)? + 1, entropy.pick(max_col)? + 1);
    canvas.put(start, config.start_marker)?;
    canvas.present()?;
    info!("triangle {:?}, starting at {}", triangle.anchors, start);

    chaos::render(
        canvas,
        &triangle,
        start,
        config.iterations,
        config.plot_marker,
        entropy,
        &pacing,
        record,
    )?;

    if let Some(marker) = config.flip_marker {
        chaos::flip(canvas, record.as_slice(), marker, &pacing)?;
    }

    debug!("inverting {} rows of width {}", max_row, max_col);
    for row in 0..max_row {
        invert::invert_row(
            canvas,
            row,
            max_col,
            record.as_slice(),
            config.filled_with,
            config.empty_with,
            &pacing,
        )?;
    }

    canvas.put_str(Position::new(max_row, 0), &config.farewell)?;
    canvas.present()?;

    Ok(Outcome {
        start,
        plotted: record.len(),
        flipped: config.flip_marker.is_some(),
        inverted_rows: max_row,
    })
}

use crate::canvas::{Canvas, Pacing};
use crate::error::Result;
use crate::record::{position_exists, PositionRecord};
use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Filled,
    Empty,
}

/// Classifies the first `width` cells of `row` against `reference`.
pub fn classify_row(row: usize, width: usize, reference: &[Position]) -> Vec<Cell> {
    (0..width)
        .map(|x| {
            if position_exists(Position::new(row, x), reference) {
                Cell::Filled
            } else {
                Cell::Empty
            }
        })
        .collect()
}

/// Redraws `row`: cells found in `reference` become `filled_with`, all others
/// become `empty_with`. `reference` is only read.
pub fn invert_row<C: Canvas>(
    canvas: &mut C,
    row: usize,
    width: usize,
    reference: &[Position],
    filled_with: char,
    empty_with: char,
    pacing: &Pacing,
) -> Result<()> {
    for (x, cell) in classify_row(row, width, reference).into_iter().enumerate() {
        pacing.wait();
        let c = match cell {
            Cell::Filled => filled_with,
            Cell::Empty => empty_with,
        };
        canvas.put(Position::new(row, x), c)?;
        canvas.present()?;
    }
    Ok(())
}

/// Appends every cell of a `rows` x `cols` canvas missing from `reference` to
/// `out`, row by row. Returns how many were appended.
pub fn collect_empty<const CAP: usize>(
    rows: usize,
    cols: usize,
    reference: &[Position],
    out: &mut PositionRecord<CAP>,
) -> Result<usize> {
    let mut appended = 0;
    for y in 0..rows {
        for x in 0..cols {
            let at = Position::new(y, x);
            if !position_exists(at, reference) {
                out.push(at)?;
                appended += 1;
            }
        }
    }
    Ok(appended)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::headless;
    use crate::error::Error;

    fn reference() -> Vec<Position> {
        vec![Position::new(0, 0), Position::new(0, 2)]
    }

    #[test]
    fn classify_matches_reference() {
        assert_eq!(
            classify_row(0, 3, &reference()),
            vec![Cell::Filled, Cell::Empty, Cell::Filled]
        );
        assert_eq!(classify_row(1, 2, &reference()), vec![Cell::Empty; 2]);
    }

    #[test]
    fn invert_row_redraws_every_cell() {
        let mut canvas = headless(2, 4);
        canvas.put_str(Position::new(0, 0), "*x*y").unwrap();
        invert_row(&mut canvas, 0, 3, &reference(), ' ', '0', &Pacing::none()).unwrap();
        assert_eq!(canvas.get_state().text(), vec![" 0 y", "    "]);
    }

    #[test]
    fn inverting_twice_reproduces_classification() {
        let reference = reference();
        let before = reference.clone();
        let mut canvas = headless(1, 3);
        invert_row(&mut canvas, 0, 3, &reference, ' ', '0', &Pacing::none()).unwrap();
        let once = canvas.get_state().text();
        invert_row(&mut canvas, 0, 3, &reference, ' ', '0', &Pacing::none()).unwrap();
        assert_eq!(canvas.get_state().text(), once);
        assert_eq!(reference, before);
        assert_eq!(
            classify_row(0, 3, &reference),
            vec![Cell::Filled, Cell::Empty, Cell::Filled]
        );
    }

    #[test]
    fn collect_empty_finds_the_complement() {
        let mut out = PositionRecord::<4>::new();
        assert_eq!(collect_empty(1, 3, &reference(), &mut out).unwrap(), 1);
        assert_eq!(out.as_slice(), &[Position::new(0, 1)]);
    }

    #[test]
    fn collect_empty_reports_a_full_record() {
        let mut out = PositionRecord::<2>::new();
        let result = collect_empty(2, 3, &reference(), &mut out);
        assert!(matches!(result, Err(Error::CapacityExceeded { capacity: 2 })));
        assert_eq!(out.len(), 2);
    }
}

use std::fmt;

/// A character cell. `y` is the row, `x` is the column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub y: usize,
    pub x: usize,
}

impl Position {
    pub fn new(y: usize, x: usize) -> Self {
        Position { y, x }
    }

    /// Integer-truncated average of two positions.
    pub fn midpoint(self, other: Position) -> Position {
        Position {
            y: (self.y + other.y) / 2,
            x: (self.x + other.x) / 2,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    pub cursor: Position,
    pub rows: usize,
    pub cols: usize,
    pub lines: Vec<Vec<char>>,
}

impl State {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cursor: Position { x: 0, y: 0 },
            rows,
            cols,
            lines: vec![vec![' '; cols]; rows],
        }
    }

    pub fn contains(&self, at: Position) -> bool {
        at.y < self.rows && at.x < self.cols
    }

    pub fn cell(&self, at: Position) -> Option<char> {
        self.lines.get(at.y).and_then(|line| line.get(at.x)).copied()
    }

    pub fn text(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.iter().collect::<String>())
            .collect::<Vec<String>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_truncates() {
        let p = Position::new(3, 4).midpoint(Position::new(0, 1));
        assert_eq!(p, Position::new(1, 2));
    }

    #[test]
    fn new_state_is_blank() {
        let state = State::new(2, 3);
        assert_eq!(state.text(), vec!["   ", "   "]);
        assert!(state.contains(Position::new(1, 2)));
        assert!(!state.contains(Position::new(2, 0)));
        assert_eq!(state.cell(Position::new(0, 3)), None);
    }
}

use crate::action::Action;
use crate::state::{Position, State};

pub fn update(state: &mut State, action: &Action) {
    match action {
        Action::MoveTo(at) => {
            state.cursor = *at;
        }
        Action::Print(c) => {
            let Position { y, x } = state.cursor;
            if state.contains(state.cursor) {
                state.lines[y][x] = *c;
            }
            state.cursor.x += 1;
        }
        Action::Execute(byte) => {
            match byte {
                8 /* BS */ => {
                    state.cursor.x = state.cursor.x.saturating_sub(1);
                }
                10 /* LF */ => {
                    state.cursor.y += 1;
                }
                13 /* CR */ => {
                    state.cursor.x = 0;
                }
                _ => {}
            }
        }
        Action::Forward(n) => {
            state.cursor.x += n;
        }
        Action::Clear() => {
            for line in state.lines.iter_mut() {
                for c in line.iter_mut() {
                    *c = ' ';
                }
            }
        }
        Action::Resize(rows, cols) => {
            state.lines.resize(*rows, vec![]);
            for line in state.lines.iter_mut() {
                line.resize(*cols, ' ');
            }
            state.rows = *rows;
            state.cols = *cols;
        }
    }
}

use crate::state::Position;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    MoveTo(Position),
    Print(char),
    Execute(u8),
    Forward(usize),
    Clear(),
    Resize(usize, usize),
}

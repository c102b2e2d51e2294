use crate::action::Action;
use crate::state::Position;

use vte::Perform;

/// Collects the drawing actions described by a parsed byte stream.
#[derive(Default)]
pub struct ScreenHandler {
    pub pending: Vec<Action>,
}

impl ScreenHandler {
    pub fn take(&mut self) -> Vec<Action> {
        std::mem::replace(&mut self.pending, vec![])
    }
}

impl Perform for ScreenHandler {
    fn print(&mut self, c: char) {
        self.pending.push(Action::Print(c));
    }
    fn execute(&mut self, byte: u8) {
        self.pending.push(Action::Execute(byte));
    }
    fn hook(&mut self, _params: &[i64], _intermediates: &[u8], _ignore: bool) {}
    fn put(&mut self, _byte: u8) {}
    fn unhook(&mut self) {}
    fn osc_dispatch(&mut self, _params: &[&[u8]]) {}
    fn csi_dispatch(&mut self, params: &[i64], intermediates: &[u8], _ignore: bool, c: char) {
        // Private modes (cursor visibility, alternate screen) do not touch the grid.
        if !intermediates.is_empty() {
            return;
        }
        let param = |i: usize| params.get(i).cloned().filter(|&p| p > 0).unwrap_or(1) as usize;
        match c {
            'H' | 'f' => {
                let at = Position::new(param(0) - 1, param(1) - 1);
                self.pending.push(Action::MoveTo(at));
            }
            'C' => {
                self.pending.push(Action::Forward(param(0)));
            }
            'J' => {
                if params.get(0) == Some(&2) {
                    self.pending.push(Action::Clear());
                }
            }
            _ => {}
        }
    }
    fn esc_dispatch(&mut self, _params: &[i64], _intermediates: &[u8], _ignore: bool, _byte: u8) {}
}

use crate::action::Action;
use crate::handlers::ScreenHandler;
use crate::state::State;
use crate::store::Store;
use crate::update::update;

use vte::Parser;

/// Headless screen: replays escape-sequence output onto a character grid.
pub struct Terminal {
    parser: Parser,
    handler: ScreenHandler,
    store: Store<State, Action>,
}

pub struct TerminalConfig {
    pub cols: usize,
    pub rows: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig { cols: 80, rows: 24 }
    }
}

impl Terminal {
    pub fn new(config: &TerminalConfig) -> Self {
        Terminal {
            parser: Parser::new(),
            handler: ScreenHandler::default(),
            store: Store::new(update, State::new(config.rows, config.cols)),
        }
    }

    pub fn send(&mut self, byte: u8) {
        self.parser.advance(&mut self.handler, byte);
        let actions = self.handler.take();
        self.store.dispatch_all(&actions);
    }

    pub fn send_all(&mut self, bytes: &[u8]) {
        for b in bytes {
            self.send(*b);
        }
    }

    pub fn state(&self) -> &State {
        self.store.get_state()
    }

    pub fn lines(&self) -> Vec<String> {
        self.state().text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    #[test]
    fn replays_cursor_moves_and_prints() {
        let mut term = Terminal::new(&TerminalConfig { rows: 2, cols: 4 });
        term.send_all(b"\x1b[?25l\x1b[2J\x1b[2;3H*\x1b[1;1Hab\x1b[1CZ");
        assert_eq!(term.lines(), vec!["ab Z", "  * "]);
        assert_eq!(term.state().cursor, Position::new(0, 4));
    }

    #[test]
    fn clear_blanks_the_grid() {
        let mut term = Terminal::new(&TerminalConfig::default());
        term.send_all(b"hello\r\nworld\x1b[2J");
        assert!(term.lines().iter().all(|l| l.trim().is_empty()));
        assert_eq!(term.lines().len(), 24);
    }
}

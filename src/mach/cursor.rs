use crate::lang::Token;
use std::rc::Rc;

/// A resumable position in a token stream: either an input line or a
/// compiled word body.
///
/// Bodies are shared, never mutated, so a saved cursor stays valid after
/// the word it points into has vanished from the dictionary.
#[derive(Debug, Clone)]
pub struct Cursor {
    tokens: Rc<[Token]>,
    pos: usize,
}

impl Cursor {
    pub fn new(tokens: Rc<[Token]>) -> Cursor {
        Cursor { tokens, pos: 0 }
    }

    pub fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos)?.clone();
        self.pos += 1;
        Some(token)
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn save(&self) -> Cursor {
        self.clone()
    }

    pub fn restore(&mut self, saved: &Cursor) {
        *self = saved.clone();
    }

    /// Consume tokens up to and including the first `*/`.
    ///
    /// Not nesting aware. Returns false when the stream ends first, leaving
    /// the cursor exhausted.
    pub fn skip_comment(&mut self) -> bool {
        while let Some(token) = self.next() {
            if token.is_comment_close() {
                return true;
            }
        }
        false
    }
}

use crate::token::{LexItem, Token};

/// Cursor over a token slice that is terminated by an `Eof` item.
/// The cursor stops on that item and never moves past it.
pub struct Context<'a> {
    items: &'a [LexItem],
    curr_pos: usize,
}

impl<'a> Context<'a> {
    /// Returns `None` unless the last item is `Eof`.
    pub fn new(items: &'a [LexItem]) -> Option<Self> {
        match items.last() {
            Some(li) if li.token == Token::Eof => Some(Self { items, curr_pos: 0 }),
            _ => None,
        }
    }

    pub fn get_curr(&self) -> &'a LexItem {
        let items = self.items;
        &items[self.curr_pos]
    }

    pub fn peek(&self, match_tokens: &[Token]) -> bool {
        match_tokens.contains(&self.get_curr().token)
    }

    /// Consumes and returns the current item if it is one of `match_tokens`.
    /// `Eof` is never consumed.
    pub fn next_if(&mut self, match_tokens: &[Token]) -> Option<&'a LexItem> {
        let li = self.get_curr();
        if li.token == Token::Eof || !self.peek(match_tokens) {
            return None;
        }
        self.advance();
        Some(li)
    }

    pub fn advance(&mut self) {
        if self.get_curr().token != Token::Eof {
            self.curr_pos += 1;
        }
    }
}

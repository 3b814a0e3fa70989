#![deny(warnings)]

use lexers::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Splits raw text into the tokens `ShuntingParser` expects.
///
/// Numbers are scanned like `[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?`, every
/// other non-blank char is a token by itself. There's no unary minus, `-`
/// is always an operator.
pub struct InfixTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> InfixTokenizer<I> {
    pub fn new(source: I) -> Self {
        InfixTokenizer{src: Scanner::new(source)}
    }

    // unsigned, a leading '-' is left for the operator branch
    fn scan_number(&mut self) -> Option<String> {
        if !self.src.skip_all(DIGITS) {
            return None;
        }
        // a trailing '.' isn't part of the number
        let backtrack = self.src.buffer_pos();
        if self.src.accept_any(&['.']).is_some() && !self.src.skip_all(DIGITS) {
            self.src.set_buffer_pos(backtrack);
        }
        let backtrack = self.src.buffer_pos();
        if self.src.accept_any(&['e', 'E']).is_some() {
            self.src.accept_any(&['+', '-']);
            if !self.src.skip_all(DIGITS) {
                self.src.set_buffer_pos(backtrack);
            }
        }
        Some(self.src.extract().into_iter().collect())
    }
}

impl<I: Iterator<Item=char>> Iterator for InfixTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.skip_all(WHITE);
        self.src.extract();
        if let Some(num) = self.scan_number() {
            return Some(num);
        }
        self.src.next()?;
        Some(self.src.extract().into_iter().collect())
    }
}

pub fn tokenize(src: &str) -> Vec<String> {
    InfixTokenizer::new(src.chars()).collect()
}

///////////////////////////////////////////////////////////////////////////////

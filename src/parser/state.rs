use std::fmt;

use lachs::Span;

use crate::lexer::Token;

/// A parse failure with what was expected and what was found instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub expected: Vec<String>,
    pub found: Option<String>,
    pub span: Option<Span>,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            expected: vec![],
            found: None,
            span: None,
        }
    }

    pub fn expected(mut self, what: impl Into<String>) -> Self {
        self.expected.push(what.into());
        self
    }

    pub fn found(mut self, what: impl Into<String>) -> Self {
        self.found = Some(what.into());
        self
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    fn describe(&self) -> String {
        let mut msg = self.message.clone();
        if !self.expected.is_empty() {
            msg.push_str(", expected ");
            msg.push_str(&self.expected.join(" or "));
        }
        if let Some(found) = &self.found {
            msg.push_str(", found ");
            msg.push_str(found);
        }
        msg
    }

    /// Message with the source excerpt, when the error has a location.
    pub fn report(&self) -> String {
        match &self.span {
            Some(span) if !span.source.is_empty() => span.to_string(&self.describe()),
            _ => format!("Parse error: {}", self.describe()),
        }
    }

    /// Merge the expectations of an error raised at the same token.
    fn absorb(&mut self, other: ParseError) {
        for exp in other.expected {
            if !self.expected.contains(&exp) {
                self.expected.push(exp);
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
    furthest: Option<(usize, ParseError)>,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            furthest: None,
        }
    }

    pub fn advance(&mut self) -> Option<Token> {
        if self.has_next() {
            let token = self.tokens[self.index].clone();
            self.index += 1;
            Some(token)
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn restore(&mut self, position: usize) {
        self.index = position;
    }

    /// Remember `err` if no alternative got further into the input.
    pub fn record_error(&mut self, err: ParseError) {
        match &mut self.furthest {
            Some((index, furthest)) if *index == self.index => furthest.absorb(err),
            Some((index, _)) if *index > self.index => {}
            _ => self.furthest = Some((self.index, err)),
        }
    }

    /// Replace what the deepest error expects, if it was raised at `start`.
    pub fn relabel(&mut self, start: usize, name: &str) {
        if let Some((index, furthest)) = &mut self.furthest
            && *index == start
        {
            furthest.expected = vec![name.to_string()];
        }
    }

    /// The error recorded at the deepest position reached so far.
    pub fn furthest_error(&self) -> Option<&ParseError> {
        self.furthest.as_ref().map(|(_, err)| err)
    }

    /// An error pointing at the current token.
    pub fn error_here(&self, msg: &str) -> ParseError {
        match self.peek() {
            Some(tok) => ParseError::new(msg).found(tok.describe()).at(tok.pos()),
            None => ParseError::new("unexpected end of input"),
        }
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T>;
}

impl<T, F: Fn(&mut ParseState) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        self(state)
    }
}

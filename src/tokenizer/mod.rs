mod state;

pub use state::State;

use crate::checkers::is_scheme_byte;
use crate::token::UrlToken;

/// Single-pass scanner splitting a URL string into [`UrlToken`]s.
///
/// The tokenizer never fails: any input is split into some sequence of
/// tokens. It cannot be rewound; construct a new one to start over.
///
/// # Examples
///
/// ```
/// use urlkit::{UrlToken, UrlTokenizer};
///
/// let tokens: Vec<_> = UrlTokenizer::new("https://example.com:8080").collect();
/// assert_eq!(
///     tokens,
///     [
///         UrlToken::scheme("https"),
///         UrlToken::host("example.com"),
///         UrlToken::port("8080"),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct UrlTokenizer<'a> {
    text: &'a str,
    position: usize,
    state: State,
    current: Option<UrlToken<'a>>,
}

impl<'a> UrlTokenizer<'a> {
    /// Create a tokenizer for a whole URL (starts in [`State::SchemeOrHost`])
    pub fn new(text: &'a str) -> Self {
        Self::with_state(text, State::SchemeOrHost)
    }

    /// Create a tokenizer that interprets the input starting from `state`
    pub fn with_state(text: &'a str, state: State) -> Self {
        Self {
            text,
            position: 0,
            state,
            current: None,
        }
    }

    /// Get the most recently produced token
    pub fn current(&self) -> Option<UrlToken<'a>> {
        self.current
    }

    /// Get the state that will handle the next call to [`advance`](Self::advance)
    pub fn state(&self) -> State {
        self.state
    }

    /// Produce the next token.
    /// Returns false (and clears `current`) once the input is exhausted.
    pub fn advance(&mut self) -> bool {
        self.current = if self.has_remaining() {
            match self.state {
                State::SchemeOrHost => Some(self.next_scheme_or_host()),
                State::Scheme => Some(self.next_scheme()),
                State::Host => Some(self.next_host()),
                State::Port => Some(self.next_port()),
                State::Path => Some(self.next_path()),
                State::Query => Some(self.next_query()),
                State::Done => None,
            }
        } else {
            self.state = State::Done;
            None
        };
        self.current.is_some()
    }

    fn has_remaining(&self) -> bool {
        self.position < self.text.len()
    }

    fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }

    fn current_byte(&self) -> Option<u8> {
        self.text.as_bytes().get(self.position).copied()
    }

    fn skip_prefix(&mut self, prefix: &str) {
        if self.rest().starts_with(prefix) {
            self.position += prefix.len();
        }
    }

    /// Read until one of `:`, `/`, `?` or the end of input
    fn read_until_delimiter(&mut self) -> &'a str {
        let rest = self.rest();
        let len = memchr::memchr3(b':', b'/', b'?', rest.as_bytes()).unwrap_or(rest.len());
        self.position += len;
        &rest[..len]
    }

    /// Read until `/`, `?` or the end of input
    fn read_until_path_or_query(&mut self) -> &'a str {
        let rest = self.rest();
        let len = memchr::memchr2(b'/', b'?', rest.as_bytes()).unwrap_or(rest.len());
        self.position += len;
        &rest[..len]
    }

    /// Read until `?` or the end of input
    fn read_until_query(&mut self) -> &'a str {
        let rest = self.rest();
        let len = memchr::memchr(b'?', rest.as_bytes()).unwrap_or(rest.len());
        self.position += len;
        &rest[..len]
    }

    /// Pick the state following a host or port from the byte under the cursor
    fn state_after_authority(&self) -> State {
        match self.current_byte() {
            None => State::Done,
            Some(b':') => State::Port,
            Some(b'/') => State::Path,
            Some(_) => State::Query,
        }
    }

    fn next_scheme_or_host(&mut self) -> UrlToken<'a> {
        let text = self.read_until_delimiter();
        match self.current_byte() {
            None => {
                self.state = State::Done;
                UrlToken::host(text)
            }
            Some(b':') if self.rest().starts_with("://") => {
                // Host state consumes the "://"
                self.state = State::Host;
                UrlToken::scheme(text)
            }
            Some(b':') => {
                // Port state consumes the ":"
                self.state = State::Port;
                UrlToken::host(text)
            }
            Some(b'/') => {
                self.state = State::Path;
                UrlToken::host(text)
            }
            Some(_) => {
                self.state = State::Query;
                UrlToken::host(text)
            }
        }
    }

    fn next_scheme(&mut self) -> UrlToken<'a> {
        let rest = self.rest();
        let len = rest
            .bytes()
            .position(|b| !is_scheme_byte(b))
            .unwrap_or(rest.len());
        self.position += len;
        self.state = if self.has_remaining() {
            State::Host
        } else {
            State::Done
        };
        UrlToken::scheme(&rest[..len])
    }

    fn next_host(&mut self) -> UrlToken<'a> {
        self.skip_prefix("://");
        let text = self.read_until_delimiter();
        self.state = self.state_after_authority();
        UrlToken::host(text)
    }

    fn next_port(&mut self) -> UrlToken<'a> {
        self.skip_prefix(":");
        let text = self.read_until_path_or_query();
        self.state = self.state_after_authority();
        UrlToken::port(text)
    }

    fn next_path(&mut self) -> UrlToken<'a> {
        let text = self.read_until_query();
        self.state = if self.has_remaining() {
            State::Query
        } else {
            State::Done
        };
        UrlToken::path(text)
    }

    fn next_query(&mut self) -> UrlToken<'a> {
        self.skip_prefix("?");
        let text = self.rest();
        self.position = self.text.len();
        self.state = State::Done;
        UrlToken::query(text)
    }
}

impl<'a> Iterator for UrlTokenizer<'a> {
    type Item = UrlToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() { self.current } else { None }
    }
}

impl core::iter::FusedIterator for UrlTokenizer<'_> {}

/// Kind of a lexical URL piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlTokenKind {
    Scheme,
    Host,
    Port,
    Path,
    Query,
}

/// One classified substring of a URL, borrowed from the tokenized input.
///
/// Example: tokenizing `"https://example.com:8080/a?b=c"` produces
/// `Scheme("https")`, `Host("example.com")`, `Port("8080")`, `Path("/a")`
/// and `Query("b=c")`. Delimiters are never part of the token text, except
/// for the leading `/` of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlToken<'a> {
    Scheme(&'a str),
    Host(&'a str),
    Port(&'a str),
    Path(&'a str),
    Query(&'a str),
}

impl<'a> UrlToken<'a> {
    pub fn scheme(text: &'a str) -> Self {
        Self::Scheme(text)
    }

    pub fn host(text: &'a str) -> Self {
        Self::Host(text)
    }

    pub fn port(text: &'a str) -> Self {
        Self::Port(text)
    }

    pub fn path(text: &'a str) -> Self {
        Self::Path(text)
    }

    pub fn query(text: &'a str) -> Self {
        Self::Query(text)
    }

    pub fn kind(&self) -> UrlTokenKind {
        match self {
            Self::Scheme(_) => UrlTokenKind::Scheme,
            Self::Host(_) => UrlTokenKind::Host,
            Self::Port(_) => UrlTokenKind::Port,
            Self::Path(_) => UrlTokenKind::Path,
            Self::Query(_) => UrlTokenKind::Query,
        }
    }

    /// Get the token text (zero-copy)
    pub fn text(&self) -> &'a str {
        match *self {
            Self::Scheme(s) | Self::Host(s) | Self::Port(s) | Self::Path(s) | Self::Query(s) => s,
        }
    }
}

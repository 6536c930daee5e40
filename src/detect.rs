//! Classification of setter arguments.
//!
//! A value handed to one of the [`UrlBuilder`](crate::UrlBuilder) setters is
//! either a bare component value, stored as-is, or a fragment carrying more
//! URL structure that has to be tokenized and merged into several fields.

use crate::tokenizer::State;

/// A classified setter argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// A bare component value
    Plain(&'a str),
    /// Text to tokenize starting from `start`
    Structured { text: &'a str, start: State },
    /// Text that replaces scheme, host, port and path altogether
    Absolute(&'a str),
}

/// Classify a scheme argument.
/// `"https"` and `"https:"` are plain; `"https://host"` also carries a host.
pub fn classify_scheme(text: &str) -> Fragment<'_> {
    if text.contains("://") {
        Fragment::Structured {
            text,
            start: State::Scheme,
        }
    } else {
        Fragment::Plain(text.strip_suffix(':').unwrap_or(text))
    }
}

/// Classify a host argument.
/// Any `:`, `/` or `?` means the host comes with other components.
pub fn classify_host(text: &str) -> Fragment<'_> {
    if memchr::memchr3(b':', b'/', b'?', text.as_bytes()).is_some() {
        Fragment::Structured {
            text,
            start: State::SchemeOrHost,
        }
    } else {
        Fragment::Plain(text)
    }
}

/// Classify a port argument.
pub fn classify_port(text: &str) -> Fragment<'_> {
    if text.starts_with(':') || memchr::memchr2(b'/', b'?', text.as_bytes()).is_some() {
        Fragment::Structured {
            text,
            start: State::Port,
        }
    } else {
        Fragment::Plain(text)
    }
}

/// Classify a path argument.
///
/// A path containing `scheme://` is an absolute URL; anything before the
/// last `/` that precedes the scheme is dropped, so `"/a/b/https://x.com"`
/// yields `Absolute("https://x.com")`. A path containing `?` carries query
/// parameters.
pub fn classify_path(text: &str) -> Fragment<'_> {
    if let Some(scheme_index) = text.find("://") {
        let url = match text[..scheme_index].rfind('/') {
            Some(slash) => &text[slash + 1..],
            None => text,
        };
        return Fragment::Absolute(url);
    }
    if memchr::memchr(b'?', text.as_bytes()).is_some() {
        Fragment::Structured {
            text,
            start: State::Path,
        }
    } else {
        Fragment::Plain(text)
    }
}

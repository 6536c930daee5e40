#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod detect;
mod error;
mod query;
mod token;
mod tokenizer;
mod url_builder;

// Public API
pub use error::{ParseError, Result};
pub use query::UrlQuery;
pub use token::{UrlToken, UrlTokenKind};
pub use tokenizer::{State as TokenizerState, UrlTokenizer};
pub use url_builder::{IntoPort, UrlBuilder, UrlSource};

/// Errors reported by the strict accessors of a parsed URL.
///
/// Parsing itself never fails; these only surface when a caller asks for a
/// component in a stricter form than the text that was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Port text is not a decimal number in `0..=65535`
    InvalidPort,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPort => "Invalid port",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for strict URL accessors
pub type Result<T> = core::result::Result<T, ParseError>;

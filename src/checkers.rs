/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}

/// Check if a byte may appear in a scheme name read by the scheme state.
pub fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Tokenizer state machine states.
///
/// Each state names the kind of token the tokenizer expects to produce next.
/// `SchemeOrHost` is the start state for whole URLs; the other states are
/// valid start states when the kind of the leading piece is already known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Leading text that is a scheme if followed by `://`, otherwise a host
    #[default]
    SchemeOrHost,
    /// Scheme made of ASCII letters and digits
    Scheme,
    /// Host, optionally preceded by `://`
    Host,
    /// Port, optionally preceded by `:`
    Port,
    /// Path up to the next `?`
    Path,
    /// Everything after `?`
    Query,
    /// No more tokens
    Done,
}

use thiserror::Error;

/// Errors raised by the code emitter itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InjectError {
    /// The class name was blank after trimming and removing any `.java` suffix
    #[error("Classname must be a non empty string (got {0:?})")]
    InvalidTargetIdentifier(String),
}

/// Errors raised while decoding an escaped Java literal body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("dangling backslash at end of literal")]
    DanglingBackslash,

    #[error("unknown escape sequence '\\{0}' at offset {1}")]
    UnknownEscape(char, usize),

    #[error("malformed unicode escape at offset {0}")]
    MalformedUnicode(usize),

    #[error("unescaped '{0}' at offset {1}")]
    UnescapedCharacter(char, usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an input line.
pub enum TokenizeError {
    /// Found a character that does not start any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input line.
        position:  usize,
    },
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },
        }
    }
}

impl std::error::Error for TokenizeError {}

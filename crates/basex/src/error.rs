#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("alphabet symbol {0:?} is ambiguous")]
    AmbiguousSymbol(char),
    #[error("alphabet symbol {0:?} does not fit in a single byte")]
    UnsupportedSymbol(char),
    #[error("alphabet has {0} symbols, at least 2 are required")]
    TooFewSymbols(usize),
}

/// Decoding stops at the first offense; no partial output is produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("non-base{radix} character {character:?}")]
    InvalidCharacter { character: char, radix: usize },
    #[error("base{radix} string starts with a space")]
    LeadingSpace { radix: usize },
    #[error("trailing space after base{radix} symbol run")]
    TrailingSpace { radix: usize },
}

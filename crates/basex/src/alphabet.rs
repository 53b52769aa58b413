//! Radix alphabet tables, the shared read-only configuration of the
//! encoder and decoder.

use crate::error::AlphabetError;
use std::{
    fmt::{self, Write},
    str::FromStr,
    sync::LazyLock,
};

/// Symbols of the Bitcoin flavor of base58.
pub const BASE58_BITCOIN: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Symbols of the Flickr flavor of base58.
pub const BASE58_FLICKR: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

static BASE58: LazyLock<Alphabet> =
    LazyLock::new(|| Alphabet::new(BASE58_BITCOIN).expect("the Bitcoin alphabet is unambiguous"));

/// Lookup tables for one radix-N alphabet.
///
/// Built once with [`Alphabet::new`] and never mutated afterwards, so a
/// table can serve any number of concurrent callers. Tables for distinct
/// alphabets coexist freely; nothing in the crate is process-global.
#[derive(Clone)]
pub struct Alphabet {
    /// Digit value to symbol code.
    pub(crate) symbols: Box<[u8]>,
    /// Symbol code to digit value. `None` marks codes outside the alphabet.
    reverse: [Option<u8>; 256],
    /// The symbol for digit value zero, standing in for leading zero bytes.
    pub(crate) leader: char,
    /// Expected encoded symbols per input byte, ln(256) / ln(N).
    pub(crate) symbols_per_byte: f64,
    /// Expected decoded bytes per input symbol, ln(N) / ln(256).
    pub(crate) bytes_per_symbol: f64,
}

impl Alphabet {
    /// Builds the table for a custom alphabet.
    ///
    /// The character at position `i` becomes the symbol for digit value
    /// `i`, and the first character doubles as the leader. Symbols must
    /// be unique and fit in a single byte.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let mut table = Vec::with_capacity(symbols.len());
        let mut reverse = [None; 256];
        for (value, ch) in symbols.chars().enumerate() {
            let Ok(code) = u8::try_from(u32::from(ch)) else {
                return Err(AlphabetError::UnsupportedSymbol(ch));
            };
            if reverse[usize::from(code)].is_some() {
                return Err(AlphabetError::AmbiguousSymbol(ch));
            }
            reverse[usize::from(code)] = Some(value as u8);
            table.push(code);
        }
        if table.len() < 2 {
            return Err(AlphabetError::TooFewSymbols(table.len()));
        }

        let radix = table.len() as f64;
        trace!(radix = table.len(), "built alphabet table");
        Ok(Self {
            leader: char::from(table[0]),
            symbols: table.into_boxed_slice(),
            reverse,
            symbols_per_byte: 256f64.ln() / radix.ln(),
            bytes_per_symbol: radix.ln() / 256f64.ln(),
        })
    }

    /// Shared table for the Bitcoin base58 alphabet.
    pub fn base58() -> &'static Self {
        &BASE58
    }

    /// Number of symbols in the alphabet.
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// The symbol standing in for a leading zero byte.
    pub fn leader(&self) -> char {
        self.leader
    }

    /// Symbol for `digit`. Callers guarantee `digit < N`.
    pub(crate) fn symbol(&self, digit: u8) -> char {
        char::from(self.symbols[usize::from(digit)])
    }

    /// Digit value of `ch`, if it is part of the alphabet.
    pub(crate) fn digit(&self, ch: char) -> Option<u8> {
        let code = u8::try_from(u32::from(ch)).ok()?;
        self.reverse[usize::from(code)]
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("radix", &self.radix())
            .field("symbols", &self.to_string())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &code in &self.symbols {
            f.write_char(char::from(code))?;
        }
        Ok(())
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Alphabet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Alphabet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::Deserialize;
        let symbols = <std::borrow::Cow<'_, str>>::deserialize(deserializer)?;
        Self::new(&symbols).map_err(serde::de::Error::custom)
    }
}

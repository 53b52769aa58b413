//! Symbol strings back to byte sequences, base-N to base-256.

use crate::{alphabet::Alphabet, digits, error::DecodeError};

impl Alphabet {
    /// Decodes `text` into the byte sequence it encodes.
    ///
    /// Each leading leader symbol becomes one zero byte; the rest of the
    /// run converts as a single big-endian number. The input must consist
    /// of alphabet symbols only. A leading space is rejected outright and
    /// a space after the symbol run is reported as trailing garbage; no
    /// other whitespace handling takes place.
    ///
    /// # Example
    ///
    /// ```
    /// let base58 = basex::Alphabet::base58();
    /// assert_eq!(base58.decode("ZiCa").unwrap(), b"abc");
    /// assert!(base58.decode("0 is not a symbol").is_err());
    /// ```
    pub fn decode(&self, text: &str) -> Result<Vec<u8>, DecodeError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        if text.starts_with(' ') {
            return Err(DecodeError::LeadingSpace { radix: self.radix() });
        }

        let zeros = text.chars().take_while(|&ch| ch == self.leader).count();
        let body = &text[zeros * self.leader.len_utf8()..];
        if body.is_empty() {
            return Ok(vec![0; zeros]);
        }

        let symbols = body.chars().count();
        let mut scratch = vec![0u8; digits::scratch_size(symbols, self.bytes_per_symbol)];
        let radix = self.radix() as u32;
        let mut significant = 0;
        for ch in body.chars() {
            if ch == ' ' {
                // The run ended early, so the caller handed over untrimmed input.
                return Err(DecodeError::TrailingSpace { radix: self.radix() });
            }
            let digit = self
                .digit(ch)
                .ok_or(DecodeError::InvalidCharacter { character: ch, radix: self.radix() })?;
            let Some(len) = digits::fold_digit(&mut scratch, significant, digit, radix, 256) else {
                panic!("scratch estimate fell short of {symbols} input symbols");
            };
            significant = len;
        }

        // Estimate slack shows up as zero bytes above the number.
        let bytes = &scratch[scratch.len() - significant..];
        let bytes = &bytes[bytes.iter().take_while(|&&byte| byte == 0).count()..];

        let mut out = vec![0u8; zeros];
        out.extend_from_slice(bytes);
        Ok(out)
    }

    /// [`decode`](Self::decode) for callers that branch on failure rather
    /// than inspect it. Same validation, absent result instead of an error.
    pub fn decode_unchecked(&self, text: &str) -> Option<Vec<u8>> {
        self.decode(text).ok()
    }
}

//! Byte sequences to symbol strings, base-256 to base-N.

use crate::{alphabet::Alphabet, digits};

impl Alphabet {
    /// Encodes `input` as a string over this alphabet.
    ///
    /// Leading zero bytes map one-to-one to leading leader symbols; the
    /// rest of the input converts as a single big-endian number. Interior
    /// zero bytes carry positional value and get no such guarantee.
    ///
    /// # Example
    ///
    /// ```
    /// let base58 = basex::Alphabet::base58();
    /// assert_eq!(base58.encode(b"abc"), "ZiCa");
    /// assert_eq!(base58.encode([0x00, 0x00, 0x01]), "112");
    /// ```
    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        if input.is_empty() {
            return String::new();
        }

        let zeros = input.iter().take_while(|&&byte| byte == 0).count();
        let tail = &input[zeros..];

        let mut scratch = vec![0u8; digits::scratch_size(tail.len(), self.symbols_per_byte)];
        let radix = self.radix() as u32;
        let mut significant = 0;
        for &byte in tail {
            let Some(len) = digits::fold_digit(&mut scratch, significant, byte, 256, radix) else {
                panic!("scratch estimate fell short of {} input bytes", tail.len());
            };
            significant = len;
        }

        // Estimate slack shows up as zero-value digits above the number.
        let digits = &scratch[scratch.len() - significant..];
        let digits = &digits[digits.iter().take_while(|&&digit| digit == 0).count()..];

        let mut out = String::with_capacity(zeros + digits.len());
        out.extend(std::iter::repeat_n(self.leader, zeros));
        out.extend(digits.iter().map(|&digit| self.symbol(digit)));
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::Alphabet;

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(Alphabet::base58().encode(b""), "");
    }

    #[test]
    fn bitcoin_vectors() {
        let base58 = Alphabet::base58();
        let vectors = [
            ("61", "2g"),
            ("626262", "a3gV"),
            ("636363", "aPEr"),
            ("73696d706c792061206c6f6e6720737472696e67", "2cFupjhnEsSn59qHXstmK2ffpLv2"),
            ("00eb15231dfceb60925886b67d065299925915aeb172c06647", "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
            ("516b6fcd0f", "ABnLTmg"),
            ("bf4f89001e670274dd", "3SEo3LWLoPntC"),
            ("572e4794", "3EFU7m"),
            ("ecac89cad93923c02321", "EJDM8drfXA6uyA"),
            ("10c8511e", "Rt5zm"),
            ("00000000000000000000", "1111111111"),
        ];
        for (input, expected) in vectors {
            let input = hex::decode(input).unwrap();
            assert_eq!(base58.encode(&input), expected, "input {input:02x?}");
        }
    }

    #[test]
    fn zero_bytes_become_leaders() {
        let base58 = Alphabet::base58();
        assert_eq!(base58.encode([0x00]), "1");
        assert_eq!(base58.encode([0x00, 0x00]), "11");
        assert_eq!(base58.encode([0x01]), "2");
        assert_eq!(base58.encode([0x00, 0x00, 0x01]), "112");
    }

    #[test]
    fn works_across_radixes() {
        let base2 = Alphabet::new("01").unwrap();
        assert_eq!(base2.encode([0x0f]), "1111");
        assert_eq!(base2.encode([0x00, 0x0f]), "01111");

        let base16 = Alphabet::new("0123456789abcdef").unwrap();
        assert_eq!(base16.encode([0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    }
}

//! Bit tapes encoded over a 64-symbol alphabet, 6 bits per character.
//!
//! Bits are stored most significant first. The text form is what ships in a dictionary
//! payload; offsets into it must stay byte-exact, so the encoding never changes.

use crate::DictionaryError;

/// Characters of the 6-bit encoding, indexed by value.
pub const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Bits carried by one encoded character.
pub const BITS_PER_CHAR: usize = 6;

fn decode_char(b: u8) -> Option<u8> {
    match b {
        b'A'..=b'Z' => Some(b - b'A'),
        b'a'..=b'z' => Some(b - b'a' + 26),
        b'0'..=b'9' => Some(b - b'0' + 52),
        b'-' => Some(62),
        b'_' => Some(63),
        _ => None,
    }
}

/// Number of characters needed to hold `bits` bits.
pub fn encoded_len(bits: usize) -> usize {
    bits.div_ceil(BITS_PER_CHAR)
}

/// Append-only bit sink producing the encoded text form.
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    bits: Vec<bool>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the low `n` bits of `value`, most significant first.
    pub fn write(&mut self, value: u32, n: usize) {
        debug_assert!(n <= 32);
        for i in (0..n).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Encode the bits, zero-padding the last character.
    pub fn finish(&self) -> String {
        self.bits
            .chunks(BITS_PER_CHAR)
            .map(|chunk| {
                let mut value = 0usize;
                for (i, &bit) in chunk.iter().enumerate() {
                    if bit {
                        value |= 1 << (BITS_PER_CHAR - 1 - i);
                    }
                }
                BASE64[value] as char
            })
            .collect()
    }
}

/// Read-only bit tape decoded from its text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    /// One 6-bit value per encoded character.
    chars: Vec<u8>,
}

impl BitString {
    pub fn decode(text: &str) -> Result<Self, DictionaryError> {
        let chars = text
            .bytes()
            .enumerate()
            .map(|(i, b)| {
                decode_char(b).ok_or_else(|| {
                    DictionaryError::InvalidPayload(format!(
                        "byte {b:#04x} at offset {i} is outside the bit alphabet"
                    ))
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Ok(Self { chars })
    }

    /// Length in bits (a multiple of 6).
    pub fn len(&self) -> usize {
        self.chars.len() * BITS_PER_CHAR
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Read `n <= 32` bits starting at bit `p`. Bits past the end read as 0.
    #[inline]
    pub fn get(&self, mut p: usize, mut n: usize) -> u32 {
        debug_assert!(n <= 32);
        let mut out: u64 = 0;
        while n > 0 {
            let offset = p % BITS_PER_CHAR;
            let avail = BITS_PER_CHAR - offset;
            let take = avail.min(n);
            let ch = self.chars.get(p / BITS_PER_CHAR).copied().unwrap_or(0) as u64;
            let bits = (ch >> (avail - take)) & ((1u64 << take) - 1);
            out = (out << take) | bits;
            p += take;
            n -= take;
        }
        out as u32
    }

    /// Number of set bits in `[p, p + n)`.
    #[inline]
    pub fn count(&self, mut p: usize, mut n: usize) -> u32 {
        let mut total = 0;
        while n > 0 {
            let take = n.min(32);
            total += self.get(p, take).count_ones();
            p += take;
            n -= take;
        }
        total
    }

    /// Number of set bits in `[0, x]`, by linear scan. The rank directory answers the
    /// same question in constant time.
    pub fn rank(&self, x: usize) -> u32 {
        self.count(0, x + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_pads_last_character() {
        let mut w = BitWriter::new();
        w.write(0b10, 2);
        assert_eq!(w.finish(), "g"); // 100000
        w.write(0b1111, 4);
        assert_eq!(w.finish(), "v"); // 101111
        w.write(1, 1);
        assert_eq!(w.finish(), "vg");
    }

    #[test]
    fn get_spans_character_boundaries() {
        let mut w = BitWriter::new();
        w.write(0x2AB, 10);
        w.write(0x1FFFF, 17);
        w.write(0, 3);
        w.write(0xDEAD_BEEF, 32);
        let bits = BitString::decode(&w.finish()).unwrap();
        assert_eq!(bits.get(0, 10), 0x2AB);
        assert_eq!(bits.get(10, 17), 0x1FFFF);
        assert_eq!(bits.get(27, 3), 0);
        assert_eq!(bits.get(30, 32), 0xDEAD_BEEF);
        assert_eq!(bits.get(3, 4), 0b0101);
    }

    #[test]
    fn count_and_rank_match_naive() {
        let mut w = BitWriter::new();
        let pattern: Vec<bool> = (0..200).map(|i| (i * 7 + i / 3) % 5 < 2).collect();
        for &b in &pattern {
            w.write(b as u32, 1);
        }
        let bits = BitString::decode(&w.finish()).unwrap();
        for x in 0..pattern.len() {
            let naive = pattern[..=x].iter().filter(|&&b| b).count() as u32;
            assert_eq!(bits.rank(x), naive, "rank({x})");
        }
        assert_eq!(bits.count(13, 0), 0);
    }

    #[test]
    fn decode_rejects_foreign_bytes() {
        assert!(BitString::decode("AZaz09-_").is_ok());
        assert!(matches!(
            BitString::decode("AB+C"),
            Err(DictionaryError::InvalidPayload(_))
        ));
    }

    #[test]
    fn reads_past_end_are_zero() {
        let bits = BitString::decode("_").unwrap();
        assert_eq!(bits.len(), 6);
        assert_eq!(bits.get(4, 4), 0b1100);
    }
}

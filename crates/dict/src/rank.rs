//! Two-level rank directory over the structural bits of a trie tape.
//!
//! Layout: for every 32-bit inner block the directory stores the count of set bits
//! since the start of the enclosing 1024-bit outer block (`L2_BITS` wide). The last
//! inner slot of each outer block instead stores the cumulative count from bit 0
//! (`l1_bits` wide). `rank` therefore costs at most two directory reads plus a
//! popcount over fewer than 32 data bits.

use crate::bits::{BitString, BitWriter};

/// Outer block size in bits.
pub const L1_SIZE: usize = 32 * 32;

/// Inner block size in bits.
pub const L2_SIZE: usize = 32;

/// Width of an inner count: enough to count up to `L1_SIZE`.
const L2_BITS: usize = 10;

/// `ceil(log2(n))`, 0 for `n <= 1`.
fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankDirectory {
    directory: BitString,
    num_bits: usize,
    l1_bits: usize,
    section_bits: usize,
}

impl RankDirectory {
    /// Encode the directory for the first `num_bits` bits of `data`.
    pub fn build(data: &BitString, num_bits: usize) -> String {
        let l1_bits = ceil_log2(num_bits);
        let mut out = BitWriter::new();
        let (mut p, mut i) = (0, 0);
        let (mut count1, mut count2) = (0u32, 0u32);

        while p + L2_SIZE <= num_bits {
            count2 += data.count(p, L2_SIZE);
            i += L2_SIZE;
            p += L2_SIZE;
            if i == L1_SIZE {
                count1 += count2;
                out.write(count1, l1_bits);
                count2 = 0;
                i = 0;
            } else {
                out.write(count2, L2_BITS);
            }
        }

        out.finish()
    }

    /// Number of directory bits `build` writes for `num_bits` indexed bits.
    pub fn encoded_bits(num_bits: usize) -> usize {
        let blocks = num_bits / L2_SIZE;
        let outer = blocks / (L1_SIZE / L2_SIZE);
        outer * ceil_log2(num_bits) + (blocks - outer) * L2_BITS
    }

    pub fn new(directory: BitString, num_bits: usize) -> Self {
        let l1_bits = ceil_log2(num_bits);
        Self {
            directory,
            num_bits,
            l1_bits,
            section_bits: (L1_SIZE / L2_SIZE - 1) * L2_BITS + l1_bits,
        }
    }

    /// Number of indexed bits.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Number of `which` bits in `data[0..=x]`.
    pub fn rank(&self, data: &BitString, which: bool, x: usize) -> usize {
        let ones = self.rank_ones(data, x);
        if which {
            ones
        } else {
            (x + 1).saturating_sub(ones)
        }
    }

    fn rank_ones(&self, data: &BitString, x: usize) -> usize {
        let mut rank = 0usize;
        let mut offset = x;
        let mut section_pos = 0usize;

        if offset >= L1_SIZE {
            section_pos = (offset / L1_SIZE) * self.section_bits;
            rank = self.directory.get(section_pos - self.l1_bits, self.l1_bits) as usize;
            offset %= L1_SIZE;
        }
        if offset >= L2_SIZE {
            section_pos += (offset / L2_SIZE) * L2_BITS;
            rank += self.directory.get(section_pos - L2_BITS, L2_BITS) as usize;
        }

        rank + data.count(x - x % L2_SIZE, x % L2_SIZE + 1) as usize
    }

    /// Position of the `y`-th (1-based) `which` bit, if there is one.
    pub fn select(&self, data: &BitString, which: bool, y: usize) -> Option<usize> {
        // Binary search for the first position whose rank reaches `y`.
        let (mut low, mut high) = (-1i64, self.num_bits as i64);
        let mut found = None;
        while high - low > 1 {
            let mid = (high + low) / 2;
            let r = self.rank(data, which, mid as usize);
            if r == y {
                found = Some(mid as usize);
                high = mid;
            } else if r < y {
                low = mid;
            } else {
                high = mid;
            }
        }
        found
    }
}

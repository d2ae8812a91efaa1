//! G.711 Lookup Tables
//!
//! Pre-computed tables for both laws, built once from the reference
//! functions on first use. The encode table covers every 16-bit input
//! (64KB per law) and the decode table every 8-bit code.

use crate::codecs::g711::reference::{alaw_compress, alaw_expand, ulaw_compress, ulaw_expand};
use std::sync::LazyLock;

struct LawTable {
    /// Indexed by `sample - i16::MIN`
    encode: Box<[u8]>,
    decode: [i16; 256],
}

impl LawTable {
    fn build(compress: fn(i16) -> u8, expand: fn(u8) -> i16) -> Self {
        Self {
            encode: (i16::MIN..=i16::MAX).map(compress).collect(),
            decode: std::array::from_fn(|code| expand(code as u8)),
        }
    }

    #[inline]
    fn compress(&self, sample: i16) -> u8 {
        self.encode[(i32::from(sample) - i32::from(i16::MIN)) as usize]
    }

    #[inline]
    fn expand(&self, code: u8) -> i16 {
        self.decode[code as usize]
    }
}

static ALAW_TABLE: LazyLock<LawTable> = LazyLock::new(|| LawTable::build(alaw_compress, alaw_expand));

static MULAW_TABLE: LazyLock<LawTable> = LazyLock::new(|| LawTable::build(ulaw_compress, ulaw_expand));

/// Force both tables to be built
pub fn init_tables() {
    LazyLock::force(&ALAW_TABLE);
    LazyLock::force(&MULAW_TABLE);
}

/// Fast A-law compression using lookup table
#[inline]
pub fn alaw_compress_table(sample: i16) -> u8 {
    ALAW_TABLE.compress(sample)
}

/// Fast A-law expansion using lookup table
#[inline]
pub fn alaw_expand_table(code: u8) -> i16 {
    ALAW_TABLE.expand(code)
}

/// Fast μ-law compression using lookup table
#[inline]
pub fn mulaw_compress_table(sample: i16) -> u8 {
    MULAW_TABLE.compress(sample)
}

/// Fast μ-law expansion using lookup table
#[inline]
pub fn mulaw_expand_table(code: u8) -> i16 {
    MULAW_TABLE.expand(code)
}

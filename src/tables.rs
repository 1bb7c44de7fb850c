//! Process-wide lookup tables, built at compile time. `const` items cannot be
//! observed partially initialized, so concurrent first access needs no
//! synchronization.

pub(crate) const DEBRUIJN_LSB: u32 = 0x077C_B531;
pub(crate) const DEBRUIJN_MSB: u32 = 0x07C4_ACDD;

pub(crate) const LOG2_BYTE: [u8; 256] = build_log2_byte();
pub(crate) const DEBRUIJN_LSB_INDEX: [u8; 32] = build_debruijn_lsb_index();
pub(crate) const DEBRUIJN_MSB_INDEX: [u8; 32] = build_debruijn_msb_index();
pub(crate) const REVERSE_BYTE: [u8; 256] = build_reverse_byte();

const fn build_log2_byte() -> [u8; 256] {
    // LOG2_BYTE[0] stays 0, the documented sentinel.
    let mut table = [0u8; 256];
    let mut byte = 1usize;
    while byte < 256 {
        table[byte] = 7 - (byte as u8).leading_zeros() as u8;
        byte += 1;
    }
    table
}

// Both De Bruijn tables are derived from their constants here, so table and
// constant cannot drift apart.
const fn build_debruijn_lsb_index() -> [u8; 32] {
    let mut table = [0u8; 32];
    let mut bit = 0u32;
    while bit < 32 {
        let isolated = 1u32 << bit;
        table[(isolated.wrapping_mul(DEBRUIJN_LSB) >> 27) as usize] = bit as u8;
        bit += 1;
    }
    table
}

const fn build_debruijn_msb_index() -> [u8; 32] {
    let mut table = [0u8; 32];
    let mut bit = 0u32;
    while bit < 32 {
        // A value whose highest set bit is `bit` right-folds to this mask.
        let folded = ((1u64 << (bit + 1)) - 1) as u32;
        table[(folded.wrapping_mul(DEBRUIJN_MSB) >> 27) as usize] = bit as u8;
        bit += 1;
    }
    table
}

const fn build_reverse_byte() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut byte = 0usize;
    while byte < 256 {
        table[byte] = (byte as u8).reverse_bits();
        byte += 1;
    }
    table
}

/// Index of the set bit of `isolated`, which must hold exactly one set bit.
#[inline]
pub(crate) fn debruijn_lsb_index(isolated: u32) -> u32 {
    u32::from(DEBRUIJN_LSB_INDEX[(isolated.wrapping_mul(DEBRUIJN_LSB) >> 27) as usize])
}

/// Index of the highest set bit of `word`. `word == 0` hashes to slot 0,
/// which holds 0, so the result doubles as the `log2(0) == 0` sentinel.
#[inline]
pub(crate) fn debruijn_msb_index(word: u32) -> u32 {
    let mut folded = word;
    folded |= folded >> 1;
    folded |= folded >> 2;
    folded |= folded >> 4;
    folded |= folded >> 8;
    folded |= folded >> 16;
    u32::from(DEBRUIJN_MSB_INDEX[(folded.wrapping_mul(DEBRUIJN_MSB) >> 27) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log2_byte_brackets_every_byte() {
        assert_eq!(LOG2_BYTE[0], 0);
        assert_eq!(LOG2_BYTE[1], 0);
        assert_eq!(LOG2_BYTE[2], 1);
        assert_eq!(LOG2_BYTE[3], 1);
        assert_eq!(LOG2_BYTE[128], 7);
        assert_eq!(LOG2_BYTE[255], 7);
        for byte in 1usize..256 {
            let log = LOG2_BYTE[byte] as usize;
            assert!(1 << log <= byte);
            assert!(byte < 1 << (log + 1));
        }
    }

    #[test]
    fn debruijn_hashes_are_perfect() {
        for bit in 0..32u32 {
            assert_eq!(debruijn_lsb_index(1u32 << bit), bit);
            assert_eq!(debruijn_msb_index(1u32 << bit), bit);
            assert_eq!(debruijn_msb_index(u32::MAX >> (31 - bit)), bit);
        }
    }

    #[test]
    fn msb_index_of_zero_is_the_sentinel() {
        assert_eq!(debruijn_msb_index(0), 0);
    }

    #[test]
    fn byte_reversal_is_involutive() {
        assert_eq!(REVERSE_BYTE[0x01], 0x80);
        assert_eq!(REVERSE_BYTE[0x80], 0x01);
        assert_eq!(REVERSE_BYTE[0xF0], 0x0F);
        for byte in 0usize..256 {
            assert_eq!(REVERSE_BYTE[REVERSE_BYTE[byte] as usize] as usize, byte);
        }
    }
}

//! Bit reflection helpers.
//!
//! Input reflection goes through a 256 entry lookup table, output reflection
//! works on the whole register and is not limited to machine word sizes.

/// Widest register the engine supports.
pub const MAX_WIDTH: u32 = u128::BITS;

const fn build_byte_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = (i as u8).reverse_bits();
        i += 1;
    }
    table
}

/// Bit-reversed form of every byte value, indexed by the byte.
pub static REFLECT_BYTE_TABLE: [u8; 256] = build_byte_table();

/// Reverses the 8 bits of `byte`.
#[inline]
pub fn reflect_byte(byte: u8) -> u8 {
    REFLECT_BYTE_TABLE[byte as usize]
}

/// All bits of a `width` bit register set.
///
/// `width` must be in `1..=128`.
#[inline]
pub fn width_mask(width: u32) -> u128 {
    let top_bit = 1u128 << (width - 1);
    ((top_bit - 1) << 1) | 1
}

/// Reverses the low `width` bits of `value`.
///
/// Bits above `width` are dropped, so the result always fits in `width` bits.
/// A `width` of zero yields zero.
pub fn reflect_bits(width: u32, value: u128) -> u128 {
    if width == 0 {
        return 0;
    }
    let width = width.min(MAX_WIDTH);
    (value & width_mask(width)).reverse_bits() >> (MAX_WIDTH - width)
}

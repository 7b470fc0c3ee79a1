/// BCH(15,5) generator for format info: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u32 = 0x537;
/// BCH(18,6) generator for version info: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
pub const VERSION_GENERATOR: u32 = 0x1f25;

/// Remainder of `word` divided by `generator` over GF(2).
///
/// `check_bits` is the generator degree; every set bit at or above it is
/// cleared by XORing the generator aligned to that bit, high to low.
pub fn remainder(word: u32, generator: u32, check_bits: u32) -> u32 {
    let mut rem = word;
    for i in (check_bits..u32::BITS).rev() {
        if rem & (1 << i) != 0 {
            rem ^= generator << (i - check_bits);
        }
    }
    rem
}

/// Append the BCH remainder to `data`, giving a systematic codeword
pub fn encode(data: u32, generator: u32, check_bits: u32) -> u32 {
    let info = data << check_bits;
    info | remainder(info, generator, check_bits)
}

/// True if `codeword` is a multiple of `generator`
pub fn is_codeword(codeword: u32, generator: u32, check_bits: u32) -> bool {
    remainder(codeword, generator, check_bits) == 0
}

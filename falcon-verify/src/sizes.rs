//! Encoded sizes of Falcon public keys and signatures.
//!
//! These are const translations of the size macros in the reference
//! implementation's `falcon.h`; all take the degree exponent `logn` in
//! `[1, 10]` and return a size in bytes.

/// Encoded public key size: one header byte plus `n` coefficients packed at
/// 14 bits each (897 bytes for Falcon-512, 1793 for Falcon-1024).
pub const fn pubkey_size(logn: u8) -> usize {
    if logn <= 1 {
        5
    } else {
        ((7u32 << (logn - 2)) + 1) as usize
    }
}

/// Maximum size of a compressed-format signature. The compressed encoding is
/// variable-length; this is the worst case the entropy coder can produce.
pub const fn sig_compressed_maxsize(logn: u8) -> usize {
    (((((11u32 << logn) + (101u32 >> (10 - logn))) + 7) >> 3) + 41) as usize
}

/// Exact size of a padded-format signature (666 bytes for Falcon-512, 1280 for
/// Falcon-1024).
pub const fn sig_padded_size(logn: u8) -> usize {
    let shift = 10 - logn as u32;
    (44 + 3 * (256 >> shift) + 2 * (128 >> shift) + 3 * (64 >> shift) + 2 * (16 >> shift)
        - 2 * (2 >> shift)
        - 8 * (1 >> shift)) as usize
}

/// Exact size of a constant-time-format signature (809 bytes for Falcon-512).
pub const fn sig_ct_size(logn: u8) -> usize {
    let base = 3u32 << (logn - 1);
    let adj = if logn == 3 { 1 } else { 0 };
    (base - adj + 41) as usize
}

/// Width in bits of a constant-time signature coefficient, indexed by `logn`
/// (the reference implementation's `max_sig_bits` table).
pub(crate) const fn max_sig_bits(logn: u8) -> u32 {
    const MAX_SIG_BITS: [u8; 11] = [0, 10, 11, 11, 12, 12, 12, 12, 12, 12, 12];
    MAX_SIG_BITS[logn as usize] as u32
}

// TESTS
// ================================================================================================

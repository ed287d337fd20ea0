use alloc::vec::Vec;

use sha3::{
    Shake256,
    digest::{ExtendableOutput, Update, XofReader},
};

use crate::{
    MAX_LOGN, MIN_LOGN, MODULUS,
    math::{FalconFelt, Polynomial},
    signature::Nonce,
};

// Draws are accepted below 5q; this is the largest multiple of q that fits in
// 16 bits, so reducing an accepted draw modulo q yields a uniform coefficient.
const SAMPLE_BOUND: u32 = 5 * MODULUS as u32;

/// Hashes a salted message to a point of `Z_q[x]/(x^n + 1)` with SHAKE256, as
/// specified for Falcon.
///
/// The XOF absorbs the nonce followed by the message, then 16-bit big-endian
/// draws are squeezed and rejection-sampled until `n = 2^logn` coefficients
/// have been produced.
pub fn hash_to_point(nonce: &Nonce, message: &[u8], logn: u8) -> Polynomial<FalconFelt> {
    hash_to_point_with::<Shake256>(nonce, message, logn)
}

/// Same as [`hash_to_point`] with a caller-chosen extendable-output function.
pub fn hash_to_point_with<X>(nonce: &Nonce, message: &[u8], logn: u8) -> Polynomial<FalconFelt>
where
    X: Default + Update + ExtendableOutput,
{
    debug_assert!((MIN_LOGN..=MAX_LOGN).contains(&logn));
    let n = 1_usize << logn;

    let mut hasher = X::default();
    hasher.update(nonce.as_bytes());
    hasher.update(message);
    let mut reader = hasher.finalize_xof();

    let mut coefficients = Vec::with_capacity(n);
    let mut buf = [0_u8; 2];
    while coefficients.len() < n {
        reader.read(&mut buf);
        let draw = u32::from(u16::from_be_bytes(buf));
        if draw < SAMPLE_BOUND {
            coefficients.push(FalconFelt::new((draw % MODULUS as u32) as u16));
        }
    }

    Polynomial::new(coefficients)
}

// TESTS
// ================================================================================================

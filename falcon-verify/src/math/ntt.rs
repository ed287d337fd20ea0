//! Number theoretic transform over `Z_q`, `q = 12289`.
//!
//! Multiplication in `Z_q[x]/(x^n + 1)` is negacyclic, so the plain cyclic NTT
//! does not apply directly. The standard trick is to pre-scale the inputs by
//! powers of a primitive 2n-th root of unity `psi` (whose square is the n-th
//! root used by the cyclic transform) and post-scale the inverse transform, at
//! which point pointwise multiplication in the transformed domain computes the
//! product modulo `x^n + 1` without any explicit reduction.

use num::One;

use super::FalconFelt;

// 7 is a primitive 2048-th root of unity modulo 12289, large enough for the
// maximum ring dimension n = 1024.
const PSI_2048: u16 = 7;
const PSI_2048_ORDER: u32 = 2048;

/// Returns a primitive 2n-th root of unity for the given ring dimension.
fn psi(n: usize) -> FalconFelt {
    debug_assert!(n.is_power_of_two() && n <= (PSI_2048_ORDER / 2) as usize);
    FalconFelt::new(PSI_2048).exp(PSI_2048_ORDER / (2 * n as u32))
}

fn bit_reverse(mut value: usize, bits: u32) -> usize {
    let mut result = 0;
    for _ in 0..bits {
        result = (result << 1) | (value & 1);
        value >>= 1;
    }
    result
}

/// In-place iterative cyclic NTT (Cooley-Tukey, bit-reversed input order).
fn cyclic(values: &mut [FalconFelt], omega: FalconFelt) {
    let n = values.len();
    let bits = n.trailing_zeros();

    for i in 0..n {
        let j = bit_reverse(i, bits);
        if i < j {
            values.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let wlen = omega.exp((n / len) as u32);
        for chunk in values.chunks_mut(len) {
            let mut w = FalconFelt::one();
            for k in 0..len / 2 {
                let even = chunk[k];
                let odd = chunk[k + len / 2] * w;
                chunk[k] = even + odd;
                chunk[k + len / 2] = even - odd;
                w *= wlen;
            }
        }
        len <<= 1;
    }
}

/// Maps a polynomial of `Z_q[x]/(x^n + 1)` to the NTT domain: the i-th output
/// is the evaluation at `psi^(2i + 1)`.
pub(crate) fn forward(coefficients: &mut [FalconFelt]) {
    let n = coefficients.len();
    let psi = psi(n);

    let mut scale = FalconFelt::one();
    for c in coefficients.iter_mut() {
        *c *= scale;
        scale *= psi;
    }

    cyclic(coefficients, psi * psi);
}

/// Inverse of [`forward`]: recovers the coefficients from the NTT domain.
pub(crate) fn inverse(values: &mut [FalconFelt]) {
    let n = values.len();
    let psi_inv = psi(n).inverse_or_zero();
    let n_inv = FalconFelt::new(n as u16).inverse_or_zero();

    cyclic(values, psi_inv * psi_inv);

    let mut scale = n_inv;
    for v in values.iter_mut() {
        *v *= scale;
        scale *= psi_inv;
    }
}

/// Pointwise product of two polynomials in the NTT domain.
pub(crate) fn hadamard(a: &mut [FalconFelt], b: &[FalconFelt]) {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter_mut().zip(b.iter()) {
        *x *= *y;
    }
}

// TESTS
// ================================================================================================

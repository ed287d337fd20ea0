use alloc::vec::Vec;
use core::ops::{Add, Sub};

use super::{FalconFelt, forward, hadamard, inverse};

// POLYNOMIAL
// ================================================================================================

/// A polynomial over `Z_q`, identified with an element of `Z_q[x]/(x^n + 1)`
/// when its length is the ring dimension n.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<F> {
    pub coefficients: Vec<F>,
}

impl<F> Polynomial<F> {
    pub fn new(coefficients: Vec<F>) -> Self {
        Self { coefficients }
    }
}

impl Polynomial<FalconFelt> {
    /// Multiplies two polynomials modulo `x^n + 1` via the NTT. Both operands
    /// must have the same length, a power of two.
    pub fn mul_mod_phi(&self, other: &Self) -> Self {
        debug_assert_eq!(self.coefficients.len(), other.coefficients.len());
        let mut lhs = self.coefficients.clone();
        let mut rhs = other.coefficients.clone();
        forward(&mut lhs);
        forward(&mut rhs);
        hadamard(&mut lhs, &rhs);
        inverse(&mut lhs);
        Polynomial::new(lhs)
    }

    /// Squared Euclidean norm over the balanced representatives of the
    /// coefficients. Fits in a u64 for all supported dimensions, since each
    /// term is at most (q/2)^2 and n <= 1024.
    pub fn norm_squared(&self) -> u64 {
        self.coefficients
            .iter()
            .map(|c| {
                let b = c.balanced_value() as i64;
                (b * b) as u64
            })
            .sum()
    }
}

impl Add for &Polynomial<FalconFelt> {
    type Output = Polynomial<FalconFelt>;

    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.coefficients.len(), rhs.coefficients.len());
        Polynomial::new(
            self.coefficients
                .iter()
                .zip(rhs.coefficients.iter())
                .map(|(a, b)| *a + *b)
                .collect(),
        )
    }
}

impl Sub for &Polynomial<FalconFelt> {
    type Output = Polynomial<FalconFelt>;

    fn sub(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.coefficients.len(), rhs.coefficients.len());
        Polynomial::new(
            self.coefficients
                .iter()
                .zip(rhs.coefficients.iter())
                .map(|(a, b)| *a - *b)
                .collect(),
        )
    }
}

impl From<&[i16]> for Polynomial<FalconFelt> {
    fn from(coefficients: &[i16]) -> Self {
        Polynomial::new(coefficients.iter().map(|&c| FalconFelt::from(c)).collect())
    }
}

// TESTS
// ================================================================================================

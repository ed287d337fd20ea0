use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{One, Zero};

use super::MODULUS;

// MONTGOMERY ARITHMETIC
// ================================================================================================
// Branchless arithmetic over Z/qZ, q = 12289, following the `mq_*` helpers of
// rust-fn-dsa (https://github.com/pornin/rust-fn-dsa, fn-dsa-comm/src/mq.rs).
//
// Field elements are stored in the internal representation [1, q], where zero
// is represented as q; this avoids a conditional branch in the Montgomery
// reduction. The external representation [0, q-1] is what the rest of the
// crate (and the wire format) uses, and the balanced representation
// [-(q-1)/2, (q-1)/2] is what norm computations use: signature coefficients
// are "small", and -1 must not be mistaken for 12288.

const Q: u32 = MODULUS as u32;

// -1/q mod 2^32
const Q1I: u32 = 4143984639;

// 2^64 mod q (R^2 mod q, where R = 2^32)
const R2: u32 = 5664;

/// Addition modulo q (internal representation [1,q]).
#[inline(always)]
fn mq_add(x: u32, y: u32) -> u32 {
    let a = Q.wrapping_sub(x + y);
    let b = a.wrapping_add(Q & (a >> 16));
    Q - b
}

/// Subtraction modulo q (internal representation [1,q]).
#[inline(always)]
fn mq_sub(x: u32, y: u32) -> u32 {
    let a = y.wrapping_sub(x);
    let b = a.wrapping_add(Q & (a >> 16));
    Q - b
}

/// Montgomery reduction: x/2^32 mod q. Input must satisfy 1 <= x <= 3489673216.
#[inline(always)]
fn mq_mred(x: u32) -> u32 {
    let b = x.wrapping_mul(Q1I);
    let c = (b >> 16) * Q;
    (c >> 16) + 1
}

/// Montgomery multiplication modulo q (internal representation [1,q]).
#[inline(always)]
fn mq_mmul(x: u32, y: u32) -> u32 {
    mq_mred(x * y)
}

/// Division modulo q (internal representation [1,q]). Returns 0 if the divisor
/// is 0.
fn mq_div(x: u32, y: u32) -> u32 {
    // Convert y to Montgomery representation, then compute 1/y = y^(q-2) using
    // an addition chain for q - 2 = 12287.
    let y = mq_mmul(y, R2);
    let y2 = mq_mmul(y, y);
    let y3 = mq_mmul(y2, y);
    let y5 = mq_mmul(y3, y2);
    let y10 = mq_mmul(y5, y5);
    let y20 = mq_mmul(y10, y10);
    let y40 = mq_mmul(y20, y20);
    let y80 = mq_mmul(y40, y40);
    let y160 = mq_mmul(y80, y80);
    let y163 = mq_mmul(y160, y3);
    let y323 = mq_mmul(y163, y160);
    let y646 = mq_mmul(y323, y323);
    let y1292 = mq_mmul(y646, y646);
    let y1455 = mq_mmul(y1292, y163);
    let y2910 = mq_mmul(y1455, y1455);
    let y5820 = mq_mmul(y2910, y2910);
    let y6143 = mq_mmul(y5820, y323);
    let y12286 = mq_mmul(y6143, y6143);
    let iy = mq_mmul(y12286, y);

    mq_mmul(x, iy)
}

/// Converts a signed integer to the external representation [0, q-1].
#[inline(always)]
fn signed_to_external(value: i32) -> u16 {
    let x = value as u32;
    (x.wrapping_add((x >> 16) & Q)) as u16
}

// FALCON FIELD ELEMENT
// ================================================================================================

/// An element of Z/qZ, q = 12289, stored in internal representation [1, q].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FalconFelt(u16);

impl FalconFelt {
    /// Creates a field element from a value in external representation
    /// [0, q-1].
    pub const fn new(value: u16) -> Self {
        // Branchless external -> internal conversion: 0 maps to q, everything
        // else is unchanged.
        let x = value as u32;
        let internal = (x + (Q & (x.wrapping_sub(1) >> 16))) as u16;
        FalconFelt(internal)
    }

    /// Returns the value in external representation [0, q-1].
    pub const fn value(&self) -> u16 {
        let x = (self.0 as u32).wrapping_sub(Q);
        (x.wrapping_add(Q & (x >> 16))) as u16
    }

    /// Returns the balanced (centered) representative in
    /// [-(q-1)/2, (q-1)/2].
    pub fn balanced_value(&self) -> i16 {
        let v = self.value() as i16;
        let g = (v > (MODULUS / 2)) as i16;
        v - MODULUS * g
    }

    /// Raises this element to the given power by square-and-multiply.
    pub fn exp(self, mut exponent: u32) -> Self {
        let mut base = self;
        let mut result = FalconFelt::one();
        while exponent != 0 {
            if exponent & 1 != 0 {
                result = result * base;
            }
            base = base * base;
            exponent >>= 1;
        }
        result
    }

    /// Returns the multiplicative inverse, or zero for zero.
    pub fn inverse_or_zero(self) -> Self {
        FalconFelt(mq_div(1, self.0 as u32) as u16)
    }
}

impl Add for FalconFelt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        FalconFelt(mq_add(self.0 as u32, rhs.0 as u32) as u16)
    }
}

impl AddAssign for FalconFelt {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for FalconFelt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        FalconFelt(mq_sub(self.0 as u32, rhs.0 as u32) as u16)
    }
}

impl SubAssign for FalconFelt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for FalconFelt {
    type Output = FalconFelt;

    fn neg(self) -> Self::Output {
        // In internal representation negation is q - x, except that zero
        // (stored as q) stays q.
        let x = self.0 as u32;
        FalconFelt((Q - x + Q * ((x == Q) as u32)) as u16)
    }
}

impl Mul for FalconFelt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        // Two Montgomery multiplications: (x*y/R) * R^2 / R = x*y mod q.
        FalconFelt(mq_mmul(mq_mmul(self.0 as u32, rhs.0 as u32), R2) as u16)
    }
}

impl MulAssign for FalconFelt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Zero for FalconFelt {
    fn zero() -> Self {
        FalconFelt::new(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == Q as u16
    }
}

impl One for FalconFelt {
    fn one() -> Self {
        FalconFelt::new(1)
    }
}

impl From<i16> for FalconFelt {
    fn from(value: i16) -> Self {
        FalconFelt::new(signed_to_external(value as i32))
    }
}

// TESTS
// ================================================================================================

//! Arithmetic in the Falcon ring `Z_q[x]/(x^n + 1)`, `q = 12289`.

pub(crate) use crate::MODULUS;

mod field;
pub use field::FalconFelt;

mod ntt;
pub(crate) use ntt::{forward, hadamard, inverse};

mod polynomial;
pub use polynomial::Polynomial;

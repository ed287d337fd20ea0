//! Verification of Falcon (FN-DSA) lattice-based signatures.
//!
//! Falcon signatures live in the ring `Z_q[x]/(x^n + 1)` with `q = 12289` and
//! `n = 2^logn` for `logn` in `[1, 10]` (Falcon-512 is `logn = 9`, Falcon-1024
//! is `logn = 10`). A signature is a pair of short polynomials `(s1, s2)` such
//! that `s1 = c - s2 * h` where `h` is the public key polynomial and `c` is the
//! hash-to-point of the salted message. Only `s2` is transmitted; the verifier
//! recomputes `s1` and accepts iff the squared norm of `(s1, s2)` is below the
//! acceptance bound for `logn`.
//!
//! This crate implements verification only: the self-describing byte encodings
//! of public keys and the three signature serializations (compressed, padded,
//! constant-time), SHAKE256-based hash-to-point, and the NTT-backed ring
//! arithmetic needed to recompute `s1`. Key generation and signing are out of
//! scope.
//!
//! The main entry point is [`verify`], which mirrors the classic C API:
//!
//! ```
//! use falcon_verify::{Outcome, verify};
//!
//! // An empty public key is a format defect, not an invalid signature.
//! let outcome = verify(&[0u8; 42], 0, &[], b"message");
//! assert_eq!(outcome, Outcome::InvalidFormat);
//! assert_eq!(outcome.code(), -3);
//! ```
//!
//! It uses and acknowledges the work in:
//!
//! 1. The [reference](https://falcon-sign.info/impl/README.txt.html) implementation by Thomas
//!    Pornin.
//! 2. The [Rust](https://github.com/aszepieniec/falcon-rust) implementation by Alan Szepieniec.

#![no_std]

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod hash_to_point;
mod keys;
pub mod math;
mod signature;
mod sizes;
mod verification;

pub use error::{Outcome, VerifyError};
pub use hash_to_point::{hash_to_point, hash_to_point_with};
pub use keys::PublicKey;
pub use math::{FalconFelt, Polynomial};
pub use signature::{Nonce, Signature, SignatureType};
pub use sizes::{pubkey_size, sig_compressed_maxsize, sig_ct_size, sig_padded_size};
pub use verification::{verify, verify_with_type};

// CONSTANTS
// ================================================================================================

// The Falcon modulus q.
const MODULUS: i16 = 12289;

// Number of bits needed to encode a public key coefficient in [0, q).
const FALCON_ENCODING_BITS: u32 = 14;

/// Smallest supported degree exponent (ring dimension n = 2).
pub const MIN_LOGN: u8 = 1;

/// Largest supported degree exponent (ring dimension n = 1024).
pub const MAX_LOGN: u8 = 10;

/// Length of the nonce carried in every signature.
pub const SIG_NONCE_LEN: usize = 40;

/// Signature framing overhead: one header byte plus the nonce. Every signature
/// must be strictly longer than this.
pub const SIG_HEADER_LEN: usize = 1 + SIG_NONCE_LEN;

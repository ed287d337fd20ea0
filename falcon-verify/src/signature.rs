use alloc::vec::Vec;

use crate::{
    SIG_HEADER_LEN, SIG_NONCE_LEN,
    error::VerifyError,
    math::{FalconFelt, Polynomial},
    sizes::{max_sig_bits, sig_ct_size, sig_padded_size},
};

// NONCE
// ================================================================================================

/// The 40-byte salt hashed together with the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nonce([u8; SIG_NONCE_LEN]);

impl Nonce {
    pub fn from_bytes(bytes: [u8; SIG_NONCE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SIG_NONCE_LEN] {
        &self.0
    }
}

// SIGNATURE TYPE
// ================================================================================================

/// Caller-declared signature serialization, mirroring the classic C API
/// constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureType {
    /// Accept either the compressed or the constant-time serialization, as
    /// announced by the signature header.
    Inferred = 0,
    /// Variable-length compressed serialization (header nibble 3).
    Compressed = 1,
    /// Compressed serialization padded to a fixed length (header nibble 3).
    Padded = 2,
    /// Fixed-width constant-time serialization (header nibble 5).
    ConstantTime = 3,
}

impl SignatureType {
    /// Maps a raw C-style type constant to a variant; anything outside `0..=3`
    /// is not a type at all.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Inferred),
            1 => Some(Self::Compressed),
            2 => Some(Self::Padded),
            3 => Some(Self::ConstantTime),
            _ => None,
        }
    }
}

// Resolved wire framing, after reconciling the declared type with the header
// byte.
enum Framing {
    Compressed { padded: bool },
    ConstantTime,
}

const HEADER_NIBBLE_COMPRESSED: u8 = 3;
const HEADER_NIBBLE_CT: u8 = 5;

// SIGNATURE
// ================================================================================================

/// A decoded Falcon signature: the nonce and the short polynomial `s2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    logn: u8,
    nonce: Nonce,
    s2: Polynomial<FalconFelt>,
}

impl Signature {
    /// Decodes a signature, enforcing the framing rules of the declared
    /// serialization and the degree exponent of the accompanying public key.
    ///
    /// A [`VerifyError::InvalidSignature`] is only produced by
    /// [`SignatureType::Inferred`] when the header announces neither known
    /// serialization; every other defect is a format error.
    pub fn decode(
        bytes: &[u8],
        declared: SignatureType,
        logn: u8,
    ) -> Result<Self, VerifyError> {
        if bytes.len() <= SIG_HEADER_LEN {
            return Err(VerifyError::InvalidFormat);
        }

        let header = bytes[0];
        let nibble = header >> 4;
        let framing = match declared {
            SignatureType::Inferred => match nibble {
                HEADER_NIBBLE_COMPRESSED => Framing::Compressed { padded: false },
                HEADER_NIBBLE_CT => Framing::ConstantTime,
                _ => return Err(VerifyError::InvalidSignature),
            },
            SignatureType::Compressed => {
                if nibble != HEADER_NIBBLE_COMPRESSED {
                    return Err(VerifyError::InvalidFormat);
                }
                Framing::Compressed { padded: false }
            },
            SignatureType::Padded => {
                if nibble != HEADER_NIBBLE_COMPRESSED {
                    return Err(VerifyError::InvalidFormat);
                }
                if bytes.len() != sig_padded_size(logn) {
                    return Err(VerifyError::InvalidFormat);
                }
                Framing::Compressed { padded: true }
            },
            SignatureType::ConstantTime => {
                if nibble != HEADER_NIBBLE_CT {
                    return Err(VerifyError::InvalidFormat);
                }
                Framing::ConstantTime
            },
        };

        if let Framing::ConstantTime = framing {
            if bytes.len() != sig_ct_size(logn) {
                return Err(VerifyError::InvalidFormat);
            }
        }

        if header & 0x0f != logn {
            return Err(VerifyError::InvalidFormat);
        }

        let mut nonce = [0_u8; SIG_NONCE_LEN];
        nonce.copy_from_slice(&bytes[1..SIG_HEADER_LEN]);

        let n = 1_usize << logn;
        let payload = &bytes[SIG_HEADER_LEN..];
        let coefficients = match framing {
            Framing::Compressed { padded } => comp_decode(payload, n, padded)?,
            Framing::ConstantTime => trim_decode(payload, n, max_sig_bits(logn))?,
        };

        Ok(Signature {
            logn,
            nonce: Nonce::from_bytes(nonce),
            s2: coefficients.as_slice().into(),
        })
    }

    pub fn logn(&self) -> u8 {
        self.logn
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// The short polynomial `s2` carried by the signature.
    pub fn sig_poly(&self) -> &Polynomial<FalconFelt> {
        &self.s2
    }
}

// CODECS
// ================================================================================================

/// Decodes n coefficients from the compressed (Golomb-Rice-like)
/// serialization: per coefficient one sign bit, seven low mantissa bits, then
/// a unary-coded high part terminated by a 1 bit.
///
/// With `padded` set, bytes left over after the last coefficient must all be
/// zero; otherwise the payload must be consumed exactly.
fn comp_decode(payload: &[u8], n: usize, padded: bool) -> Result<Vec<i16>, VerifyError> {
    let mut coefficients = Vec::with_capacity(n);
    let mut acc = 0_u32;
    let mut acc_len = 0_u32;
    let mut v = 0_usize;

    for _ in 0..n {
        if v >= payload.len() {
            return Err(VerifyError::InvalidFormat);
        }
        acc = (acc << 8) | payload[v] as u32;
        v += 1;
        let b = acc >> acc_len;
        let sign = b & 0x80 != 0;
        let mut m = b & 0x7f;

        loop {
            if acc_len == 0 {
                if v >= payload.len() {
                    return Err(VerifyError::InvalidFormat);
                }
                acc = (acc << 8) | payload[v] as u32;
                v += 1;
                acc_len = 8;
            }
            acc_len -= 1;
            if (acc >> acc_len) & 1 != 0 {
                break;
            }
            m += 128;
            if m > 2047 {
                return Err(VerifyError::InvalidFormat);
            }
        }

        // The encoding of -0 is forbidden; accepting it would make the
        // serialization malleable.
        if sign && m == 0 {
            return Err(VerifyError::InvalidFormat);
        }
        coefficients.push(if sign { -(m as i16) } else { m as i16 });
    }

    // Unused bits of the last consumed byte must be zero.
    if acc & ((1 << acc_len) - 1) != 0 {
        return Err(VerifyError::InvalidFormat);
    }

    if padded {
        if payload[v..].iter().any(|&b| b != 0) {
            return Err(VerifyError::InvalidFormat);
        }
    } else if v != payload.len() {
        return Err(VerifyError::InvalidFormat);
    }

    Ok(coefficients)
}

/// Decodes n coefficients from the constant-time serialization: fixed-width
/// `bits`-wide big-endian two's-complement fields. The most negative field
/// value is reserved and rejected.
fn trim_decode(payload: &[u8], n: usize, bits: u32) -> Result<Vec<i16>, VerifyError> {
    let needed = (n * bits as usize).div_ceil(8);
    if payload.len() != needed {
        return Err(VerifyError::InvalidFormat);
    }

    let mask1 = (1_u32 << bits) - 1;
    let mask2 = 1_u32 << (bits - 1);
    let mut coefficients = Vec::with_capacity(n);
    let mut acc = 0_u32;
    let mut acc_len = 0_u32;
    let mut v = 0_usize;

    for _ in 0..n {
        while acc_len < bits {
            acc = (acc << 8) | payload[v] as u32;
            v += 1;
            acc_len += 8;
        }
        acc_len -= bits;
        let w = (acc >> acc_len) & mask1;
        if w == mask2 {
            return Err(VerifyError::InvalidFormat);
        }
        let value = w as i32 - (((w & mask2) as i32) << 1);
        coefficients.push(value as i16);
    }

    if acc & ((1 << acc_len) - 1) != 0 {
        return Err(VerifyError::InvalidFormat);
    }

    Ok(coefficients)
}

// TESTS
// ================================================================================================

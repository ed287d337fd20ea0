use alloc::vec::Vec;

use crate::{
    FALCON_ENCODING_BITS, MAX_LOGN, MIN_LOGN, MODULUS,
    error::VerifyError,
    math::{FalconFelt, Polynomial},
    sizes::pubkey_size,
};

// PUBLIC KEY
// ================================================================================================

/// A decoded Falcon public key: the polynomial `h` together with the degree
/// exponent it was encoded for.
///
/// The serialized form is one header byte `0x0` || `logn` followed by the n
/// coefficients of `h` packed as 14-bit big-endian fields, zero-padded to a
/// whole number of bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    logn: u8,
    h: Polynomial<FalconFelt>,
}

impl PublicKey {
    /// Reads the degree exponent out of an encoded public key without decoding
    /// the coefficients.
    ///
    /// Fails if the key is empty, if the upper nibble of the header byte is
    /// not zero, or if the exponent falls outside `[MIN_LOGN, MAX_LOGN]`.
    pub(crate) fn parse_logn(bytes: &[u8]) -> Result<u8, VerifyError> {
        let header = bytes.first().ok_or(VerifyError::InvalidFormat)?;
        if header >> 4 != 0 {
            return Err(VerifyError::InvalidFormat);
        }
        let logn = header & 0x0f;
        if !(MIN_LOGN..=MAX_LOGN).contains(&logn) {
            return Err(VerifyError::InvalidFormat);
        }
        Ok(logn)
    }

    /// Decodes a public key from its serialized form.
    pub fn decode(bytes: &[u8]) -> Result<Self, VerifyError> {
        let logn = Self::parse_logn(bytes)?;
        if bytes.len() != pubkey_size(logn) {
            return Err(VerifyError::InvalidFormat);
        }

        let n = 1_usize << logn;
        let mut coefficients = Vec::with_capacity(n);
        let mut acc = 0_u32;
        let mut acc_len = 0_u32;
        for &byte in &bytes[1..] {
            acc = (acc << 8) | byte as u32;
            acc_len += 8;
            if acc_len >= FALCON_ENCODING_BITS && coefficients.len() < n {
                acc_len -= FALCON_ENCODING_BITS;
                let field = (acc >> acc_len) & ((1 << FALCON_ENCODING_BITS) - 1);
                if field >= MODULUS as u32 {
                    return Err(VerifyError::InvalidFormat);
                }
                coefficients.push(FalconFelt::new(field as u16));
            }
        }

        // Padding bits after the last coefficient must be zero.
        if acc & ((1 << acc_len) - 1) != 0 {
            return Err(VerifyError::InvalidFormat);
        }

        Ok(PublicKey { logn, h: Polynomial::new(coefficients) })
    }

    pub fn logn(&self) -> u8 {
        self.logn
    }

    pub fn polynomial(&self) -> &Polynomial<FalconFelt> {
        &self.h
    }
}

// TESTS
// ================================================================================================

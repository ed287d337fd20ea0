use thiserror::Error;

// VERIFICATION ERROR
// ================================================================================================

/// Error type shared by signature decoding and verification.
///
/// The three variants are deliberately coarse: they mirror the failure taxonomy
/// of the classic C API, where callers dispatch on a small stable set of codes
/// rather than on diagnostic detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Malformed or inconsistent byte framing of the public key or signature.
    ///
    /// This is never a statement about cryptographic validity: the bytes do not
    /// even constitute a well-formed encoding.
    #[error("malformed public key or signature encoding")]
    InvalidFormat,
    /// The bytes parse, but the signature fails the cryptographic check, or the
    /// header asserts a scheme variant this verifier does not support.
    #[error("signature verification failed")]
    InvalidSignature,
    /// The caller violated the parameter contract, independent of byte content.
    #[error("signature type is not one of the recognized values")]
    InvalidArgument,
}

// VERIFICATION OUTCOME
// ================================================================================================

/// Outcome of a verification call.
///
/// [`Outcome::code`] exposes the stable numeric codes used by legacy callers:
/// non-negative for a valid signature, -3/-4/-5 for the failure variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The signature is a valid proof of authorship under the public key.
    Valid,
    /// See [`VerifyError::InvalidFormat`].
    InvalidFormat,
    /// See [`VerifyError::InvalidSignature`].
    InvalidSignature,
    /// See [`VerifyError::InvalidArgument`].
    InvalidArgument,
}

impl Outcome {
    /// Returns the stable interchange code for this outcome.
    pub const fn code(self) -> i32 {
        match self {
            Outcome::Valid => 0,
            Outcome::InvalidFormat => -3,
            Outcome::InvalidSignature => -4,
            Outcome::InvalidArgument => -5,
        }
    }

    /// Returns true if the signature was accepted.
    pub const fn is_valid(self) -> bool {
        matches!(self, Outcome::Valid)
    }
}

impl From<VerifyError> for Outcome {
    fn from(error: VerifyError) -> Self {
        match error {
            VerifyError::InvalidFormat => Outcome::InvalidFormat,
            VerifyError::InvalidSignature => Outcome::InvalidSignature,
            VerifyError::InvalidArgument => Outcome::InvalidArgument,
        }
    }
}

impl From<Result<(), VerifyError>> for Outcome {
    fn from(result: Result<(), VerifyError>) -> Self {
        match result {
            Ok(()) => Outcome::Valid,
            Err(error) => error.into(),
        }
    }
}

// TESTS
// ================================================================================================

use crate::{
    error::{Outcome, VerifyError},
    hash_to_point::hash_to_point,
    keys::PublicKey,
    signature::{Signature, SignatureType},
};

// Acceptance bounds: floor(beta^2) for the signature norm, indexed by logn.
// These are the `l2bound` constants of the reference implementation.
const L2_BOUND: [u64; 11] = [
    0, // unused
    101498, 208714, 428865, 892039, 1852696, 3842630, 7959734, 16468416, 34034726, 70265242,
];

/// Verifies a Falcon signature over a message, reporting the outcome as a
/// C-style result code.
///
/// `signature_type` is the raw serialization constant (0 inferred,
/// 1 compressed, 2 padded, 3 constant-time); any other value yields
/// [`Outcome::InvalidArgument`] without looking at the other inputs.
pub fn verify(signature: &[u8], signature_type: u32, public_key: &[u8], message: &[u8]) -> Outcome {
    let Some(declared) = SignatureType::from_raw(signature_type) else {
        return Outcome::InvalidArgument;
    };
    verify_with_type(signature, declared, public_key, message).into()
}

/// Typed variant of [`verify`].
pub fn verify_with_type(
    signature: &[u8],
    signature_type: SignatureType,
    public_key: &[u8],
    message: &[u8],
) -> Result<(), VerifyError> {
    // The degree exponent comes from the public key header and must agree
    // with the one embedded in the signature header. Full decoding of the key
    // waits until the signature framing has been vetted.
    let logn = PublicKey::parse_logn(public_key)?;
    let signature = Signature::decode(signature, signature_type, logn)?;
    let public_key = PublicKey::decode(public_key)?;

    let c = hash_to_point(signature.nonce(), message, logn);
    let s2 = signature.sig_poly();
    let s1 = &c - &s2.mul_mod_phi(public_key.polynomial());

    let norm = s1.norm_squared() + s2.norm_squared();
    if norm > L2_BOUND[logn as usize] {
        return Err(VerifyError::InvalidSignature);
    }
    Ok(())
}

// TESTS
// ================================================================================================

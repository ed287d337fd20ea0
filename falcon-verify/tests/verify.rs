use falcon_verify::{Outcome, SignatureType, VerifyError, verify, verify_with_type};
use rstest::rstest;

// Raw C-style type constants, as callers of the numeric API pass them.
const SIG_INFERRED: u32 = 0;
const SIG_COMPRESSED: u32 = 1;
const SIG_PADDED: u32 = 2;
const SIG_CT: u32 = 3;

// A complete logn = 1 instance, built by hand so every byte is auditable:
// h = [9560, 9590], and with nonce = 0^40 and message "falcon" the
// hash-to-point is [9561, 9591]. The signature carries s2 = [1, 0], so
// s2 * h = h and s1 = c - h = [1, 1]; the squared norm is 3, far below the
// logn = 1 bound of 101498.
const PUBLIC_KEY: [u8; 5] = [0x01, 0x95, 0x62, 0x57, 0x60];
const MESSAGE: &[u8] = b"falcon";

fn compressed_sig() -> Vec<u8> {
    let mut sig = vec![0x31];
    sig.extend_from_slice(&[0u8; 40]);
    sig.extend_from_slice(&[0x01, 0x80, 0x40]);
    sig
}

fn ct_sig() -> Vec<u8> {
    let mut sig = vec![0x51];
    sig.extend_from_slice(&[0u8; 40]);
    sig.extend_from_slice(&[0x00, 0x40, 0x00]);
    sig
}

// VALID SIGNATURES
// ================================================================================================

#[rstest]
#[case::inferred(SIG_INFERRED)]
#[case::compressed(SIG_COMPRESSED)]
#[case::padded(SIG_PADDED)]
fn accepts_compressed_encoding(#[case] sig_type: u32) {
    let outcome = verify(&compressed_sig(), sig_type, &PUBLIC_KEY, MESSAGE);
    assert_eq!(outcome, Outcome::Valid);
    assert_eq!(outcome.code(), 0);
    assert!(outcome.is_valid());
}

#[rstest]
#[case::inferred(SIG_INFERRED)]
#[case::constant_time(SIG_CT)]
fn accepts_constant_time_encoding(#[case] sig_type: u32) {
    assert_eq!(verify(&ct_sig(), sig_type, &PUBLIC_KEY, MESSAGE), Outcome::Valid);
}

#[test]
fn typed_api_agrees_with_numeric_api() {
    assert_eq!(
        verify_with_type(&compressed_sig(), SignatureType::Inferred, &PUBLIC_KEY, MESSAGE),
        Ok(())
    );
    assert_eq!(
        verify_with_type(&ct_sig(), SignatureType::ConstantTime, &PUBLIC_KEY, MESSAGE),
        Ok(())
    );
}

// CRYPTOGRAPHIC REJECTION (-4)
// ================================================================================================

#[test]
fn rejects_tampered_signature_polynomial() {
    // Same framing, s2 = [2, 0] instead of [1, 0].
    let mut sig = compressed_sig();
    sig[41] = 0x02;
    let outcome = verify(&sig, SIG_INFERRED, &PUBLIC_KEY, MESSAGE);
    assert_eq!(outcome, Outcome::InvalidSignature);
    assert_eq!(outcome.code(), -4);
}

#[test]
fn rejects_tampered_nonce() {
    let mut sig = compressed_sig();
    sig[1] = 0x01;
    assert_eq!(verify(&sig, SIG_INFERRED, &PUBLIC_KEY, MESSAGE), Outcome::InvalidSignature);
}

#[test]
fn rejects_tampered_message() {
    assert_eq!(
        verify(&compressed_sig(), SIG_INFERRED, &PUBLIC_KEY, b"falcoN"),
        Outcome::InvalidSignature
    );
}

#[test]
fn inferred_rejects_unrecognized_header_nibble() {
    // Neither the compressed (3) nor the constant-time (5) marker. The header
    // asserts a serialization this verifier does not know, which is a
    // cryptographic rejection, not a framing defect.
    let mut sig = compressed_sig();
    sig[0] = 0x01;
    assert_eq!(verify(&sig, SIG_INFERRED, &PUBLIC_KEY, MESSAGE).code(), -4);

    // This holds even when the public key would itself fail full decoding.
    let mut sig = vec![0x0a];
    sig.extend_from_slice(&[0u8; 43]);
    assert_eq!(verify(&sig, SIG_INFERRED, &[0x09], MESSAGE).code(), -4);
}

// FORMAT REJECTION (-3)
// ================================================================================================

#[rstest]
#[case::empty_key(&[])]
#[case::bad_marker_nibble(&[0x19])]
#[case::logn_zero(&[0x00])]
#[case::logn_eleven(&[0x0b])]
fn rejects_bad_public_key_headers(#[case] public_key: &[u8]) {
    let outcome = verify(&compressed_sig(), SIG_INFERRED, public_key, MESSAGE);
    assert_eq!(outcome, Outcome::InvalidFormat);
    assert_eq!(outcome.code(), -3);
}

#[test]
fn rejects_truncated_public_key() {
    assert_eq!(
        verify(&compressed_sig(), SIG_INFERRED, &PUBLIC_KEY[..4], MESSAGE),
        Outcome::InvalidFormat
    );
}

#[test]
fn rejects_public_key_with_out_of_range_coefficient() {
    // First 14-bit field forced to 16383 >= q.
    let mut pk = PUBLIC_KEY;
    pk[1] = 0xff;
    pk[2] = 0xfc;
    assert_eq!(verify(&compressed_sig(), SIG_INFERRED, &pk, MESSAGE), Outcome::InvalidFormat);
}

#[rstest]
#[case::empty(0)]
#[case::header_only(1)]
#[case::header_and_nonce(41)]
fn rejects_too_short_signatures(#[case] len: usize) {
    let sig = vec![0x31; len];
    assert_eq!(verify(&sig, SIG_INFERRED, &PUBLIC_KEY, MESSAGE), Outcome::InvalidFormat);
}

#[test]
fn rejects_signature_key_degree_mismatch() {
    // Signature header says logn = 2, key says logn = 1.
    let mut sig = compressed_sig();
    sig[0] = 0x32;
    assert_eq!(verify(&sig, SIG_INFERRED, &PUBLIC_KEY, MESSAGE), Outcome::InvalidFormat);
}

#[test]
fn explicit_type_rejects_other_serialization() {
    assert_eq!(verify(&ct_sig(), SIG_COMPRESSED, &PUBLIC_KEY, MESSAGE), Outcome::InvalidFormat);
    assert_eq!(verify(&compressed_sig(), SIG_CT, &PUBLIC_KEY, MESSAGE), Outcome::InvalidFormat);
}

#[test]
fn padded_type_rejects_wrong_length() {
    let mut sig = compressed_sig();
    sig.push(0x00);
    assert_eq!(verify(&sig, SIG_PADDED, &PUBLIC_KEY, MESSAGE), Outcome::InvalidFormat);
}

#[test]
fn constant_time_type_rejects_wrong_length() {
    let mut sig = ct_sig();
    sig.push(0x00);
    assert_eq!(verify(&sig, SIG_CT, &PUBLIC_KEY, MESSAGE), Outcome::InvalidFormat);
    assert_eq!(verify(&sig, SIG_INFERRED, &PUBLIC_KEY, MESSAGE), Outcome::InvalidFormat);
}

#[test]
fn compressed_type_rejects_trailing_garbage() {
    // The compressed serialization must be consumed exactly.
    let mut sig = compressed_sig();
    sig.push(0x01);
    assert_eq!(verify(&sig, SIG_COMPRESSED, &PUBLIC_KEY, MESSAGE), Outcome::InvalidFormat);
}

#[test]
fn typed_api_reports_error_variants() {
    assert_eq!(
        verify_with_type(&compressed_sig(), SignatureType::Inferred, &[], MESSAGE),
        Err(VerifyError::InvalidFormat)
    );
    let mut sig = compressed_sig();
    sig[41] = 0x02;
    assert_eq!(
        verify_with_type(&sig, SignatureType::Inferred, &PUBLIC_KEY, MESSAGE),
        Err(VerifyError::InvalidSignature)
    );
}

// ARGUMENT REJECTION (-5)
// ================================================================================================

#[rstest]
#[case(4)]
#[case(7)]
#[case(u32::MAX)]
fn rejects_unknown_signature_type(#[case] sig_type: u32) {
    let outcome = verify(&compressed_sig(), sig_type, &PUBLIC_KEY, MESSAGE);
    assert_eq!(outcome, Outcome::InvalidArgument);
    assert_eq!(outcome.code(), -5);
}

// REFERENCE SCENARIOS
// ================================================================================================
// Exact input/code pairs observed against the reference implementation.

#[test]
fn reference_scenarios() {
    // Zero-filled 42-byte signature against hopeless public keys.
    let sig = [0u8; 42];
    assert_eq!(verify(&sig, SIG_INFERRED, &[], &[]).code(), -3);
    assert_eq!(verify(&sig, SIG_INFERRED, &[0xb0], &[]).code(), -3);
    assert_eq!(verify(&sig, SIG_INFERRED, &[0x0b], &[]).code(), -3);

    // Header nibble 0 is neither serialization marker; the truncated key body
    // never gets inspected.
    let mut sig = vec![0x0a];
    sig.extend_from_slice(&[0u8; 43]);
    assert_eq!(verify(&sig, SIG_INFERRED, &[0x09], &[]).code(), -4);

    // An out-of-enum type is rejected before any payload inspection.
    assert_eq!(verify(&sig[..42], 4, &[0x0a], &[]).code(), -5);
}

#[test]
fn unknown_type_wins_over_malformed_inputs() {
    // The type constant is vetted before any byte of the key or signature.
    assert_eq!(verify(&[], 7, &[], MESSAGE).code(), -5);
}

//! Length-overflow reporting through every public entry point

use fips180::{Algorithm, Error};
use fips180_algorithms::hash::{HashFunction, Sha1, Sha224, Sha256, Sha384, Sha512};
use fips180_params::utils::hash::{MAX_MESSAGE_BITS_128, MAX_MESSAGE_BITS_64};

#[test]
fn test_32_bit_family_rejects_two_to_the_64() {
    for alg in [Algorithm::Sha1, Algorithm::Sha224, Algorithm::Sha256] {
        let err = fips180::digest(alg, &[], MAX_MESSAGE_BITS_64 + 1).unwrap_err();
        assert!(err.is_length_overflow(), "{}: {}", alg, err);
    }

    assert!(matches!(
        Sha1::digest_bits(&[], 1u128 << 64),
        Err(fips180_algorithms::Error::LengthOverflow { .. })
    ));
    assert!(matches!(
        Sha224::digest_bits(&[], 1u128 << 100),
        Err(fips180_algorithms::Error::LengthOverflow { .. })
    ));
    assert!(matches!(
        Sha256::digest_bits(&[], u128::MAX),
        Err(fips180_algorithms::Error::LengthOverflow { .. })
    ));
}

#[test]
fn test_64_bit_family_rejects_unaddressable_lengths() {
    for alg in [
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha512_224,
        Algorithm::Sha512_256,
    ] {
        let err = fips180::digest(alg, &[], MAX_MESSAGE_BITS_128).unwrap_err();
        assert!(err.is_length_overflow(), "{}: {}", alg, err);
    }

    assert!(Sha384::digest_bits(&[], u128::MAX).is_err());
    assert!(Sha512::digest_bits(&[], u128::MAX).is_err());
}

#[test]
fn test_sha512_length_field_reaches_past_two_to_the_64() {
    // 2^64 bits is within SHA-512's trailer; it fails only because the
    // supplied message does not have that length (or is unaddressable).
    let err = fips180::digest(Algorithm::Sha512, &[], 1u128 << 64).unwrap_err();
    match err {
        Error::InvalidParameter { .. } | Error::LengthOverflow { .. } => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_overflow_message_names_algorithm() {
    let err = fips180::digest(Algorithm::Sha256, &[], 1u128 << 64).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("SHA-256"), "{}", text);
}

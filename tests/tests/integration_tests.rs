// Cross-crate checks through the facade and prelude
use fips180::prelude::*;

#[test]
fn test_prelude_typed_digest() {
    let d = Sha256::digest(b"abc").unwrap();
    assert_eq!(
        d.to_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(Sha256::output_size(), 32);
    assert_eq!(Sha256::name(), "SHA-256");
}

#[test]
fn test_digest_hex_roundtrip_and_ct_eq() {
    let d = Sha1::digest(b"abc").unwrap();
    let parsed = Digest::<20>::from_hex(&d.to_hex()).unwrap();
    assert!(d.ct_eq(&parsed));
    assert_eq!(d, parsed);

    let other = Sha1::digest(b"abd").unwrap();
    assert!(!d.ct_eq(&other));
}

#[test]
fn test_algorithm_table_matches_variants() {
    assert_eq!(Sha1::OUTPUT_SIZE, Algorithm::Sha1.output_size());
    assert_eq!(Sha224::OUTPUT_SIZE, Algorithm::Sha224.output_size());
    assert_eq!(Sha384::BLOCK_SIZE, Algorithm::Sha384.block_size());
    assert_eq!(Sha512_224::OUTPUT_SIZE, 28);
    assert_eq!(Sha512_256::ALGORITHM, Algorithm::Sha512_256);
    assert_eq!(Algorithm::Sha512.word_width(), WordWidth::W64);
}

#[test]
fn test_algorithm_parse_and_dispatch() {
    let alg: Algorithm = "sha-512/256".parse().unwrap();
    let words = fips180::digest(alg, b"abc", 24).unwrap();
    assert_eq!(
        words.to_hex(),
        "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
    );
    assert!("SHA-3".parse::<Algorithm>().is_err());
}

#[test]
fn test_error_context_through_result_ext() {
    let r: Result<DigestWords> = fips180::digest(Algorithm::Sha1, b"ab", 15);
    let err = r.with_context("hashing record").unwrap_err();
    assert!(!err.is_length_overflow());
    assert!(err.to_string().contains("hashing record"));
}

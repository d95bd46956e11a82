//! Messages whose lengths sit on either side of the length-trailer boundary

use fips180::{digest, Algorithm};
use fips180_algorithms::hash::padding::padded_len;

#[test]
fn test_512_bit_block_boundaries() {
    for alg in [Algorithm::Sha1, Algorithm::Sha224, Algorithm::Sha256] {
        assert_eq!(padded_len(alg, 55 * 8).unwrap(), 64);
        assert_eq!(padded_len(alg, 56 * 8).unwrap(), 128);
        assert_eq!(padded_len(alg, 63 * 8).unwrap(), 128);
        assert_eq!(padded_len(alg, 64 * 8).unwrap(), 128);
        assert_eq!(padded_len(alg, 119 * 8).unwrap(), 128);
        assert_eq!(padded_len(alg, 120 * 8).unwrap(), 192);
    }
}

#[test]
fn test_1024_bit_block_boundaries() {
    for alg in [
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha512_224,
        Algorithm::Sha512_256,
    ] {
        assert_eq!(padded_len(alg, 111 * 8).unwrap(), 128);
        assert_eq!(padded_len(alg, 112 * 8).unwrap(), 256);
        assert_eq!(padded_len(alg, 127 * 8).unwrap(), 256);
        assert_eq!(padded_len(alg, 128 * 8).unwrap(), 256);
    }
}

#[test]
fn test_boundary_messages_hash_distinctly() {
    let data = vec![0x61u8; 256];
    for alg in Algorithm::ALL {
        let lens: &[usize] = if alg.block_size() == 64 {
            &[55, 56, 63, 64, 65]
        } else {
            &[111, 112, 127, 128, 129]
        };

        let digests: Vec<_> = lens
            .iter()
            .map(|&n| digest(alg, &data[..n], n as u128 * 8).unwrap())
            .collect();
        for i in 0..digests.len() {
            for j in i + 1..digests.len() {
                assert_ne!(digests[i], digests[j], "{} collided at {:?}", alg, lens);
            }
        }
    }
}

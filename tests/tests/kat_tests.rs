// tests/kat_tests.rs
use fips180_api::Algorithm;
use fips180_tests::kat::{
    load_file, monte_carlo, DynamicEngine, KatEngine, Runner, TypedEngine, FIPS180_VECTORS,
};

#[test]
fn test_every_algorithm_has_vectors() {
    for alg in Algorithm::ALL {
        assert!(
            FIPS180_VECTORS.for_algorithm(alg).count() >= 2,
            "no vectors for {}",
            alg
        );
    }
}

#[test]
fn test_fips180_vectors_typed() {
    let engine = TypedEngine;
    let r = Runner::new(&engine);

    let passed = r.run_suite(&FIPS180_VECTORS).expect("typed vectors failed");
    assert_eq!(passed, FIPS180_VECTORS.vectors.len());
}

#[test]
fn test_fips180_vectors_dynamic() {
    let engine = DynamicEngine;
    let r = Runner::new(&engine);

    let passed = r.run_suite(&FIPS180_VECTORS).expect("dynamic vectors failed");
    assert_eq!(passed, FIPS180_VECTORS.vectors.len());
}

#[test]
fn test_sha1_vectors_only() {
    let engine = TypedEngine;
    let r = Runner::new(&engine);

    let passed = r
        .run_file(FIPS180_VECTORS.for_algorithm(Algorithm::Sha1))
        .expect("SHA-1 vectors failed");
    assert_eq!(passed, 5);
}

#[test]
fn test_runner_reports_mismatch() {
    let mut vector = FIPS180_VECTORS.vectors[0].clone();
    vector.md = "00".repeat(vector.algorithm.output_size());

    let engine = TypedEngine;
    let r = Runner::new(&engine);
    assert!(r.run_vector(&vector).is_err());
    assert!(r.run_file([&vector]).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(load_file("no-such-file.toml").is_err());
}

#[test]
fn test_monte_carlo_engines_agree() {
    let seed = [0x5au8; 32];
    for alg in [Algorithm::Sha1, Algorithm::Sha256, Algorithm::Sha512_224] {
        let typed = monte_carlo(&TypedEngine, alg, &seed, 2).unwrap();
        let dynamic = monte_carlo(&DynamicEngine, alg, &seed, 2).unwrap();
        assert_eq!(typed, dynamic, "{} chains diverged", alg);
        assert_eq!(typed.len(), alg.output_size());
    }
}

#[test]
fn test_engines_agree_on_binary_input() {
    let message: Vec<u8> = (0..=255u8).collect();
    for alg in Algorithm::ALL {
        assert_eq!(
            TypedEngine.hex_digest(alg, &message).unwrap(),
            DynamicEngine.hex_digest(alg, &message).unwrap()
        );
    }
}

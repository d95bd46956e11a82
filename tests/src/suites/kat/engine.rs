//! Back-ends the runner can check vectors against.

use fips180_algorithms::hash::{
    HashFunction, Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256,
};
use fips180_api::Algorithm;

use super::error::Result;

/// Something that turns a message into a hex digest
pub trait KatEngine {
    fn hex_digest(&self, algorithm: Algorithm, message: &[u8]) -> Result<String>;
}

/// Statically dispatched variants through `HashFunction::digest`
pub struct TypedEngine;

fn typed<H: HashFunction>(message: &[u8]) -> Result<String>
where
    H::Output: AsRef<[u8]>,
{
    Ok(hex::encode(H::digest(message)?))
}

impl KatEngine for TypedEngine {
    fn hex_digest(&self, algorithm: Algorithm, message: &[u8]) -> Result<String> {
        match algorithm {
            Algorithm::Sha1 => typed::<Sha1>(message),
            Algorithm::Sha224 => typed::<Sha224>(message),
            Algorithm::Sha256 => typed::<Sha256>(message),
            Algorithm::Sha384 => typed::<Sha384>(message),
            Algorithm::Sha512 => typed::<Sha512>(message),
            Algorithm::Sha512_224 => typed::<Sha512_224>(message),
            Algorithm::Sha512_256 => typed::<Sha512_256>(message),
        }
    }
}

/// Runtime dispatch through the facade's `digest(algorithm, message, bits)`
pub struct DynamicEngine;

impl KatEngine for DynamicEngine {
    fn hex_digest(&self, algorithm: Algorithm, message: &[u8]) -> Result<String> {
        let bits = message.len() as u128 * 8;
        Ok(fips180::digest(algorithm, message, bits)?.to_hex())
    }
}

/// Monte Carlo chain over a seed
///
/// MD[0] = MD[1] = MD[2] = seed, then for 1000 iterations
/// MD[i] = H(MD[i-3] || MD[i-2] || MD[i-1]); the chain is restarted from
/// its last digest `rounds` times and that digest is returned.
pub fn monte_carlo<E: KatEngine>(
    engine: &E,
    algorithm: Algorithm,
    seed: &[u8],
    rounds: usize,
) -> Result<Vec<u8>> {
    let mut seed = seed.to_vec();
    for _ in 0..rounds {
        let mut md = [seed.clone(), seed.clone(), seed.clone()];
        for _ in 0..1000 {
            let msg = [md[0].as_slice(), md[1].as_slice(), md[2].as_slice()].concat();
            let next = hex::decode(engine.hex_digest(algorithm, &msg)?)?;
            md = [md[1].clone(), md[2].clone(), next];
        }
        seed = md[2].clone();
    }
    Ok(seed)
}

//! Random scalar generation.

use crate::{Error, FIELD_BYTES_SIZE, FieldBytes, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;

/// Maximum number of draws made by [`random_below`] before giving up.
///
/// Each draw is accepted with probability above 1/2, so exhausting this limit
/// means the RNG is broken.
const MAX_SAMPLING_ATTEMPTS: usize = 64;

/// Returns a uniformly random integer in `[0, bound)`.
///
/// Draws as many bits as `bound` has and rejects candidates `>= bound`.
/// `bound` must be nonzero and at most 256 bits wide.
pub(crate) fn random_below(rng: &mut impl CryptoRngCore, bound: &BigUint) -> Result<BigUint> {
    let bits = usize::try_from(bound.bits()).map_err(|_| Error::InvalidArgument)?;
    if bound.is_zero() || bits > FIELD_BYTES_SIZE * 8 {
        return Err(Error::InvalidArgument);
    }

    let len = bits.div_ceil(8);
    let top_mask = 0xffu8 >> (len * 8 - bits);
    let mut bytes = FieldBytes::default();
    let bytes = &mut bytes[..len];

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        rng.try_fill_bytes(bytes)?;
        bytes[0] &= top_mask;
        let candidate = BigUint::from_bytes_be(bytes);

        if &candidate < bound {
            return Ok(candidate);
        }
    }

    Err(Error::Randomness)
}

/// Returns a uniformly random integer in `[1, bound]`.
pub(crate) fn random_nonzero(rng: &mut impl CryptoRngCore, bound: &BigUint) -> Result<BigUint> {
    Ok(random_below(rng, bound)? + BigUint::one())
}

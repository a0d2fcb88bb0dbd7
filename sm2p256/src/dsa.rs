//! SM2 Digital Signature Algorithm (SM2DSA) as defined in [draft-shen-sm2-ecdsa § 5].
//!
//! [`sign_prehash`] and [`verify_prehash`] operate on a 32-byte message
//! digest `e` computed by the caller. With the `dsa` feature enabled,
//! [`SigningKey`] and [`VerifyingKey`] compute `e = SM3(Z_A || M)` themselves
//! and implement the [`signature`] traits.
//!
//! ## Usage
//!
#![cfg_attr(all(feature = "dsa", feature = "getrandom"), doc = "```")]
#![cfg_attr(not(all(feature = "dsa", feature = "getrandom")), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use rand_core::OsRng; // requires 'getrandom` feature
//! use sm2p256::{
//!     dsa::{Signature, SigningKey, signature::RandomizedSigner},
//!     PrivateKey, Sm2,
//! };
//!
//! // Signing
//! let private_key = PrivateKey::random(Sm2::shared(), &mut OsRng)?;
//! let distid = "example@rustcrypto.org"; // distinguishing identifier
//! let signing_key = SigningKey::new(distid, private_key)?;
//! let verifying_key_bytes = signing_key.verifying_key().to_sec1_bytes();
//! let message = b"test message";
//! let signature: Signature = signing_key.sign_with_rng(&mut OsRng, message);
//!
//! // Verifying
//! use sm2p256::dsa::{VerifyingKey, signature::Verifier};
//!
//! let verifying_key = VerifyingKey::from_sec1_bytes(distid, &verifying_key_bytes)?;
//! verifying_key.verify(message, &signature)?;
//! # Ok(())
//! # }
//! ```
//!
//! [draft-shen-sm2-ecdsa § 5]: https://datatracker.ietf.org/doc/html/draft-shen-sm2-ecdsa-02#section-5

#[cfg(feature = "dsa")]
mod signing;
#[cfg(feature = "dsa")]
mod verifying;

#[cfg(feature = "dsa")]
pub use signature;

#[cfg(feature = "dsa")]
pub use self::{signing::SigningKey, verifying::VerifyingKey};

use crate::{
    CurveArithmetic, Error, FIELD_BYTES_SIZE, FieldBytes, PrivateKey, PublicKey, Result,
    arithmetic::{
        modular::{mod_add, mod_inv, mod_mul, mod_sub},
        scalar::random_nonzero,
    },
    to_field_bytes,
};
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;

/// Maximum number of nonces [`sign_prehash`] tries before giving up.
///
/// A nonce is rejected with negligible probability, so running out means the
/// RNG is broken.
pub const MAX_SIGN_ATTEMPTS: usize = 32;

/// SM2DSA signature serialized as bytes.
pub type SignatureBytes = [u8; Signature::BYTE_SIZE];

/// SM2DSA signature.
///
/// Parsing does not range-check `r` and `s`: out-of-range components are
/// rejected by verification.
#[derive(Clone, Eq, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Size of an encoded SM2DSA signature in bytes.
    pub const BYTE_SIZE: usize = 2 * FIELD_BYTES_SIZE;

    /// Create a [`Signature`] from its `r` and `s` components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Parse an SM2DSA signature from a byte array.
    pub fn from_bytes(bytes: &SignatureBytes) -> Self {
        let (r_bytes, s_bytes) = bytes.split_at(FIELD_BYTES_SIZE);
        Self {
            r: BigUint::from_bytes_be(r_bytes),
            s: BigUint::from_bytes_be(s_bytes),
        }
    }

    /// Parse an SM2DSA signature from a byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        SignatureBytes::try_from(bytes)
            .map(|bytes| Self::from_bytes(&bytes))
            .map_err(|_| Error::InvalidArgument)
    }

    /// Serialize this signature as bytes.
    ///
    /// Components wider than 256 bits are truncated; such signatures never
    /// verify.
    pub fn to_bytes(&self) -> SignatureBytes {
        let mut ret = [0; Self::BYTE_SIZE];
        let (r_bytes, s_bytes) = ret.split_at_mut(FIELD_BYTES_SIZE);
        r_bytes.copy_from_slice(&self.r_bytes());
        s_bytes.copy_from_slice(&self.s_bytes());
        ret
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Bytes for the `r` component of a signature.
    pub fn r_bytes(&self) -> FieldBytes {
        to_field_bytes(&self.r)
    }

    /// Bytes for the `s` component of a signature.
    pub fn s_bytes(&self) -> FieldBytes {
        to_field_bytes(&self.s)
    }

    /// Convert this signature into a byte vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sm2p256::dsa::Signature(")?;

        for byte in self.to_bytes() {
            write!(f, "{:02X}", byte)?;
        }

        write!(f, ")")
    }
}

impl From<Signature> for SignatureBytes {
    fn from(signature: Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl From<&Signature> for SignatureBytes {
    fn from(signature: &Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl From<SignatureBytes> for Signature {
    fn from(bytes: SignatureBytes) -> Signature {
        Signature::from_bytes(&bytes)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Signature> {
        Signature::from_slice(bytes)
    }
}

#[cfg(feature = "dsa")]
impl signature::SignatureEncoding for Signature {
    type Repr = SignatureBytes;

    fn to_bytes(&self) -> Self::Repr {
        self.into()
    }

    fn encoded_len(&self) -> usize {
        Self::BYTE_SIZE
    }
}

/// Sign a 32-byte message digest.
///
/// ```text
/// A3: pick a random number k in [1, n-1] via a random number generator
/// A4: calculate the elliptic curve point (x1, y1)=[k]G
/// A5: calculate r=(e+x1) modn, return to A3 if r=0 or r+k=n
/// A6: calculate s=((1+dA)^(-1)*(k-r*dA)) modn, return to A3 if s=0
/// A7: the digital signature of M is (r, s)
/// ```
///
/// Returns [`Error::InvalidArgument`] if `prehash` is not 32 bytes, and
/// [`Error::Randomness`] if the RNG fails or [`MAX_SIGN_ATTEMPTS`] nonces are
/// rejected in a row.
pub fn sign_prehash<C>(
    curve: &C,
    rng: &mut impl CryptoRngCore,
    private_key: &PrivateKey,
    prehash: &[u8],
) -> Result<Signature>
where
    C: CurveArithmetic + ?Sized,
{
    if prehash.len() != FIELD_BYTES_SIZE {
        return Err(Error::InvalidArgument);
    }

    let n = &curve.params().n;
    let n_minus_one = n - BigUint::one();
    let d = &private_key.to_scalar();
    let e = BigUint::from_bytes_be(prehash);

    let d_plus_1_inv = mod_inv(&(d + BigUint::one()), n).ok_or(Error::InvalidArgument)?;

    for _ in 0..MAX_SIGN_ATTEMPTS {
        // A3: pick a random number k in [1, n-1] via a random number generator
        let k = random_nonzero(rng, &n_minus_one)?;

        // A4: calculate the elliptic curve point (x1, y1)=[k]G
        let point = curve.scalar_base_mult(&to_field_bytes(&k));
        let Some(x1) = point.x() else {
            continue;
        };

        // A5: calculate r=(e+x1) modn, return to A3 if r=0 or r+k=n
        let r = mod_add(&e, x1, n);
        if r.is_zero() || mod_add(&r, &k, n).is_zero() {
            continue;
        }

        // A6: calculate s=((1+dA)^(-1)*(k-r*dA)) modn, return to A3 if s=0
        let s = mod_mul(&d_plus_1_inv, &mod_sub(&k, &mod_mul(&r, d, n), n), n);
        if s.is_zero() {
            continue;
        }

        // A7: the digital signature of M is (r, s)
        return Ok(Signature { r, s });
    }

    Err(Error::Randomness)
}

/// Verify a signature over a 32-byte message digest.
///
/// ```text
/// B1: verify whether r' in [1,n-1], verification failed if not
/// B2: verify whether s' in [1,n-1], verification failed if not
/// B5: calculate t = (r' + s') modn, verification failed if t=0
/// B6: calculate the point (x1', y1')=[s']G + [t]PA
/// B7: calculate R=(e'+x1') modn, verification pass if yes, otherwise failed
/// ```
///
/// Every failure, including a malformed digest, is reported as `false`.
pub fn verify_prehash<C>(
    curve: &C,
    public_key: &PublicKey,
    prehash: &[u8],
    signature: &Signature,
) -> bool
where
    C: CurveArithmetic + ?Sized,
{
    if prehash.len() != FIELD_BYTES_SIZE {
        return false;
    }

    let n = &curve.params().n;
    let (r, s) = (signature.r(), signature.s());

    // B1: verify whether r' in [1,n-1], verification failed if not
    // B2: verify whether s' in [1,n-1], verification failed if not
    if r.is_zero() || r >= n || s.is_zero() || s >= n {
        return false;
    }

    let e = BigUint::from_bytes_be(prehash);

    // B5: calculate t = (r' + s') modn, verification failed if t=0
    let t = mod_add(r, s, n);
    if t.is_zero() {
        return false;
    }

    // B6: calculate the point (x1', y1')=[s']G + [t]PA
    let point1 = curve.scalar_base_mult(&to_field_bytes(s));
    let point2 = curve.scalar_mult(&public_key.to_affine(), &to_field_bytes(&t));
    let sum = curve.add_affine(&point1, &point2);

    // B7: calculate R=(e'+x1') modn, verification pass if yes, otherwise failed
    match sum.x() {
        Some(x1) => mod_add(&e, x1, n) == *r,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{Signature, sign_prehash, verify_prehash};
    use crate::{CurveArithmetic, Error, PrivateKey, Sm2, to_field_bytes};
    use core::num::NonZeroU32;
    use num_bigint::BigUint;
    use rand_core::{CryptoRng, OsRng, RngCore};

    /// RNG whose every draw fails.
    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            let code = NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap();
            Err(code.into())
        }
    }

    impl CryptoRng for FailingRng {}

    /// RNG which only ever returns zero bytes, so every nonce candidate is
    /// `k = 1` and, with the digest below, every attempt is rejected.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for ZeroRng {}

    const DIGEST: [u8; 32] = [0x5a; 32];

    fn private_key(curve: &Sm2) -> PrivateKey {
        PrivateKey::from_slice(curve, &[0x42; 32]).unwrap()
    }

    #[test]
    fn round_trip() {
        let curve = Sm2::new();
        let sk = private_key(&curve);
        let sig = sign_prehash(&curve, &mut OsRng, &sk, &DIGEST).unwrap();
        assert!(verify_prehash(&curve, sk.public_key(), &DIGEST, &sig));
    }

    #[test]
    fn rng_failure_is_reported() {
        let curve = Sm2::new();
        let sk = private_key(&curve);
        assert_eq!(
            sign_prehash(&curve, &mut FailingRng, &sk, &DIGEST),
            Err(Error::Randomness)
        );
    }

    #[test]
    fn rejected_nonces_exhaust_attempts() {
        // k = 1 gives x1 = gx, so e = n - gx makes r = 0 on every attempt.
        let curve = Sm2::new();
        let sk = private_key(&curve);
        let params = curve.params();
        let e = to_field_bytes(&(&params.n - &params.gx));

        assert_eq!(
            sign_prehash(&curve, &mut ZeroRng, &sk, &e),
            Err(Error::Randomness)
        );
        assert!(sign_prehash(&curve, &mut ZeroRng, &sk, &DIGEST).is_ok());
    }

    #[test]
    fn reject_wrong_digest_length() {
        let curve = Sm2::new();
        let sk = private_key(&curve);
        assert_eq!(
            sign_prehash(&curve, &mut OsRng, &sk, &DIGEST[..31]),
            Err(Error::InvalidArgument)
        );

        let sig = sign_prehash(&curve, &mut OsRng, &sk, &DIGEST).unwrap();
        assert!(!verify_prehash(&curve, sk.public_key(), &DIGEST[..31], &sig));
        assert!(!verify_prehash(&curve, sk.public_key(), &[], &sig));
    }

    #[test]
    fn reject_out_of_range_components() {
        let curve = Sm2::new();
        let sk = private_key(&curve);
        let sig = sign_prehash(&curve, &mut OsRng, &sk, &DIGEST).unwrap();
        let n = curve.params().n.clone();
        let zero = BigUint::default();

        for (r, s) in [
            (zero.clone(), sig.s().clone()),
            (n.clone(), sig.s().clone()),
            (sig.r().clone(), zero),
            (sig.r().clone(), n.clone()),
            (sig.r() + &n, sig.s().clone()),
        ] {
            let bad = Signature::new(r, s);
            assert!(!verify_prehash(&curve, sk.public_key(), &DIGEST, &bad));
        }
    }

    #[test]
    fn reject_r_plus_s_equal_to_order() {
        let curve = Sm2::new();
        let sk = private_key(&curve);
        let n = &curve.params().n;
        let r = BigUint::from(1u8);
        let s = n - &r;
        let sig = Signature::new(r, s);
        assert!(!verify_prehash(&curve, sk.public_key(), &DIGEST, &sig));
    }

    #[test]
    fn byte_encoding() {
        let curve = Sm2::new();
        let sk = private_key(&curve);
        let sig = sign_prehash(&curve, &mut OsRng, &sk, &DIGEST).unwrap();
        let bytes = sig.to_bytes();
        assert_eq!(Signature::from_bytes(&bytes), sig);
        assert_eq!(Signature::try_from(&bytes[..]).unwrap(), sig);
        assert!(Signature::from_slice(&bytes[..63]).is_err());
    }
}

//! Support for SM2DSA signing.
//!
//! ## Algorithm
//!
//! ```text
//! A1: set M~=ZA || M
//! A2: calculate e=Hv(M~)
//! A3: pick a random number k in [1, n-1] via a random number generator
//! A4: calculate the elliptic curve point (x1, y1)=[k]G
//! A5: calculate r=(e+x1) modn, return to A3 if r=0 or r+k=n
//! A6: calculate s=((1+dA)^(-1)*(k-r*dA)) modn, return to A3 if s=0
//! A7: the digital signature of M is (r, s)
//! ```

use super::{Signature, VerifyingKey, sign_prehash};
use crate::{DistId, FieldBytes, PrivateKey, Sm2};
use core::fmt::{self, Debug};
use signature::{
    KeypairRef, RandomizedSigner, Result, hazmat::RandomizedPrehashSigner,
    rand_core::CryptoRngCore,
};

#[cfg(feature = "getrandom")]
use {
    rand_core::OsRng,
    signature::{Signer, hazmat::PrehashSigner},
};

/// SM2DSA secret key used for signing messages and producing signatures.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for signing:
///
/// - [`RandomizedSigner`]: sign a message using this key and a caller-supplied RNG
/// - [`RandomizedPrehashSigner`]: sign the low-level raw output bytes of a message digest
///
/// With the `getrandom` feature, `Signer` and `PrehashSigner` are also
/// implemented, drawing nonces from the operating system RNG.
#[derive(Clone)]
pub struct SigningKey {
    /// Secret key.
    private_key: PrivateKey,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Create signing key from a signer's distinguishing identifier and
    /// private key.
    pub fn new(distid: &DistId, private_key: PrivateKey) -> Result<Self> {
        let verifying_key = VerifyingKey::new(distid, private_key.public_key().clone())?;
        Ok(Self {
            private_key,
            verifying_key,
        })
    }

    /// Generate a random signing key.
    pub fn random(distid: &DistId, rng: &mut impl CryptoRngCore) -> Result<Self> {
        Self::new(distid, PrivateKey::random(Sm2::shared(), rng)?)
    }

    /// Parse signing key from big endian-encoded bytes.
    pub fn from_bytes(distid: &DistId, bytes: &FieldBytes) -> Result<Self> {
        Self::from_slice(distid, bytes)
    }

    /// Parse signing key from big endian-encoded byte slice containing a secret
    /// scalar value.
    pub fn from_slice(distid: &DistId, slice: &[u8]) -> Result<Self> {
        Self::new(distid, PrivateKey::from_slice(Sm2::shared(), slice)?)
    }

    /// Serialize as bytes.
    pub fn to_bytes(&self) -> FieldBytes {
        self.private_key.to_bytes()
    }

    /// Borrow the [`PrivateKey`] for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Get the distinguishing identifier for this key.
    pub fn distid(&self) -> &DistId {
        self.verifying_key.distid()
    }
}

//
// `*Signer` trait impls
//

impl RandomizedPrehashSigner<Signature> for SigningKey {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> Result<Signature> {
        Ok(sign_prehash(Sm2::shared(), rng, &self.private_key, prehash)?)
    }
}

impl RandomizedSigner<Signature> for SigningKey {
    fn try_sign_with_rng(&self, rng: &mut impl CryptoRngCore, msg: &[u8]) -> Result<Signature> {
        // A1: set M~=ZA || M
        // A2: calculate e=Hv(M~)
        let hash = self.verifying_key.hash_msg(msg);
        self.sign_prehash_with_rng(rng, &hash)
    }
}

#[cfg(feature = "getrandom")]
impl PrehashSigner<Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> Result<Signature> {
        self.sign_prehash_with_rng(&mut OsRng, prehash)
    }
}

#[cfg(feature = "getrandom")]
impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> Result<Signature> {
        self.try_sign_with_rng(&mut OsRng, msg)
    }
}

//
// Other trait impls
//

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl Eq for SigningKey {}
impl PartialEq for SigningKey {
    fn eq(&self, other: &SigningKey) -> bool {
        self.private_key == other.private_key
    }
}

impl KeypairRef for SigningKey {
    type VerifyingKey = VerifyingKey;
}

//! Support for verifying SM2DSA signatures.
//!
//! ## Algorithm
//!
//! ```text
//! B1: verify whether r' in [1,n-1], verification failed if not
//! B2: verify whether s' in [1,n-1], verification failed if not
//! B3: set M'~=ZA || M'
//! B4: calculate e'=Hv(M'~)
//! B5: calculate t = (r' + s') modn, verification failed if t=0
//! B6: calculate the point (x1', y1')=[s']G + [t]PA
//! B7: calculate R=(e'+x1') modn, verification pass if yes, otherwise failed
//! ```

use super::{Signature, verify_prehash};
use crate::{
    AffinePoint, DistId, FieldBytes, PublicKey, Sm2, arithmetic::UncompressedPoint,
    distid::hash_z,
};
use alloc::string::String;
use signature::{Error, Result, Verifier, hazmat::PrehashVerifier};
use sm3::{Digest, Sm3};

/// SM2DSA public key used for verifying signatures are valid for a given
/// message.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for verifying:
///
/// - [`Verifier`]: verify a message against a provided key and signature
/// - [`PrehashVerifier`]: verify the low-level raw output bytes of a message digest
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    /// Signer's public key.
    public_key: PublicKey,

    /// Signer's user information hash `Z`.
    identity_hash: FieldBytes,

    /// Distinguishing identifier used to compute `Z`.
    distid: String,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from a signer's distinguishing identifier
    /// and public key.
    pub fn new(distid: &DistId, public_key: PublicKey) -> Result<Self> {
        let identity_hash = hash_z(Sm2::shared(), distid, &public_key)?;

        Ok(Self {
            identity_hash,
            public_key,
            distid: distid.into(),
        })
    }

    /// Initialize [`VerifyingKey`] from an uncompressed SEC1-encoded public key.
    pub fn from_sec1_bytes(distid: &DistId, bytes: &[u8]) -> Result<Self> {
        let public_key = PublicKey::from_sec1_bytes(Sm2::shared(), bytes)?;
        Self::new(distid, public_key)
    }

    /// Initialize [`VerifyingKey`] from an affine point.
    ///
    /// Returns an [`Error`] if the given affine point is the additive identity
    /// (a.k.a. point at infinity) or is not on the curve.
    pub fn from_affine(distid: &DistId, affine: AffinePoint) -> Result<Self> {
        let public_key = PublicKey::from_affine(Sm2::shared(), affine)?;
        Self::new(distid, public_key)
    }

    /// Borrow the inner [`PublicKey`].
    pub fn as_public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Get the distinguishing identifier for this key.
    pub fn distid(&self) -> &DistId {
        self.distid.as_str()
    }

    /// Serialize as an uncompressed SEC1 point.
    pub fn to_sec1_bytes(&self) -> UncompressedPoint {
        self.public_key.to_sec1_bytes()
    }

    /// Compute message hash `e` according to [draft-shen-sm2-ecdsa § 5.2.1]
    ///
    /// [draft-shen-sm2-ecdsa § 5.2.1]: https://datatracker.ietf.org/doc/html/draft-shen-sm2-ecdsa-02#section-5.2.1
    pub(crate) fn hash_msg(&self, msg: &[u8]) -> FieldBytes {
        let mut e = FieldBytes::default();
        e.copy_from_slice(
            &Sm3::new_with_prefix(self.identity_hash)
                .chain_update(msg)
                .finalize(),
        );
        e
    }
}

//
// `*Verifier` trait impls
//

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> Result<()> {
        if verify_prehash(Sm2::shared(), &self.public_key, prehash, signature) {
            Ok(())
        } else {
            Err(Error::new())
        }
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> Result<()> {
        // B3: set M'~=ZA || M'
        // B4: calculate e'=Hv(M'~)
        let hash = self.hash_msg(msg);
        self.verify_prehash(&hash, signature)
    }
}

//
// Other trait impls
//

impl AsRef<PublicKey> for VerifyingKey {
    fn as_ref(&self) -> &PublicKey {
        self.as_public_key()
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(verifying_key: VerifyingKey) -> PublicKey {
        verifying_key.public_key
    }
}

impl From<&VerifyingKey> for PublicKey {
    fn from(verifying_key: &VerifyingKey) -> PublicKey {
        verifying_key.public_key.clone()
    }
}

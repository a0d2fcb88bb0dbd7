//! SM2 key pairs.

use crate::{
    AffinePoint, CurveArithmetic, Error, FIELD_BYTES_SIZE, FieldBytes, Result,
    arithmetic::{UNCOMPRESSED_POINT_SIZE, UncompressedPoint, scalar::random_nonzero},
    to_field_bytes,
};
use core::fmt::{self, Debug};
use num_bigint::BigUint;
use num_traits::One;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Generate a random key pair.
///
/// Shorthand for [`PrivateKey::random`] returning both halves.
pub fn generate_key_pair<C>(curve: &C, rng: &mut impl CryptoRngCore) -> Result<(PrivateKey, PublicKey)>
where
    C: CurveArithmetic + ?Sized,
{
    let private_key = PrivateKey::random(curve, rng)?;
    let public_key = private_key.public_key().clone();
    Ok((private_key, public_key))
}

/// SM2 public key: a finite point on the curve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey {
    x: BigUint,
    y: BigUint,
}

impl PublicKey {
    /// Wrap an affine point, checking that it is a finite point on the curve
    /// with both coordinates reduced modulo `p`.
    pub fn from_affine<C>(curve: &C, point: AffinePoint) -> Result<Self>
    where
        C: CurveArithmetic + ?Sized,
    {
        let p = &curve.params().p;
        match point {
            AffinePoint::Point { x, y } if &x < p && &y < p && curve.is_on_curve(&x, &y) => {
                Ok(Self { x, y })
            }
            _ => Err(Error::InvalidArgument),
        }
    }

    /// Parse an uncompressed SEC1-encoded public key (`0x04 || x || y`).
    pub fn from_sec1_bytes<C>(curve: &C, bytes: &[u8]) -> Result<Self>
    where
        C: CurveArithmetic + ?Sized,
    {
        let point = AffinePoint::from_uncompressed(curve.params(), bytes)?;
        Self::from_affine(curve, point)
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Copy this key into an [`AffinePoint`].
    pub fn to_affine(&self) -> AffinePoint {
        AffinePoint::Point {
            x: self.x.clone(),
            y: self.y.clone(),
        }
    }

    /// Serialize as an uncompressed SEC1 point.
    pub fn to_sec1_bytes(&self) -> UncompressedPoint {
        let mut ret = [0u8; UNCOMPRESSED_POINT_SIZE];
        let (x, y) = ret[1..].split_at_mut(FIELD_BYTES_SIZE);
        x.copy_from_slice(&to_field_bytes(&self.x));
        y.copy_from_slice(&to_field_bytes(&self.y));
        ret[0] = 0x04;
        ret
    }
}

/// SM2 private key: a secret scalar `d ∈ [1, n-2]` and its public key
/// `[d]G`.
///
/// The upper bound keeps `1 + d` invertible modulo `n`, which signing needs.
///
/// The scalar is stored as big-endian bytes which are zeroized on drop.
/// [`BigUint`] temporaries derived from it during signing are not wiped.
#[derive(Clone)]
pub struct PrivateKey {
    secret_bytes: FieldBytes,
    public_key: PublicKey,
}

impl PrivateKey {
    /// Generate a random private key.
    ///
    /// `d` is drawn uniformly from `[1, n-2]`.
    pub fn random<C>(curve: &C, rng: &mut impl CryptoRngCore) -> Result<Self>
    where
        C: CurveArithmetic + ?Sized,
    {
        let n_minus_two = &curve.params().n - BigUint::from(2u8);
        let d = random_nonzero(rng, &n_minus_two)?;
        Self::derive(curve, d)
    }

    /// Parse a private key from a big-endian scalar.
    ///
    /// Returns [`Error::InvalidArgument`] unless the scalar lies in `[1, n-2]`.
    pub fn from_bytes<C>(curve: &C, bytes: &FieldBytes) -> Result<Self>
    where
        C: CurveArithmetic + ?Sized,
    {
        Self::from_slice(curve, bytes)
    }

    /// Parse a private key from a big-endian byte slice of at most 32 bytes.
    pub fn from_slice<C>(curve: &C, bytes: &[u8]) -> Result<Self>
    where
        C: CurveArithmetic + ?Sized,
    {
        if bytes.len() > FIELD_BYTES_SIZE {
            return Err(Error::InvalidArgument);
        }

        let d = BigUint::from_bytes_be(bytes);
        let n_minus_one = &curve.params().n - BigUint::one();

        if d < BigUint::one() || d >= n_minus_one {
            return Err(Error::InvalidArgument);
        }

        Self::derive(curve, d)
    }

    /// Compute `[d]G` and check it is on the curve.
    fn derive<C>(curve: &C, d: BigUint) -> Result<Self>
    where
        C: CurveArithmetic + ?Sized,
    {
        let mut secret_bytes = to_field_bytes(&d);
        let point = curve.scalar_base_mult(&secret_bytes);

        match PublicKey::from_affine(curve, point) {
            Ok(public_key) => Ok(Self {
                secret_bytes,
                public_key,
            }),
            Err(_) => {
                secret_bytes.zeroize();
                Err(Error::KeyGeneration)
            }
        }
    }

    /// Serialize the secret scalar as big-endian bytes.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn to_bytes(&self) -> FieldBytes {
        self.secret_bytes
    }

    /// Decode the secret scalar as an integer.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material, and the returned integer is not zeroized
    /// when dropped.
    ///
    /// Please treat it with the care it deserves!
    pub fn to_scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.secret_bytes)
    }

    /// Get the [`PublicKey`] which corresponds to this private key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.secret_bytes.zeroize();
    }
}

impl ZeroizeOnDrop for PrivateKey {}

impl Eq for PrivateKey {}
impl PartialEq for PrivateKey {
    fn eq(&self, other: &PrivateKey) -> bool {
        self.secret_bytes == other.secret_bytes
    }
}

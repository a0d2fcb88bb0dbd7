//! Affine curve points.

use super::{CurveParams, modular::mod_sub};
use crate::{Error, FIELD_BYTES_SIZE, Result, to_field_bytes};
use num_bigint::BigUint;
use num_traits::Zero;

/// Size of an uncompressed SEC1-encoded point: `0x04 || x || y`.
pub const UNCOMPRESSED_POINT_SIZE: usize = 1 + 2 * FIELD_BYTES_SIZE;

/// Uncompressed SEC1-encoded point.
pub type UncompressedPoint = [u8; UNCOMPRESSED_POINT_SIZE];

/// Point on a Weierstrass curve in affine coordinates.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Identity,

    /// Finite point with coordinates in `[0, p)`.
    Point {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl AffinePoint {
    /// Build a point from raw coordinates.
    ///
    /// The pair `(0, 0)` is not on the SM2 curve and is read as the identity.
    pub fn from_coordinates(x: BigUint, y: BigUint) -> Self {
        if x.is_zero() && y.is_zero() {
            Self::Identity
        } else {
            Self::Point { x, y }
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Borrow the x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// Borrow the y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Borrow both coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Self::Identity => None,
            Self::Point { x, y } => Some((x, y)),
        }
    }

    /// Returns `-self`.
    pub fn neg(&self, params: &CurveParams) -> Self {
        match self {
            Self::Identity => Self::Identity,
            Self::Point { x, y } => Self::Point {
                x: x.clone(),
                y: mod_sub(&BigUint::zero(), y, &params.p),
            },
        }
    }

    /// Serialize as an uncompressed SEC1 point, or `None` for the identity.
    pub fn to_uncompressed(&self) -> Option<UncompressedPoint> {
        let (x, y) = self.coordinates()?;
        let mut ret = [0u8; UNCOMPRESSED_POINT_SIZE];
        ret[0] = 0x04;
        ret[1..1 + FIELD_BYTES_SIZE].copy_from_slice(&to_field_bytes(x));
        ret[1 + FIELD_BYTES_SIZE..].copy_from_slice(&to_field_bytes(y));
        Some(ret)
    }

    /// Parse an uncompressed SEC1 point.
    ///
    /// Only checks the encoding: coordinates must be below `p`. Curve
    /// membership is checked by [`PublicKey::from_affine`][crate::PublicKey::from_affine].
    pub fn from_uncompressed(params: &CurveParams, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != UNCOMPRESSED_POINT_SIZE || bytes[0] != 0x04 {
            return Err(Error::InvalidArgument);
        }

        let (x, y) = bytes[1..].split_at(FIELD_BYTES_SIZE);
        let x = BigUint::from_bytes_be(x);
        let y = BigUint::from_bytes_be(y);

        if x >= params.p || y >= params.p {
            return Err(Error::InvalidArgument);
        }

        Ok(Self::from_coordinates(x, y))
    }
}

//! Pure Rust implementation of group operations on the SM2 elliptic curve.
//!
//! Points are added and doubled in Jacobian coordinates over
//! arbitrary-precision integers, and only converted back to affine
//! coordinates at the API boundary.
//!
//! Curve parameters can be found in [draft-shen-sm2-ecdsa Appendix D]:
//! Recommended Parameters.
//!
//! [draft-shen-sm2-ecdsa Appendix D]: https://datatracker.ietf.org/doc/html/draft-shen-sm2-ecdsa-02#appendix-D

pub mod modular;

pub(crate) mod scalar;

mod affine;
mod mul;
mod params;
mod projective;

pub use self::{
    affine::{AffinePoint, UNCOMPRESSED_POINT_SIZE, UncompressedPoint},
    params::CurveParams,
    projective::JacobianPoint,
};

use self::modular::{mod_add, mod_mul};
use num_bigint::BigUint;

#[cfg(all(feature = "critical-section", not(feature = "std")))]
use once_cell::sync::Lazy as LazyLock;
#[cfg(feature = "std")]
use std::sync::LazyLock;

/// Group operations over a short Weierstrass curve with fixed domain
/// parameters.
pub trait CurveArithmetic {
    /// Domain parameters of this curve.
    fn params(&self) -> &CurveParams;

    /// Returns `p + q`.
    fn add(&self, p: &JacobianPoint, q: &JacobianPoint) -> JacobianPoint;

    /// Returns `p + p`.
    fn double(&self, p: &JacobianPoint) -> JacobianPoint;

    /// Returns `[k] base` where `k` is a big-endian unsigned integer.
    fn scalar_mult(&self, base: &AffinePoint, k: &[u8]) -> AffinePoint;

    /// Is `(x, y)` a solution of the curve equation?
    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool;

    /// Returns `[k] G` where `G` is the curve's generator.
    fn scalar_base_mult(&self, k: &[u8]) -> AffinePoint {
        self.scalar_mult(&self.params().generator(), k)
    }

    /// Returns `p + q` for affine inputs.
    fn add_affine(&self, p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
        let sum = self.add(&JacobianPoint::from_affine(p), &JacobianPoint::from_affine(q));
        sum.to_affine(self.params())
    }

    /// Returns `p + p` for an affine input.
    fn double_affine(&self, p: &AffinePoint) -> AffinePoint {
        self.double(&JacobianPoint::from_affine(p))
            .to_affine(self.params())
    }

    /// Is `point` a finite point on the curve?
    ///
    /// The identity is rejected.
    fn contains(&self, point: &AffinePoint) -> bool {
        point
            .coordinates()
            .is_some_and(|(x, y)| self.is_on_curve(x, y))
    }
}

/// SM2 elliptic curve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sm2 {
    params: CurveParams,
}

#[cfg(any(feature = "critical-section", feature = "std"))]
static SHARED: LazyLock<Sm2> = LazyLock::new(Sm2::new);

impl Sm2 {
    /// Build the SM2-P256 curve.
    pub fn new() -> Self {
        Self {
            params: CurveParams::sm2p256(),
        }
    }

    /// Process-wide SM2-P256 curve, built on first use.
    #[cfg(any(feature = "critical-section", feature = "std"))]
    pub fn shared() -> &'static Self {
        &SHARED
    }
}

impl Default for Sm2 {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveArithmetic for Sm2 {
    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn add(&self, p: &JacobianPoint, q: &JacobianPoint) -> JacobianPoint {
        projective::add(&self.params, p, q)
    }

    fn double(&self, p: &JacobianPoint) -> JacobianPoint {
        projective::double(&self.params, p)
    }

    fn scalar_mult(&self, base: &AffinePoint, k: &[u8]) -> AffinePoint {
        mul::scalar_mult(&self.params, base, k)
    }

    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let p = &self.params.p;

        let yy = mod_mul(y, y, p);
        let xxx = mod_mul(&mod_mul(x, x, p), x, p);
        let ax = mod_mul(&self.params.a, x, p);
        let rhs = mod_add(&mod_add(&xxx, &ax, p), &self.params.b, p);

        rhs == yy
    }
}

//! Jacobian curve points.
//!
//! A point `(X, Y, Z)` with `Z ≠ 0` stands for the affine point
//! `(X / Z², Y / Z³)`; `Z = 0` is the point at infinity.

use super::{
    AffinePoint, CurveParams,
    modular::{mod_add, mod_inv, mod_mul, mod_sub},
};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Point on a Weierstrass curve in Jacobian coordinates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JacobianPoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) z: BigUint,
}

impl JacobianPoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    /// Lift an affine point with `Z = 1`, or `Z = 0` for the identity.
    pub fn from_affine(point: &AffinePoint) -> Self {
        match point {
            AffinePoint::Identity => Self::identity(),
            AffinePoint::Point { x, y } => Self {
                x: x.clone(),
                y: y.clone(),
                z: BigUint::one(),
            },
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Returns the affine representation of this point.
    pub fn to_affine(&self, params: &CurveParams) -> AffinePoint {
        let p = &params.p;
        let Some(z_inv) = mod_inv(&self.z, p) else {
            return AffinePoint::Identity;
        };

        let z_inv2 = mod_mul(&z_inv, &z_inv, p);
        let z_inv3 = mod_mul(&z_inv2, &z_inv, p);

        AffinePoint::Point {
            x: mod_mul(&self.x, &z_inv2, p),
            y: mod_mul(&self.y, &z_inv3, p),
        }
    }
}

/// Returns `lhs + rhs`.
///
/// `u1 = u2` means both inputs share an x-coordinate: the sum is the identity
/// when `s1 ≠ s2` (`lhs = -rhs`) and the doubling of `lhs` when `s1 = s2`.
pub(crate) fn add(params: &CurveParams, lhs: &JacobianPoint, rhs: &JacobianPoint) -> JacobianPoint {
    if lhs.is_identity() {
        return rhs.clone();
    }
    if rhs.is_identity() {
        return lhs.clone();
    }

    let p = &params.p;

    let zz1 = mod_mul(&lhs.z, &lhs.z, p);
    let zz2 = mod_mul(&rhs.z, &rhs.z, p);
    let zzz1 = mod_mul(&zz1, &lhs.z, p);
    let zzz2 = mod_mul(&zz2, &rhs.z, p);

    let u1 = mod_mul(&lhs.x, &zz2, p);
    let u2 = mod_mul(&rhs.x, &zz1, p);
    let s1 = mod_mul(&lhs.y, &zzz2, p);
    let s2 = mod_mul(&rhs.y, &zzz1, p);

    let h = mod_sub(&u2, &u1, p);
    let r = mod_sub(&s2, &s1, p);

    if h.is_zero() {
        return if r.is_zero() {
            double(params, lhs)
        } else {
            JacobianPoint::identity()
        };
    }

    let rr = mod_mul(&r, &r, p);
    let hh = mod_mul(&h, &h, p);
    let hhh = mod_mul(&hh, &h, p);
    let u1hh = mod_mul(&u1, &hh, p);

    // x3 = r² - h³ - 2·u1·h²
    let x3 = mod_sub(&rr, &hhh, p);
    let x3 = mod_sub(&x3, &mod_add(&u1hh, &u1hh, p), p);

    // y3 = r·(u1·h² - x3) - s1·h³
    let y3 = mod_mul(&r, &mod_sub(&u1hh, &x3, p), p);
    let y3 = mod_sub(&y3, &mod_mul(&s1, &hhh, p), p);

    // z3 = z1·z2·h
    let z3 = mod_mul(&mod_mul(&lhs.z, &rhs.z, p), &h, p);

    JacobianPoint {
        x: x3,
        y: y3,
        z: z3,
    }
}

/// Returns `point + point`.
///
/// Valid for any `a`-coefficient.
pub(crate) fn double(params: &CurveParams, point: &JacobianPoint) -> JacobianPoint {
    if point.is_identity() {
        return point.clone();
    }

    let p = &params.p;
    let two = BigUint::from(2u8);
    let three = BigUint::from(3u8);
    let four = BigUint::from(4u8);
    let eight = BigUint::from(8u8);

    let xx = mod_mul(&point.x, &point.x, p);
    let yy = mod_mul(&point.y, &point.y, p);
    let yyyy = mod_mul(&yy, &yy, p);
    let zz = mod_mul(&point.z, &point.z, p);
    let zzzz = mod_mul(&zz, &zz, p);

    // s = 4·x·y²
    let s = mod_mul(&mod_mul(&four, &point.x, p), &yy, p);

    // m = 3·x² + a·z⁴
    let m = mod_add(&mod_mul(&three, &xx, p), &mod_mul(&params.a, &zzzz, p), p);

    // x3 = m² - 2·s
    let x3 = mod_sub(&mod_mul(&m, &m, p), &mod_mul(&two, &s, p), p);

    // y3 = m·(s - x3) - 8·y⁴
    let y3 = mod_mul(&m, &mod_sub(&s, &x3, p), p);
    let y3 = mod_sub(&y3, &mod_mul(&eight, &yyyy, p), p);

    // z3 = 2·y·z
    let z3 = mod_mul(&mod_mul(&two, &point.y, p), &point.z, p);

    JacobianPoint {
        x: x3,
        y: y3,
        z: z3,
    }
}

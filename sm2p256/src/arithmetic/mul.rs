//! Scalar multiplication.

use super::{
    AffinePoint, CurveParams, JacobianPoint,
    projective::{add, double},
};
use num_bigint::BigUint;

/// Returns `[k] base` where `k` is a big-endian unsigned integer.
///
/// Double-and-add ladder keeping `r1 - r0 = base`: every bit costs exactly one
/// addition and one doubling whatever its value. The accumulator selected for
/// each operation still depends on the bit.
pub(crate) fn scalar_mult(params: &CurveParams, base: &AffinePoint, k: &[u8]) -> AffinePoint {
    let k = BigUint::from_bytes_be(k);

    let mut r0 = JacobianPoint::identity();
    let mut r1 = JacobianPoint::from_affine(base);

    for i in (0..k.bits()).rev() {
        if k.bit(i) {
            r0 = add(params, &r0, &r1);
            r1 = double(params, &r1);
        } else {
            r1 = add(params, &r0, &r1);
            r0 = double(params, &r0);
        }
    }

    r0.to_affine(params)
}

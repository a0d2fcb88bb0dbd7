//! Modular arithmetic over arbitrary-precision integers.
//!
//! Used with the field modulus `p` for point coordinates and with the group
//! order `n` for scalars. Every function returns a value in `[0, m)`.

use num_bigint::BigUint;
use num_traits::Zero;

/// Returns `x + y mod m`.
pub fn mod_add(x: &BigUint, y: &BigUint, m: &BigUint) -> BigUint {
    (x + y) % m
}

/// Returns `x - y mod m`.
pub fn mod_sub(x: &BigUint, y: &BigUint, m: &BigUint) -> BigUint {
    let x = x % m;
    let y = y % m;
    if x >= y { x - y } else { m - (y - x) }
}

/// Returns `x * y mod m`.
pub fn mod_mul(x: &BigUint, y: &BigUint, m: &BigUint) -> BigUint {
    (x * y) % m
}

/// Returns `x⁻¹ mod m`, or `None` if `x ≡ 0 (mod m)`.
///
/// `m` must be prime: the inverse is computed as `x^(m-2) mod m`.
pub fn mod_inv(x: &BigUint, m: &BigUint) -> Option<BigUint> {
    let x = x % m;
    if x.is_zero() {
        return None;
    }

    let exp = m - BigUint::from(2u8);
    Some(x.modpow(&exp, m))
}

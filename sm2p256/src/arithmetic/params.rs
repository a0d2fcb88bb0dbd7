//! SM2-P256 domain parameters.
//!
//! Adapted from [draft-shen-sm2-ecdsa Appendix D]: Recommended Parameters.
//!
//! [draft-shen-sm2-ecdsa Appendix D]: https://datatracker.ietf.org/doc/html/draft-shen-sm2-ecdsa-02#appendix-D

use crate::{AffinePoint, FieldBytes};
use hex_literal::hex;
use num_bigint::BigUint;

/// p = 0xFFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF 00000000 FFFFFFFF FFFFFFFF
const MODULUS: FieldBytes = hex!("FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFF");

/// n = 0xFFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF 7203DF6B 21C6052B 53BBF409 39D54123
const ORDER: FieldBytes = hex!("FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF7203DF6B21C6052B53BBF40939D54123");

/// a = p - 3
const EQUATION_A: FieldBytes =
    hex!("FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFC");

const EQUATION_B: FieldBytes =
    hex!("28E9FA9E9D9F5E344D5A9E4BCF6509A7F39789F515AB8F92DDBCBD414D940E93");

const GENERATOR_X: FieldBytes =
    hex!("32C4AE2C1F1981195F9904466A39C9948FE30BBFF2660BE1715A4589334C74C7");

const GENERATOR_Y: FieldBytes =
    hex!("BC3736A2F4F6779C59BDCEE36B692153D0A9877CC62A474002DF32E52139F0A0");

/// Domain parameters of a short Weierstrass curve `y² = x³ + ax + b` over a
/// prime field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Prime modulus of the base field.
    pub p: BigUint,

    /// Order of the generator, i.e. the scalar modulus.
    pub n: BigUint,

    /// Coefficient `a` in the curve equation.
    pub a: BigUint,

    /// Coefficient `b` in the curve equation.
    pub b: BigUint,

    /// Generator's affine x-coordinate.
    pub gx: BigUint,

    /// Generator's affine y-coordinate.
    pub gy: BigUint,
}

impl CurveParams {
    /// SM2-P256 parameters.
    pub fn sm2p256() -> Self {
        Self {
            p: BigUint::from_bytes_be(&MODULUS),
            n: BigUint::from_bytes_be(&ORDER),
            a: BigUint::from_bytes_be(&EQUATION_A),
            b: BigUint::from_bytes_be(&EQUATION_B),
            gx: BigUint::from_bytes_be(&GENERATOR_X),
            gy: BigUint::from_bytes_be(&GENERATOR_Y),
        }
    }

    /// Base point of the curve.
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::Point {
            x: self.gx.clone(),
            y: self.gy.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CurveParams;
    use num_bigint::BigUint;

    #[test]
    fn equation_a_is_minus_three() {
        let params = CurveParams::sm2p256();
        assert_eq!(&params.a + BigUint::from(3u8), params.p);
    }

    #[test]
    fn order_differs_from_modulus() {
        let params = CurveParams::sm2p256();
        assert!(params.n < params.p);
        assert_eq!(params.p.bits(), 256);
        assert_eq!(params.n.bits(), 256);
    }
}

//! Curve arithmetic and prehash signature tests.

#![cfg(feature = "getrandom")]

use hex_literal::hex;
use proptest::prelude::*;
use rand_core::OsRng;
use sm2p256::{
    AffinePoint, BigUint, CurveArithmetic, PrivateKey, Sm2,
    arithmetic::modular::mod_add,
    dsa::{Signature, sign_prehash, verify_prehash},
    generate_key_pair,
};

const SECRET_SCALAR: [u8; 32] =
    hex!("8F09E6F801D47FF182C70A8904F63576135FDD09BD7DC8574C5D4D24F4F236F2");
const PUBLIC_X: [u8; 32] =
    hex!("C08C3983284907D86B4A5E8E8718D6FC16DDA37C3D03A92FA423325908EBF998");
const PUBLIC_Y: [u8; 32] =
    hex!("D0A878C58949FDEB906EE4FDDD32A2D38F42AE56A71A811D30E9EBA0BFE7642C");

fn big(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

fn fixed_bytes(x: &BigUint) -> [u8; 32] {
    let bytes = x.to_bytes_be();
    let mut ret = [0u8; 32];
    ret[32 - bytes.len()..].copy_from_slice(&bytes);
    ret
}

#[test]
fn golden_public_key() {
    let curve = Sm2::new();
    let sk = PrivateKey::from_bytes(&curve, &SECRET_SCALAR).unwrap();
    let pk = sk.public_key();

    assert_eq!(pk.x(), &big(&PUBLIC_X));
    assert_eq!(pk.y(), &big(&PUBLIC_Y));
    assert!(curve.is_on_curve(&big(&PUBLIC_X), &big(&PUBLIC_Y)));
}

#[test]
fn golden_key_signs() {
    let curve = Sm2::new();
    let sk = PrivateKey::from_bytes(&curve, &SECRET_SCALAR).unwrap();
    let digest = [0xa5u8; 32];
    let sig = sign_prehash(&curve, &mut OsRng, &sk, &digest).unwrap();
    assert!(verify_prehash(&curve, sk.public_key(), &digest, &sig));
}

#[test]
fn generated_keys_are_on_curve() {
    let curve = Sm2::shared();
    for _ in 0..8 {
        let (_, pk) = generate_key_pair(curve, &mut OsRng).unwrap();
        assert!(curve.is_on_curve(pk.x(), pk.y()));
    }
}

#[test]
fn scalar_mult_small_multiples() {
    let curve = Sm2::new();
    let g = curve.params().generator();

    assert!(curve.scalar_base_mult(&[0]).is_identity());
    assert_eq!(curve.scalar_base_mult(&[1]), g);

    let g2 = curve.double_affine(&g);
    let g3 = curve.add_affine(&g2, &g);
    assert_eq!(curve.scalar_base_mult(&[3]), g3);
    assert_eq!(curve.scalar_mult(&g3, &[2]), curve.scalar_base_mult(&[6]));
}

#[test]
fn scalar_mult_by_order_is_identity() {
    let curve = Sm2::new();
    let n = fixed_bytes(&curve.params().n);
    assert_eq!(curve.scalar_base_mult(&n), AffinePoint::Identity);
}

#[test]
fn verify_is_deterministic() {
    let curve = Sm2::new();
    let sk = PrivateKey::from_bytes(&curve, &SECRET_SCALAR).unwrap();
    let digest = [7u8; 32];
    let sig = sign_prehash(&curve, &mut OsRng, &sk, &digest).unwrap();

    let mut bad = sig.to_bytes();
    bad[40] ^= 0x10;
    let bad = Signature::from_bytes(&bad);

    for _ in 0..3 {
        assert!(verify_prehash(&curve, sk.public_key(), &digest, &sig));
        assert!(!verify_prehash(&curve, sk.public_key(), &digest, &bad));
    }
}

#[test]
fn reject_boundary_components() {
    let curve = Sm2::new();
    let sk = PrivateKey::from_bytes(&curve, &SECRET_SCALAR).unwrap();
    let digest = [7u8; 32];
    let sig = sign_prehash(&curve, &mut OsRng, &sk, &digest).unwrap();
    let n = curve.params().n.clone();

    let cases = [
        Signature::new(BigUint::default(), sig.s().clone()),
        Signature::new(n.clone(), sig.s().clone()),
        Signature::new(sig.r().clone(), BigUint::default()),
        Signature::new(sig.r().clone(), n),
    ];

    for bad in &cases {
        assert!(!verify_prehash(&curve, sk.public_key(), &digest, bad));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn scalar_mult_distributes(k1 in any::<[u8; 32]>(), k2 in any::<[u8; 32]>()) {
        let curve = Sm2::shared();
        let n = &curve.params().n;
        let k1 = big(&k1) % n;
        let k2 = big(&k2) % n;
        let sum = mod_add(&k1, &k2, n);

        let lhs = curve.scalar_base_mult(&fixed_bytes(&sum));
        let rhs = curve.add_affine(
            &curve.scalar_base_mult(&fixed_bytes(&k1)),
            &curve.scalar_base_mult(&fixed_bytes(&k2)),
        );
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn sign_verify_round_trip(digest in any::<[u8; 32]>()) {
        let curve = Sm2::shared();
        let (sk, pk) = generate_key_pair(curve, &mut OsRng).unwrap();
        let sig = sign_prehash(curve, &mut OsRng, &sk, &digest).unwrap();
        prop_assert!(verify_prehash(curve, &pk, &digest, &sig));
    }

    #[test]
    fn tampered_digest_is_rejected(digest in any::<[u8; 32]>(), byte in 0usize..32, bit in 0usize..8) {
        let curve = Sm2::shared();
        let sk = PrivateKey::from_bytes(curve, &SECRET_SCALAR).unwrap();
        let sig = sign_prehash(curve, &mut OsRng, &sk, &digest).unwrap();

        let mut tampered = digest;
        tampered[byte] ^= 1 << bit;
        prop_assert!(!verify_prehash(curve, sk.public_key(), &tampered, &sig));
    }
}

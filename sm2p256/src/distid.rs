//! Distinguished identifier support.

use crate::{CurveArithmetic, Error, FieldBytes, PublicKey, Result, to_field_bytes};
use sm3::{Digest, Sm3};

/// Type which represents distinguishing identifiers.
pub type DistId = str;

/// Compute user information hash `Z` according to [draft-shen-sm2-ecdsa § 5.1.4.4].
///
/// ```text
/// ZA=H256(ENTLA || IDA || a || b || xG || yG || xA || yA)
/// ```
///
/// `ENTLA` is the bit length of `IDA` as a 16-bit big-endian integer, so
/// identifiers longer than 8191 bytes are rejected.
///
/// [draft-shen-sm2-ecdsa § 5.1.4.4]: https://datatracker.ietf.org/doc/html/draft-shen-sm2-ecdsa-02#section-5.1.4.4
pub(crate) fn hash_z<C>(curve: &C, distid: &DistId, public_key: &PublicKey) -> Result<FieldBytes>
where
    C: CurveArithmetic + ?Sized,
{
    let entla: u16 = distid
        .len()
        .checked_mul(8)
        .and_then(|l| l.try_into().ok())
        .ok_or(Error::InvalidArgument)?;

    let params = curve.params();
    let mut sm3 = Sm3::new();
    sm3.update(entla.to_be_bytes());
    sm3.update(distid);
    sm3.update(to_field_bytes(&params.a));
    sm3.update(to_field_bytes(&params.b));
    sm3.update(to_field_bytes(&params.gx));
    sm3.update(to_field_bytes(&params.gy));
    sm3.update(to_field_bytes(public_key.x()));
    sm3.update(to_field_bytes(public_key.y()));

    let mut z = FieldBytes::default();
    z.copy_from_slice(&sm3.finalize());
    Ok(z)
}

#[cfg(test)]
mod tests {
    use super::hash_z;
    use crate::{Error, PrivateKey, Sm2};
    use alloc::string::String;

    #[test]
    fn identifier_length_limit() {
        let curve = Sm2::new();
        let sk = PrivateKey::from_slice(&curve, &[7]).unwrap();

        let max: String = "a".repeat(8191);
        assert!(hash_z(&curve, &max, sk.public_key()).is_ok());

        let too_long: String = "a".repeat(8192);
        assert_eq!(
            hash_z(&curve, &too_long, sk.public_key()),
            Err(Error::InvalidArgument)
        );
    }

    #[test]
    fn depends_on_identifier() {
        let curve = Sm2::new();
        let sk = PrivateKey::from_slice(&curve, &[7]).unwrap();
        let alice = hash_z(&curve, "alice", sk.public_key()).unwrap();
        let bob = hash_z(&curve, "bob", sk.public_key()).unwrap();
        assert_ne!(alice, bob);
    }
}

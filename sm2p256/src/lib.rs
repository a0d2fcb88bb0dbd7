#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(feature = "dsa", not(any(feature = "critical-section", feature = "std"))))]
compile_error!("`dsa` feature requires either `critical-section` or `std`");

pub mod arithmetic;
pub mod dsa;

#[cfg(feature = "dsa")]
mod distid;
mod error;
mod key;

pub use crate::{
    arithmetic::{AffinePoint, CurveArithmetic, CurveParams, JacobianPoint, Sm2},
    error::{Error, Result},
    key::{PrivateKey, PublicKey, generate_key_pair},
};
pub use num_bigint::{self, BigUint};
pub use rand_core;

#[cfg(feature = "dsa")]
pub use crate::distid::DistId;

/// Size of a serialized field element or scalar in bytes.
pub const FIELD_BYTES_SIZE: usize = 32;

/// SM2 field element or scalar serialized as big-endian bytes.
pub type FieldBytes = [u8; FIELD_BYTES_SIZE];

/// Serialize an integer in `[0, 2^256)` as fixed-width big-endian bytes.
///
/// Values wider than 256 bits keep only their low 32 bytes, which never
/// happens for integers reduced modulo `P` or `N`.
pub(crate) fn to_field_bytes(x: &BigUint) -> FieldBytes {
    let bytes = x.to_bytes_be();
    let mut ret = FieldBytes::default();
    let src = &bytes[bytes.len().saturating_sub(FIELD_BYTES_SIZE)..];
    ret[FIELD_BYTES_SIZE - src.len()..].copy_from_slice(src);
    ret
}

//! Elliptic-curve operations over secp256k1

use bitcoin::secp256k1::{self, Scalar, Secp256k1};
use tracing::trace;

use crate::domain::primitives::{EcPrivate, EcPublic};
use crate::domain::{DomainError, DomainResult};

/// Multiply a curve point by a scalar, keeping the point's compression.
///
/// Fails with `ProductOutOfRange` when the library rejects the tweak
/// (zero or overflowing scalar).
pub fn multiply(point: &EcPublic, scalar: &Scalar) -> DomainResult<EcPublic> {
    let secp = Secp256k1::verification_only();
    let product = point
        .point()
        .mul_tweak(&secp, scalar)
        .map_err(|e| {
            trace!("mul_tweak rejected: {}", e);
            DomainError::ProductOutOfRange
        })?;
    Ok(EcPublic::new(bitcoin::PublicKey {
        compressed: point.is_compressed(),
        inner: product,
    }))
}

/// Derive the public key `secret * G`.
pub fn to_public(secret: &EcPrivate, compressed: bool) -> EcPublic {
    let secp = Secp256k1::signing_only();
    let inner = secp256k1::PublicKey::from_secret_key(&secp, secret.secret());
    EcPublic::new(bitcoin::PublicKey { compressed, inner })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const G: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const G_UNCOMPRESSED: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    fn secret(hex: &str) -> EcPrivate {
        hex.parse().expect("valid secret")
    }

    #[rstest]
    #[case(
        "0000000000000000000000000000000000000000000000000000000000000001",
        G
    )]
    #[case(
        "0000000000000000000000000000000000000000000000000000000000000002",
        "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"
    )]
    #[case(
        "0000000000000000000000000000000000000000000000000000000000000003",
        "02f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"
    )]
    #[case(
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
        "0379be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    )]
    fn given_generator_when_multiplying_then_yields_known_multiple(
        #[case] scalar: &str,
        #[case] expected: &str,
    ) {
        let point: EcPublic = G.parse().expect("valid point");
        let product = multiply(&point, &secret(scalar).scalar()).expect("in range");
        assert_eq!(product.to_string(), expected);
    }

    #[test]
    fn given_uncompressed_point_when_multiplying_by_one_then_stays_uncompressed() {
        let point: EcPublic = G_UNCOMPRESSED.parse().expect("valid point");
        let one = secret("0000000000000000000000000000000000000000000000000000000000000001");
        let product = multiply(&point, &one.scalar()).expect("in range");
        assert_eq!(product.to_string(), G_UNCOMPRESSED);
    }

    #[test]
    fn given_zero_scalar_when_multiplying_then_product_out_of_range() {
        let point: EcPublic = G.parse().expect("valid point");
        let err = multiply(&point, &Scalar::ZERO).unwrap_err();
        assert_eq!(err, DomainError::ProductOutOfRange);
    }

    #[test]
    fn given_secret_two_when_deriving_public_then_matches_multiplied_generator() {
        let two = secret("0000000000000000000000000000000000000000000000000000000000000002");
        let point: EcPublic = G.parse().expect("valid point");
        let derived = to_public(&two, true);
        assert_eq!(derived, multiply(&point, &two.scalar()).expect("in range"));
    }

    #[test]
    fn given_secret_one_when_deriving_uncompressed_then_is_generator() {
        let one = secret("0000000000000000000000000000000000000000000000000000000000000001");
        assert_eq!(to_public(&one, false).to_string(), G_UNCOMPRESSED);
    }
}

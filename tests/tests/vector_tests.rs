//! Published-vector tests for ECDSA P-256 verification

use ecverify::prelude::*;
use ecverify_algorithms::ec::p256::Scalar;
use ecverify_tests::signer;
use ecverify_tests::vectors::{RFC6979_SAMPLE_NONCE, RFC6979_SECRET, VERIFY_VECTORS};

fn scalar(hex_str: &str) -> Scalar {
    Scalar::deserialize(&hex::decode(hex_str).unwrap()).unwrap()
}

#[test]
fn test_verify_vectors() {
    for vector in VERIFY_VECTORS {
        let v = vector.decode();
        let result = EcdsaP256::verify_bytes(&v.message, &v.signature, &v.public_key)
            .unwrap_or_else(|e| panic!("{}: unexpected error {}", vector.name, e));
        assert_eq!(result, vector.expected, "vector {}", vector.name);
    }
}

#[test]
fn test_verify_vectors_through_der() {
    for vector in VERIFY_VECTORS {
        let v = vector.decode();
        let der = EcdsaP256Signature::decode_fixed(&v.signature).unwrap().to_der().unwrap();
        let result = EcdsaP256::verify_der(&v.message, &der, &v.public_key).unwrap();
        assert_eq!(result, vector.expected, "vector {}", vector.name);
    }
}

#[test]
fn test_reference_signer_reproduces_rfc6979() {
    let d = scalar(RFC6979_SECRET);
    let k = scalar(RFC6979_SAMPLE_NONCE);

    let rfc = VERIFY_VECTORS
        .iter()
        .find(|v| v.name == "rfc6979-a25-sample")
        .unwrap()
        .decode();

    assert_eq!(signer::public_key(&d).to_bytes().to_vec(), rfc.public_key);

    let signature = signer::sign_with_nonce(&d, &k, b"sample").unwrap();
    assert_eq!(signature.to_bytes().to_vec(), rfc.signature);
}

#[test]
fn test_wrong_length_inputs() {
    let v = VERIFY_VECTORS[0].decode();

    for len in [0usize, 63, 65, 72] {
        let mut sig = v.signature.clone();
        sig.resize(len, 0);
        assert!(matches!(
            EcdsaP256::verify_bytes(&v.message, &sig, &v.public_key),
            Err(Error::MalformedSignature { .. })
        ));
    }

    for len in [0usize, 63, 65] {
        let mut key = v.public_key.clone();
        key.resize(len, 0);
        assert!(matches!(
            EcdsaP256::verify_bytes(&v.message, &v.signature, &key),
            Err(Error::InvalidPublicKey { .. })
        ));
    }
}

#[test]
fn test_empty_message() {
    let d = scalar(RFC6979_SECRET);
    let key = signer::public_key(&d);
    let k = scalar(RFC6979_SAMPLE_NONCE);
    let signature = signer::sign_with_nonce(&d, &k, b"").unwrap();
    assert!(EcdsaP256::verify(b"", &signature, &key).unwrap());
    assert!(!EcdsaP256::verify(b"\0", &signature, &key).unwrap());
}

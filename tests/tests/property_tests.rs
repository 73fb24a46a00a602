//! Property-based tests for ECDSA P-256 verification
//!
//! Scalar multiplication is slow in debug builds, so case counts stay small.

use ecverify::prelude::*;
use ecverify_algorithms::ec::p256::Scalar;
use ecverify_tests::signer;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// A valid (message, signature, key) triple from a seeded signer
fn signed_triple(seed: u64, message: &[u8]) -> (EcdsaP256PublicKey, EcdsaP256Signature) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let d = signer::random_scalar(&mut rng);
    let signature = signer::sign(&mut rng, &d, message);
    (signer::public_key(&d), signature)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn signed_messages_verify(
        seed in any::<u64>(),
        message in prop::collection::vec(any::<u8>(), 0..128)
    ) {
        let (key, signature) = signed_triple(seed, &message);
        prop_assert!(EcdsaP256::verify(&message, &signature, &key).unwrap());
        prop_assert!(
            EcdsaP256::verify_bytes(&message, &signature.to_bytes(), &key.to_bytes()).unwrap()
        );
    }

    #[test]
    fn message_bit_flip_rejected(
        seed in any::<u64>(),
        message in prop::collection::vec(any::<u8>(), 1..128),
        bit in any::<prop::sample::Index>()
    ) {
        let (key, signature) = signed_triple(seed, &message);
        let mut tampered = message.clone();
        let i = bit.index(tampered.len() * 8);
        tampered[i / 8] ^= 1 << (i % 8);
        prop_assert!(!EcdsaP256::verify(&tampered, &signature, &key).unwrap());
    }

    #[test]
    fn signature_bit_flip_rejected_or_malformed(
        seed in any::<u64>(),
        bit in 0usize..512
    ) {
        let message = b"bit flips in r and s";
        let (key, signature) = signed_triple(seed, message);
        let mut bytes = signature.to_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);
        match EcdsaP256::verify_bytes(message, &bytes, &key.to_bytes()) {
            Ok(valid) => prop_assert!(!valid),
            Err(e) => {
                let is_malformed = matches!(e, Error::MalformedSignature { .. });
                prop_assert!(is_malformed, "unexpected error: {:?}", e);
            }
        }
    }

    #[test]
    fn key_bit_flip_rejected_or_invalid(
        seed in any::<u64>(),
        bit in 0usize..512
    ) {
        let message = b"bit flips in the public key";
        let (key, signature) = signed_triple(seed, message);
        let mut bytes = key.to_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);
        match EcdsaP256::verify_bytes(message, &signature.to_bytes(), &bytes) {
            Ok(valid) => prop_assert!(!valid),
            Err(e) => {
                let is_invalid_key = matches!(e, Error::InvalidPublicKey { .. });
                prop_assert!(is_invalid_key, "unexpected error: {:?}", e);
            }
        }
    }

    #[test]
    fn fixed_and_der_decoders_agree(
        r in any::<[u8; 32]>(),
        s in any::<[u8; 32]>()
    ) {
        let mut fixed = [0u8; 64];
        fixed[..32].copy_from_slice(&r);
        fixed[32..].copy_from_slice(&s);

        match EcdsaP256Signature::decode_fixed(&fixed) {
            Ok(sig) => {
                let from_der = EcdsaP256Signature::decode_der(&sig.to_der().unwrap()).unwrap();
                prop_assert_eq!(from_der, sig);
            }
            // out-of-range components: the DER form carries the same integers
            Err(_) => {
                let r_ok = Scalar::new(r).is_ok();
                let s_ok = Scalar::new(s).is_ok();
                prop_assert!(!(r_ok && s_ok));
            }
        }
    }
}

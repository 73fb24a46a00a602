//! Concurrent verification from multiple threads

use ecverify::prelude::*;
use ecverify_tests::signer;
use ecverify_tests::vectors::VERIFY_VECTORS;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_public_types_are_send_sync() {
    assert_send_sync::<EcdsaP256PublicKey>();
    assert_send_sync::<EcdsaP256Signature>();
    assert_send_sync::<Error>();
}

#[test]
fn test_parallel_verification_of_shared_inputs() {
    let v = VERIFY_VECTORS[0].decode();
    let key = Arc::new(EcdsaP256PublicKey::from_bytes(&v.public_key).unwrap());
    let signature = Arc::new(EcdsaP256Signature::decode_fixed(&v.signature).unwrap());
    let message = Arc::new(v.message);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let key = Arc::clone(&key);
            let signature = Arc::clone(&signature);
            let message = Arc::clone(&message);
            thread::spawn(move || {
                let valid = EcdsaP256::verify(&message, &signature, &key).unwrap();
                let mut tampered = message.to_vec();
                tampered[i] ^= 0x80;
                let invalid = EcdsaP256::verify(&tampered, &signature, &key).unwrap();
                (valid, invalid)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (true, false));
    }
}

#[test]
fn test_parallel_independent_keys() {
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            thread::spawn(move || {
                let mut rng = ChaCha20Rng::seed_from_u64(seed);
                let d = signer::random_scalar(&mut rng);
                let message = seed.to_be_bytes();
                let signature = signer::sign(&mut rng, &d, &message);
                let key = signer::public_key(&d);
                EcdsaP256::verify(&message, &signature, &key).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

//! Published ECDSA P-256 / SHA-256 verification vectors

/// One verification case, hex-encoded
#[derive(Debug, Clone, Copy)]
pub struct VerifyVector {
    pub name: &'static str,
    /// Raw public key `x ∥ y`
    pub public_key: &'static str,
    /// Raw signature `r ∥ s`
    pub signature: &'static str,
    /// Message bytes (hashed with SHA-256 by the verifier)
    pub message: &'static str,
    pub expected: bool,
}

/// Decoded byte form of a [`VerifyVector`]
#[derive(Debug, Clone)]
pub struct DecodedVector {
    pub public_key: Vec<u8>,
    pub signature: Vec<u8>,
    pub message: Vec<u8>,
}

impl VerifyVector {
    pub fn decode(&self) -> DecodedVector {
        DecodedVector {
            public_key: hex::decode(self.public_key).expect("fixture hex"),
            signature: hex::decode(self.signature).expect("fixture hex"),
            message: hex::decode(self.message).expect("fixture hex"),
        }
    }
}

/// RFC 6979 A.2.5 private key
pub const RFC6979_SECRET: &str = "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721";

/// RFC 6979 A.2.5 nonce for SHA-256 and message "sample"
pub const RFC6979_SAMPLE_NONCE: &str =
    "a6e3c57dd01abe90086538398355dd4c3b17aa873382b0f24d6129493d8aad60";

pub const VERIFY_VECTORS: &[VerifyVector] = &[
    VerifyVector {
        name: "capture-1",
        public_key: "77d28f103c37eb03d62decd4fdbda01dd69fea878325bc1bebc5074a876455eb\
                     9d2f4e719ba0a0838df3b07479ed2179358f711fe9d004b693c62922e95772d0",
        signature: "61516a23f99962b4417c87d26592b52060b19c5b7481a2318c665af540ae721c\
                    69611c073c6e34a358343e9ad43b4966ce0f9a8914c5e77f2cb3fe28ae2bf4d0",
        message: "38900d0000000000bd3bde894f6ddb7e5ae89e7d7c1eef5c271875c5a2bd6b75\
                  faba07c8c8423902e8c4d7a4ebf3542d7d8eee65a996bb45211e546bd995ae5b\
                  1d099a90464886981b9e479971010000214e0000bf1740f6c1e1f913d2f307b2\
                  9b8082551ba9a5c5",
        expected: true,
    },
    VerifyVector {
        name: "rfc6979-a25-sample",
        public_key: "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6\
                     7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299",
        signature: "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716\
                    f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8",
        // "sample"
        message: "73616d706c65",
        expected: true,
    },
    VerifyVector {
        name: "rfc6979-a25-sample-wrong-message",
        public_key: "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6\
                     7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299",
        signature: "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716\
                    f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8",
        // "test"
        message: "74657374",
        expected: false,
    },
    VerifyVector {
        name: "capture-1-signature-under-rfc6979-key",
        public_key: "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6\
                     7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299",
        signature: "61516a23f99962b4417c87d26592b52060b19c5b7481a2318c665af540ae721c\
                    69611c073c6e34a358343e9ad43b4966ce0f9a8914c5e77f2cb3fe28ae2bf4d0",
        message: "38900d0000000000bd3bde894f6ddb7e5ae89e7d7c1eef5c271875c5a2bd6b75\
                  faba07c8c8423902e8c4d7a4ebf3542d7d8eee65a996bb45211e546bd995ae5b\
                  1d099a90464886981b9e479971010000214e0000bf1740f6c1e1f913d2f307b2\
                  9b8082551ba9a5c5",
        expected: false,
    },
];

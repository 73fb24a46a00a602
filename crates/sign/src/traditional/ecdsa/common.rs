//! Common utilities for ECDSA implementations
//!
//! Strict ASN.1 DER handling for `SEQUENCE { INTEGER r, INTEGER s }`.
//! Only canonical encodings are accepted: short-form lengths, minimal
//! non-negative integers and no trailing data.

use ecverify_api::{Error as ApiError, Result as ApiResult};

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;
const CONTEXT: &str = "ECDSA DER parsing";
const MAX_SHORT_FORM_LEN: usize = 0x7F;

/// ECDSA signature components (r, s) as unsigned big-endian magnitudes
///
/// Leading zero bytes are stripped; zero is represented as a single `0x00`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureComponents {
    pub r: Vec<u8>,
    pub s: Vec<u8>,
}

impl SignatureComponents {
    /// Serialize signature to DER format using minimal INTEGER encodings
    ///
    /// Fails when the SEQUENCE body would need a long-form length, which no
    /// P-256 signature does.
    pub fn to_der(&self) -> ApiResult<Vec<u8>> {
        let r = encode_integer(&self.r);
        let s = encode_integer(&self.s);
        let body_len = r.len() + s.len();
        if body_len > MAX_SHORT_FORM_LEN {
            return Err(ApiError::malformed_signature(
                "ECDSA DER encoding",
                format!(
                    "SEQUENCE body of {} bytes exceeds the {}-byte short form",
                    body_len, MAX_SHORT_FORM_LEN
                ),
            ));
        }

        let mut der = Vec::with_capacity(2 + body_len);
        der.push(TAG_SEQUENCE);
        der.push(body_len as u8);
        der.extend_from_slice(&r);
        der.extend_from_slice(&s);
        Ok(der)
    }

    /// Parse signature from DER format
    pub fn from_der(der: &[u8]) -> ApiResult<Self> {
        let (tag, body, rest) = read_tlv(der)?;
        if tag != TAG_SEQUENCE {
            return Err(malformed("Invalid DER SEQUENCE tag"));
        }
        if !rest.is_empty() {
            return Err(malformed("Trailing bytes after DER SEQUENCE"));
        }

        let (r, body) = read_integer(body)?;
        let (s, body) = read_integer(body)?;
        if !body.is_empty() {
            return Err(malformed("Trailing bytes inside DER SEQUENCE"));
        }

        Ok(SignatureComponents { r, s })
    }
}

fn malformed(message: &'static str) -> ApiError {
    ApiError::malformed_signature(CONTEXT, message)
}

/// Split one tag-length-value element off the front of `input`
fn read_tlv(input: &[u8]) -> ApiResult<(u8, &[u8], &[u8])> {
    if input.len() < 2 {
        return Err(malformed("Truncated DER element"));
    }
    let tag = input[0];
    let len = input[1];
    // every valid P-256 signature fits in a short-form length
    if len & 0x80 != 0 {
        return Err(malformed("Long-form DER length"));
    }
    let len = len as usize;
    let rest = &input[2..];
    if rest.len() < len {
        return Err(malformed("DER length exceeds available data"));
    }
    Ok((tag, &rest[..len], &rest[len..]))
}

/// Read one non-negative, minimally encoded INTEGER
fn read_integer(input: &[u8]) -> ApiResult<(Vec<u8>, &[u8])> {
    let (tag, content, rest) = read_tlv(input)?;
    if tag != TAG_INTEGER {
        return Err(malformed("Invalid DER INTEGER tag"));
    }
    if content.is_empty() {
        return Err(malformed("Empty DER INTEGER"));
    }
    if content[0] & 0x80 != 0 {
        return Err(malformed("Negative DER INTEGER"));
    }
    if content.len() > 1 && content[0] == 0x00 {
        if content[1] & 0x80 == 0 {
            return Err(malformed("Non-minimal DER INTEGER"));
        }
        return Ok((content[1..].to_vec(), rest));
    }
    Ok((content.to_vec(), rest))
}

/// Encode a big-endian magnitude as a DER INTEGER element
fn encode_integer(bytes: &[u8]) -> Vec<u8> {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let magnitude = &bytes[first..];

    let mut out = Vec::with_capacity(3 + magnitude.len());
    out.push(TAG_INTEGER);
    if magnitude.is_empty() {
        out.extend_from_slice(&[0x01, 0x00]);
    } else if magnitude[0] & 0x80 != 0 {
        out.push((magnitude.len() + 1) as u8);
        out.push(0x00);
        out.extend_from_slice(magnitude);
    } else {
        out.push(magnitude.len() as u8);
        out.extend_from_slice(magnitude);
    }
    out
}

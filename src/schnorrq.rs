//! SchnorrQ signatures.
//!
//! SchnorrQ is a Schnorr-style signature scheme over FourQ, with SHA-512
//! as hash function. A private key is a 32-byte secret value; the public
//! key is the encoding of `s*G` where `s` is derived from the first half
//! of `SHA-512(secret)`. Signatures are 64 bytes: the encoded commitment
//! point `R` followed by the 32-byte encoding of the response scalar.
//!
//! Signing is deterministic: the per-signature nonce is derived from the
//! second half of the hashed secret and the message. Verification is
//! variable-time (it only handles public data).
//!
//! The low-level functions (`keygen()`, `sign()`, `verify()`) work on
//! plain byte arrays. The `PrivateKey` and `PublicKey` types wrap them
//! with an API in the style of the other signature schemes.

#![allow(non_snake_case)]

use sha2::{Sha512, Digest};
use zeroize::{Zeroize, Zeroizing};
use crate::fourq::{words_le, Point};
use crate::scalar::Scalar;
use crate::scratch::Scratch;
use crate::{CryptoRng, RngCore, Error, Result};

fn hash(data: &[u8]) -> Zeroizing<[u8; 64]> {
    let mut r = Zeroizing::new([0u8; 64]);
    let mut sh = Sha512::new();
    sh.update(data);
    r[..].copy_from_slice(&sh.finalize());
    r
}

// Secret scalar, from the first half of the hashed secret.
fn secret_scalar(k: &[u8; 64]) -> Scalar {
    Scalar::decode_reduce(&k[..32])
}

/// Computes the public key matching a secret key.
///
/// The secret key is an arbitrary sequence of 32 bytes, which should be
/// generated with a cryptographically secure random source.
pub fn keygen(secret_key: &[u8; 32]) -> [u8; 32] {
    let k = hash(&secret_key[..]);
    let mut s = secret_scalar(&k);
    let pk = Point::mulgen(&s).encode();
    s.zeroize();
    pk
}

/// Generates a new key pair `(secret_key, public_key)` from a
/// cryptographically secure random source.
pub fn full_keygen<T: CryptoRng + RngCore>(rng: &mut T)
    -> Result<([u8; 32], [u8; 32])>
{
    let mut sk = [0u8; 32];
    if let Err(e) = rng.try_fill_bytes(&mut sk) {
        log::debug!("schnorrq: random source failure");
        sk.zeroize();
        return Err(e.into());
    }
    let pk = keygen(&sk);
    Ok((sk, pk))
}

/// Signs a message.
///
/// The public key MUST match the secret key; it is not recomputed. The
/// signature is deterministic. An error is reported only if the scratch
/// buffer for hashing the message cannot be allocated.
pub fn sign(secret_key: &[u8; 32], public_key: &[u8; 32], msg: &[u8])
    -> Result<[u8; 64]>
{
    let k = hash(&secret_key[..]);

    // Nonce: r = H(k[32..64] || msg) mod r. The first 32 bytes of the
    // buffer are reserved for the encoded commitment.
    let mut tmp = Scratch::new(msg.len() + 64)?;
    let buf = tmp.as_mut_slice();
    buf[32..64].copy_from_slice(&k[32..64]);
    buf[64..].copy_from_slice(msg);
    let rh = hash(&buf[32..]);
    let mut r = Scalar::decode_reduce(&rh[..32]);

    // Commitment R = r*G.
    let R = Point::mulgen(&r).encode();

    // Challenge h = H(R || pk || msg).
    buf[..32].copy_from_slice(&R);
    buf[32..64].copy_from_slice(&public_key[..]);
    let h = hash(buf);
    let hs = Scalar::decode_reduce(&h[..32]);

    // Response S = r - h*k_lo mod r, with k_lo the first half of the
    // hashed secret taken as an unreduced 256-bit integer. The Montgomery
    // product with hs*2^256 cancels the Montgomery factor.
    let mut kw = words_le(&k[..32]);
    let mut kh = hs.to_montgomery().montgomery_mul_256(&kw);
    let S = r - kh;
    kw.zeroize();
    kh.zeroize();
    r.zeroize();

    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(&R);
    sig[32..].copy_from_slice(&S.encode32());
    Ok(sig)
}

/// Verifies a signature on a message.
///
/// Returned value is `Ok(true)` for a valid signature and `Ok(false)` for
/// a well-formed signature that does not match. Malformed inputs (a
/// reserved bit is set in the public key or the signature, or the
/// response value is out of range) yield `Error::InvalidParameter`; a
/// public key that does not decode to a curve point yields
/// `Error::Decoding`.
///
/// THIS FUNCTION IS NOT CONSTANT-TIME; it is meant for public data only.
pub fn verify(public_key: &[u8; 32], msg: &[u8], sig: &[u8; 64])
    -> Result<bool>
{
    // Bit 127 of the public key and of R must be zero; the response must
    // fit on 246 bits.
    if (public_key[15] & 0x80) != 0 || (sig[15] & 0x80) != 0
        || sig[63] != 0 || (sig[62] & 0xC0) != 0
    {
        log::debug!("schnorrq: reserved bits set in key or signature");
        return Err(Error::InvalidParameter);
    }
    let A = match Point::decode(&public_key[..]) {
        Some(A) => A,
        None => {
            log::debug!("schnorrq: public key does not decode");
            return Err(Error::Decoding);
        }
    };

    let mut tmp = Scratch::new(msg.len() + 64)?;
    let buf = tmp.as_mut_slice();
    buf[..32].copy_from_slice(&sig[..32]);
    buf[32..64].copy_from_slice(&public_key[..]);
    buf[64..].copy_from_slice(msg);
    let h = hash(buf);

    // s*G + h*A must be equal to R.
    let R = A.mul_add_mulgen_w64_vartime(
        &words_le(&h[..32]), &words_le(&sig[32..64]))?;
    Ok(R.encode()[..] == sig[..32])
}

/// Verifies a signature on a message, reporting a mismatch as
/// `Error::SignatureVerification`.
pub fn verify_strict(public_key: &[u8; 32], msg: &[u8], sig: &[u8; 64])
    -> Result<()>
{
    if verify(public_key, msg, sig)? {
        Ok(())
    } else {
        log::debug!("schnorrq: signature mismatch");
        Err(Error::SignatureVerification)
    }
}

// ========================================================================

/// A SchnorrQ private key.
///
/// It holds the 32-byte secret and the matching public key. The secret
/// is zeroized when the value is dropped.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    secret: [u8; 32],
    pub public_key: PublicKey,
}

/// A SchnorrQ public key.
///
/// It wraps around the curve point, but also includes a copy of the
/// encoded point. If either is modified, then the two values MUST match.
#[derive(Clone, Copy, Debug)]
pub struct PublicKey {
    pub point: Point,
    pub encoded: [u8; 32],
}

impl PrivateKey {

    /// Generates a new private key from a cryptographically secure RNG.
    pub fn generate<T: CryptoRng + RngCore>(rng: &mut T) -> Result<Self> {
        let (mut sk, _) = full_keygen(rng)?;
        let r = Self::from_seed(&sk);
        sk.zeroize();
        Ok(r)
    }

    /// Instantiates a private key from a 32-byte secret.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let k = hash(&seed[..]);
        let mut s = secret_scalar(&k);
        let public_key = PublicKey::from_point(&Point::mulgen(&s));
        s.zeroize();
        Self { secret: *seed, public_key }
    }

    /// Decodes a private key from bytes.
    ///
    /// If the source slice has length exactly 32 bytes, then these bytes
    /// are the secret (see `from_seed()`). Otherwise, `None` is returned.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() != 32 {
            return None;
        }
        let mut seed = [0u8; 32];
        seed[..].copy_from_slice(buf);
        let r = Self::from_seed(&seed);
        seed.zeroize();
        Some(r)
    }

    /// Encodes a private key into 32 bytes (a copy of the secret).
    pub fn encode(&self) -> [u8; 32] {
        self.secret
    }

    /// Signs a message.
    pub fn sign(&self, m: &[u8]) -> Result<[u8; 64]> {
        sign(&self.secret, &self.public_key.encoded, m)
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl PublicKey {

    /// Creates an instance from a curve point.
    pub fn from_point(point: &Point) -> Self {
        Self { point: *point, encoded: point.encode() }
    }

    /// Decodes the provided bytes as a public key.
    ///
    /// This returns `None` if the source slice does not have length
    /// exactly 32 bytes, or if the bytes are not the valid encoding of a
    /// curve point.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let point = Point::decode(buf)?;
        let mut encoded = [0u8; 32];
        encoded[..].copy_from_slice(&buf[..32]);
        Some(Self { point, encoded })
    }

    /// Encodes the key into exactly 32 bytes.
    pub fn encode(self) -> [u8; 32] {
        self.encoded
    }

    /// Verifies a signature on a message.
    ///
    /// Return value is `true` on a valid signature, `false` otherwise
    /// (including when the signature is malformed or does not have
    /// length exactly 64 bytes).
    ///
    /// Note: this function is not constant-time; it assumes that the
    /// public key and signature value are public data.
    pub fn verify(self, sig: &[u8], m: &[u8]) -> bool {
        if sig.len() != 64 {
            return false;
        }
        let mut bsig = [0u8; 64];
        bsig[..].copy_from_slice(sig);
        matches!(verify(&self.encoded, m, &bsig), Ok(true))
    }
}

// ========================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::{RngError, Vec};

    // Deterministic RNG for reproducible tests: blocks are
    // SHA-512(seed || counter), consumed in full before the next one.
    struct DRNG {
        seed: [u8; 64],
        block: [u8; 64],
        ctr: u64,
        ptr: usize,
    }

    impl DRNG {

        fn from_seed(seed: &[u8]) -> Self {
            let mut d = Self { seed: [0u8; 64], block: [0u8; 64], ctr: 0, ptr: 64 };
            d.seed[..].copy_from_slice(&Sha512::digest(seed));
            d
        }

        fn refill(&mut self) {
            let mut sh = Sha512::new();
            sh.update(&self.seed);
            sh.update(&self.ctr.to_le_bytes());
            self.block[..].copy_from_slice(&sh.finalize());
            self.ctr += 1;
            self.ptr = 0;
        }
    }

    impl RngCore for DRNG {

        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for b in dest.iter_mut() {
                if self.ptr == self.block.len() {
                    self.refill();
                }
                *b = self.block[self.ptr];
                self.ptr += 1;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8])
            -> core::result::Result<(), RngError>
        {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for DRNG { }

    // RNG that always fails.
    struct BadRng;

    impl RngCore for BadRng {
        fn next_u32(&mut self) -> u32 { 0 }
        fn next_u64(&mut self) -> u64 { 0 }
        fn fill_bytes(&mut self, _dest: &mut [u8]) { }
        fn try_fill_bytes(&mut self, _dest: &mut [u8])
            -> core::result::Result<(), RngError>
        {
            let code = core::num::NonZeroU32::new(RngError::CUSTOM_START)
                .unwrap();
            Err(RngError::from(code))
        }
    }

    impl CryptoRng for BadRng { }

    #[test]
    fn kat() {
        let mut sk = [0u8; 32];
        for i in 0..32 {
            sk[i] = i as u8;
        }
        let pk = keygen(&sk);
        assert_eq!(&pk[..], &hex::decode("62624dc8d47b184664fa8b13a54f2e2d58194c577d1c0d59d2fa611a2b2e595a").unwrap()[..]);
        let sig = sign(&sk, &pk, b"abc").unwrap();
        assert_eq!(&sig[..], &hex::decode("31f6f86aefd0c18b479b7746b87e30434b864634aa9a44cf012f47bc1bf6afd2ba7e1d2ac88b1db17f6d429fe3b476459ffa5ab4a54c4b78a92eff66b21d0600").unwrap()[..]);
        assert_eq!(verify(&pk, b"abc", &sig), Ok(true));
        assert_eq!(verify(&pk, b"abd", &sig), Ok(false));
        assert_eq!(verify_strict(&pk, b"abc", &sig), Ok(()));
        assert_eq!(verify_strict(&pk, b"abd", &sig),
            Err(Error::SignatureVerification));
    }

    #[test]
    fn sign_verify() {
        let mut rng = DRNG::from_seed(b"schnorrq sign_verify");
        for i in 0..20 {
            let (sk, pk) = full_keygen(&mut rng).unwrap();
            let mut msg = Vec::new();
            for j in 0..(i * 7) {
                msg.push((i + j) as u8);
            }
            let sig = sign(&sk, &pk, &msg).unwrap();
            assert_eq!(sign(&sk, &pk, &msg).unwrap(), sig);
            assert_eq!(verify(&pk, &msg, &sig), Ok(true));

            // Flip every signature bit: no flipped signature may verify;
            // flips of reserved bits must be rejected as malformed.
            for bit in 0..512 {
                let mut s2 = sig;
                s2[bit >> 3] ^= 1u8 << (bit & 7);
                let rv = verify(&pk, &msg, &s2);
                assert!(!matches!(rv, Ok(true)));
                if bit == 127 || bit >= 502 {
                    assert_eq!(rv, Err(Error::InvalidParameter));
                }
            }

            // Altered message.
            for bit in 0..(msg.len() << 3) {
                let mut m2 = msg.clone();
                m2[bit >> 3] ^= 1u8 << (bit & 7);
                assert_eq!(verify(&pk, &m2, &sig), Ok(false));
            }
            let mut m2 = msg.clone();
            m2.push(0x00);
            assert_eq!(verify(&pk, &m2, &sig), Ok(false));

            // Another key.
            let (_, pk2) = full_keygen(&mut rng).unwrap();
            assert!(!matches!(verify(&pk2, &msg, &sig), Ok(true)));
        }
    }

    #[test]
    fn malformed() {
        let mut sk = [0u8; 32];
        sk[0] = 1;
        let pk = keygen(&sk);
        let sig = sign(&sk, &pk, b"hello").unwrap();

        let mut pk2 = pk;
        pk2[15] |= 0x80;
        assert_eq!(verify(&pk2, b"hello", &sig), Err(Error::InvalidParameter));

        // y = 2^127 - 1 (non-canonical) in the real part.
        let mut pk3 = [0u8; 32];
        for i in 0..16 {
            pk3[i] = 0xFF;
        }
        pk3[15] = 0x7F;
        assert_eq!(verify(&pk3, b"hello", &sig), Err(Error::Decoding));

        let mut s2 = sig;
        s2[63] = 0x01;
        assert_eq!(verify(&pk, b"hello", &s2), Err(Error::InvalidParameter));
    }

    #[test]
    fn key_types() {
        let mut rng = DRNG::from_seed(b"schnorrq key_types");
        let skey = PrivateKey::generate(&mut rng).unwrap();
        let enc = skey.encode();
        let skey2 = PrivateKey::decode(&enc).unwrap();
        assert_eq!(skey.public_key.encoded, skey2.public_key.encoded);
        assert_eq!(keygen(&enc), skey.public_key.encode());
        assert!(PrivateKey::decode(&enc[..31]).is_none());

        let pkey = PublicKey::decode(&skey.public_key.encode()).unwrap();
        assert!(pkey.point.equals(skey.public_key.point) == 0xFFFFFFFF);
        assert!(PublicKey::decode(&[0u8; 31]).is_none());

        let sig = skey.sign(b"message").unwrap();
        assert!(pkey.verify(&sig, b"message"));
        assert!(!pkey.verify(&sig, b"massage"));
        assert!(!pkey.verify(&sig[..63], b"message"));

        assert!(PrivateKey::generate(&mut BadRng).is_err());
        assert_eq!(full_keygen(&mut BadRng), Err(Error::Random));
    }
}

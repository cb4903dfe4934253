//! Key agreement (Diffie-Hellman) over FourQ.
//!
//! A secret key is an arbitrary 32-byte value, interpreted as an unsigned
//! little-endian 256-bit integer (it is not reduced). The public key is
//! the encoding of the product of the generator by the secret key
//! (reduced modulo the group order). The shared secret is the `y`
//! coordinate of the product of the peer public key by the cofactor and
//! the secret key, encoded over 32 bytes.
//!
//! Public keys with the top bit of the real part of `y` set are rejected;
//! so are public keys that do not decode, and peer keys that yield the
//! neutral point after cofactor clearing.

#![allow(non_snake_case)]

use zeroize::Zeroize;
use crate::fourq::Point;
use crate::scalar::Scalar;
use crate::{CryptoRng, RngCore, Error, Result};

/// Computes the public key matching a secret key.
pub fn public_key(secret_key: &[u8; 32]) -> [u8; 32] {
    let mut s = Scalar::decode_reduce(&secret_key[..]);
    let pk = Point::mulgen(&s).encode();
    s.zeroize();
    pk
}

/// Generates a new key pair `(secret_key, public_key)` from a
/// cryptographically secure random source.
pub fn keygen<T: CryptoRng + RngCore>(rng: &mut T)
    -> Result<([u8; 32], [u8; 32])>
{
    let mut sk = [0u8; 32];
    if let Err(e) = rng.try_fill_bytes(&mut sk) {
        log::debug!("ecdh: random source failure");
        sk.zeroize();
        return Err(e.into());
    }
    let pk = public_key(&sk);
    Ok((sk, pk))
}

/// Computes the shared secret from our secret key and the peer public key.
///
/// Errors:
///
///  - `Error::InvalidParameter`: the top bit of byte 15 of the peer key
///    is set.
///  - `Error::InvalidPoint`: the peer key does not decode to a curve point.
///  - `Error::SharedKey`: the peer key is a low-order point (the result
///    of the multiplication is the neutral).
pub fn shared_secret(secret_key: &[u8; 32], peer_public_key: &[u8; 32])
    -> Result<[u8; 32]>
{
    if (peer_public_key[15] & 0x80) != 0 {
        log::debug!("ecdh: reserved bit set in peer public key");
        return Err(Error::InvalidParameter);
    }
    let P = match Point::decode(&peer_public_key[..]) {
        Some(P) => P,
        None => {
            log::debug!("ecdh: peer public key does not decode");
            return Err(Error::InvalidPoint);
        }
    };
    let Q = P.mul_checked(secret_key, true)?;
    if Q.isneutral() != 0 {
        log::debug!("ecdh: shared point is the neutral");
        return Err(Error::SharedKey);
    }
    Ok(Q.y().encode32())
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::RngError;
    use sha2::{Sha256, Digest};

    // Counter-mode RNG over SHA-256, for reproducible tests.
    struct CtrRng {
        seed: [u8; 32],
        ctr: u64,
    }

    impl RngCore for CtrRng {

        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(32) {
                let mut sh = Sha256::new();
                sh.update(&self.seed);
                sh.update(&self.ctr.to_le_bytes());
                self.ctr += 1;
                let v = sh.finalize();
                chunk.copy_from_slice(&v[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8])
            -> core::result::Result<(), RngError>
        {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for CtrRng { }

    #[test]
    fn kat() {
        let ska = [0x11u8; 32];
        let skb = [0x22u8; 32];
        let pka = public_key(&ska);
        let pkb = public_key(&skb);
        assert_eq!(&pka[..], &hex::decode("d5145a67a0273cff905653bd50f80a785df45d0dbbb468fb560fb5642711a2a7").unwrap()[..]);
        assert_eq!(&pkb[..], &hex::decode("5f68aea054d9bd0ece89100ecc8c18540a3b8c2d7f8df389bcb7b1b07d1a9bf1").unwrap()[..]);
        let ss = hex::decode("1777a9230cc5e1f07060a7136d7adc0b2c6cae11fcb5afc6ad7eb7411f3bc04c").unwrap();
        assert_eq!(&shared_secret(&ska, &pkb).unwrap()[..], &ss[..]);
        assert_eq!(&shared_secret(&skb, &pka).unwrap()[..], &ss[..]);
    }

    #[test]
    fn symmetry() {
        let mut rng = CtrRng { seed: [0x5Au8; 32], ctr: 0 };
        for _ in 0..10 {
            let (ska, pka) = keygen(&mut rng).unwrap();
            let (skb, pkb) = keygen(&mut rng).unwrap();
            let s1 = shared_secret(&ska, &pkb).unwrap();
            let s2 = shared_secret(&skb, &pka).unwrap();
            assert_eq!(s1, s2);
        }
    }

    #[test]
    fn rejections() {
        let sk = [0x33u8; 32];
        let mut pk = public_key(&[0x44u8; 32]);
        pk[15] |= 0x80;
        assert_eq!(shared_secret(&sk, &pk), Err(Error::InvalidParameter));

        // Non-canonical y (real part equal to p).
        let mut bad = [0u8; 32];
        for i in 0..15 {
            bad[i] = 0xFF;
        }
        bad[15] = 0x7F;
        assert_eq!(shared_secret(&sk, &bad), Err(Error::InvalidPoint));

        // The neutral point (y = 1) decodes but is rejected.
        let neutral = Point::NEUTRAL.encode();
        assert_eq!(shared_secret(&sk, &neutral), Err(Error::SharedKey));
    }
}

// Scalar decomposition and recodings used by the three multiplication
// routines:
//
//  - decompose() splits a 256-bit integer into four 64-bit sub-scalars
//    (the first one is always odd), with the lattice reduction matching
//    the eigenvalues of phi and psi;
//  - recode_glv4() turns the four sub-scalars into 65 signed digits in
//    0..7 (indexes in the eight-point table of variable-base
//    multiplication);
//  - mlsb_set_recode() computes the modified LSB-set comb
//    representation of an odd scalar (fixed-base multiplication);
//  - wnaf_recode() computes a width-w NAF of a 64-bit sub-scalar
//    (double-base multiplication, not constant-time).

use super::{D_FIXEDBASE, L_FIXEDBASE};
use crate::scalar::{mul256, Scalar};

/// Eigenvalue of phi on the prime-order subgroup.
pub const LAMBDA_PHI: Scalar = Scalar::w64le(
    0xCDF0E63CE8997864, 0x24874F0B5E4DAA9B,
    0x83C18F03C13D7376, 0x0006D9069DC876C8);

/// Eigenvalue of psi on the prime-order subgroup.
pub const LAMBDA_PSI: Scalar = Scalar::w64le(
    0x5DC7F2B7CDFD2A88, 0xCB3688CA09EF0E88,
    0x8C4C2510AB53B51E, 0x0018C47535351926);

// Offsets (c) and reduced lattice basis (b) for the decomposition.
const C1: u64 = 0x72482C5251A4559C;
const C2: u64 = 0x59F95B0ADD276F6C;
const C3: u64 = 0x7DD2D17C4625FA78;
const C4: u64 = 0x6BC57DEF56CE8877;

const B11: u64 = 0x0906FF27E0A0A196;
const B12: u64 = 0x1363E862C22A2DA0;
const B13: u64 = 0x07426031ECC8030F;
const B14: u64 = 0x084F739986B9E651;
const B21: u64 = 0x1D495BEA84FCC2D4;
const B24: u64 = 0x25DBC5BC8DD167D0;
const B31: u64 = 0x17ABAD1D231F0302;
const B32: u64 = 0x02C4211AE388DA51;
const B33: u64 = 0x2E4D21C98927C49F;
const B34: u64 = 0x0A9E6F44C02ECD97;
const B41: u64 = 0x136E340A9108C83F;
const B42: u64 = 0x3122DF2DC3E0FF32;
const B43: u64 = 0x068A49F02AA8A9B5;
const B44: u64 = 0x18D5087896DE0AEA;

// Babai rounding constants: ELLi = floor(2^256 * alpha_i / r).
const ELL1: [u64; 4] = [
    0x259686E09D1A7D4F, 0xF75682ACE6A6BD66, 0xFC5BB5C5EA2BE5DF, 0x07 ];
const ELL2: [u64; 4] = [
    0xD1BA1D84DD627AFB, 0x2BD235580F468D8D, 0x8FD4B04CAA6C0F8A, 0x03 ];
const ELL3: [u64; 4] = [
    0x9B291A33678C203C, 0xC42BD6C965DCA902, 0xD038BF8D0BFFBAF6, 0x00 ];
const ELL4: [u64; 4] = [
    0x12E5666B77E7FDC0, 0x81CBDC3714983D82, 0x1B073877A22D8410, 0x03 ];

// (k*ell) >> 256, truncated to 64 bits.
#[inline(always)]
fn mul_truncate(k: &[u64; 4], ell: &[u64; 4]) -> u64 {
    mul256(k, ell)[4]
}

/// Splits a 256-bit integer `k` (four 64-bit limbs, low-to-high order)
/// into four 64-bit sub-scalars `a1..a4` such that
/// `k = a1 + a2*LAMBDA_PHI + a3*LAMBDA_PSI + a4*LAMBDA_PHI*LAMBDA_PSI`
/// modulo r. The first sub-scalar is always odd. Constant-time.
pub fn decompose(k: &[u64; 4]) -> [u64; 4] {
    let a1 = mul_truncate(k, &ELL1);
    let a2 = mul_truncate(k, &ELL2);
    let a3 = mul_truncate(k, &ELL3);
    let a4 = mul_truncate(k, &ELL4);

    let t = k[0]
        .wrapping_sub(a1.wrapping_mul(B11))
        .wrapping_sub(a2.wrapping_mul(B21))
        .wrapping_sub(a3.wrapping_mul(B31))
        .wrapping_sub(a4.wrapping_mul(B41))
        .wrapping_add(C1);

    // If t is even, the lattice vector b4 is added to make it odd.
    let m = (t & 1).wrapping_sub(1);

    let s0 = t.wrapping_add(m & B41);
    let s1 = a1.wrapping_mul(B12)
        .wrapping_add(a2)
        .wrapping_sub(a3.wrapping_mul(B32))
        .wrapping_sub(a4.wrapping_mul(B42))
        .wrapping_add(C2)
        .wrapping_add(m & B42);
    let s2 = a3.wrapping_mul(B33)
        .wrapping_sub(a1.wrapping_mul(B13))
        .wrapping_sub(a2)
        .wrapping_add(a4.wrapping_mul(B43))
        .wrapping_add(C3)
        .wrapping_sub(m & B43);
    let s3 = a1.wrapping_mul(B14)
        .wrapping_sub(a2.wrapping_mul(B24))
        .wrapping_sub(a3.wrapping_mul(B34))
        .wrapping_add(a4.wrapping_mul(B44))
        .wrapping_add(C4)
        .wrapping_sub(m & B44);
    [ s0, s1, s2, s3 ]
}

/// Recodes four sub-scalars (output of `decompose()`; the first one
/// MUST be odd) into 65 digits and 65 sign masks.
///
/// Digit `i` is in the 0..7 range: bit 0, 1 and 2 select whether phi(P),
/// psi(P) and psi(phi(P)), respectively, are added to P. The sign mask
/// is 0xFFFFFFFF for a positive digit, 0x00000000 for a negative one.
/// The top digit (index 64) is always positive. Constant-time.
pub fn recode_glv4(scalars: &[u64; 4]) -> ([u32; 65], [u32; 65]) {
    let mut s = *scalars;
    let mut digits = [0u32; 65];
    let mut signs = [0u32; 65];
    signs[64] = 0xFFFFFFFF;

    for i in 0..64 {
        s[0] >>= 1;
        let bit0 = (s[0] as u32) & 1;
        signs[i] = bit0.wrapping_neg();

        for j in 1..4 {
            let bit = (s[j] as u32) & 1;
            let carry = (bit0 | bit) ^ bit0;
            s[j] = (s[j] >> 1).wrapping_add(carry as u64);
            digits[i] += bit << (j - 1);
        }
    }
    digits[64] = (s[1]
        .wrapping_add(s[2] << 1)
        .wrapping_add(s[3] << 2)) as u32;
    (digits, signs)
}

/// Computes the modified LSB-set representation of an odd scalar
/// (four 64-bit limbs, value lower than 2^247).
///
/// The first `D_FIXEDBASE` values are the sign row: 0xFFFFFFFF for
/// negative, 0 for positive. The remaining values (up to
/// `L_FIXEDBASE`) are 0 or 1; their sign is the one of the sign row
/// entry in the same column. Constant-time.
pub fn mlsb_set_recode(scalar: &[u64; 4]) -> [u32; L_FIXEDBASE] {
    const D: usize = D_FIXEDBASE;

    fn shr1(k: &mut [u64; 4]) {
        k[0] = (k[0] >> 1) | (k[1] << 63);
        k[1] = (k[1] >> 1) | (k[2] << 63);
        k[2] = (k[2] >> 1) | (k[3] << 63);
        k[3] >>= 1;
    }

    let mut k = *scalar;
    let mut digits = [0u32; L_FIXEDBASE];

    digits[D - 1] = 0;
    shr1(&mut k);
    for i in 0..(D - 1) {
        // bit = 0 -> negative (-1), bit = 1 -> positive (0)
        digits[i] = ((k[0] & 1) as u32).wrapping_sub(1);
        shr1(&mut k);
    }

    for i in D..L_FIXEDBASE {
        digits[i] = (k[0] & 1) as u32;
        shr1(&mut k);

        // If the digit is 1 in a negative column, then add 1 back.
        let t = (digits[i % D].wrapping_neg() & digits[i]) as u64;
        let mut cc = t;
        for w in k.iter_mut() {
            let (x, c) = w.overflowing_add(cc);
            *w = x;
            cc = c as u64;
        }
    }
    digits
}

/// Computes the width-`w` NAF of a 64-bit integer; digits are odd and
/// in the `-(2^(w-1)-1)..+(2^(w-1)-1)` range, or zero. At most 65
/// digits are produced. `w` MUST be in the 2..8 range.
///
/// THIS IS NOT CONSTANT-TIME; it is meant for public scalars only.
pub fn wnaf_recode(scalar: u64, w: u32) -> [i8; 65] {
    let mut digits = [0i8; 65];
    let hi = (1i32 << (w - 1)) - 1;
    let full = 1i32 << w;
    let mask = (full as u64) - 1;

    let mut k = scalar;
    let mut index = 0usize;
    while k != 0 {
        if (k & 1) == 0 {
            k >>= 1;
        } else {
            let mut d = (k & mask) as i32;
            k >>= w;
            if d > hi {
                d -= full;
            }
            if d < 0 {
                k += 1;
            }
            digits[index] = d as i8;
            if k != 0 {
                // Next w-1 digits are zero.
                index += (w - 1) as usize;
            }
        }
        index += 1;
    }
    digits
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::Vec;
    use num_bigint::{BigInt, Sign};
    use sha2::{Sha256, Digest};

    fn words(buf: &[u8]) -> [u64; 4] {
        let mut w = [0u64; 4];
        for i in 0..4 {
            let mut t = [0u8; 8];
            t[..].copy_from_slice(&buf[(8 * i)..(8 * i + 8)]);
            w[i] = u64::from_le_bytes(t);
        }
        w
    }

    fn rand_words(sh: &mut Sha256, i: u64) -> [u64; 4] {
        sh.update(i.to_le_bytes());
        words(&sh.finalize_reset())
    }

    fn test_values() -> Vec<[u64; 4]> {
        let mut v = Vec::new();
        v.push([ 0, 0, 0, 0 ]);
        v.push([ 1, 0, 0, 0 ]);
        v.push(Scalar::MINUS_ONE.to_w64le());
        v.push(Scalar::MODULUS);
        v.push([ u64::MAX; 4 ]);
        let mut sh = Sha256::new();
        for i in 0..200 {
            v.push(rand_words(&mut sh, i));
        }
        v
    }

    #[test]
    fn decompose_reconstructs() {
        let lpp = LAMBDA_PHI * LAMBDA_PSI;
        for k in test_values() {
            let s = decompose(&k);
            assert!((s[0] & 1) == 1);
            let r = Scalar::from_w64le(s[0], 0, 0, 0)
                + Scalar::from_w64le(s[1], 0, 0, 0) * LAMBDA_PHI
                + Scalar::from_w64le(s[2], 0, 0, 0) * LAMBDA_PSI
                + Scalar::from_w64le(s[3], 0, 0, 0) * lpp;
            assert!(r.equals(Scalar::reduce_256(&k)) == 0xFFFFFFFF);
        }
    }

    #[test]
    fn glv4_digits() {
        for k in test_values() {
            let s = decompose(&k);
            let (digits, signs) = recode_glv4(&s);
            assert!(digits[64] < 8);
            for j in 0..4 {
                let mut v = 0i128;
                for i in (0..65).rev() {
                    let bit = if j == 0 {
                        1
                    } else {
                        ((digits[i] >> (j - 1)) & 1) as i128
                    };
                    let sg = if signs[i] == 0xFFFFFFFF { 1 } else { -1 };
                    assert!(signs[i] == 0xFFFFFFFF || signs[i] == 0);
                    v = 2 * v + sg * bit;
                }
                assert!(v == s[j] as i128);
            }
        }
    }

    #[test]
    fn mlsb_set_digits() {
        for k in test_values() {
            let sk = Scalar::reduce_256(&k);
            let w = sk.to_odd_256();
            let digits = mlsb_set_recode(&w);
            let mut v = BigInt::from(0);
            for i in (0..L_FIXEDBASE).rev() {
                let neg = digits[i % D_FIXEDBASE] == 0xFFFFFFFF;
                let d = if i < D_FIXEDBASE { 1 } else { digits[i] };
                assert!(d <= 1);
                v = v * 2 + if neg { -BigInt::from(d) } else { BigInt::from(d) };
            }
            let mut buf = [0u8; 32];
            for i in 0..4 {
                buf[(8 * i)..(8 * i + 8)].copy_from_slice(&w[i].to_le_bytes());
            }
            assert!(v == BigInt::from_bytes_le(Sign::Plus, &buf));
        }
    }

    #[test]
    fn wnaf_digits() {
        let mut sh = Sha256::new();
        let mut vals = vec![ 0u64, 1, 2, u64::MAX, u64::MAX - 1, 1u64 << 63 ];
        for i in 0..500 {
            vals.push(rand_words(&mut sh, i)[0]);
        }
        for &k in vals.iter() {
            for &w in [ 4u32, 8 ].iter() {
                let digits = wnaf_recode(k, w);
                let lim = (1i32 << (w - 1)) - 1;
                let mut v = 0i128;
                let mut last_nz: Option<usize> = None;
                for i in (0..65).rev() {
                    let d = digits[i] as i32;
                    assert!(d == 0 || ((d & 1) != 0 && d.abs() <= lim));
                    if d != 0 {
                        if let Some(j) = last_nz {
                            // Non-zero digits are at least w apart.
                            assert!(j - i >= w as usize);
                        }
                        last_nz = Some(i);
                    }
                    v = 2 * v + (d as i128);
                }
                assert!(v == k as i128);
            }
        }
    }
}

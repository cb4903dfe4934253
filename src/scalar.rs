//! Integers modulo the FourQ subgroup order.
//!
//! The order of the prime-order subgroup of FourQ is the 246-bit prime:
//!
//! ```text
//! r = 0x0029CBC14E5E0A72F05397829CBC14E5DFBD004DFE0F79992FB2540EC7768CE7
//! ```
//!
//! `Scalar` values are kept in canonical form (in the 0 to r-1 range),
//! in normal (non-Montgomery) representation, over four 64-bit limbs.
//! Multiplications internally go through Montgomery multiplication
//! (division by 2^256). The Montgomery-domain primitives are exposed as
//! well (`to_montgomery()`, `from_montgomery()`, `montgomery_mul()`,
//! `montgomery_invert_vartime()`), since the signature engine expresses
//! some of its computations directly in that domain.
//!
//! Scalar multiplication routines need the plain 256-bit integer (not
//! reduced) in some places; see `reduce_256()` and `to_odd_256()`.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use zeroize::Zeroize;
use crate::backend::w64::{addcarry_u64, subborrow_u64, umull_add2};

/// An integer modulo the prime r (order of the FourQ subgroup).
#[derive(Clone, Copy, Debug)]
pub struct Scalar([u64; 4]);

// r, in base 2^64 (low-to-high order).
const R0: u64 = 0x2FB2540EC7768CE7;
const R1: u64 = 0xDFBD004DFE0F7999;
const R2: u64 = 0xF05397829CBC14E5;
const R3: u64 = 0x0029CBC14E5E0A72;

// 2^512 mod r.
const RPRIME: [u64; 4] = [
    0xC81DB8795FF3D621, 0x173EA5AAEA6B387D,
    0x3D01B7C72136F61C, 0x0006A5F16AC8F9D3,
];

// -1/r mod 2^256.
const RNEGINV: [u64; 4] = [
    0xE12FE5F079BC3929, 0xD75E78B8D1FCDCF3,
    0xBCE409ED76B5DB21, 0xF32702FDAFC1C074,
];

// r - 2, exponent for inversion.
const RM2: [u64; 4] = [ R0 - 2, R1, R2, R3 ];

// Product of two 256-bit integers, over 512 bits.
#[inline]
pub(crate) fn mul256(a: &[u64; 4], b: &[u64; 4]) -> [u64; 8] {
    let mut d = [0u64; 8];
    for i in 0..4 {
        let mut hi = 0;
        for j in 0..4 {
            let (lo, h) = umull_add2(a[i], b[j], d[i + j], hi);
            d[i + j] = lo;
            hi = h;
        }
        d[i + 4] = hi;
    }
    d
}

// Product of two 256-bit integers, truncated to its low 256 bits.
#[inline]
fn mul256_lo(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let mut d = [0u64; 4];
    for i in 0..4 {
        let mut hi = 0;
        for j in 0..(4 - i) {
            let (lo, h) = umull_add2(a[i], b[j], d[i + j], hi);
            d[i + j] = lo;
            hi = h;
        }
    }
    d
}

// Montgomery multiplication: a*b/2^256 mod r. The output is canonical
// as long as a*b < r*2^256 (e.g. one operand is reduced and the other
// is any 256-bit integer).
fn montymul(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    const M: [u64; 4] = [ R0, R1, R2, R3 ];

    let p = mul256(a, b);
    let q = mul256_lo(&[ p[0], p[1], p[2], p[3] ], &RNEGINV);
    let t = mul256(&q, &M);

    // p + q*r is a multiple of 2^256; keep the high half and the
    // extra carry.
    let mut s = [0u64; 8];
    let mut cc = 0;
    for i in 0..8 {
        let (d, c) = addcarry_u64(p[i], t[i], cc);
        s[i] = d;
        cc = c;
    }
    let cout = cc;

    let mut d = [0u64; 4];
    let mut bb = 0;
    for i in 0..4 {
        let (x, b) = subborrow_u64(s[i + 4], M[i], bb);
        d[i] = x;
        bb = b;
    }

    // Add r back if the subtraction was not needed (borrow and no
    // extra carry).
    let w = ((bb & (cout ^ 1)) as u64).wrapping_neg();
    let mut cc = 0;
    for i in 0..4 {
        let (x, c) = addcarry_u64(d[i], w & M[i], cc);
        d[i] = x;
        cc = c;
    }
    d
}

#[inline(always)]
fn dec64le(buf: &[u8]) -> u64 {
    let mut w = [0u8; 8];
    w[..].copy_from_slice(&buf[..8]);
    u64::from_le_bytes(w)
}

impl Scalar {

    // Modulus r in base 2^64 (low-to-high order).
    pub const MODULUS: [u64; 4] = [ R0, R1, R2, R3 ];

    // Element encoding length (in bytes).
    pub const ENC_LEN: usize = 32;

    pub const ZERO: Scalar = Scalar([ 0, 0, 0, 0 ]);
    pub const ONE: Scalar = Scalar([ 1, 0, 0, 0 ]);
    pub const MINUS_ONE: Scalar = Scalar([ R0 - 1, R1, R2, R3 ]);

    /// Create a constant scalar from its four 64-bit limbs (in
    /// low-to-high order). The value MUST be lower than r; it is not
    /// reduced.
    pub const fn w64le(x0: u64, x1: u64, x2: u64, x3: u64) -> Self {
        Self([ x0, x1, x2, x3 ])
    }

    /// Create a scalar from a 256-bit integer given as four 64-bit limbs
    /// (low-to-high order); the value is reduced modulo r.
    #[inline]
    pub fn from_w64le(x0: u64, x1: u64, x2: u64, x3: u64) -> Self {
        Self::reduce_256(&[ x0, x1, x2, x3 ])
    }

    #[inline(always)]
    pub fn from_u64(x: u64) -> Self {
        // Any 64-bit value is lower than r.
        Self([ x, 0, 0, 0 ])
    }

    /// Reduce a 256-bit integer (four 64-bit limbs, low-to-high order)
    /// modulo r.
    #[inline]
    pub fn reduce_256(a: &[u64; 4]) -> Self {
        Self(montymul(&montymul(a, &RPRIME), &[ 1, 0, 0, 0 ]))
    }

    /// Get this scalar as an odd 256-bit integer: if the (canonical)
    /// value is even, then r is added to it. The returned integer is
    /// equal to this scalar modulo r, and may exceed r.
    #[inline]
    pub fn to_odd_256(self) -> [u64; 4] {
        let w = (self.0[0] & 1).wrapping_sub(1);
        let (d0, cc) = addcarry_u64(self.0[0], w & R0, 0);
        let (d1, cc) = addcarry_u64(self.0[1], w & R1, cc);
        let (d2, cc) = addcarry_u64(self.0[2], w & R2, cc);
        let (d3, _)  = addcarry_u64(self.0[3], w & R3, cc);
        [ d0, d1, d2, d3 ]
    }

    /// Get the canonical value of this scalar as four 64-bit limbs
    /// (low-to-high order).
    #[inline(always)]
    pub fn to_w64le(self) -> [u64; 4] {
        self.0
    }

    #[inline(always)]
    fn set_add(&mut self, rhs: &Self) {
        // r < 2^255, hence the raw sum cannot overflow.
        let (d0, cc) = addcarry_u64(self.0[0], rhs.0[0], 0);
        let (d1, cc) = addcarry_u64(self.0[1], rhs.0[1], cc);
        let (d2, cc) = addcarry_u64(self.0[2], rhs.0[2], cc);
        let (d3, _)  = addcarry_u64(self.0[3], rhs.0[3], cc);
        self.0 = [ d0, d1, d2, d3 ];
        self.set_sub(&Self(Self::MODULUS));
    }

    #[inline(always)]
    fn set_sub(&mut self, rhs: &Self) {
        let (d0, cc) = subborrow_u64(self.0[0], rhs.0[0], 0);
        let (d1, cc) = subborrow_u64(self.0[1], rhs.0[1], cc);
        let (d2, cc) = subborrow_u64(self.0[2], rhs.0[2], cc);
        let (d3, cc) = subborrow_u64(self.0[3], rhs.0[3], cc);

        // Add back the modulus if there was a borrow.
        let w = (cc as u64).wrapping_neg();
        let (d0, cc) = addcarry_u64(d0, w & R0, 0);
        let (d1, cc) = addcarry_u64(d1, w & R1, cc);
        let (d2, cc) = addcarry_u64(d2, w & R2, cc);
        let (d3, _)  = addcarry_u64(d3, w & R3, cc);
        self.0 = [ d0, d1, d2, d3 ];
    }

    // Negate this value (in place).
    #[inline(always)]
    pub fn set_neg(&mut self) {
        let mut r = Self::ZERO;
        r.set_sub(self);
        *self = r;
    }

    #[inline(always)]
    fn set_mul(&mut self, rhs: &Self) {
        // (a*b/2^256)*(2^512)/2^256 = a*b
        let t = montymul(&self.0, &rhs.0);
        self.0 = montymul(&t, &RPRIME);
    }

    #[inline(always)]
    pub fn set_square(&mut self) {
        let t = *self;
        self.set_mul(&t);
    }

    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    // Conditionally copy the provided value ('a') into self:
    //  - If ctl == 0xFFFFFFFF, then the value of 'a' is copied into self.
    //  - If ctl == 0, then the value of self is unchanged.
    // ctl MUST be equal to 0 or 0xFFFFFFFF.
    #[inline(always)]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        self.0[0] ^= cw & (self.0[0] ^ a.0[0]);
        self.0[1] ^= cw & (self.0[1] ^ a.0[1]);
        self.0[2] ^= cw & (self.0[2] ^ a.0[2]);
        self.0[3] ^= cw & (self.0[3] ^ a.0[3]);
    }

    // Return a value equal to either a0 (if ctl == 0) or a1 (if
    // ctl == 0xFFFFFFFF). Value ctl MUST be either 0 or 0xFFFFFFFF.
    #[inline(always)]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    /// Convert this scalar into Montgomery representation (multiply by
    /// 2^256 modulo r).
    #[inline]
    pub fn to_montgomery(self) -> Self {
        Self(montymul(&self.0, &RPRIME))
    }

    /// Convert this scalar out of Montgomery representation (divide by
    /// 2^256 modulo r).
    #[inline]
    pub fn from_montgomery(self) -> Self {
        Self(montymul(&self.0, &[ 1, 0, 0, 0 ]))
    }

    /// Montgomery multiplication: return `self*rhs/2^256 mod r`.
    #[inline]
    pub fn montgomery_mul(self, rhs: Self) -> Self {
        Self(montymul(&self.0, &rhs.0))
    }

    /// Montgomery multiplication of this scalar with a raw 256-bit
    /// integer (not necessarily reduced): return `self*b/2^256 mod r`.
    #[inline]
    pub fn montgomery_mul_256(self, b: &[u64; 4]) -> Self {
        Self(montymul(&self.0, b))
    }

    /// Invert this value, which is in Montgomery representation; the
    /// result is in Montgomery representation too. If the value is zero,
    /// then zero is returned.
    ///
    /// This uses a 5-bit sliding window over the fixed exponent r-2;
    /// THIS IS NOT CONSTANT-TIME and must be used only on public values.
    pub fn montgomery_invert_vartime(self) -> Self {
        // Odd powers self^1, self^3, ..., self^31 (Montgomery domain).
        let mut win = [self; 16];
        let sq = self.montgomery_mul(self);
        for i in 1..16 {
            win[i] = win[i - 1].montgomery_mul(sq);
        }

        let bit = |i: i32| ((RM2[(i >> 6) as usize] >> (i & 63)) & 1) as u32;

        // Montgomery representation of 1.
        let mut acc = Self::ONE.to_montgomery();
        let mut i = 245;
        while i >= 0 {
            if bit(i) == 0 {
                acc = acc.montgomery_mul(acc);
                i -= 1;
                continue;
            }

            // Longest window of at most 5 bits ending on a 1.
            let mut j = if i >= 4 { i - 4 } else { 0 };
            while bit(j) == 0 {
                j += 1;
            }
            let mut v = 0usize;
            for k in (j..(i + 1)).rev() {
                v = (v << 1) | (bit(k) as usize);
                acc = acc.montgomery_mul(acc);
            }
            acc = acc.montgomery_mul(win[v >> 1]);
            i = j - 1;
        }
        acc
    }

    /// Invert this value (modulo r). If the value is zero, then zero
    /// is returned. THIS IS NOT CONSTANT-TIME.
    #[inline]
    pub fn invert_vartime(self) -> Self {
        self.to_montgomery().montgomery_invert_vartime().from_montgomery()
    }

    // Equality check between two scalars (constant-time); returned value
    // is 0xFFFFFFFF on equality, 0 otherwise.
    #[inline]
    pub fn equals(self, rhs: Self) -> u32 {
        let r = (self.0[0] ^ rhs.0[0])
              | (self.0[1] ^ rhs.0[1])
              | (self.0[2] ^ rhs.0[2])
              | (self.0[3] ^ rhs.0[3]);
        ((r | r.wrapping_neg()) >> 63).wrapping_sub(1) as u32
    }

    // Compare this value with zero (constant-time); returned value
    // is 0xFFFFFFFF if this element is zero, 0 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        let r = self.0[0] | self.0[1] | self.0[2] | self.0[3];
        ((r | r.wrapping_neg()) >> 63).wrapping_sub(1) as u32
    }

    // Get the low bit of this value (0 or 1).
    #[inline(always)]
    pub fn is_odd(self) -> u32 {
        (self.0[0] & 1) as u32
    }

    /// Encode this scalar over exactly 32 bytes (unsigned little-endian).
    #[inline]
    pub fn encode32(self) -> [u8; 32] {
        let mut d = [0u8; 32];
        d[ 0.. 8].copy_from_slice(&self.0[0].to_le_bytes());
        d[ 8..16].copy_from_slice(&self.0[1].to_le_bytes());
        d[16..24].copy_from_slice(&self.0[2].to_le_bytes());
        d[24..32].copy_from_slice(&self.0[3].to_le_bytes());
        d
    }

    #[inline(always)]
    pub fn encode(self) -> [u8; 32] {
        self.encode32()
    }

    // Read exactly 32 bytes as a 256-bit integer.
    #[inline(always)]
    fn words_le(buf: &[u8]) -> [u64; 4] {
        [
            dec64le(&buf[ 0.. 8]),
            dec64le(&buf[ 8..16]),
            dec64le(&buf[16..24]),
            dec64le(&buf[24..32]),
        ]
    }

    /// Decode a scalar from exactly 32 bytes. On success, this returns
    /// `(s, 0xFFFFFFFF)`. If the slice length is not 32, or the value
    /// is not lower than r, then this returns `(0, 0)`. Whether a
    /// 32-byte value was in range is a constant-time information.
    pub fn decode32(buf: &[u8]) -> (Self, u32) {
        if buf.len() != 32 {
            return (Self::ZERO, 0);
        }
        let mut x = Self::words_le(buf);
        let (_, cc) = subborrow_u64(x[0], R0, 0);
        let (_, cc) = subborrow_u64(x[1], R1, cc);
        let (_, cc) = subborrow_u64(x[2], R2, cc);
        let (_, cc) = subborrow_u64(x[3], R3, cc);
        let m = (cc as u64).wrapping_neg();
        for w in x.iter_mut() {
            *w &= m;
        }
        (Self(x), m as u32)
    }

    /// Decode a scalar from exactly 32 bytes; `None` is returned if the
    /// value is out of range.
    #[inline]
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let (r, cc) = Self::decode32(buf);
        if cc != 0 {
            Some(r)
        } else {
            None
        }
    }

    /// Decode an integer from some bytes (unsigned little-endian
    /// convention), with reduction modulo r. This never fails; an empty
    /// slice yields zero.
    pub fn decode_reduce(buf: &[u8]) -> Self {
        let mut n = buf.len();
        if n == 0 {
            return Self::ZERO;
        }

        // Top chunk first (possibly partial).
        let mut r = if (n & 31) != 0 {
            let k = n & !31usize;
            let mut tmp = [0u8; 32];
            tmp[..(n - k)].copy_from_slice(&buf[k..]);
            n = k;
            Self::reduce_256(&Self::words_le(&tmp))
        } else {
            n -= 32;
            Self::reduce_256(&Self::words_le(&buf[n..]))
        };

        while n > 0 {
            n -= 32;
            let d = Self::reduce_256(&Self::words_le(&buf[n..n + 32]));
            // r <- r*2^256 + d
            r.0 = montymul(&r.0, &RPRIME);
            r.set_add(&d);
        }
        r
    }
}

macro_rules! impl_scalar_ops {
    ($($op:ident, $fn:ident, $opa:ident, $fna:ident, $set:ident;)*) => { $(
        impl $op<Scalar> for Scalar {
            type Output = Scalar;

            #[inline(always)]
            fn $fn(self, other: Scalar) -> Scalar {
                let mut r = self;
                r.$set(&other);
                r
            }
        }

        impl $op<&Scalar> for Scalar {
            type Output = Scalar;

            #[inline(always)]
            fn $fn(self, other: &Scalar) -> Scalar {
                let mut r = self;
                r.$set(other);
                r
            }
        }

        impl $op<Scalar> for &Scalar {
            type Output = Scalar;

            #[inline(always)]
            fn $fn(self, other: Scalar) -> Scalar {
                let mut r = *self;
                r.$set(&other);
                r
            }
        }

        impl $op<&Scalar> for &Scalar {
            type Output = Scalar;

            #[inline(always)]
            fn $fn(self, other: &Scalar) -> Scalar {
                let mut r = *self;
                r.$set(other);
                r
            }
        }

        impl $opa<Scalar> for Scalar {
            #[inline(always)]
            fn $fna(&mut self, other: Scalar) {
                self.$set(&other);
            }
        }

        impl $opa<&Scalar> for Scalar {
            #[inline(always)]
            fn $fna(&mut self, other: &Scalar) {
                self.$set(other);
            }
        }
    )* };
}

impl_scalar_ops! {
    Add, add, AddAssign, add_assign, set_add;
    Sub, sub, SubAssign, sub_assign, set_sub;
    Mul, mul, MulAssign, mul_assign, set_mul;
}

impl Neg for Scalar {
    type Output = Scalar;

    #[inline(always)]
    fn neg(self) -> Scalar {
        let mut r = self;
        r.set_neg();
        r
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    #[inline(always)]
    fn neg(self) -> Scalar {
        let mut r = *self;
        r.set_neg();
        r
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {

    use super::Scalar;
    use num_bigint::{BigInt, Sign};
    use sha2::{Sha256, Digest};

    fn order() -> BigInt {
        BigInt::from_bytes_le(Sign::Plus, &Scalar::MINUS_ONE.encode32())
            + BigInt::from(1u32)
    }

    fn to_big(a: Scalar) -> BigInt {
        BigInt::from_bytes_le(Sign::Plus, &a.encode32())
    }

    fn big_mod(z: &BigInt) -> BigInt {
        let zr = order();
        ((z % &zr) + &zr) % &zr
    }

    #[test]
    fn order_value() {
        let zr = BigInt::parse_bytes(
            b"29CBC14E5E0A72F05397829CBC14E5DFBD004DFE0F79992FB2540EC7768CE7",
            16).unwrap();
        assert!(order() == zr);
    }

    fn check_ops(va: &[u8], vb: &[u8]) {
        let a = Scalar::decode_reduce(va);
        let b = Scalar::decode_reduce(vb);
        let za = big_mod(&BigInt::from_bytes_le(Sign::Plus, va));
        let zb = big_mod(&BigInt::from_bytes_le(Sign::Plus, vb));

        assert!(to_big(a) == za);
        assert!(to_big(a + b) == big_mod(&(&za + &zb)));
        assert!(to_big(a - b) == big_mod(&(&za - &zb)));
        assert!(to_big(-a) == big_mod(&(-&za)));
        assert!(to_big(a * b) == big_mod(&(&za * &zb)));
        assert!(to_big(a.square()) == big_mod(&(&za * &za)));

        // Montgomery domain.
        let ma = a.to_montgomery();
        let mb = b.to_montgomery();
        assert!(ma.from_montgomery().equals(a) == 0xFFFFFFFF);
        assert!(ma.montgomery_mul(mb).from_montgomery().equals(a * b)
            == 0xFFFFFFFF);

        if a.iszero() == 0 {
            let c = a.invert_vartime();
            assert!((c * a).equals(Scalar::ONE) == 0xFFFFFFFF);
        } else {
            assert!(a.invert_vartime().iszero() == 0xFFFFFFFF);
        }

        assert!(a.equals(a) == 0xFFFFFFFF);
        assert!((a + Scalar::ONE).equals(a) == 0);
    }

    #[test]
    fn scalar_ops() {
        let mut va = [0u8; 32];
        let mut vb = [0u8; 32];
        check_ops(&va, &vb);
        va = [0xFF; 32];
        vb = [0xFF; 32];
        check_ops(&va, &vb);
        check_ops(&Scalar::MINUS_ONE.encode32(), &va);

        let mut sh = Sha256::new();
        for i in 0..300 {
            sh.update(((2 * i + 0) as u64).to_le_bytes());
            let va = sh.finalize_reset();
            sh.update(((2 * i + 1) as u64).to_le_bytes());
            let vb = sh.finalize_reset();
            check_ops(&va, &vb);
        }
    }

    #[test]
    fn scalar_decode() {
        let zr = order();
        let (a, cc) = Scalar::decode32(&Scalar::MINUS_ONE.encode32());
        assert!(cc == 0xFFFFFFFF);
        assert!(a.equals(Scalar::MINUS_ONE) == 0xFFFFFFFF);

        let mut buf = [0u8; 32];
        let (_, v) = zr.to_bytes_le();
        buf[..v.len()].copy_from_slice(&v);
        let (a, cc) = Scalar::decode32(&buf);
        assert!(cc == 0);
        assert!(a.iszero() == 0xFFFFFFFF);
        assert!(Scalar::decode(&buf).is_none());
        assert!(Scalar::decode(&buf[..31]).is_none());

        // Reduction over arbitrary lengths.
        let mut sh = Sha256::new();
        let mut data = [0u8; 100];
        for i in 0..data.len() {
            data[i] = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        for n in 0..data.len() {
            sh.update((n as u64).to_le_bytes());
            let h = sh.finalize_reset();
            data[n] ^= h[0];
            let a = Scalar::decode_reduce(&data[..n]);
            let za = BigInt::from_bytes_le(Sign::Plus, &data[..n]);
            assert!(to_big(a) == &za % &zr);
        }
    }

    #[test]
    fn scalar_reduce_256() {
        let zr = order();
        let a = Scalar::reduce_256(&[ u64::MAX; 4 ]);
        let za = (BigInt::from(1u32) << 256) - BigInt::from(1u32);
        assert!(to_big(a) == &za % &zr);

        // to_odd_256() returns an odd integer congruent to the scalar.
        let mut sh = Sha256::new();
        for i in 0..50 {
            sh.update((i as u64).to_le_bytes());
            let a = Scalar::decode_reduce(&sh.finalize_reset());
            let w = a.to_odd_256();
            assert!((w[0] & 1) == 1);
            let b = Scalar::reduce_256(&w);
            assert!(b.equals(a) == 0xFFFFFFFF);
        }
        let w = Scalar::ZERO.to_odd_256();
        assert!(w == Scalar::MODULUS);
    }
}

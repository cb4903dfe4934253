use super::{addcarry_u64, subborrow_u64, umull, umull_x2};

/// Finite field: integers modulo p = 2^127 - 1.
///
/// Internal values are held over two 64-bit limbs, in the 0 to 2^127-1
/// range: the value p itself is a valid, non-canonical representation
/// of zero. All encoding and comparison functions normalize first.
#[derive(Clone, Copy, Debug)]
pub struct GF127([u64; 2]);

/// Quadratic extension GF(p^2) = GF(p)[i], with i^2 = -1.
///
/// An element a0 + a1*i is stored as the pair of its two components.
#[derive(Clone, Copy, Debug)]
pub struct GF254([GF127; 2]);

const M63: u64 = 0x7FFFFFFFFFFFFFFF;

impl GF127 {

    // Element encoding length (in bytes); always 16 bytes.
    pub const ENC_LEN: usize = 16;

    // Modulus p in base 2^64 (low-to-high order).
    pub const MODULUS: [u64; 2] = [ 0xFFFFFFFFFFFFFFFF, M63 ];

    pub const ZERO: GF127 = GF127([ 0, 0 ]);
    pub const ONE: GF127 = GF127([ 1, 0 ]);
    pub const MINUS_ONE: GF127 = GF127([ 0xFFFFFFFFFFFFFFFE, M63 ]);

    // Create an element from a 128-bit value (implicitly reduced modulo
    // the field order) provided as two 64-bit limbs (in low-to-high order).
    pub const fn w64le(x0: u64, x1: u64) -> Self {
        let v = (x0 as u128) | ((x1 as u128) << 64);
        let v = (v & ((1u128 << 127) - 1)) + (v >> 127);
        let v = (v & ((1u128 << 127) - 1)) + (v >> 127);
        Self([ v as u64, (v >> 64) as u64 ])
    }

    // Same as w64le(), but not const; this is the runtime variant.
    #[inline(always)]
    pub fn from_w64le(x0: u64, x1: u64) -> Self {
        let h = x1 >> 63;
        let (d0, cc) = addcarry_u64(x0, h, 0);
        let (d1, _) = addcarry_u64(x1 & M63, 0, cc);
        let mut r = Self([ d0, d1 ]);
        r.fold();
        r
    }

    #[inline(always)]
    pub fn from_u64(x: u64) -> Self {
        Self([ x, 0 ])
    }

    // Fold bit 127 back into the low bits (2^127 = 1 mod p). The input
    // MUST be lower than 2^128 - 1; the output is at most 2^127 - 1.
    #[inline(always)]
    fn fold(&mut self) {
        let h = self.0[1] >> 63;
        let (d0, cc) = addcarry_u64(self.0[0], h, 0);
        let (d1, _) = addcarry_u64(self.0[1] & M63, 0, cc);
        self.0[0] = d0;
        self.0[1] = d1;
    }

    #[inline]
    fn set_add(&mut self, rhs: &Self) {
        // Both operands are below 2^127, so the sum fits in 128 bits.
        let (d0, cc) = addcarry_u64(self.0[0], rhs.0[0], 0);
        let (d1, _) = addcarry_u64(self.0[1], rhs.0[1], cc);
        self.0[0] = d0;
        self.0[1] = d1;
        self.fold();
    }

    #[inline]
    fn set_sub(&mut self, rhs: &Self) {
        // If the subtraction borrows, then bit 127 of the 128-bit result
        // is set; clearing it adds 2^127, and subtracting the borrow
        // then adds p in total.
        let (d0, cc) = subborrow_u64(self.0[0], rhs.0[0], 0);
        let (d1, _) = subborrow_u64(self.0[1], rhs.0[1], cc);
        let bw = d1 >> 63;
        let (d0, cc) = subborrow_u64(d0, bw, 0);
        let (d1, _) = subborrow_u64(d1 & M63, 0, cc);
        self.0[0] = d0;
        self.0[1] = d1;
    }

    // Negate this value (in place).
    #[inline(always)]
    pub fn set_neg(&mut self) {
        // p - x, with x in 0..2^127-1, is the bitwise complement of x
        // over 127 bits.
        self.0[0] = !self.0[0];
        self.0[1] = (!self.0[1]) & M63;
    }

    // Conditionally copy the provided value ('a') into self:
    //  - If ctl == 0xFFFFFFFF, then the value of 'a' is copied into self.
    //  - If ctl == 0, then the value of self is unchanged.
    // ctl MUST be equal to 0 or 0xFFFFFFFF.
    #[inline]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        self.0[0] ^= cw & (self.0[0] ^ a.0[0]);
        self.0[1] ^= cw & (self.0[1] ^ a.0[1]);
    }

    // Return a value equal to either a0 (if ctl == 0) or a1 (if
    // ctl == 0xFFFFFFFF). Value ctl MUST be either 0 or 0xFFFFFFFF.
    #[inline(always)]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    // Conditionally swap two elements: values a and b are exchanged if
    // ctl == 0xFFFFFFFF, or not exchanged if ctl == 0x00000000. Value
    // ctl MUST be either 0x00000000 or 0xFFFFFFFF.
    #[inline]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        let t = cw & (a.0[0] ^ b.0[0]); a.0[0] ^= t; b.0[0] ^= t;
        let t = cw & (a.0[1] ^ b.0[1]); a.0[1] ^= t; b.0[1] ^= t;
    }

    #[inline]
    fn set_half(&mut self) {
        // If the value is odd, add p (which keeps the value below 2^128),
        // then shift right by one bit.
        let m = (self.0[0] & 1).wrapping_neg();
        let (d0, cc) = addcarry_u64(self.0[0], m, 0);
        let (d1, _) = addcarry_u64(self.0[1], m >> 1, cc);
        self.0[0] = (d0 >> 1) | (d1 << 63);
        self.0[1] = d1 >> 1;
    }

    #[inline(always)]
    pub fn half(self) -> Self {
        let mut r = self;
        r.set_half();
        r
    }

    #[inline(always)]
    fn set_mul2(&mut self) {
        let r = *self;
        self.set_add(&r);
    }

    #[inline(always)]
    pub fn mul2(self) -> Self {
        let mut r = self;
        r.set_mul2();
        r
    }

    // Reduce a product (four limbs, value lower than 2^254) into the
    // 0..2^127-1 range.
    #[inline(always)]
    fn reduce_product(d0: u64, d1: u64, d2: u64, d3: u64) -> Self {
        // t = L + H*2^127 with L < 2^127 and H < 2^127; t = L + H mod p.
        let h0 = (d1 >> 63) | (d2 << 1);
        let h1 = (d2 >> 63) | (d3 << 1);
        let (e0, cc) = addcarry_u64(d0, h0, 0);
        let (e1, _) = addcarry_u64(d1 & M63, h1, cc);
        let mut r = Self([ e0, e1 ]);
        r.fold();
        r
    }

    #[inline]
    fn set_mul(&mut self, rhs: &Self) {
        let (a0, a1) = (self.0[0], self.0[1]);
        let (b0, b1) = (rhs.0[0], rhs.0[1]);

        // a1 and b1 are below 2^63, so the cross product sum fits
        // in 128 bits.
        let (d0, e0) = umull(a0, b0);
        let (f0, f1) = umull_x2(a0, b1, a1, b0);
        let (g0, g1) = umull(a1, b1);
        let (d1, cc) = addcarry_u64(e0, f0, 0);
        let (d2, cc) = addcarry_u64(g0, f1, cc);
        let (d3, _) = addcarry_u64(g1, 0, cc);

        *self = Self::reduce_product(d0, d1, d2, d3);
    }

    // Square this value (in place).
    #[inline]
    pub fn set_square(&mut self) {
        let (a0, a1) = (self.0[0], self.0[1]);

        // 2*a0*a1 < 2^128 since a1 < 2^63.
        let (d0, e0) = umull(a0, a0);
        let (f0, f1) = umull(a0, a1 << 1);
        let (g0, g1) = umull(a1, a1);
        let (d1, cc) = addcarry_u64(e0, f0, 0);
        let (d2, cc) = addcarry_u64(g0, f1, cc);
        let (d3, _) = addcarry_u64(g1, 0, cc);

        *self = Self::reduce_product(d0, d1, d2, d3);
    }

    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    // Square this value n times (in place).
    #[inline]
    pub fn set_xsquare(&mut self, n: u32) {
        for _ in 0..n {
            self.set_square();
        }
    }

    #[inline(always)]
    pub fn xsquare(self, n: u32) -> Self {
        let mut r = self;
        r.set_xsquare(n);
        r
    }

    // Map this value into the canonical 0..p-1 range (in place).
    #[inline]
    pub fn set_normalized(&mut self) {
        // Only p itself is out of range; p + 1 = 2^127 is the only case
        // where adding 1 sets bit 127.
        let (_, cc) = addcarry_u64(self.0[0], 1, 0);
        let (t1, _) = addcarry_u64(self.0[1], 0, cc);
        let m = (t1 >> 63).wrapping_sub(1);
        self.0[0] &= m;
        self.0[1] &= m;
    }

    #[inline(always)]
    pub fn normalized(self) -> Self {
        let mut r = self;
        r.set_normalized();
        r
    }

    // Raise this value to the power 2^125 - 1.
    pub fn exp1251(self) -> Self {
        let x = self;
        let x2 = x.square() * x;            // 2^2 - 1
        let x4 = x2.xsquare(2) * x2;        // 2^4 - 1
        let x8 = x4.xsquare(4) * x4;        // 2^8 - 1
        let x16 = x8.xsquare(8) * x8;       // 2^16 - 1
        let x32 = x16.xsquare(16) * x16;    // 2^32 - 1
        let x64 = x32.xsquare(32) * x32;    // 2^64 - 1
        let x96 = x64.xsquare(32) * x32;    // 2^96 - 1
        let x112 = x96.xsquare(16) * x16;   // 2^112 - 1
        let x120 = x112.xsquare(8) * x8;    // 2^120 - 1
        let x124 = x120.xsquare(4) * x4;    // 2^124 - 1
        x124.square() * x                   // 2^125 - 1
    }

    // Invert this value (in place); zero is mapped to zero. The
    // inversion raises to the power p - 2 = 4*(2^125 - 1) + 1.
    pub fn set_invert(&mut self) {
        let t = self.exp1251().xsquare(2);
        self.set_mul(&t);
    }

    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    #[inline(always)]
    fn set_div(&mut self, rhs: &Self) {
        self.set_mul(&rhs.invert());
    }

    // Square root (of a square) modulo p. Since p = 3 mod 4, this is
    // the power (p+1)/4 = 2^125. The result is meaningful only if this
    // value is a quadratic residue.
    #[inline(always)]
    pub fn sqrt_unchecked(self) -> Self {
        self.xsquare(125)
    }

    // Equality check between two field elements (constant-time);
    // returned value is 0xFFFFFFFF on equality, 0 otherwise.
    #[inline(always)]
    pub fn equals(self, rhs: Self) -> u32 {
        (self - rhs).iszero()
    }

    // Compare this value with zero (constant-time); returned value
    // is 0xFFFFFFFF if this element is zero, 0 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        // There are two representations of zero: 0 and p.
        let a0 = self.0[0];
        let a1 = self.0[1];
        let t0 = a0 | a1;
        let t1 = !a0 | (a1 ^ M63);

        // Top bit of r is 0 if and only if one of t0 or t1 is zero.
        let r = (t0 | t0.wrapping_neg()) & (t1 | t1.wrapping_neg());
        ((r >> 63) as u32).wrapping_sub(1)
    }

    // Get bit 126 of the canonical representation (0 or 1). This is the
    // bit used as "sign" in point encodings.
    #[inline(always)]
    pub fn bit126(self) -> u32 {
        ((self.normalized().0[1] >> 62) & 1) as u32
    }

    // Get the low bit of the canonical representation (0 or 1).
    #[inline(always)]
    pub fn is_odd(self) -> u32 {
        (self.normalized().0[0] & 1) as u32
    }

    // Encode this value over exactly 16 bytes (canonical, little-endian).
    #[inline]
    pub fn encode16(self) -> [u8; 16] {
        let r = self.normalized();
        let mut d = [0u8; 16];
        d[0.. 8].copy_from_slice(&r.0[0].to_le_bytes());
        d[8..16].copy_from_slice(&r.0[1].to_le_bytes());
        d
    }

    #[inline(always)]
    fn words_le(buf: &[u8]) -> (u64, u64) {
        let mut w0 = [0u8; 8];
        let mut w1 = [0u8; 8];
        w0[..].copy_from_slice(&buf[0.. 8]);
        w1[..].copy_from_slice(&buf[8..16]);
        (u64::from_le_bytes(w0), u64::from_le_bytes(w1))
    }

    // Decode a field element from 16 bytes. On success, this returns
    // (r, 0xFFFFFFFF). If the source slice does not have length exactly
    // 16 bytes, or if the value is not in the 0..p-1 range, then this
    // returns (0, 0).
    #[inline]
    pub fn decode16(buf: &[u8]) -> (Self, u32) {
        if buf.len() != 16 {
            return (Self::ZERO, 0);
        }
        let (x0, x1) = Self::words_le(buf);

        // Canonical if and only if x - p borrows.
        let (_, cc) = subborrow_u64(x0, Self::MODULUS[0], 0);
        let (_, cc) = subborrow_u64(x1, Self::MODULUS[1], cc);
        let m = (cc as u64).wrapping_neg();
        (Self([ x0 & m, x1 & m ]), m as u32)
    }

    // Decode 16 bytes into a field element, with reduction modulo p.
    // If the slice length is not 16, then zero is returned.
    #[inline]
    pub fn decode16_reduce(buf: &[u8]) -> Self {
        if buf.len() != 16 {
            return Self::ZERO;
        }
        let (x0, x1) = Self::words_le(buf);
        Self::from_w64le(x0, x1)
    }

    // Decode 16 bytes into a field element; `None` is returned if the
    // encoding is not canonical.
    #[inline]
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let (r, cc) = Self::decode16(buf);
        if cc != 0 {
            Some(r)
        } else {
            None
        }
    }
}

impl GF254 {

    // Element encoding length (in bytes); always 32 bytes.
    pub const ENC_LEN: usize = 32;

    pub const ZERO: GF254 = GF254([ GF127::ZERO, GF127::ZERO ]);
    pub const ONE: GF254 = GF254([ GF127::ONE, GF127::ZERO ]);

    // Create an element from its two components, each given as two
    // 64-bit limbs (low-to-high order): a0 = (x0, x1), a1 = (x2, x3).
    pub const fn w64le(x0: u64, x1: u64, x2: u64, x3: u64) -> Self {
        Self([ GF127::w64le(x0, x1), GF127::w64le(x2, x3) ])
    }

    #[inline(always)]
    pub const fn from_parts(a0: GF127, a1: GF127) -> Self {
        Self([ a0, a1 ])
    }

    // Real part (a0) of this element.
    #[inline(always)]
    pub fn re(self) -> GF127 {
        self.0[0]
    }

    // Imaginary part (a1) of this element.
    #[inline(always)]
    pub fn im(self) -> GF127 {
        self.0[1]
    }

    #[inline(always)]
    fn set_add(&mut self, rhs: &Self) {
        self.0[0] += rhs.0[0];
        self.0[1] += rhs.0[1];
    }

    #[inline(always)]
    fn set_sub(&mut self, rhs: &Self) {
        self.0[0] -= rhs.0[0];
        self.0[1] -= rhs.0[1];
    }

    #[inline(always)]
    pub fn set_neg(&mut self) {
        self.0[0].set_neg();
        self.0[1].set_neg();
    }

    // Replace this value with its conjugate a0 - a1*i, which is also
    // its image by the Frobenius map.
    #[inline(always)]
    pub fn set_conj(&mut self) {
        self.0[1].set_neg();
    }

    #[inline(always)]
    pub fn conj(self) -> Self {
        let mut r = self;
        r.set_conj();
        r
    }

    #[inline]
    fn set_mul(&mut self, rhs: &Self) {
        let (a0, a1) = (self.0[0], self.0[1]);
        let (b0, b1) = (rhs.0[0], rhs.0[1]);
        let t0 = a0 * b0;
        let t1 = a1 * b1;
        let t2 = (a0 + a1) * (b0 + b1);
        self.0[0] = t0 - t1;
        self.0[1] = t2 - t0 - t1;
    }

    // Multiply this value by an element of the base field (in place).
    #[inline]
    pub fn set_mul_gf127(&mut self, rhs: &GF127) {
        self.0[0] *= rhs;
        self.0[1] *= rhs;
    }

    #[inline]
    pub fn set_square(&mut self) {
        let (a0, a1) = (self.0[0], self.0[1]);
        self.0[0] = (a0 + a1) * (a0 - a1);
        self.0[1] = (a0 * a1).mul2();
    }

    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    #[inline(always)]
    pub fn set_xsquare(&mut self, n: u32) {
        for _ in 0..n {
            self.set_square();
        }
    }

    #[inline(always)]
    pub fn xsquare(self, n: u32) -> Self {
        let mut r = self;
        r.set_xsquare(n);
        r
    }

    #[inline(always)]
    fn set_half(&mut self) {
        self.0[0] = self.0[0].half();
        self.0[1] = self.0[1].half();
    }

    #[inline(always)]
    pub fn half(self) -> Self {
        let mut r = self;
        r.set_half();
        r
    }

    #[inline(always)]
    pub fn mul2(self) -> Self {
        Self([ self.0[0].mul2(), self.0[1].mul2() ])
    }

    #[inline(always)]
    pub fn set_normalized(&mut self) {
        self.0[0].set_normalized();
        self.0[1].set_normalized();
    }

    #[inline(always)]
    pub fn normalized(self) -> Self {
        let mut r = self;
        r.set_normalized();
        r
    }

    // Invert this value (in place), using the norm: 1/a = conj(a) / N(a)
    // with N(a) = a0^2 + a1^2. Zero is mapped to zero.
    pub fn set_invert(&mut self) {
        let n = (self.0[0].square() + self.0[1].square()).invert();
        self.0[0] *= n;
        self.0[1] = -(self.0[1] * n);
    }

    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    #[inline(always)]
    fn set_div(&mut self, rhs: &Self) {
        self.set_mul(&rhs.invert());
    }

    #[inline]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        self.0[0].set_cond(&a.0[0], ctl);
        self.0[1].set_cond(&a.0[1], ctl);
    }

    #[inline(always)]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    #[inline]
    pub fn cswap(a: &mut Self, b: &mut Self, ctl: u32) {
        GF127::cswap(&mut a.0[0], &mut b.0[0], ctl);
        GF127::cswap(&mut a.0[1], &mut b.0[1], ctl);
    }

    #[inline(always)]
    pub fn equals(self, rhs: Self) -> u32 {
        self.0[0].equals(rhs.0[0]) & self.0[1].equals(rhs.0[1])
    }

    #[inline(always)]
    pub fn iszero(self) -> u32 {
        self.0[0].iszero() & self.0[1].iszero()
    }

    // Encode this value over exactly 32 bytes: a0 then a1, each over
    // 16 bytes, canonical, little-endian. The top bit of the last byte
    // is always zero.
    #[inline]
    pub fn encode32(self) -> [u8; 32] {
        let mut d = [0u8; 32];
        d[ 0..16].copy_from_slice(&self.0[0].encode16());
        d[16..32].copy_from_slice(&self.0[1].encode16());
        d
    }

    #[inline(always)]
    pub fn encode(self) -> [u8; 32] {
        self.encode32()
    }

    // Decode an element from 32 bytes. Both components must be
    // canonical. On failure, (0, 0) is returned.
    #[inline]
    pub fn decode32(buf: &[u8]) -> (Self, u32) {
        if buf.len() != 32 {
            return (Self::ZERO, 0);
        }
        let (a0, c0) = GF127::decode16(&buf[..16]);
        let (a1, c1) = GF127::decode16(&buf[16..]);
        let cc = c0 & c1;
        let mut r = Self([ a0, a1 ]);
        r.set_cond(&Self::ZERO, !cc);
        (r, cc)
    }

    #[inline]
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let (r, cc) = Self::decode32(buf);
        if cc != 0 {
            Some(r)
        } else {
            None
        }
    }
}

// ========================================================================
// Implementations of all the traits needed to use the simple operators
// (+, *, /...) on field element instances, with or without references.

macro_rules! impl_field_ops { ($typename:ident) => {

    impl core::ops::Add<$typename> for $typename {
        type Output = $typename;

        #[inline(always)]
        fn add(self, other: $typename) -> $typename {
            let mut r = self;
            r.set_add(&other);
            r
        }
    }

    impl core::ops::Add<&$typename> for $typename {
        type Output = $typename;

        #[inline(always)]
        fn add(self, other: &$typename) -> $typename {
            let mut r = self;
            r.set_add(other);
            r
        }
    }

    impl core::ops::Add<$typename> for &$typename {
        type Output = $typename;

        #[inline(always)]
        fn add(self, other: $typename) -> $typename {
            let mut r = *self;
            r.set_add(&other);
            r
        }
    }

    impl core::ops::Add<&$typename> for &$typename {
        type Output = $typename;

        #[inline(always)]
        fn add(self, other: &$typename) -> $typename {
            let mut r = *self;
            r.set_add(other);
            r
        }
    }

    impl core::ops::AddAssign<$typename> for $typename {
        #[inline(always)]
        fn add_assign(&mut self, other: $typename) {
            self.set_add(&other);
        }
    }

    impl core::ops::AddAssign<&$typename> for $typename {
        #[inline(always)]
        fn add_assign(&mut self, other: &$typename) {
            self.set_add(other);
        }
    }

    impl core::ops::Div<$typename> for $typename {
        type Output = $typename;

        #[inline(always)]
        fn div(self, other: $typename) -> $typename {
            let mut r = self;
            r.set_div(&other);
            r
        }
    }

    impl core::ops::Div<&$typename> for $typename {
        type Output = $typename;

        #[inline(always)]
        fn div(self, other: &$typename) -> $typename {
            let mut r = self;
            r.set_div(other);
            r
        }
    }

    impl core::ops::Div<$typename> for &$typename {
        type Output = $typename;

        #[inline(always)]
        fn div(self, other: $typename) -> $typename {
            let mut r = *self;
            r.set_div(&other);
            r
        }
    }

    impl core::ops::Div<&$typename> for &$typename {
        type Output = $typename;

        #[inline(always)]
        fn div(self, other: &$typename) -> $typename {
            let mut r = *self;
            r.set_div(other);
            r
        }
    }

    impl core::ops::DivAssign<$typename> for $typename {
        #[inline(always)]
        fn div_assign(&mut self, other: $typename) {
            self.set_div(&other);
        }
    }

    impl core::ops::DivAssign<&$typename> for $typename {
        #[inline(always)]
        fn div_assign(&mut self, other: &$typename) {
            self.set_div(other);
        }
    }

    impl core::ops::Mul<$typename> for $typename {
        type Output = $typename;

        #[inline(always)]
        fn mul(self, other: $typename) -> $typename {
            let mut r = self;
            r.set_mul(&other);
            r
        }
    }

    impl core::ops::Mul<&$typename> for $typename {
        type Output = $typename;

        #[inline(always)]
        fn mul(self, other: &$typename) -> $typename {
            let mut r = self;
            r.set_mul(other);
            r
        }
    }

    impl core::ops::Mul<$typename> for &$typename {
        type Output = $typename;

        #[inline(always)]
        fn mul(self, other: $typename) -> $typename {
            let mut r = *self;
            r.set_mul(&other);
            r
        }
    }

    impl core::ops::Mul<&$typename> for &$typename {
        type Output = $typename;

        #[inline(always)]
        fn mul(self, other: &$typename) -> $typename {
            let mut r = *self;
            r.set_mul(other);
            r
        }
    }

    impl core::ops::MulAssign<$typename> for $typename {
        #[inline(always)]
        fn mul_assign(&mut self, other: $typename) {
            self.set_mul(&other);
        }
    }

    impl core::ops::MulAssign<&$typename> for $typename {
        #[inline(always)]
        fn mul_assign(&mut self, other: &$typename) {
            self.set_mul(other);
        }
    }

    impl core::ops::Neg for $typename {
        type Output = $typename;

        #[inline(always)]
        fn neg(self) -> $typename {
            let mut r = self;
            r.set_neg();
            r
        }
    }

    impl core::ops::Neg for &$typename {
        type Output = $typename;

        #[inline(always)]
        fn neg(self) -> $typename {
            let mut r = *self;
            r.set_neg();
            r
        }
    }

    impl core::ops::Sub<$typename> for $typename {
        type Output = $typename;

        #[inline(always)]
        fn sub(self, other: $typename) -> $typename {
            let mut r = self;
            r.set_sub(&other);
            r
        }
    }

    impl core::ops::Sub<&$typename> for $typename {
        type Output = $typename;

        #[inline(always)]
        fn sub(self, other: &$typename) -> $typename {
            let mut r = self;
            r.set_sub(other);
            r
        }
    }

    impl core::ops::Sub<$typename> for &$typename {
        type Output = $typename;

        #[inline(always)]
        fn sub(self, other: $typename) -> $typename {
            let mut r = *self;
            r.set_sub(&other);
            r
        }
    }

    impl core::ops::Sub<&$typename> for &$typename {
        type Output = $typename;

        #[inline(always)]
        fn sub(self, other: &$typename) -> $typename {
            let mut r = *self;
            r.set_sub(other);
            r
        }
    }

    impl core::ops::SubAssign<$typename> for $typename {
        #[inline(always)]
        fn sub_assign(&mut self, other: $typename) {
            self.set_sub(&other);
        }
    }

    impl core::ops::SubAssign<&$typename> for $typename {
        #[inline(always)]
        fn sub_assign(&mut self, other: &$typename) {
            self.set_sub(other);
        }
    }

} }

impl_field_ops!(GF127);
impl_field_ops!(GF254);

impl core::ops::MulAssign<GF127> for GF254 {
    #[inline(always)]
    fn mul_assign(&mut self, other: GF127) {
        self.set_mul_gf127(&other);
    }
}

impl core::ops::MulAssign<&GF127> for GF254 {
    #[inline(always)]
    fn mul_assign(&mut self, other: &GF127) {
        self.set_mul_gf127(other);
    }
}

// ========================================================================

#[cfg(test)]
mod tests {

    use super::{GF127, GF254};
    use num_bigint::{BigInt, Sign};
    use sha2::{Sha256, Digest};

    fn modulus() -> BigInt {
        (BigInt::from(1u32) << 127) - BigInt::from(1u32)
    }

    fn to_big(a: GF127) -> BigInt {
        BigInt::from_bytes_le(Sign::Plus, &a.encode16())
    }

    // va and vb must be 16 bytes each in length
    fn check_gf_ops(va: &[u8], vb: &[u8]) {
        let zp = modulus();
        let zp4 = &zp << 2;

        let a = GF127::decode16_reduce(va);
        let b = GF127::decode16_reduce(vb);
        let za = BigInt::from_bytes_le(Sign::Plus, va);
        let zb = BigInt::from_bytes_le(Sign::Plus, vb);

        assert!(to_big(a) == &za % &zp);
        assert!(to_big(a + b) == (&za + &zb) % &zp);
        assert!(to_big(a - b) == ((&zp4 + &za) - &zb) % &zp);
        assert!(to_big(-a) == (&zp4 - &za) % &zp);
        assert!(to_big(a * b) == (&za * &zb) % &zp);
        assert!(to_big(a.square()) == (&za * &za) % &zp);
        assert!(to_big(a.mul2()) == (&za << 1) % &zp);

        let zc = to_big(a.half());
        let zd: BigInt = ((&zp4 + (&zc << 1)) - &za) % &zp;
        assert!(zd.sign() == Sign::NoSign);

        let c = a / b;
        if b.iszero() == 0xFFFFFFFF {
            assert!(c.iszero() == 0xFFFFFFFF);
        } else {
            assert!(to_big(c * b) == &za % &zp);
        }

        assert!(a.equals(a) == 0xFFFFFFFF);
        assert!((a + GF127::ONE).equals(a) == 0);
    }

    #[test]
    fn gf127_ops() {
        let mut va = [0u8; 16];
        let mut vb = [0u8; 16];
        check_gf_ops(&va, &vb);

        // p itself (non-canonical zero) and values just around it.
        for i in 0..16 {
            va[i] = 0xFF;
            vb[i] = 0xFF;
        }
        va[15] = 0x7F;
        check_gf_ops(&va, &vb);
        va[0] = 0xFE;
        check_gf_ops(&va, &vb);
        check_gf_ops(&vb, &va);

        let mut sh = Sha256::new();
        for i in 0..300 {
            sh.update(((3 * i + 0) as u64).to_le_bytes());
            let v1 = sh.finalize_reset();
            sh.update(((3 * i + 1) as u64).to_le_bytes());
            let v2 = sh.finalize_reset();
            check_gf_ops(&v1[..16], &v2[..16]);
            check_gf_ops(&v1[16..], &v2[..16]);
        }
    }

    #[test]
    fn gf127_special_values() {
        // p is a valid internal representation of zero.
        let p = GF127::w64le(0xFFFFFFFFFFFFFFFF, 0x7FFFFFFFFFFFFFFF);
        assert!(p.iszero() == 0xFFFFFFFF);
        assert!(p.equals(GF127::ZERO) == 0xFFFFFFFF);
        assert!(p.encode16() == [0u8; 16]);

        // 2^128 - 1 = 1 mod p.
        let q = GF127::w64le(0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF);
        assert!(q.equals(GF127::ONE) == 0xFFFFFFFF);
        let q = GF127::from_w64le(0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF);
        assert!(q.equals(GF127::ONE) == 0xFFFFFFFF);

        assert!((GF127::MINUS_ONE + GF127::ONE).iszero() == 0xFFFFFFFF);
        assert!(GF127::ZERO.invert().iszero() == 0xFFFFFFFF);
        assert!(GF127::ONE.half().mul2().equals(GF127::ONE) == 0xFFFFFFFF);
    }

    #[test]
    fn gf127_decode() {
        let mut buf = [0xFFu8; 16];
        buf[15] = 0x7F;
        let (_, cc) = GF127::decode16(&buf);
        assert!(cc == 0);
        buf[0] = 0xFE;
        let (x, cc) = GF127::decode16(&buf);
        assert!(cc == 0xFFFFFFFF);
        assert!(x.equals(GF127::MINUS_ONE) == 0xFFFFFFFF);
        buf[15] = 0x80;
        let (x, cc) = GF127::decode16(&buf);
        assert!(cc == 0);
        assert!(x.iszero() == 0xFFFFFFFF);
        assert!(GF127::decode(&buf[..15]).is_none());
    }

    #[test]
    fn gf127_sqrt() {
        let mut sh = Sha256::new();
        for i in 0..20 {
            sh.update((i as u64).to_le_bytes());
            let v = sh.finalize_reset();
            let a = GF127::decode16_reduce(&v[..16]);
            let s = a.square();
            let r = s.sqrt_unchecked();
            assert!((r.equals(a) | r.equals(-a)) == 0xFFFFFFFF);
        }
    }

    fn gf254_rand(sh: &mut Sha256, i: u64) -> GF254 {
        sh.update(i.to_le_bytes());
        let v = sh.finalize_reset();
        GF254::from_parts(
            GF127::decode16_reduce(&v[..16]),
            GF127::decode16_reduce(&v[16..]))
    }

    #[test]
    fn gf254_ops() {
        let zp = modulus();
        let mut sh = Sha256::new();
        for i in 0..100 {
            let a = gf254_rand(&mut sh, 2 * i);
            let b = gf254_rand(&mut sh, 2 * i + 1);
            let (za0, za1) = (to_big(a.re()), to_big(a.im()));
            let (zb0, zb1) = (to_big(b.re()), to_big(b.im()));

            let c = a * b;
            let zc0 = ((&za0 * &zb0) + &zp * &zp - (&za1 * &zb1)) % &zp;
            let zc1 = ((&za0 * &zb1) + (&za1 * &zb0)) % &zp;
            assert!(to_big(c.re()) == zc0);
            assert!(to_big(c.im()) == zc1);

            assert!(a.square().equals(a * a) == 0xFFFFFFFF);
            assert!((a + b - b).equals(a) == 0xFFFFFFFF);
            assert!((a + (-a)).iszero() == 0xFFFFFFFF);
            assert!(a.half().mul2().equals(a) == 0xFFFFFFFF);
            assert!((a * a.invert()).equals(GF254::ONE) == 0xFFFFFFFF);
            assert!(((a / b) * b).equals(a) == 0xFFFFFFFF);

            // a * conj(a) is in the base field.
            let n = a * a.conj();
            assert!(n.im().iszero() == 0xFFFFFFFF);

            let mut d = a;
            d *= b.re();
            assert!(d.equals(a * GF254::from_parts(b.re(), GF127::ZERO))
                == 0xFFFFFFFF);

            let enc = a.encode32();
            let (e, cc) = GF254::decode32(&enc);
            assert!(cc == 0xFFFFFFFF);
            assert!(e.equals(a) == 0xFFFFFFFF);
        }

        // i^2 = -1
        let i = GF254::from_parts(GF127::ZERO, GF127::ONE);
        assert!(i.square().equals(-GF254::ONE) == 0xFFFFFFFF);
        assert!(GF254::ZERO.invert().iszero() == 0xFFFFFFFF);
    }
}

//! FourQ curve implementation.
//!
//! This module implements group operations on FourQ, the twisted Edwards
//! curve of equation `-x^2 + y^2 = 1 + d*x^2*y^2` over the quadratic
//! extension GF(p^2) of the field of integers modulo p = 2^127 - 1. The
//! curve has order `392*r` for a 246-bit prime `r`; the conventional
//! generator `Point::BASE` has order `r`.
//!
//! The curve is equipped with two endomorphisms, phi and psi, which act
//! on the subgroup of order `r` as multiplications by fixed scalars. Scalar
//! multiplications split a 256-bit scalar into four 64-bit sub-scalars
//! and use the four points P, phi(P), psi(P) and psi(phi(P)) in parallel.
//! Three multiplication routines are provided:
//!
//!  - `Point::set_mul()` (and the `*` operator): variable-base, constant-time.
//!  - `Point::mulgen()`: multiplication of the generator with precomputed
//!    comb tables, constant-time.
//!  - `Point::mul_add_mulgen_vartime()`: combined `u*P + v*G`, which is
//!    NOT constant-time and meant for signature verification only.
//!
//! The variable-base and double-base routines rely on the endomorphisms;
//! they compute the expected result only for points in the subgroup of
//! order `r` (all points obtained from the generator are in that
//! subgroup). For arbitrary curve points, `Point::mul_checked()` can clear
//! the cofactor first.
//!
//! Points are encoded over 32 bytes: the two components of the `y`
//! coordinate (16 bytes each, little-endian), with the top bit of the last
//! byte set to the "sign" of `x` (bit 126 of its real part, or of its
//! imaginary part if the real part is zero). Decoding recomputes `x` with
//! a square root and always validates that the point is on the curve.

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use zeroize::Zeroize;
use crate::field::{GF127, GF254};
use crate::scalar::Scalar;
use crate::{Error, Result};

mod endo;
mod recode;
mod tables;

pub use recode::{decompose, recode_glv4, mlsb_set_recode, wnaf_recode};
pub use recode::{LAMBDA_PHI, LAMBDA_PSI};
use tables::{DOUBLE_SCALAR_TABLE, FIXED_BASE_TABLE};

/// Fixed-base comb: window width (rows of the comb, plus the sign row).
pub const W_FIXEDBASE: usize = 5;

/// Fixed-base comb: number of tables (interleaved combs).
pub const V_FIXEDBASE: usize = 5;

/// Fixed-base comb: number of columns processed per table.
pub const E_FIXEDBASE: usize = 10;

/// Fixed-base comb: number of columns (`E_FIXEDBASE * V_FIXEDBASE`).
pub const D_FIXEDBASE: usize = 50;

/// Fixed-base comb: length of the mLSB-set representation.
pub const L_FIXEDBASE: usize = D_FIXEDBASE * W_FIXEDBASE;

/// Bit length of the subgroup order, plus one.
pub const NBITS_ORDER_PLUS_ONE: usize = 247;

/// Number of points in each fixed-base table.
pub const VPOINTS_FIXEDBASE: usize = 1 << (W_FIXEDBASE - 1);

/// wNAF window width for the generator in double-base multiplication.
pub const WP_DOUBLEBASE: u32 = 8;

/// wNAF window width for the other point in double-base multiplication.
pub const WQ_DOUBLEBASE: u32 = 4;

/// Odd multiples per generator image in the static double-base table.
pub const NPOINTS_DOUBLEMUL_WP: usize = 1 << (WP_DOUBLEBASE - 2);

/// Odd multiples per point image computed by double-base multiplication.
pub const NPOINTS_DOUBLEMUL_WQ: usize = 1 << (WQ_DOUBLEBASE - 2);

#[allow(dead_code)]
const COMPILE_TIME_CHECKS: () = compile_time_checks();
const fn compile_time_checks() {
    static_assert!(E_FIXEDBASE
        == (NBITS_ORDER_PLUS_ONE + W_FIXEDBASE * V_FIXEDBASE - 1)
            / (W_FIXEDBASE * V_FIXEDBASE));
    static_assert!(D_FIXEDBASE == E_FIXEDBASE * V_FIXEDBASE);
    static_assert!(L_FIXEDBASE >= NBITS_ORDER_PLUS_ONE);
    static_assert!(WP_DOUBLEBASE >= 2 && WP_DOUBLEBASE <= 8);
    static_assert!(WQ_DOUBLEBASE >= 2 && WQ_DOUBLEBASE <= 8);
}

// Curve parameter d.
const D: GF254 = GF254::w64le(
    0x0000000000000142, 0x00000000000000E4,
    0xB3821488F1FC0C8D, 0x5E472F846657E0FC);

// 2*d.
const D2: GF254 = GF254::w64le(
    0x0000000000000284, 0x00000000000001C8,
    0x67042911E3F8191B, 0x3C8E5F08CCAFC1F9);

// Affine coordinates of the generator.
const GX: GF254 = GF254::w64le(
    0x286592AD7B3833AA, 0x1A3472237C2FB305,
    0x96869FB360AC77F6, 0x1E1F553F2878AA9C);
const GY: GF254 = GF254::w64le(
    0xB924A2462BCBB287, 0x0E3FEE9BA120785A,
    0x49A7C344844C8B5C, 0x6E1C4AF8630E0242);

// Decode a 256-bit integer (little-endian) into four 64-bit limbs; only
// the first 32 bytes of buf are used.
#[inline]
pub(crate) fn words_le(buf: &[u8]) -> [u64; 4] {
    let mut k = [0u64; 4];
    for i in 0..4 {
        let mut w = [0u8; 8];
        w[..].copy_from_slice(&buf[(8 * i)..(8 * i + 8)]);
        k[i] = u64::from_le_bytes(w);
    }
    k
}

// Constant-time conditional copy and negation, for the point
// representations that are read from tables.
pub(crate) trait CtSelect: Copy {
    fn set_cond(&mut self, a: &Self, ctl: u32);
    fn set_condneg(&mut self, ctl: u32);
}

// Get win[k], negated if neg == 0xFFFFFFFF (constant-time). The index k
// MUST be lower than win.len().
fn ct_lookup<T: CtSelect>(win: &[T], k: u32, neg: u32) -> T {
    let mut P = win[0];
    for i in 1..win.len() {
        // Values a-b and b-a both have their high bit equal to 0 only
        // if a == b.
        let j = i as u32;
        let w = !(k.wrapping_sub(j) | j.wrapping_sub(k));
        let w = ((w as i32) >> 31) as u32;
        P.set_cond(&win[i], w);
    }
    P.set_condneg(neg);
    P
}

// Extended coordinates (X:Y:Z:Ta:Tb), with x = X/Z, y = Y/Z and
// x*y = Ta*Tb/Z. Output of all point operations.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PointExt {
    pub(crate) X: GF254,
    pub(crate) Y: GF254,
    pub(crate) Z: GF254,
    pub(crate) Ta: GF254,
    pub(crate) Tb: GF254,
}

// (X+Y, Y-X, 2*Z, 2*d*T): right operand of additions.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PointExtPre {
    pub(crate) xy: GF254,
    pub(crate) yx: GF254,
    pub(crate) z2: GF254,
    pub(crate) t2: GF254,
}

// (X+Y, Y-X, Z, T): left operand of additions.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PointExtSum {
    pub(crate) xy: GF254,
    pub(crate) yx: GF254,
    pub(crate) z: GF254,
    pub(crate) t: GF254,
}

// Affine (y+x, y-x, 2*d*x*y), used in the static tables.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PointDuif {
    pub(crate) ypx: GF254,
    pub(crate) ymx: GF254,
    pub(crate) t2d: GF254,
}

impl PointExt {

    const NEUTRAL: Self = Self {
        X: GF254::ZERO,
        Y: GF254::ONE,
        Z: GF254::ONE,
        Ta: GF254::ZERO,
        Tb: GF254::ONE,
    };

    #[inline(always)]
    fn from_affine(x: &GF254, y: &GF254) -> Self {
        Self { X: *x, Y: *y, Z: GF254::ONE, Ta: *x, Tb: *y }
    }

    // Check the curve equation on affine coordinates.
    fn affine_on_curve(x: &GF254, y: &GF254) -> u32 {
        let x2 = x.square();
        let y2 = y.square();
        (y2 - x2).equals(GF254::ONE + D * x2 * y2)
    }

    // Check the curve equation in projective coordinates:
    // (Y^2 - X^2)*Z^2 = Z^4 + d*X^2*Y^2, with Z != 0.
    fn is_on_curve(&self) -> u32 {
        let X2 = self.X.square();
        let Y2 = self.Y.square();
        let Z2 = self.Z.square();
        ((Y2 - X2) * Z2).equals(Z2.square() + D * X2 * Y2)
            & !self.Z.iszero()
    }

    fn to_affine(&self) -> (GF254, GF254) {
        let iZ = self.Z.invert();
        ((self.X * iZ).normalized(), (self.Y * iZ).normalized())
    }

    #[inline]
    fn to_pre(&self) -> PointExtPre {
        PointExtPre {
            xy: self.X + self.Y,
            yx: self.Y - self.X,
            z2: self.Z.mul2(),
            t2: self.Ta * self.Tb * D2,
        }
    }

    #[inline]
    fn to_sum(&self) -> PointExtSum {
        PointExtSum {
            xy: self.X + self.Y,
            yx: self.Y - self.X,
            z: self.Z,
            t: self.Ta * self.Tb,
        }
    }

    // Doubling only reads X, Y and Z.
    fn set_double(&mut self) {
        let X2 = self.X.square();
        let Y2 = self.Y.square();
        let Tb = X2 + Y2;
        let t1 = Y2 - X2;
        let Ta = (self.X + self.Y).square() - Tb;
        let t2 = self.Z.square().mul2() - t1;
        self.X = t2 * Ta;
        self.Y = t1 * Tb;
        self.Z = t1 * t2;
        self.Ta = Ta;
        self.Tb = Tb;
    }

    #[inline(always)]
    fn double(self) -> Self {
        let mut r = self;
        r.set_double();
        r
    }

    // Complete addition with an operand in (X+Y, Y-X, 2Z, 2dT).
    #[inline]
    fn set_add_pre(&mut self, rhs: &PointExtPre) {
        *self = rhs.add_core(&self.to_sum());
    }

    // Mixed addition with an affine table point.
    fn set_add_duif(&mut self, rhs: &PointDuif) {
        let T = self.Ta * self.Tb * rhs.t2d;
        let Z2 = self.Z.mul2();
        let theta = Z2 - T;
        let alpha = Z2 + T;
        let A = rhs.ypx * (self.X + self.Y);
        let B = rhs.ymx * (self.Y - self.X);
        let beta = A - B;
        let omega = A + B;
        self.X = beta * theta;
        self.Y = omega * alpha;
        self.Z = alpha * theta;
        self.Ta = omega;
        self.Tb = beta;
    }

    #[inline]
    fn set_neg(&mut self) {
        self.X.set_neg();
        self.Ta.set_neg();
    }

    fn equals(&self, rhs: &Self) -> u32 {
        (self.X * rhs.Z).equals(rhs.X * self.Z)
        & (self.Y * rhs.Z).equals(rhs.Y * self.Z)
    }

    #[inline]
    fn isneutral(&self) -> u32 {
        self.X.iszero() & self.Y.equals(self.Z)
    }

    // Multiply by the cofactor 392 = 8*(1 + 3*16).
    fn set_clear_cofactor(&mut self) {
        let Q = self.to_pre();
        self.set_double();
        self.set_add_pre(&Q);
        for _ in 0..4 {
            self.set_double();
        }
        self.set_add_pre(&Q);
        for _ in 0..3 {
            self.set_double();
        }
    }

    // Table for the variable-base multiplication: entry i is
    // P + [i&1]*phi(P) + [i&2]*psi(P) + [i&4]*psi(phi(P)).
    fn precomp_glv(&self) -> [PointExtPre; 8] {
        let mut PP = *self;
        PP.set_phi();
        let Q = PP.to_sum();
        PP.set_psi();
        let S = PP.to_sum();
        let mut PR = *self;
        PR.set_psi();
        let R = PR.to_sum();

        let mut T = [PointExtPre::NEUTRAL; 8];
        T[0] = self.to_pre();
        T[1] = T[0].add_core(&Q).to_pre();
        T[2] = T[0].add_core(&R).to_pre();
        T[3] = T[1].add_core(&R).to_pre();
        for i in 0..4 {
            T[i + 4] = T[i].add_core(&S).to_pre();
        }
        T
    }

    // Odd multiples P, 3*P, 5*P... for the double-base multiplication.
    fn precomp_odd(&self) -> [PointExtPre; NPOINTS_DOUBLEMUL_WQ] {
        let mut T = [PointExtPre::NEUTRAL; NPOINTS_DOUBLEMUL_WQ];
        T[0] = self.to_pre();
        let P2 = self.double().to_sum();
        for i in 1..NPOINTS_DOUBLEMUL_WQ {
            T[i] = T[i - 1].add_core(&P2).to_pre();
        }
        T
    }

    // Multiply this point by a 256-bit integer (constant-time). The
    // point MUST be in the subgroup of order r.
    fn set_mul_w64(&mut self, k: &[u64; 4]) {
        let mut sc = decompose(k);
        let (mut digits, mut signs) = recode_glv4(&sc);
        let win = self.precomp_glv();

        // Sign masks are 0xFFFFFFFF for positive digits. The top digit
        // is positive; its doubling is folded in the conversion.
        let S = ct_lookup(&win, digits[64], !signs[64]);
        *self = S.to_ext_doubled();
        for i in (0..64).rev() {
            let S = ct_lookup(&win, digits[i], !signs[i]);
            self.set_double();
            self.set_add_pre(&S);
        }

        sc.zeroize();
        digits.zeroize();
        signs.zeroize();
    }

    // Multiply the generator by a scalar (constant-time).
    fn mulgen(n: &Scalar) -> Self {
        // Comb digit for column c: the bits of rows 1 to W-1, and the
        // sign in row 0 (0xFFFFFFFF for negative).
        fn comb_digit(digits: &[u32; L_FIXEDBASE], c: usize) -> (u32, u32) {
            let mut v = 0;
            for row in (1..W_FIXEDBASE).rev() {
                v = (v << 1) | digits[row * D_FIXEDBASE + c];
            }
            (v, digits[c])
        }

        fn block(b: usize) -> &'static [PointDuif] {
            &FIXED_BASE_TABLE[(b * VPOINTS_FIXEDBASE)..((b + 1) * VPOINTS_FIXEDBASE)]
        }

        const D: usize = D_FIXEDBASE;
        const E: usize = E_FIXEDBASE;
        const V: usize = V_FIXEDBASE;

        // An even scalar is replaced with k + r (odd), which yields
        // the same point.
        let mut k = n.to_odd_256();
        let mut digits = mlsb_set_recode(&k);

        let (v, s) = comb_digit(&digits, D - 1);
        let mut R = ct_lookup(block(V - 1), v, s).to_ext();
        for j in 0..(V - 1) {
            let (v, s) = comb_digit(&digits, D - (j + 1) * E - 1);
            R.set_add_duif(&ct_lookup(block(V - j - 2), v, s));
        }
        for ii in (0..(E - 1)).rev() {
            R.set_double();
            for j in 0..V {
                let (v, s) = comb_digit(&digits, D - (j + 1) * E + ii);
                R.set_add_duif(&ct_lookup(block(V - j - 1), v, s));
            }
        }

        k.zeroize();
        digits.zeroize();
        R
    }

    // Compute k*G + l*Q. Q MUST be in the subgroup of order r.
    // THIS IS NOT CONSTANT-TIME.
    fn mul_double_vartime(k: &[u64; 4], Q: &Self, l: &[u64; 4]) -> Self {
        let mut Q2 = *Q;
        Q2.set_phi();
        let mut Q3 = *Q;
        Q3.set_psi();
        let mut Q4 = Q2;
        Q4.set_psi();

        let ks = decompose(k);
        let ls = decompose(l);
        let mut dk = [[0i8; 65]; 4];
        let mut dl = [[0i8; 65]; 4];
        for j in 0..4 {
            dk[j] = wnaf_recode(ks[j], WP_DOUBLEBASE);
            dl[j] = wnaf_recode(ls[j], WQ_DOUBLEBASE);
        }
        let tq = [
            Q.precomp_odd(), Q2.precomp_odd(),
            Q3.precomp_odd(), Q4.precomp_odd(),
        ];

        let mut T = Self::NEUTRAL;
        for i in (0..65).rev() {
            T.set_double();
            for j in 0..4 {
                let d = dl[j][i] as i32;
                if d > 0 {
                    T.set_add_pre(&tq[j][(d >> 1) as usize]);
                } else if d < 0 {
                    T.set_add_pre(&-tq[j][((-d) >> 1) as usize]);
                }
            }
            for j in 0..4 {
                let d = dk[j][i] as i32;
                let off = j * NPOINTS_DOUBLEMUL_WP;
                if d > 0 {
                    T.set_add_duif(&DOUBLE_SCALAR_TABLE[off + (d >> 1) as usize]);
                } else if d < 0 {
                    T.set_add_duif(&-DOUBLE_SCALAR_TABLE[off + ((-d) >> 1) as usize]);
                }
            }
        }
        T
    }
}

impl CtSelect for PointExt {

    #[inline]
    fn set_cond(&mut self, a: &Self, ctl: u32) {
        self.X.set_cond(&a.X, ctl);
        self.Y.set_cond(&a.Y, ctl);
        self.Z.set_cond(&a.Z, ctl);
        self.Ta.set_cond(&a.Ta, ctl);
        self.Tb.set_cond(&a.Tb, ctl);
    }

    #[inline]
    fn set_condneg(&mut self, ctl: u32) {
        self.X.set_cond(&-self.X, ctl);
        self.Ta.set_cond(&-self.Ta, ctl);
    }
}

impl PointExtPre {

    const NEUTRAL: Self = Self {
        xy: GF254::ONE,
        yx: GF254::ONE,
        z2: GF254::w64le(2, 0, 0, 0),
        t2: GF254::ZERO,
    };

    // Addition (self + rhs), complete.
    fn add_core(&self, rhs: &PointExtSum) -> PointExt {
        let C = self.t2 * rhs.t;
        let Z2 = self.z2 * rhs.z;
        let A = self.xy * rhs.xy;
        let B = self.yx * rhs.yx;
        let theta = Z2 - C;
        let alpha = Z2 + C;
        let beta = A - B;
        let omega = A + B;
        PointExt {
            X: beta * theta,
            Y: omega * alpha,
            Z: alpha * theta,
            Ta: omega,
            Tb: beta,
        }
    }

    // Convert to (2X:2Y:2Z). Ta and Tb are not set; the result MUST
    // be doubled before being used in an addition.
    fn to_ext_doubled(&self) -> PointExt {
        PointExt {
            X: self.xy - self.yx,
            Y: self.xy + self.yx,
            Z: self.z2,
            Ta: GF254::ZERO,
            Tb: GF254::ZERO,
        }
    }
}

impl CtSelect for PointExtPre {

    #[inline]
    fn set_cond(&mut self, a: &Self, ctl: u32) {
        self.xy.set_cond(&a.xy, ctl);
        self.yx.set_cond(&a.yx, ctl);
        self.z2.set_cond(&a.z2, ctl);
        self.t2.set_cond(&a.t2, ctl);
    }

    // Negation exchanges X+Y and Y-X, and negates T.
    #[inline]
    fn set_condneg(&mut self, ctl: u32) {
        GF254::cswap(&mut self.xy, &mut self.yx, ctl);
        self.t2.set_cond(&-self.t2, ctl);
    }
}

impl Neg for PointExtPre {
    type Output = PointExtPre;

    #[inline(always)]
    fn neg(self) -> PointExtPre {
        let mut r = self;
        r.set_condneg(0xFFFFFFFF);
        r
    }
}

impl PointDuif {

    fn to_ext(&self) -> PointExt {
        let x = (self.ypx - self.ymx).half();
        let y = (self.ypx + self.ymx).half();
        PointExt::from_affine(&x, &y)
    }
}

impl CtSelect for PointDuif {

    #[inline]
    fn set_cond(&mut self, a: &Self, ctl: u32) {
        self.ypx.set_cond(&a.ypx, ctl);
        self.ymx.set_cond(&a.ymx, ctl);
        self.t2d.set_cond(&a.t2d, ctl);
    }

    #[inline]
    fn set_condneg(&mut self, ctl: u32) {
        GF254::cswap(&mut self.ypx, &mut self.ymx, ctl);
        self.t2d.set_cond(&-self.t2d, ctl);
    }
}

impl Neg for PointDuif {
    type Output = PointDuif;

    #[inline(always)]
    fn neg(self) -> PointDuif {
        let mut r = self;
        r.set_condneg(0xFFFFFFFF);
        r
    }
}

/// A point on the FourQ curve.
#[derive(Clone, Copy, Debug)]
pub struct Point(PointExt);

impl Point {

    /// The group neutral (identity point) in the curve.
    ///
    /// Affine coordinates of the neutral are (0,1).
    pub const NEUTRAL: Self = Self(PointExt::NEUTRAL);

    /// The conventional generator of the subgroup of order r.
    pub const BASE: Self = Self(PointExt {
        X: GX,
        Y: GY,
        Z: GF254::ONE,
        Ta: GX,
        Tb: GY,
    });

    /// Creates a point from its affine coordinates.
    ///
    /// If the coordinates are not those of a curve point, then `None`
    /// is returned.
    pub fn from_affine(x: &GF254, y: &GF254) -> Option<Self> {
        if PointExt::affine_on_curve(x, y) != 0 {
            Some(Self(PointExt::from_affine(x, y)))
        } else {
            None
        }
    }

    /// Gets the affine coordinates (x, y) of this point.
    pub fn to_affine(self) -> (GF254, GF254) {
        self.0.to_affine()
    }

    /// Gets the affine x coordinate of this point.
    #[inline]
    pub fn x(self) -> GF254 {
        (self.0.X / self.0.Z).normalized()
    }

    /// Gets the affine y coordinate of this point.
    #[inline]
    pub fn y(self) -> GF254 {
        (self.0.Y / self.0.Z).normalized()
    }

    /// Encodes this point into exactly 32 bytes.
    ///
    /// Encoding is always canonical.
    pub fn encode(self) -> [u8; 32] {
        let (x, y) = self.to_affine();
        let mut r = y.encode32();
        let (x0, x1) = (x.re(), x.im());
        let (s0, s1) = (x0.bit126(), x1.bit126());
        let s = s0 ^ ((s0 ^ s1) & x0.iszero());
        r[31] |= (s as u8) << 7;
        r
    }

    /// Decodes a point from bytes.
    ///
    /// If the input is not exactly 32 bytes, or if the `y` coordinate is
    /// not canonically encoded, or if no curve point matches the encoded
    /// value, then this function returns 0x00000000 and this point is set
    /// to the neutral. Otherwise, it returns 0xFFFFFFFF and this point is
    /// set to the decoded point.
    pub fn set_decode(&mut self, buf: &[u8]) -> u32 {
        *self = Self::NEUTRAL;
        if buf.len() != 32 {
            return 0;
        }
        let mut tmp = [0u8; 32];
        tmp[..].copy_from_slice(buf);
        let sign = (tmp[31] >> 7) as u32;
        tmp[31] &= 0x7F;
        let (y, mut r) = GF254::decode32(&tmp);

        // x^2 = u/v with u = y^2 - 1 and v = d*y^2 + 1.
        let y2 = y.square();
        let u = y2 - GF254::ONE;
        let v = y2 * D + GF254::ONE;
        let (u0, u1) = (u.re(), u.im());
        let (v0, v1) = (v.re(), v.im());

        // u/v = (t1 + t2*i)/t0, with t0 = norm(v).
        let t0 = v0.square() + v1.square();
        let t1 = u0 * v0 + u1 * v1;
        let t2 = u1 * v0 - u0 * v1;

        // Square root of the norm of t1 + t2*i.
        let t3 = (t1.square() + t2.square()).xsquare(125);

        let mut t = t1 + t3;
        t.set_cond(&(t1 - t3), t.iszero());
        let t = t.mul2();

        // 1/sqrt(t0^3*t) via the power 2^125 - 1.
        let t3 = t0.square() * t0 * t;
        let t3 = t0 * t3.exp1251();
        let mut x0 = t * t3;
        let t1 = t0 * x0.square();
        x0 = x0.half();
        let mut x1 = t3 * t2;

        // If t0*x0^2 != t, then the roles of x0 and x1 are exchanged.
        GF127::cswap(&mut x0, &mut x1, !t.equals(t1));
        x0.set_normalized();
        x1.set_normalized();

        // Adjust the sign.
        let (s0, s1) = (x0.bit126(), x1.bit126());
        let sign_dec = s0 ^ ((s0 ^ s1) & x0.iszero());
        let mut x = GF254::from_parts(x0, x1);
        x.set_cond(&-x, (sign ^ sign_dec).wrapping_neg());

        // Validate, with a retry on (x0, -x1).
        let ok1 = PointExt::affine_on_curve(&x, &y);
        let xc = GF254::from_parts(x.re(), -x.im());
        let ok2 = PointExt::affine_on_curve(&xc, &y);
        x.set_cond(&xc, !ok1);
        r &= ok1 | ok2;

        self.0.set_cond(&PointExt::from_affine(&x, &y), r);
        r
    }

    /// Decodes a point from bytes.
    ///
    /// On success, the decoded point is returned. On failure (invalid
    /// length, non-canonical `y`, or no matching curve point), `None`
    /// is returned.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let mut P = Self::NEUTRAL;
        if P.set_decode(buf) != 0 {
            Some(P)
        } else {
            None
        }
    }

    /// Checks whether this point is on the curve.
    ///
    /// All points created through the public API are on the curve; this
    /// function is meant for validation of externally provided values.
    /// THIS FUNCTION IS NOT CONSTANT-TIME.
    pub fn is_on_curve_vartime(self) -> bool {
        self.0.is_on_curve() != 0
    }

    /// Doubles this point (in place).
    #[inline]
    pub fn set_double(&mut self) {
        self.0.set_double();
    }

    /// Doubles this point.
    #[inline(always)]
    pub fn double(self) -> Self {
        let mut r = self;
        r.set_double();
        r
    }

    /// Adds another point (`rhs`) to this point (in place).
    #[inline]
    pub fn set_add(&mut self, rhs: &Self) {
        self.0.set_add_pre(&rhs.0.to_pre());
    }

    /// Subtracts another point (`rhs`) from this point (in place).
    #[inline]
    pub fn set_sub(&mut self, rhs: &Self) {
        self.0.set_add_pre(&-rhs.0.to_pre());
    }

    /// Negates this point (in place).
    #[inline]
    pub fn set_neg(&mut self) {
        self.0.set_neg();
    }

    /// Copies `P` into `self` if `ctl` = 0xFFFFFFFF; `self` is unchanged
    /// if `ctl` = 0x00000000. `ctl` MUST be 0x00000000 or 0xFFFFFFFF.
    #[inline]
    pub fn set_cond(&mut self, P: &Self, ctl: u32) {
        self.0.set_cond(&P.0, ctl);
    }

    /// Returns `P0` (if `ctl` = 0x00000000) or `P1` (if
    /// `ctl` = 0xFFFFFFFF).
    #[inline(always)]
    pub fn select(P0: &Self, P1: &Self, ctl: u32) -> Self {
        let mut P = *P0;
        P.set_cond(P1, ctl);
        P
    }

    /// Negates this point if `ctl` = 0xFFFFFFFF, leaves it unchanged if
    /// `ctl` = 0x00000000.
    #[inline]
    pub fn set_condneg(&mut self, ctl: u32) {
        self.0.set_condneg(ctl);
    }

    /// Compares two points for equality.
    ///
    /// Returned value is 0xFFFFFFFF if the two points are equal,
    /// 0x00000000 otherwise.
    #[inline]
    pub fn equals(self, rhs: Self) -> u32 {
        self.0.equals(&rhs.0)
    }

    /// Tests whether this point is the neutral.
    ///
    /// Returned value is 0xFFFFFFFF for the neutral, 0x00000000
    /// otherwise.
    #[inline]
    pub fn isneutral(self) -> u32 {
        self.0.isneutral()
    }

    /// Applies the endomorphism phi. On the subgroup of order r, this is
    /// a multiplication by `LAMBDA_PHI`.
    pub fn phi(self) -> Self {
        let mut r = self;
        r.0.set_phi();
        r
    }

    /// Applies the endomorphism psi. On the subgroup of order r, this is
    /// a multiplication by `LAMBDA_PSI`.
    pub fn psi(self) -> Self {
        let mut r = self;
        r.0.set_psi();
        r
    }

    /// Multiplies this point by the cofactor (392), in place. The result
    /// is in the subgroup of order r.
    #[inline]
    pub fn set_clear_cofactor(&mut self) {
        self.0.set_clear_cofactor();
    }

    /// Multiplies this point by the cofactor (392).
    #[inline]
    pub fn clear_cofactor(self) -> Self {
        let mut r = self;
        r.set_clear_cofactor();
        r
    }

    /// Multiplies this point by a scalar (in place).
    ///
    /// This operation is constant-time. This point MUST be in the
    /// subgroup of order r; see `mul_checked()` for other points.
    pub fn set_mul(&mut self, n: &Scalar) {
        self.0.set_mul_w64(&n.to_w64le());
    }

    /// Multiplies this point by a 256-bit integer `k` (32 bytes,
    /// unsigned little-endian convention, not necessarily reduced).
    ///
    /// The point is first validated (`Error::InvalidPoint` is returned
    /// if it is not on the curve). If `clear_cofactor` is true, then the
    /// point is multiplied by the cofactor before the multiplication by
    /// `k`, so that any curve point is acceptable. This operation is
    /// constant-time with regard to `k`.
    pub fn mul_checked(self, k: &[u8; 32], clear_cofactor: bool)
        -> Result<Self>
    {
        if !self.is_on_curve_vartime() {
            return Err(Error::InvalidPoint);
        }
        let mut P = self.0;
        if clear_cofactor {
            P.set_clear_cofactor();
        }
        let mut kw = words_le(&k[..]);
        P.set_mul_w64(&kw);
        kw.zeroize();
        Ok(Self(P))
    }

    /// Sets this point to the product of the generator by a scalar.
    ///
    /// This operation is constant-time. It is faster than using the
    /// generic multiplication on `Self::BASE`.
    #[inline]
    pub fn set_mulgen(&mut self, n: &Scalar) {
        self.0 = PointExt::mulgen(n);
    }

    /// Creates a point by multiplying the generator by a scalar.
    ///
    /// This operation is constant-time.
    #[inline]
    pub fn mulgen(n: &Scalar) -> Self {
        Self(PointExt::mulgen(n))
    }

    /// Computes `u*self + v*G` (with `G` the generator).
    ///
    /// This point is validated first (`Error::InvalidPoint` is returned
    /// if it is not on the curve); it MUST be in the subgroup of order r.
    /// THIS FUNCTION IS NOT CONSTANT-TIME; it shall be used only with
    /// public data.
    pub fn mul_add_mulgen_vartime(self, u: &Scalar, v: &Scalar)
        -> Result<Self>
    {
        self.mul_add_mulgen_w64_vartime(&u.to_w64le(), &v.to_w64le())
    }

    // Same as mul_add_mulgen_vartime(), with unreduced 256-bit integers.
    pub(crate) fn mul_add_mulgen_w64_vartime(self, u: &[u64; 4], v: &[u64; 4])
        -> Result<Self>
    {
        if !self.is_on_curve_vartime() {
            return Err(Error::InvalidPoint);
        }
        Ok(Self(PointExt::mul_double_vartime(v, &self.0, u)))
    }
}

impl Add<Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: Point) -> Point {
        let mut r = self;
        r.set_add(&other);
        r
    }
}

impl Add<&Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: &Point) -> Point {
        let mut r = self;
        r.set_add(other);
        r
    }
}

impl Add<Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: Point) -> Point {
        let mut r = *self;
        r.set_add(&other);
        r
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn add(self, other: &Point) -> Point {
        let mut r = *self;
        r.set_add(other);
        r
    }
}

impl AddAssign<Point> for Point {
    #[inline(always)]
    fn add_assign(&mut self, other: Point) {
        self.set_add(&other);
    }
}

impl AddAssign<&Point> for Point {
    #[inline(always)]
    fn add_assign(&mut self, other: &Point) {
        self.set_add(other);
    }
}

impl Mul<Scalar> for Point {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: Scalar) -> Point {
        let mut r = self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&Scalar> for Point {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: &Scalar) -> Point {
        let mut r = self;
        r.set_mul(other);
        r
    }
}

impl Mul<Scalar> for &Point {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: Scalar) -> Point {
        let mut r = *self;
        r.set_mul(&other);
        r
    }
}

impl Mul<&Scalar> for &Point {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: &Scalar) -> Point {
        let mut r = *self;
        r.set_mul(other);
        r
    }
}

impl MulAssign<Scalar> for Point {
    #[inline(always)]
    fn mul_assign(&mut self, other: Scalar) {
        self.set_mul(&other);
    }
}

impl MulAssign<&Scalar> for Point {
    #[inline(always)]
    fn mul_assign(&mut self, other: &Scalar) {
        self.set_mul(other);
    }
}

impl Mul<Point> for Scalar {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: Point) -> Point {
        let mut r = other;
        r.set_mul(&self);
        r
    }
}

impl Mul<&Point> for Scalar {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: &Point) -> Point {
        let mut r = *other;
        r.set_mul(&self);
        r
    }
}

impl Mul<Point> for &Scalar {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: Point) -> Point {
        let mut r = other;
        r.set_mul(self);
        r
    }
}

impl Mul<&Point> for &Scalar {
    type Output = Point;

    #[inline(always)]
    fn mul(self, other: &Point) -> Point {
        let mut r = *other;
        r.set_mul(self);
        r
    }
}

impl Neg for Point {
    type Output = Point;

    #[inline(always)]
    fn neg(self) -> Point {
        let mut r = self;
        r.set_neg();
        r
    }
}

impl Neg for &Point {
    type Output = Point;

    #[inline(always)]
    fn neg(self) -> Point {
        let mut r = *self;
        r.set_neg();
        r
    }
}

impl Sub<Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: Point) -> Point {
        let mut r = self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&Point> for Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: &Point) -> Point {
        let mut r = self;
        r.set_sub(other);
        r
    }
}

impl Sub<Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: Point) -> Point {
        let mut r = *self;
        r.set_sub(&other);
        r
    }
}

impl Sub<&Point> for &Point {
    type Output = Point;

    #[inline(always)]
    fn sub(self, other: &Point) -> Point {
        let mut r = *self;
        r.set_sub(other);
        r
    }
}

impl SubAssign<Point> for Point {
    #[inline(always)]
    fn sub_assign(&mut self, other: Point) {
        self.set_sub(&other);
    }
}

impl SubAssign<&Point> for Point {
    #[inline(always)]
    fn sub_assign(&mut self, other: &Point) {
        self.set_sub(other);
    }
}

#[cfg(test)]
mod tests {

    use super::{Point, LAMBDA_PHI, LAMBDA_PSI};
    use crate::field::GF254;
    use crate::scalar::Scalar;
    use crate::Error;
    use sha2::{Sha256, Digest};

    // Pseudorandom scalar from a counter.
    fn rand_scalar(i: u64) -> Scalar {
        let mut sh = Sha256::new();
        sh.update(&i.to_le_bytes());
        sh.update(&[0x53u8]);
        Scalar::decode_reduce(&sh.finalize()[..])
    }

    #[test]
    fn base_encode() {
        let enc = Point::BASE.encode();
        assert_eq!(enc[..], hex::decode("87b2cb2b46a224b95a7820a19bee3f0e5c8b4c8444c3a74942020e63f84a1c6e").unwrap()[..]);
        let P = Point::decode(&enc).unwrap();
        assert!(P.equals(Point::BASE) == 0xFFFFFFFF);
        assert!(Point::BASE.is_on_curve_vartime());

        let (x, y) = Point::BASE.to_affine();
        let Q = Point::from_affine(&x, &y).unwrap();
        assert!(Q.equals(Point::BASE) == 0xFFFFFFFF);
        assert!(Point::from_affine(&y, &x).is_none());

        let N = Point::decode(&Point::NEUTRAL.encode()).unwrap();
        assert!(N.isneutral() == 0xFFFFFFFF);
        assert!(Point::BASE.isneutral() == 0);
    }

    #[test]
    fn mulgen_kat() {
        let P = Point::mulgen(&Scalar::from_u64(7));
        assert_eq!(P.encode()[..], hex::decode("bcca9f0589d3a99c48872fbc1257c859c51e3c79c468ff1fb5e28c4b47339b2a").unwrap()[..]);

        let k = Scalar::from_w64le(
            0x0123456789ABCDEF, 0x0123456789ABCDEF,
            0x0123456789ABCDEF, 0x0123456789ABCDEF);
        let P = Point::mulgen(&k);
        assert_eq!(P.encode()[..], hex::decode("5a5ae14ef372996c19f831a66dd25c203fb8944f26f986e8e726def4544e5ff8").unwrap()[..]);
        let Q = Point::BASE * k;
        assert!(P.equals(Q) == 0xFFFFFFFF);
    }

    #[test]
    fn add_double() {
        let G = Point::BASE;
        let G2 = G.double();
        let G3 = G2 + G;
        let G4 = G2.double();
        let G7 = G4 + G3;
        assert!(G7.equals(Point::mulgen(&Scalar::from_u64(7))) == 0xFFFFFFFF);
        assert!((G + G).equals(G2) == 0xFFFFFFFF);
        assert!((G4 - G).equals(G3) == 0xFFFFFFFF);
        assert!((G3 + (-G3)).isneutral() == 0xFFFFFFFF);
        assert!((G3 + Point::NEUTRAL).equals(G3) == 0xFFFFFFFF);
        assert!((Point::NEUTRAL + Point::NEUTRAL).isneutral() == 0xFFFFFFFF);

        for i in 0..10 {
            let P = Point::mulgen(&rand_scalar(3 * i));
            let Q = Point::mulgen(&rand_scalar(3 * i + 1));
            let R = Point::mulgen(&rand_scalar(3 * i + 2));
            assert!((P + Q).equals(Q + P) == 0xFFFFFFFF);
            assert!(((P + Q) + R).equals(P + (Q + R)) == 0xFFFFFFFF);
            assert!((P + Q).is_on_curve_vartime());
            let mut S = P;
            S += Q;
            S -= P;
            assert!(S.equals(Q) == 0xFFFFFFFF);
            assert!(S.equals(P) == 0);
            let T = Point::select(&P, &Q, 0xFFFFFFFF);
            assert!(T.equals(Q) == 0xFFFFFFFF);
            let mut T = P;
            T.set_condneg(0xFFFFFFFF);
            assert!(T.equals(-P) == 0xFFFFFFFF);
        }
    }

    #[test]
    fn encode_decode() {
        let mut ok = 0;
        let mut bad = 0;
        for i in 0..40 {
            let P = Point::mulgen(&rand_scalar(i));
            let enc = P.encode();
            let Q = Point::decode(&enc).unwrap();
            assert!(Q.equals(P) == 0xFFFFFFFF);
            assert_eq!(Q.encode(), enc);
            assert!(Point::decode(&enc[..31]).is_none());

            // Arbitrary y values: about half of them match a point.
            let mut sh = Sha256::new();
            sh.update(&(i as u64).to_le_bytes());
            let mut buf = [0u8; 32];
            buf[..].copy_from_slice(&sh.finalize()[..]);
            buf[15] &= 0x7F;
            buf[31] &= 0x7F;
            match Point::decode(&buf) {
                Some(R) => {
                    assert!(R.is_on_curve_vartime());
                    assert_eq!(R.encode()[..31], buf[..31]);
                    ok += 1;
                }
                None => {
                    bad += 1;
                }
            }
        }
        assert!(ok > 0 && bad > 0);

        // Non-canonical y (component equal to p).
        let mut buf = [0xFFu8; 32];
        buf[15] = 0x7F;
        buf[31] = 0x7F;
        assert!(Point::decode(&buf).is_none());
        let mut P = Point::BASE;
        assert!(P.set_decode(&buf) == 0);
        assert!(P.isneutral() == 0xFFFFFFFF);

        // y = (p, 0) would reduce to y = 0, i.e. the order-4 point (i, 0);
        // y must be canonical, so it is rejected.
        let mut buf = [0u8; 32];
        buf[..15].copy_from_slice(&[0xFFu8; 15]);
        buf[15] = 0x7F;
        assert!(Point::decode(&buf).is_none());
    }

    #[test]
    fn mul_vs_mulgen() {
        for i in 0..20 {
            let k = rand_scalar(i);
            let P = Point::mulgen(&k);
            let Q = Point::BASE * k;
            assert!(P.equals(Q) == 0xFFFFFFFF);

            // Even scalars go through the k + r adjustment.
            let k2 = k + k;
            assert!(Point::mulgen(&k2).equals(P.double()) == 0xFFFFFFFF);
            assert!((P * Scalar::from_u64(2)).equals(P.double()) == 0xFFFFFFFF);
        }

        assert!(Point::mulgen(&Scalar::ZERO).isneutral() == 0xFFFFFFFF);
        assert!((Point::BASE * Scalar::ZERO).isneutral() == 0xFFFFFFFF);
        assert!(Point::mulgen(&Scalar::ONE).equals(Point::BASE) == 0xFFFFFFFF);
        assert!(Point::mulgen(&Scalar::MINUS_ONE).equals(-Point::BASE) == 0xFFFFFFFF);
        assert!((Point::BASE * Scalar::MINUS_ONE).equals(-Point::BASE) == 0xFFFFFFFF);
        assert!((Point::NEUTRAL * rand_scalar(100)).isneutral() == 0xFFFFFFFF);

        let a = rand_scalar(101);
        let b = rand_scalar(102);
        let P = Point::mulgen(&a);
        assert!((P * b).equals(Point::mulgen(&(a * b))) == 0xFFFFFFFF);
        assert!((b * &P).equals(Point::mulgen(&(a * b))) == 0xFFFFFFFF);
    }

    #[test]
    fn endomorphisms() {
        let P = Point::mulgen(&rand_scalar(200));
        assert!(P.phi().equals(P * LAMBDA_PHI) == 0xFFFFFFFF);
        assert!(P.psi().equals(P * LAMBDA_PSI) == 0xFFFFFFFF);
        assert!(P.phi().is_on_curve_vartime());
        assert!(P.psi().is_on_curve_vartime());
        assert!(Point::NEUTRAL.phi().isneutral() == 0xFFFFFFFF);
        assert!(Point::NEUTRAL.psi().isneutral() == 0xFFFFFFFF);
    }

    #[test]
    fn mul_checked() {
        let k = rand_scalar(300);
        let kb = k.encode32();
        let P = Point::BASE.mul_checked(&kb, false).unwrap();
        assert!(P.equals(Point::mulgen(&k)) == 0xFFFFFFFF);
        let P = Point::BASE.mul_checked(&kb, true).unwrap();
        assert!(P.equals(Point::mulgen(&(k * Scalar::from_u64(392)))) == 0xFFFFFFFF);
        assert!(Point::BASE.clear_cofactor().equals(Point::mulgen(&Scalar::from_u64(392))) == 0xFFFFFFFF);

        // Unreduced integer: all-ones is 2^256 - 1.
        let P = Point::BASE.mul_checked(&[0xFFu8; 32], false).unwrap();
        let m = Scalar::decode_reduce(&[0xFFu8; 32]);
        assert!(P.equals(Point::mulgen(&m)) == 0xFFFFFFFF);

        // A point that is not on the curve is rejected.
        let Q = Point(super::PointExt::from_affine(&GF254::ONE, &GF254::ONE));
        assert!(!Q.is_on_curve_vartime());
        match Q.mul_checked(&kb, true) {
            Err(Error::InvalidPoint) => (),
            _ => panic!("invalid point accepted"),
        }
        assert!(Q.mul_add_mulgen_vartime(&k, &k).is_err());
    }

    #[test]
    fn mul_add_mulgen() {
        for i in 0..10 {
            let u = rand_scalar(400 + 3 * i);
            let v = rand_scalar(401 + 3 * i);
            let Q = Point::mulgen(&rand_scalar(402 + 3 * i));
            let R1 = Q.mul_add_mulgen_vartime(&u, &v).unwrap();
            let R2 = Q * u + Point::mulgen(&v);
            assert!(R1.equals(R2) == 0xFFFFFFFF);

            let R1 = Q.mul_add_mulgen_vartime(&Scalar::ZERO, &v).unwrap();
            assert!(R1.equals(Point::BASE * v) == 0xFFFFFFFF);
            let R1 = Q.mul_add_mulgen_vartime(&u, &Scalar::ZERO).unwrap();
            assert!(R1.equals(Q * u) == 0xFFFFFFFF);
        }
        let R = Point::BASE.mul_add_mulgen_vartime(&Scalar::ONE, &Scalar::MINUS_ONE).unwrap();
        assert!(R.isneutral() == 0xFFFFFFFF);
    }
}

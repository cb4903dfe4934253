// Module gf127 defines GF127 (integers modulo p = 2^127 - 1, with two
// 64-bit limbs) and GF254, the quadratic extension GF(p^2) = GF(p)[i]
// with i^2 = -1, over which the FourQ curve is defined.
pub mod gf127;
pub use gf127::{GF127, GF254};

// Limb helpers shared by the field and scalar implementations. On x86_64
// the carry chains map to the adc/sbb intrinsics; other architectures
// go through 128-bit arithmetic.

// (x, y, c_in) -> (x + y + c_in mod 2^64, c_out); carries are 0 or 1.

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub(crate) fn addcarry_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    use core::arch::x86_64::_addcarry_u64;
    unsafe {
        let mut d = 0u64;
        let cc = _addcarry_u64(c, x, y, &mut d);
        (d, cc)
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
pub(crate) const fn addcarry_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    let z = (x as u128).wrapping_add(y as u128).wrapping_add(c as u128);
    (z as u64, (z >> 64) as u8)
}

// (x, y, c_in) -> (x - y - c_in mod 2^64, c_out); borrows are 0 or 1.

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub(crate) fn subborrow_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    use core::arch::x86_64::_subborrow_u64;
    unsafe {
        let mut d = 0u64;
        let cc = _subborrow_u64(c, x, y, &mut d);
        (d, cc)
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
pub(crate) const fn subborrow_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    let z = (x as u128).wrapping_sub(y as u128).wrapping_sub(c as u128);
    (z as u64, (z >> 127) as u8)
}

// x*y as (lo, hi).
#[inline(always)]
pub(crate) const fn umull(x: u64, y: u64) -> (u64, u64) {
    let z = (x as u128) * (y as u128);
    (z as u64, (z >> 64) as u64)
}

// x*y + z1 + z2 as (lo, hi); this cannot overflow 128 bits.
#[inline(always)]
pub(crate) const fn umull_add2(x: u64, y: u64, z1: u64, z2: u64) -> (u64, u64) {
    let t = ((x as u128) * (y as u128))
        .wrapping_add(z1 as u128).wrapping_add(z2 as u128);
    (t as u64, (t >> 64) as u64)
}

// x1*y1 + x2*y2 as (lo, hi). The sum MUST fit on 128 bits.
#[inline(always)]
pub(crate) const fn umull_x2(x1: u64, y1: u64, x2: u64, y2: u64) -> (u64, u64) {
    let z1 = (x1 as u128) * (y1 as u128);
    let z2 = (x2 as u128) * (y2 as u128);
    let z = z1.wrapping_add(z2);
    (z as u64, (z >> 64) as u64)
}

//! Architecture-specific implementations of finite fields.
//!
//! This module provides type aliases for the structures that implement
//! the finite fields used by the FourQ curve: the base field GF(p) with
//! the Mersenne prime p = 2^127 - 1, and its quadratic extension
//! GF(p^2) = GF(p)[i] with i^2 = -1. The implementation uses 64-bit limbs;
//! on 32-bit architectures, multiplications over 64-bit words are
//! delegated to the compiler, which may or may not yield constant-time
//! code.
//!
//! In general, the following properties apply to the field implementations:
//!
//!  - An instance encapsulates a field element. Internally, base field
//!    elements may hold the value p itself, which is an alternate
//!    representation of zero; all encodings and comparisons normalize
//!    values first, so this is invisible to callers.
//!
//!  - The constant values `Self::ZERO` and `Self::ONE` contain the
//!    elements of value 0 and 1, respectively.
//!
//!  - Usual arithmetic operators can be used on field elements (`+`, `-`,
//!    `*`, `/`, and the compound assignments `+=`, `-=`, `*=` and `/=`).
//!    Division by zero is tolerated, and yields zero (regardless of the
//!    dividend). Operators can use both the raw types, and references
//!    thereof.
//!
//!  - Function `set_square(&mut self)` squares a field element (in place).
//!    Corresponding function `square(self) -> Self` returns the result
//!    as a new instance. Sequences of multiple squarings can be performed
//!    with `set_xsquare(&mut self, n: u32)` (and a corresponding `xsquare()`
//!    to get the result as a new instance).
//!
//!  - Function `set_neg(&mut self)` negates the instance on which it is
//!    applied.
//!
//!  - Function `set_cond(&mut self, a: &Self, ctl: u32)` sets
//!    the instance to the value of the other instance `a` if `ctl` is
//!    equal to 0xFFFFFFFF, or leaves the instance value unmodified if
//!    `ctl` is equal to 0x00000000. Functions `select()` and `cswap()`
//!    are the selection and conditional swap variants.
//!
//!  - Functions `half()` and `mul2()` multiply by 1/2 and 2, respectively.
//!
//!  - Constant values can be defined with the const-qualified `w64le()`
//!    function, which takes the value as 64-bit limbs in little-endian
//!    order. Values are implicitly reduced modulo p.
//!
//!  - Function `equals(self, rhs: Self) -> u32` returns 0xFFFFFFFF
//!    if `self` and `rhs` represent the same value, or 0x00000000
//!    otherwise. Function `iszero(self) -> u32` is a specialized
//!    subcase that compares `self` with zero.
//!
//!  - Inversion of a base field element uses a fixed addition chain
//!    (exponentiation to p - 2). Inversion in the extension goes through
//!    the norm, so that only one base field inversion is needed.
//!
//!  - Encoding functions (`encode16()` for GF(p), `encode32()` for
//!    GF(p^2)) use unsigned little-endian convention and are always
//!    canonical. Decoding functions (`decode16()`, `decode32()`) reject
//!    non-canonical inputs; they report the outcome as a `u32` mask,
//!    in a constant-time way.

pub mod w64;

/// Finite field: integers modulo p = 2^127 - 1.
pub type GF127 = w64::GF127;

/// Finite field GF(p^2), quadratic extension of `GF127` with i^2 = -1.
pub type GF254 = w64::GF254;

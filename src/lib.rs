//! FourQ is a library implementing the FourQ elliptic curve.
//!
//! FourQ is a twisted Edwards curve defined over GF(p^2), for the
//! Mersenne prime p = 2^127 - 1. It provides about 128 bits of security,
//! and it is equipped with two efficiently computable endomorphisms which
//! allow splitting scalar multiplications into four shorter ones. This
//! crate implements the field arithmetic, the group operations, and three
//! scalar multiplication routines (variable base, fixed base with
//! precomputed combs, and a variable-time double-base combination for
//! signature verification), along with the canonical 32-byte point
//! encoding.
//!
//! On top of the curve, two protocols are provided:
//!
//!  - `schnorrq`: SchnorrQ signatures (with SHA-512).
//!  - `ecdh`: Diffie-Hellman key agreement with cofactor clearing.
//!
//! The base field and its extension are in `field` (implementations are
//! in `backend`); the integers modulo the prime subgroup order are in
//! `scalar`; curve points are in `fourq`.
//!
//! # Usage
//!
//! The library is "mostly `no_std`". By default, it compiles against the
//! standard library. It can be compiled in `no_std` mode; SchnorrQ then
//! needs the `alloc` feature, since messages are hashed from a heap
//! buffer. Protocol modules are gated by features `schnorrq` and `ecdh`
//! (both enabled by default through `omnes`).
//!
//! # Conventions
//!
//! All implemented functions should be strictly constant-time, unless
//! explicitly documented otherwise (non-constant-time functions normally
//! have "vartime" in their name). In order to avoid unwanted side-channel
//! leaks, Booleans are avoided (compilers tend to "optimize" things a bit
//! too eagerly when handling `bool` values). All functions that return or
//! use a potentially secret Boolean value use the `u32` type; the convention
//! is that 0xFFFFFFFF means "true", and 0x00000000 means "false". No other
//! value shall be used, for they would lead to unpredictable results.
//! Similarly, the `Eq` or `PartialEq` traits are not implemented on field
//! elements, scalars and points.
//!
//! Algebraic operations on field elements, scalars and curve points are
//! performed with the usual operators (e.g. `+`). Functions that modify
//! the object on which they are called have a name in `set_*()` (e.g.
//! `P.set_double()` doubles the point `P` in place, while `P.double()`
//! returns the double as a new instance).
//!
//! Protocol-level functions report failures with `Error`; secret
//! intermediate values are zeroized before returning, on all paths.
//! Rejections are logged at debug level through the `log` facade.

#![no_std]

#[cfg(all(feature = "alloc", not(feature = "std")))]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

#[cfg(all(feature = "alloc", not(feature = "std")))]
pub(crate) use alloc::vec::Vec;

#[cfg(feature = "std")]
pub(crate) use std::vec::Vec;

pub use rand_core::{CryptoRng, RngCore, Error as RngError};

macro_rules! static_assert {
    ($condition:expr) => {
        let _ = &[()][1 - ($condition) as usize];
    }
}

pub mod backend;
pub mod field;
pub mod scalar;
pub mod fourq;
pub mod error;

#[cfg(feature = "alloc")]
mod scratch;

#[cfg(feature = "schnorrq")]
pub mod schnorrq;

#[cfg(feature = "ecdh")]
pub mod ecdh;

pub use error::{Error, Result};

//! Finite fields.
//!
//! This module defines the finite fields used by the FourQ curve: the
//! base field GF(2^127 - 1) and its quadratic extension. These are
//! re-exports of the backend-provided types.

pub use crate::backend::{GF127, GF254};

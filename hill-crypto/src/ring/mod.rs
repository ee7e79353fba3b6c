//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing finite rings Z_n and performing
//! modular arithmetic, plus the free integer helpers the matrix engine builds on.

pub mod helper;
pub mod math;

pub use helper::{extended_gcd, gcd, is_unit, modular_inverse, residue};
pub use math::Ring;
